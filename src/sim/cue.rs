//! Cue charge and release state machine
//!
//! Hold to charge, release to launch. Power and draw-back rise along an
//! exponential ease-out over the charge window, then the release turns the
//! banked power into a velocity change on the target body, opposite the aim
//! direction. Time never comes from a clock here: the host passes its
//! timestamps into [`Cue::start_charge`] and [`Cue::tick`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::state::Body;
use crate::consts::{
    CUE_CHARGE_MS, CUE_EASE_K, CUE_MASS, CUE_MAX_DRAWBACK, CUE_MAX_POWER, CUE_MIN_POWER,
};
use crate::heading_deg;

/// Charge phase; the start timestamp lives inside the variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CuePhase {
    /// No charge in progress
    Idle,
    /// Charging since `since_ms` on the host clock
    Charging { since_ms: f64 },
}

/// A cue aimed at one target body
///
/// The cue never holds its target; the host passes the body into
/// [`Cue::release`], so one cue can serve whichever body the host points
/// it at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cue {
    phase: CuePhase,
    /// Banked power, 0 when idle
    power: f64,
    /// How far the stick is drawn back, for rendering
    drawback: f64,
    /// Unit aim vector, target toward pointer
    dir: DVec2,
    /// Aim heading in degrees [0, 360); None until aimed, cleared on release
    angle_deg: Option<f64>,
}

impl Default for Cue {
    fn default() -> Self {
        Self::new()
    }
}

impl Cue {
    /// A new idle cue aiming along +x
    pub fn new() -> Self {
        Self {
            phase: CuePhase::Idle,
            power: 0.0,
            drawback: 0.0,
            dir: DVec2::X,
            angle_deg: None,
        }
    }

    /// Begin charging at host time `now_ms`. Ignored while a charge is
    /// already running, so a held button keeps its original start time.
    pub fn start_charge(&mut self, now_ms: f64) {
        if self.is_charging() {
            return;
        }
        self.phase = CuePhase::Charging { since_ms: now_ms };
        self.power = CUE_MIN_POWER;
        self.drawback = 0.0;
    }

    /// Recompute power and draw-back from the elapsed charge time.
    /// No-op while idle.
    pub fn tick(&mut self, now_ms: f64) {
        let CuePhase::Charging { since_ms } = self.phase else {
            return;
        };
        let t = ((now_ms - since_ms) / CUE_CHARGE_MS).clamp(0.0, 1.0);
        self.power = ease_out_exp(t, CUE_MIN_POWER, CUE_MAX_POWER);
        self.drawback = ease_out_exp(t, 0.0, CUE_MAX_DRAWBACK);
    }

    /// Release the charge into `target`: the banked power becomes a
    /// velocity change of `power * CUE_MASS / target.mass()` opposite the
    /// aim direction. Clears the charge and the aim angle. No-op while
    /// idle.
    pub fn release(&mut self, target: &mut Body) {
        if !self.is_charging() {
            return;
        }
        let speed = self.power * CUE_MASS / target.mass();
        target.vel -= self.dir * speed;

        self.phase = CuePhase::Idle;
        self.power = 0.0;
        self.drawback = 0.0;
        self.angle_deg = None;
    }

    /// Re-aim from the target's position toward the pointer. Works in both
    /// phases. A zero-length aim vector keeps the previous aim.
    pub fn update_direction(&mut self, target_pos: DVec2, pointer_pos: DVec2) {
        let aim = pointer_pos - target_pos;
        let len = aim.length();
        if len == 0.0 {
            return;
        }
        self.dir = aim / len;
        self.angle_deg = Some(heading_deg(self.dir));
    }

    #[inline]
    pub fn is_charging(&self) -> bool {
        matches!(self.phase, CuePhase::Charging { .. })
    }

    #[inline]
    pub fn phase(&self) -> CuePhase {
        self.phase
    }

    #[inline]
    pub fn power(&self) -> f64 {
        self.power
    }

    #[inline]
    pub fn drawback(&self) -> f64 {
        self.drawback
    }

    /// Current unit aim vector, target toward pointer
    #[inline]
    pub fn direction(&self) -> DVec2 {
        self.dir
    }

    #[inline]
    pub fn angle_deg(&self) -> Option<f64> {
        self.angle_deg
    }

    /// Snapshot for rendering the stick and power meter
    pub fn view(&self) -> CueView {
        CueView {
            angle_deg: self.angle_deg,
            drawback: self.drawback,
            power: self.power,
        }
    }
}

/// What a renderer needs to draw the cue
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CueView {
    pub angle_deg: Option<f64>,
    pub drawback: f64,
    pub power: f64,
}

/// Exponential ease-out from `min` toward `max`: fast early growth that
/// flattens as `t` approaches 1. At t = 1 the curve sits just short of
/// `max`, by a factor of e^-K.
#[inline]
fn ease_out_exp(t: f64, min: f64, max: f64) -> f64 {
    max - (max - min) * (-CUE_EASE_K * t).exp()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn power_is_monotonic_in_time(
            t1 in 0.0..3000.0f64,
            t2 in 0.0..3000.0f64,
        ) {
            let (early, late) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            let mut cue = Cue::new();
            cue.start_charge(0.0);

            cue.tick(early);
            let power_early = cue.power();
            let drawback_early = cue.drawback();

            cue.tick(late);
            prop_assert!(cue.power() >= power_early);
            prop_assert!(cue.drawback() >= drawback_early);
        }

        #[test]
        fn power_stays_in_range_while_charging(t in 0.0..10_000.0f64) {
            let mut cue = Cue::new();
            cue.start_charge(0.0);
            cue.tick(t);

            prop_assert!(cue.power() >= CUE_MIN_POWER);
            prop_assert!(cue.power() <= CUE_MAX_POWER);
            prop_assert!(cue.drawback() >= 0.0);
            prop_assert!(cue.drawback() <= CUE_MAX_DRAWBACK);
        }

        #[test]
        fn release_momentum_matches_power(
            r in 0.3..3.0f64,
            charge_ms in 0.0..2000.0f64,
            px in -10.0..10.0f64,
            py in -10.0..10.0f64,
        ) {
            prop_assume!(px != 0.0 || py != 0.0);
            let mut cue = Cue::new();
            let mut target = Body::new(DVec2::ZERO, r);

            cue.update_direction(target.pos, DVec2::new(px, py));
            cue.start_charge(0.0);
            cue.tick(charge_ms);
            let power = cue.power();

            cue.release(&mut target);
            // The velocity change carries power * CUE_MASS of momentum
            let momentum = target.momentum().length();
            prop_assert!((momentum - power * CUE_MASS).abs() <= 1e-9 * power * CUE_MASS);
        }
    }
}
