//! Carom - deterministic 2D circle dynamics
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, integration, collisions, cue)
//! - `scenario`: Seeded demo scene builders
//! - `tuning`: Data-driven simulation balance
//!
//! The kernel is host-driven: callers advance it with [`sim::Scene::step`]
//! (or [`sim::step_simulation`] on a raw body slice) at a fixed cadence and
//! read back snapshots for rendering. Scheduling, input, and drawing all
//! stay outside.

pub mod scenario;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Cue charge window, milliseconds from press to full power
    pub const CUE_CHARGE_MS: f64 = 1500.0;
    /// Exponent of the charge ease-out curve
    pub const CUE_EASE_K: f64 = 3.0;
    /// Power at the instant the charge starts
    pub const CUE_MIN_POWER: f64 = 10.0;
    /// Power ceiling the charge curve approaches
    pub const CUE_MAX_POWER: f64 = 100.0;
    /// Draw-back travel of the cue stick at full charge
    pub const CUE_MAX_DRAWBACK: f64 = 30.0;
    /// Notional cue mass; release transfers power * CUE_MASS of momentum
    pub const CUE_MASS: f64 = 40.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_deg(mut deg: f64) -> f64 {
    deg %= 360.0;
    if deg < 0.0 {
        deg += 360.0;
    }
    deg
}

/// Heading of a vector in degrees, normalized to [0, 360)
#[inline]
pub fn heading_deg(v: DVec2) -> f64 {
    normalize_deg(v.y.atan2(v.x).to_degrees())
}
