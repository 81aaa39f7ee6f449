//! Seeded demo scene builders
//!
//! Each builder reproduces one demo variant deterministically from a seed.
//! Hosts pick a scenario, build it, and drive the returned scene; the cue
//! comes along only for the billiards variant.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Body, Bounds, Cue, Scene};
use crate::tuning::Tuning;

/// Box size for the gravity and mix scenarios
const WORLD_WIDTH: f64 = 800.0;
const WORLD_HEIGHT: f64 = 600.0;

/// Palette slots the host may map to actual colors
const PALETTE_SLOTS: u32 = 6;

/// Which demo scene to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Balls rain into a fully elastic box
    FallingBalls,
    /// Same box with energy-absorbing walls
    DampedBox,
    /// Dense zero-gravity field where pair collisions dominate
    CollisionMix,
    /// Racked triangle and a cue ball waiting for the launch
    Billiards,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::FallingBalls,
        Scenario::DampedBox,
        Scenario::CollisionMix,
        Scenario::Billiards,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "falling" => Some(Self::FallingBalls),
            "damped" => Some(Self::DampedBox),
            "mix" => Some(Self::CollisionMix),
            "billiards" => Some(Self::Billiards),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::FallingBalls => "falling",
            Self::DampedBox => "damped",
            Self::CollisionMix => "mix",
            Self::Billiards => "billiards",
        }
    }
}

/// A built scene plus the cue for scenarios that have one
#[derive(Debug, Clone)]
pub struct DemoScene {
    pub scene: Scene,
    pub cue: Option<Cue>,
    /// Index of the cue's target in `scene.bodies`
    pub cue_target: Option<usize>,
}

/// Build a scenario deterministically from its seed
pub fn build(scenario: Scenario, tuning: &Tuning, seed: u64) -> DemoScene {
    let demo = match scenario {
        Scenario::FallingBalls => falling_balls(tuning, seed),
        Scenario::DampedBox => damped_box(tuning, seed),
        Scenario::CollisionMix => collision_mix(seed),
        Scenario::Billiards => billiards(seed),
    };
    log::info!(
        "built {} scenario: {} bodies, seed {}",
        scenario.name(),
        demo.scene.bodies.len(),
        seed
    );
    demo
}

fn falling_balls(tuning: &Tuning, seed: u64) -> DemoScene {
    let mut scene = Scene::new(Bounds::new(WORLD_WIDTH, WORLD_HEIGHT));
    scene.restitution = tuning.restitution;
    let mut rng = Pcg32::seed_from_u64(seed);

    for _ in 0..12 {
        let radius = rng.random_range(10.0..24.0);
        let x = rng.random_range(radius..WORLD_WIDTH - radius);
        // Spawn in the upper half so there is room to fall
        let y = rng.random_range(WORLD_HEIGHT * 0.5..WORLD_HEIGHT - radius);
        let mut body = Body::new(DVec2::new(x, y), radius);
        body.vel = DVec2::new(rng.random_range(-60.0..60.0), 0.0);
        body.gravity = tuning.gravity;
        body.color = rng.random_range(0..PALETTE_SLOTS);
        scene.add_body(body);
    }

    DemoScene {
        scene,
        cue: None,
        cue_target: None,
    }
}

fn damped_box(tuning: &Tuning, seed: u64) -> DemoScene {
    let mut demo = falling_balls(tuning, seed);
    demo.scene.restitution = 0.9;
    demo
}

fn collision_mix(seed: u64) -> DemoScene {
    let mut scene = Scene::new(Bounds::new(WORLD_WIDTH, WORLD_HEIGHT));
    let mut rng = Pcg32::seed_from_u64(seed);

    for _ in 0..16 {
        let radius = rng.random_range(8.0..20.0);
        let x = rng.random_range(radius..WORLD_WIDTH - radius);
        let y = rng.random_range(radius..WORLD_HEIGHT - radius);
        let speed = rng.random_range(80.0..240.0);
        let angle = rng.random_range(0.0..std::f64::consts::TAU);
        let mut body = Body::new(DVec2::new(x, y), radius);
        body.vel = DVec2::new(speed * angle.cos(), speed * angle.sin());
        body.color = rng.random_range(0..PALETTE_SLOTS);
        scene.add_body(body);
    }

    DemoScene {
        scene,
        cue: None,
        cue_target: None,
    }
}

fn billiards(seed: u64) -> DemoScene {
    // Tighter bounds and small balls: a full-charge break moves the cue
    // ball at roughly 75 units/s, enough to cross this table in seconds
    let table = Bounds::new(400.0, 240.0);
    let mut scene = Scene::new(table);
    scene.restitution = 0.9;
    let mut rng = Pcg32::seed_from_u64(seed);

    let radius = 4.0;
    let mut cue_ball = Body::new(DVec2::new(table.width * 0.25, table.height * 0.5), radius);
    cue_ball.color = 0;
    let cue_target = scene.add_body(cue_ball);

    // Four-row triangle racked apex-first toward the cue ball
    let apex = DVec2::new(table.width * 0.62, table.height * 0.5);
    let gap = 2.0 * radius + 0.5;
    let row_step = gap * (3.0f64.sqrt() / 2.0);
    for row in 0..4 {
        for slot in 0..=row {
            let x = apex.x + row as f64 * row_step;
            let y = apex.y + (slot as f64 - row as f64 / 2.0) * gap;
            let mut ball = Body::new(DVec2::new(x, y), radius);
            ball.color = 1 + rng.random_range(0..PALETTE_SLOTS - 1);
            scene.add_body(ball);
        }
    }

    DemoScene {
        scene,
        cue: Some(Cue::new()),
        cue_target: Some(cue_target),
    }
}
