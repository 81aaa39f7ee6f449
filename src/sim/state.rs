//! Scene state and core simulation types
//!
//! Everything a host needs to snapshot, persist, or rebuild a running scene
//! lives here.

use std::f64::consts::PI;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned world rectangle with its lower-left corner at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "bounds must be positive");
        Self { width, height }
    }
}

/// A circular rigid body
///
/// `pos`, `vel`, `gravity`, and `color` are free for the host and the tick
/// to mutate. `radius` is fixed at construction and `mass` is derived from
/// it (disc area, pi * r^2), so both are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Per-body acceleration, applied every integration step
    #[serde(default)]
    pub gravity: DVec2,
    /// Opaque tag for the host's palette lookup
    #[serde(default)]
    pub color: u32,
    radius: f64,
    mass: f64,
}

impl Body {
    /// Create a body at rest with no gravity. Radius must be positive.
    pub fn new(pos: DVec2, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            pos,
            vel: DVec2::ZERO,
            gravity: DVec2::ZERO,
            color: 0,
            radius,
            mass: PI * radius * radius,
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Disc-area mass (pi * r^2)
    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Kinetic energy, 0.5 * m * |v|^2
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }

    /// Momentum, m * v
    #[inline]
    pub fn momentum(&self) -> DVec2 {
        self.mass * self.vel
    }
}

/// World bounds plus the bodies inside them
///
/// Body order is the deterministic tick order: pairs resolve in ascending
/// (i, j) index order and indices stay stable because bodies are never
/// removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub bounds: Bounds,
    /// Restitution [`Scene::step`] applies to wall and pair contacts alike
    /// (1 = elastic, 0 = all normal velocity absorbed)
    pub restitution: f64,
    pub bodies: Vec<Body>,
}

impl Scene {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            restitution: 1.0,
            bodies: Vec::new(),
        }
    }

    /// Add a body and return its index
    pub fn add_body(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Advance one fixed step using the scene's stored restitution
    pub fn step(&mut self, dt: f64) {
        super::tick::step_simulation(&mut self.bodies, self.bounds, dt, self.restitution);
    }

    /// Snapshot of every body for rendering
    pub fn body_views(&self) -> Vec<BodyView> {
        self.bodies.iter().map(BodyView::of).collect()
    }

    /// Total kinetic energy over the body set
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Total momentum over the body set
    pub fn momentum(&self) -> DVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }
}

/// What a renderer needs to draw one body
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BodyView {
    pub pos: DVec2,
    pub radius: f64,
    pub color: u32,
}

impl BodyView {
    fn of(body: &Body) -> Self {
        Self {
            pos: body.pos,
            radius: body.radius,
            color: body.color,
        }
    }
}
