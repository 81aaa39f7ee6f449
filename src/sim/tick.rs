//! Fixed timestep simulation tick
//!
//! One call advances the whole body set deterministically: integrate, then
//! every unordered pair once, then wall contacts. Scheduling stays with the
//! host.

use super::collision::{resolve_bounds, resolve_pair};
use super::state::{Body, Bounds};

/// Advance one body by one step of symplectic Euler.
///
/// Velocity picks up gravity first, then position moves by the updated
/// velocity. That ordering is what keeps bounce heights stable under
/// gravity; the explicit variant gains energy every step.
/// Accepts any positive `dt`. There is no finiteness check: NaN or
/// infinite position, velocity, or gravity propagates silently through
/// the arithmetic.
pub fn integrate(body: &mut Body, dt: f64) {
    body.vel += body.gravity * dt;
    body.pos += body.vel * dt;
}

/// Run one simulation tick over `bodies` in place: integration, then each
/// unordered pair in ascending (i, j) order, then boundary contacts.
///
/// Pair resolution walks all O(n^2) pairs. Fine at the scale this kernel
/// targets; spatial partitioning is the known next step if body counts
/// grow.
pub fn step_simulation(bodies: &mut [Body], bounds: Bounds, dt: f64, restitution: f64) {
    for body in bodies.iter_mut() {
        integrate(body, dt);
    }

    for i in 0..bodies.len() {
        let (left, right) = bodies.split_at_mut(i + 1);
        let a = &mut left[i];
        for b in right.iter_mut() {
            resolve_pair(a, b, restitution);
        }
    }

    for body in bodies.iter_mut() {
        resolve_bounds(body, bounds, restitution);
    }
}
