//! Boundary and pairwise collision resolution
//!
//! Both resolvers follow the same shape: correct position first, then apply
//! the velocity response along the contact normal scaled by restitution.
//! Tangential velocity components are never touched.

use super::state::{Body, Bounds};

/// Resolve wall contact: clamp `body` inside `bounds` and reflect the
/// velocity component of any wall it crossed, scaled by `restitution`.
///
/// The four walls are checked independently. The x and y axes never
/// interact, so corner hits need no special handling.
pub fn resolve_bounds(body: &mut Body, bounds: Bounds, restitution: f64) {
    let r = body.radius();

    if body.pos.x - r < 0.0 {
        body.pos.x = r;
        body.vel.x = -body.vel.x * restitution;
    }
    if body.pos.x + r > bounds.width {
        body.pos.x = bounds.width - r;
        body.vel.x = -body.vel.x * restitution;
    }
    if body.pos.y - r < 0.0 {
        body.pos.y = r;
        body.vel.y = -body.vel.y * restitution;
    }
    if body.pos.y + r > bounds.height {
        body.pos.y = bounds.height - r;
        body.vel.y = -body.vel.y * restitution;
    }
}

/// Resolve one circle pair: push the bodies apart along the center line,
/// then exchange normal velocity by the one-dimensional restitution
/// formula. Momentum is conserved for any restitution; kinetic energy is
/// conserved at 1 and partially absorbed below it.
///
/// Non-overlapping pairs are left untouched, as are pairs with exactly
/// coincident centers where the contact normal is undefined.
pub fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f64) {
    let mut dir = b.pos - a.pos;
    let d = dir.length();
    let contact = a.radius() + b.radius();
    if d == 0.0 || d > contact {
        return;
    }
    dir /= d;

    // Overlap splits 50/50 along the normal, independent of mass.
    let corr = (contact - d) / 2.0;
    a.pos -= dir * corr;
    b.pos += dir * corr;

    let (m1, m2) = (a.mass(), b.mass());
    let v1 = a.vel.dot(dir);
    let v2 = b.vel.dot(dir);

    let total = m1 * v1 + m2 * v2;
    let new_v1 = (total - m2 * (v1 - v2) * restitution) / (m1 + m2);
    let new_v2 = (total - m1 * (v2 - v1) * restitution) / (m1 + m2);

    a.vel += dir * (new_v1 - v1);
    b.vel += dir * (new_v2 - v2);
}


#[cfg(test)]
mod proptests {
    use super::*;
    use glam::DVec2;
    use proptest::prelude::*;
    use std::f64::consts::TAU;

    /// Build an overlapping pair: `a` at the origin, `b` at `frac` of the
    /// contact distance along `angle`, with the given velocities.
    fn overlapping_pair(
        r1: f64,
        r2: f64,
        angle: f64,
        frac: f64,
        v1: DVec2,
        v2: DVec2,
    ) -> (Body, Body) {
        let d = frac * (r1 + r2);
        let mut a = Body::new(DVec2::ZERO, r1);
        a.vel = v1;
        let mut b = Body::new(DVec2::new(d * angle.cos(), d * angle.sin()), r2);
        b.vel = v2;
        (a, b)
    }

    proptest! {
        #[test]
        fn pair_resolution_conserves_momentum(
            r1 in 0.3..2.0f64,
            r2 in 0.3..2.0f64,
            angle in 0.0..TAU,
            frac in 0.05..1.0f64,
            v1x in -10.0..10.0f64,
            v1y in -10.0..10.0f64,
            v2x in -10.0..10.0f64,
            v2y in -10.0..10.0f64,
            e in 0.0..=1.0f64,
        ) {
            let (mut a, mut b) = overlapping_pair(
                r1, r2, angle, frac,
                DVec2::new(v1x, v1y),
                DVec2::new(v2x, v2y),
            );
            let before = a.momentum() + b.momentum();

            resolve_pair(&mut a, &mut b, e);
            let after = a.momentum() + b.momentum();
            let scale = before.length().max(1.0);
            prop_assert!((after - before).length() <= 1e-9 * scale);
        }

        #[test]
        fn normal_kinetic_energy_never_increases(
            r1 in 0.3..2.0f64,
            r2 in 0.3..2.0f64,
            angle in 0.0..TAU,
            frac in 0.05..1.0f64,
            v1x in -10.0..10.0f64,
            v1y in -10.0..10.0f64,
            v2x in -10.0..10.0f64,
            v2y in -10.0..10.0f64,
            e in 0.0..=1.0f64,
        ) {
            let (mut a, mut b) = overlapping_pair(
                r1, r2, angle, frac,
                DVec2::new(v1x, v1y),
                DVec2::new(v2x, v2y),
            );
            let dir = (b.pos - a.pos).normalize();
            let ke_normal = |a: &Body, b: &Body| {
                0.5 * a.mass() * a.vel.dot(dir).powi(2)
                    + 0.5 * b.mass() * b.vel.dot(dir).powi(2)
            };
            let before = ke_normal(&a, &b);

            resolve_pair(&mut a, &mut b, e);
            let after = ke_normal(&a, &b);
            prop_assert!(after <= before + 1e-9 * before.max(1.0));
        }

        #[test]
        fn overlap_fully_resolved(
            r1 in 0.3..2.0f64,
            r2 in 0.3..2.0f64,
            angle in 0.0..TAU,
            frac in 0.05..1.0f64,
        ) {
            let (mut a, mut b) =
                overlapping_pair(r1, r2, angle, frac, DVec2::ZERO, DVec2::ZERO);
            let contact = r1 + r2;

            resolve_pair(&mut a, &mut b, 1.0);
            let d = (b.pos - a.pos).length();
            prop_assert!((d - contact).abs() <= 1e-9 * contact);
        }

        #[test]
        fn bounds_clamp_contains_body(
            x in -50.0..150.0f64,
            y in -50.0..150.0f64,
            vx in -20.0..20.0f64,
            vy in -20.0..20.0f64,
            r in 0.5..5.0f64,
            e in 0.0..=1.0f64,
        ) {
            let bounds = Bounds::new(100.0, 100.0);
            let mut body = Body::new(DVec2::new(x, y), r);
            body.vel = DVec2::new(vx, vy);

            resolve_bounds(&mut body, bounds, e);
            prop_assert!(body.pos.x >= r && body.pos.x <= bounds.width - r);
            prop_assert!(body.pos.y >= r && body.pos.y <= bounds.height - r);
        }
    }
}
