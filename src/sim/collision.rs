//! Collision response for circles on a rectangular board
//!
//! Walls reflect and bleed off most of the normal velocity; duck-duck contacts
//! are equal-mass elastic: the pair is pushed apart along the contact normal
//! and the normal velocity components are exchanged.

use glam::DVec2;

use super::state::{Bounds, Duck};
use crate::direction_and_distance;
use crate::settings::PhysicsParams;

/// Clamp ducks that crossed a wall back inside and reflect that axis'
/// velocity with `wall_restitution`
pub fn reflect_walls(ducks: &mut [Duck], bounds: &Bounds, params: &PhysicsParams) {
    let bounce = params.wall_restitution;
    for duck in ducks.iter_mut() {
        let r = duck.radius;
        if duck.pos.x - r < 0.0 {
            duck.pos.x = r;
            duck.vel.x = -duck.vel.x * bounce;
        }
        if duck.pos.x + r > bounds.width {
            duck.pos.x = bounds.width - r;
            duck.vel.x = -duck.vel.x * bounce;
        }
        if duck.pos.y - r < 0.0 {
            duck.pos.y = r;
            duck.vel.y = -duck.vel.y * bounce;
        }
        if duck.pos.y + r > bounds.height {
            duck.pos.y = bounds.height - r;
            duck.vel.y = -duck.vel.y * bounce;
        }
    }
}

/// Resolve every overlapping unordered pair, in `(i, j)` order with `i < j`
pub fn resolve_collisions(ducks: &mut [Duck], params: &PhysicsParams) {
    let diameter = params.diameter();
    for i in 0..ducks.len() {
        for j in (i + 1)..ducks.len() {
            let (head, tail) = ducks.split_at_mut(j);
            collide_pair(&mut head[i], &mut tail[0], diameter);
        }
    }
}

/// Elastic response for one pair; returns whether they were in contact
pub fn collide_pair(a: &mut Duck, b: &mut Duck, diameter: f64) -> bool {
    let Some((normal, dist)) = direction_and_distance(a.pos - b.pos) else {
        return false;
    };
    if dist >= diameter {
        return false;
    }

    // Split the overlap evenly
    let push = normal * ((diameter - dist) / 2.0);
    a.pos += push;
    b.pos -= push;

    let (va_n, va_t) = decompose(a.vel, normal);
    let (vb_n, vb_t) = decompose(b.vel, normal);
    let tangent = normal.perp();

    a.vel = normal * vb_n + tangent * va_t;
    b.vel = normal * va_n + tangent * vb_t;
    true
}

/// Split a velocity into (normal, tangential) scalar components
#[inline]
fn decompose(vel: DVec2, normal: DVec2) -> (f64, f64) {
    (vel.dot(normal), vel.dot(normal.perp()))
}

/// Keep every circle on the board after collision separation.
///
/// Only positions move; velocities were already settled by the wall and
/// collision stages.
pub fn contain(ducks: &mut [Duck], bounds: &Bounds) {
    for duck in ducks.iter_mut() {
        let r = duck.radius;
        duck.pos.x = duck.pos.x.min(bounds.width - r).max(r);
        duck.pos.y = duck.pos.y.min(bounds.height - r).max(r);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::DuckColor;

    fn duck(x: f64, y: f64, vx: f64, vy: f64) -> Duck {
        let mut d = Duck::new(DVec2::new(x, y), DuckColor(0), 20.0);
        d.vel = DVec2::new(vx, vy);
        d
    }

    #[test]
    fn test_left_wall_bounce() {
        let params = PhysicsParams::default();
        let mut ducks = vec![duck(10.0, 300.0, -5.0, 1.0)];
        reflect_walls(&mut ducks, &Bounds::default(), &params);
        assert_eq!(ducks[0].pos.x, 20.0);
        assert!((ducks[0].vel.x - 1.5).abs() < 1e-12);
        assert_eq!(ducks[0].vel.y, 1.0);
    }

    #[test]
    fn test_corner_bounce() {
        let params = PhysicsParams::default();
        let mut ducks = vec![duck(795.0, 590.0, 4.0, 2.0)];
        reflect_walls(&mut ducks, &Bounds::default(), &params);
        assert_eq!(ducks[0].pos, DVec2::new(780.0, 580.0));
        assert!((ducks[0].vel - DVec2::new(-1.2, -0.6)).length() < 1e-12);
    }

    #[test]
    fn test_head_on_swaps_velocities() {
        let params = PhysicsParams::default();
        let mut ducks = vec![duck(100.0, 100.0, 2.0, 0.0), duck(130.0, 100.0, -3.0, 0.0)];
        resolve_collisions(&mut ducks, &params);

        assert!((ducks[0].vel - DVec2::new(-3.0, 0.0)).length() < 1e-12);
        assert!((ducks[1].vel - DVec2::new(2.0, 0.0)).length() < 1e-12);
        // Overlap of 10 split evenly
        assert!((ducks[0].pos.x - 95.0).abs() < 1e-12);
        assert!((ducks[1].pos.x - 135.0).abs() < 1e-12);
    }

    #[test]
    fn test_oblique_keeps_tangential() {
        let mut a = duck(100.0, 100.0, 1.0, 5.0);
        let mut b = duck(100.0, 130.0, 0.0, -2.0);
        assert!(collide_pair(&mut a, &mut b, 40.0));

        // Normal is vertical: y components swap, x components stay
        assert!((a.vel - DVec2::new(1.0, -2.0)).length() < 1e-12);
        assert!((b.vel - DVec2::new(0.0, 5.0)).length() < 1e-12);
    }

    #[test]
    fn test_momentum_and_energy_conserved() {
        let mut a = duck(100.0, 100.0, 3.0, -1.0);
        let mut b = duck(125.0, 115.0, -2.0, 4.0);
        let p_before = a.vel + b.vel;
        let e_before = a.vel.length_squared() + b.vel.length_squared();
        assert!(collide_pair(&mut a, &mut b, 40.0));
        assert!((a.vel + b.vel - p_before).length() < 1e-9);
        assert!((a.vel.length_squared() + b.vel.length_squared() - e_before).abs() < 1e-9);
    }

    #[test]
    fn test_no_contact() {
        let mut a = duck(100.0, 100.0, 1.0, 0.0);
        let mut b = duck(140.0, 100.0, -1.0, 0.0);
        assert!(!collide_pair(&mut a, &mut b, 40.0));
        assert_eq!(a.vel, DVec2::new(1.0, 0.0));

        let mut c = duck(100.0, 100.0, 1.0, 0.0);
        assert!(!collide_pair(&mut a, &mut c, 40.0));
    }

    #[test]
    fn test_contain_pulls_back() {
        let mut ducks = vec![duck(-3.0, 610.0, 1.0, 1.0)];
        contain(&mut ducks, &Bounds::default());
        assert_eq!(ducks[0].pos, DVec2::new(20.0, 580.0));
        assert_eq!(ducks[0].vel, DVec2::new(1.0, 1.0));
    }
}
