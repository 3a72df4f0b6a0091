//! Physics step
//!
//! One tick runs five stages in a fixed order, each seeing the state left by
//! the previous one:
//! 1. pointer repulsion
//! 2. duck-duck repulsion
//! 3. integration (move, damp, cap speed)
//! 4. wall reflection
//! 5. pairwise elastic collision
//!
//! followed by a containment pass that keeps every circle on the board.

use glam::DVec2;

use super::collision::{contain, reflect_walls, resolve_collisions};
use super::state::{Bounds, Duck};
use crate::direction_and_distance;
use crate::settings::PhysicsParams;

/// Per-tick input, read once at the start of the tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer/touch position, `None` when nothing is pressed or hovering
    pub pointer: Option<DVec2>,
}

impl TickInput {
    pub fn pointer(x: f64, y: f64) -> Self {
        Self {
            pointer: Some(DVec2::new(x, y)),
        }
    }
}

/// Advance all ducks by one tick
pub fn step(ducks: &mut [Duck], input: &TickInput, bounds: &Bounds, params: &PhysicsParams) {
    if let Some(pointer) = input.pointer {
        apply_pointer_repulsion(ducks, pointer, params);
    }
    apply_duck_repulsion(ducks, params);
    integrate(ducks, params);
    reflect_walls(ducks, bounds, params);
    resolve_collisions(ducks, params);
    contain(ducks, bounds);
}

/// Push ducks within `pointer_radius` away from the pointer
pub fn apply_pointer_repulsion(ducks: &mut [Duck], pointer: DVec2, params: &PhysicsParams) {
    for duck in ducks.iter_mut() {
        let Some((dir, distance)) = direction_and_distance(duck.pos - pointer) else {
            continue;
        };
        if distance < params.pointer_radius {
            let force =
                (params.pointer_radius - distance) / params.pointer_radius * params.pointer_strength;
            duck.vel += dir * force;
        }
    }
}

/// Soft repulsion between overlapping-range ducks, over every ordered pair.
///
/// Impulses are applied in place, so later pairs see velocities already
/// nudged by earlier ones. Positions do not move in this stage, so the
/// distances are unaffected.
pub fn apply_duck_repulsion(ducks: &mut [Duck], params: &PhysicsParams) {
    let range = params.diameter();
    for i in 0..ducks.len() {
        for j in 0..ducks.len() {
            if i == j {
                continue;
            }
            let Some((dir, distance)) = direction_and_distance(ducks[i].pos - ducks[j].pos) else {
                continue;
            };
            if distance < range {
                let force = params
                    .max_force
                    .min((range - distance) / range * params.repulsion_strength);
                ducks[i].vel += dir * force;
            }
        }
    }
}

/// Move by velocity, then damp, then cap speed
pub fn integrate(ducks: &mut [Duck], params: &PhysicsParams) {
    for duck in ducks.iter_mut() {
        duck.pos += duck.vel;
        duck.vel *= params.damping;

        let speed = duck.vel.length();
        if speed > params.max_speed {
            duck.vel = duck.vel / speed * params.max_speed;
        }
    }
}
