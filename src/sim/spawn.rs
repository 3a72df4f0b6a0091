//! Seeded initial placement
//!
//! Rejection sampling: each duck draws (x, y) uniformly inside the board,
//! inset by its radius, and redraws while it would overlap an already placed
//! duck. Colors cycle through the palette in placement order.

use glam::DVec2;

use super::rng::Sfc32;
use super::state::{Bounds, Duck};
use crate::error::{GameError, Result};
use crate::palette::DuckColor;

/// What to place and where
#[derive(Debug, Clone, Copy)]
pub struct SpawnParams {
    pub piece_count: usize,
    pub color_count: u32,
    pub bounds: Bounds,
    pub radius: f64,
    /// Attempts allowed per duck before placement is declared infeasible
    pub max_attempts: u32,
}

/// Place `piece_count` resting, non-overlapping ducks
pub fn spawn_ducks(params: &SpawnParams, rng: &mut Sfc32) -> Result<Vec<Duck>> {
    let radius = params.radius;
    let diameter = radius * 2.0;
    let span_x = params.bounds.width - diameter;
    let span_y = params.bounds.height - diameter;

    let mut ducks: Vec<Duck> = Vec::with_capacity(params.piece_count);

    for index in 0..params.piece_count {
        let mut attempts = 0;
        let pos = loop {
            if attempts >= params.max_attempts {
                log::warn!(
                    "Placement stalled at duck {} of {} after {} attempts",
                    index + 1,
                    params.piece_count,
                    attempts
                );
                return Err(GameError::InfeasibleDensity {
                    placed: ducks.len(),
                    requested: params.piece_count,
                    attempts,
                });
            }
            attempts += 1;

            // Draw order (x then y) is part of the seeded layout
            let x = rng.next_f64() * span_x + radius;
            let y = rng.next_f64() * span_y + radius;
            let candidate = DVec2::new(x, y);

            if !ducks.iter().any(|d| d.pos.distance(candidate) < diameter) {
                break candidate;
            }
        };

        if attempts > 1 {
            log::debug!("Duck {} placed after {} attempts", index, attempts);
        }
        ducks.push(Duck::new(
            pos,
            DuckColor::cycle(index, params.color_count),
            radius,
        ));
    }

    Ok(ducks)
}
