//! Simulation entities
//!
//! Ducks are plain data; a session owns its `Vec<Duck>` exclusively.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::palette::DuckColor;

/// A colored circular piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Duck {
    pub pos: DVec2,
    pub vel: DVec2,
    pub color: DuckColor,
    pub radius: f64,
}

impl Duck {
    /// A resting duck at `pos`
    pub fn new(pos: DVec2, color: DuckColor, radius: f64) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            color,
            radius,
        }
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Center-to-center distance
    #[inline]
    pub fn distance_to(&self, other: &Duck) -> f64 {
        self.pos.distance(other.pos)
    }

    /// Whether the whole circle lies inside `bounds` (with a little float slack)
    pub fn is_inside(&self, bounds: &Bounds) -> bool {
        const EPS: f64 = 1e-9;
        self.pos.x - self.radius >= -EPS
            && self.pos.y - self.radius >= -EPS
            && self.pos.x + self.radius <= bounds.width + EPS
            && self.pos.y + self.radius <= bounds.height + EPS
    }
}

/// The rectangular board, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a circle of `radius` fits at all
    pub fn fits(&self, radius: f64) -> bool {
        self.width >= 2.0 * radius && self.height >= 2.0 * radius
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: crate::consts::WORLD_WIDTH,
            height: crate::consts::WORLD_HEIGHT,
        }
    }
}
