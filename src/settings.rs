//! Game settings and physics tuning
//!
//! Loaded from JSON when a host wants to override the defaults; every field
//! falls back to its default when absent.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};
use crate::sim::Bounds;

/// Physics tunables (units are board pixels and ticks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Duck radius
    pub radius: f64,
    /// Pointer field reach
    pub pointer_radius: f64,
    /// Pointer impulse at zero distance
    pub pointer_strength: f64,
    /// Duck-duck impulse at zero distance, before the `max_force` cap
    pub repulsion_strength: f64,
    pub max_force: f64,
    pub max_speed: f64,
    pub damping: f64,
    pub wall_restitution: f64,
    /// Same-color neighbour distance for the win check
    pub cluster_radius: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            radius: DUCK_RADIUS,
            pointer_radius: POINTER_RADIUS,
            pointer_strength: POINTER_STRENGTH,
            repulsion_strength: REPULSION_STRENGTH,
            max_force: MAX_FORCE,
            max_speed: MAX_SPEED,
            damping: DAMPING,
            wall_restitution: WALL_RESTITUTION,
            cluster_radius: CLUSTER_RADIUS,
        }
    }
}

impl PhysicsParams {
    /// Collision diameter, also the reach of duck-duck repulsion
    #[inline]
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

/// Result of validating piece/color counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCheck {
    /// Playable
    Ok,
    /// One duck per color: allowed, but the session can never be won
    Unwinnable,
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub piece_count: u32,
    pub color_count: u32,
    pub width: f64,
    pub height: f64,
    /// Rejection-sampling attempts per duck during placement
    pub max_placement_attempts: u32,
    pub physics: PhysicsParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            piece_count: 8,
            color_count: 3,
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            physics: PhysicsParams::default(),
        }
    }
}

impl Settings {
    /// Settings with the given counts and everything else defaulted
    pub fn with_counts(piece_count: u32, color_count: u32) -> Self {
        Self {
            piece_count,
            color_count,
            ..Self::default()
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Clamp counts into their allowed ranges, as a number input would
    pub fn clamped(mut self) -> Self {
        self.piece_count = self.piece_count.clamp(MIN_PIECES, MAX_PIECES);
        self.color_count = self.color_count.clamp(MIN_COLORS, MAX_COLORS);
        self
    }

    /// Validate counts and board size
    pub fn check(&self) -> Result<ConfigCheck> {
        if !(MIN_PIECES..=MAX_PIECES).contains(&self.piece_count) {
            return Err(GameError::invalid(format!(
                "piece count {} outside {MIN_PIECES}..={MAX_PIECES}",
                self.piece_count
            )));
        }
        if !(MIN_COLORS..=MAX_COLORS).contains(&self.color_count) {
            return Err(GameError::invalid(format!(
                "color count {} outside {MIN_COLORS}..={MAX_COLORS}",
                self.color_count
            )));
        }
        if self.color_count > self.piece_count {
            return Err(GameError::invalid(format!(
                "color count {} exceeds piece count {}",
                self.color_count, self.piece_count
            )));
        }
        let p = &self.physics;
        if !(p.radius > 0.0) || !self.bounds().fits(p.radius) {
            return Err(GameError::invalid(format!(
                "board {}x{} cannot hold a duck of radius {}",
                self.width, self.height, p.radius
            )));
        }
        if !(p.max_speed > 0.0) {
            return Err(GameError::invalid("max speed must be positive"));
        }
        // Contacts keep centers a diameter apart, so a smaller radius never clusters
        if !(p.cluster_radius > p.diameter()) {
            return Err(GameError::invalid(format!(
                "cluster radius {} must exceed the duck diameter {}",
                p.cluster_radius,
                p.diameter()
            )));
        }
        if self.max_placement_attempts == 0 {
            return Err(GameError::invalid("max placement attempts must be at least 1"));
        }
        if self.color_count == self.piece_count {
            return Ok(ConfigCheck::Unwinnable);
        }
        Ok(ConfigCheck::Ok)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(GameError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
