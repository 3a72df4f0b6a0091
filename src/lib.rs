//! Duck Sort - a seeded particle-sorting puzzle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (RNG, placement, physics, cluster check)
//! - `session`: Session state machine driven by a host-provided scheduler
//! - `seed`: Seed parsing plus daily/random seed derivation
//! - `settings`: Serializable game configuration and physics tuning
//! - `palette`: Ordered duck color palette

pub mod error;
pub mod palette;
pub mod seed;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{GameError, Result};
pub use session::{GameResult, Session, SessionPhase, TickOutcome, start_session};
pub use settings::{ConfigCheck, PhysicsParams, Settings};

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Duck radius (all ducks share it)
    pub const DUCK_RADIUS: f64 = 20.0;

    /// Pointer repulsion field
    pub const POINTER_RADIUS: f64 = 100.0;
    pub const POINTER_STRENGTH: f64 = 2.0;

    /// Duck-duck soft repulsion, reaching one collision diameter
    pub const REPULSION_STRENGTH: f64 = 1.5;
    /// Cap on a single duck-duck repulsion impulse
    pub const MAX_FORCE: f64 = 1.0;

    /// Speed cap after integration (units per tick)
    pub const MAX_SPEED: f64 = 8.0;
    /// Per-tick velocity damping
    pub const DAMPING: f64 = 0.99;
    /// Velocity kept (and inverted) on wall contact
    pub const WALL_RESTITUTION: f64 = 0.3;

    /// Same-color neighbour distance for the win check
    pub const CLUSTER_RADIUS: f64 = 60.0;

    /// Default world, matching the classic 800x600 board
    pub const WORLD_WIDTH: f64 = 800.0;
    pub const WORLD_HEIGHT: f64 = 600.0;

    /// Allowed configuration ranges
    pub const MIN_PIECES: u32 = 4;
    pub const MAX_PIECES: u32 = 50;
    pub const MIN_COLORS: u32 = 2;
    pub const MAX_COLORS: u32 = 10;

    /// Rejection-sampling attempts per duck before giving up
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

    /// Random seeds are drawn from [0, RANDOM_SEED_RANGE)
    pub const RANDOM_SEED_RANGE: u32 = 1_000_000_000;
}

/// Map a raw host pointer position to the simulation's pointer input.
///
/// Hosts that track "no pointer" as `(-1, -1)` can pass it straight through:
/// any negative coordinate means the pointer is absent.
#[inline]
pub fn pointer_from_raw(x: f64, y: f64) -> Option<DVec2> {
    if x >= 0.0 && y >= 0.0 {
        Some(DVec2::new(x, y))
    } else {
        None
    }
}

/// Unit direction and length of `delta`, or `None` when the length is zero.
#[inline]
pub fn direction_and_distance(delta: DVec2) -> Option<(DVec2, f64)> {
    let distance = delta.length();
    if distance > 0.0 {
        Some((delta / distance, distance))
    } else {
        None
    }
}
