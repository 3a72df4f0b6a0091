//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (placement order)
//! - No wall-clock, rendering or platform dependencies

pub mod cluster;
pub mod collision;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use cluster::{is_sorted, unsorted_colors};
pub use collision::{collide_pair, contain, reflect_walls, resolve_collisions};
pub use rng::Sfc32;
pub use spawn::{SpawnParams, spawn_ducks};
pub use state::{Bounds, Duck};
pub use tick::{TickInput, apply_duck_repulsion, apply_pointer_repulsion, integrate, step};
