//! Ordered duck color palette
//!
//! Ducks are colored `palette[index % color_count]`, so the order here is
//! part of the seeded puzzle layout.

use serde::{Deserialize, Serialize};

/// (name, hex) pairs, ten entries to cover the maximum color count
pub const PALETTE: [(&str, &str); 10] = [
    ("red", "#ef4444"),
    ("blue", "#3b82f6"),
    ("green", "#22c55e"),
    ("yellow", "#eab308"),
    ("purple", "#a855f7"),
    ("orange", "#f97316"),
    ("pink", "#ec4899"),
    ("cyan", "#06b6d4"),
    ("lime", "#84cc16"),
    ("brown", "#92400e"),
];

/// Index into [`PALETTE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DuckColor(pub u8);

impl DuckColor {
    /// Color for the `index`-th placed duck when `color_count` colors are in play
    pub fn cycle(index: usize, color_count: u32) -> Self {
        let count = (color_count as usize).clamp(1, PALETTE.len());
        DuckColor((index % count) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn name(self) -> &'static str {
        PALETTE[self.index() % PALETTE.len()].0
    }

    pub fn hex(self) -> &'static str {
        PALETTE[self.index() % PALETTE.len()].1
    }
}
