//! Error taxonomy
//!
//! Everything that can go wrong happens at session start or while loading
//! settings. Ticking a running session never fails.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("could only place {placed} of {requested} ducks ({attempts} attempts for the last one); board is too crowded")]
    InfeasibleDensity {
        placed: usize,
        requested: usize,
        attempts: u32,
    },

    #[error("failed to parse settings: {source}")]
    Settings {
        #[from]
        source: serde_json::Error,
    },

    #[error("failed to read settings from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl GameError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GameError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
