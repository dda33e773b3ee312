//! Error taxonomy for the simulation core
//!
//! There are no retryable failures in here: the core is a deterministic,
//! synchronous simulation with no I/O. Out-of-range input coordinates are
//! clamped, never rejected.

use std::fmt;

/// Errors the core can surface to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Bad construction-time configuration (non-positive spawn interval,
    /// zero play-area dimensions, ...). Fails fast, never mid-game.
    InvalidConfiguration(String),
    /// Operation invoked after `dispose()`
    AlreadyDisposed,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {reason}")
            }
            GameError::AlreadyDisposed => write!(f, "game already disposed"),
        }
    }
}

impl std::error::Error for GameError {}
