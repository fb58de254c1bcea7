//! Recoverable error types.
//!
//! Rule violations inside the engine (spawning onto a full board, sliding
//! from an out-of-range lock index) are bugs and panic instead.

use thiserror::Error;

/// Invalid `PuzzleConfig`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("four-tile probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("win tile must be positive")]
    ZeroWinTile,
}

/// Unrecognized direction name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction {0:?}, expected up, down, left or right")]
pub struct ParseDirectionError(pub String);
