//! Core value types: boards, directions, RNG, configuration, errors.

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;

pub use board::{Board, Position, Row, ROW_LEN};
pub use config::{PuzzleConfig, FOUR_PROBABILITY, WIN_TILE};
pub use direction::Direction;
pub use error::{ConfigError, ParseDirectionError};
pub use rng::{GameRng, GameRngState};
