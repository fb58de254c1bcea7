//! Board rules: symmetries, move resolution, spawning, and end conditions.
//!
//! Everything here is a pure function of its inputs except the spawner,
//! which draws from a caller-supplied `GameRng`.

pub mod geometry;
pub mod resolver;
pub mod spawner;

pub use geometry::{flip_diagonal, flip_horizontal};
pub use resolver::{can_move, resolve, slide_left, slide_right, slide_row, Frames};
pub use spawner::{place, Spawner};

use crate::core::{Board, Direction, WIN_TILE};

/// Check if the board holds a tile of at least `threshold`.
#[must_use]
pub fn reaches(board: &Board, threshold: u32) -> bool {
    board.cells().any(|(_, v)| v >= threshold)
}

/// Check if the board holds a 2048 tile or larger.
#[must_use]
pub fn is_won(board: &Board) -> bool {
    reaches(board, WIN_TILE)
}

/// Check if no direction can change the board.
#[must_use]
pub fn is_lost(board: &Board) -> bool {
    !Direction::ALL.iter().any(|&d| can_move(*board, d))
}
