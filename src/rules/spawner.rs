//! Tile spawning.
//!
//! Any `rand::Rng` can drive the spawner. Sessions use their seeded
//! `GameRng`; tests may pass any other seeded generator.

use rand::Rng;
use tracing::trace;

use crate::core::{Board, FOUR_PROBABILITY};

/// Places new tiles on uniformly random empty cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spawner {
    four_probability: f64,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(FOUR_PROBABILITY)
    }
}

impl Spawner {
    /// Create a spawner that produces a 4 with the given probability.
    ///
    /// # Panics
    ///
    /// Panics if `four_probability` is outside `[0, 1]`.
    #[must_use]
    pub fn new(four_probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&four_probability),
            "four-tile probability {four_probability} out of range"
        );
        Self { four_probability }
    }

    /// Place a random tile (2, or 4 with the configured probability).
    ///
    /// # Panics
    ///
    /// Panics if the board has no empty cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Board {
        let value = if rng.gen_bool(self.four_probability) { 4 } else { 2 };
        place(board, value, rng)
    }
}

/// Put `value` on a uniformly chosen empty cell.
///
/// # Panics
///
/// Panics if the board has no empty cell.
#[must_use]
pub fn place<R: Rng + ?Sized>(board: &Board, value: u32, rng: &mut R) -> Board {
    let empty = board.empty_cells();
    assert!(!empty.is_empty(), "cannot spawn a tile on a full board");

    let pos = empty[rng.gen_range(0..empty.len())];
    trace!(%pos, value, "spawned tile");
    board.with_tile(pos, value)
}
