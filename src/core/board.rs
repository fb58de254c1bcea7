//! Board representation: an immutable 4x4 grid of tile values.
//!
//! A value of 0 marks an empty cell. Positive values come from spawns
//! (2 or 4) or from merging two equal neighbours. Nothing checks that
//! values are powers of two; that falls out of the rules.
//!
//! Boards are `Copy` snapshots. Every operation that "changes" a board
//! returns a new value instead.

use serde::{Deserialize, Serialize};

/// Number of cells in a row (and rows in a board).
pub const ROW_LEN: usize = 4;

/// One row of a board, leftmost cell first.
pub type Row = [u32; ROW_LEN];

/// A cell coordinate. Both components are in `0..ROW_LEN`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the board.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < ROW_LEN && col < ROW_LEN, "Position ({row}, {col}) is off the board");
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 4x4 grid of tile values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: [Row; ROW_LEN],
}

impl Board {
    /// The all-empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rows: [[0; ROW_LEN]; ROW_LEN] }
    }

    /// Build a board from its rows, top row first.
    #[must_use]
    pub const fn from_rows(rows: [Row; ROW_LEN]) -> Self {
        Self { rows }
    }

    /// The rows of this board, top row first.
    #[must_use]
    pub const fn rows(&self) -> [Row; ROW_LEN] {
        self.rows
    }

    /// Value at a position (0 if empty).
    #[must_use]
    pub fn get(&self, pos: Position) -> u32 {
        self.rows[pos.row][pos.col]
    }

    /// Copy of this board with a single cell replaced.
    #[must_use]
    pub fn with_tile(&self, pos: Position, value: u32) -> Self {
        let mut rows = self.rows;
        rows[pos.row][pos.col] = value;
        Self { rows }
    }

    /// Empty positions in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells()
            .filter(|&(_, v)| v == 0)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Check if every cell holds a tile.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, v)| v != 0)
    }

    /// Largest tile on the board (0 for an empty board).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells().map(|(_, v)| v).max().unwrap_or(0)
    }

    /// Sum of all tile values.
    ///
    /// Slides and merges never change this; only spawns do.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.cells().map(|(_, v)| u64::from(v)).sum()
    }

    /// Iterate over `(position, value)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &v)| (Position { row: r, col: c }, v))
        })
    }
}

impl From<[Row; ROW_LEN]> for Board {
    fn from(rows: [Row; ROW_LEN]) -> Self {
        Self::from_rows(rows)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            for &v in row {
                if v == 0 {
                    write!(f, " {:>4}", ".")?;
                } else {
                    write!(f, " {v:>4}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
