//! Board symmetries.
//!
//! Both flips are involutions: applying one twice gives back the original
//! board. The resolver uses them to turn every direction into a left slide.

use crate::core::{Board, Row, ROW_LEN};

/// Transpose rows and columns.
#[must_use]
pub fn flip_diagonal(board: Board) -> Board {
    let rows = board.rows();
    let mut out: [Row; ROW_LEN] = [[0; ROW_LEN]; ROW_LEN];
    for (r, row) in rows.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            out[c][r] = v;
        }
    }
    Board::from_rows(out)
}

/// Reverse each row.
#[must_use]
pub fn flip_horizontal(board: Board) -> Board {
    Board::from_rows(board.rows().map(|mut row| {
        row.reverse();
        row
    }))
}
