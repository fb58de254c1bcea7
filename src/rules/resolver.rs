//! Move resolution.
//!
//! All four directions share one algorithm: slide every row one step to the
//! left, emit the board, repeat until no row can change. Up, down and right
//! are that same left slide conjugated by a board flip.
//!
//! ## Row step
//!
//! Each row carries a lock index `lo`. Cells left of `lo` are final for the
//! rest of the move. A step scans `i` in `lo+1..4` for the first position
//! where exactly one of these holds:
//!
//! - `row[i-1]` is empty (the value at `i` shifts into it)
//! - `row[i-1] == row[i]`, both non-zero (the pair merges)
//!
//! A merge moves `lo` to `i`, so a merged tile never merges again in the same
//! move. If nothing qualifies the row is done and `lo` becomes 4.
//!
//! ```
//! use slide_merge::rules::slide_row;
//!
//! assert_eq!(slide_row(0, [2, 2, 2, 2]), (1, [4, 2, 2, 0]));
//! assert_eq!(slide_row(1, [4, 2, 2, 0]), (2, [4, 4, 0, 0]));
//! assert_eq!(slide_row(2, [4, 4, 0, 0]), (4, [4, 4, 0, 0]));
//! ```

use smallvec::SmallVec;

use super::geometry::{flip_diagonal, flip_horizontal};
use crate::core::{Board, Direction, Row, ROW_LEN};

/// Intermediate boards of one move, oldest first.
///
/// Empty when the move changes nothing. Most moves need at most three steps,
/// so frames are stored inline.
pub type Frames = SmallVec<[Board; 4]>;

/// Advance one row by a single slide or merge step.
///
/// Returns the new lock index and row. A lock index of `ROW_LEN` means the
/// row is fully resolved.
///
/// # Panics
///
/// Panics if `lo > ROW_LEN`, or if a merge would overflow `u32`.
#[must_use]
pub fn slide_row(lo: usize, row: Row) -> (usize, Row) {
    assert!(lo <= ROW_LEN, "lock index {lo} out of range 0..={ROW_LEN}");

    for i in (lo + 1)..ROW_LEN {
        let (prev, cur) = (row[i - 1], row[i]);
        let absorbs = prev == 0;
        let merges = prev == cur;
        if absorbs == merges {
            continue;
        }

        let Some(sum) = prev.checked_add(cur) else {
            panic!("merging {prev} + {cur} overflows the tile value");
        };

        let mut next = [0; ROW_LEN];
        next[..i - 1].copy_from_slice(&row[..i - 1]);
        next[i - 1] = sum;
        next[i..ROW_LEN - 1].copy_from_slice(&row[i + 1..]);

        return (if merges { i } else { lo }, next);
    }

    (ROW_LEN, row)
}

/// Resolve a left move into its animation frames.
#[must_use]
pub fn slide_left(board: Board) -> Frames {
    let mut states = board.rows().map(|row| slide_row(0, row));
    let mut frames = Frames::new();

    while states.iter().any(|&(lo, _)| lo < ROW_LEN) {
        frames.push(Board::from_rows(states.map(|(_, row)| row)));
        states = states.map(|(lo, row)| slide_row(lo, row));
    }

    frames
}

/// Resolve a right move: a left move on the mirrored board.
#[must_use]
pub fn slide_right(board: Board) -> Frames {
    conjugate(board, flip_horizontal, slide_left)
}

/// Resolve a move in any direction into its animation frames.
///
/// The last frame is the settled board before any tile spawns.
#[must_use]
pub fn resolve(board: Board, direction: Direction) -> Frames {
    match direction {
        Direction::Left => slide_left(board),
        Direction::Right => slide_right(board),
        Direction::Up => conjugate(board, flip_diagonal, slide_left),
        Direction::Down => conjugate(board, flip_diagonal, slide_right),
    }
}

/// Check whether a move in `direction` would change the board.
#[must_use]
pub fn can_move(board: Board, direction: Direction) -> bool {
    !resolve(board, direction).is_empty()
}

/// Run `inner` on the flipped board and flip each frame back.
fn conjugate(board: Board, flip: fn(Board) -> Board, inner: fn(Board) -> Frames) -> Frames {
    inner(flip(board)).into_iter().map(flip).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frames of a left slide on a single row, the other rows empty.
    fn row_frames(row: Row) -> Vec<Row> {
        let board = Board::from_rows([row, [0; 4], [0; 4], [0; 4]]);
        slide_left(board).iter().map(|b| b.rows()[0]).collect()
    }

    #[test]
    fn test_slide_row_shift() {
        assert_eq!(slide_row(0, [0, 2, 0, 2]), (0, [2, 0, 2, 0]));
    }

    #[test]
    fn test_slide_row_merge_locks() {
        assert_eq!(slide_row(0, [2, 4, 2, 2]), (3, [2, 4, 4, 0]));
    }

    #[test]
    fn test_slide_row_settled() {
        assert_eq!(slide_row(0, [2, 4, 8, 16]), (4, [2, 4, 8, 16]));
        assert_eq!(slide_row(0, [0, 0, 0, 0]), (4, [0, 0, 0, 0]));
        assert_eq!(slide_row(4, [0, 2, 0, 2]), (4, [0, 2, 0, 2]));
    }

    #[test]
    fn test_slide_row_respects_lock() {
        // The 4 at index 1 was just merged; it must not absorb the next 4.
        assert_eq!(slide_row(1, [4, 4, 0, 0]), (4, [4, 4, 0, 0]));
    }

    #[test]
    #[should_panic(expected = "lock index")]
    fn test_slide_row_bad_lock() {
        let _ = slide_row(5, [0; 4]);
    }

    #[test]
    fn test_slide_row_largest_merge() {
        assert_eq!(slide_row(0, [1 << 30, 1 << 30, 0, 0]), (1, [1 << 31, 0, 0, 0]));
        assert_eq!(slide_row(0, [0, u32::MAX, 0, 0]), (0, [u32::MAX, 0, 0, 0]));
    }

    #[test]
    #[should_panic(expected = "overflows the tile value")]
    fn test_slide_row_merge_overflow() {
        let _ = slide_row(0, [1 << 31, 1 << 31, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "overflows the tile value")]
    fn test_resolve_overflowing_board() {
        let board = Board::from_rows([[1 << 31, 1 << 31, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let _ = resolve(board, Direction::Left);
    }

    #[test]
    fn test_row_scenarios() {
        assert_eq!(row_frames([0, 0, 0, 0]), Vec::<Row>::new());
        assert_eq!(row_frames([2, 4, 2, 2]), vec![[2, 4, 4, 0]]);
        assert_eq!(row_frames([2, 2, 2, 2]), vec![[4, 2, 2, 0], [4, 4, 0, 0]]);
        assert_eq!(
            row_frames([0, 2, 0, 2]),
            vec![[2, 0, 2, 0], [2, 2, 0, 0], [4, 0, 0, 0]]
        );
        assert_eq!(row_frames([2, 0, 2, 0]), vec![[2, 2, 0, 0], [4, 0, 0, 0]]);
        assert_eq!(
            row_frames([2, 0, 0, 2]),
            vec![[2, 0, 2, 0], [2, 2, 0, 0], [4, 0, 0, 0]]
        );
        assert_eq!(
            row_frames([0, 0, 0, 2]),
            vec![[0, 0, 2, 0], [0, 2, 0, 0], [2, 0, 0, 0]]
        );
        assert_eq!(row_frames([0, 2, 4, 4]), vec![[2, 4, 4, 0], [2, 8, 0, 0]]);
        assert_eq!(row_frames([0, 2, 2, 4]), vec![[2, 2, 4, 0], [4, 4, 0, 0]]);
        assert_eq!(row_frames([2, 2, 2, 4]), vec![[4, 2, 4, 0]]);
        assert_eq!(row_frames([2, 2, 4, 4]), vec![[4, 4, 4, 0], [4, 8, 0, 0]]);
    }

    #[test]
    fn test_rows_advance_together() {
        let board = Board::from_rows([[0, 0, 0, 2], [2, 2, 0, 0], [0; 4], [4, 8, 16, 32]]);
        let frames = slide_left(board);

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].rows(), [[0, 0, 2, 0], [4, 0, 0, 0], [0; 4], [4, 8, 16, 32]]);
        assert_eq!(frames[2].rows(), [[2, 0, 0, 0], [4, 0, 0, 0], [0; 4], [4, 8, 16, 32]]);
    }

    #[test]
    fn test_resolve_directions() {
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [2, 0, 0, 0]]);

        let up = resolve(board, Direction::Up);
        assert_eq!(up.last().unwrap().rows(), [[4, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);

        let down = resolve(board, Direction::Down);
        assert_eq!(down.last().unwrap().rows(), [[0; 4], [0; 4], [0; 4], [4, 0, 0, 0]]);

        let right = resolve(board, Direction::Right);
        assert_eq!(right.last().unwrap().rows(), [[0, 0, 0, 2], [0; 4], [0; 4], [0, 0, 0, 2]]);

        assert!(resolve(board, Direction::Left).is_empty());
    }

    #[test]
    fn test_can_move() {
        let packed = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(Direction::ALL.iter().all(|&d| !can_move(packed, d)));

        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(can_move(board, Direction::Right));
        assert!(can_move(board, Direction::Down));
        assert!(!can_move(board, Direction::Up));
    }
}
