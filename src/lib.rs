//! # slide-merge
//!
//! Board engine for a 4x4 sliding-tile merging puzzle.
//!
//! ## Design Principles
//!
//! 1. **Immutable boards**: `Board` is a `Copy` snapshot. Moves build new
//!    boards; nothing is mutated in place.
//!
//! 2. **One slide algorithm**: only the left slide is implemented. The other
//!    directions flip the board, slide left, and flip each frame back.
//!
//! 3. **Animation frames**: a move resolves into every intermediate board,
//!    one slide or merge step per row at a time. Pacing them is up to the
//!    caller.
//!
//! 4. **Reproducible**: spawning is the only randomness and draws from a
//!    seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Board, positions, directions, RNG, configuration, errors.
//!   `Direction` parses from its lowercase name as a convenience; mapping
//!   keys to directions is left to the caller.
//! - `rules`: Flips, move resolution, spawning, win/loss checks
//! - `session`: Game session with undo history and status
//!
//! ## Example
//!
//! ```
//! use slide_merge::{Direction, Session, Status};
//!
//! let mut session = Session::with_seed(42);
//! for direction in Direction::ALL {
//!     for frame in session.apply_move(direction) {
//!         // draw `frame`, then wait a little
//!         let _ = frame;
//!     }
//! }
//! assert_ne!(session.status(), Status::Won);
//! ```

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Position, Row, ROW_LEN,
    Direction,
    GameRng, GameRngState,
    PuzzleConfig, WIN_TILE, FOUR_PROBABILITY,
    ConfigError, ParseDirectionError,
};

pub use crate::rules::{
    flip_diagonal, flip_horizontal,
    resolve, slide_left, slide_right, slide_row, can_move, Frames,
    Spawner, is_won, is_lost,
};

pub use crate::session::{create_initial_session, Outcome, Session, Status, HEADING};
