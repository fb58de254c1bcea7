//! Game sessions: current board, undo history, and outcome.

mod game;

pub use game::{create_initial_session, Outcome, Session, Status, HEADING};
