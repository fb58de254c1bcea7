//! A single game from the first two tiles to the end.
//!
//! ## Lifecycle
//!
//! 1. `Session::new` spawns two 2-tiles on an empty board.
//! 2. `apply_move` resolves a direction. A move that changes nothing is
//!    ignored. Otherwise the old board goes on the history stack, the frames
//!    are handed back for animation, and a tile spawns on the settled board.
//! 3. `undo` pops the history and marks the session forfeited for good.
//!
//! Won and lost are never stored; they are read off the current board.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Board, ConfigError, Direction, GameRng, GameRngState, PuzzleConfig};
use crate::rules::{self, Frames, Spawner};

/// Instructions for the player.
pub const HEADING: &str = "Use the arrow keys, U to undo (and forfeit), or Q to quit.";

/// Value of the first two tiles.
const INITIAL_TILE: u32 = 2;

/// Game outcome derived from the current board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and no winning tile yet.
    Playing,
    /// A winning tile is on the board.
    Won,
    /// No direction changes the board.
    Lost,
}

/// Status line shown under the board.
///
/// Priority: lost, then forfeit, then won. A session that ever used undo
/// never shows "You win!" again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Playing,
    Won,
    Forfeit,
    Lost,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Status::Lost => "You lose!",
            Status::Forfeit => "You forfeit.",
            Status::Won => "You win!",
            Status::Playing => "",
        })
    }
}

/// Game session.
///
/// History snapshots live in a persistent vector, so cloning a session is
/// cheap and the clone shares nothing mutable with the original.
#[derive(Clone, Debug)]
pub struct Session {
    config: PuzzleConfig,
    board: Board,
    history: Vector<Board>,
    forfeited: bool,
    moves: u32,
    spawner: Spawner,
    rng: GameRng,
}

/// Start a session with the default configuration and an OS-seeded RNG.
#[must_use]
pub fn create_initial_session() -> Session {
    Session::start(PuzzleConfig::default())
}

impl Session {
    /// Start a session.
    ///
    /// Fails if the configuration does not validate.
    pub fn new(config: PuzzleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config))
    }

    /// Start a session with default rules and a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::start(PuzzleConfig::default().with_seed(seed))
    }

    /// Start a session from an arbitrary board, bypassing the opening spawns.
    ///
    /// The history starts empty.
    pub fn from_board(config: PuzzleConfig, board: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self::assemble(config, board, rng))
    }

    /// Pick up a game from a board and a saved spawn RNG position.
    ///
    /// Spawns continue exactly where the saved stream left off, so resuming
    /// from `current_board()` and `rng_state()` replays the same game. The
    /// config's `seed` is ignored in favour of the saved state. History and
    /// forfeit start fresh.
    pub fn resume(
        config: PuzzleConfig,
        board: Board,
        rng_state: &GameRngState,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(seed = rng_state.seed, "session resumed");
        Ok(Self::assemble(config, board, GameRng::from_state(rng_state)))
    }

    /// Build from an already validated config.
    fn start(config: PuzzleConfig) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let board = rules::place(&Board::empty(), INITIAL_TILE, &mut rng);
        let board = rules::place(&board, INITIAL_TILE, &mut rng);
        info!(seed = rng.seed(), "session started");

        Self::assemble(config, board, rng)
    }

    fn assemble(config: PuzzleConfig, board: Board, rng: GameRng) -> Self {
        Self {
            spawner: Spawner::new(config.four_probability),
            config,
            board,
            history: Vector::new(),
            forfeited: false,
            moves: 0,
            rng,
        }
    }

    /// Play a move.
    ///
    /// Returns the animation frames, ending with the settled board before
    /// the new tile appears. An empty result means the move was rejected
    /// and the session is unchanged.
    pub fn apply_move(&mut self, direction: Direction) -> Frames {
        let frames = rules::resolve(self.board, direction);
        let Some(&settled) = frames.last() else {
            debug!(%direction, "move rejected");
            return frames;
        };

        self.history.push_back(self.board);
        self.board = self.spawner.spawn(&settled, &mut self.rng);
        self.moves += 1;
        debug!(%direction, frames = frames.len(), moves = self.moves, "move applied");

        frames
    }

    /// Step back one move and forfeit the game.
    ///
    /// Does nothing when there is no history.
    pub fn undo(&mut self) {
        if let Some(previous) = self.history.pop_back() {
            self.board = previous;
            self.forfeited = true;
            debug!(history = self.history.len(), "undo");
        }
    }

    /// The current board.
    #[must_use]
    pub fn current_board(&self) -> Board {
        self.board
    }

    /// Outcome of the current board. Lost wins over won.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if rules::is_lost(&self.board) {
            Outcome::Lost
        } else if rules::reaches(&self.board, self.config.win_tile) {
            Outcome::Won
        } else {
            Outcome::Playing
        }
    }

    /// Check if undo has ever been used.
    #[must_use]
    pub fn is_forfeited(&self) -> bool {
        self.forfeited
    }

    /// Status line for the current board.
    #[must_use]
    pub fn status(&self) -> Status {
        match self.outcome() {
            Outcome::Lost => Status::Lost,
            _ if self.forfeited => Status::Forfeit,
            Outcome::Won => Status::Won,
            Outcome::Playing => Status::Playing,
        }
    }

    /// Number of snapshots available to undo.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Accepted moves so far. Undo does not decrement this.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Configuration this session was started with.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Position of the spawn RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
