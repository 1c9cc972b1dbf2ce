//! Board engine: the three caller-facing operations and the game session.
//!
//! The free functions are the stateless surface a presentation layer
//! drives directly:
//! - `initialize`: generate a board from a config and an RNG
//! - `initialize_seeded`: same, with the RNG built from `config.seed`
//! - `toggle_around`: flip a cell and its orthogonal neighbors
//! - `has_won`: every light off
//!
//! `LightsOut` wraps them into a session that tracks whether the game is
//! still being played and rejects moves once it has been won.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::config::BoardConfig;
use crate::core::error::{LightsOutError, Result};
use crate::core::rng::{GameRng, GameRngState};

/// Generate a board for `config`, drawing cell states from `rng`.
///
/// `config.seed` is not consulted: the board is exactly as reproducible as
/// `rng` is. Use [`initialize_seeded`] to have the config pick the RNG.
///
/// Fails with `InvalidConfig` if the dimensions are zero, the board is
/// larger than `MAX_CELLS`, or the light probability is outside `[0, 1]`.
pub fn initialize<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> Result<Board> {
    Board::generate(config, rng)
}

/// Generate a board using a `GameRng` seeded from `config.seed`, or from
/// entropy when the config is unseeded.
pub fn initialize_seeded(config: &BoardConfig) -> Result<Board> {
    initialize(config, &mut session_rng(config))
}

fn session_rng(config: &BoardConfig) -> GameRng {
    match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    }
}

/// Flip `(row, col)` and its in-bounds orthogonal neighbors, returning the
/// updated board.
#[must_use]
pub fn toggle_around(mut board: Board, row: usize, col: usize) -> Board {
    board.toggle_around(row, col);
    board
}

/// True iff every cell on the board is off.
#[must_use]
pub fn has_won(board: &Board) -> bool {
    board.is_all_off()
}

/// Macro-state of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one light is on.
    Playing,
    /// Every light is off. Terminal.
    Won,
}

impl GameStatus {
    fn of(board: &Board) -> Self {
        if has_won(board) {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }
}

/// A single game session.
///
/// ## Usage
///
/// ```
/// use lights_out::{BoardConfig, GameStatus, LightsOut, LightsOutError};
///
/// let config = BoardConfig::new(3, 3, 1.0).with_seed(42);
/// let mut game = LightsOut::new(config).unwrap();
/// assert_eq!(game.status(), GameStatus::Playing);
///
/// game.toggle_around(0, 0).unwrap();
/// assert_eq!(game.board().lit_count(), 6);
/// assert_eq!(game.moves(), 1);
///
/// let mut solved = LightsOut::from_board("...\n...".parse().unwrap(), 0);
/// assert!(solved.has_won());
/// assert_eq!(solved.toggle_around(0, 0), Err(LightsOutError::GameAlreadyWon));
/// ```
#[derive(Clone, Debug)]
pub struct LightsOut {
    config: BoardConfig,
    board: Board,
    status: GameStatus,
    moves: u32,
    rng: GameRng,
}

impl LightsOut {
    /// Start a session with a freshly generated board.
    ///
    /// Uses `config.seed` when set, otherwise seeds from entropy.
    pub fn new(config: BoardConfig) -> Result<Self> {
        let rng = session_rng(&config);
        Self::with_rng(config, rng)
    }

    /// Start a session drawing from the given RNG.
    pub fn with_rng(config: BoardConfig, mut rng: GameRng) -> Result<Self> {
        let board = initialize(&config, &mut rng)?;
        let status = GameStatus::of(&board);
        debug!(
            "new {}x{} game (seed {}), status {:?}",
            config.rows,
            config.cols,
            rng.seed(),
            status
        );
        Ok(Self {
            config,
            board,
            status,
            moves: 0,
            rng,
        })
    }

    /// Start a session from a fixed board, e.g. a hand-made puzzle.
    ///
    /// `seed` drives the boards produced by later `new_game` calls, which
    /// use the board's dimensions and the default light probability.
    pub fn from_board(board: Board, seed: u64) -> Self {
        let config = BoardConfig::default()
            .with_dimensions(board.rows(), board.cols())
            .with_seed(seed);
        let status = GameStatus::of(&board);
        Self {
            config,
            board,
            status,
            moves: 0,
            rng: GameRng::new(seed),
        }
    }

    /// Apply a move at `(row, col)`.
    ///
    /// Rejects the move with `GameAlreadyWon` once every light is off; the
    /// board is left untouched in that case.
    pub fn toggle_around(&mut self, row: usize, col: usize) -> Result<&Board> {
        if self.status == GameStatus::Won {
            return Err(LightsOutError::GameAlreadyWon);
        }

        self.board.toggle_around(row, col);
        self.moves = self.moves.saturating_add(1);

        if has_won(&self.board) {
            self.status = GameStatus::Won;
            debug!("game won after {} moves", self.moves);
        }

        Ok(&self.board)
    }

    /// Replace the board with a new one from the same configuration.
    ///
    /// Each new game draws from a fork of the session RNG, so a seeded
    /// session replays the same sequence of boards.
    pub fn new_game(&mut self) -> Result<&Board> {
        let mut game_rng = self.rng.fork();
        self.board = initialize(&self.config, &mut game_rng)?;
        self.status = GameStatus::of(&self.board);
        self.moves = 0;
        debug!("new game (seed {}), status {:?}", game_rng.seed(), self.status);
        Ok(&self.board)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Moves applied since the current board was created, saturating at
    /// `u32::MAX`.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Snapshot of the session RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
