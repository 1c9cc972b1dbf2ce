//! Core engine types: board, positions, configuration, RNG, errors.
//!
//! Everything here is independent of how a game session is run; the
//! session and the caller-facing operations live in `rules`.

pub mod board;
pub mod config;
pub mod error;
pub mod position;
pub mod rng;

pub use board::Board;
pub use config::{BoardConfig, MAX_CELLS};
pub use error::{LightsOutError, Result};
pub use position::Position;
pub use rng::{GameRng, GameRngState};
