//! Error type shared by every engine operation.

use thiserror::Error;

/// Errors surfaced by board construction, parsing, and the game session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LightsOutError {
    /// Rows, columns, or light probability out of range.
    ///
    /// No partial board is produced; supply a valid config and retry.
    #[error("invalid board config: {0}")]
    InvalidConfig(String),

    /// A toggle was issued after the board reached the won state.
    #[error("game already won; start a new game to keep playing")]
    GameAlreadyWon,

    /// Malformed board text or position key.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, LightsOutError>;
