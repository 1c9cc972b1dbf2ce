//! Board configuration.
//!
//! A `BoardConfig` is fixed for the lifetime of a game: the grid
//! dimensions, the chance each cell starts lit, and an optional seed for
//! reproducible boards.
//!
//! ```
//! use lights_out::core::BoardConfig;
//!
//! let config = BoardConfig::default()
//!     .with_dimensions(5, 5)
//!     .with_light_probability(0.5)
//!     .with_seed(7);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.cell_count(), 25);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{LightsOutError, Result};

/// Largest board, in cells, that `validate` accepts.
pub const MAX_CELLS: usize = 1 << 24;

/// Immutable parameters for generating a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (must be positive).
    pub rows: usize,

    /// Number of columns (must be positive).
    pub cols: usize,

    /// Independent probability that any cell starts lit, in `[0, 1]`.
    pub light_probability: f64,

    /// Seed for the board RNG. `None` draws a seed from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            light_probability: 0.25,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Create a config with the given dimensions and probability, unseeded.
    pub fn new(rows: usize, cols: usize, light_probability: f64) -> Self {
        Self {
            rows,
            cols,
            light_probability,
            seed: None,
        }
    }

    /// Set the grid dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the probability that a cell starts lit.
    #[must_use]
    pub fn with_light_probability(mut self, probability: f64) -> Self {
        self.light_probability = probability;
        self
    }

    /// Fix the RNG seed so the generated board is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of cells, saturating at `usize::MAX`.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Check that every parameter is in range.
    ///
    /// Boards larger than [`MAX_CELLS`] are rejected so construction never
    /// attempts an allocation that cannot succeed.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(LightsOutError::InvalidConfig("rows must be positive".into()));
        }
        if self.cols == 0 {
            return Err(LightsOutError::InvalidConfig("cols must be positive".into()));
        }
        match self.rows.checked_mul(self.cols) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(LightsOutError::InvalidConfig(format!(
                    "{}x{} board exceeds {MAX_CELLS} cells",
                    self.rows, self.cols
                )));
            }
        }
        // NaN fails the range check as well.
        if !(0.0..=1.0).contains(&self.light_probability) {
            return Err(LightsOutError::InvalidConfig(format!(
                "light probability {} is outside [0, 1]",
                self.light_probability
            )));
        }
        Ok(())
    }
}
