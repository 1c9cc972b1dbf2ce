//! The Lights Out grid.
//!
//! ## Layout
//!
//! Cells are stored row-major in a flat `Vec<bool>`; `true` is lit. The
//! dimensions are fixed at construction and only cell values change.
//!
//! ## Text Form
//!
//! One line per row, `O` for lit and `.` for off:
//!
//! ```
//! use lights_out::core::Board;
//!
//! let board: Board = "...\nOO.\n...".parse().unwrap();
//! assert_eq!(board.rows(), 3);
//! assert!(board.is_lit(1, 0));
//! assert!(!board.is_lit(1, 2));
//! assert_eq!(board.to_string(), "...\nOO.\n...");
//! ```

use std::str::FromStr;

use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::BoardConfig;
use super::error::{LightsOutError, Result};
use super::position::Position;

const LIT: char = 'O';
const OFF: char = '.';

/// Rectangular grid of lit/unlit cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Create an all-off board.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, false)
    }

    /// Create a board with every cell set to `lit`.
    pub fn filled(rows: usize, cols: usize, lit: bool) -> Result<Self> {
        BoardConfig::new(rows, cols, 0.0).validate()?;
        Ok(Self {
            rows,
            cols,
            cells: vec![lit; rows * cols],
        })
    }

    /// Build a board from explicit rows of cell states.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        BoardConfig::new(rows.len(), cols, 0.0).validate()?;

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(LightsOutError::InvalidConfig(format!(
                    "row {i} has {} cells, expected {cols}",
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Generate a board where each cell is independently lit with
    /// `config.light_probability`, drawing from `rng`.
    ///
    /// Cells are sampled row-major, so the same RNG stream always yields
    /// the same board.
    pub fn generate<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let cells: Vec<bool> = (0..config.cell_count())
            .map(|_| rng.gen_bool(config.light_probability))
            .collect();

        let board = Self {
            rows: config.rows,
            cols: config.cols,
            cells,
        };
        debug!(
            "generated {}x{} board, {} lit (p={})",
            board.rows,
            board.cols,
            board.lit_count(),
            config.light_probability
        );
        Ok(board)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether a coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Get a cell's state, or `None` if off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<bool> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Whether `(row, col)` is lit. Off-board coordinates read as unlit.
    #[must_use]
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        self.get(Position::new(row, col)).unwrap_or(false)
    }

    /// Number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// True iff every cell is off.
    #[must_use]
    pub fn is_all_off(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    /// Iterate over every lit position, row-major.
    pub fn lit_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, lit)| **lit)
            .map(move |(i, _)| Position::new(i / self.cols, i % self.cols))
    }

    /// Flip the cell at `(row, col)` and its orthogonal neighbors in place.
    ///
    /// Any of the five positions outside the board is skipped, the center
    /// included. Returns how many cells were flipped.
    pub fn toggle_around(&mut self, row: usize, col: usize) -> usize {
        let mut flipped = 0;
        for pos in Position::new(row, col).toggle_pattern() {
            if let Some(i) = self.index(pos) {
                self.cells[i] = !self.cells[i];
                flipped += 1;
            }
        }
        trace!("toggle around {row}-{col}: {flipped} cells flipped");
        flipped
    }

    /// Value-returning form of [`Board::toggle_around`].
    #[must_use]
    pub fn toggled_around(&self, row: usize, col: usize) -> Self {
        let mut next = self.clone();
        next.toggle_around(row, col);
        next
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }
}

/// Unchecked serde shape, validated on the way into a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl TryFrom<RawBoard> for Board {
    type Error = LightsOutError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        BoardConfig::new(raw.rows, raw.cols, 0.0).validate()?;
        if raw.cells.len() != raw.rows * raw.cols {
            return Err(LightsOutError::InvalidConfig(format!(
                "{} cells for a {}x{} board",
                raw.cells.len(),
                raw.rows,
                raw.cols
            )));
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &lit in row {
                write!(f, "{}", if lit { LIT } else { OFF })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = LightsOutError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        LIT => Ok(true),
                        OFF => Ok(false),
                        other => Err(LightsOutError::Parse(format!(
                            "unexpected cell character {other:?}"
                        ))),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_rows(&rows).map_err(|e| match e {
            LightsOutError::InvalidConfig(msg) => LightsOutError::Parse(msg),
            other => other,
        })
    }
}
