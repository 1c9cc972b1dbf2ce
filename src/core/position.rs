//! Cell coordinates.
//!
//! A `Position` is a `(row, col)` pair. Its text form is `"row-col"`, the
//! key a presentation layer can attach to each rendered cell and hand back
//! when that cell is activated.
//!
//! ```
//! use lights_out::core::Position;
//!
//! let pos: Position = "1-2".parse().unwrap();
//! assert_eq!(pos, Position::new(1, 2));
//! assert_eq!(pos.to_string(), "1-2");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::LightsOutError;

/// Zero-based cell coordinate, row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cells flipped by activating this position: the position itself,
    /// then up, down, left, right.
    ///
    /// Neighbors that would fall below zero are omitted; the upper bounds
    /// depend on the board and are checked there.
    pub fn toggle_pattern(self) -> impl Iterator<Item = Position> {
        let Position { row, col } = self;
        let up = row.checked_sub(1).map(|r| Position::new(r, col));
        let down = row.checked_add(1).map(|r| Position::new(r, col));
        let left = col.checked_sub(1).map(|c| Position::new(row, c));
        let right = col.checked_add(1).map(|c| Position::new(row, c));

        std::iter::once(self).chain([up, down, left, right].into_iter().flatten())
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = LightsOutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| LightsOutError::Parse(format!("expected \"row-col\", got {s:?}")))?;

        let parse = |part: &str| {
            part.parse::<usize>().map_err(|e| {
                LightsOutError::Parse(format!("bad coordinate {part:?} in {s:?}: {e}"))
            })
        };

        Ok(Self::new(parse(row)?, parse(col)?))
    }
}
