//! # lights-out
//!
//! Logic engine for the Lights Out puzzle: a grid of lights where pressing
//! a cell flips it and its orthogonal neighbors, won when every light is
//! off.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: No rendering or input handling. A UI, CLI, or
//!    test harness drives the engine through plain function calls.
//!
//! 2. **Explicit State**: `toggle_around` returns the updated board rather
//!    than relying on a framework to re-render.
//!
//! 3. **Injected Randomness**: Board generation takes any `rand::Rng`;
//!    `GameRng` is a seedable default so boards are reproducible.
//!
//! ## Example
//!
//! ```
//! use lights_out::{has_won, initialize, toggle_around, BoardConfig, GameRng};
//!
//! let config = BoardConfig::new(3, 3, 1.0);
//! let mut rng = GameRng::new(42);
//!
//! let board = initialize(&config, &mut rng).unwrap();
//! let board = toggle_around(board, 0, 0);
//!
//! assert_eq!(board.to_string(), "..O\n.OO\nOOO");
//! assert!(!has_won(&board));
//! ```
//!
//! ## Modules
//!
//! - `core`: Board, positions, configuration, RNG, errors
//! - `rules`: Caller-facing operations and the `LightsOut` game session

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, Position, MAX_CELLS,
    GameRng, GameRngState,
    LightsOutError,
};

pub use crate::rules::{
    has_won, initialize, initialize_seeded, toggle_around,
    GameStatus, LightsOut,
};
