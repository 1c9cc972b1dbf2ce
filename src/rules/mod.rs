//! Game rules for Lights Out.
//!
//! Exposes the caller-facing operations:
//! - `initialize`: random board from a config and an injected RNG
//! - `initialize_seeded`: random board seeded from the config
//! - `toggle_around`: the transition function
//! - `has_won`: the win predicate
//!
//! and `LightsOut`, a session that enforces the `Playing -> Won` state
//! machine.

pub mod engine;

pub use engine::{has_won, initialize, initialize_seeded, toggle_around, GameStatus, LightsOut};
