//! Game-state engine for the Dotlace puzzle.
//!
//! This crate implements the rules of a Dotlace game on top of the board
//! types from [`dotlace_core`]: the path-selection rule (same color,
//! 4-adjacent, single-step backtrack), the resolution step (clear the
//! path, drop columns, refill from the top), and the move/score counters.
//!
//! The engine is a plain owned value with no callbacks and no global
//! state. Every operation returns an outcome value the caller interprets;
//! a presentation layer drives the engine and reacts to the returned
//! [`SelectionOutcome`]s and [`ResolveOutcome`]s, reading the board
//! through the engine's read-only views.
//!
//! # Examples
//!
//! ```
//! use dotlace_core::{Color, Position, TokenGrid};
//! use dotlace_game::{GridEngine, INIT_MOVES};
//!
//! // A board of one color accepts any adjacent path.
//! let grid = TokenGrid::from_fn(|_| Color::Blue);
//! let mut engine = GridEngine::from_grid(grid, 1);
//!
//! assert!(engine.select_token(Position::new(0, 0)).is_added());
//! assert!(engine.select_token(Position::new(0, 1)).is_added());
//!
//! let outcome = engine.resolve();
//! assert_eq!(outcome.removed, 2);
//! assert_eq!(engine.score(), 2);
//! assert_eq!(engine.moves_left(), INIT_MOVES - 1);
//! ```

pub mod engine;
pub mod error;
pub mod outcome;

// Re-export commonly used types
pub use self::{
    engine::{GridEngine, INIT_MOVES},
    error::EngineError,
    outcome::{ColumnDrop, ResolveOutcome, SelectionOutcome},
};
