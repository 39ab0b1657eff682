//! Core data structures for the Dotlace puzzle.
//!
//! This crate provides the foundation value types for the board of a
//! Dotlace game. These structures are shared by the game engine and by any
//! presentation layer that renders the board.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Palette** - [`color`]: type-safe representation of the token
//!    palette ([`Color`], five colors).
//! 2. **Coordinates** - [`position`]: board coordinates ([`Position`]) on
//!    the fixed [`GRID_SIZE`]×[`GRID_SIZE`] board, with bounds-checked
//!    construction and 4-adjacency queries.
//! 3. **Board storage** - [`token`] and [`grid`]: the passive per-cell
//!    record ([`Token`]) and the flat-array container ([`TokenGrid`])
//!    indexed by [`Position`]. Positions are the identity of a token: the
//!    grid owns every token, and anything referring to a token does so by
//!    coordinate.
//!
//! # Examples
//!
//! ```
//! use dotlace_core::{Color, Position, TokenGrid};
//!
//! // Build a board where every cell holds the same color.
//! let grid = TokenGrid::from_fn(|_| Color::Blue);
//!
//! let pos = Position::new(2, 3);
//! assert_eq!(grid[pos].color(), Color::Blue);
//! assert!(!grid[pos].is_selected());
//!
//! // Orthogonal neighbors are adjacent, diagonals are not.
//! assert!(pos.is_adjacent(Position::new(2, 4)));
//! assert!(!pos.is_adjacent(Position::new(3, 4)));
//! ```

pub mod color;
pub mod grid;
pub mod position;
pub mod token;

// Re-export commonly used types
pub use self::{
    color::Color,
    grid::TokenGrid,
    position::{CELL_COUNT, GRID_SIZE, Position},
    token::Token,
};
