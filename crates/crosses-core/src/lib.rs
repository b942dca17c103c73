//! Core data structures for the Crosses toggle puzzle.
//!
//! This crate provides the grid engine shared by puzzle generation, the game
//! session, and the application layer.
//!
//! # Overview
//!
//! - [`position`]: board coordinates and the cross pattern touched by a toggle
//! - [`grid`]: the square board of boolean cells and the toggle rule
//!
//! A toggle flips the target cell together with every other cell in the same
//! row and column. The board is solved when every cell is active
//! ([`Grid::SOLVED`]).
//!
//! # Examples
//!
//! ```
//! use crosses_core::{Grid, Position};
//!
//! let mut grid = Grid::new(2);
//! assert!(grid.is_solved());
//!
//! grid.toggle(Position::new(0, 0));
//! assert_eq!(grid.to_string(), "..\n.#");
//! assert!(!grid.is_solved());
//! ```

pub mod grid;
pub mod position;

pub use self::{
    grid::{Grid, GridError},
    position::Position,
};
