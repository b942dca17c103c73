//! Game session management for the Crosses toggle puzzle.
//!
//! This crate owns the play loop around a [`Grid`](crosses_core::Grid):
//!
//! - [`Session`]: the current grid, the [`GameState`], and level progression
//! - [`Progress`]: the level and grid size the host persists between runs
//! - [`TapOutcome`]: what a forwarded tap did, so the host knows when to save
//!
//! A session starts in [`GameState::Playing`]. Tapping a cell toggles it and
//! its row and column; when every cell is active the session moves to
//! [`GameState::Ended`]. The next tap acknowledges the win and loads the next
//! level, scrambled with one more toggle than the last. After `N²` levels on
//! an `N`×`N` grid, play continues on an `(N + 1)`×`(N + 1)` grid.

pub use self::{
    progress::{Progress, ProgressError},
    session::{GameState, Session, SessionError, TapOutcome},
};

mod progress;
mod session;
