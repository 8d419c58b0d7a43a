//! Shared type definitions for the Undead Life automaton.
//!
//! # Modules
//!
//! - [`enums`] -- [`CellState`], the three states a cell can hold
//! - [`board`] -- [`Board`], the fixed rectangular grid of cells
//! - [`error`] -- [`BoardError`] for construction and mutation failures
//!
//! # Coordinates
//!
//! Every function in the workspace addresses cells as `(x, y)`, where `x`
//! is the column in `[0, width)` and `y` is the row in `[0, height)`.

pub mod board;
pub mod enums;
pub mod error;

pub use board::Board;
pub use enums::CellState;
pub use error::BoardError;
