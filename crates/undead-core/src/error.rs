//! Error types for the `undead-core` crate.

use undead_types::BoardError;

/// Errors that can occur while querying or evolving a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    /// A per-cell query was made for a coordinate off the board.
    #[error("invalid coordinate ({x}, {y}) for a {width}x{height} board")]
    InvalidCoordinate {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
        /// Board width.
        width: usize,
        /// Board height.
        height: usize,
    },

    /// A board construction or mutation failed.
    #[error(transparent)]
    Board(#[from] BoardError),
}
