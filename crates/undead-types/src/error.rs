//! Error types for the `undead-types` crate.

/// Errors that can occur while building or mutating a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A coordinate lies outside the board.
    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
        /// Board width.
        width: usize,
        /// Board height.
        height: usize,
    },

    /// Rows passed to the board constructor do not all have the same length.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A flat cell buffer does not match the requested dimensions.
    #[error("expected {expected} cells, found {found}")]
    SizeMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        found: usize,
    },

    /// The board dimensions overflow `usize` when multiplied.
    #[error("board dimensions {width}x{height} are too large")]
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A numeric state code is not 0, 1, or 2.
    #[error("unknown cell state code: {0}")]
    UnknownCode(u8),

    /// A character in the text form is not a recognised cell glyph.
    #[error("unknown cell glyph {glyph:?} on line {line}")]
    UnknownGlyph {
        /// The offending character.
        glyph: char,
        /// 1-based line number within the parsed text.
        line: usize,
    },
}
