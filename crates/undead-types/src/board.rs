//! The fixed rectangular grid the automaton evolves.
//!
//! A [`Board`] stores `width * height` cells in row-major order. Cells are
//! addressed as `(x, y)` with `x` the column and `y` the row. The grid never
//! grows and never wraps: anything outside `[0, width) x [0, height)` simply
//! does not exist.
//!
//! # Text form
//!
//! Boards render to and parse from one line per row using the cell glyphs
//! from [`CellState::glyph`]:
//!
//! ```text
//! .....
//! ..#..
//! ..#..
//! ..#..
//! .....
//! ```
//!
//! Blank lines and surrounding whitespace are ignored when parsing.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::enums::CellState;
use crate::error::BoardError;

/// A fixed-size grid of [`CellState`] values.
///
/// Serialized as a list of rows so that deserialization re-checks that the
/// grid is rectangular.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<CellState>>", try_from = "Vec<Vec<CellState>>")]
pub struct Board {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Row-major cell storage, `width * height` long.
    cells: Vec<CellState>,
}

impl Board {
    /// Create a board with every cell [`CellState::Dead`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TooLarge`] if `width * height` overflows.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let len = width
            .checked_mul(height)
            .ok_or(BoardError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![CellState::Dead; len],
        })
    }

    /// Build a board from explicit rows. The first row fixes the width.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RaggedRows`] if any row differs in length
    /// from the first.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(BoardError::RaggedRows {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a board from row-major numeric state codes (0 = dead,
    /// 1 = alive, 2 = zombie).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeMismatch`] if `codes` is not exactly
    /// `width * height` long, or [`BoardError::UnknownCode`] for any code
    /// outside the three valid states.
    pub fn from_codes(width: usize, height: usize, codes: &[u8]) -> Result<Self, BoardError> {
        let expected = width
            .checked_mul(height)
            .ok_or(BoardError::TooLarge { width, height })?;
        if codes.len() != expected {
            return Err(BoardError::SizeMismatch {
                expected,
                found: codes.len(),
            });
        }

        let cells = codes
            .iter()
            .map(|&code| CellState::from_code(code).ok_or(BoardError::UnknownCode(code)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the board has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(x, y)` lies on the board.
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        y.checked_mul(self.width)?.checked_add(x)
    }

    /// The state at `(x, y)`, or `None` off the board.
    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        self.index(x, y)
            .and_then(|i| self.cells.get(i))
            .copied()
    }

    /// Overwrite the state at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `(x, y)` is off the board.
    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<(), BoardError> {
        let out_of_bounds = BoardError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        };
        let cell = self
            .index(x, y)
            .and_then(|i| self.cells.get_mut(i))
            .ok_or(out_of_bounds)?;
        *cell = state;
        Ok(())
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// The cells of row `y`, or an empty slice off the board.
    pub fn row(&self, y: usize) -> &[CellState] {
        let Some(start) = self.index(0, y) else {
            return &[];
        };
        start
            .checked_add(self.width)
            .and_then(|end| self.cells.get(start..end))
            .unwrap_or(&[])
    }

    /// Iterate over rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Iterate over every coordinate, rows outer and columns inner.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Number of cells holding `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Build a new board of the same dimensions by mapping every cell.
    ///
    /// `f` receives `(x, y, current_state)` for each cell in
    /// [`coordinates`](Self::coordinates) order. `self` is never modified,
    /// so `f` may freely read any cell of `self`.
    pub fn map_cells<F>(&self, mut f: F) -> Self
    where
        F: FnMut(usize, usize, CellState) -> CellState,
    {
        let cells = self
            .coordinates()
            .zip(self.cells.iter())
            .map(|((x, y), &state)| f(x, y, state))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();

        for (index, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .map(|glyph| {
                    CellState::from_glyph(glyph).ok_or(BoardError::UnknownGlyph {
                        glyph,
                        line: index.saturating_add(1),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<CellState>> {
    fn from(board: Board) -> Self {
        board.rows().map(<[CellState]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<CellState>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<CellState>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
