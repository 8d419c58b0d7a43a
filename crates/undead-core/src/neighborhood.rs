//! Moore-neighborhood queries on a bounded board.
//!
//! The neighborhood of `(x, y)` is the up-to-eight cells surrounding it.
//! Offsets that fall off the board are dropped: nothing wraps and nothing is
//! clamped, so a corner cell has 3 neighbors, an edge cell 5, and an interior
//! cell 8.
//!
//! Every query here is a pure function of the board it is given.

use undead_types::{Board, CellState};

use crate::error::LifeError;

/// `(dx, dy)` offsets in scan order: row offset outer, column offset inner,
/// skipping the cell itself.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Live and zombie neighbor tallies for one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NeighborCounts {
    /// Neighbors in [`CellState::Alive`], in `[0, 8]`.
    pub live: u8,
    /// Neighbors in [`CellState::Zombie`], in `[0, 8]`.
    pub zombie: u8,
}

impl NeighborCounts {
    /// Tally a sequence of neighbor states.
    pub fn tally<I>(states: I) -> Self
    where
        I: IntoIterator<Item = CellState>,
    {
        states
            .into_iter()
            .fold(Self::default(), |mut counts, state| {
                match state {
                    CellState::Alive => counts.live = counts.live.saturating_add(1),
                    CellState::Zombie => counts.zombie = counts.zombie.saturating_add(1),
                    CellState::Dead => {}
                }
                counts
            })
    }

    /// Live plus zombie neighbors.
    pub const fn combined(self) -> u8 {
        self.live.saturating_add(self.zombie)
    }

    /// Whether at least one neighbor is alive.
    pub const fn has_live(self) -> bool {
        self.live > 0
    }
}

/// In-bounds neighbor states of `(x, y)` in scan order.
///
/// Performs no check on `(x, y)` itself; callers that accept arbitrary
/// coordinates go through [`ensure_on_board`] first.
pub(crate) fn neighbor_states(
    board: &Board,
    x: usize,
    y: usize,
) -> impl Iterator<Item = CellState> + '_ {
    OFFSETS.iter().filter_map(move |&(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        board.get(nx, ny)
    })
}

/// Fail with [`LifeError::InvalidCoordinate`] unless `(x, y)` is on the board.
pub(crate) const fn ensure_on_board(board: &Board, x: usize, y: usize) -> Result<(), LifeError> {
    if board.contains(x, y) {
        Ok(())
    } else {
        Err(LifeError::InvalidCoordinate {
            x,
            y,
            width: board.width(),
            height: board.height(),
        })
    }
}

/// States of every in-bounds neighbor of `(x, y)`.
///
/// Order is row offset -1..=1 outer, column offset -1..=1 inner. Callers
/// should only count the result, not inspect positions.
pub fn neighbors(board: &Board, x: usize, y: usize) -> Result<Vec<CellState>, LifeError> {
    ensure_on_board(board, x, y)?;
    Ok(neighbor_states(board, x, y).collect())
}

/// Whether any neighbor of `(x, y)` is alive.
pub fn has_live_neighbor(board: &Board, x: usize, y: usize) -> Result<bool, LifeError> {
    ensure_on_board(board, x, y)?;
    Ok(neighbor_states(board, x, y).any(CellState::is_alive))
}

/// Number of alive neighbors of `(x, y)`.
pub fn live_neighbor_count(board: &Board, x: usize, y: usize) -> Result<u8, LifeError> {
    Ok(neighbor_counts(board, x, y)?.live)
}

/// Number of zombie neighbors of `(x, y)`.
pub fn zombie_neighbor_count(board: &Board, x: usize, y: usize) -> Result<u8, LifeError> {
    Ok(neighbor_counts(board, x, y)?.zombie)
}

/// Live and zombie neighbor counts of `(x, y)` in a single pass.
pub fn neighbor_counts(board: &Board, x: usize, y: usize) -> Result<NeighborCounts, LifeError> {
    ensure_on_board(board, x, y)?;
    Ok(NeighborCounts::tally(neighbor_states(board, x, y)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
