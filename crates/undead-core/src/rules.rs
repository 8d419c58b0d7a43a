//! Per-cell transition rules.
//!
//! The next state of a cell depends on its current state and on how many of
//! its neighbors are alive or undead. Rules are checked top to bottom and the
//! first match wins:
//!
//! | Current | Condition                         | Next   | [`Rule`]          |
//! |---------|-----------------------------------|--------|-------------------|
//! | Zombie  | at least one live neighbor        | Zombie | `ZombieFeeds`     |
//! | Zombie  | no live neighbor                  | Dead   | `ZombieStarves`   |
//! | Dead    | live + zombie neighbors == 4      | Zombie | `Infection`       |
//! | Dead    | 3 live neighbors, draw >= p       | Alive  | `Birth`           |
//! | Dead    | 3 live neighbors, draw < p        | Zombie | `Mutation`        |
//! | Dead    | otherwise                         | Dead   | `StaysDead`       |
//! | Alive   | at least 2 zombie neighbors       | Zombie | `Turned`          |
//! | Alive   | 2 or 3 live neighbors             | Alive  | `Survival`        |
//! | Alive   | otherwise                         | Dead   | `Death`           |
//!
//! `p` is [`MUTATION_PROBABILITY`]. Infection is checked before birth, so a
//! dead cell with 3 live and 1 zombie neighbor always becomes a zombie.
//!
//! The random source is drawn from exactly once, and only when a dead cell
//! reaches the birth check with 3 live neighbors. No other branch touches it.

use serde::{Deserialize, Serialize};
use undead_types::{Board, CellState};

use crate::error::LifeError;
use crate::neighborhood::{NeighborCounts, neighbor_counts};
use crate::randomness::RandomSource;

/// Chance that a would-be birth produces a zombie instead.
pub const MUTATION_PROBABILITY: f64 = 0.0025;

/// Combined live + zombie neighbors that infect a dead cell.
const INFECTION_NEIGHBORS: u8 = 4;

/// Live neighbors that bring a dead cell to life.
const BIRTH_NEIGHBORS: u8 = 3;

/// Zombie neighbors that turn a live cell.
const TURNING_ZOMBIES: u8 = 2;

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// The branch of the rule table that decided a cell's next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// A zombie next to living prey persists.
    ZombieFeeds,
    /// A zombie with no living neighbor dies.
    ZombieStarves,
    /// A dead cell surrounded by exactly four live or undead cells rises.
    Infection,
    /// A dead cell with three live neighbors is born.
    Birth,
    /// A birth that mutated into a zombie.
    Mutation,
    /// A dead cell stays dead.
    StaysDead,
    /// A live cell overrun by zombies turns.
    Turned,
    /// A live cell with two or three live neighbors survives.
    Survival,
    /// A live cell dies of isolation or overcrowding.
    Death,
}

impl Rule {
    /// Every rule, in table order.
    pub const ALL: [Self; 9] = [
        Self::ZombieFeeds,
        Self::ZombieStarves,
        Self::Infection,
        Self::Birth,
        Self::Mutation,
        Self::StaysDead,
        Self::Turned,
        Self::Survival,
        Self::Death,
    ];

    /// The state a cell moves to when this rule fires.
    pub const fn next_state(self) -> CellState {
        match self {
            Self::ZombieFeeds | Self::Infection | Self::Mutation | Self::Turned => {
                CellState::Zombie
            }
            Self::Birth | Self::Survival => CellState::Alive,
            Self::ZombieStarves | Self::StaysDead | Self::Death => CellState::Dead,
        }
    }

    /// The state a cell must be in for this rule to apply.
    pub const fn applies_to(self) -> CellState {
        match self {
            Self::ZombieFeeds | Self::ZombieStarves => CellState::Zombie,
            Self::Infection | Self::Birth | Self::Mutation | Self::StaysDead => CellState::Dead,
            Self::Turned | Self::Survival | Self::Death => CellState::Alive,
        }
    }

    /// Whether reaching this rule took a draw from the random source.
    pub const fn consumed_draw(self) -> bool {
        matches!(self, Self::Birth | Self::Mutation)
    }
}

impl core::fmt::Display for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::ZombieFeeds => "zombie_feeds",
            Self::ZombieStarves => "zombie_starves",
            Self::Infection => "infection",
            Self::Birth => "birth",
            Self::Mutation => "mutation",
            Self::StaysDead => "stays_dead",
            Self::Turned => "turned",
            Self::Survival => "survival",
            Self::Death => "death",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Rule evaluation
// ---------------------------------------------------------------------------

/// Decide which rule fires for a cell in `current` with the given neighbors.
pub fn apply_rule<R>(current: CellState, counts: NeighborCounts, rng: &mut R) -> Rule
where
    R: RandomSource + ?Sized,
{
    match current {
        CellState::Zombie => {
            if counts.has_live() {
                Rule::ZombieFeeds
            } else {
                Rule::ZombieStarves
            }
        }
        CellState::Dead => {
            if counts.combined() == INFECTION_NEIGHBORS {
                Rule::Infection
            } else if counts.live == BIRTH_NEIGHBORS {
                if rng.draw() < MUTATION_PROBABILITY {
                    Rule::Mutation
                } else {
                    Rule::Birth
                }
            } else {
                Rule::StaysDead
            }
        }
        CellState::Alive => {
            if counts.zombie >= TURNING_ZOMBIES {
                Rule::Turned
            } else if matches!(counts.live, 2 | 3) {
                Rule::Survival
            } else {
                Rule::Death
            }
        }
    }
}

/// Next state for a cell in `current` with the given neighbors.
pub fn transition<R>(current: CellState, counts: NeighborCounts, rng: &mut R) -> CellState
where
    R: RandomSource + ?Sized,
{
    apply_rule(current, counts, rng).next_state()
}

/// Next state of the cell at `(x, y)`, judged against `board` as it is now.
///
/// # Errors
///
/// Returns [`LifeError::InvalidCoordinate`] if `(x, y)` is off the board.
pub fn next_state<R>(board: &Board, x: usize, y: usize, rng: &mut R) -> Result<CellState, LifeError>
where
    R: RandomSource + ?Sized,
{
    let counts = neighbor_counts(board, x, y)?;
    let current = board.get(x, y).unwrap_or_default();
    Ok(transition(current, counts, rng))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
