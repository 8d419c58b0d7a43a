//! Whole-board evolution.
//!
//! One call advances every cell by one generation. Neighbor counts are always
//! read from the generation-N board while generation N+1 is written into a
//! fresh board, so no cell ever sees a neighbor that has already advanced.
//! [`evolve_in_place`] keeps that guarantee by swapping the finished board in
//! only after every cell has been computed.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;
use undead_types::{Board, CellState};

use crate::neighborhood::{NeighborCounts, neighbor_states};
use crate::randomness::RandomSource;
use crate::rules::{Rule, apply_rule};

// ---------------------------------------------------------------------------
// GenerationReport
// ---------------------------------------------------------------------------

/// What happened during one generation.
///
/// Counts how often each [`Rule`] fired and the population of each state in
/// the resulting board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Number of cells decided by each rule. Rules that never fired are absent.
    rules: BTreeMap<Rule, usize>,
    /// Number of cells in each state after the step.
    population: BTreeMap<CellState, usize>,
    /// Cells whose state differs from the previous generation.
    changed: usize,
}

impl GenerationReport {
    fn record(&mut self, before: CellState, rule: Rule) {
        let after = rule.next_state();
        let fired = self.rules.entry(rule).or_insert(0);
        *fired = fired.saturating_add(1);
        let population = self.population.entry(after).or_insert(0);
        *population = population.saturating_add(1);
        if before != after {
            self.changed = self.changed.saturating_add(1);
        }
    }

    /// How many cells were decided by `rule`.
    pub fn fired(&self, rule: Rule) -> usize {
        self.rules.get(&rule).copied().unwrap_or(0)
    }

    /// How many cells hold `state` in the new generation.
    pub fn population(&self, state: CellState) -> usize {
        self.population.get(&state).copied().unwrap_or(0)
    }

    /// Dead cells that came to life.
    pub fn births(&self) -> usize {
        self.fired(Rule::Birth)
    }

    /// Would-be births that mutated into zombies.
    pub fn mutations(&self) -> usize {
        self.fired(Rule::Mutation)
    }

    /// Dead cells raised by four live or undead neighbors.
    pub fn infections(&self) -> usize {
        self.fired(Rule::Infection)
    }

    /// Cells whose state changed.
    pub const fn changed(&self) -> usize {
        self.changed
    }

    /// Total cells evaluated.
    pub fn cells(&self) -> usize {
        self.rules.values().copied().fold(0, usize::saturating_add)
    }

    /// Number of draws taken from the random source.
    pub fn draws(&self) -> usize {
        self.births().saturating_add(self.mutations())
    }
}

// ---------------------------------------------------------------------------
// Evolution
// ---------------------------------------------------------------------------

/// Compute the next generation of `board`.
///
/// The returned board has the same dimensions. `board` itself is only read.
pub fn evolve<R>(board: &Board, rng: &mut R) -> Board
where
    R: RandomSource + ?Sized,
{
    evolve_with_report(board, rng).0
}

/// Compute the next generation of `board` and report which rules fired.
pub fn evolve_with_report<R>(board: &Board, rng: &mut R) -> (Board, GenerationReport)
where
    R: RandomSource + ?Sized,
{
    let mut report = GenerationReport::default();

    let next = board.map_cells(|x, y, current| {
        let counts = NeighborCounts::tally(neighbor_states(board, x, y));
        let rule = apply_rule(current, counts, &mut *rng);
        report.record(current, rule);
        rule.next_state()
    });

    debug!(
        width = board.width(),
        height = board.height(),
        births = report.births(),
        mutations = report.mutations(),
        infections = report.infections(),
        changed = report.changed(),
        "Generation evolved"
    );

    (next, report)
}

/// Advance `board` by one generation, replacing it with the result.
///
/// The new generation is computed in full before `board` is overwritten.
pub fn evolve_in_place<R>(board: &mut Board, rng: &mut R) -> GenerationReport
where
    R: RandomSource + ?Sized,
{
    let (next, report) = evolve_with_report(board, rng);
    *board = next;
    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
