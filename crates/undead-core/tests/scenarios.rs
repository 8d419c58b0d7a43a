//! Whole-board scenarios for `undead-core`.
//!
//! Each scenario starts from a hand-drawn board and checks one or more
//! generations against the expected picture.

// Scenario tests use unwrap extensively for clarity -- panicking on failure
// is the correct behavior in test code.
#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use undead_core::{
    FixedDraw, GenerationReport, LifeConfig, RandomSource, Rule, evolve, evolve_in_place,
    evolve_with_report, seeded_source,
};
use undead_types::{Board, CellState};

fn board(text: &str) -> Board {
    text.parse().unwrap()
}

/// Draw that never triggers a mutation.
fn no_mutation() -> FixedDraw {
    FixedDraw::new(0.5)
}

// ---------------------------------------------------------------------------
// Classic Life behavior
// ---------------------------------------------------------------------------

#[test]
fn block_still_life_is_unchanged() {
    let block = board(
        "
        ....
        .##.
        .##.
        ....
        ",
    );
    assert_eq!(evolve(&block, &mut no_mutation()), block);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let vertical = board(
        "
        .....
        ...#.
        ...#.
        ...#.
        .....
        ",
    );
    let horizontal = board(
        "
        .....
        .....
        ..###
        .....
        .....
        ",
    );
    let mut rng = no_mutation();

    let first = evolve(&vertical, &mut rng);
    assert_eq!(first, horizontal);
    assert_eq!(first.count(CellState::Zombie), 0);

    let second = evolve(&first, &mut rng);
    assert_eq!(second, vertical);
}

#[test]
fn lone_cells_die_at_the_edges() {
    let start = board(
        "
        #...#
        .....
        #...#
        ",
    );
    let next = evolve(&start, &mut no_mutation());
    assert_eq!(next.count(CellState::Dead), next.len());
}

// ---------------------------------------------------------------------------
// Zombies
// ---------------------------------------------------------------------------

#[test]
fn zombie_outlives_its_prey_by_one_generation() {
    let mut current = board(
        "
        #Z.
        ...
        ...
        ",
    );

    evolve_in_place(&mut current, &mut no_mutation());
    assert_eq!(current, board(".Z.\n...\n..."));

    evolve_in_place(&mut current, &mut no_mutation());
    assert_eq!(current.count(CellState::Dead), 9);
}

#[test]
fn zombies_consume_a_block_then_starve() {
    let start = board(
        "
        ##.
        ZZ.
        ...
        ",
    );
    let (overrun, report) = evolve_with_report(&start, &mut no_mutation());
    assert_eq!(overrun, board("ZZ.\nZZ.\n..."));
    assert_eq!(report.fired(Rule::Turned), 2);
    assert_eq!(report.fired(Rule::ZombieFeeds), 2);

    let starved = evolve(&overrun, &mut no_mutation());
    assert_eq!(starved.count(CellState::Dead), 9);
}

#[test]
fn infection_raises_a_zombie_without_drawing() {
    // The centre has three live neighbors and one zombie: infection, not birth.
    let start = board(
        "
        ###
        Z..
        ...
        ",
    );
    let mut rng = FixedDraw::new(0.9);
    let (next, report) = evolve_with_report(&start, &mut rng);

    assert_eq!(next.get(1, 1), Some(CellState::Zombie));
    assert_eq!(report.fired(Rule::Infection), report.infections());
    assert!(report.infections() >= 1);
    assert_eq!(rng.draws(), report.draws());
}

#[test]
fn every_birth_mutates_when_the_draw_is_tiny() {
    let vertical = board(".....\n...#.\n...#.\n...#.\n.....");
    let (next, report) = evolve_with_report(&vertical, &mut FixedDraw::new(0.0001));

    assert_eq!(next, board(".....\n.....\n..Z#Z\n.....\n....."));
    assert_eq!(report.mutations(), 2);
    assert_eq!(report.population(CellState::Alive), 1);
    assert_eq!(report.population(CellState::Zombie), 2);
}

// ---------------------------------------------------------------------------
// Randomness
// ---------------------------------------------------------------------------

fn random_board(width: usize, height: usize, seed: u64) -> Board {
    let mut source = seeded_source(seed);
    let len = width.checked_mul(height).unwrap();
    let codes: Vec<u8> = (0..len)
        .map(|_| match source.draw() {
            d if d < 0.6 => 0,
            d if d < 0.9 => 1,
            _ => 2,
        })
        .collect();
    Board::from_codes(width, height, &codes).unwrap()
}

fn run(start: &Board, generations: usize, seed: u64) -> (Board, Vec<GenerationReport>) {
    let mut rng = seeded_source(seed);
    let mut current = start.clone();
    let reports = (0..generations)
        .map(|_| evolve_in_place(&mut current, &mut rng))
        .collect();
    (current, reports)
}

#[test]
fn same_seed_same_history() {
    let start = random_board(20, 15, 3);
    let (a, reports_a) = run(&start, 10, 99);
    let (b, reports_b) = run(&start, 10, 99);
    assert_eq!(a, b);
    assert_eq!(reports_a, reports_b);
}

#[test]
fn dimensions_and_cell_totals_are_preserved() {
    let start = random_board(17, 11, 5);
    let (end, reports) = run(&start, 5, 1);

    assert_eq!(end.width(), 17);
    assert_eq!(end.height(), 11);
    for report in &reports {
        assert_eq!(report.cells(), 17 * 11);
        let total: usize = CellState::ALL
            .into_iter()
            .map(|state| report.population(state))
            .sum();
        assert_eq!(total, 17 * 11);
    }
}

#[test]
fn configured_fixed_source_drives_evolution() {
    let config = LifeConfig {
        randomness: undead_core::RandomnessConfig::Fixed { value: 0.001 },
    };
    let mut rng = config.randomness.build().unwrap();
    let vertical = board(".....\n...#.\n...#.\n...#.\n.....");

    let next = evolve(&vertical, &mut rng);
    assert_eq!(next.count(CellState::Zombie), 2);
}
