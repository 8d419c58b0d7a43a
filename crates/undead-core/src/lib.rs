//! Transition rules and board evolution for the Undead Life automaton.
//!
//! Undead Life is Conway's Game of Life with a third state: zombies. A dead
//! cell surrounded by exactly four live or undead cells rises as a zombie, a
//! live cell next to two or more zombies turns, and a zombie with no living
//! prey nearby starves. Births occasionally mutate into zombies, decided by an
//! injected [`RandomSource`].
//!
//! # Modules
//!
//! - [`neighborhood`] -- Bounded Moore-neighborhood queries and counts.
//! - [`rules`] -- The per-cell rule table, [`next_state`], and [`Rule`].
//! - [`evolution`] -- One-generation board evolution with [`evolve`].
//! - [`randomness`] -- The [`RandomSource`] capability and its providers.
//! - [`config`] -- YAML configuration for the random source.
//! - [`error`] -- [`LifeError`] for per-cell queries.
//!
//! # Example
//!
//! ```
//! use undead_core::{FixedDraw, evolve};
//! use undead_types::Board;
//!
//! let blinker: Board = ".....\n..#..\n..#..\n..#..\n.....".parse()?;
//! let next = evolve(&blinker, &mut FixedDraw::new(0.5));
//! assert_eq!(next.to_string(), ".....\n.....\n.###.\n.....\n.....\n");
//! # Ok::<(), undead_types::BoardError>(())
//! ```

pub mod config;
pub mod error;
pub mod evolution;
pub mod neighborhood;
pub mod randomness;
pub mod rules;

// Re-export primary types at crate root.
pub use config::{ConfigError, LifeConfig, RandomnessConfig};
pub use error::LifeError;
pub use evolution::{GenerationReport, evolve, evolve_in_place, evolve_with_report};
pub use neighborhood::{
    NeighborCounts, has_live_neighbor, live_neighbor_count, neighbor_counts, neighbors,
    zombie_neighbor_count,
};
pub use randomness::{
    FixedDraw, RandomSource, RngSource, SeededSource, SystemSource, seeded_source, system_source,
};
pub use rules::{MUTATION_PROBABILITY, Rule, apply_rule, next_state, transition};
