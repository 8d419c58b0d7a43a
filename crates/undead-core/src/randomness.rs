//! The randomness capability consumed by the mutation rule.
//!
//! Rules never reach for a global generator. Callers hand in something that
//! implements [`RandomSource`]:
//!
//! - [`system_source`] -- the default, backed by `rand`'s thread-local
//!   generator
//! - [`seeded_source`] -- reproducible draws from a fixed seed
//! - [`FixedDraw`] -- returns the same value every time and counts how often
//!   it was asked, for deterministic tests
//! - [`RngSource`] -- wraps any other [`rand::Rng`]

use rand::rngs::{SmallRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Produce the next value in `[0, 1)`.
    fn draw(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn draw(&mut self) -> f64 {
        (**self).draw()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn draw(&mut self) -> f64 {
        (**self).draw()
    }
}

// ---------------------------------------------------------------------------
// RngSource
// ---------------------------------------------------------------------------

/// Adapter exposing a [`rand::Rng`] as a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap a generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn draw(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// The default source: `rand`'s thread-local generator.
pub type SystemSource = RngSource<ThreadRng>;

/// A reproducible source seeded from a `u64`.
pub type SeededSource = RngSource<SmallRng>;

/// Create the default system source.
pub fn system_source() -> SystemSource {
    RngSource::new(rand::rng())
}

/// Create a source whose draws are fully determined by `seed`.
pub fn seeded_source(seed: u64) -> SeededSource {
    RngSource::new(SmallRng::seed_from_u64(seed))
}

impl Default for SystemSource {
    fn default() -> Self {
        system_source()
    }
}

// ---------------------------------------------------------------------------
// FixedDraw
// ---------------------------------------------------------------------------

/// Stub source that returns the same value on every draw.
///
/// Also records how many draws were taken, so tests can assert that a rule
/// only consulted the source on the branch that needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedDraw {
    value: f64,
    draws: usize,
}

impl FixedDraw {
    /// Create a stub returning `value` forever.
    pub const fn new(value: f64) -> Self {
        Self { value, draws: 0 }
    }

    /// The value returned by every draw.
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Number of draws served so far.
    pub const fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for FixedDraw {
    fn draw(&mut self) -> f64 {
        self.draws = self.draws.saturating_add(1);
        self.value
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_draw_counts_every_call() {
        let mut source = FixedDraw::new(0.25);
        assert_eq!(source.draws(), 0);
        for _ in 0..3 {
            assert!((source.draw() - 0.25).abs() < f64::EPSILON);
        }
        assert_eq!(source.draws(), 3);
    }

    #[test]
    fn draws_through_mut_reference_reach_the_stub() {
        fn take_one<S: RandomSource>(mut source: S) -> f64 {
            source.draw()
        }

        let mut source = FixedDraw::new(0.5);
        let _ = take_one(&mut source);
        let _ = take_one(&mut source);
        assert_eq!(source.draws(), 2);
    }

    #[test]
    fn boxed_trait_object_draws() {
        let mut source: Box<dyn RandomSource> = Box::new(FixedDraw::new(0.75));
        assert!((source.draw() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = seeded_source(42);
        let mut b = seeded_source(42);
        for _ in 0..16 {
            let (x, y) = (a.draw(), b.draw());
            assert!((x - y).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn system_draws_stay_in_unit_interval() {
        let mut source = system_source();
        for _ in 0..1000 {
            let value = source.draw();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
