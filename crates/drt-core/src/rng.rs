//! Deterministic simulation-level RNG wrapper.
//!
//! The simulator is single-threaded where randomness is concerned: only the
//! scenario generator and the order-injection step draw numbers, both from
//! one `SimRng` seeded by `SimConfig::seed`.  The same seed therefore
//! reproduces the same order stream and the same assignments.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG for scenario generation and order injection.
///
/// Used only in single-threaded contexts.  The scenario builder draws the
/// initial orders from it and then hands it to the order generator, so the
/// injected orders continue the same stream.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform draw from the closed interval `[lo, hi]`.
    ///
    /// A zero-width interval (`lo == hi`) is valid and returns `lo`.
    /// Panics if `lo > hi`; scenario validation rules that out.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.0.gen_range(lo..=hi)
    }
}
