//! Random draws used by the stochastic operators.
//!
//! Every operator takes an explicit `&mut R` handle. [`RandomSource`] names
//! the two kinds of draw the engine makes, so the order and meaning of each
//! draw is fixed and any [`rand::Rng`] can drive the engine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The draws made by selection, crossover, mutation, and initialization.
///
/// Implemented for every [`Rng`].
pub trait RandomSource {
    /// Uniform sample from `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform integer from the inclusive range `[lo, hi]`.
    fn uniform_inclusive(&mut self, lo: u64, hi: u64) -> u64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn uniform_inclusive(&mut self, lo: u64, hi: u64) -> u64 {
        self.random_range(lo..=hi)
    }
}

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
