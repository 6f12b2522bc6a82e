//! Deterministic RNG wrapper for search-level randomness.
//!
//! Simulation runs themselves are fully deterministic and never touch an
//! RNG.  Randomness only enters through multi-start local search, which
//! perturbs independent schedule copies before optimizing them.
//!
//! # Determinism strategy
//!
//! Each restart gets its own `SimRng` derived from the root seed:
//!
//!   seed = root_draw XOR (restart_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive restart indices across the seed space.  Children
//! are derived sequentially before any parallel work starts, so the result
//! does not depend on thread scheduling.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded search-level RNG.
///
/// Used only in single-threaded contexts.  For parallel work, derive one
/// child per worker with [`SimRng::child`] up front.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
