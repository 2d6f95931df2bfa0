//! RNG wrapper for drawing cycle lengths.
//!
//! Each timer loop owns its own `CycleRng`; it is created on the timer
//! thread and never shared, so no synchronisation is needed.  A fixed seed
//! reproduces the same sequence of cycle lengths run after run.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::CycleConfig;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Cycle-length RNG.
pub struct CycleRng(SmallRng);

impl CycleRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        CycleRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        CycleRng(SmallRng::from_entropy())
    }

    /// Seed from `config.seed`, falling back to OS entropy.
    pub fn for_config(config: &CycleConfig) -> Self {
        match config.seed {
            Some(seed) => Self::new(seed),
            None       => Self::from_entropy(),
        }
    }

    /// Derive a child `CycleRng` with a different seed offset — useful when
    /// several signals are started from one root seed.
    pub fn child(&mut self, offset: u64) -> CycleRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        CycleRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Draw the next cycle length uniformly from the inclusive bounds of
    /// `config`, at millisecond resolution.
    #[inline]
    pub fn next_cycle(&mut self, config: &CycleConfig) -> Duration {
        let ms = self.0.gen_range(config.min_cycle_ms..=config.max_cycle_ms);
        Duration::from_millis(ms)
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
}
