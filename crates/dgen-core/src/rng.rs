//! Random number generation for dungeon generation
//!
//! Uses a seeded ChaCha RNG so that a generation run is reproducible from
//! its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Dungeon random number generator
///
/// Wraps ChaCha8Rng. Every pipeline stage takes `&mut DungeonRng`, so the
/// sequence of draws is fully determined by the seed and the settings.
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DungeonRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw a fresh seed from the thread RNG
    pub fn random_seed() -> u64 {
        rand::random()
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        Self::new(Self::random_seed())
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns a value in `lo..=hi`
    ///
    /// Returns `lo` if the range is empty.
    pub fn range_inclusive(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform draw in [0, 1)
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    /// Draws once and returns true if the draw falls below `probability`
    ///
    /// A probability of 0 never succeeds, 1 always does.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.uniform() < probability
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len())])
        }
    }
}

impl Default for DungeonRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
