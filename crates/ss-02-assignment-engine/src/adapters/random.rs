//! Random Source Adapters

use crate::ports::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reproducible random source.
///
/// The same seed over the same roster yields the same assignment.
#[derive(Debug, Clone)]
pub struct SeededRandomSource {
    seed: u64,
    rng: StdRng,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandomSource {
    fn next_index(&mut self, upper: usize) -> usize {
        if upper <= 1 {
            0
        } else {
            self.rng.gen_range(0..upper)
        }
    }
}

/// Production random source seeded from OS entropy.
#[derive(Debug)]
pub struct EntropyRandomSource {
    rng: StdRng,
}

impl EntropyRandomSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandomSource {
    fn next_index(&mut self, upper: usize) -> usize {
        if upper <= 1 {
            0
        } else {
            self.rng.gen_range(0..upper)
        }
    }
}

/// Scripted random source for deterministic testing.
///
/// Replays `values` in order (wrapping around), each reduced modulo the
/// requested bound.
///
/// # Example
///
/// ```rust
/// use ss_02_assignment_engine::{RandomSource, ScriptedRandomSource};
///
/// let mut rng = ScriptedRandomSource::new(vec![1, 5]);
/// assert_eq!(rng.next_index(3), 1);
/// assert_eq!(rng.next_index(3), 2);
/// assert_eq!(rng.next_index(3), 1); // wraps
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRandomSource {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandomSource {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Always returns the first index.
    pub fn first() -> Self {
        Self::new(vec![0])
    }

    /// Values consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandomSource {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.values.is_empty() || upper <= 1 {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % upper
    }
}
