//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for the
//! solver. It is passed explicitly into the population generator and the
//! evolution loop so that a run can be reproduced from its seed.
//!
//! ## Example
//!
//! ```rust
//! use mkga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let bits = rng.random_bits(8);
//! assert_eq!(bits.len(), 8);
//!
//! let mut same = RandomNumberGenerator::from_seed(7);
//! assert_eq!(same.random_bits(8), bits);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;

use crate::encoding::BitString;

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the solver needs.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws `len` independent bits, each set with probability one half.
    pub fn random_bits(&mut self, len: usize) -> BitString {
        (0..len).map(|_| self.rng.gen::<bool>()).collect()
    }

    /// Returns a uniform index in `[0, upper)`, or 0 when `upper` is 0.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }

    /// Returns `true` with probability `p`. Values outside `[0, 1]` are clamped.
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Returns a uniform float in `[0, 1)`.
    pub fn gen_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Generates a specified number of random floating-point numbers within the given range.
    ///
    /// # Parameters
    ///
    /// - `from`: The lower bound of the range (inclusive).
    /// - `to`: The upper bound of the range (exclusive).
    /// - `num`: The number of random numbers to generate.
    pub fn fetch_uniform(&mut self, from: f64, to: f64, num: usize) -> VecDeque<f64> {
        let mut uniform_numbers = VecDeque::with_capacity(num);
        uniform_numbers.extend((0..num).map(|_| self.rng.gen_range(from..to)));
        uniform_numbers
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
