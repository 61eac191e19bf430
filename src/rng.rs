//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the only source of randomness in the crate.
//! Every engine draws from a generator that the caller owns and passes in, so runs are
//! independently seedable and reproducible, and concurrent runs never share state.
//!
//! ## Example
//!
//! ```rust
//! use stochsearch::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let noise = rng.fetch_uniform(-0.1, 0.1, 5);
//!
//! assert_eq!(noise.len(), 5);
//! assert!(noise.iter().all(|x| (-0.1..0.1).contains(x)));
//! ```

use rand::{
    distributions::Distribution,
    rngs::StdRng,
    seq::{index, SliceRandom},
    Rng, SeedableRng,
};

/// A wrapper around the `rand` crate's `StdRng` that provides the sampling
/// primitives used by the search engines.
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
    /// This is useful for reproducible tests, benchmarks and repeated experiments.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a number uniformly from `[from, to)`.
    ///
    /// Returns `from` when the range is empty.
    pub fn uniform(&mut self, from: f64, to: f64) -> f64 {
        if from < to {
            self.rng.gen_range(from..to)
        } else {
            from
        }
    }

    /// Draws a number uniformly from the closed interval `[from, to]`.
    ///
    /// Returns `from` when `to < from`.
    pub fn uniform_inclusive(&mut self, from: f64, to: f64) -> f64 {
        if from <= to {
            self.rng.gen_range(from..=to)
        } else {
            from
        }
    }

    /// Generates a specified number of random floating-point numbers within the given range.
    ///
    /// # Parameters
    ///
    /// - `from`: The lower bound of the range (inclusive).
    /// - `to`: The upper bound of the range (exclusive).
    /// - `num`: The number of random numbers to generate.
    pub fn fetch_uniform(&mut self, from: f64, to: f64, num: usize) -> Vec<f64> {
        (0..num).map(|_| self.uniform(from, to)).collect()
    }

    /// Samples a value from an arbitrary `rand` distribution.
    pub fn sample<T, D>(&mut self, distribution: &D) -> T
    where
        D: Distribution<T>,
    {
        distribution.sample(&mut self.rng)
    }

    /// Returns `true` with probability `p`.
    ///
    /// Values of `p` at or below zero never fire; values at or above one always do.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Draws an index uniformly from `0..len`.
    ///
    /// `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Draws `amount` distinct indices from `0..len`, uniformly and without replacement.
    ///
    /// `amount` is clamped to `len`.
    pub fn distinct_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, len, amount.min(len)).into_vec()
    }

    /// Returns a uniformly random permutation of `0..n`.
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut values: Vec<usize> = (0..n).collect();
        values.shuffle(&mut self.rng);
        values
    }

    /// Returns `len` independent fair bits.
    pub fn random_bits(&mut self, len: usize) -> Vec<bool> {
        (0..len).map(|_| self.rng.gen::<bool>()).collect()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
