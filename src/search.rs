//! # Search Engines and Run Results
//!
//! Every engine is an immutable value: it holds its objective, its domain and its
//! configuration, and each call to [`SearchEngine::search`] builds a fresh search state
//! from a caller-owned random number generator. Engines can therefore be shared across
//! threads and run repeatedly without interference.

use crate::error::Result;
use crate::observer::{NoopObserver, SearchObserver};
use crate::rng::RandomNumberGenerator;

/// The terminal outcome of one search run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult<S> {
    /// The best candidate found.
    pub solution: S,
    /// The objective value of `solution`, in the engine's own sign convention.
    pub cost: f64,
    /// Iterations or generations consumed before stopping.
    pub iterations: usize,
}

impl<S> RunResult<S> {
    pub fn new(solution: S, cost: f64, iterations: usize) -> Self {
        Self {
            solution,
            cost,
            iterations,
        }
    }

    /// Splits the result into the `(solution, cost)` pair consumed by the mode aggregator.
    pub fn into_pair(self) -> (S, f64) {
        (self.solution, self.cost)
    }
}

/// A search engine that can be run repeatedly from fresh random state.
pub trait SearchEngine {
    /// The candidate type returned by the engine.
    type Solution;

    /// Runs one search, reporting progress to `observer`.
    fn search_observed(
        &self,
        rng: &mut RandomNumberGenerator,
        observer: &mut dyn SearchObserver,
    ) -> Result<RunResult<Self::Solution>>;

    /// Runs one search without progress reporting.
    fn search(&self, rng: &mut RandomNumberGenerator) -> Result<RunResult<Self::Solution>> {
        self.search_observed(rng, &mut NoopObserver)
    }
}

/// Best-so-far state of a single-point search.
///
/// Only strict improvements replace the incumbent, so its cost never increases.
#[derive(Debug, Clone)]
pub(crate) struct Incumbent {
    pub(crate) solution: Vec<f64>,
    pub(crate) cost: f64,
}

impl Incumbent {
    pub(crate) fn new(solution: Vec<f64>, cost: f64) -> Self {
        Self { solution, cost }
    }

    /// Replaces the incumbent if `cost` is strictly lower. Returns whether it did.
    pub(crate) fn offer(&mut self, solution: Vec<f64>, cost: f64) -> bool {
        if cost < self.cost {
            self.solution = solution;
            self.cost = cost;
            true
        } else {
            false
        }
    }

    pub(crate) fn into_result(self, iterations: usize) -> RunResult<Vec<f64>> {
        RunResult::new(self.solution, self.cost, iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incumbent_accepts_only_strict_improvements() {
        let mut incumbent = Incumbent::new(vec![0.0], 1.0);
        assert!(!incumbent.offer(vec![1.0], 1.0));
        assert!(!incumbent.offer(vec![2.0], 2.0));
        assert!(incumbent.offer(vec![3.0], 0.5));

        let result = incumbent.into_result(3);
        assert_eq!(result.solution, vec![3.0]);
        assert_eq!(result.cost, 0.5);
        assert_eq!(result.iterations, 3);
    }

    #[test]
    fn test_into_pair() {
        let result = RunResult::new(vec![1.0, 2.0], 0.5, 10);
        assert_eq!(result.iterations, 10);
        assert_eq!(result.into_pair(), (vec![1.0, 2.0], 0.5));
    }
}
