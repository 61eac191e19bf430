//! # Genetic Algorithms
//!
//! Two variants share the same generational loop: evaluate the whole population,
//! report [`GenerationStats`], select parents by tournament, recombine, mutate and
//! replace the population wholesale.
//!
//! - [`PermutationGa`] evolves permutations (routing problems). Fitness is the
//!   reciprocal of the tour cost and is maximized; it supports elitism and an
//!   acceptable-cost early stop.
//! - [`BinaryGa`] evolves bit-strings decoded onto a continuous [`Domain`] and
//!   minimizes the raw objective.
//!
//! [`Domain`]: crate::domain::Domain

pub mod binary;
pub mod options;
pub mod permutation;
pub mod stats;

use std::fmt::Debug;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{ensure_finite, Result};

pub use binary::BinaryGa;
pub use options::{BinaryGaOptions, LogLevel, PermutationGaOptions};
pub use permutation::PermutationGa;
pub use stats::GenerationStats;

/// Evaluates every individual, in parallel once the population reaches `parallel_threshold`.
///
/// Fails on the first non-finite score.
pub(crate) fn evaluate_population<T, E>(
    population: &[T],
    parallel_threshold: usize,
    evaluate: E,
) -> Result<Vec<f64>>
where
    T: Sync,
    E: Fn(&T) -> f64 + Sync,
{
    let checked = |individual: &T| ensure_finite(evaluate(individual), "fitness score");

    if population.len() >= parallel_threshold {
        population.par_iter().map(checked).collect()
    } else {
        population.iter().map(checked).collect()
    }
}

/// Emits the per-generation log lines requested by `log_level`.
pub(crate) fn log_generation<T: Debug>(
    log_level: LogLevel,
    stats: &GenerationStats,
    population: &[T],
    costs: &[f64],
) {
    match log_level {
        LogLevel::Minimal => debug!(
            generation = stats.generation,
            best = stats.best,
            average = stats.average,
            worst = stats.worst,
            "Generation evaluated"
        ),
        LogLevel::Verbose => {
            debug!(
                generation = stats.generation,
                best = stats.best,
                average = stats.average,
                worst = stats.worst,
                "Generation evaluated"
            );
            population.iter().zip(costs).for_each(|(individual, cost)| {
                trace!(generation = stats.generation, cost, "Individual: {:?}", individual);
            });
        }
        LogLevel::None => {}
    }
}

/// Index of the lowest cost; the first one on ties.
pub(crate) fn index_of_min(costs: &[f64]) -> Option<usize> {
    costs
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (idx, &cost)| match best {
            Some((_, best_cost)) if cost >= best_cost => best,
            _ => Some((idx, cost)),
        })
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;

    #[test]
    fn test_evaluate_population_sequential_and_parallel_agree() {
        let population: Vec<Vec<f64>> = (0..50).map(|i| vec![i as f64, 1.0]).collect();
        let sum = |x: &Vec<f64>| x.iter().sum::<f64>();

        let sequential = evaluate_population(&population, usize::MAX, sum).unwrap();
        let parallel = evaluate_population(&population, 1, sum).unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(sequential[10], 11.0);
    }

    #[test]
    fn test_evaluate_population_rejects_non_finite() {
        let population = vec![1.0, 2.0, 0.0];
        let result = evaluate_population(&population, 1000, |x: &f64| 1.0 / x);
        assert!(matches!(result, Err(SearchError::FitnessCalculation(_))));
    }

    #[test]
    fn test_index_of_min() {
        assert_eq!(index_of_min(&[3.0, 1.0, 2.0, 1.0]), Some(1));
        assert_eq!(index_of_min(&[]), None);
    }
}
