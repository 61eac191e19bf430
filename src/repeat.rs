//! # Repeated Runs
//!
//! Stochastic engines are judged over many independent runs. Runs share nothing but
//! the immutable engine, so they are dispatched in parallel with `rayon`, each with its
//! own [`RandomNumberGenerator`]. With a base seed, run `i` is seeded with
//! `base_seed + i` and the whole batch is reproducible regardless of scheduling.
//!
//! ## Example
//!
//! ```rust
//! use stochsearch::domain::Domain;
//! use stochsearch::global_search::{GlobalRandomSearch, GlobalRandomSearchConfig};
//! use stochsearch::repeat::{repeat_search, CostSummary};
//!
//! let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
//! let domain = Domain::uniform(2, -1.0, 1.0).unwrap();
//! let engine =
//!     GlobalRandomSearch::new(sphere, domain, GlobalRandomSearchConfig::new(200)).unwrap();
//!
//! let runs = repeat_search(&engine, 20, Some(42)).unwrap();
//! let summary = CostSummary::from_results(&runs).unwrap();
//!
//! assert_eq!(summary.runs, 20);
//! assert!(summary.best <= summary.mean && summary.mean <= summary.worst);
//! ```

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::search::{RunResult, SearchEngine};

fn run_rng(base_seed: Option<u64>, run: usize) -> RandomNumberGenerator {
    match base_seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed.wrapping_add(run as u64)),
        None => RandomNumberGenerator::new(),
    }
}

/// Executes `runs` independent runs of `run_fn` in parallel.
///
/// `run_fn` receives the run index and the run's own generator. Results keep the run
/// order. The first error aborts the batch.
pub fn repeat_runs<T, F>(runs: usize, base_seed: Option<u64>, run_fn: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize, &mut RandomNumberGenerator) -> Result<T> + Sync,
{
    debug!(runs, ?base_seed, "Dispatching repeated runs");

    (0..runs)
        .into_par_iter()
        .map(|run| {
            let mut rng = run_rng(base_seed, run);
            run_fn(run, &mut rng)
        })
        .collect()
}

/// Runs `engine.search` `runs` times in parallel.
pub fn repeat_search<E>(
    engine: &E,
    runs: usize,
    base_seed: Option<u64>,
) -> Result<Vec<RunResult<E::Solution>>>
where
    E: SearchEngine + Sync,
    E::Solution: Send,
{
    repeat_runs(runs, base_seed, |_, rng| engine.search(rng))
}

/// Summary statistics of the final costs of a batch of runs.
///
/// "Best" is the lowest cost. For engines that maximize (simulated annealing), read
/// `worst` as the best value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CostSummary {
    pub runs: usize,
    pub best: f64,
    pub mean: f64,
    pub worst: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl CostSummary {
    /// Returns `None` for an empty slice.
    pub fn from_costs(costs: &[f64]) -> Option<Self> {
        if costs.is_empty() {
            return None;
        }

        let n = costs.len() as f64;
        let mean = costs.iter().sum::<f64>() / n;
        let variance = costs.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            runs: costs.len(),
            best: costs.iter().copied().fold(f64::INFINITY, f64::min),
            mean,
            worst: costs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            std_dev: variance.sqrt(),
        })
    }

    pub fn from_results<S>(results: &[RunResult<S>]) -> Option<Self> {
        let costs: Vec<f64> = results.iter().map(|r| r.cost).collect();
        Self::from_costs(&costs)
    }
}
