//! # Global Random Search
//!
//! The exploration-only baseline: every iteration samples a fresh point uniformly from
//! the whole domain box, independent of the current best, and keeps it only if it is
//! strictly better. No neighborhood is involved.

use tracing::{debug, trace};

use crate::domain::Domain;
use crate::error::{ensure_finite, ensure_non_zero, Result};
use crate::objective::ContinuousObjective;
use crate::observer::SearchObserver;
use crate::rng::RandomNumberGenerator;
use crate::search::{Incumbent, RunResult, SearchEngine};

/// Parameters of a [`GlobalRandomSearch`] run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalRandomSearchConfig {
    /// Number of samples drawn after the initial one.
    pub max_iterations: usize,
}

impl Default for GlobalRandomSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
        }
    }
}

impl GlobalRandomSearchConfig {
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_zero(self.max_iterations, "Maximum iterations")
    }
}

/// Uniform random sampling of a box-constrained domain.
#[derive(Debug, Clone)]
pub struct GlobalRandomSearch<F> {
    objective: F,
    domain: Domain,
    config: GlobalRandomSearchConfig,
}

impl<F> GlobalRandomSearch<F>
where
    F: ContinuousObjective,
{
    /// Creates a new global random search engine.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iterations` is 0.
    pub fn new(objective: F, domain: Domain, config: GlobalRandomSearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            objective,
            domain,
            config,
        })
    }

    pub fn config(&self) -> &GlobalRandomSearchConfig {
        &self.config
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    fn evaluate(&self, x: &[f64]) -> Result<f64> {
        ensure_finite(self.objective.evaluate(x), "objective value")
    }
}

impl<F> SearchEngine for GlobalRandomSearch<F>
where
    F: ContinuousObjective,
{
    type Solution = Vec<f64>;

    fn search_observed(
        &self,
        rng: &mut RandomNumberGenerator,
        observer: &mut dyn SearchObserver,
    ) -> Result<RunResult<Vec<f64>>> {
        let first = self.domain.sample_uniform(rng);
        let first_cost = self.evaluate(&first)?;
        let mut best = Incumbent::new(first, first_cost);

        debug!(
            max_iterations = self.config.max_iterations,
            dim = self.domain.dim(),
            "Starting global random search"
        );

        for iteration in 0..self.config.max_iterations {
            let candidate = self.domain.sample_uniform(rng);
            let cost = self.evaluate(&candidate)?;

            if best.offer(candidate, cost) {
                trace!(iteration, cost, "Global random search improved");
            }

            observer.on_iteration(iteration, best.cost);
        }

        debug!(best_cost = best.cost, "Global random search finished");

        Ok(best.into_result(self.config.max_iterations))
    }
}
