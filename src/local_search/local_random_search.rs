use rand_distr::Normal;
use tracing::{debug, trace};

use crate::domain::Domain;
use crate::error::{ensure_finite, ensure_non_zero, Result, SearchError};
use crate::objective::ContinuousObjective;
use crate::observer::SearchObserver;
use crate::rng::RandomNumberGenerator;
use crate::search::{Incumbent, RunResult, SearchEngine};

/// Parameters of a [`LocalRandomSearch`] run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LocalRandomSearchConfig {
    /// Standard deviation of the Gaussian step applied to each coordinate.
    pub sigma: f64,
    /// Iteration budget. Always consumed in full.
    pub max_iterations: usize,
}

impl Default for LocalRandomSearchConfig {
    fn default() -> Self {
        Self {
            sigma: 0.4,
            max_iterations: 1000,
        }
    }
}

impl LocalRandomSearchConfig {
    pub fn builder() -> LocalRandomSearchConfigBuilder {
        LocalRandomSearchConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(SearchError::Configuration(format!(
                "Sigma must be positive and finite, got {}",
                self.sigma
            )));
        }
        ensure_non_zero(self.max_iterations, "Maximum iterations")
    }
}

#[derive(Debug, Default)]
pub struct LocalRandomSearchConfigBuilder {
    sigma: Option<f64>,
    max_iterations: Option<usize>,
}

impl LocalRandomSearchConfigBuilder {
    pub fn sigma(mut self, value: f64) -> Self {
        self.sigma = Some(value);
        self
    }

    pub fn max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = Some(value);
        self
    }

    pub fn build(self) -> LocalRandomSearchConfig {
        let default = LocalRandomSearchConfig::default();
        LocalRandomSearchConfig {
            sigma: self.sigma.unwrap_or(default.sigma),
            max_iterations: self.max_iterations.unwrap_or(default.max_iterations),
        }
    }
}

/// Local random search with Gaussian perturbations.
///
/// Like [`HillClimbing`](super::HillClimbing) it starts at the domain's lower bound and
/// only accepts strict improvements, but each neighbor is drawn from a normal
/// distribution with standard deviation `sigma` around the current best, and there is
/// no early stop: every run consumes the whole budget.
#[derive(Debug, Clone)]
pub struct LocalRandomSearch<F> {
    objective: F,
    domain: Domain,
    config: LocalRandomSearchConfig,
}

impl<F> LocalRandomSearch<F>
where
    F: ContinuousObjective,
{
    /// Creates a new local random search engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(objective: F, domain: Domain, config: LocalRandomSearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            objective,
            domain,
            config,
        })
    }

    pub fn config(&self) -> &LocalRandomSearchConfig {
        &self.config
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }
}

impl<F> SearchEngine for LocalRandomSearch<F>
where
    F: ContinuousObjective,
{
    type Solution = Vec<f64>;

    fn search_observed(
        &self,
        rng: &mut RandomNumberGenerator,
        observer: &mut dyn SearchObserver,
    ) -> Result<RunResult<Vec<f64>>> {
        let step = Normal::new(0.0, self.config.sigma)
            .map_err(|e| SearchError::Configuration(format!("Invalid sigma: {}", e)))?;

        let start = self.domain.lower_bounds();
        let start_cost = ensure_finite(self.objective.evaluate(&start), "objective value")?;
        let mut best = Incumbent::new(start, start_cost);

        debug!(
            sigma = self.config.sigma,
            max_iterations = self.config.max_iterations,
            start_cost,
            "Starting local random search"
        );

        for iteration in 0..self.config.max_iterations {
            let candidate = best
                .solution
                .iter()
                .map(|x| {
                    let dx: f64 = rng.sample(&step);
                    x + dx
                })
                .collect();
            let candidate = self.domain.clip(candidate);
            let cost = ensure_finite(self.objective.evaluate(&candidate), "objective value")?;

            if best.offer(candidate, cost) {
                trace!(iteration, cost, "Local random search improved");
            }

            observer.on_iteration(iteration, best.cost);
        }

        debug!(best_cost = best.cost, "Local random search finished");

        Ok(best.into_result(self.config.max_iterations))
    }
}
