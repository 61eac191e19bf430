use tracing::{debug, trace};

use crate::domain::Domain;
use crate::error::{ensure_finite, ensure_non_zero, Result, SearchError};
use crate::objective::ContinuousObjective;
use crate::observer::SearchObserver;
use crate::rng::RandomNumberGenerator;
use crate::search::{Incumbent, RunResult, SearchEngine};

/// Parameters of a [`HillClimbing`] run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct HillClimbingConfig {
    /// Neighborhood radius: each coordinate moves by a uniform step in `[-epsilon, epsilon)`.
    pub epsilon: f64,
    /// Iteration budget.
    pub max_iterations: usize,
    /// Consecutive non-improving iterations tolerated before stopping.
    pub patience: usize,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.1,
            max_iterations: 1000,
            patience: 50,
        }
    }
}

impl HillClimbingConfig {
    pub fn builder() -> HillClimbingConfigBuilder {
        HillClimbingConfigBuilder::default()
    }

    /// Checks that the radius is positive and finite and the budget is non-zero.
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(SearchError::Configuration(format!(
                "Epsilon must be positive and finite, got {}",
                self.epsilon
            )));
        }
        ensure_non_zero(self.max_iterations, "Maximum iterations")
    }
}

#[derive(Debug, Default)]
pub struct HillClimbingConfigBuilder {
    epsilon: Option<f64>,
    max_iterations: Option<usize>,
    patience: Option<usize>,
}

impl HillClimbingConfigBuilder {
    pub fn epsilon(mut self, value: f64) -> Self {
        self.epsilon = Some(value);
        self
    }

    pub fn max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = Some(value);
        self
    }

    pub fn patience(mut self, value: usize) -> Self {
        self.patience = Some(value);
        self
    }

    pub fn build(self) -> HillClimbingConfig {
        let default = HillClimbingConfig::default();
        HillClimbingConfig {
            epsilon: self.epsilon.unwrap_or(default.epsilon),
            max_iterations: self.max_iterations.unwrap_or(default.max_iterations),
            patience: self.patience.unwrap_or(default.patience),
        }
    }
}

/// Greedy hill climbing over a box-constrained continuous domain.
///
/// The search starts at the domain's lower-bound corner, not at a random point. Each
/// iteration draws one neighbor within `epsilon` of the current best, clips it to the
/// domain and keeps it only if it is strictly better. The run ends once more than
/// `patience` iterations in a row fail to improve, or when the budget is spent. A run
/// descends a single basin; there are no restarts.
#[derive(Debug, Clone)]
pub struct HillClimbing<F> {
    objective: F,
    domain: Domain,
    config: HillClimbingConfig,
}

impl<F> HillClimbing<F>
where
    F: ContinuousObjective,
{
    /// Creates a new hill climbing engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(objective: F, domain: Domain, config: HillClimbingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            objective,
            domain,
            config,
        })
    }

    pub fn config(&self) -> &HillClimbingConfig {
        &self.config
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    fn neighbor(&self, center: &[f64], rng: &mut RandomNumberGenerator) -> Vec<f64> {
        let eps = self.config.epsilon;
        let noise = rng.fetch_uniform(-eps, eps, center.len());
        let candidate = center.iter().zip(noise).map(|(x, dx)| x + dx).collect();
        self.domain.clip(candidate)
    }
}

impl<F> SearchEngine for HillClimbing<F>
where
    F: ContinuousObjective,
{
    type Solution = Vec<f64>;

    fn search_observed(
        &self,
        rng: &mut RandomNumberGenerator,
        observer: &mut dyn SearchObserver,
    ) -> Result<RunResult<Vec<f64>>> {
        let start = self.domain.lower_bounds();
        let start_cost = ensure_finite(self.objective.evaluate(&start), "objective value")?;
        let mut best = Incumbent::new(start, start_cost);

        debug!(
            epsilon = self.config.epsilon,
            max_iterations = self.config.max_iterations,
            patience = self.config.patience,
            start_cost,
            "Starting hill climbing"
        );

        let mut stalled = 0;
        let mut iterations = 0;

        for iteration in 0..self.config.max_iterations {
            iterations = iteration + 1;

            let candidate = self.neighbor(&best.solution, rng);
            let cost = ensure_finite(self.objective.evaluate(&candidate), "objective value")?;

            if best.offer(candidate, cost) {
                trace!(iteration, cost, "Hill climbing improved");
                stalled = 0;
            } else {
                stalled += 1;
            }

            observer.on_iteration(iteration, best.cost);

            if stalled > self.config.patience {
                break;
            }
        }

        debug!(best_cost = best.cost, iterations, "Hill climbing finished");

        Ok(best.into_result(iterations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::HistoryRecorder;

    fn shifted_sphere(x: &[f64]) -> f64 {
        x.iter().map(|v| (v - 0.5).powi(2)).sum()
    }

    #[test]
    fn test_config_builder() {
        let config = HillClimbingConfig::builder()
            .epsilon(0.3)
            .max_iterations(10)
            .build();

        assert_eq!(config.epsilon, 0.3);
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.patience, 50);
    }

    #[test]
    fn test_invalid_config() {
        let domain = Domain::uniform(2, -1.0, 1.0).unwrap();

        let config = HillClimbingConfig::builder().epsilon(0.0).build();
        assert!(HillClimbing::new(shifted_sphere, domain.clone(), config).is_err());

        let config = HillClimbingConfig::builder().max_iterations(0).build();
        assert!(HillClimbing::new(shifted_sphere, domain, config).is_err());
    }

    #[test]
    fn test_zero_patience_stops_after_first_failure() {
        // The lower-bound corner is the minimum, so no neighbor can improve on it.
        let domain = Domain::uniform(2, 0.5, 2.0).unwrap();
        let config = HillClimbingConfig::builder().patience(0).build();
        let engine = HillClimbing::new(shifted_sphere, domain, config).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let result = engine.search(&mut rng).unwrap();

        assert_eq!(result.iterations, 1);
        assert_eq!(result.solution, vec![0.5, 0.5]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_patience_bounds_stall() {
        let domain = Domain::uniform(2, 0.5, 2.0).unwrap();
        let config = HillClimbingConfig::builder().patience(7).build();
        let engine = HillClimbing::new(shifted_sphere, domain, config).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);

        let result = engine.search(&mut rng).unwrap();

        assert_eq!(result.iterations, 8);
    }

    #[test]
    fn test_best_cost_never_increases() {
        let domain = Domain::uniform(2, -2.0, 2.0).unwrap();
        let config = HillClimbingConfig::builder()
            .epsilon(0.2)
            .max_iterations(2000)
            .patience(100)
            .build();
        let engine = HillClimbing::new(shifted_sphere, domain, config).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(3);
        let mut recorder = HistoryRecorder::new();

        let result = engine.search_observed(&mut rng, &mut recorder).unwrap();

        assert_eq!(recorder.iterations.len(), result.iterations);
        assert!(recorder.iterations.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(recorder.iterations.last().copied(), Some(result.cost));
    }

    #[test]
    fn test_start_is_lower_bound() {
        // A single iteration can move at most epsilon away from the lower-bound corner.
        let domain = Domain::uniform(2, -2.0, 2.0).unwrap();
        let config = HillClimbingConfig::builder()
            .epsilon(0.1)
            .max_iterations(1)
            .build();
        let engine = HillClimbing::new(shifted_sphere, domain, config).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(4);

        let result = engine.search(&mut rng).unwrap();

        assert!(result.solution.iter().all(|&x| x <= -1.9));
    }

    #[test]
    fn test_non_finite_objective_is_an_error() {
        let domain = Domain::uniform(1, 0.0, 1.0).unwrap();
        let engine = HillClimbing::new(
            |_: &[f64]| f64::NAN,
            domain,
            HillClimbingConfig::default(),
        )
        .unwrap();
        let mut rng = RandomNumberGenerator::from_seed(5);

        assert!(matches!(
            engine.search(&mut rng),
            Err(SearchError::FitnessCalculation(_))
        ));
    }
}
