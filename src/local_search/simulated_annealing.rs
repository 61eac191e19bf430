use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::error::{ensure_finite, ensure_non_zero, Result, SearchError};
use crate::objective::DiscreteObjective;
use crate::observer::{NoopObserver, SearchObserver};
use crate::rng::RandomNumberGenerator;
use crate::search::RunResult;

/// Parameters of a [`SimulatedAnnealing`] run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingConfig {
    /// Starting temperature `T0`.
    pub initial_temperature: f64,
    /// Geometric cooling factor `alpha`, applied after every iteration.
    pub cooling_rate: f64,
    /// Iteration budget.
    pub max_iterations: usize,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10.0,
            cooling_rate: 0.99,
            max_iterations: 5000,
        }
    }
}

impl AnnealingConfig {
    pub fn builder() -> AnnealingConfigBuilder {
        AnnealingConfigBuilder::default()
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `initial_temperature` is not positive and finite
    /// - `cooling_rate` is not strictly between 0 and 1
    /// - `max_iterations` is 0
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(SearchError::Configuration(format!(
                "Initial temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(SearchError::Configuration(format!(
                "Cooling rate must be strictly between 0.0 and 1.0, got {}",
                self.cooling_rate
            )));
        }
        ensure_non_zero(self.max_iterations, "Maximum iterations")
    }
}

#[derive(Debug, Default)]
pub struct AnnealingConfigBuilder {
    initial_temperature: Option<f64>,
    cooling_rate: Option<f64>,
    max_iterations: Option<usize>,
}

impl AnnealingConfigBuilder {
    pub fn initial_temperature(mut self, value: f64) -> Self {
        self.initial_temperature = Some(value);
        self
    }

    pub fn cooling_rate(mut self, value: f64) -> Self {
        self.cooling_rate = Some(value);
        self
    }

    pub fn max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = Some(value);
        self
    }

    pub fn build(self) -> AnnealingConfig {
        let default = AnnealingConfig::default();
        AnnealingConfig {
            initial_temperature: self
                .initial_temperature
                .unwrap_or(default.initial_temperature),
            cooling_rate: self.cooling_rate.unwrap_or(default.cooling_rate),
            max_iterations: self.max_iterations.unwrap_or(default.max_iterations),
        }
    }
}

/// Probability of moving to a candidate that changes the objective by `delta`
/// (maximization) at temperature `temperature`.
///
/// Improvements are always taken. Otherwise the Metropolis factor `exp(delta / T)` is
/// returned, and any temperature that has decayed to zero, or any arithmetic that
/// underflows or degenerates, yields 0.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta > 0.0 {
        return 1.0;
    }
    if !(temperature > 0.0) {
        return 0.0;
    }

    let p = (delta / temperature).exp();
    if p.is_nan() {
        0.0
    } else {
        p.min(1.0)
    }
}

/// The state of one annealing run: the working solution, which may be worse than the
/// best, the best ever seen, and the current temperature.
#[derive(Debug, Clone)]
pub struct AnnealingState<S> {
    pub current: S,
    pub current_value: f64,
    pub best: S,
    pub best_value: f64,
    pub temperature: f64,
}

impl<S: Clone> AnnealingState<S> {
    pub fn new(initial: S, value: f64, temperature: f64) -> Self {
        Self {
            best: initial.clone(),
            best_value: value,
            current: initial,
            current_value: value,
            temperature,
        }
    }

    /// Offers a candidate to the working solution. Returns whether it was accepted.
    pub fn consider(&mut self, candidate: S, value: f64, rng: &mut RandomNumberGenerator) -> bool {
        let delta = value - self.current_value;
        let accept = delta > 0.0 || rng.chance(acceptance_probability(delta, self.temperature));

        if accept {
            self.current = candidate;
            self.current_value = value;

            if self.current_value > self.best_value {
                self.best = self.current.clone();
                self.best_value = self.current_value;
            }
        }

        accept
    }

    /// Applies one step of geometric cooling.
    pub fn cool(&mut self, cooling_rate: f64) {
        self.temperature *= cooling_rate;
    }
}

type EarlyExit<S> = Box<dyn Fn(&S, f64) -> bool + Send + Sync>;

/// Simulated annealing over discrete candidates.
///
/// This engine **maximizes** its objective. Each iteration draws one neighbor of the
/// working solution, accepts it unconditionally if it is better and with probability
/// `exp(delta / T)` otherwise, and then cools the temperature geometrically. The best
/// solution ever seen is tracked independently of the working solution. The
/// temperature is never reset during a run.
///
/// ```rust
/// use stochsearch::local_search::{AnnealingConfig, SimulatedAnnealing};
/// use stochsearch::rng::RandomNumberGenerator;
///
/// // Maximize the number of ones in a bit vector by flipping one bit at a time.
/// let ones = |x: &Vec<u8>| x.iter().map(|&b| b as f64).sum::<f64>();
/// let flip = |x: &Vec<u8>, rng: &mut RandomNumberGenerator| {
///     let mut next = x.clone();
///     let i = rng.index(next.len());
///     next[i] ^= 1;
///     next
/// };
///
/// let engine = SimulatedAnnealing::new(ones, flip, AnnealingConfig::default())
///     .unwrap()
///     .with_target(10.0);
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let result = engine.search_from(vec![0u8; 10], &mut rng).unwrap();
///
/// assert_eq!(result.cost, 10.0);
/// ```
pub struct SimulatedAnnealing<S, F, N> {
    objective: F,
    neighbor: N,
    config: AnnealingConfig,
    early_exit: Option<EarlyExit<S>>,
    _marker: PhantomData<fn() -> S>,
}

impl<S, F, N> SimulatedAnnealing<S, F, N>
where
    S: Clone,
    F: DiscreteObjective<S>,
    N: Fn(&S, &mut RandomNumberGenerator) -> S,
{
    /// Creates a new simulated annealing engine.
    ///
    /// `neighbor` must return a candidate of the same shape as its input and preserve
    /// whatever structural validity the problem requires.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(objective: F, neighbor: N, config: AnnealingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            objective,
            neighbor,
            config,
            early_exit: None,
            _marker: PhantomData,
        })
    }

    /// Stops the run as soon as `predicate(best, best_value)` holds after an iteration.
    pub fn with_early_exit<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&S, f64) -> bool + Send + Sync + 'static,
    {
        self.early_exit = Some(Box::new(predicate));
        self
    }

    /// Stops the run once the best value reaches `target`, a known optimum.
    pub fn with_target(self, target: f64) -> Self {
        self.with_early_exit(move |_, best| best >= target)
    }

    pub fn config(&self) -> &AnnealingConfig {
        &self.config
    }

    /// Runs one annealing search starting from `initial`.
    pub fn search_from(&self, initial: S, rng: &mut RandomNumberGenerator) -> Result<RunResult<S>> {
        self.search_from_observed(initial, rng, &mut NoopObserver)
    }

    /// Runs one annealing search starting from `initial`, reporting the best value
    /// after every iteration.
    pub fn search_from_observed(
        &self,
        initial: S,
        rng: &mut RandomNumberGenerator,
        observer: &mut dyn SearchObserver,
    ) -> Result<RunResult<S>> {
        let value = ensure_finite(self.objective.score(&initial), "objective value")?;
        let mut state = AnnealingState::new(initial, value, self.config.initial_temperature);

        debug!(
            initial_temperature = self.config.initial_temperature,
            cooling_rate = self.config.cooling_rate,
            max_iterations = self.config.max_iterations,
            initial_value = value,
            "Starting simulated annealing"
        );

        let mut iterations = 0;

        for iteration in 0..self.config.max_iterations {
            iterations = iteration + 1;

            let candidate = (self.neighbor)(&state.current, rng);
            let value = ensure_finite(self.objective.score(&candidate), "objective value")?;
            let previous_best = state.best_value;

            state.consider(candidate, value, rng);
            if state.best_value > previous_best {
                trace!(
                    iteration,
                    best_value = state.best_value,
                    temperature = state.temperature,
                    "Annealing found a new best"
                );
            }

            state.cool(self.config.cooling_rate);
            observer.on_iteration(iteration, state.best_value);

            if let Some(stop) = &self.early_exit {
                if stop(&state.best, state.best_value) {
                    break;
                }
            }
        }

        debug!(
            best_value = state.best_value,
            iterations,
            final_temperature = state.temperature,
            "Simulated annealing finished"
        );

        Ok(RunResult::new(state.best, state.best_value, iterations))
    }
}

impl<S, F, N> fmt::Debug for SimulatedAnnealing<S, F, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedAnnealing")
            .field("config", &self.config)
            .field("early_exit", &self.early_exit.is_some())
            .finish_non_exhaustive()
    }
}
