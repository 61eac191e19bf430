//! # Genetic Algorithm Options
//!
//! The `PermutationGaOptions` and `BinaryGaOptions` structs hold the configuration of
//! the two genetic algorithm variants: population size, generation budget, operator
//! probabilities, logging level and the population size above which fitness is
//! evaluated in parallel.
//!
//! ## Example
//!
//! ```rust
//! use stochsearch::evolution::options::{LogLevel, PermutationGaOptions};
//!
//! let options = PermutationGaOptions::builder()
//!     .population_size(120)
//!     .num_generations(300)
//!     .elitism(2)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//!
//! assert_eq!(options.get_population_size(), 120);
//! assert_eq!(options.get_tournament_size(), 3);
//! assert!(options.validate().is_ok());
//! ```
//!
//! ## `LogLevel`
//!
//! - `Verbose`: one `debug!` summary per generation plus one `trace!` line per individual.
//! - `Minimal`: one `debug!` summary per generation.
//! - `None`: no per-generation logging.

use crate::encoding::{Encoding, MAX_BITS_PER_VARIABLE};
use crate::error::{ensure_non_zero, ensure_probability, Result, SearchError};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Options of the permutation genetic algorithm.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PermutationGaOptions {
    population_size: usize,
    num_generations: usize,
    tournament_size: usize,
    mutation_probability: f64,
    elitism: usize,
    acceptable_cost: Option<f64>,
    log_level: LogLevel,
    /// Minimum population size evaluated in parallel
    parallel_threshold: usize,
}

impl PermutationGaOptions {
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Probability that an offspring gets one swap mutation.
    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// Number of best individuals copied unchanged into the next generation.
    pub fn get_elitism(&self) -> usize {
        self.elitism
    }

    /// Tour length at or below which the search stops early.
    pub fn get_acceptable_cost(&self) -> Option<f64> {
        self.acceptable_cost
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_acceptable_cost(&mut self, acceptable_cost: Option<f64>) {
        self.acceptable_cost = acceptable_cost;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks the options for values the algorithm cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` if the population size, generation budget
    /// or tournament size is zero, the mutation probability is outside `[0, 1]`, or
    /// elitism exceeds the population size.
    pub fn validate(&self) -> Result<()> {
        ensure_non_zero(self.population_size, "Population size")?;
        ensure_non_zero(self.num_generations, "Number of generations")?;
        ensure_non_zero(self.tournament_size, "Tournament size")?;
        ensure_probability(self.mutation_probability, "Mutation probability")?;

        if self.elitism > self.population_size {
            return Err(SearchError::Configuration(format!(
                "Elitism ({}) cannot exceed the population size ({})",
                self.elitism, self.population_size
            )));
        }

        if let Some(cost) = self.acceptable_cost {
            if cost.is_nan() {
                return Err(SearchError::InvalidNumericValue(
                    "Acceptable cost must not be NaN".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Returns a builder for creating a `PermutationGaOptions` instance.
    pub fn builder() -> PermutationGaOptionsBuilder {
        PermutationGaOptionsBuilder::default()
    }
}

impl Default for PermutationGaOptions {
    fn default() -> Self {
        Self {
            population_size: 100,
            num_generations: 300,
            tournament_size: 3,
            mutation_probability: 0.01,
            elitism: 0,
            acceptable_cost: None,
            log_level: LogLevel::None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `PermutationGaOptions`.
#[derive(Debug, Clone, Default)]
pub struct PermutationGaOptionsBuilder {
    population_size: Option<usize>,
    num_generations: Option<usize>,
    tournament_size: Option<usize>,
    mutation_probability: Option<f64>,
    elitism: Option<usize>,
    acceptable_cost: Option<f64>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
}

impl PermutationGaOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    pub fn elitism(mut self, value: usize) -> Self {
        self.elitism = Some(value);
        self
    }

    pub fn acceptable_cost(mut self, value: f64) -> Self {
        self.acceptable_cost = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn build(self) -> PermutationGaOptions {
        let default = PermutationGaOptions::default();
        PermutationGaOptions {
            population_size: self.population_size.unwrap_or(default.population_size),
            num_generations: self.num_generations.unwrap_or(default.num_generations),
            tournament_size: self.tournament_size.unwrap_or(default.tournament_size),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(default.mutation_probability),
            elitism: self.elitism.unwrap_or(default.elitism),
            acceptable_cost: self.acceptable_cost.or(default.acceptable_cost),
            log_level: self.log_level.unwrap_or(default.log_level),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(default.parallel_threshold),
        }
    }
}

/// Options of the binary genetic algorithm.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryGaOptions {
    population_size: usize,
    num_generations: usize,
    bits_per_variable: usize,
    tournament_size: usize,
    crossover_probability: f64,
    mutation_probability: f64,
    encoding: Encoding,
    log_level: LogLevel,
    parallel_threshold: usize,
}

impl BinaryGaOptions {
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_bits_per_variable(&self) -> usize {
        self.bits_per_variable
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Probability that a pair of parents is recombined.
    pub fn get_crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    /// Probability that any single bit is flipped.
    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks the options for values the algorithm cannot run with.
    pub fn validate(&self) -> Result<()> {
        ensure_non_zero(self.population_size, "Population size")?;
        ensure_non_zero(self.num_generations, "Number of generations")?;
        ensure_non_zero(self.tournament_size, "Tournament size")?;
        ensure_probability(self.crossover_probability, "Crossover probability")?;
        ensure_probability(self.mutation_probability, "Mutation probability")?;

        if !(1..=MAX_BITS_PER_VARIABLE).contains(&self.bits_per_variable) {
            return Err(SearchError::Configuration(format!(
                "Bits per variable must be between 1 and {}, got {}",
                MAX_BITS_PER_VARIABLE, self.bits_per_variable
            )));
        }

        Ok(())
    }

    pub fn builder() -> BinaryGaOptionsBuilder {
        BinaryGaOptionsBuilder::default()
    }
}

impl Default for BinaryGaOptions {
    fn default() -> Self {
        Self {
            population_size: 100,
            num_generations: 100,
            bits_per_variable: 16,
            tournament_size: 3,
            crossover_probability: 0.85,
            mutation_probability: 0.01,
            encoding: Encoding::Binary,
            log_level: LogLevel::None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `BinaryGaOptions`.
#[derive(Debug, Clone, Default)]
pub struct BinaryGaOptionsBuilder {
    population_size: Option<usize>,
    num_generations: Option<usize>,
    bits_per_variable: Option<usize>,
    tournament_size: Option<usize>,
    crossover_probability: Option<f64>,
    mutation_probability: Option<f64>,
    encoding: Option<Encoding>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
}

impl BinaryGaOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn bits_per_variable(mut self, value: usize) -> Self {
        self.bits_per_variable = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    pub fn encoding(mut self, value: Encoding) -> Self {
        self.encoding = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn build(self) -> BinaryGaOptions {
        let default = BinaryGaOptions::default();
        BinaryGaOptions {
            population_size: self.population_size.unwrap_or(default.population_size),
            num_generations: self.num_generations.unwrap_or(default.num_generations),
            bits_per_variable: self.bits_per_variable.unwrap_or(default.bits_per_variable),
            tournament_size: self.tournament_size.unwrap_or(default.tournament_size),
            crossover_probability: self
                .crossover_probability
                .unwrap_or(default.crossover_probability),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(default.mutation_probability),
            encoding: self.encoding.unwrap_or(default.encoding),
            log_level: self.log_level.unwrap_or(default.log_level),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(default.parallel_threshold),
        }
    }
}
