//! # Binary Genetic Algorithm
//!
//! Minimizes a continuous objective over a box [`Domain`] by evolving bit-strings. Each
//! chromosome holds one gene of `bits_per_variable` bits per dimension and is decoded
//! with [`crate::encoding::decode`] before evaluation.
//!
//! Each generation the whole population is decoded and evaluated, parents are picked
//! by tournaments on the lowest objective value, consecutive parents are recombined by
//! single-point crossover with probability `crossover_probability`, and every bit of
//! every child is flipped with probability `mutation_probability`.

use tracing::{debug, trace};

use crate::domain::Domain;
use crate::encoding::decode;
use crate::error::{OptionExt, Result, SearchError};
use crate::evolution::options::BinaryGaOptions;
use crate::evolution::stats::GenerationStats;
use crate::evolution::{evaluate_population, index_of_min, log_generation};
use crate::objective::ContinuousObjective;
use crate::observer::SearchObserver;
use crate::operators::{bit_flip_mutation, single_point_crossover};
use crate::rng::RandomNumberGenerator;
use crate::search::{Incumbent, RunResult, SearchEngine};
use crate::selection::{SelectionStrategy, TournamentSelection};

/// Genetic algorithm over bit-strings decoded to real vectors.
///
/// # Examples
///
/// ```
/// use stochsearch::domain::Domain;
/// use stochsearch::evolution::{BinaryGa, BinaryGaOptions};
/// use stochsearch::rng::RandomNumberGenerator;
/// use stochsearch::search::SearchEngine;
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// let domain = Domain::uniform(2, -5.0, 5.0).unwrap();
///
/// let ga = BinaryGa::new(sphere, domain, BinaryGaOptions::default()).unwrap();
/// let result = ga.search(&mut RandomNumberGenerator::from_seed(1)).unwrap();
///
/// assert_eq!(result.solution.len(), 2);
/// assert!(result.cost < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct BinaryGa<F> {
    objective: F,
    domain: Domain,
    options: BinaryGaOptions,
    tournament: TournamentSelection,
}

impl<F> BinaryGa<F>
where
    F: ContinuousObjective + Sync,
{
    /// Creates a new binary genetic algorithm.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn new(objective: F, domain: Domain, options: BinaryGaOptions) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            objective,
            domain,
            tournament: TournamentSelection::new(options.get_tournament_size(), false)?,
            options,
        })
    }

    pub fn options(&self) -> &BinaryGaOptions {
        &self.options
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn chromosome_len(&self) -> usize {
        self.domain.dim() * self.options.get_bits_per_variable()
    }

    /// Decodes a chromosome with this algorithm's domain and encoding.
    pub fn decode(&self, chromosome: &[bool]) -> Result<Vec<f64>> {
        decode(
            chromosome,
            &self.domain,
            self.options.get_bits_per_variable(),
            self.options.get_encoding(),
        )
    }

    fn breed(
        &self,
        parents: Vec<Vec<bool>>,
        rng: &mut RandomNumberGenerator,
    ) -> Vec<Vec<bool>> {
        let mut children = Vec::with_capacity(parents.len());

        for pair in parents.chunks(2) {
            match pair {
                [first, second] if rng.chance(self.options.get_crossover_probability()) => {
                    let (a, b) = single_point_crossover(first, second, rng);
                    children.push(a);
                    children.push(b);
                }
                _ => children.extend(pair.iter().cloned()),
            }
        }

        for child in children.iter_mut() {
            bit_flip_mutation(child, self.options.get_mutation_probability(), rng);
        }

        children
    }
}

impl<F> SearchEngine for BinaryGa<F>
where
    F: ContinuousObjective + Sync,
{
    type Solution = Vec<f64>;

    /// Runs the generational loop and returns the decoded best individual seen in any
    /// generation together with its objective value.
    fn search_observed(
        &self,
        rng: &mut RandomNumberGenerator,
        observer: &mut dyn SearchObserver,
    ) -> Result<RunResult<Vec<f64>>> {
        let population_size = self.options.get_population_size();
        let num_generations = self.options.get_num_generations();

        debug!(
            dim = self.domain.dim(),
            bits = self.chromosome_len(),
            population_size,
            num_generations,
            "Starting binary genetic algorithm"
        );

        let mut population: Vec<Vec<bool>> = (0..population_size)
            .map(|_| rng.random_bits(self.chromosome_len()))
            .collect();
        let mut best: Option<Incumbent> = None;

        for generation in 0..num_generations {
            let decoded = population
                .iter()
                .map(|chromosome| self.decode(chromosome))
                .collect::<Result<Vec<_>>>()?;
            let costs = evaluate_population(&decoded, self.options.get_parallel_threshold(), |x| {
                self.objective.evaluate(x)
            })?;

            let stats = GenerationStats::from_costs(generation, &costs)
                .ok_or_else_search(|| SearchError::EmptyPopulation)?;
            observer.on_generation(&stats);
            log_generation(self.options.get_log_level(), &stats, &decoded, &costs);

            let idx = index_of_min(&costs).ok_or_else_search(|| SearchError::EmptyPopulation)?;
            match best.as_mut() {
                Some(incumbent) => {
                    if incumbent.offer(decoded[idx].clone(), costs[idx]) {
                        trace!(generation, cost = costs[idx], "New best individual");
                    }
                }
                None => best = Some(Incumbent::new(decoded[idx].clone(), costs[idx])),
            }

            let parents = self
                .tournament
                .select(&population, &costs, population_size, rng)?;
            population = self.breed(parents, rng);
        }

        let best = best.ok_or_else_search(|| SearchError::EmptyPopulation)?;
        debug!(cost = best.cost, "Binary genetic algorithm finished");

        Ok(best.into_result(num_generations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encoding;
    use crate::observer::HistoryRecorder;

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    #[test]
    fn test_invalid_options() {
        let domain = Domain::uniform(2, -1.0, 1.0).unwrap();
        let options = BinaryGaOptions::builder().bits_per_variable(0).build();
        assert!(BinaryGa::new(sphere, domain, options).is_err());
    }

    #[test]
    fn test_breed_keeps_population_size() {
        let domain = Domain::uniform(3, -1.0, 1.0).unwrap();
        let options = BinaryGaOptions::builder()
            .bits_per_variable(5)
            .crossover_probability(1.0)
            .build();
        let ga = BinaryGa::new(sphere, domain, options).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);

        // Odd count: the last parent passes through unpaired
        let parents: Vec<Vec<bool>> = (0..7).map(|_| rng.random_bits(15)).collect();
        let children = ga.breed(parents, &mut rng);

        assert_eq!(children.len(), 7);
        assert!(children.iter().all(|c| c.len() == 15));
    }

    #[test]
    fn test_no_variation_without_operators() {
        let domain = Domain::uniform(1, 0.0, 1.0).unwrap();
        let options = BinaryGaOptions::builder()
            .bits_per_variable(4)
            .crossover_probability(0.0)
            .mutation_probability(0.0)
            .build();
        let ga = BinaryGa::new(sphere, domain, options).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(3);

        let parents = vec![vec![true, false, true, false], vec![false, true, false, true]];
        assert_eq!(ga.breed(parents.clone(), &mut rng), parents);
    }

    #[test]
    fn test_minimizes_sphere() {
        let domain = Domain::uniform(2, -5.0, 5.0).unwrap();
        let ga = BinaryGa::new(sphere, domain.clone(), BinaryGaOptions::default()).unwrap();
        let result = ga.search(&mut RandomNumberGenerator::from_seed(10)).unwrap();

        assert!(domain.contains(&result.solution));
        assert!(result.cost < 0.5);
        assert_eq!(result.cost, sphere(&result.solution));
        assert_eq!(result.iterations, 100);
    }

    #[test]
    fn test_gray_encoding_minimizes_sphere() {
        let domain = Domain::uniform(2, -5.0, 5.0).unwrap();
        let options = BinaryGaOptions::builder().encoding(Encoding::Gray).build();
        let ga = BinaryGa::new(sphere, domain, options).unwrap();
        let result = ga.search(&mut RandomNumberGenerator::from_seed(11)).unwrap();

        assert!(result.cost < 0.5);
    }

    #[test]
    fn test_reports_every_generation() {
        let domain = Domain::uniform(2, -5.0, 5.0).unwrap();
        let options = BinaryGaOptions::builder()
            .population_size(20)
            .num_generations(15)
            .build();
        let ga = BinaryGa::new(sphere, domain, options).unwrap();
        let mut recorder = HistoryRecorder::new();
        let result = ga
            .search_observed(&mut RandomNumberGenerator::from_seed(4), &mut recorder)
            .unwrap();

        assert_eq!(recorder.generations.len(), 15);
        for (i, stats) in recorder.generations.iter().enumerate() {
            assert_eq!(stats.generation, i);
            assert!(stats.best <= stats.worst);
            assert!(result.cost <= stats.best);
        }
    }
}
