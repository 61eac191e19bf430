//! # Permutation Genetic Algorithm
//!
//! Evolves a population of permutations of `0..n`, the encoding used for routing
//! problems such as the travelling salesman. The objective returns a positive tour
//! cost; the algorithm maximizes its reciprocal `1 / cost`.
//!
//! Each generation:
//!
//! 1. every individual is evaluated and the best individual ever seen is updated;
//! 2. the search stops if the best cost is at or below the acceptable cost;
//! 3. the `elitism` best individuals are copied into the next generation;
//! 4. the rest is filled with children of two tournament winners, built by order
//!    crossover and then swap-mutated.
//!
//! ## Example
//!
//! ```rust
//! use stochsearch::evolution::{PermutationGa, PermutationGaOptions};
//! use stochsearch::problems::tsp::TourLength;
//! use stochsearch::rng::RandomNumberGenerator;
//! use stochsearch::search::SearchEngine;
//!
//! let points: Vec<[f64; 3]> = (0..8)
//!     .map(|i| {
//!         let angle = i as f64 * std::f64::consts::TAU / 8.0;
//!         [angle.cos(), angle.sin(), 0.0]
//!     })
//!     .collect();
//!
//! let options = PermutationGaOptions::builder()
//!     .population_size(60)
//!     .num_generations(100)
//!     .elitism(2)
//!     .build();
//! let ga = PermutationGa::new(TourLength::new(points), 8, options).unwrap();
//!
//! let result = ga.search(&mut RandomNumberGenerator::from_seed(3)).unwrap();
//! assert_eq!(result.solution.len(), 8);
//! assert!(result.cost > 0.0);
//! ```

use tracing::{debug, trace};

use crate::domain::PermutationDomain;
use crate::error::{OptionExt, Result, SearchError};
use crate::evolution::options::PermutationGaOptions;
use crate::evolution::stats::GenerationStats;
use crate::evolution::{evaluate_population, index_of_min, log_generation};
use crate::objective::DiscreteObjective;
use crate::observer::SearchObserver;
use crate::operators::{order_crossover, swap_mutation};
use crate::rng::RandomNumberGenerator;
use crate::search::{RunResult, SearchEngine};
use crate::selection::{ElitistSelection, TournamentSelection};

/// Up to this many genes, every permutation is either the identity or its reversal.
const TRIVIAL_TOUR_SIZE: usize = 2;

/// Genetic algorithm over permutations of `0..size`.
#[derive(Debug, Clone)]
pub struct PermutationGa<F> {
    objective: F,
    domain: PermutationDomain,
    options: PermutationGaOptions,
    tournament: TournamentSelection,
    elitism: ElitistSelection,
}

impl<F> PermutationGa<F>
where
    F: DiscreteObjective<[usize]> + Sync,
{
    /// Creates a new permutation genetic algorithm.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is 0 or the options are invalid.
    pub fn new(objective: F, size: usize, options: PermutationGaOptions) -> Result<Self> {
        if size == 0 {
            return Err(SearchError::Configuration(
                "A permutation needs at least one element".to_string(),
            ));
        }
        options.validate()?;

        Ok(Self {
            objective,
            domain: PermutationDomain::new(size),
            tournament: TournamentSelection::new(options.get_tournament_size(), true)?,
            elitism: ElitistSelection::new(true),
            options,
        })
    }

    pub fn options(&self) -> &PermutationGaOptions {
        &self.options
    }

    pub fn size(&self) -> usize {
        self.domain.size()
    }

    fn cost_of(&self, individual: &[usize]) -> f64 {
        self.objective.score(individual)
    }

    fn evaluate(&self, population: &[Vec<usize>]) -> Result<Vec<f64>> {
        let costs = evaluate_population(population, self.options.get_parallel_threshold(), |ind| {
            self.cost_of(ind)
        })?;

        match costs.iter().find(|cost| **cost < 0.0) {
            Some(cost) => Err(SearchError::FitnessCalculation(format!(
                "Tour cost must not be negative, got {}",
                cost
            ))),
            None => Ok(costs),
        }
    }

    /// Scores the identity and its reversal directly instead of evolving.
    fn trivial_tour(&self, observer: &mut dyn SearchObserver) -> Result<RunResult<Vec<usize>>> {
        let identity: Vec<usize> = (0..self.size()).collect();
        let mut candidates = vec![identity.clone()];
        if self.size() > 1 {
            candidates.push(identity.into_iter().rev().collect());
        }

        let costs = self.evaluate(&candidates)?;
        let stats = GenerationStats::from_costs(0, &costs)
            .ok_or_else_search(|| SearchError::EmptyPopulation)?;
        observer.on_generation(&stats);

        let idx = index_of_min(&costs).ok_or_else_search(|| SearchError::EmptyPopulation)?;
        let cost = costs[idx];
        debug!(size = self.size(), cost, "Trivial tour, nothing to evolve");

        Ok(RunResult::new(candidates.swap_remove(idx), cost, 0))
    }

    fn next_generation(
        &self,
        population: &[Vec<usize>],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Vec<usize>>> {
        let population_size = self.options.get_population_size();
        let mut next: Vec<Vec<usize>> = self
            .elitism
            .top_indices(fitness, self.options.get_elitism())
            .into_iter()
            .map(|idx| population[idx].clone())
            .collect();

        while next.len() < population_size {
            let first = self.tournament.run_tournament(fitness, rng)?;
            let second = self.tournament.run_tournament(fitness, rng)?;

            let mut child = order_crossover(&population[first], &population[second], rng);
            swap_mutation(&mut child, self.options.get_mutation_probability(), rng);
            next.push(child);
        }

        Ok(next)
    }
}

impl<F> SearchEngine for PermutationGa<F>
where
    F: DiscreteObjective<[usize]> + Sync,
{
    type Solution = Vec<usize>;

    /// Runs the generational loop.
    ///
    /// The returned cost is the lowest tour cost seen in any generation, and
    /// `iterations` is the generation at which the search ended: the early-stop
    /// generation, or the generation budget if the acceptable cost was never reached.
    fn search_observed(
        &self,
        rng: &mut RandomNumberGenerator,
        observer: &mut dyn SearchObserver,
    ) -> Result<RunResult<Vec<usize>>> {
        if self.size() <= TRIVIAL_TOUR_SIZE {
            return self.trivial_tour(observer);
        }

        let num_generations = self.options.get_num_generations();
        let acceptable_cost = self.options.get_acceptable_cost();

        debug!(
            size = self.size(),
            population_size = self.options.get_population_size(),
            num_generations,
            "Starting permutation genetic algorithm"
        );

        let mut population: Vec<Vec<usize>> = (0..self.options.get_population_size())
            .map(|_| self.domain.random(rng))
            .collect();
        let mut best: Option<(Vec<usize>, f64)> = None;

        for generation in 0..num_generations {
            let costs = self.evaluate(&population)?;
            let stats = GenerationStats::from_costs(generation, &costs)
                .ok_or_else_search(|| SearchError::EmptyPopulation)?;
            observer.on_generation(&stats);
            log_generation(self.options.get_log_level(), &stats, &population, &costs);

            let idx = index_of_min(&costs).ok_or_else_search(|| SearchError::EmptyPopulation)?;
            let improved = best.as_ref().map_or(true, |(_, cost)| costs[idx] < *cost);
            if improved {
                trace!(generation, cost = costs[idx], "New best tour");
                best = Some((population[idx].clone(), costs[idx]));
            }

            if let (Some(limit), Some((tour, cost))) = (acceptable_cost, best.as_ref()) {
                if *cost <= limit {
                    debug!(generation, cost, "Acceptable cost reached");
                    return Ok(RunResult::new(tour.clone(), *cost, generation));
                }
            }

            let fitness: Vec<f64> = costs.iter().map(|cost| cost.recip()).collect();
            population = self.next_generation(&population, &fitness, rng)?;
        }

        let (tour, cost) = best.ok_or_else_search(|| SearchError::EmptyPopulation)?;
        debug!(cost, num_generations, "Permutation genetic algorithm finished");

        Ok(RunResult::new(tour, cost, num_generations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::is_permutation;
    use crate::observer::HistoryRecorder;

    /// Cost of a tour through cities on a line at positions `0..n`.
    fn line_tour(tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n)
            .map(|i| (tour[i] as f64 - tour[(i + 1) % n] as f64).abs())
            .sum()
    }

    fn small_options() -> PermutationGaOptions {
        PermutationGaOptions::builder()
            .population_size(40)
            .num_generations(60)
            .elitism(1)
            .build()
    }

    #[test]
    fn test_rejects_empty_permutation() {
        assert!(PermutationGa::new(line_tour, 0, PermutationGaOptions::default()).is_err());
    }

    #[test]
    fn test_rejects_invalid_options() {
        let options = PermutationGaOptions::builder().tournament_size(0).build();
        assert!(PermutationGa::new(line_tour, 5, options).is_err());
    }

    #[test]
    fn test_result_is_permutation() {
        let ga = PermutationGa::new(line_tour, 9, small_options()).unwrap();
        let result = ga.search(&mut RandomNumberGenerator::from_seed(12)).unwrap();

        assert!(is_permutation(&result.solution, 9));
        assert_eq!(result.cost, line_tour(&result.solution));
        assert_eq!(result.iterations, 60);
    }

    #[test]
    fn test_best_is_best_of_all_generations() {
        let ga = PermutationGa::new(line_tour, 10, small_options()).unwrap();
        let mut recorder = HistoryRecorder::new();
        let result = ga
            .search_observed(&mut RandomNumberGenerator::from_seed(5), &mut recorder)
            .unwrap();

        assert_eq!(recorder.generations.len(), 60);
        let lowest = recorder
            .generations
            .iter()
            .map(|s| s.best)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.cost, lowest);
        assert!(result.cost >= 18.0);
    }

    #[test]
    fn test_elitism_keeps_best_non_increasing() {
        let ga = PermutationGa::new(line_tour, 12, small_options()).unwrap();
        let mut recorder = HistoryRecorder::new();
        ga.search_observed(&mut RandomNumberGenerator::from_seed(8), &mut recorder)
            .unwrap();

        for pair in recorder.generations.windows(2) {
            assert!(pair[1].best <= pair[0].best);
        }
    }

    #[test]
    fn test_acceptable_cost_stops_at_first_generation() {
        let options = PermutationGaOptions::builder()
            .population_size(10)
            .acceptable_cost(f64::MAX)
            .build();
        let ga = PermutationGa::new(line_tour, 6, options).unwrap();
        let result = ga.search(&mut RandomNumberGenerator::from_seed(1)).unwrap();

        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_two_genes_return_immediately() {
        let ga = PermutationGa::new(line_tour, 2, PermutationGaOptions::default()).unwrap();
        let mut recorder = HistoryRecorder::new();
        let result = ga
            .search_observed(&mut RandomNumberGenerator::from_seed(1), &mut recorder)
            .unwrap();

        assert!(is_permutation(&result.solution, 2));
        assert_eq!(result.cost, 2.0);
        assert_eq!(result.iterations, 0);
        assert_eq!(recorder.generations.len(), 1);
    }

    #[test]
    fn test_two_genes_pick_cheaper_order() {
        let directed = |p: &[usize]| if p[0] == 0 { 5.0 } else { 1.0 };
        let ga = PermutationGa::new(directed, 2, PermutationGaOptions::default()).unwrap();
        let result = ga.search(&mut RandomNumberGenerator::from_seed(1)).unwrap();

        assert_eq!(result.solution, vec![1, 0]);
        assert_eq!(result.cost, 1.0);
    }

    #[test]
    fn test_three_genes_are_evolved() {
        let directed = |p: &[usize]| if p[0] == 0 { 11.0 } else { 1.0 };
        let options = PermutationGaOptions::builder()
            .population_size(20)
            .num_generations(10)
            .build();
        let ga = PermutationGa::new(directed, 3, options).unwrap();
        let result = ga.search(&mut RandomNumberGenerator::from_seed(3)).unwrap();

        assert!(is_permutation(&result.solution, 3));
        assert_ne!(result.solution[0], 0);
        assert_eq!(result.cost, 1.0);
        assert_eq!(result.iterations, 10);
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let ga = PermutationGa::new(|_: &[usize]| -1.0, 6, small_options()).unwrap();
        let result = ga.search(&mut RandomNumberGenerator::from_seed(1));
        assert!(matches!(result, Err(SearchError::FitnessCalculation(_))));
    }

    #[test]
    fn test_same_seed_same_result() {
        let ga = PermutationGa::new(line_tour, 8, small_options()).unwrap();
        let a = ga.search(&mut RandomNumberGenerator::from_seed(77)).unwrap();
        let b = ga.search(&mut RandomNumberGenerator::from_seed(77)).unwrap();
        assert_eq!(a, b);
    }
}
