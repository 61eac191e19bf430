use crate::error::{Result, SearchError};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, SelectionStrategy};

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament draws `tournament_size` distinct individuals uniformly, without
/// replacement, and keeps the best of them. Tournaments are independent of each other,
/// so the same individual can win more than once.
///
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
///
/// # Examples
///
/// ```
/// use stochsearch::selection::{SelectionStrategy, TournamentSelection};
/// use stochsearch::rng::RandomNumberGenerator;
///
/// let population = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let selection = TournamentSelection::new(3, true).unwrap();
/// let selected = selection.select(&population, &fitness, 4, &mut rng).unwrap();
///
/// assert_eq!(selected.len(), 4);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
    higher_is_better: bool,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy.
    ///
    /// # Arguments
    ///
    /// * `tournament_size` - The number of individuals that participate in each tournament.
    ///   Must be at least 1. A tournament size of 1 is equivalent to random selection;
    ///   sizes above the population size are clamped to it.
    /// * `higher_is_better` - Whether higher fitness is better (true) or lower fitness is better (false).
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize, higher_is_better: bool) -> Result<Self> {
        if tournament_size < 1 {
            return Err(SearchError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            tournament_size,
            higher_is_better,
        })
    }

    pub fn with_lower_is_better(mut self) -> Self {
        self.higher_is_better = false;
        self
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn higher_is_better(&self) -> bool {
        self.higher_is_better
    }

    /// Runs a single tournament and returns the index of the winner.
    ///
    /// Ties go to the participant drawn first.
    ///
    /// # Errors
    ///
    /// Returns an error if `fitness` is empty.
    pub fn run_tournament(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        if fitness.is_empty() {
            return Err(SearchError::EmptyPopulation);
        }

        let participants = rng.distinct_indices(fitness.len(), self.tournament_size);

        let mut best_idx = participants[0];
        let mut best_fitness = fitness[best_idx];

        for &idx in &participants[1..] {
            let current_fitness = fitness[idx];
            let is_better = if self.higher_is_better {
                current_fitness > best_fitness
            } else {
                current_fitness < best_fitness
            };

            if is_better {
                best_idx = idx;
                best_fitness = current_fitness;
            }
        }

        Ok(best_idx)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self {
            tournament_size: 3,
            higher_is_better: true,
        }
    }
}

impl<P> SelectionStrategy<P> for TournamentSelection
where
    P: Clone,
{
    fn select(
        &self,
        population: &[P],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>> {
        check_population(population, fitness)?;

        (0..num_to_select)
            .map(|_| {
                self.run_tournament(fitness, rng)
                    .map(|winner| population[winner].clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tournament_selection() {
        let population = vec![1, 2, 3, 4, 5];
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(1);

        let selection = TournamentSelection::default();
        let selected = selection.select(&population, &fitness, 10, &mut rng).unwrap();

        assert_eq!(selected.len(), 10);
        assert!(selected.iter().all(|v| population.contains(v)));
    }

    #[test]
    fn test_full_tournament_always_picks_best() {
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(2);

        let selection = TournamentSelection::new(5, true).unwrap();
        for _ in 0..20 {
            assert_eq!(selection.run_tournament(&fitness, &mut rng).unwrap(), 3);
        }

        let selection = TournamentSelection::new(5, true).unwrap().with_lower_is_better();
        for _ in 0..20 {
            assert_eq!(selection.run_tournament(&fitness, &mut rng).unwrap(), 4);
        }
    }

    #[test]
    fn test_oversized_tournament_is_clamped() {
        let fitness = vec![0.5, 0.8, 0.3];
        let mut rng = RandomNumberGenerator::from_seed(3);

        let selection = TournamentSelection::new(10, true).unwrap();
        assert_eq!(selection.run_tournament(&fitness, &mut rng).unwrap(), 1);
    }

    #[test]
    fn test_worst_individual_never_wins_tournament_of_two() {
        // Participants are distinct, so the worst can only win against itself.
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(4);

        let selection = TournamentSelection::new(2, true).unwrap();
        for _ in 0..200 {
            assert_ne!(selection.run_tournament(&fitness, &mut rng).unwrap(), 4);
        }
    }

    #[test]
    fn test_tournament_size_one_is_uniform() {
        let fitness = vec![0.5, 0.8, 0.3];
        let mut rng = RandomNumberGenerator::from_seed(5);

        let selection = TournamentSelection::new(1, true).unwrap();
        let mut hits = [0usize; 3];
        for _ in 0..300 {
            hits[selection.run_tournament(&fitness, &mut rng).unwrap()] += 1;
        }

        assert!(hits.iter().all(|&h| h > 50));
    }

    #[test]
    fn test_tournament_selection_empty_population() {
        let population: Vec<u32> = Vec::new();
        let fitness: Vec<f64> = Vec::new();
        let mut rng = RandomNumberGenerator::from_seed(6);

        let selection = TournamentSelection::default();
        let result = selection.select(&population, &fitness, 3, &mut rng);

        assert!(matches!(result, Err(SearchError::EmptyPopulation)));
    }

    #[test]
    fn test_tournament_selection_mismatched_lengths() {
        let population = vec![1, 2];
        let fitness = vec![0.5];
        let mut rng = RandomNumberGenerator::from_seed(7);

        let selection = TournamentSelection::default();
        let result = selection.select(&population, &fitness, 1, &mut rng);

        assert!(result.is_err());
    }

    #[test]
    fn test_tournament_selection_invalid_size() {
        assert!(TournamentSelection::new(0, true).is_err());
    }
}
