use std::fmt::Debug;

use crate::error::{Result, SearchError};
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies in genetic algorithms.
///
/// Selection strategies choose individuals from a population based on their fitness
/// scores. Whether higher or lower fitness wins is a property of the strategy.
///
/// # Examples
///
/// ```
/// use stochsearch::selection::{ElitistSelection, SelectionStrategy};
/// use stochsearch::rng::RandomNumberGenerator;
/// use stochsearch::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![vec![0, 1, 2], vec![2, 1, 0], vec![1, 0, 2]];
///     let fitness = vec![0.5, 0.8, 0.3];
///     let mut rng = RandomNumberGenerator::from_seed(1);
///
///     let selection = ElitistSelection::default();
///     let selected = selection.select(&population, &fitness, 2, &mut rng)?;
///
///     assert_eq!(selected, vec![vec![2, 1, 0], vec![0, 1, 2]]);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<P>: Debug + Send + Sync
where
    P: Clone,
{
    /// Selects `num_to_select` individuals from the population.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    fn select(
        &self,
        population: &[P],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>>;
}

/// Checks that a population and its fitness vector can be selected from.
pub(crate) fn check_population<P>(population: &[P], fitness: &[f64]) -> Result<()> {
    if population.is_empty() {
        return Err(SearchError::EmptyPopulation);
    }

    if fitness.len() != population.len() {
        return Err(SearchError::Configuration(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            population.len()
        )));
    }

    Ok(())
}
