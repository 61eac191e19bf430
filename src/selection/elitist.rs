use std::cmp::Ordering;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, SelectionStrategy};

/// A selection strategy that selects the best individuals based on fitness.
///
/// This strategy sorts individuals by their fitness scores and selects the top N.
/// The genetic algorithms use it for elitism: the selected individuals are copied
/// unchanged into the next generation.
///
/// # Examples
///
/// ```
/// use stochsearch::selection::ElitistSelection;
///
/// let fitness = vec![0.5, 0.8, 0.3];
///
/// assert_eq!(ElitistSelection::default().top_indices(&fitness, 2), vec![1, 0]);
/// assert_eq!(ElitistSelection::new(false).top_indices(&fitness, 2), vec![2, 0]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct ElitistSelection {
    /// Whether higher fitness is better (true) or lower fitness is better (false).
    higher_is_better: bool,
}

impl ElitistSelection {
    pub fn new(higher_is_better: bool) -> Self {
        Self { higher_is_better }
    }

    pub fn with_lower_is_better(mut self) -> Self {
        self.higher_is_better = false;
        self
    }

    /// Returns the indices of the `n` best individuals, best first.
    ///
    /// NaN scores rank last. Equal scores keep their population order.
    pub fn top_indices(&self, fitness: &[f64], n: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..fitness.len()).collect();

        indices.sort_by(|&a, &b| {
            let (fa, fb) = (fitness[a], fitness[b]);
            match (fa.is_nan(), fb.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => {
                    let cmp = fa.partial_cmp(&fb).unwrap_or(Ordering::Equal);
                    if self.higher_is_better {
                        cmp.reverse()
                    } else {
                        cmp
                    }
                }
            }
        });

        indices.truncate(n);
        indices
    }
}

impl Default for ElitistSelection {
    /// Higher fitness is considered better.
    fn default() -> Self {
        Self {
            higher_is_better: true,
        }
    }
}

impl<P> SelectionStrategy<P> for ElitistSelection
where
    P: Clone,
{
    fn select(
        &self,
        population: &[P],
        fitness: &[f64],
        num_to_select: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>> {
        check_population(population, fitness)?;

        Ok(self
            .top_indices(fitness, num_to_select)
            .into_iter()
            .map(|idx| population[idx].clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;

    #[test]
    fn test_elitist_selection() {
        let population = vec!["a", "b", "c", "d", "e"];
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(1);

        let selected = ElitistSelection::default()
            .select(&population, &fitness, 3, &mut rng)
            .unwrap();
        assert_eq!(selected, vec!["d", "b", "a"]);

        let selected = ElitistSelection::default()
            .with_lower_is_better()
            .select(&population, &fitness, 2, &mut rng)
            .unwrap();
        assert_eq!(selected, vec!["e", "c"]);
    }

    #[test]
    fn test_more_than_population() {
        let fitness = vec![0.5, 0.8];
        assert_eq!(ElitistSelection::default().top_indices(&fitness, 10), vec![1, 0]);
    }

    #[test]
    fn test_zero_elites() {
        let fitness = vec![0.5, 0.8];
        assert!(ElitistSelection::default().top_indices(&fitness, 0).is_empty());
    }

    #[test]
    fn test_nan_ranks_last() {
        let fitness = vec![f64::NAN, 0.2, 0.9];
        assert_eq!(ElitistSelection::default().top_indices(&fitness, 3), vec![2, 1, 0]);
        assert_eq!(ElitistSelection::new(false).top_indices(&fitness, 3), vec![1, 2, 0]);
    }

    #[test]
    fn test_ties_keep_population_order() {
        let fitness = vec![1.0, 2.0, 2.0, 1.0];
        assert_eq!(ElitistSelection::default().top_indices(&fitness, 4), vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_empty_population() {
        let population: Vec<u8> = vec![];
        let mut rng = RandomNumberGenerator::from_seed(2);
        let result = ElitistSelection::default().select(&population, &[], 1, &mut rng);
        assert!(matches!(result, Err(SearchError::EmptyPopulation)));
    }
}
