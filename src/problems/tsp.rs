//! # Travelling Salesman
//!
//! Cities are points in 3D space, indexed by position. A tour is a permutation of the
//! city indices and its cost is the length of the closed route that returns to the
//! first city.

use crate::error::{Result, SearchError};
use crate::objective::DiscreteObjective;
use crate::rng::RandomNumberGenerator;

pub type Point = [f64; 3];

fn distance(a: &Point, b: &Point) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Length of the closed route visiting `points` in the order given by `route`.
///
/// Returns 0 for an empty route.
///
/// # Panics
///
/// Panics if `route` holds an index outside `points`.
pub fn route_length(route: &[usize], points: &[Point]) -> f64 {
    if route.is_empty() {
        return 0.0;
    }

    let n = route.len();
    (0..n)
        .map(|i| distance(&points[route[i]], &points[route[(i + 1) % n]]))
        .sum()
}

/// The cyclic tour length over a fixed set of cities.
///
/// # Examples
///
/// ```
/// use stochsearch::objective::DiscreteObjective;
/// use stochsearch::problems::tsp::TourLength;
///
/// let square = TourLength::new(vec![
///     [0.0, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [1.0, 1.0, 0.0],
///     [0.0, 1.0, 0.0],
/// ]);
///
/// assert_eq!(square.score(&[0, 1, 2, 3][..]), 4.0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TourLength {
    points: Vec<Point>,
}

impl TourLength {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl DiscreteObjective<[usize]> for TourLength {
    fn score(&self, route: &[usize]) -> f64 {
        route_length(route, &self.points)
    }
}

/// Draws `n` distinct points uniformly from `points`.
///
/// # Errors
///
/// Returns an error if `n` exceeds the number of available points.
pub fn select_points(
    points: &[Point],
    n: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Point>> {
    if n > points.len() {
        return Err(SearchError::Configuration(format!(
            "Cannot select {} points out of {}",
            n,
            points.len()
        )));
    }

    Ok(rng
        .distinct_indices(points.len(), n)
        .into_iter()
        .map(|idx| points[idx])
        .collect())
}

/// The vertices of a regular `n`-gon of the given radius in the `z = 0` plane.
///
/// Visiting them in index order is an optimal tour, of length
/// [`regular_polygon_perimeter`].
pub fn regular_polygon(n: usize, radius: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / n as f64;
            [radius * angle.cos(), radius * angle.sin(), 0.0]
        })
        .collect()
}

pub fn regular_polygon_perimeter(n: usize, radius: f64) -> f64 {
    if n < 2 {
        return 0.0;
    }
    2.0 * n as f64 * radius * (std::f64::consts::PI / n as f64).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_length_is_cyclic() {
        let points = vec![[0.0, 0.0, 0.0], [3.0, 4.0, 0.0]];
        assert_eq!(route_length(&[0, 1], &points), 10.0);
        assert_eq!(route_length(&[1, 0], &points), 10.0);
        assert_eq!(route_length(&[0], &points), 0.0);
        assert_eq!(route_length(&[], &points), 0.0);
    }

    #[test]
    fn test_route_length_3d() {
        let points = vec![[0.0, 0.0, 0.0], [1.0, 2.0, 2.0]];
        assert_eq!(route_length(&[0, 1], &points), 6.0);
    }

    #[test]
    fn test_polygon_order_is_shortest() {
        let points = regular_polygon(6, 2.0);
        let tour = TourLength::new(points);
        let ordered = tour.score(&[0, 1, 2, 3, 4, 5][..]);

        assert!((ordered - regular_polygon_perimeter(6, 2.0)).abs() < 1e-9);
        assert!(tour.score(&[0, 2, 1, 3, 4, 5][..]) > ordered);
    }

    #[test]
    fn test_select_points() {
        let points: Vec<Point> = (0..20).map(|i| [i as f64, 0.0, 0.0]).collect();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let picked = select_points(&points, 8, &mut rng).unwrap();
        assert_eq!(picked.len(), 8);

        let mut xs: Vec<i64> = picked.iter().map(|p| p[0] as i64).collect();
        xs.sort_unstable();
        xs.dedup();
        assert_eq!(xs.len(), 8);

        assert!(select_points(&points, 21, &mut rng).is_err());
    }
}
