//! # Mode of Repeated Runs
//!
//! Stochastic engines rarely return the exact same point twice, so the "most frequent
//! solution" of a batch of runs is found by clustering: points closer than a tolerance
//! are counted as the same solution.
//!
//! The clustering is a single greedy pass. Each point not yet assigned opens a new
//! cluster and claims every later unassigned point within Euclidean distance
//! `< tolerance` **of that opening point**. Points are never chained through a third
//! point, so two points within tolerance of each other can end up in different clusters
//! when an earlier point claimed only one of them.
//!
//! ## Example
//!
//! ```rust
//! use stochsearch::clustering::compute_mode;
//!
//! let results = vec![
//!     (vec![0.0, 0.0], 1.0),
//!     (vec![0.001, 0.001], 3.0),
//!     (vec![5.0, 5.0], 0.5),
//! ];
//!
//! let mode = compute_mode(&results, 0.01).unwrap();
//! assert_eq!(mode.count, 2);
//! assert_eq!(mode.cost, 2.0);
//! assert!((mode.solution[0] - 0.0005).abs() < 1e-12);
//! ```

use crate::search::RunResult;

/// Tolerance used by [`compute_mode_default`].
pub const DEFAULT_MODE_TOLERANCE: f64 = 0.01;

/// The representative of the largest cluster of run results.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Mode {
    /// Component-wise mean of the cluster's solutions.
    pub solution: Vec<f64>,
    /// Mean cost of the cluster's runs.
    pub cost: f64,
    /// Number of runs in the cluster.
    pub count: usize,
}

/// Euclidean distance; vectors of different dimension are infinitely far apart.
fn distance(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }

    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Groups the indices of `points` by the greedy single-pass rule, in order of the
/// opening point.
pub fn cluster_indices(points: &[&[f64]], tolerance: f64) -> Vec<Vec<usize>> {
    let mut assigned = vec![false; points.len()];
    let mut clusters = Vec::new();

    for seed in 0..points.len() {
        if assigned[seed] {
            continue;
        }
        assigned[seed] = true;

        let mut members = vec![seed];
        for other in (seed + 1)..points.len() {
            if !assigned[other] && distance(points[seed], points[other]) < tolerance {
                assigned[other] = true;
                members.push(other);
            }
        }

        clusters.push(members);
    }

    clusters
}

/// Finds the mode of `(solution, cost)` pairs.
///
/// The largest cluster wins; among clusters of equal size, the one opened first wins.
/// Returns `None` when `results` is empty.
pub fn compute_mode<S>(results: &[(S, f64)], tolerance: f64) -> Option<Mode>
where
    S: AsRef<[f64]>,
{
    let points: Vec<&[f64]> = results.iter().map(|(s, _)| s.as_ref()).collect();
    let clusters = cluster_indices(&points, tolerance);

    let largest = clusters.iter().fold(None, |best: Option<&Vec<usize>>, c| match best {
        Some(b) if b.len() >= c.len() => Some(b),
        _ => Some(c),
    })?;

    let count = largest.len();
    let dim = points[largest[0]].len();
    let mut solution = vec![0.0; dim];
    let mut cost = 0.0;

    for &idx in largest {
        for (acc, value) in solution.iter_mut().zip(points[idx]) {
            *acc += value;
        }
        cost += results[idx].1;
    }

    solution.iter_mut().for_each(|v| *v /= count as f64);

    Some(Mode {
        solution,
        cost: cost / count as f64,
        count,
    })
}

/// [`compute_mode`] with [`DEFAULT_MODE_TOLERANCE`].
pub fn compute_mode_default<S>(results: &[(S, f64)]) -> Option<Mode>
where
    S: AsRef<[f64]>,
{
    compute_mode(results, DEFAULT_MODE_TOLERANCE)
}

/// [`compute_mode`] over engine results.
pub fn compute_mode_of_runs(runs: &[RunResult<Vec<f64>>], tolerance: f64) -> Option<Mode> {
    let pairs: Vec<(&[f64], f64)> = runs
        .iter()
        .map(|run| (run.solution.as_slice(), run.cost))
        .collect();
    compute_mode(&pairs, tolerance)
}
