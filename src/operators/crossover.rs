//! # Crossover Operators
//!
//! Order crossover for permutation genomes and single-point crossover for bit-string
//! genomes. Both come in a deterministic `_at` form taking the cut points explicitly and
//! a randomized form drawing them from a [`RandomNumberGenerator`].

use std::collections::HashSet;

use crate::rng::RandomNumberGenerator;

/// Order crossover with explicit cut points.
///
/// The child receives `parent1[a..b]` at the same positions. The remaining positions
/// are filled left to right with the genes of `parent2` that are not already in the
/// child, in the order they appear in `parent2`. When both parents are permutations of
/// the same gene set, the child is one too.
///
/// Cut points are clamped to the genome length and swapped if given in reverse.
///
/// # Examples
///
/// ```
/// use stochsearch::operators::order_crossover_at;
///
/// let p1 = vec![0, 1, 2, 3, 4, 5];
/// let p2 = vec![5, 4, 3, 2, 1, 0];
///
/// assert_eq!(order_crossover_at(&p1, &p2, 2, 4), vec![5, 4, 2, 3, 1, 0]);
/// ```
pub fn order_crossover_at(parent1: &[usize], parent2: &[usize], a: usize, b: usize) -> Vec<usize> {
    let n = parent1.len();
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    let (a, b) = (a.min(n), b.min(n));

    let segment = &parent1[a..b];
    let taken: HashSet<usize> = segment.iter().copied().collect();
    let mut fill = parent2.iter().copied().filter(|gene| !taken.contains(gene));

    let mut child = Vec::with_capacity(n);
    for position in 0..n {
        if (a..b).contains(&position) {
            child.push(parent1[position]);
        } else if let Some(gene) = fill.next() {
            child.push(gene);
        }
    }

    child
}

/// Order crossover with cut points `a < b` drawn uniformly, without replacement, from
/// `0..n`.
///
/// Genomes shorter than two genes are copied from `parent1`.
pub fn order_crossover(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut RandomNumberGenerator,
) -> Vec<usize> {
    let n = parent1.len();
    if n < 2 {
        return parent1.to_vec();
    }

    let mut cuts = rng.distinct_indices(n, 2);
    cuts.sort_unstable();

    order_crossover_at(parent1, parent2, cuts[0], cuts[1])
}

/// Single-point crossover with an explicit cut.
///
/// Returns the two children `parent1[..point] + parent2[point..]` and
/// `parent2[..point] + parent1[point..]`.
pub fn single_point_crossover_at<T: Clone>(
    parent1: &[T],
    parent2: &[T],
    point: usize,
) -> (Vec<T>, Vec<T>) {
    let point = point.min(parent1.len()).min(parent2.len());

    let mut child1 = parent1[..point].to_vec();
    child1.extend_from_slice(&parent2[point..]);

    let mut child2 = parent2[..point].to_vec();
    child2.extend_from_slice(&parent1[point..]);

    (child1, child2)
}

/// Single-point crossover at a cut drawn uniformly from `1..len`, so each child takes
/// at least one bit from each parent.
///
/// Genomes shorter than two bits are returned unchanged.
pub fn single_point_crossover<T: Clone>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut RandomNumberGenerator,
) -> (Vec<T>, Vec<T>) {
    let len = parent1.len().min(parent2.len());
    if len < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let point = 1 + rng.index(len - 1);
    single_point_crossover_at(parent1, parent2, point)
}
