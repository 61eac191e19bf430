//! # Domain Constraints
//!
//! Continuous problems are bounded by a [`Domain`]: one inclusive `(min, max)` pair per
//! dimension, fixed for the lifetime of a search. Candidates that step outside the box
//! are clipped back onto it, never rejected.
//!
//! Combinatorial routing problems are constrained by a [`PermutationDomain`]: a valid
//! candidate contains every index in `0..n` exactly once.
//!
//! ```rust
//! use stochsearch::domain::{Domain, DomainConstraint, PermutationDomain};
//!
//! let domain = Domain::new(vec![(-1.0, 1.0), (0.0, 5.0)]).unwrap();
//! assert_eq!(domain.clip(vec![3.0, -2.0]), vec![1.0, 0.0]);
//! assert!(domain.is_valid(&[0.5, 4.0][..]));
//!
//! let tours = PermutationDomain::new(4);
//! assert!(tours.is_valid(&[2, 0, 3, 1][..]));
//! assert!(!tours.is_valid(&[2, 0, 2, 1][..]));
//! ```

use crate::error::{Result, SearchError};
use crate::rng::RandomNumberGenerator;

/// A validity predicate over candidates of type `S`.
pub trait DomainConstraint<S: ?Sized> {
    /// Returns `true` if the candidate satisfies the constraint.
    fn is_valid(&self, candidate: &S) -> bool;
}

/// Per-dimension inclusive bounds for a continuous search space.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    bounds: Vec<(f64, f64)>,
}

impl Domain {
    /// Creates a domain from `(min, max)` pairs, one per dimension.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `bounds` is empty
    /// - any bound is not finite
    /// - any `min` is greater than its `max`
    pub fn new(bounds: Vec<(f64, f64)>) -> Result<Self> {
        if bounds.is_empty() {
            return Err(SearchError::Configuration(
                "Domain must have at least one dimension".to_string(),
            ));
        }

        for (dim, &(min, max)) in bounds.iter().enumerate() {
            if !min.is_finite() || !max.is_finite() {
                return Err(SearchError::InvalidNumericValue(format!(
                    "Bounds of dimension {} must be finite, got ({}, {})",
                    dim, min, max
                )));
            }
            if min > max {
                return Err(SearchError::Configuration(format!(
                    "Lower bound {} exceeds upper bound {} in dimension {}",
                    min, max, dim
                )));
            }
        }

        Ok(Self { bounds })
    }

    /// Creates a domain with the same `(min, max)` bounds in each of `dim` dimensions.
    pub fn uniform(dim: usize, min: f64, max: f64) -> Result<Self> {
        Self::new(vec![(min, max); dim])
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.bounds.len()
    }

    pub fn bounds(&self) -> &[(f64, f64)] {
        &self.bounds
    }

    /// The vector of lower bounds, the deterministic starting point of the local searches.
    pub fn lower_bounds(&self) -> Vec<f64> {
        self.bounds.iter().map(|&(min, _)| min).collect()
    }

    pub fn upper_bounds(&self) -> Vec<f64> {
        self.bounds.iter().map(|&(_, max)| max).collect()
    }

    /// Clips every coordinate of `x` onto its bound, in place.
    pub fn clip_in_place(&self, x: &mut [f64]) {
        for (value, &(min, max)) in x.iter_mut().zip(&self.bounds) {
            *value = value.clamp(min, max);
        }
    }

    /// Clips every coordinate of `x` onto its bound.
    pub fn clip(&self, mut x: Vec<f64>) -> Vec<f64> {
        self.clip_in_place(&mut x);
        x
    }

    /// Returns `true` if `x` has the domain's dimension and lies inside the box.
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.bounds.len()
            && x
                .iter()
                .zip(&self.bounds)
                .all(|(value, &(min, max))| (min..=max).contains(value))
    }

    /// Samples a point uniformly from the whole box.
    pub fn sample_uniform(&self, rng: &mut RandomNumberGenerator) -> Vec<f64> {
        self.bounds
            .iter()
            .map(|&(min, max)| rng.uniform_inclusive(min, max))
            .collect()
    }
}

impl DomainConstraint<[f64]> for Domain {
    fn is_valid(&self, candidate: &[f64]) -> bool {
        self.contains(candidate)
    }
}

/// The set of permutations of `0..size`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermutationDomain {
    size: usize,
}

impl PermutationDomain {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Draws a uniformly random permutation.
    pub fn random(&self, rng: &mut RandomNumberGenerator) -> Vec<usize> {
        rng.permutation(self.size)
    }
}

impl DomainConstraint<[usize]> for PermutationDomain {
    fn is_valid(&self, candidate: &[usize]) -> bool {
        is_permutation(candidate, self.size)
    }
}

/// Returns `true` if `candidate` contains each index in `0..n` exactly once.
pub fn is_permutation(candidate: &[usize], n: usize) -> bool {
    if candidate.len() != n {
        return false;
    }

    let mut seen = vec![false; n];
    for &gene in candidate {
        if gene >= n || seen[gene] {
            return false;
        }
        seen[gene] = true;
    }

    true
}
