//! # Objective Contracts
//!
//! Objectives map a candidate to a single finite cost. They must be pure: the same
//! candidate always yields the same value, and evaluation has no side effects the
//! engines could observe.
//!
//! ## Sign conventions
//!
//! The engines do not share one convention, and each one keeps its own:
//!
//! - Hill climbing, local random search, global random search and the binary genetic
//!   algorithm **minimize** a [`ContinuousObjective`]. To maximize `f`, wrap it in
//!   [`Maximize`], which hands the engines `-f`.
//! - Simulated annealing **maximizes** its [`DiscreteObjective`].
//! - The permutation genetic algorithm minimizes tour length, which it turns into a
//!   fitness of `1 / length` and then maximizes.
//!
//! Closures and plain functions implement the traits automatically:
//!
//! ```rust
//! use stochsearch::objective::{ContinuousObjective, DiscreteObjective, Maximize};
//!
//! let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
//! assert_eq!(sphere.evaluate(&[1.0, 2.0]), 5.0);
//! assert_eq!(Maximize(sphere).evaluate(&[1.0, 2.0]), -5.0);
//!
//! let ones = |x: &[u8]| x.iter().filter(|&&v| v == 1).count() as f64;
//! assert_eq!(ones.score(&[1u8, 0, 1][..]), 2.0);
//! ```

/// An objective over fixed-length real vectors.
pub trait ContinuousObjective {
    /// Evaluates the candidate `x`.
    fn evaluate(&self, x: &[f64]) -> f64;
}

impl<F> ContinuousObjective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, x: &[f64]) -> f64 {
        self(x)
    }
}

/// An objective over discrete candidates such as permutations or integer vectors.
pub trait DiscreteObjective<S: ?Sized> {
    /// Scores the candidate.
    fn score(&self, candidate: &S) -> f64;
}

impl<S, F> DiscreteObjective<S> for F
where
    S: ?Sized,
    F: Fn(&S) -> f64,
{
    fn score(&self, candidate: &S) -> f64 {
        self(candidate)
    }
}

/// Negates a continuous objective so the minimizing engines maximize it.
#[derive(Debug, Clone, Copy)]
pub struct Maximize<F>(pub F);

impl<F> ContinuousObjective for Maximize<F>
where
    F: ContinuousObjective,
{
    fn evaluate(&self, x: &[f64]) -> f64 {
        -self.0.evaluate(x)
    }
}
