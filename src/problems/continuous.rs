//! Two-dimensional test functions with their search boxes.
//!
//! Each [`ContinuousProblem`] implements [`ContinuousObjective`] in minimization form:
//! problems whose goal is a maximum are negated, so they can be handed to any of the
//! minimizing engines directly. [`ContinuousProblem::value`] gives the raw function.

use std::f64::consts::{E, PI};
use std::fmt;

use crate::domain::Domain;
use crate::error::Result;
use crate::objective::ContinuousObjective;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Minimize,
    Maximize,
}

/// A named test function, its bounds and whether it is minimized or maximized.
#[derive(Clone, Copy)]
pub struct ContinuousProblem {
    pub name: &'static str,
    pub function: fn(&[f64]) -> f64,
    pub bounds: &'static [(f64, f64)],
    pub goal: Goal,
}

impl ContinuousProblem {
    pub fn domain(&self) -> Result<Domain> {
        Domain::new(self.bounds.to_vec())
    }

    /// The raw function value, without any sign change.
    pub fn value(&self, x: &[f64]) -> f64 {
        (self.function)(x)
    }
}

impl ContinuousObjective for ContinuousProblem {
    fn evaluate(&self, x: &[f64]) -> f64 {
        match self.goal {
            Goal::Minimize => self.value(x),
            Goal::Maximize => -self.value(x),
        }
    }
}

impl fmt::Debug for ContinuousProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContinuousProblem")
            .field("name", &self.name)
            .field("bounds", &self.bounds)
            .field("goal", &self.goal)
            .finish()
    }
}

/// Two Gaussian bumps. The exponent of the second bump is
/// `-(x1 - 1.7)^2 + (x2 - 1.7)^2`, so it grows along `x2`.
///
/// # Panics
///
/// Panics if `x` has fewer than two components.
pub fn two_peaks(x: &[f64]) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (-(x1 * x1 + x2 * x2)).exp() + 2.0 * (-(x1 - 1.7).powi(2) + (x2 - 1.7).powi(2)).exp()
}

/// Ackley function; global minimum 0 at the origin.
pub fn ackley(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    let squares = x.iter().map(|v| v * v).sum::<f64>() / n;
    let cosines = x.iter().map(|v| (2.0 * PI * v).cos()).sum::<f64>() / n;

    -20.0 * (-0.2 * squares.sqrt()).exp() - cosines.exp() + 20.0 + E
}

/// Rastrigin function; global minimum 0 at the origin.
pub fn rastrigin(x: &[f64]) -> f64 {
    x.iter()
        .map(|v| v * v - 10.0 * (2.0 * PI * v).cos() + 10.0)
        .sum()
}

/// A slanted oscillating surface with one Gaussian bump at `(0, 1)`.
///
/// # Panics
///
/// Panics if `x` has fewer than two components.
pub fn bumpy_surface(x: &[f64]) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    x1 * x1.cos() / 20.0 + 2.0 * (-(x1 * x1) - (x2 - 1.0).powi(2)).exp() + 0.01 * x1 * x2
}

pub const TWO_PEAKS: ContinuousProblem = ContinuousProblem {
    name: "two_peaks",
    function: two_peaks,
    bounds: &[(-2.0, 4.0), (-2.0, 5.0)],
    goal: Goal::Maximize,
};

pub const ACKLEY: ContinuousProblem = ContinuousProblem {
    name: "ackley",
    function: ackley,
    bounds: &[(-8.0, 8.0), (-8.0, 8.0)],
    goal: Goal::Minimize,
};

pub const RASTRIGIN: ContinuousProblem = ContinuousProblem {
    name: "rastrigin",
    function: rastrigin,
    bounds: &[(-5.12, 5.12), (-5.12, 5.12)],
    goal: Goal::Minimize,
};

pub const BUMPY_SURFACE: ContinuousProblem = ContinuousProblem {
    name: "bumpy_surface",
    function: bumpy_surface,
    bounds: &[(-10.0, 10.0), (-10.0, 10.0)],
    goal: Goal::Maximize,
};

/// Every bundled continuous problem.
pub fn all() -> [ContinuousProblem; 4] {
    [TWO_PEAKS, ACKLEY, RASTRIGIN, BUMPY_SURFACE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_minima() {
        assert!(ackley(&[0.0, 0.0]).abs() < 1e-12);
        assert_eq!(rastrigin(&[0.0, 0.0]), 0.0);
        assert!(ackley(&[1.0, -2.0]) > 1.0);
        assert!(rastrigin(&[0.5, 0.5]) > 1.0);
    }

    #[test]
    fn test_maximized_problems_are_negated() {
        let x = [0.3, 1.1];
        assert_eq!(TWO_PEAKS.evaluate(&x), -two_peaks(&x));
        assert_eq!(BUMPY_SURFACE.evaluate(&x), -BUMPY_SURFACE.value(&x));
        assert_eq!(ACKLEY.evaluate(&x), ackley(&x));
    }

    #[test]
    fn test_bump_center() {
        // At (0, 1) only the bump contributes.
        assert!((bumpy_surface(&[0.0, 1.0]) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_domains_are_valid() {
        for problem in all() {
            let domain = problem.domain().unwrap();
            assert_eq!(domain.dim(), 2);
            assert!(problem.value(&domain.lower_bounds()).is_finite());
        }
    }
}
