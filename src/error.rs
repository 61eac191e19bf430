//! # Error Types
//!
//! This module defines the error type shared by every search engine in the crate.
//! Errors are reserved for invalid configuration and broken objective contracts;
//! candidates that leave the domain are clipped silently and never reported here.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use stochsearch::error::{SearchError, Result};
//!
//! fn validate_budget(max_iterations: usize) -> Result<()> {
//!     if max_iterations == 0 {
//!         return Err(SearchError::Configuration(
//!             "Maximum iterations must be greater than 0".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_budget(10).is_ok());
//! assert!(validate_budget(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use stochsearch::error::{SearchError, OptionExt};
//!
//! fn best_cost(costs: &[f64]) -> stochsearch::error::Result<f64> {
//!     costs
//!         .iter()
//!         .copied()
//!         .reduce(f64::min)
//!         .ok_or_else_search(|| SearchError::EmptyPopulation)
//! }
//!
//! assert_eq!(best_cost(&[3.0, 1.0, 2.0]).unwrap(), 1.0);
//! assert!(best_cost(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running a search.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when an objective returns a non-finite value.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when NaN or infinity values are encountered in inputs.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),
}

/// A specialized Result type for search operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `SearchError`.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use stochsearch::error::{SearchError, OptionExt};
///
/// let empty: Option<usize> = None;
/// assert!(empty.ok_or_else_search(|| SearchError::EmptyPopulation).is_err());
/// ```
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, SearchError>` using
    /// a closure to generate the error.
    fn ok_or_else_search<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SearchError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_search<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SearchError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Returns an error if `value` is not finite.
///
/// Used by the engines to enforce that objectives return finite real numbers.
pub(crate) fn ensure_finite(value: f64, what: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SearchError::FitnessCalculation(format!(
            "Non-finite {} encountered: {}",
            what, value
        )))
    }
}

/// Returns an error if `value` is not a probability in `[0, 1]`.
pub(crate) fn ensure_probability(value: f64, name: &str) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SearchError::Configuration(format!(
            "{} must be between 0.0 and 1.0, got {}",
            name, value
        )))
    }
}

/// Returns an error if `value` is zero.
pub(crate) fn ensure_non_zero(value: usize, name: &str) -> Result<()> {
    if value == 0 {
        Err(SearchError::Configuration(format!(
            "{} must be greater than 0",
            name
        )))
    } else {
        Ok(())
    }
}
