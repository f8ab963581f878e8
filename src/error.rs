//! # Error Types
//!
//! This module defines the error type shared by every part of the solver.
//! Malformed inputs, invalid selection weights, unreachable generation quotas
//! and invalid configuration each get their own variant so callers can react
//! to them individually.
//!
//! ## Examples
//!
//! ```rust
//! use mkga::error::{GeneticError, OptionExt, Result};
//!
//! fn best_cost(costs: &[f64]) -> Result<f64> {
//!     costs
//!         .iter()
//!         .copied()
//!         .reduce(f64::max)
//!         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(best_cost(&[]).is_err());
//! assert_eq!(best_cost(&[1.0, 3.0]).unwrap(), 3.0);
//! ```

use thiserror::Error;

/// Represents errors that can occur while solving a knapsack instance.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// Lengths or values of the supplied data do not fit together.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Weighted sampling was asked to work with an undefined distribution.
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// The generation attempt cap ran out before both quotas were met.
    #[error(
        "Could not satisfy generation quota after {attempts} attempts \
         ({feasible} feasible, {infeasible} infeasible accepted)"
    )]
    QuotaUnsatisfied {
        feasible: usize,
        infeasible: usize,
        attempts: usize,
    },

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,
}

/// A specialized Result type for solver operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Fails with `InvalidInput` unless both lengths are equal.
pub(crate) fn ensure_same_len(what: &str, left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(GeneticError::InvalidInput(format!(
            "{} length mismatch: {} vs {}",
            what, left, right
        )));
    }
    Ok(())
}
