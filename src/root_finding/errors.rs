//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ formula could not be parsed
//! │   ├ evaluation failed at a specific point
//! │   ├ loop exhausted without convergence
//! │   └ invalid global parameters (tolerance, max_iter)
//! │
//! └ per-algorithm enums (in each algorithm's file) wrap the common type
//!     and add their single precondition variant:
//!     ├ `BisectionError::NoSignChange`
//!     ├ `RegulaFalsiError::NoGuaranteedRoot`
//!     ├ `SecantError::DivisionByZero`
//!     └ `NewtonError::ZeroDerivative`

use thiserror::Error;

use crate::expr::ExprError;

/// Common error type for root-finding algorithms.
///
/// Every variant is terminal for the current run: there is no retry and no
/// partial recovery.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFindingError {
    #[error("could not parse formula: {source}")]
    InvalidFormula { source: ExprError },

    #[error("evaluation failed at x={x}: {source}")]
    Evaluation { x: f64, source: ExprError },

    #[error("no convergence within {iterations} iterations")]
    NotConverged { iterations: usize },

    #[error("root not found within the maximum of {iterations} iterations")]
    MaxIterationsExceeded { iterations: usize },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
