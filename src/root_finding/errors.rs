//! Root-finding error types.
//!
//! [`RootFindingError`] : common runtime errors
//!  ├ invalid tolerance or iteration cap
//!  └ non-finite function evaluation
//!
//! Each method wraps it in its own error enum (e.g. `BisectionError::Common`)
//! next to the method-specific precondition failures.

use thiserror::Error;


/// Root-finding runtime errors.
///
/// ┌ Invalid configuration (tolerance <= 0, max_iter < 1)
/// └ Non-finite function evaluation where the method cannot continue
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RootFindingError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },
}
