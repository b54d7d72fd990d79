use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuadratureError {
    #[error("invalid interval: need finite a < b. got a={a}, b={b}")]
    InvalidInterval { a: f64, b: f64 },

    #[error("invalid panels: must be >= 1. got {got}")]
    InvalidPanels { got: usize },

    #[error("non-finite integrand: f({x}) = {fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },
}
