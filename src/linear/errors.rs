use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LinearSystemError {
    #[error("empty system: the coefficient matrix has no rows")]
    EmptySystem,

    #[error("non-square matrix: row {row} has {len} entries, expected {n}")]
    NonSquare { row: usize, len: usize, n: usize },

    #[error("right-hand side has {got} entries, expected {expected}")]
    RhsLength { expected: usize, got: usize },

    #[error("initial guess has {got} entries, expected {expected}")]
    GuessLength { expected: usize, got: usize },

    #[error("invalid sweeps: must be >= 1. got {got}")]
    InvalidSweeps { got: usize },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },
}
