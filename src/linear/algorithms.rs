//! Defines the stationary iterative solver variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Stationary iteration variants.
/// - [`Algorithm::Jacobi`]      every coordinate from the previous sweep
/// - [`Algorithm::GaussSeidel`] in-place, using the current sweep's updates
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Jacobi,
    GaussSeidel,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Jacobi      => "jacobi",
            Algorithm::GaussSeidel => "gauss_seidel",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
