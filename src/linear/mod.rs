// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod system;

// algorithms
pub mod gauss_seidel;
pub mod jacobi;

pub use system::DenseSystem;
