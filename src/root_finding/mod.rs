// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub(crate) mod common;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod fixed_point;
pub mod newton;
pub mod secant;
