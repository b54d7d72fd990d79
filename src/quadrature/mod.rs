pub mod algorithms;
pub mod errors;
pub mod report;
pub mod rules;

pub use algorithms::Rule;
pub use rules::{compare_rules, integrate, integrate_composite};
