//! Defines the [`SweepReport`] struct returned by Jacobi and Gauss-Seidel.

use crate::trace::Trace;
use super::algorithms::Algorithm;


/// Why a sweep loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepTermination {
    /// All configured sweeps ran (the only outcome in fixed-count mode).
    SweepLimit,
    /// The optional max-norm tolerance was met.
    ToleranceReached,
}


/// The solution estimate after sweep `k` (1-based).
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRecord<T> {
    pub k : usize,
    pub x : Vec<T>,
}


/// Summary of a stationary iteration run.
///
/// [`SweepReport`]
/// - `solution`       : final estimate
/// - `sweeps`         : sweeps performed
/// - `termination`    : [`SweepTermination`]
/// - `algorithm_name` : `"jacobi"` or `"gauss_seidel"`
/// - `trace`          : estimate after every sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport<T> {
    pub solution       : Vec<T>,
    pub sweeps         : usize,
    pub termination    : SweepTermination,
    pub algorithm_name : &'static str,
    pub trace          : Trace<SweepRecord<T>>,
}

impl<T> SweepReport<T> {
    pub(crate) fn new(algorithm: Algorithm, solution: Vec<T>, capacity: usize) -> Self {
        Self {
            solution,
            sweeps         : 0,
            termination    : SweepTermination::SweepLimit,
            algorithm_name : algorithm.algorithm_name(),
            trace          : Trace::with_capacity(capacity),
        }
    }
}
