//! Fixed-point iteration `x_{k+1} = g(x_k)`.
//!
//! Runs a fixed number of steps by default and records the whole sequence;
//! whether it converges, oscillates or blows up is read off the trace.
//! An optional step tolerance turns it into an early-stopping solver.

use tracing::{debug, trace};
use thiserror::Error;

use crate::real::{Precision, Real};
use crate::trace::Trace;
use super::algorithms::{Algorithm, OpenFamily};
use super::errors::RootFindingError;
use super::report::{FixedPointReport, SequenceRecord, TerminationReason};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::FixedPoint);

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FixedPointError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },
}


/// Fixed-point configuration.
///
/// # Fields
/// - `iterations` : number of applications of `g` (default 10)
/// - `step_tol`   : optional; stop once `|x_{k+1} - x_k| < step_tol`
/// - `precision`  : optional working precision
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedPointCfg {
    iterations: usize,
    step_tol:   Option<f64>,
    precision:  Option<Precision>,
}
impl FixedPointCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            iterations : Algorithm::default_max_iter(ALGORITHM).unwrap_or(10),
            step_tol   : None,
            precision  : None,
        }
    }

    #[must_use] pub fn with_iterations(mut self, v: usize) -> Self { self.iterations = v; self }
    #[must_use] pub fn with_step_tol(mut self, v: f64) -> Self { self.step_tol = Some(v); self }
    #[must_use] pub fn with_precision(mut self, v: Precision) -> Self { self.precision = Some(v); self }

    #[inline] #[must_use] pub fn iterations(&self) -> usize { self.iterations }
    #[inline] #[must_use] pub fn step_tol(&self) -> Option<f64> { self.step_tol }

    /// Explicit precision (or the default), raised to fit `step_tol` if set.
    #[must_use]
    pub fn precision(&self) -> Precision {
        let base = self.precision.unwrap_or_default();
        match self.step_tol {
            Some(tol) => base.max(Precision::for_tolerance(tol)),
            None      => base,
        }
    }

    fn validate(&self) -> Result<(), RootFindingError> {
        if self.iterations == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: 0 });
        }
        if let Some(tol) = self.step_tol {
            if !(tol.is_finite() && tol > 0.0) {
                return Err(RootFindingError::InvalidTolerance { got: tol });
            }
        }
        Ok(())
    }
}
impl Default for FixedPointCfg {
    fn default() -> Self {
        Self::new()
    }
}


/// Iterates `g` from `x0`, producing `x0, g(x0), g(g(x0)), ...`.
///
/// # Returns
/// [`FixedPointReport`] whose trace holds `iterations + 1` entries in
/// fixed-count mode. With a step tolerance the trace ends at the first
/// `x_{k+1}` with `|x_{k+1} - x_k| < step_tol`.
///
/// # Errors
/// - [`FixedPointError::InvalidGuess`] : `x0` non-finite
/// - [`FixedPointError::Common`]       : `iterations == 0` or invalid `step_tol`
///
/// # Notes
/// - No finiteness checks on `g`: a diverging sequence is a valid result.
pub fn fixed_point<T, G>(
    mut g: G,
    x0: f64,
    cfg: FixedPointCfg,
) -> Result<FixedPointReport<T>, FixedPointError>
where
    T: Real,
    G: FnMut(&T) -> T,
{
    if !x0.is_finite() {
        return Err(FixedPointError::InvalidGuess { x0 });
    }
    cfg.validate()?;

    let precision = cfg.precision();
    let step_tol  = cfg.step_tol.map(|tol| T::from_f64(tol, precision));

    let mut x     = T::from_f64(x0, precision);
    let mut trace = Trace::with_capacity(cfg.iterations.saturating_add(1));
    trace.push(SequenceRecord { k: 0, x: x.clone() });

    for k in 1..=cfg.iterations {
        let x_next = g(&x);
        trace!(k, x = %x_next, "fixed-point step");
        trace.push(SequenceRecord { k, x: x_next.clone() });

        if let Some(tol) = &step_tol {
            if (x_next.clone() - x.clone()).abs() < *tol {
                debug!(iterations = k, "fixed-point step tolerance reached");
                return Ok(FixedPointReport {
                    fixed_point        : x_next,
                    iterations         : k,
                    termination_reason : TerminationReason::ToleranceReached,
                    algorithm_name     : ALGORITHM.algorithm_name(),
                    trace,
                });
            }
        }

        x = x_next;
    }

    Ok(FixedPointReport {
        fixed_point        : x,
        iterations         : cfg.iterations,
        termination_reason : TerminationReason::IterationLimit,
        algorithm_name     : ALGORITHM.algorithm_name(),
        trace,
    })
}
