use tracing::{debug, trace, warn};
use thiserror::Error;

use crate::real::Real;
use crate::trace::Trace;
use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::common::{eval_checked, eval_counted};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::RootFindingError;
use super::report::{IterateRecord, RootFindingReport, TerminationReason, ToleranceSatisfied};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Secant);

/// Report type returned by [`secant`].
pub type SecantReport<T> = RootFindingReport<T, IterateRecord<T>>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SecantError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid initial guesses: x0={x0} and x1={x1} must be finite")]
    InvalidGuess { x0: f64, x1: f64 },
}


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance, optional `max_iter` and precision.
///
/// # Defaults
/// - If `max_iter` is `None`, [`secant`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Secant`] (20).
///   The cap counts trace indices, so the two starting points use up two of them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(SecantCfg);


fn report<T: Real>(
    root: T,
    f_root: T,
    iterations: usize,
    evaluations: usize,
    termination_reason: TerminationReason,
    tolerance_satisfied: ToleranceSatisfied,
    trace: Trace<IterateRecord<T>>,
) -> SecantReport<T> {
    RootFindingReport {
        root,
        f_root,
        iterations,
        evaluations,
        termination_reason,
        tolerance_satisfied,
        algorithm_name: ALGORITHM.algorithm_name(),
        trace,
    }
}


/// Finds a root of `func` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func`   : function whose root is sought
/// - `x0, x1` : finite starting points
/// - `cfg`    : [`SecantCfg`]
///
/// # Behavior
/// - trace starts with `(0, x0, f(x0))` and `(1, x1, f(x1))`
/// - step `k >= 2`: if `f(x1) == f(x0)` records `(k, x1, f(x1))` and stops with
///   [`TerminationReason::ZeroDenominator`]; otherwise
///   `x2 = x1 - f(x1) (x1 - x0) / (f(x1) - f(x0))` is recorded as `(k, x2, f(x2))`
/// - stops once `|x2 - x1| < tol` or `|f(x2)| < tol`
/// - `iterations` counts secant updates, i.e. the last trace index minus one
///
/// # Errors
/// - [`SecantError::InvalidGuess`] : `x0` or `x1` non-finite
/// - [`SecantError::Common`]       : invalid config, or non-finite `f(x0)`/`f(x1)`
pub fn secant<T, F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg,
) -> Result<SecantReport<T>, SecantError>
where
    T: Real,
    F: FnMut(&T) -> T,
{
    if !(x0.is_finite() && x1.is_finite()) {
        return Err(SecantError::InvalidGuess { x0, x1 });
    }
    cfg.common.validate()?;

    let precision = cfg.precision();
    let tol       = T::from_f64(cfg.tol(), precision);
    let num_iter  = match cfg.max_iter() {
        Some(v) => v,
        None    => ALGORITHM.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    let mut evals = 0;
    let mut trace = Trace::with_capacity(num_iter.saturating_add(1));

    let mut x_prev = T::from_f64(x0, precision);
    let mut x_curr = T::from_f64(x1, precision);
    let mut f_prev = eval_checked(&mut func, &x_prev, &mut evals)?;
    let mut f_curr = eval_checked(&mut func, &x_curr, &mut evals)?;
    trace.push(IterateRecord { k: 0, x: x_prev.clone(), fx: f_prev.clone() });
    trace.push(IterateRecord { k: 1, x: x_curr.clone(), fx: f_curr.clone() });

    for k in 2..=num_iter {
        let denom = f_curr.clone() - f_prev.clone();
        if denom.is_zero() {
            warn!(k, x = %x_curr, "secant denominator vanished");
            trace.push(IterateRecord { k, x: x_curr.clone(), fx: f_curr.clone() });
            return Ok(report(
                x_curr, f_curr, k - 1, evals,
                TerminationReason::ZeroDenominator,
                ToleranceSatisfied::ToleranceNotReached,
                trace,
            ));
        }

        let x_next = x_curr.clone() - f_curr.clone() * (x_curr.clone() - x_prev.clone()) / denom;
        let f_next = if x_next.is_finite() {
            eval_counted(&mut func, &x_next, &mut evals)
        } else {
            x_next.clone()
        };
        if !f_next.is_finite() {
            warn!(k, x = %x_curr, x_next = %x_next, "secant iterate left the finite range");
            return Ok(report(
                x_curr, f_curr, k - 2, evals,
                TerminationReason::NonFiniteIterate,
                ToleranceSatisfied::ToleranceNotReached,
                trace,
            ));
        }

        trace!(k, x = %x_next, fx = %f_next, "secant step");
        trace.push(IterateRecord { k, x: x_next.clone(), fx: f_next.clone() });

        let reached = if (x_next.clone() - x_curr.clone()).abs() < tol {
            Some(ToleranceSatisfied::StepSizeReached)
        } else if f_next.abs() < tol {
            Some(ToleranceSatisfied::AbsFxReached)
        } else {
            None
        };
        if let Some(tolerance_satisfied) = reached {
            debug!(iterations = k - 1, evaluations = evals, root = %x_next, "secant converged");
            return Ok(report(
                x_next, f_next, k - 1, evals,
                TerminationReason::ToleranceReached,
                tolerance_satisfied,
                trace,
            ));
        }

        x_prev = std::mem::replace(&mut x_curr, x_next);
        f_prev = std::mem::replace(&mut f_curr, f_next);
    }

    let iterations = num_iter.saturating_sub(1);
    debug!(iterations, evaluations = evals, "secant hit iteration cap");
    Ok(report(
        x_curr, f_curr, iterations, evals,
        TerminationReason::IterationLimit,
        ToleranceSatisfied::ToleranceNotReached,
        trace,
    ))
}
