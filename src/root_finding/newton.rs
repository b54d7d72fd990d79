//! Newton-Raphson method

use tracing::{debug, trace, warn};
use thiserror::Error;

use crate::real::Real;
use crate::trace::Trace;
use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::common::{eval_checked, eval_counted};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::RootFindingError;
use super::report::{IterateRecord, RootFindingReport, TerminationReason, ToleranceSatisfied};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Newton);

/// Report type returned by [`newton`].
pub type NewtonReport<T> = RootFindingReport<T, IterateRecord<T>>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NewtonError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },
}


/// Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance, optional `max_iter` and precision.
///
/// # Defaults
/// - `tol` is [`super::config::DEFAULT_TOL`], applied to both `|f(x)|` and the step.
/// - If `max_iter` is `None`, [`newton`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Newton`] (20).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg);


/// Assembles the report; shared by every exit of [`newton`].
fn report<T: Real>(
    root: T,
    f_root: T,
    iterations: usize,
    evaluations: usize,
    termination_reason: TerminationReason,
    tolerance_satisfied: ToleranceSatisfied,
    trace: Trace<IterateRecord<T>>,
) -> NewtonReport<T> {
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
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton_method)
/// with the analytic derivative `dfunc`.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : its derivative
/// - `x0`    : finite initial guess, lifted into `T` at `cfg.precision()`
/// - `cfg`   : [`NewtonCfg`]
///
/// # Behavior
/// - trace starts with `(0, x0, f(x0))`
/// - step `k`: if `f'(x) == 0` records `(k, x, f(x))` and stops with
///   [`TerminationReason::ZeroDerivative`]; otherwise
///   `x_new = x - f(x) / f'(x)` is recorded as `(k, x_new, f(x_new))`
/// - stops once `|f(x_new)| < tol` or `|x_new - x| < tol`
/// - a non-finite `x_new` or `f(x_new)` stops with
///   [`TerminationReason::NonFiniteIterate`], reporting the last finite iterate
///
/// # Errors
/// - [`NewtonError::InvalidGuess`] : `x0` non-finite
///
/// * Propagated via [`NewtonError::Common`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x0)` produced NaN/inf
/// - [`RootFindingError::InvalidTolerance`]    : `tol` <= 0.0 or non-finite
/// - [`RootFindingError::InvalidMaxIter`]      : `max_iter = 0`
///
/// # Notes
/// - Convergence is *local only*. A poor `x0` can diverge or cycle; the trace
///   shows it and the report says [`TerminationReason::IterationLimit`] or a stall.
pub fn newton<T, F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<NewtonReport<T>, NewtonError>
where
    T: Real,
    F: FnMut(&T) -> T,
    G: FnMut(&T) -> T,
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
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

    let mut x  = T::from_f64(x0, precision);
    let mut fx = eval_checked(&mut func, &x, &mut evals)?;
    trace.push(IterateRecord { k: 0, x: x.clone(), fx: fx.clone() });

    for k in 1..=num_iter {
        let dfx = eval_counted(&mut dfunc, &x, &mut evals);

        // stall: report the last valid iterate
        if dfx.is_zero() {
            warn!(k, x = %x, "newton derivative vanished");
            trace.push(IterateRecord { k, x: x.clone(), fx: fx.clone() });
            return Ok(report(
                x, fx, k, evals,
                TerminationReason::ZeroDerivative,
                ToleranceSatisfied::ToleranceNotReached,
                trace,
            ));
        }

        let x_new = x.clone() - fx.clone() / dfx;
        let fx_new = if x_new.is_finite() {
            eval_counted(&mut func, &x_new, &mut evals)
        } else {
            x_new.clone()
        };
        if !fx_new.is_finite() {
            warn!(k, x = %x, x_new = %x_new, "newton iterate left the finite range");
            return Ok(report(
                x, fx, k - 1, evals,
                TerminationReason::NonFiniteIterate,
                ToleranceSatisfied::ToleranceNotReached,
                trace,
            ));
        }

        trace!(k, x = %x_new, fx = %fx_new, "newton step");
        trace.push(IterateRecord { k, x: x_new.clone(), fx: fx_new.clone() });

        let reached = if fx_new.abs() < tol {
            Some(ToleranceSatisfied::AbsFxReached)
        } else if (x_new.clone() - x.clone()).abs() < tol {
            Some(ToleranceSatisfied::StepSizeReached)
        } else {
            None
        };
        if let Some(tolerance_satisfied) = reached {
            debug!(iterations = k, evaluations = evals, root = %x_new, "newton converged");
            return Ok(report(
                x_new, fx_new, k, evals,
                TerminationReason::ToleranceReached,
                tolerance_satisfied,
                trace,
            ));
        }

        x  = x_new;
        fx = fx_new;
    }

    debug!(iterations = num_iter, evaluations = evals, "newton hit iteration cap");
    Ok(report(
        x, fx, num_iter, evals,
        TerminationReason::IterationLimit,
        ToleranceSatisfied::ToleranceNotReached,
        trace,
    ))
}
