use tracing::{debug, trace};
use thiserror::Error;

use crate::real::Real;
use crate::trace::Trace;
use super::algorithms::{Algorithm, BracketFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::common::eval_checked;
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::RootFindingError;
use super::report::{BisectionRecord, RootFindingReport, TerminationReason, ToleranceSatisfied};
use super::signs::{opposite_sign, same_sign};

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);

/// Report type returned by [`bisection`].
pub type BisectionReport<T> = RootFindingReport<T, BisectionRecord<T>>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BisectionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange  { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}

/// Bisection Configuration
///
/// # Defaults
///
/// ┌ `tol`       - [`super::config::DEFAULT_TOL`], compared against half the bracket width
/// ├ `max_iter`  - None; resolved to [`predicted_iterations`]
/// └ `precision` - [`crate::real::Precision::default`], raised for tiny tolerances
///
/// # Validation:
/// └ Configuration validation occurs in [`bisection`] via [`CommonCfg::validate`].
///    ├ `tol` > 0 and finite
///    └ `max_iter` is `None` or >= 1
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(BisectionCfg);


/// Minimum number of bisections guaranteeing `(b - a) / 2^k <= tol`:
/// `ceil(log2((b - a) / tol))`.
///
/// Informational; [`bisection`] also uses it as the default iteration cap.
///
/// # Returns
/// ├ `Ok(0)` if the interval is already within tolerance (or empty)
/// ├ `Ok(k)` otherwise
/// └ `Err(RootFindingError::InvalidTolerance)` if `tol` <= 0 or non-finite
pub fn predicted_iterations(a: f64, b: f64, tol: f64) -> Result<usize, RootFindingError> {
    if !(tol.is_finite() && tol > 0.0) {
        return Err(RootFindingError::InvalidTolerance { got: tol });
    }
    let ratio = (b - a) / tol;
    if !(ratio > 1.0) {
        return Ok(0);
    }

    Ok(ratio.log2().ceil() as usize)
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// The function `func` must be continuous on `[a, b]` with `func(a)` and
/// `func(b)` of opposite signs (or one of them exactly zero).
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bound of the search interval. Must be finite and less than `b`.
/// ├ `b`    - Upper bound of the search interval.
/// └ `cfg`  - [`BisectionCfg`]; the endpoints are lifted into `T` at `cfg.precision()`.
///
/// # Behavior
///
/// ├ endpoint with `f == 0` : returned immediately, `iterations = 0`
/// ├ step `k`               : `mid = (a + b) / 2`, recorded as `(k, a, b, mid, f(mid))`
/// ├ stop                   : `f(mid) == 0` or `|b - a| / 2 <= tol`
/// └ otherwise              : keep the half whose endpoint values change sign
///
/// # Returns
///
/// [`BisectionReport`] with the final midpoint, the iteration count reached and
/// the full trace of `(k, a, b, mid, f(mid))`.
///
/// # Errors
///
/// ┌ [`BisectionError::InvalidBounds`] - `a` or `b` is NaN/inf or `a >= b`.
/// ├ [`BisectionError::NoSignChange`]  - `func(a)` and `func(b)` share a sign.
/// │
/// The following are propagated via [`BisectionError::Common`]
/// ├ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produced NaN or inf.
/// ├ [`RootFindingError::InvalidTolerance`]    - `cfg.tol` <= 0 or not finite.
/// └ [`RootFindingError::InvalidMaxIter`]      - `cfg.max_iter` == 0.
pub fn bisection<T, F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: BisectionCfg,
) -> Result<BisectionReport<T>, BisectionError>
where
    T: Real,
    F: FnMut(&T) -> T,
{
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    cfg.common.validate()?;

    let tol       = cfg.tol();
    let precision = cfg.precision();
    let num_iter  = match cfg.max_iter() {
        Some(m) => m,
        None    => predicted_iterations(a, b, tol)?.clamp(1, GLOBAL_MAX_ITER_FALLBACK),
    };

    let half  = T::from_f64(0.5, precision);
    let tol_t = T::from_f64(tol, precision);
    let (a0, b0) = (a, b);
    let mut a = T::from_f64(a, precision);
    let mut b = T::from_f64(b, precision);

    let mut evals = 0;
    let mut trace = Trace::new();

    // immediate bounds are roots
    let mut fa = eval_checked(&mut func, &a, &mut evals)?;
    if fa.is_zero() {
        return Ok(endpoint_root(a.clone(), fa, a, b, evals));
    }
    let fb = eval_checked(&mut func, &b, &mut evals)?;
    if fb.is_zero() {
        return Ok(endpoint_root(b.clone(), fb, a, b, evals));
    }

    if same_sign(&fa, &fb) {
        return Err(BisectionError::NoSignChange { a: a0, b: b0 });
    }

    // algorithm
    let mut midpoint = a.clone();  // gets overwritten
    let mut fm       = fa.clone(); // gets overwritten
    for k in 1..=num_iter {
        midpoint = (a.clone() + b.clone()) * half.clone();
        fm       = eval_checked(&mut func, &midpoint, &mut evals)?;
        trace!(k, mid = %midpoint, f_mid = %fm, "bisection step");

        trace.push(BisectionRecord {
            k,
            a     : a.clone(),
            b     : b.clone(),
            mid   : midpoint.clone(),
            f_mid : fm.clone(),
        });

        let reached = if fm.is_zero() {
            Some(ToleranceSatisfied::ExactZero)
        } else if (b.clone() - a.clone()).abs() * half.clone() <= tol_t {
            Some(ToleranceSatisfied::WidthTolReached)
        } else {
            None
        };
        if let Some(tolerance_satisfied) = reached {
            debug!(iterations = k, evaluations = evals, root = %midpoint, "bisection converged");
            return Ok(RootFindingReport {
                root                : midpoint,
                f_root              : fm,
                iterations          : k,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied,
                algorithm_name      : ALGORITHM.algorithm_name(),
                trace,
            });
        }

        // shrink interval
        if opposite_sign(&fa, &fm) {
            b = midpoint.clone();
        } else {
            a  = midpoint.clone();
            fa = fm.clone();
        }
    }

    debug!(iterations = num_iter, evaluations = evals, "bisection hit iteration cap");
    Ok(RootFindingReport {
        root                : midpoint,
        f_root              : fm,
        iterations          : num_iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        algorithm_name      : ALGORITHM.algorithm_name(),
        trace,
    })
}


/// Report for an endpoint that is already an exact root.
fn endpoint_root<T: Real>(root: T, f_root: T, a: T, b: T, evals: usize) -> BisectionReport<T> {
    let mut trace = Trace::with_capacity(1);
    trace.push(BisectionRecord {
        k     : 0,
        a,
        b,
        mid   : root.clone(),
        f_mid : f_root.clone(),
    });

    RootFindingReport {
        root,
        f_root,
        iterations          : 0,
        evaluations         : evals,
        termination_reason  : TerminationReason::ToleranceReached,
        tolerance_satisfied : ToleranceSatisfied::ExactZero,
        algorithm_name      : ALGORITHM.algorithm_name(),
        trace,
    }
}
