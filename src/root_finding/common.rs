//! Helpers shared by the root-finding algorithms.

use crate::real::Real;
use super::errors::RootFindingError;


/// Evaluates `f(x)`, counting the evaluation and rejecting non-finite values.
#[inline]
pub(crate) fn eval_checked<T, F>(
    f: &mut F,
    x: &T,
    evals: &mut usize,
) -> Result<T, RootFindingError>
where
    T: Real,
    F: FnMut(&T) -> T,
{
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x: x.to_f64(), fx: fx.to_f64() });
    }

    Ok(fx)
}


/// Evaluates `f(x)`, counting the evaluation. Non-finite values pass through
/// so the caller can turn them into a termination reason.
#[inline]
pub(crate) fn eval_counted<T, F>(f: &mut F, x: &T, evals: &mut usize) -> T
where
    T: Real,
    F: FnMut(&T) -> T,
{
    *evals += 1;
    f(x)
}
