//! Weighted-sum quadrature on `[a, b]`
//!
//! Each rule is a single weighted sum of integrand values scaled by the
//! interval length:
//!
//! ```text
//! Q[f] = sum_i w_i * f(x_i)      with  sum_i w_i = b - a
//! ```
//!
//! [`integrate_composite`] splits `[a, b]` into equal panels and sums the rule
//! over each; [`compare_rules`] evaluates several rules against a known value.

use tracing::{debug, trace};

use crate::real::{Precision, Real};
use super::algorithms::Rule;
use super::errors::QuadratureError;
use super::report::QuadratureEstimate;


fn validate_interval(a: f64, b: f64) -> Result<(), QuadratureError> {
    if !(a.is_finite() && b.is_finite() && a < b) {
        return Err(QuadratureError::InvalidInterval { a, b });
    }
    Ok(())
}


/// Applies `rule` on `[a, b]` given as lifted endpoints.
fn weighted_sum<T, F>(
    rule: Rule,
    f: &mut F,
    a: &T,
    b: &T,
    precision: Precision,
) -> Result<T, QuadratureError>
where
    T: Real,
    F: FnMut(&T) -> T,
{
    let mut sum = T::from_f64(0.0, precision);
    for (x, w) in rule.nodes_and_weights_on(a, b, precision) {
        let fx = f(&x);
        if !fx.is_finite() {
            return Err(QuadratureError::NonFiniteEvaluation { x: x.to_f64(), fx: fx.to_f64() });
        }
        trace!(rule = %rule, x = x.to_f64(), fx = fx.to_f64(), "node");
        sum = sum + w * fx;
    }
    Ok(sum)
}


/// Integrates `f` over `[a, b]` with a single application of `rule`.
///
/// # Errors
/// ├ [`QuadratureError::InvalidInterval`]     : `a`, `b` non-finite or `a >= b`
/// └ [`QuadratureError::NonFiniteEvaluation`] : `f` is infinite or NaN at a node
///
/// # Example
/// ```
/// use numexp::{Precision, quadrature::{integrate, Rule}};
///
/// // Simpson's rule is exact for cubics
/// let q: f64 = integrate(Rule::Simpson, |x: &f64| x * x * x, 0.0, 2.0, Precision::default()).unwrap();
/// assert!((q - 4.0).abs() < 1e-12);
/// ```
pub fn integrate<T, F>(
    rule: Rule,
    mut f: F,
    a: f64,
    b: f64,
    precision: Precision,
) -> Result<T, QuadratureError>
where
    T: Real,
    F: FnMut(&T) -> T,
{
    validate_interval(a, b)?;

    let value = weighted_sum(
        rule,
        &mut f,
        &T::from_f64(a, precision),
        &T::from_f64(b, precision),
        precision,
    )?;
    debug!(rule = %rule, a, b, value = value.to_f64(), "quadrature");
    Ok(value)
}


/// Integrates `f` over `[a, b]` by applying `rule` on `panels` equal
/// sub-intervals and summing. `panels == 1` equals [`integrate`].
///
/// # Errors
/// ├ [`QuadratureError::InvalidInterval`]     : as in [`integrate`]
/// ├ [`QuadratureError::InvalidPanels`]       : `panels == 0`
/// └ [`QuadratureError::NonFiniteEvaluation`] : as in [`integrate`]
pub fn integrate_composite<T, F>(
    rule: Rule,
    mut f: F,
    a: f64,
    b: f64,
    panels: usize,
    precision: Precision,
) -> Result<T, QuadratureError>
where
    T: Real,
    F: FnMut(&T) -> T,
{
    validate_interval(a, b)?;
    if panels == 0 {
        return Err(QuadratureError::InvalidPanels { got: panels });
    }

    let a_t   = T::from_f64(a, precision);
    let b_t   = T::from_f64(b, precision);
    let width = (b_t.clone() - a_t.clone()) / T::from_f64(panels as f64, precision);
    let edge  = |i: usize| {
        if i == panels {
            b_t.clone()
        } else {
            a_t.clone() + width.clone() * T::from_f64(i as f64, precision)
        }
    };

    let mut total = T::from_f64(0.0, precision);
    for i in 0..panels {
        total = total + weighted_sum(rule, &mut f, &edge(i), &edge(i + 1), precision)?;
    }

    debug!(rule = %rule, a, b, panels, value = total.to_f64(), "composite quadrature");
    Ok(total)
}


/// Evaluates each of `rules` on `[a, b]` and measures it against `exact`.
///
/// Estimates are returned in the order of `rules`. The first failing rule's
/// error is returned.
pub fn compare_rules<T, F>(
    rules: &[Rule],
    mut f: F,
    a: f64,
    b: f64,
    exact: &T,
    precision: Precision,
) -> Result<Vec<QuadratureEstimate<T>>, QuadratureError>
where
    T: Real,
    F: FnMut(&T) -> T,
{
    rules
        .iter()
        .map(|&rule| {
            let value: T = integrate(rule, &mut f, a, b, precision)?;
            let abs_error = (value.clone() - exact.clone()).abs();
            Ok(QuadratureEstimate { rule, value, abs_error })
        })
        .collect()
}
