//! Jacobi iteration
//!
//! Implements the [Jacobi method](https://en.wikipedia.org/wiki/Jacobi_method).
//!
//! Each sweep computes every coordinate from the previous sweep only,
//!
//! ```text
//! x_new[i] = (b[i] - sum_{j != i} A[i][j] * x_old[j]) / A[i][i]
//! ```
//!
//! and then replaces the whole vector.

use tracing::{debug, trace};

use crate::real::Real;
use super::algorithms::Algorithm;
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::LinearSystemError;
use super::report::{SweepRecord, SweepReport, SweepTermination};
use super::system::{max_abs_diff, DenseSystem};

const ALGORITHM: Algorithm = Algorithm::Jacobi;


/// Jacobi configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Defaults
/// - 10 sweeps, no tolerance: exactly 10 sweeps run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JacobiCfg {
    common: CommonCfg,
}
impl JacobiCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(JacobiCfg);


/// One Jacobi sweep from `x_old` into `x_new`.
fn sweep<T: Real>(system: &DenseSystem<T>, zero: &T, x_old: &[T], x_new: &mut [T]) {
    let n = system.dimension();
    for i in 0..n {
        let mut sum = zero.clone();
        for j in (0..n).filter(|&j| j != i) {
            sum = sum + system.coefficient(i, j).clone() * x_old[j].clone();
        }
        x_new[i] = (system.rhs()[i].clone() - sum) / system.coefficient(i, i).clone();
    }
}


/// Runs Jacobi sweeps on `system` from the initial guess `x0`.
///
/// # Behavior
/// - fixed-count mode (no `tol`): exactly `cfg.sweeps()` sweeps, no convergence test
/// - with `tol`: stops after the first sweep whose max-norm change is `< tol`
/// - every sweep is recorded in the trace
///
/// # Returns
/// [`SweepReport`] containing
/// - `solution`       : estimate after the last sweep
/// - `sweeps`         : sweeps performed
/// - `algorithm_name` : `"jacobi"`
///
/// # Errors
/// - [`LinearSystemError::GuessLength`]      : `x0` has the wrong length
/// - [`LinearSystemError::InvalidSweeps`]    : `sweeps == 0`
/// - [`LinearSystemError::InvalidTolerance`] : `tol` <= 0 or non-finite
///
/// # Notes
/// - A zero diagonal entry is not guarded; the division makes the
///   estimate non-finite.
pub fn jacobi<T: Real>(
    system: &DenseSystem<T>,
    x0: &[f64],
    cfg: JacobiCfg,
) -> Result<SweepReport<T>, LinearSystemError> {
    system.check_len(x0.len())?;
    cfg.common.validate()?;

    let precision = cfg.precision();
    let zero      = T::from_f64(0.0, precision);
    let tol       = cfg.tol().map(|t| T::from_f64(t, precision));

    let mut x_old: Vec<T> = x0.iter().map(|v| T::from_f64(*v, precision)).collect();
    let mut x_new = x_old.clone();
    let mut report = SweepReport::new(ALGORITHM, Vec::new(), cfg.sweeps());

    for k in 1..=cfg.sweeps() {
        sweep(system, &zero, &x_old, &mut x_new);
        trace!(k, "jacobi sweep");
        report.trace.push(SweepRecord { k, x: x_new.clone() });
        report.sweeps = k;

        let change = max_abs_diff(&x_new, &x_old);
        std::mem::swap(&mut x_old, &mut x_new);

        if let (Some(tol), Some(change)) = (&tol, change) {
            if change < *tol {
                report.termination = SweepTermination::ToleranceReached;
                break;
            }
        }
    }

    debug!(sweeps = report.sweeps, termination = ?report.termination, "jacobi finished");
    report.solution = x_old;
    Ok(report)
}
