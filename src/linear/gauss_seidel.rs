//! Gauss-Seidel iteration
//!
//! Same update as [`super::jacobi`], applied in place: coordinate `i` sees the
//! current sweep's values for `j < i` and the previous sweep's for `j > i`.
//!
//! ```text
//! x[i] = (b[i] - sum_{j < i} A[i][j] * x[j] - sum_{j > i} A[i][j] * x[j]) / A[i][i]
//! ```

use tracing::{debug, trace};

use crate::real::Real;
use super::algorithms::Algorithm;
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::LinearSystemError;
use super::report::{SweepRecord, SweepReport, SweepTermination};
use super::system::{max_abs_diff, DenseSystem};

const ALGORITHM: Algorithm = Algorithm::GaussSeidel;


/// Gauss-Seidel configuration
///
/// # Defaults
/// - 10 sweeps, no tolerance: exactly 10 sweeps run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussSeidelCfg {
    common: CommonCfg,
}
impl GaussSeidelCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(GaussSeidelCfg);


fn sweep<T: Real>(system: &DenseSystem<T>, zero: &T, x: &mut [T]) {
    let n = system.dimension();
    for i in 0..n {
        let mut lower = zero.clone();
        let mut upper = zero.clone();
        for j in 0..i {
            lower = lower + system.coefficient(i, j).clone() * x[j].clone();
        }
        for j in i + 1..n {
            upper = upper + system.coefficient(i, j).clone() * x[j].clone();
        }
        x[i] = (system.rhs()[i].clone() - lower - upper) / system.coefficient(i, i).clone();
    }
}


/// Runs Gauss-Seidel sweeps on `system` from the initial guess `x0`.
///
/// Same stopping rules, errors and (missing) diagonal guard as
/// [`super::jacobi::jacobi`]; the report's `algorithm_name` is `"gauss_seidel"`.
pub fn gauss_seidel<T: Real>(
    system: &DenseSystem<T>,
    x0: &[f64],
    cfg: GaussSeidelCfg,
) -> Result<SweepReport<T>, LinearSystemError> {
    system.check_len(x0.len())?;
    cfg.common.validate()?;

    let precision = cfg.precision();
    let zero      = T::from_f64(0.0, precision);
    let tol       = cfg.tol().map(|t| T::from_f64(t, precision));

    let mut x: Vec<T> = x0.iter().map(|v| T::from_f64(*v, precision)).collect();
    let mut report = SweepReport::new(ALGORITHM, Vec::new(), cfg.sweeps());

    for k in 1..=cfg.sweeps() {
        let previous = tol.as_ref().map(|_| x.clone());
        sweep(system, &zero, &mut x);
        trace!(k, "gauss-seidel sweep");
        report.trace.push(SweepRecord { k, x: x.clone() });
        report.sweeps = k;

        let change = previous.and_then(|prev| max_abs_diff(&x, &prev));
        if let (Some(tol), Some(change)) = (&tol, change) {
            if change < *tol {
                report.termination = SweepTermination::ToleranceReached;
                break;
            }
        }
    }

    debug!(sweeps = report.sweeps, termination = ?report.termination, "gauss-seidel finished");
    report.solution = x;
    Ok(report)
}
