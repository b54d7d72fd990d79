//! tests for Newton's method
use approx::assert_abs_diff_eq;

use numexp::root_finding::errors::RootFindingError;
use numexp::root_finding::newton::{newton, NewtonCfg, NewtonError};
use numexp::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), NewtonError>;

fn arctan(x: &f64) -> f64 {
    x.atan()
}

fn d_arctan(x: &f64) -> f64 {
    1.0 / (1.0 + x * x)
}

#[test]
fn arctan_from_one_converges() -> TestResult {
    let res = newton(arctan, d_arctan, 1.0, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert!(res.root.abs() < 1e-10);
    assert!(res.iterations <= 6);
    assert_eq!(res.trace.len(), res.iterations + 1);

    let first = res.trace.first().unwrap();
    assert_eq!((first.k, first.x), (0, 1.0));
    assert_abs_diff_eq!(first.fx, std::f64::consts::FRAC_PI_4, epsilon = 1e-15);
    Ok(())
}

#[test]
fn arctan_converges_below_the_threshold() -> TestResult {
    for x0 in [0.5, 1.3, 1.35, 1.375, 1.3875, 1.390625] {
        let res = newton(arctan, d_arctan, x0, NewtonCfg::new())?;
        assert_eq!(res.termination_reason, TerminationReason::ToleranceReached, "x0 = {x0}");
        assert!(res.root.abs() < 1e-10);
    }
    Ok(())
}

#[test]
fn arctan_from_1_4_diverges_until_the_derivative_vanishes() -> TestResult {
    let res = newton(arctan, d_arctan, 1.4, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ZeroDerivative);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert!(res.root.abs() > 1e100);

    // iterates alternate in sign and grow
    let xs: Vec<f64> = res.trace.iter().map(|r| r.x).collect();
    let expected = [1.4, -1.4136186488037423, 1.4501293146283372, -1.5506259756377534, 1.8470540841501895];
    for (x, e) in xs.iter().zip(expected) {
        assert_abs_diff_eq!(*x, e, epsilon = 1e-12);
    }

    // the stall record repeats the last valid iterate
    let n = res.trace.len();
    let (prev, last) = (&res.trace.records()[n - 2], &res.trace.records()[n - 1]);
    assert_eq!(last.x, prev.x);
    assert_eq!(last.k, prev.k + 1);
    assert_eq!(res.iterations, last.k);
    Ok(())
}

#[test]
fn zero_derivative_at_start() -> TestResult {
    let res = newton(|x: &f64| x * x - 1.0, |x: &f64| 2.0 * x, 0.0, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ZeroDerivative);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.root, 0.0);

    let xs: Vec<(usize, f64, f64)> = res.trace.iter().map(|r| (r.k, r.x, r.fx)).collect();
    assert_eq!(xs, vec![(0, 0.0, -1.0), (1, 0.0, -1.0)]);
    Ok(())
}

#[test]
fn non_finite_iterate_reports_last_finite_point() -> TestResult {
    let res = newton(|x: &f64| *x, |_x: &f64| 1e-320, 1.0, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::NonFiniteIterate);
    assert_eq!(res.root, 1.0);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.trace.len(), 1);
    Ok(())
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let res = newton(|x: &f64| x * x - 2.0, |x: &f64| 2.0 * x, 1.0, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-10);
    Ok(())
}

#[test]
fn tiny_steps_stop_on_step_size() -> TestResult {
    let res = newton(|_x: &f64| 1.0, |_x: &f64| 1e20, 1.0, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert_eq!(res.iterations, 1);
    Ok(())
}

#[test]
fn default_cap_is_twenty() -> TestResult {
    // constant function with unit slope: steps of -1 forever
    let res = newton(|_x: &f64| 1.0, |_x: &f64| 1.0, 0.0, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 20);
    assert_eq!(res.trace.len(), 21);
    assert_eq!(res.root, -20.0);
    Ok(())
}

#[test]
fn explicit_cap() -> TestResult {
    let cfg = NewtonCfg::new().with_max_iter(3);
    let res = newton(|_x: &f64| 1.0, |_x: &f64| 1.0, 0.0, cfg)?;

    assert_eq!(res.iterations, 3);
    assert_eq!(res.trace.len(), 4);
    Ok(())
}

#[test]
fn unbounded_cap_still_converges() -> TestResult {
    let cfg = NewtonCfg::new().with_max_iter(usize::MAX);
    let res = newton(arctan, d_arctan, 1.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!(res.root.abs() < 1e-10);
    Ok(())
}

#[test]
fn invalid_inputs() {
    let err = newton(arctan, d_arctan, f64::INFINITY, NewtonCfg::new()).unwrap_err();
    assert_eq!(err, NewtonError::InvalidGuess { x0: f64::INFINITY });

    let err = newton(arctan, d_arctan, 1.0, NewtonCfg::new().with_tol(f64::NAN)).unwrap_err();
    assert!(matches!(err, NewtonError::Common(RootFindingError::InvalidTolerance { .. })));

    let err = newton(|x: &f64| 1.0 / x, d_arctan, 0.0, NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::Common(RootFindingError::NonFiniteEvaluation { .. })));
}

#[cfg(feature = "rug")]
#[test]
fn arctan_converges_in_arbitrary_precision() -> TestResult {
    use numexp::{Precision, Real};
    use rug::Float;

    let precision = Precision::default();
    let cfg = NewtonCfg::new().with_precision(precision);
    let res = newton(
        |x: &Float| Real::atan(x),
        |x: &Float| {
            let one = <Float as Real>::from_f64(1.0, precision);
            one.clone() / (one + x.clone() * x.clone())
        },
        1.0,
        cfg,
    )?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!(res.root.to_f64().abs() < 1e-10);
    assert_eq!(res.root.prec(), precision.bits());
    Ok(())
}
