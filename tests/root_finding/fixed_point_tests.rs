//! tests for fixed-point iteration
use approx::assert_abs_diff_eq;

use numexp::root_finding::errors::RootFindingError;
use numexp::root_finding::fixed_point::{fixed_point, FixedPointCfg, FixedPointError};
use numexp::root_finding::report::TerminationReason;

type TestResult = Result<(), FixedPointError>;

fn g(x: &f64) -> f64 {
    x - x.atan()
}

#[test]
fn runs_exactly_ten_steps_by_default() -> TestResult {
    let res = fixed_point(g, 5.0, FixedPointCfg::new())?;

    assert_eq!(res.iterations, 10);
    assert_eq!(res.trace.len(), 11);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.algorithm_name, "fixed_point");

    let first = res.trace.first().unwrap();
    assert_eq!((first.k, first.x), (0, 5.0));
    assert_eq!(res.trace.last().unwrap().x, res.fixed_point);
    Ok(())
}

#[test]
fn trace_is_the_orbit_of_g() -> TestResult {
    let res = fixed_point(g, 1.0, FixedPointCfg::new().with_iterations(4))?;

    let xs: Vec<f64> = res.trace.iter().map(|r| r.x).collect();
    for pair in xs.windows(2) {
        assert_eq!(pair[1], g(&pair[0]));
    }
    for (k, r) in res.trace.iter().enumerate() {
        assert_eq!(r.k, k);
    }
    Ok(())
}

#[test]
fn positive_start_decreases_monotonically() -> TestResult {
    let res = fixed_point(g, 5.0, FixedPointCfg::new())?;

    let xs: Vec<f64> = res.trace.iter().map(|r| r.x).collect();
    for pair in xs.windows(2) {
        assert!(pair[1] >= 0.0);
        assert!(pair[1] <= pair[0]);
    }
    // first step removes arctan(5)
    assert_abs_diff_eq!(xs[0] - xs[1], 5.0_f64.atan(), epsilon = 1e-12);
    Ok(())
}

#[test]
fn orbit_is_odd_in_the_start() -> TestResult {
    let pos = fixed_point(g, 5.0, FixedPointCfg::new())?;
    let neg = fixed_point(g, -5.0, FixedPointCfg::new())?;

    for (p, n) in pos.trace.iter().zip(&neg.trace) {
        assert_abs_diff_eq!(p.x, -n.x, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn small_start_converges_to_zero() -> TestResult {
    let res = fixed_point(g, 0.1, FixedPointCfg::new())?;

    assert_eq!(res.trace.len(), 11);
    assert!(res.fixed_point.abs() < 1e-10);
    Ok(())
}

#[test]
fn step_tolerance_stops_early() -> TestResult {
    let cfg = FixedPointCfg::new().with_step_tol(1e-12);
    let res = fixed_point(g, 0.1, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!(res.iterations < 10);
    assert_eq!(res.trace.len(), res.iterations + 1);
    assert!(res.fixed_point.abs() < 1e-10);
    Ok(())
}

#[test]
fn step_tolerance_not_met_keeps_fixed_count() -> TestResult {
    let cfg = FixedPointCfg::new().with_step_tol(1e-12).with_iterations(4);
    let res = fixed_point(g, 5.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 4);
    assert_eq!(res.trace.len(), 5);
    Ok(())
}

#[test]
fn unbounded_count_stops_on_step_tolerance() -> TestResult {
    let cfg = FixedPointCfg::new().with_step_tol(1e-12).with_iterations(usize::MAX);
    let res = fixed_point(g, 0.1, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.trace.len(), res.iterations + 1);
    Ok(())
}

#[test]
fn diverging_map_is_not_an_error() -> TestResult {
    let res = fixed_point(|x: &f64| 2.0 * x + 1.0, 1.0, FixedPointCfg::new().with_iterations(3))?;

    let xs: Vec<f64> = res.trace.iter().map(|r| r.x).collect();
    assert_eq!(xs, vec![1.0, 3.0, 7.0, 15.0]);
    Ok(())
}

#[test]
fn invalid_inputs() {
    let err = fixed_point(g, f64::NAN, FixedPointCfg::new()).unwrap_err();
    assert!(matches!(err, FixedPointError::InvalidGuess { .. }));

    let err = fixed_point(g, 1.0, FixedPointCfg::new().with_iterations(0)).unwrap_err();
    assert_eq!(err, FixedPointError::Common(RootFindingError::InvalidMaxIter { got: 0 }));

    let err = fixed_point(g, 1.0, FixedPointCfg::new().with_step_tol(-1.0)).unwrap_err();
    assert_eq!(err, FixedPointError::Common(RootFindingError::InvalidTolerance { got: -1.0 }));
}
