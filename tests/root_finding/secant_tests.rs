//! tests for the secant method
use approx::assert_abs_diff_eq;

use numexp::root_finding::errors::RootFindingError;
use numexp::root_finding::report::{TerminationReason, ToleranceSatisfied};
use numexp::root_finding::secant::{secant, SecantCfg, SecantError};

type TestResult = Result<(), SecantError>;

fn arctan(x: &f64) -> f64 {
    x.atan()
}

#[test]
fn arctan_pairs_near_the_root_converge() -> TestResult {
    for (x0, x1) in [(0.5, 1.0), (1.0, 1.3), (1.4, 1.5)] {
        let res = secant(arctan, x0, x1, SecantCfg::new())?;

        assert_eq!(res.termination_reason, TerminationReason::ToleranceReached, "({x0}, {x1})");
        assert!(res.root.abs() < 1e-10);
        assert_eq!(res.iterations + 2, res.trace.len());
    }
    Ok(())
}

#[test]
fn trace_starts_with_both_guesses() -> TestResult {
    let res = secant(arctan, 0.5, 1.0, SecantCfg::new())?;

    let head: Vec<(usize, f64)> = res.trace.iter().take(2).map(|r| (r.k, r.x)).collect();
    assert_eq!(head, vec![(0, 0.5), (1, 1.0)]);
    assert_abs_diff_eq!(res.trace.records()[1].fx, std::f64::consts::FRAC_PI_4, epsilon = 1e-15);

    // k = 2 is the first secant update
    let (f0, f1) = (0.5_f64.atan(), 1.0_f64.atan());
    let x2 = 1.0 - f1 * (1.0 - 0.5) / (f1 - f0);
    assert_abs_diff_eq!(res.trace.records()[2].x, x2, epsilon = 1e-15);
    Ok(())
}

#[test]
fn far_pair_saturates_and_stalls() -> TestResult {
    let res = secant(arctan, 10.0, 11.0, SecantCfg::new())?;

    // arctan flattens to pi/2; consecutive values become equal
    assert_eq!(res.termination_reason, TerminationReason::ZeroDenominator);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert!(res.root.abs() > 1e10);

    let n = res.trace.len();
    let (prev, last) = (&res.trace.records()[n - 2], &res.trace.records()[n - 1]);
    assert_eq!(last.x, prev.x);
    assert_eq!(last.k, prev.k + 1);
    assert_eq!(res.iterations, last.k - 1);
    Ok(())
}

#[test]
fn linear_function_in_one_step() -> TestResult {
    let res = secant(|x: &f64| 2.0 * x - 6.0, 0.0, 1.0, SecantCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert_eq!(res.root, 3.0);
    assert_eq!(res.iterations, 1);
    Ok(())
}

#[test]
fn root_at_second_guess_stops_on_step_size() -> TestResult {
    let res = secant(|x: &f64| x - 1.0, 0.0, 1.0, SecantCfg::new())?;

    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert_eq!(res.root, 1.0);
    assert_eq!(res.trace.len(), 3);
    Ok(())
}

#[test]
fn equal_values_stall_immediately() -> TestResult {
    let res = secant(|x: &f64| x * x, -1.0, 1.0, SecantCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ZeroDenominator);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.root, 1.0);

    let ks: Vec<usize> = res.trace.iter().map(|r| r.k).collect();
    assert_eq!(ks, vec![0, 1, 2]);
    Ok(())
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let res = secant(|x: &f64| x * x - 2.0, 1.0, 2.0, SecantCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-10);
    Ok(())
}

#[test]
fn cap_counts_updates() -> TestResult {
    // x^2 + 1 has no real root
    let cfg = SecantCfg::new().with_max_iter(5);
    let res = secant(|x: &f64| x * x + 1.0, 0.5, 2.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.trace.len(), 6);
    assert_eq!(res.iterations, 4);
    Ok(())
}

#[test]
fn unbounded_cap_still_converges() -> TestResult {
    let cfg = SecantCfg::new().with_max_iter(usize::MAX);
    let res = secant(arctan, 0.5, 1.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!(res.root.abs() < 1e-10);
    Ok(())
}

#[test]
fn invalid_inputs() {
    let err = secant(arctan, f64::NAN, 1.0, SecantCfg::new()).unwrap_err();
    assert!(matches!(err, SecantError::InvalidGuess { .. }));

    let err = secant(arctan, 0.0, 1.0, SecantCfg::new().with_max_iter(0)).unwrap_err();
    assert_eq!(err, SecantError::Common(RootFindingError::InvalidMaxIter { got: 0 }));

    let err = secant(|x: &f64| x.ln(), -1.0, 1.0, SecantCfg::new()).unwrap_err();
    assert!(matches!(err, SecantError::Common(RootFindingError::NonFiniteEvaluation { .. })));
}
