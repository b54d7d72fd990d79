//! tests for Gauss-Seidel iteration
use approx::assert_abs_diff_eq;

use numexp::linear::errors::LinearSystemError;
use numexp::linear::gauss_seidel::{gauss_seidel, GaussSeidelCfg};
use numexp::linear::jacobi::{jacobi, JacobiCfg};
use numexp::linear::report::SweepTermination;
use numexp::{linear::DenseSystem, Precision};

type TestResult = Result<(), LinearSystemError>;

fn reference_system() -> Result<DenseSystem<f64>, LinearSystemError> {
    DenseSystem::from_f64_rows(
        &[[1.0, 0.0, 1.0], [-1.0, 1.0, 0.0], [1.0, 2.0, -3.0]],
        &[0.0, 0.0, 0.0],
        Precision::default(),
    )
}

#[test]
fn non_dominant_system_oscillates() -> TestResult {
    let res = gauss_seidel(&reference_system()?, &[1.0, 1.0, 1.0], GaussSeidelCfg::new())?;

    assert_eq!(res.sweeps, 10);
    assert_eq!(res.termination, SweepTermination::SweepLimit);
    assert_eq!(res.algorithm_name, "gauss_seidel");

    for record in &res.trace {
        let sign = if record.k % 2 == 1 { -1.0 } else { 1.0 };
        assert_eq!(record.x, vec![sign; 3], "k = {}", record.k);
    }
    assert_eq!(res.solution, vec![1.0, 1.0, 1.0]);
    Ok(())
}

#[test]
fn uses_values_from_the_current_sweep() -> TestResult {
    let system = reference_system()?;
    let gs = gauss_seidel(&system, &[1.0, 1.0, 1.0], GaussSeidelCfg::new().with_sweeps(1))?;
    let jc = jacobi(&system, &[1.0, 1.0, 1.0], JacobiCfg::new().with_sweeps(1))?;

    // x0 is updated identically, later coordinates see it only in Gauss-Seidel
    assert_eq!(gs.solution[0], jc.solution[0]);
    assert_eq!(gs.solution[1], -1.0);
    assert_eq!(jc.solution[1], 1.0);
    Ok(())
}

#[test]
fn converges_faster_than_jacobi_on_dominant_system() -> TestResult {
    let system = DenseSystem::<f64>::from_f64_rows(
        &[[4.0, 1.0, 1.0], [1.0, 5.0, 2.0], [1.0, 2.0, 6.0]],
        &[6.0, 8.0, 9.0],
        Precision::default(),
    )?;
    let x0 = [0.0, 0.0, 0.0];

    let gs = gauss_seidel(&system, &x0, GaussSeidelCfg::new().with_sweeps(200).with_tol(1e-12))?;
    let jc = jacobi(&system, &x0, JacobiCfg::new().with_sweeps(200).with_tol(1e-12))?;

    assert_eq!(gs.termination, SweepTermination::ToleranceReached);
    assert_eq!(jc.termination, SweepTermination::ToleranceReached);
    assert!(gs.sweeps < jc.sweeps);
    for x in &gs.solution {
        assert_abs_diff_eq!(*x, 1.0, epsilon = 1e-10);
    }
    Ok(())
}

#[test]
fn repeated_runs_are_identical() -> TestResult {
    let system = reference_system()?;
    let first  = gauss_seidel(&system, &[0.5, -2.0, 3.0], GaussSeidelCfg::new())?;
    let second = gauss_seidel(&system, &[0.5, -2.0, 3.0], GaussSeidelCfg::new())?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn zero_diagonal_never_meets_the_tolerance() -> TestResult {
    let system = DenseSystem::<f64>::from_f64_rows(&[[1.0, 0.0], [0.0, 0.0]], &[1.0, 0.0], Precision::default())?;
    let res = gauss_seidel(&system, &[1.0, 0.0], GaussSeidelCfg::new().with_tol(1e-8))?;

    assert_eq!(res.termination, SweepTermination::SweepLimit);
    assert_eq!(res.sweeps, 10);
    assert!(res.solution.iter().any(|x| !x.is_finite()));
    Ok(())
}

#[test]
fn invalid_inputs() -> TestResult {
    let system = reference_system()?;

    let err = gauss_seidel(&system, &[1.0; 4], GaussSeidelCfg::new()).unwrap_err();
    assert_eq!(err, LinearSystemError::GuessLength { expected: 3, got: 4 });

    let err = gauss_seidel(&system, &[1.0; 3], GaussSeidelCfg::new().with_sweeps(0)).unwrap_err();
    assert_eq!(err, LinearSystemError::InvalidSweeps { got: 0 });
    Ok(())
}

#[cfg(feature = "rug")]
#[test]
fn oscillation_is_exact_in_arbitrary_precision() -> TestResult {
    use rug::Float;

    let precision = Precision::digits(50);
    let system = DenseSystem::<Float>::from_f64_rows(
        &[[1.0, 0.0, 1.0], [-1.0, 1.0, 0.0], [1.0, 2.0, -3.0]],
        &[0.0, 0.0, 0.0],
        precision,
    )?;
    let res = gauss_seidel(&system, &[1.0, 1.0, 1.0], GaussSeidelCfg::new().with_precision(precision))?;

    for x in &res.solution {
        assert_eq!(x.to_f64(), 1.0);
    }
    Ok(())
}
