//! Jacobi and Gauss-Seidel on a 3x3 homogeneous system.
//!
//! The matrix is only weakly diagonally dominant, so neither iteration is
//! guaranteed to converge; the traces show how each behaves over 10 sweeps.

use std::error::Error;

use numexp::display::format_sweep_record;
use numexp::linear::gauss_seidel::{gauss_seidel, GaussSeidelCfg};
use numexp::linear::jacobi::{jacobi, JacobiCfg};
use numexp::linear::report::SweepReport;
use numexp::{linear::DenseSystem, Precision};

const MATRIX: [[f64; 3]; 3] = [
    [ 1.0, 0.0,  1.0],
    [-1.0, 1.0,  0.0],
    [ 1.0, 2.0, -3.0],
];
const RHS: [f64; 3] = [0.0, 0.0, 0.0];
const GUESS: [f64; 3] = [1.0, 1.0, 1.0];
const SWEEPS: usize = 10;
const DECIMALS: u32 = 6;


fn print_sweeps(title: &str, report: &SweepReport<f64>) {
    println!("{title}:");
    for record in &report.trace {
        println!("{}", format_sweep_record(record, DECIMALS));
    }
}


fn main() -> Result<(), Box<dyn Error>> {
    numexp::logging::init_tracing("warn")?;

    let precision = Precision::default();
    let system = DenseSystem::<f64>::from_f64_rows(&MATRIX, &RHS, precision)?;
    println!("Diagonal dominance: {:?}\n", system.diagonal_dominance());

    let report = jacobi(&system, &GUESS, JacobiCfg::new().with_sweeps(SWEEPS))?;
    print_sweeps("Jacobi Iterations", &report);

    println!();
    let report = gauss_seidel(&system, &GUESS, GaussSeidelCfg::new().with_sweeps(SWEEPS))?;
    print_sweeps("Gauss-Seidel Iterations", &report);

    Ok(())
}
