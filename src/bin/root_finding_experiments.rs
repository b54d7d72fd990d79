//! Root-finding experiments on `f(x) = arctan(x)`.
//!
//! Runs once with `f64` and, when built with `--features rug`, again with
//! arbitrary-precision `rug::Float`.

use std::error::Error;

use numexp::display::{format_bisection_record, format_iterate_record, format_sequence_record};
use numexp::root_finding::bisection::{bisection, predicted_iterations, BisectionCfg};
use numexp::root_finding::fixed_point::{fixed_point, FixedPointCfg};
use numexp::root_finding::newton::{newton, NewtonCfg};
use numexp::root_finding::report::IterateRecord;
use numexp::root_finding::secant::{secant, SecantCfg};
use numexp::{Precision, Real, Trace};

const BRACKET: (f64, f64) = (-4.9, 5.1);
const EPSILONS: [f64; 7] = [1e-2, 1e-4, 1e-8, 1e-16, 1e-32, 1e-64, 1e-128];
const FIXED_POINT_STARTS: [f64; 5] = [5.0, -5.0, 1.0, -1.0, 0.1];
const NEWTON_STARTS: [f64; 10] = [0.5, 1.0, 1.3, 1.4, 1.35, 1.375, 1.3875, 1.39375, 1.390625, 1.3921875];
const SECANT_PAIRS: [(f64, f64); 4] = [(0.5, 1.0), (1.0, 1.3), (1.4, 1.5), (10.0, 11.0)];
const OPEN_TOL: f64 = 1e-10;


fn arctan<T: Real>(x: &T) -> T {
    x.atan()
}

fn print_iterates<T: Real>(trace: &Trace<IterateRecord<T>>) {
    for record in trace {
        println!(" {}", format_iterate_record(record, 30));
    }
}


fn bisection_experiments<T: Real>(precision: Precision) -> Result<(), Box<dyn Error>> {
    let (a, b) = BRACKET;
    println!("=== Bisection on f(x) = arctan(x), [a, b] = [{a}, {b}] ===");

    let fa = T::from_f64(a, precision).atan();
    let fb = T::from_f64(b, precision).atan();
    println!("f(a) = arctan({a}) = {}", fa.to_string_digits(40));
    println!("f(b) = arctan({b}) = {}", fb.to_string_digits(40));
    if fa.is_sign_negative() != fb.is_sign_negative() {
        println!("f(a) and f(b) have opposite signs and f is continuous: the bisection hypotheses hold.");
    } else {
        println!("WARNING: f(a) and f(b) have the same sign, bisection is not guaranteed.");
    }

    let tol = 1e-2;
    println!("Predicted bisection iterations for error <= {tol}: k >= {}", predicted_iterations(a, b, tol)?);

    println!("\nFirst five bisection steps:");
    let cfg = BisectionCfg::new().with_max_iter(5).with_precision(precision);
    match bisection::<T, _>(arctan, a, b, cfg) {
        Ok(report) => {
            for record in &report.trace {
                println!("{}", format_bisection_record(record, 15));
            }
        }
        Err(e) => println!("ERROR: {e}"),
    }

    // one precision for the whole sweep, enough for the smallest epsilon
    let smallest = EPSILONS.iter().copied().fold(f64::INFINITY, f64::min);
    let sweep_precision = Precision::for_tolerance(smallest).max(precision);

    println!("\nBisection for epsilons {EPSILONS:?} ({sweep_precision}):");
    for eps in EPSILONS {
        let cfg = BisectionCfg::new()
            .with_tol(eps)
            .with_max_iter(10_000)
            .with_precision(sweep_precision);
        let predicted = predicted_iterations(a, b, eps)?;
        match bisection::<T, _>(arctan, a, b, cfg) {
            Ok(report) => println!(
                "eps = {eps:.0e} | predicted k >= {predicted:3} | achieved iterations = {:3} | root ~ {}",
                report.iterations,
                report.root.to_string_digits(30),
            ),
            Err(e) => println!("eps = {eps:.0e} | ERROR: {e}"),
        }
    }
    Ok(())
}


fn fixed_point_experiments<T: Real>(precision: Precision) -> Result<(), Box<dyn Error>> {
    println!("\n=== Fixed point iteration for g(x) = x - arctan(x) ===");
    let g = |x: &T| x.clone() - x.atan();

    for x0 in FIXED_POINT_STARTS {
        let report = fixed_point(g, x0, FixedPointCfg::new().with_precision(precision))?;
        println!("\nInitial x0 = {x0}:");
        for record in &report.trace {
            println!(" {}", format_sequence_record(record, 30));
        }
    }

    println!("\ng'(x) = 1 - 1/(1 + x^2) = x^2/(1 + x^2).");
    println!("Near 0, g' ~ 0 and g contracts; for large |x|, g' -> 1 and contraction is lost.");
    Ok(())
}


fn newton_experiments<T: Real>(precision: Precision) -> Result<(), Box<dyn Error>> {
    println!("\n=== Newton's method for f(x) = arctan(x) ===");
    let dfunc = |x: &T| {
        let one = T::from_f64(1.0, precision);
        one.clone() / (one + x.clone() * x.clone())
    };

    for x0 in NEWTON_STARTS {
        let cfg = NewtonCfg::new().with_tol(OPEN_TOL).with_precision(precision);
        let report = newton::<T, _, _>(arctan, dfunc, x0, cfg)?;
        println!("\nInitial x0 = {x0}:");
        print_iterates(&report.trace);
        if let Some(last) = report.trace.last() {
            println!(
                " -> Stopped at k={} ({:?}), approx root = {}, f(root) = {}",
                last.k,
                report.termination_reason,
                last.x.to_string_digits(30),
                last.fx.to_string_digits(30),
            );
        }
    }
    Ok(())
}


fn secant_experiments<T: Real>(precision: Precision) -> Result<(), Box<dyn Error>> {
    println!("\n=== Secant method for f(x) = arctan(x) ===");

    for (x0, x1) in SECANT_PAIRS {
        let cfg = SecantCfg::new().with_tol(OPEN_TOL).with_precision(precision);
        let report = secant::<T, _>(arctan, x0, x1, cfg)?;
        println!("\nInitial pair (x0, x1) = ({x0}, {x1}):");
        print_iterates(&report.trace);
        if let Some(last) = report.trace.last() {
            println!(
                " -> Stopped at k={} ({:?}), approx = {}, f(approx) = {}",
                last.k,
                report.termination_reason,
                last.x.to_string_digits(30),
                last.fx.to_string_digits(30),
            );
        }
    }
    Ok(())
}


fn run<T: Real>(backend: &str, precision: Precision) -> Result<(), Box<dyn Error>> {
    println!("##### backend: {backend} ({precision}) #####\n");
    bisection_experiments::<T>(precision)?;
    fixed_point_experiments::<T>(precision)?;
    newton_experiments::<T>(precision)?;
    secant_experiments::<T>(precision)?;
    Ok(())
}


fn main() -> Result<(), Box<dyn Error>> {
    numexp::logging::init_tracing("warn")?;

    run::<f64>("f64", Precision::digits(15))?;

    #[cfg(feature = "rug")]
    {
        println!();
        run::<rug::Float>("rug::Float", Precision::default())?;
    }

    Ok(())
}
