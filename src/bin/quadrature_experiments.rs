//! Quadrature experiments.
//!
//! ├ four Newton-Cotes type rules on `cos(pi x / 4) / sin^2(pi x / 4)` over `[1, 2]`
//! ├ composite Simpson on the same integral
//! └ 3-point Gauss-Legendre on the monomials `x^0 .. x^5` over `[-1, 1]`

use std::error::Error;
use std::f64::consts::PI;

use numexp::quadrature::{compare_rules, integrate, integrate_composite, Rule};
use numexp::Precision;

const INTERVAL: (f64, f64) = (1.0, 2.0);
const PANELS: [usize; 3] = [2, 4, 8];


fn newton_cotes(precision: Precision) -> Result<(), Box<dyn Error>> {
    let quarter_pi = PI / 4.0;
    let f = |x: &f64| {
        let t = quarter_pi * x;
        t.cos() / t.sin().powi(2)
    };
    let exact = 4.0 * (2.0_f64.sqrt() - 1.0) / PI;
    let (a, b) = INTERVAL;

    println!("=== cos(pi x / 4) / sin^2(pi x / 4) on [{a}, {b}] ===");
    println!("Exact value:\n{exact}\n");
    for estimate in compare_rules(&Rule::NEWTON_COTES, f, a, b, &exact, precision)? {
        println!("{}:", estimate.rule);
        println!("{}", estimate.value);
        println!("Error: {}\n", estimate.abs_error);
    }

    for panels in PANELS {
        let value: f64 = integrate_composite(Rule::Simpson, f, a, b, panels, precision)?;
        println!("composite simpson, {panels} panels: {value} | error {:.1e}", (value - exact).abs());
    }
    Ok(())
}

fn gauss_monomials(precision: Precision) -> Result<(), Box<dyn Error>> {
    let rule = Rule::GaussLegendre3;
    let (nodes, weights): (Vec<f64>, Vec<f64>) = rule.nodes_and_weights::<f64>(-1.0, 1.0, precision).into_iter().unzip();
    println!("\n=== 3-point Gauss-Legendre on [-1, 1] ===");
    println!("Nodes: {nodes:?}");
    println!("Weights: {weights:?}");

    for k in 0..=5_i32 {
        let exact = if k % 2 == 0 { 2.0 / f64::from(k + 1) } else { 0.0 };
        let approx: f64 = integrate(rule, |x: &f64| x.powi(k), -1.0, 1.0, precision)?;
        println!("\nf(x) = x^{k}:");
        println!("  Exact Integral: {exact}");
        println!("  Approx Integral: {approx}");
        println!("  Difference: {:.1e}", (exact - approx).abs());
    }
    println!("\nThe rule is exact for monomials up to degree {}.", rule.degree_of_exactness());
    Ok(())
}


fn main() -> Result<(), Box<dyn Error>> {
    numexp::logging::init_tracing("warn")?;

    let precision = Precision::default();
    newton_cotes(precision)?;
    gauss_monomials(precision)?;
    Ok(())
}
