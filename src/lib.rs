//! Classical numerical-analysis procedures that return their full iteration
//! traces.
//!
//! ├ [`root_finding`] : bisection, fixed point, Newton, secant
//! ├ [`linear`]       : Jacobi and Gauss-Seidel on dense systems
//! ├ [`quadrature`]   : Newton-Cotes type rules and 3-point Gauss-Legendre
//! ├ [`display`]      : formatting of trace records
//! └ [`logging`]      : `tracing` subscriber for the experiment programs
//!
//! Every procedure is generic over [`Real`], so the same code runs on `f64`
//! and, with the `rug` feature, on arbitrary-precision `rug::Float`.

pub mod display;
pub mod linear;
pub mod logging;
pub mod quadrature;
pub mod real;
pub mod root_finding;
pub mod trace;

pub use real::{Precision, Real};
pub use trace::Trace;
