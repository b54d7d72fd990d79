//! Defines the [`RootFindingReport`] struct returned by the root-finding
//! algorithms, plus the per-iteration records stored in its trace.

use crate::trace::Trace;


/// Reasons a root-finding algorithm may terminate.
///
/// ├ [`TerminationReason::ToleranceReached`] : a stopping test was met
/// ├ [`TerminationReason::IterationLimit`]   : cap exhausted
/// ├ [`TerminationReason::ZeroDerivative`]   : Newton stall, `f'(x) == 0`
/// ├ [`TerminationReason::ZeroDenominator`]  : secant stall, `f(x1) == f(x0)`
/// └ [`TerminationReason::NonFiniteIterate`] : the next iterate or its value overflowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
    ZeroDerivative,
    ZeroDenominator,
    NonFiniteIterate,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - open methods, |f(x)| < tol
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - bisection, (b - a) / 2 <= tol
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - open methods, |x_n - x_{n - 1}| < tol
/// - [`ToleranceSatisfied::ExactZero`]
///     - bisection, f evaluated to exactly zero
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - all methods, usually with any other [`TerminationReason`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    StepSizeReached,
    ExactZero,
    ToleranceNotReached,
}


/// One bisection step: the bracket before the update and its midpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct BisectionRecord<T> {
    pub k     : usize,
    pub a     : T,
    pub b     : T,
    pub mid   : T,
    pub f_mid : T,
}

/// One iterate of an open method (Newton, secant).
#[derive(Debug, Clone, PartialEq)]
pub struct IterateRecord<T> {
    pub k  : usize,
    pub x  : T,
    pub fx : T,
}

/// One element `x_k` of a fixed-point sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRecord<T> {
    pub k : usize,
    pub x : T,
}


/// Final report returned by bisection, Newton and secant.
///
/// [`RootFindingReport`]
/// - `root`                : best root estimate
/// - `f_root`              : function value at `root`
/// - `iterations`          : iterations performed
/// - `evaluations`         : total function (and derivative) evaluations
/// - `termination_reason`  : why the solver stopped  ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
/// - `trace`               : every recorded step, in order
#[derive(Debug, Clone, PartialEq)]
pub struct RootFindingReport<T, R> {
    pub root                : T,
    pub f_root              : T,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub algorithm_name      : &'static str,
    pub trace               : Trace<R>,
}

impl<T, R> RootFindingReport<T, R> {
    /// `true` when a stopping tolerance (or an exact zero) ended the run.
    pub fn converged(&self) -> bool {
        self.termination_reason == TerminationReason::ToleranceReached
    }
}


/// Report returned by fixed-point iteration.
///
/// - `fixed_point`        : last element of the sequence
/// - `iterations`         : number of applications of `g`
/// - `termination_reason` : [`TerminationReason::IterationLimit`] in fixed-count
///                          mode, [`TerminationReason::ToleranceReached`] if the
///                          optional step tolerance stopped it early
/// - `trace`              : `x_0, x_1, ..., x_n`
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPointReport<T> {
    pub fixed_point        : T,
    pub iterations         : usize,
    pub termination_reason : TerminationReason,
    pub algorithm_name     : &'static str,
    pub trace              : Trace<SequenceRecord<T>>,
}
