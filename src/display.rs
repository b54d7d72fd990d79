//! Human-readable formatting of trace records.
//!
//! The algorithms never print; the experiment programs format the returned
//! traces with these helpers.
//!
//! ├ significant digits : [`Real::to_string_digits`] for scalars
//! └ fixed decimals     : [`round_decimals`] for solution vectors

use crate::linear::report::SweepRecord;
use crate::real::Real;
use crate::root_finding::report::{BisectionRecord, IterateRecord, SequenceRecord};


/// Rounds half away from zero to `decimals` places.
#[must_use]
pub fn round_decimals(value: f64, decimals: u32) -> f64 {
    let scale  = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    // beyond 2^53 there are no fractional digits left to round
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / scale;
    // keep -0.0 out of printed vectors
    if rounded == 0.0 { 0.0 } else { rounded }
}


/// `[x0, x1, ...]` with every entry rounded to `decimals` places.
#[must_use]
pub fn format_vector<T: Real>(x: &[T], decimals: u32) -> String {
    let rounded: Vec<f64> = x.iter().map(|v| round_decimals(v.to_f64(), decimals)).collect();
    format!("{rounded:?}")
}


/// `k= 3: interval = [a, b], mid = m, f(mid) = fm`
#[must_use]
pub fn format_bisection_record<T: Real>(record: &BisectionRecord<T>, digits: usize) -> String {
    format!(
        "k={:2}: interval = [{}, {}], mid = {}, f(mid) = {}",
        record.k,
        record.a.to_string_digits(digits),
        record.b.to_string_digits(digits),
        record.mid.to_string_digits(digits),
        record.f_mid.to_string_digits(digits),
    )
}


/// `k= 3: x = ..., f(x) = ...`
#[must_use]
pub fn format_iterate_record<T: Real>(record: &IterateRecord<T>, digits: usize) -> String {
    format!(
        "k={:2}: x = {}, f(x) = {}",
        record.k,
        record.x.to_string_digits(digits),
        record.fx.to_string_digits(digits),
    )
}


/// `k= 3 -> x_3 = ...`
#[must_use]
pub fn format_sequence_record<T: Real>(record: &SequenceRecord<T>, digits: usize) -> String {
    format!("k={:2} -> x_{} = {}", record.k, record.k, record.x.to_string_digits(digits))
}


/// `Iteration 3: x = [...]`
#[must_use]
pub fn format_sweep_record<T: Real>(record: &SweepRecord<T>, decimals: u32) -> String {
    format!("Iteration {}: x = {}", record.k, format_vector(&record.x, decimals))
}
