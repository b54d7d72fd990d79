//! Dense square linear system `A x = b`.
//!
//! The shape is validated on construction. Diagonal dominance is not
//! required; [`DenseSystem::diagonal_dominance`] only reports it.

use crate::real::{Precision, Real};
use super::errors::LinearSystemError;


/// Row-wise diagonal dominance of a matrix.
///
/// ├ `Strict`      : `|a_ii| >  sum_{j != i} |a_ij|` for every row
/// ├ `Weak`        : `|a_ii| >= sum_{j != i} |a_ij|` for every row, not strict
/// └ `NotDominant` : some row violates the weak inequality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagonalDominance {
    Strict,
    Weak,
    NotDominant,
}


#[derive(Debug, Clone, PartialEq)]
pub struct DenseSystem<T> {
    n      : usize,
    matrix : Vec<T>,
    rhs    : Vec<T>,
}

impl<T: Real> DenseSystem<T> {
    /// Builds a system from rows of `A` and the right-hand side `b`.
    ///
    /// # Errors
    /// ├ [`LinearSystemError::EmptySystem`] : no rows
    /// ├ [`LinearSystemError::NonSquare`]   : a row's length differs from the row count
    /// └ [`LinearSystemError::RhsLength`]   : `b` has the wrong length
    pub fn new(rows: Vec<Vec<T>>, rhs: Vec<T>) -> Result<Self, LinearSystemError> {
        let n = rows.len();
        if n == 0 {
            return Err(LinearSystemError::EmptySystem);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(LinearSystemError::NonSquare { row, len: r.len(), n });
        }
        if rhs.len() != n {
            return Err(LinearSystemError::RhsLength { expected: n, got: rhs.len() });
        }

        Ok(Self { n, matrix: rows.into_iter().flatten().collect(), rhs })
    }

    /// Builds a system from `f64` data, lifted at `precision`.
    pub fn from_f64_rows<R: AsRef<[f64]>>(
        rows: &[R],
        rhs: &[f64],
        precision: Precision,
    ) -> Result<Self, LinearSystemError> {
        let lift = |v: &f64| T::from_f64(*v, precision);
        let rows: Vec<Vec<T>> = rows
            .iter()
            .map(|r| r.as_ref().iter().map(lift).collect::<Vec<T>>())
            .collect();
        let rhs: Vec<T> = rhs.iter().map(lift).collect();
        Self::new(rows, rhs)
    }

    #[inline] #[must_use] pub fn dimension(&self) -> usize { self.n }
    #[inline] #[must_use] pub fn coefficient(&self, i: usize, j: usize) -> &T { &self.matrix[i * self.n + j] }
    #[inline] #[must_use] pub fn row(&self, i: usize) -> &[T] { &self.matrix[i * self.n..(i + 1) * self.n] }
    #[inline] #[must_use] pub fn rhs(&self) -> &[T] { &self.rhs }

    #[must_use]
    pub fn diagonal_dominance(&self) -> DiagonalDominance {
        let mut strict = true;
        for i in 0..self.n {
            let diag = self.coefficient(i, i).abs();
            let off = self.row(i)
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, a)| a.abs())
                .reduce(|acc, a| acc + a);

            match off {
                None => {}
                Some(off) if diag > off => {}
                Some(off) if diag >= off => strict = false,
                Some(_) => return DiagonalDominance::NotDominant,
            }
        }

        if strict { DiagonalDominance::Strict } else { DiagonalDominance::Weak }
    }

    /// Max-norm of `b - A x`.
    ///
    /// # Errors
    /// └ [`LinearSystemError::GuessLength`] if `x` has the wrong length
    pub fn residual(&self, x: &[T]) -> Result<T, LinearSystemError> {
        self.check_len(x.len())?;

        let norm = (0..self.n)
            .map(|i| {
                let ax = self.row(i)
                    .iter()
                    .zip(x)
                    .map(|(a, xj)| a.clone() * xj.clone())
                    .reduce(|acc, v| acc + v);
                match ax {
                    Some(ax) => (self.rhs[i].clone() - ax).abs(),
                    None     => self.rhs[i].abs(),
                }
            })
            .reduce(larger_or_non_finite);

        Ok(norm.unwrap_or_else(|| self.rhs[0].abs()))
    }

    pub(crate) fn check_len(&self, got: usize) -> Result<(), LinearSystemError> {
        if got != self.n {
            return Err(LinearSystemError::GuessLength { expected: self.n, got });
        }
        Ok(())
    }
}


/// Max-norm step: the first non-finite entry wins, so NaN never drops out.
fn larger_or_non_finite<T: Real>(acc: T, d: T) -> T {
    if !acc.is_finite() || (d.is_finite() && d <= acc) { acc } else { d }
}


/// Max-norm of `a - b`; `None` for empty slices. Non-finite if any entry is.
pub(crate) fn max_abs_diff<T: Real>(a: &[T], b: &[T]) -> Option<T> {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x.clone() - y.clone()).abs())
        .reduce(larger_or_non_finite)
}
