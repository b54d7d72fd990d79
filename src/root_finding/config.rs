//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the default tolerance, optional iteration cap
//! and optional working precision, used by all root-finding configs.
//!
//! [`CommonCfg`] fields
//! ├ `tol`       : stopping tolerance
//! ├ `max_iter`  : iteration cap (optional, algorithm default otherwise)
//! └ `precision` : working precision (optional, see [`CommonCfg::precision`])
//!
//! Setters never fail; [`CommonCfg::validate`] runs when an algorithm starts.

use crate::real::Precision;
use super::errors::RootFindingError;


pub const DEFAULT_TOL: f64 = 1e-10;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    tol:       f64,
    max_iter:  Option<usize>,
    precision: Option<Precision>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            tol       : DEFAULT_TOL,
            max_iter  : None,
            precision : None,
        }
    }

    // getters
    pub fn tol(&self)      -> f64 { self.tol }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    /// Working precision: the explicit one (or [`Precision::default`]),
    /// raised to [`Precision::for_tolerance`] when the tolerance needs more.
    pub fn precision(&self) -> Precision {
        self.precision
            .unwrap_or_default()
            .max(Precision::for_tolerance(self.tol))
    }

    // setters (internal)
    pub(crate) fn with_tol       (&mut self, v: f64)       { self.tol       = v; }
    pub(crate) fn with_max_iter  (&mut self, v: usize)     { self.max_iter  = Some(v); }
    pub(crate) fn with_precision (&mut self, v: Precision) { self.precision = Some(v); }

    /// Checks `tol` (finite, > 0) and `max_iter` (>= 1 when set).
    pub fn validate(&self) -> Result<(), RootFindingError> {
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(RootFindingError::InvalidTolerance { got: self.tol });
        }
        if let Some(0) = self.max_iter {
            return Err(RootFindingError::InvalidMaxIter { got: 0 });
        }
        Ok(())
    }
}

impl Default for CommonCfg {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            #[must_use]
            pub fn with_tol(mut self, v: f64) -> Self {
                self.common.with_tol(v);
                self
            }
            #[must_use]
            pub fn with_max_iter(mut self, v: usize) -> Self {
                self.common.with_max_iter(v);
                self
            }
            #[must_use]
            pub fn with_precision(mut self, v: $crate::real::Precision) -> Self {
                self.common.with_precision(v);
                self
            }

            #[inline] #[must_use] pub fn tol(&self) -> f64 { self.common.tol() }
            #[inline] #[must_use] pub fn max_iter(&self) -> Option<usize> { self.common.max_iter() }
            #[inline] #[must_use]
            pub fn precision(&self) -> $crate::real::Precision { self.common.precision() }
        }

        impl Default for $cfg {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
pub(crate) use impl_common_cfg;
