//! Shared configuration for the stationary iterative solvers.
//!
//! [`CommonCfg`] fields
//! ├ `sweeps`    : number of sweeps (default [`DEFAULT_SWEEPS`]); exact in fixed-count mode
//! ├ `tol`       : optional max-norm change between sweeps that stops early
//! └ `precision` : optional working precision for lifting the guess
//!
//! Without `tol` the solvers run exactly `sweeps` sweeps and never test
//! convergence.

use crate::real::Precision;
use super::errors::LinearSystemError;

pub const DEFAULT_SWEEPS: usize = 10;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    sweeps:    usize,
    tol:       Option<f64>,
    precision: Option<Precision>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            sweeps    : DEFAULT_SWEEPS,
            tol       : None,
            precision : None,
        }
    }

    // getters
    pub fn sweeps(&self) -> usize { self.sweeps }
    pub fn tol(&self)    -> Option<f64> { self.tol }
    pub fn precision(&self) -> Precision {
        let base = self.precision.unwrap_or_default();
        match self.tol {
            Some(tol) => base.max(Precision::for_tolerance(tol)),
            None      => base,
        }
    }

    // setters (internal)
    pub(crate) fn with_sweeps    (&mut self, v: usize)     { self.sweeps    = v; }
    pub(crate) fn with_tol       (&mut self, v: f64)       { self.tol       = Some(v); }
    pub(crate) fn with_precision (&mut self, v: Precision) { self.precision = Some(v); }

    pub fn validate(&self) -> Result<(), LinearSystemError> {
        if self.sweeps == 0 {
            return Err(LinearSystemError::InvalidSweeps { got: 0 });
        }
        if let Some(tol) = self.tol {
            if !(tol.is_finite() && tol > 0.0) {
                return Err(LinearSystemError::InvalidTolerance { got: tol });
            }
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
            pub fn with_sweeps(mut self, v: usize) -> Self {
                self.common.with_sweeps(v);
                self
            }
            #[must_use]
            pub fn with_tol(mut self, v: f64) -> Self {
                self.common.with_tol(v);
                self
            }
            #[must_use]
            pub fn with_precision(mut self, v: $crate::real::Precision) -> Self {
                self.common.with_precision(v);
                self
            }

            #[inline] #[must_use] pub fn sweeps(&self) -> usize { self.common.sweeps() }
            #[inline] #[must_use] pub fn tol(&self) -> Option<f64> { self.common.tol() }
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
