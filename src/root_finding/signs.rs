//! Sign utilities for root-finding algorithms.
//! - `opposite_sign` : `true` if values have opposite sign
//! - `same_sign`     : `true` if values share the same sign

use crate::real::Real;

/// Returns `true` if `x` and `y` have opposite signs.
#[inline]
pub(crate) fn opposite_sign<T: Real>(x: &T, y: &T) -> bool {
    x.is_sign_negative() != y.is_sign_negative()
}


/// Returns `true` if `x` and `y` have the same sign.
#[inline]
pub(crate) fn same_sign<T: Real>(x: &T, y: &T) -> bool {
    x.is_sign_negative() == y.is_sign_negative()
}
