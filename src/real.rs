//! Real-number abstraction shared by every algorithm.
//!
//! [`Real`] is the numeric interface the solvers are generic over.
//! ├ `f32`, `f64`  : machine floats via [`num_traits::Float`]
//! └ `rug::Float`  : arbitrary precision (feature `rug`)
//!
//! [`Precision`] is the working precision handed to each procedure through its
//! configuration. Machine floats ignore it; arbitrary-precision values are
//! created with it.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{AsPrimitive, Float};


/// Working precision in decimal digits.
///
/// ├ [`Precision::default`]       : 80 digits
/// ├ [`Precision::for_tolerance`] : enough digits to resolve a tolerance
/// └ [`Precision::bits`]          : binary precision handed to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision {
    digits: u32,
}

impl Precision {
    pub const DEFAULT_DIGITS: u32 = 80;
    pub const MIN_DIGITS:     u32 = 20;
    pub const GUARD_DIGITS:   u32 = 10;

    #[must_use]
    pub const fn digits(digits: u32) -> Self {
        Self { digits }
    }

    #[inline] #[must_use] pub const fn decimal_digits(self) -> u32 { self.digits }

    /// Binary precision: `round((digits + 1) * log2(10))`, at least 1.
    #[must_use]
    pub fn bits(self) -> u32 {
        let bits = ((f64::from(self.digits) + 1.0) * std::f64::consts::LOG2_10).round();
        (bits as u32).max(1)
    }

    /// Digits needed to resolve `tol`: `max(20, ceil(-log10(tol)) + 10)`.
    ///
    /// Non-positive or non-finite tolerances fall back to [`Precision::MIN_DIGITS`].
    #[must_use]
    pub fn for_tolerance(tol: f64) -> Self {
        if !(tol.is_finite() && tol > 0.0) {
            return Self::digits(Self::MIN_DIGITS);
        }
        let needed = (-tol.log10()).ceil().max(0.0) as u32 + Self::GUARD_DIGITS;
        Self::digits(needed.max(Self::MIN_DIGITS))
    }

    /// The larger of the two precisions.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if other.digits > self.digits { other } else { self }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::digits(Self::DEFAULT_DIGITS)
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} digits", self.digits)
    }
}


/// Ordered field with the elementary functions the experiments need.
///
/// Operations take `&self` so that non-`Copy` representations work; generic
/// code clones operands where arithmetic consumes them.
pub trait Real:
    Clone
    + Debug
    + Display
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Lift an `f64` at the given working precision.
    fn from_f64(value: f64, precision: Precision) -> Self;

    /// Nearest `f64`.
    fn to_f64(&self) -> f64;

    fn abs(&self) -> Self;
    fn is_zero(&self) -> bool;
    fn is_finite(&self) -> bool;
    fn is_sign_negative(&self) -> bool;

    fn sqrt(&self) -> Self;
    fn atan(&self) -> Self;
    fn sin(&self) -> Self;
    fn cos(&self) -> Self;
    fn powi(&self, n: i32) -> Self;

    /// Scientific notation with `digits` significant digits.
    fn to_string_digits(&self, digits: usize) -> String;
}


macro_rules! impl_real_for_float {
    ($($t:ty),*) => {$(
        impl Real for $t {
            #[inline]
            fn from_f64(value: f64, _precision: Precision) -> Self { value.as_() }
            #[inline]
            fn to_f64(&self) -> f64 { (*self).as_() }

            #[inline] fn abs(&self) -> Self { Float::abs(*self) }
            #[inline] fn is_zero(&self) -> bool { *self == 0.0 }
            #[inline] fn is_finite(&self) -> bool { Float::is_finite(*self) }
            #[inline] fn is_sign_negative(&self) -> bool { Float::is_sign_negative(*self) }

            #[inline] fn sqrt(&self) -> Self { Float::sqrt(*self) }
            #[inline] fn atan(&self) -> Self { Float::atan(*self) }
            #[inline] fn sin(&self)  -> Self { Float::sin(*self) }
            #[inline] fn cos(&self)  -> Self { Float::cos(*self) }
            #[inline] fn powi(&self, n: i32) -> Self { Float::powi(*self, n) }

            fn to_string_digits(&self, digits: usize) -> String {
                format!("{:.*e}", digits.saturating_sub(1), self)
            }
        }
    )*};
}
impl_real_for_float!(f32, f64);


#[cfg(feature = "rug")]
mod arbitrary {
    use super::{Precision, Real};
    use rug::ops::Pow;
    use rug::Float;

    impl Real for Float {
        fn from_f64(value: f64, precision: Precision) -> Self {
            Float::with_val(precision.bits(), value)
        }
        fn to_f64(&self) -> f64 { Float::to_f64(self) }

        fn abs(&self) -> Self { Float::abs(self.clone()) }
        fn is_zero(&self) -> bool { Float::is_zero(self) }
        fn is_finite(&self) -> bool { Float::is_finite(self) }
        fn is_sign_negative(&self) -> bool { Float::is_sign_negative(self) }

        fn sqrt(&self) -> Self { Float::sqrt(self.clone()) }
        fn atan(&self) -> Self { Float::atan(self.clone()) }
        fn sin(&self)  -> Self { Float::sin(self.clone()) }
        fn cos(&self)  -> Self { Float::cos(self.clone()) }
        fn powi(&self, n: i32) -> Self { Pow::pow(self.clone(), n) }

        fn to_string_digits(&self, digits: usize) -> String {
            self.to_string_radix(10, Some(digits.max(1)))
        }
    }
}
