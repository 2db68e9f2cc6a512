//! Mathematical functions with unit constraints.
//!
//! Transcendental functions only make sense on pure numbers, so they are defined on `Quantity<Unitless, T>`.
//! Trigonometric functions take [`Radian`] and inverse trigonometric functions return it.
//!
//! ```rust
//! use kul_core::Quantity;
//! use kul_core::dimensionless::Radians;
//!
//! let half = Radians::new(core::f64::consts::FRAC_PI_6).sin();
//! assert!((half.value() - 0.5).abs() < 1e-12);
//!
//! let angle = half.asin();
//! assert!((angle.value() - core::f64::consts::FRAC_PI_6).abs() < 1e-12);
//! ```
//!
//! ```compile_fail
//! use kul_core::length::Meters;
//!
//! let _ = Meters::new(1.0).exp();
//! ```

use crate::quantity::Quantity;
use crate::units::dimensionless::Radian;
use crate::unit::Unitless;
use num_traits::Float;

/// Floating-point types with the special functions `num_traits::Float` lacks.
pub trait Real: Float {
    /// Error function.
    fn erf(self) -> Self;
    /// Complementary error function.
    fn erfc(self) -> Self;
    /// Gamma function.
    fn gamma(self) -> Self;
    /// Natural logarithm of the absolute value of the gamma function.
    fn ln_gamma(self) -> Self;
}

impl Real for f64 {
    fn erf(self) -> Self {
        libm::erf(self)
    }
    fn erfc(self) -> Self {
        libm::erfc(self)
    }
    fn gamma(self) -> Self {
        libm::tgamma(self)
    }
    fn ln_gamma(self) -> Self {
        libm::lgamma(self)
    }
}

impl Real for f32 {
    fn erf(self) -> Self {
        libm::erff(self)
    }
    fn erfc(self) -> Self {
        libm::erfcf(self)
    }
    fn gamma(self) -> Self {
        libm::tgammaf(self)
    }
    fn ln_gamma(self) -> Self {
        libm::lgammaf(self)
    }
}

macro_rules! unary {
    ($($(#[$meta:meta])* $name:ident -> $out:ty;)+) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(self) -> Quantity<$out, T> {
                Quantity::new(self.value().$name())
            }
        )+
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimensionless
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Float> Quantity<Unitless, T> {
    unary! {
        /// `e^x`.
        exp -> Unitless;
        /// `2^x`.
        exp2 -> Unitless;
        /// Natural logarithm.
        ln -> Unitless;
        /// Base-10 logarithm.
        log10 -> Unitless;
        /// Base-2 logarithm.
        log2 -> Unitless;
        /// Arcsine, in radians.
        asin -> Radian;
        /// Arccosine, in radians.
        acos -> Radian;
        /// Arctangent, in radians.
        atan -> Radian;
        /// Inverse hyperbolic sine.
        asinh -> Radian;
        /// Inverse hyperbolic cosine.
        acosh -> Radian;
        /// Inverse hyperbolic tangent.
        atanh -> Radian;
    }

    /// `self^exponent` with a dimensionless exponent.
    #[inline]
    pub fn powf(self, exponent: Self) -> Self {
        Self::new(self.value().powf(exponent.value()))
    }

    /// Magnitude of `self` with the sign of `sign`.
    #[inline]
    pub fn copysign(self, sign: Self) -> Self {
        Self::new(self.value().copysign(sign.value()))
    }

    /// Four-quadrant arctangent of `self / other`.
    #[inline]
    pub fn atan2(self, other: Self) -> Quantity<Radian, T> {
        Quantity::new(self.value().atan2(other.value()))
    }
}

impl<T: Real> Quantity<Unitless, T> {
    unary! {
        /// Error function.
        erf -> Unitless;
        /// Complementary error function.
        erfc -> Unitless;
        /// Gamma function.
        gamma -> Unitless;
        /// Log-gamma function.
        ln_gamma -> Unitless;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Angles
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Float> Quantity<Radian, T> {
    unary! {
        /// Sine.
        sin -> Unitless;
        /// Cosine.
        cos -> Unitless;
        /// Tangent.
        tan -> Unitless;
        /// Hyperbolic sine.
        sinh -> Unitless;
        /// Hyperbolic cosine.
        cosh -> Unitless;
        /// Hyperbolic tangent.
        tanh -> Unitless;
    }
}
