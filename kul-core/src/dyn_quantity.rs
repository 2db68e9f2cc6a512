//! Quantities whose unit is only known at run time.
//!
//! [`DynQuantity`] pairs a value with an owned [`DynUnit`]. It offers the same operations as
//! [`Quantity`](crate::Quantity), but every check the static type performs while compiling happens here on each call
//! and is reported as a [`UnitError`].
//!
//! ```rust
//! use kul_core::{DynQuantity, Unit};
//! use kul_core::length::Meter;
//! use kul_core::time::Second;
//!
//! let distance = DynQuantity::new(100.0, Meter::to_dynamic());
//! let time = DynQuantity::new(20.0, Second::to_dynamic());
//! let speed = &distance / &time;
//! assert_eq!(speed.to_string(), "5 m * s^-1");
//!
//! assert!(distance.checked_add(&time).is_err());
//! ```

use crate::conversion::Conversion;
use crate::dynamic::DynUnit;
use crate::error::{UnitError, UnitResult};
use crate::functions::Real;
use crate::quantity::Quantity;
use crate::unit::Unit;
use crate::units::dimensionless::Radian;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Div, Mul, Neg};
use num_traits::Float;

/// A numeric value with a runtime unit.
///
/// `PartialEq` and `PartialOrd` compare values only when the units are
/// [equivalent](DynUnit::is_equivalent); otherwise the quantities are unequal and unordered.
#[derive(Clone, Debug)]
pub struct DynQuantity<T = f64> {
    value: T,
    unit: DynUnit,
}

impl<T> DynQuantity<T> {
    /// Pairs `value` with `unit`.
    pub fn new(value: T, unit: impl Into<DynUnit>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// A dimensionless quantity.
    pub fn unitless(value: T) -> Self {
        Self::new(value, DynUnit::UNITLESS)
    }

    /// The raw numeric value.
    pub fn value(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    /// The unit.
    pub fn unit(&self) -> &DynUnit {
        &self.unit
    }

    /// Splits into value and unit.
    pub fn into_parts(self) -> (T, DynUnit) {
        (self.value, self.unit)
    }

    fn expect_same_unit(&self, other: &Self) -> UnitResult<()> {
        if self.unit.is_equivalent(&other.unit) {
            Ok(())
        } else {
            log::debug!("unit mismatch: {} vs {}", self.unit, other.unit);
            Err(UnitError::UnitMismatch {
                lhs: self.unit.name(),
                rhs: other.unit.name(),
            })
        }
    }
}

impl<T: Float> DynQuantity<T> {
    /// Converts to `unit`.
    ///
    /// # Errors
    ///
    /// See [`Conversion::between`].
    pub fn to(&self, unit: &DynUnit) -> UnitResult<Self> {
        let conversion = Conversion::between(&self.unit, unit)?;
        Ok(Self::new(conversion.apply(self.value), unit.clone()))
    }

    /// Converts into a statically typed quantity.
    ///
    /// ```rust
    /// use kul_core::{DynQuantity, Unit};
    /// use kul_core::temperature::{Celsius, Kelvin};
    ///
    /// let reading = DynQuantity::new(0.0_f64, Celsius::to_dynamic());
    /// let kelvin = reading.to_static::<Kelvin>()?;
    /// assert!((kelvin.value() - 273.15).abs() < 1e-12);
    /// # Ok::<(), kul_core::UnitError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// See [`Conversion::between`].
    pub fn to_static<U: Unit>(&self) -> UnitResult<Quantity<U, T>> {
        let conversion = Conversion::between(&self.unit, &U::to_dynamic())?;
        Ok(Quantity::new(conversion.apply(self.value)))
    }

    /// `self + rhs`, in the unit of `self`.
    ///
    /// # Errors
    ///
    /// - [`UnitError::UnitMismatch`] if the units are not equivalent.
    /// - [`UnitError::AbsoluteAddition`] if the unit is absolute.
    pub fn checked_add(&self, rhs: &Self) -> UnitResult<Self> {
        self.expect_same_unit(rhs)?;
        if self.unit.is_absolute() {
            return Err(UnitError::AbsoluteAddition {
                unit: self.unit.name(),
            });
        }
        Ok(Self::new(self.value + rhs.value, self.unit.clone()))
    }

    /// `self - rhs`. The difference of two absolute quantities is expressed in the relative form of their unit.
    ///
    /// ```rust
    /// use kul_core::{DynQuantity, Unit};
    /// use kul_core::temperature::Kelvin;
    ///
    /// let a = DynQuantity::new(300.0, Kelvin::to_dynamic());
    /// let b = DynQuantity::new(280.0, Kelvin::to_dynamic());
    /// let delta = a.checked_sub(&b)?;
    /// assert!(!delta.unit().is_absolute());
    /// # Ok::<(), kul_core::UnitError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`UnitError::UnitMismatch`] if the units are not equivalent.
    pub fn checked_sub(&self, rhs: &Self) -> UnitResult<Self> {
        self.expect_same_unit(rhs)?;
        Ok(Self::new(self.value - rhs.value, self.unit.relative()))
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.value.abs(), self.unit.clone())
    }

    /// The smaller of two quantities.
    ///
    /// # Errors
    ///
    /// [`UnitError::UnitMismatch`] if the units are not equivalent.
    pub fn min(&self, other: &Self) -> UnitResult<Self> {
        self.expect_same_unit(other)?;
        Ok(Self::new(self.value.min(other.value), self.unit.clone()))
    }

    /// The larger of two quantities.
    ///
    /// # Errors
    ///
    /// [`UnitError::UnitMismatch`] if the units are not equivalent.
    pub fn max(&self, other: &Self) -> UnitResult<Self> {
        self.expect_same_unit(other)?;
        Ok(Self::new(self.value.max(other.value), self.unit.clone()))
    }

    /// Square root.
    ///
    /// # Errors
    ///
    /// Fails when the unit has no square root; see [`DynUnit::root`].
    pub fn sqrt(&self) -> UnitResult<Self> {
        Ok(Self::new(self.value.sqrt(), self.unit.sqrt()?))
    }

    /// Cube root.
    ///
    /// # Errors
    ///
    /// Fails when the unit has no cube root; see [`DynUnit::root`].
    pub fn cbrt(&self) -> UnitResult<Self> {
        Ok(Self::new(self.value.cbrt(), self.unit.cbrt()?))
    }

    /// Integer power.
    ///
    /// # Panics
    ///
    /// Panics if a unit exponent leaves the `i32` range; see [`DynUnit::pow`].
    pub fn powi(&self, exponent: i32) -> Self {
        Self::new(self.value.powi(exponent), self.unit.pow(exponent))
    }

    /// `sqrt(self² + other²)`.
    ///
    /// # Errors
    ///
    /// [`UnitError::UnitMismatch`] if the units are not equivalent.
    pub fn hypot(&self, other: &Self) -> UnitResult<Self> {
        self.expect_same_unit(other)?;
        Ok(Self::new(self.value.hypot(other.value), self.unit.clone()))
    }

    /// `sqrt(self² + b² + c²)`.
    ///
    /// # Errors
    ///
    /// [`UnitError::UnitMismatch`] if the units are not all equivalent.
    pub fn hypot3(&self, b: &Self, c: &Self) -> UnitResult<Self> {
        self.expect_same_unit(b)?;
        self.expect_same_unit(c)?;
        Ok(Self::new(self.value.hypot(b.value).hypot(c.value), self.unit.clone()))
    }

    /// Fused `self * b + c`, in the unit of `c`.
    ///
    /// # Errors
    ///
    /// [`UnitError::UnitMismatch`] if `c` is not in a unit equivalent to `self * b`.
    pub fn fma(&self, b: &Self, c: &Self) -> UnitResult<Self> {
        let product = self.unit.multiply(&b.unit);
        if !product.is_equivalent(&c.unit) {
            return Err(UnitError::UnitMismatch {
                lhs: product.name(),
                rhs: c.unit.name(),
            });
        }
        Ok(Self::new(self.value.mul_add(b.value, c.value), c.unit.clone()))
    }

    fn dimensionless_value(&self) -> UnitResult<T> {
        if self.unit.is_equivalent(&DynUnit::UNITLESS) {
            Ok(self.value)
        } else {
            Err(UnitError::NotDimensionless {
                unit: self.unit.name(),
            })
        }
    }

    fn radian_value(&self) -> UnitResult<T> {
        if self.unit.is_equivalent(&Radian::to_dynamic()) {
            Ok(self.value)
        } else {
            Err(UnitError::NotAngular {
                unit: self.unit.name(),
            })
        }
    }

    /// `self^exponent`; both operands must be dimensionless.
    ///
    /// # Errors
    ///
    /// [`UnitError::NotDimensionless`] otherwise.
    pub fn powf(&self, exponent: &Self) -> UnitResult<Self> {
        let base = self.dimensionless_value()?;
        Ok(Self::unitless(base.powf(exponent.dimensionless_value()?)))
    }

    /// Magnitude of `self` with the sign of `sign`; both operands must be dimensionless.
    ///
    /// # Errors
    ///
    /// [`UnitError::NotDimensionless`] otherwise.
    pub fn copysign(&self, sign: &Self) -> UnitResult<Self> {
        let magnitude = self.dimensionless_value()?;
        Ok(Self::unitless(magnitude.copysign(sign.dimensionless_value()?)))
    }

    /// Four-quadrant arctangent of `self / other`, in radians; both operands must be dimensionless.
    ///
    /// # Errors
    ///
    /// [`UnitError::NotDimensionless`] otherwise.
    pub fn atan2(&self, other: &Self) -> UnitResult<Self> {
        let y = self.dimensionless_value()?;
        Ok(Self::new(y.atan2(other.dimensionless_value()?), Radian::to_dynamic()))
    }
}

macro_rules! checked_unary {
    ($check:ident, $out:expr; $($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> UnitResult<Self> {
                Ok(Self::new(self.$check()?.$name(), $out))
            }
        )+
    };
}

impl<T: Float> DynQuantity<T> {
    checked_unary! {
        dimensionless_value, DynUnit::UNITLESS;
        /// `e^x`.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotDimensionless`] if the unit is not equivalent to unitless.
        exp;
        /// `2^x`.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotDimensionless`] if the unit is not equivalent to unitless.
        exp2;
        /// Natural logarithm.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotDimensionless`] if the unit is not equivalent to unitless.
        ln;
        /// Base-10 logarithm.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotDimensionless`] if the unit is not equivalent to unitless.
        log10;
        /// Base-2 logarithm.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotDimensionless`] if the unit is not equivalent to unitless.
        log2;
    }

    checked_unary! {
        dimensionless_value, Radian::to_dynamic();
        /// Arcsine, in radians.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotDimensionless`] if the unit is not equivalent to unitless.
        asin;
        /// Arccosine, in radians.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotDimensionless`] if the unit is not equivalent to unitless.
        acos;
        /// Arctangent, in radians.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotDimensionless`] if the unit is not equivalent to unitless.
        atan;
        /// Inverse hyperbolic sine.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotDimensionless`] if the unit is not equivalent to unitless.
        asinh;
        /// Inverse hyperbolic cosine.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotDimensionless`] if the unit is not equivalent to unitless.
        acosh;
        /// Inverse hyperbolic tangent.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotDimensionless`] if the unit is not equivalent to unitless.
        atanh;
    }

    checked_unary! {
        radian_value, DynUnit::UNITLESS;
        /// Sine.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotAngular`] if the unit is not equivalent to radians.
        sin;
        /// Cosine.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotAngular`] if the unit is not equivalent to radians.
        cos;
        /// Tangent.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotAngular`] if the unit is not equivalent to radians.
        tan;
        /// Hyperbolic sine.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotAngular`] if the unit is not equivalent to radians.
        sinh;
        /// Hyperbolic cosine.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotAngular`] if the unit is not equivalent to radians.
        cosh;
        /// Hyperbolic tangent.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotAngular`] if the unit is not equivalent to radians.
        tanh;
    }
}

impl<T: Real> DynQuantity<T> {
    checked_unary! {
        dimensionless_value, DynUnit::UNITLESS;
        /// Error function.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotDimensionless`] if the unit is not equivalent to unitless.
        erf;
        /// Complementary error function.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotDimensionless`] if the unit is not equivalent to unitless.
        erfc;
        /// Gamma function.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotDimensionless`] if the unit is not equivalent to unitless.
        gamma;
        /// Log-gamma function.
        ///
        /// # Errors
        ///
        /// [`UnitError::NotDimensionless`] if the unit is not equivalent to unitless.
        ln_gamma;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────────────

impl<T1: Mul<T2>, T2> Mul<DynQuantity<T2>> for DynQuantity<T1> {
    type Output = DynQuantity<T1::Output>;
    fn mul(self, rhs: DynQuantity<T2>) -> Self::Output {
        DynQuantity::new(self.value * rhs.value, self.unit.multiply(&rhs.unit))
    }
}

impl<T: Copy + Mul> Mul for &DynQuantity<T> {
    type Output = DynQuantity<T::Output>;
    fn mul(self, rhs: Self) -> Self::Output {
        DynQuantity::new(self.value * rhs.value, self.unit.multiply(&rhs.unit))
    }
}

impl<T1: Div<T2>, T2> Div<DynQuantity<T2>> for DynQuantity<T1> {
    type Output = DynQuantity<T1::Output>;
    fn div(self, rhs: DynQuantity<T2>) -> Self::Output {
        DynQuantity::new(self.value / rhs.value, self.unit.divide(&rhs.unit))
    }
}

impl<T: Copy + Div> Div for &DynQuantity<T> {
    type Output = DynQuantity<T::Output>;
    fn div(self, rhs: Self) -> Self::Output {
        DynQuantity::new(self.value / rhs.value, self.unit.divide(&rhs.unit))
    }
}

impl<T: Neg> Neg for DynQuantity<T> {
    type Output = DynQuantity<T::Output>;
    fn neg(self) -> Self::Output {
        DynQuantity::new(-self.value, self.unit)
    }
}

macro_rules! impl_scalar_ops {
    ($($scalar:ty),+) => {
        $(
            impl Mul<$scalar> for DynQuantity<$scalar> {
                type Output = Self;
                fn mul(self, rhs: $scalar) -> Self {
                    Self::new(self.value * rhs, self.unit)
                }
            }

            impl Mul<DynQuantity<$scalar>> for $scalar {
                type Output = DynQuantity<$scalar>;
                fn mul(self, rhs: DynQuantity<$scalar>) -> Self::Output {
                    rhs * self
                }
            }

            impl Div<$scalar> for DynQuantity<$scalar> {
                type Output = Self;
                fn div(self, rhs: $scalar) -> Self {
                    Self::new(self.value / rhs, self.unit)
                }
            }

            impl Div<DynQuantity<$scalar>> for $scalar {
                type Output = DynQuantity<$scalar>;
                fn div(self, rhs: DynQuantity<$scalar>) -> Self::Output {
                    DynQuantity::new(self / rhs.value, DynUnit::UNITLESS.divide(&rhs.unit))
                }
            }
        )+
    };
}

impl_scalar_ops!(f32, f64);

impl<T: PartialEq> PartialEq for DynQuantity<T> {
    fn eq(&self, other: &Self) -> bool {
        self.unit.is_equivalent(&other.unit) && self.value == other.value
    }
}

impl<T: PartialOrd> PartialOrd for DynQuantity<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.unit.is_equivalent(&other.unit) {
            self.value.partial_cmp(&other.value)
        } else {
            None
        }
    }
}

impl<U: Unit, T> From<Quantity<U, T>> for DynQuantity<T> {
    fn from(quantity: Quantity<U, T>) -> Self {
        Self::new(quantity.into_value(), U::to_dynamic())
    }
}

impl<T: fmt::Display> fmt::Display for DynQuantity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        if self.unit.is_unitless() {
            Ok(())
        } else {
            write!(f, " {}", self.unit)
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for DynQuantity<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("DynQuantity", 2)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("unit", &self.unit)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::Kilo;
    use crate::units::derived::{Joule, Watt};
    use crate::units::dimensionless::Percent;
    use crate::units::length::{Foot, Meter};
    use crate::units::temperature::{Celsius, Fahrenheit, Kelvin};
    use crate::units::time::Second;
    use crate::{Per, Product, Relative, Unitless};
    use approx::assert_abs_diff_eq;
    use core::f64::consts::FRAC_PI_2;

    fn q(value: f64, unit: DynUnit) -> DynQuantity {
        DynQuantity::new(value, unit)
    }

    #[test]
    fn watts_times_seconds_are_joules() {
        let energy = q(1.0, Watt::to_dynamic()) * q(2.0, Second::to_dynamic());
        assert!(energy.unit().is_equivalent(&Joule::to_dynamic()));
        let joules = energy.to(&Joule::to_dynamic()).unwrap();
        assert_eq!(joules.value(), 2.0);
        assert_eq!(joules.unit(), &Joule::to_dynamic());
    }

    #[test]
    fn addition_requires_equivalent_relative_units() {
        let a = q(1.0, Meter::to_dynamic());
        let b = q(2.0, Meter::to_dynamic());
        assert_eq!(a.checked_add(&b).unwrap().value(), 3.0);
        assert_eq!(
            a.checked_add(&q(1.0, Second::to_dynamic())),
            Err(UnitError::UnitMismatch {
                lhs: "m".into(),
                rhs: "s".into()
            })
        );
        let k = q(1.0, Kelvin::to_dynamic());
        assert_eq!(
            k.checked_add(&k),
            Err(UnitError::AbsoluteAddition { unit: "K".into() })
        );
    }

    #[test]
    fn absolute_difference_is_relative() {
        let delta = q(300.0, Kelvin::to_dynamic())
            .checked_sub(&q(273.15, Kelvin::to_dynamic()))
            .unwrap();
        assert_eq!(delta.unit(), &Relative::<Kelvin>::to_dynamic());
        assert_abs_diff_eq!(delta.value(), 26.85, epsilon = 1e-12);
        let sum = delta.checked_add(&delta).unwrap();
        assert_abs_diff_eq!(sum.value(), 53.7, epsilon = 1e-12);
    }

    #[test]
    fn collapsed_temperature_round_trips_through_dynamic() {
        type Scaled = Product<Kelvin, Per<Meter, Meter>>;

        let reading = DynQuantity::from(Quantity::<Scaled>::new(20.0));
        assert!(reading.unit().is_absolute());
        assert_eq!(reading.to(&Kelvin::to_dynamic()).unwrap().value(), 20.0);
        assert_eq!(reading.to_static::<Scaled>().unwrap().value(), 20.0);
        assert!(matches!(
            reading.to(&Relative::<Kelvin>::to_dynamic()),
            Err(UnitError::AffineMismatch { .. })
        ));

        let delta = Quantity::<Scaled>::new(30.0) - Quantity::<Scaled>::new(10.0);
        let interval = DynQuantity::from(delta);
        assert!(!interval.unit().is_absolute());
        assert_eq!(interval.to(&Relative::<Kelvin>::to_dynamic()).unwrap().value(), 20.0);
        let back = q(20.0, Relative::<Kelvin>::to_dynamic())
            .to_static::<<Scaled as Unit>::Difference>()
            .unwrap();
        assert_eq!(back.value(), 20.0);
    }

    #[test]
    fn conversions() {
        let f = q(100.4, Fahrenheit::to_dynamic());
        assert_abs_diff_eq!(f.to(&Celsius::to_dynamic()).unwrap().value(), 38.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.to_static::<Celsius>().unwrap().value(), 38.0, epsilon = 1e-12);
        assert_eq!(
            f.to(&Meter::to_dynamic()),
            Err(UnitError::DimensionMismatch {
                from: "°F".into(),
                to: "m".into()
            })
        );
        assert!(matches!(
            f.to(&Relative::<Celsius>::to_dynamic()),
            Err(UnitError::AffineMismatch { .. })
        ));
        let km = q(1.0, Kilo::<Meter>::to_dynamic());
        assert_abs_diff_eq!(km.to(&Foot::to_dynamic()).unwrap().value(), 3280.839895013123, epsilon = 1e-9);
    }

    #[test]
    fn roots() {
        let area = &q(3.0, Meter::to_dynamic()) * &q(3.0, Meter::to_dynamic());
        let side = area.sqrt().unwrap();
        assert_eq!(side.value(), 3.0);
        assert_eq!(side.unit(), &Meter::to_dynamic());
        assert!(matches!(
            q(4.0, Meter::to_dynamic()).sqrt(),
            Err(UnitError::UnrootableUnit { degree: 2, .. })
        ));
        let volume = q(2.0, Meter::to_dynamic()).powi(3);
        assert_eq!(volume.unit().name(), "m^3");
        assert!(matches!(volume.sqrt(), Err(UnitError::NonDivisiblePower { .. })));
        assert_abs_diff_eq!(volume.cbrt().unwrap().value(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn function_domains() {
        let x = DynQuantity::unitless(0.0);
        assert_eq!(x.exp().unwrap().value(), 1.0);
        assert_eq!(x.erf().unwrap().value(), 0.0);
        assert_eq!(x.asin().unwrap().unit(), &Radian::to_dynamic());
        let ratio = q(2.0, Meter::to_dynamic()) / q(4.0, Meter::to_dynamic());
        assert_abs_diff_eq!(ratio.log2().unwrap().value(), -1.0);
        assert_eq!(
            q(1.0, Meter::to_dynamic()).ln(),
            Err(UnitError::NotDimensionless { unit: "m".into() })
        );
        assert!(q(80.0, Percent::to_dynamic()).exp().is_err());

        let angle = q(FRAC_PI_2, Radian::to_dynamic());
        assert_abs_diff_eq!(angle.sin().unwrap().value(), 1.0, epsilon = 1e-15);
        assert!(angle.sin().unwrap().unit().is_unitless());
        assert_eq!(
            q(1.0, Second::to_dynamic()).cos(),
            Err(UnitError::NotAngular { unit: "s".into() })
        );
        let turn = DynQuantity::unitless(1.0).atan2(&DynQuantity::unitless(0.0)).unwrap();
        assert_abs_diff_eq!(turn.value(), FRAC_PI_2, epsilon = 1e-15);
    }

    #[test]
    fn fma_and_hypot() {
        let speed = q(2.0, Meter::to_dynamic()) / q(1.0, Second::to_dynamic());
        let x = speed
            .fma(&q(3.0, Second::to_dynamic()), &q(1.0, Meter::to_dynamic()))
            .unwrap();
        assert_eq!(x.value(), 7.0);
        assert!(speed
            .fma(&q(3.0, Second::to_dynamic()), &q(1.0, Second::to_dynamic()))
            .is_err());
        let m = |v| q(v, Meter::to_dynamic());
        assert_abs_diff_eq!(m(3.0).hypot(&m(4.0)).unwrap().value(), 5.0);
        assert_abs_diff_eq!(m(2.0).hypot3(&m(3.0), &m(6.0)).unwrap().value(), 7.0, epsilon = 1e-12);
        assert!(m(1.0).hypot(&q(1.0, Second::to_dynamic())).is_err());
    }

    #[test]
    fn comparisons() {
        let a = q(1.0, Meter::to_dynamic());
        let b = q(2.0, Meter::to_dynamic());
        assert!(a < b);
        assert_eq!(a.min(&b).unwrap(), a);
        assert_eq!(a.max(&b).unwrap(), b);
        let s = q(1.0, Second::to_dynamic());
        assert_ne!(a, s);
        assert_eq!(a.partial_cmp(&s), None);
        let ratio = &a / &a;
        assert_eq!(ratio, DynQuantity::unitless(1.0));
    }

    #[test]
    fn scalars_and_display() {
        let a = q(2.0, Meter::to_dynamic());
        assert_eq!((a.clone() * 3.0).to_string(), "6 m");
        assert_eq!((3.0 * a.clone()).value(), 6.0);
        assert_eq!((a.clone() / 2.0).value(), 1.0);
        let inverse = 1.0 / q(4.0, Second::to_dynamic());
        assert_eq!(inverse.to_string(), "0.25 s^-1");
        assert_eq!((-a).value(), -2.0);
        assert_eq!(DynQuantity::unitless(0.5).to_string(), "0.5");
    }

    #[test]
    fn static_bridge() {
        let speed = crate::length::Meters::new(10.0) / crate::time::Seconds::new(2.0);
        let dynamic = DynQuantity::from(speed);
        assert_eq!(dynamic.unit().name(), "m * s^-1");
        assert_eq!(dynamic.value(), 5.0);
        let back = dynamic.to_static::<crate::Per<Meter, Second>>().unwrap();
        assert_eq!(back, speed);
        assert!(dynamic.to_static::<Unitless>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_with_unit_name() {
        let speed = q(3.0, Meter::to_dynamic()) / q(1.0, Second::to_dynamic());
        let json = serde_json::to_string(&speed).unwrap();
        assert_eq!(json, r#"{"value":3.0,"unit":"m * s^-1"}"#);
    }
}
