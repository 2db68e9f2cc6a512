//! Quantity type and its implementations.

use crate::conversion::Conversion;
use crate::unit::{is_absolute, units_equal, Per, Power, Product, Root, Unit, Unitless};
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::*;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A quantity with a specific unit.
///
/// `Quantity<U, T>` wraps a numeric value of type `T` (default `f64`) together with phantom type information about
/// its unit `U`. Every dimensional check and conversion factor is resolved during compilation; at run time a
/// quantity is exactly its value.
///
/// # Examples
///
/// ```rust
/// use kul_core::Quantity;
/// use kul_core::length::Meter;
/// use kul_core::time::Second;
///
/// let d = Quantity::<Meter>::new(100.0);
/// let t = Quantity::<Second>::new(20.0);
/// let v = d / t;
/// assert_eq!(v.value(), 5.0);
/// assert_eq!(v.to_string(), "5 m * s^-1");
/// ```
///
/// Quantities of different dimension cannot be converted into each other:
///
/// ```compile_fail
/// use kul_core::Quantity;
/// use kul_core::length::Meter;
/// use kul_core::time::Second;
///
/// let _ = Quantity::<Meter>::new(1.0).to::<Second>();
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit, T = f64>(T, PhantomData<U>);

impl<U: Unit> Quantity<U, f64> {
    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use kul_core::length::Meters;
    /// assert!(Meters::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);
}

impl<U: Unit, T> Quantity<U, T> {
    /// Creates a new quantity with the given value.
    ///
    /// ```rust
    /// use kul_core::length::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    ///
    /// ```rust
    /// use kul_core::time::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub const fn value(&self) -> T
    where
        T: Copy,
    {
        self.0
    }

    /// Consumes the quantity and returns its value.
    #[inline]
    pub fn into_value(self) -> T {
        self.0
    }
}

impl<U: Unit, T: Float> Quantity<U, T> {
    /// Converts this quantity to another unit of the same dimension.
    ///
    /// Units that are [equal](crate::units_equal) copy the value unchanged; any other pair applies the affine
    /// [`Conversion`] computed at compile time. Converting between different dimensions, or between an absolute
    /// and a relative unit, fails to compile.
    ///
    /// ```rust
    /// use kul_core::temperature::{Celsius, Kelvins};
    ///
    /// let absolute_zero = Kelvins::new(0.0);
    /// let c = absolute_zero.to::<Celsius>();
    /// assert!((c.value() + 273.15).abs() < 1e-12);
    /// ```
    ///
    /// ```compile_fail
    /// use kul_core::temperature::{Celsius, Kelvin};
    /// use kul_core::{Quantity, Relative};
    ///
    /// // A temperature difference is not a temperature.
    /// let _ = Quantity::<Relative<Kelvin>>::new(1.0).to::<Celsius>();
    /// ```
    #[inline]
    pub fn to<V: Unit>(self) -> Quantity<V, T> {
        const {
            assert!(
                U::DIMENSION.equals(&V::DIMENSION),
                "cannot convert between quantities with different dimensions"
            );
            assert!(
                is_absolute::<U>() == is_absolute::<V>(),
                "cannot convert from absolute to relative or vice-versa"
            );
        }
        if const { units_equal::<U, V>() } {
            return Quantity::new(self.0);
        }
        Quantity::new(const { Conversion::of::<U, V>() }.apply(self.0))
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use kul_core::length::Meters;
    /// let a = Meters::new(-10.0);
    /// assert_eq!(a.abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Returns the minimum of this quantity and another.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// Returns the maximum of this quantity and another.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }

    /// Square root; the unit is the square root of `U`.
    ///
    /// ```rust
    /// use kul_core::{Power, Quantity};
    /// use kul_core::length::Meter;
    ///
    /// let area = Quantity::<Power<Meter, 2>>::new(9.0);
    /// let side = area.sqrt();
    /// assert_eq!(side.value(), 3.0);
    /// assert_eq!(side.to_string(), "3 m");
    /// ```
    ///
    /// ```compile_fail
    /// use kul_core::length::Meters;
    ///
    /// // m has no square root.
    /// let _ = Meters::new(4.0).sqrt();
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<Root<U, 2>, T> {
        // Fails the build for non-divisible exponents.
        let _ = const { <Root<U, 2> as Unit>::TERMS };
        Quantity::new(self.0.sqrt())
    }

    /// Cube root; the unit is the cube root of `U`.
    #[inline]
    pub fn cbrt(self) -> Quantity<Root<U, 3>, T> {
        let _ = const { <Root<U, 3> as Unit>::TERMS };
        Quantity::new(self.0.cbrt())
    }

    /// Integer power `N`; the unit is `U^N`.
    ///
    /// ```rust
    /// use kul_core::length::Meters;
    ///
    /// let v = Meters::new(2.0).powi::<3>();
    /// assert_eq!(v.value(), 8.0);
    /// assert_eq!(v.to_string(), "8 m^3");
    /// ```
    #[inline]
    pub fn powi<const N: i32>(self) -> Quantity<Power<U, N>, T> {
        Quantity::new(self.0.powi(N))
    }

    /// `sqrt(self² + other²)` without intermediate overflow.
    #[inline]
    pub fn hypot(self, other: Self) -> Self {
        Self::new(self.0.hypot(other.0))
    }

    /// `sqrt(self² + b² + c²)` without intermediate overflow.
    #[inline]
    pub fn hypot3(self, b: Self, c: Self) -> Self {
        Self::new(self.0.hypot(b.0).hypot(c.0))
    }

    /// Fused `self * b + c`.
    ///
    /// The unit of `c` must equal the unit of `self * b`; anything else fails to compile.
    ///
    /// ```rust
    /// use kul_core::length::Meters;
    /// use kul_core::time::Seconds;
    /// use kul_core::velocity::MetersPerSecond;
    ///
    /// let x = MetersPerSecond::new(2.0).fma(Seconds::new(3.0), Meters::new(1.0));
    /// assert_eq!(x.value(), 7.0);
    /// ```
    #[inline]
    pub fn fma<U2: Unit, U3: Unit>(self, b: Quantity<U2, T>, c: Quantity<U3, T>) -> Quantity<U3, T> {
        const {
            assert!(
                units_equal::<U3, Product<U, U2>>(),
                "fma with compile-time units: (a*b) has different units from c"
            );
        }
        Quantity::new(self.0.mul_add(b.0, c.0))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, T: PartialEq> PartialEq for Quantity<U, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<U: Unit, T: PartialOrd> PartialOrd for Quantity<U, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<U: Unit, T: Default> Default for Quantity<U, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

/// Addition of two quantities of the same relative unit.
///
/// ```compile_fail
/// use kul_core::temperature::Kelvins;
///
/// // Absolute temperatures cannot be added.
/// let _ = Kelvins::new(1.0) + Kelvins::new(2.0);
/// ```
impl<U: Unit, T1, T2> Add<Quantity<U, T2>> for Quantity<U, T1>
where
    T1: Add<T2>,
{
    type Output = Quantity<U, <T1 as Add<T2>>::Output>;
    #[inline]
    fn add(self, rhs: Quantity<U, T2>) -> Self::Output {
        const { assert!(!is_absolute::<U>(), "cannot add quantities of an absolute unit") }
        Quantity::new(self.0 + rhs.0)
    }
}

impl<U: Unit, T: AddAssign> AddAssign for Quantity<U, T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        const { assert!(!is_absolute::<U>(), "cannot add quantities of an absolute unit") }
        self.0 += rhs.0;
    }
}

/// Subtraction; the difference of two absolute quantities is relative.
impl<U: Unit, T1, T2> Sub<Quantity<U, T2>> for Quantity<U, T1>
where
    T1: Sub<T2>,
{
    type Output = Quantity<U::Difference, <T1 as Sub<T2>>::Output>;
    #[inline]
    fn sub(self, rhs: Quantity<U, T2>) -> Self::Output {
        Quantity::new(self.0 - rhs.0)
    }
}

impl<U: Unit, T: SubAssign> SubAssign for Quantity<U, T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        const { assert!(!is_absolute::<U>(), "in-place subtraction of an absolute unit") }
        self.0 -= rhs.0;
    }
}

impl<U1: Unit, U2: Unit, T1, T2> Mul<Quantity<U2, T2>> for Quantity<U1, T1>
where
    T1: Mul<T2>,
{
    type Output = Quantity<Product<U1, U2>, <T1 as Mul<T2>>::Output>;
    #[inline]
    fn mul(self, rhs: Quantity<U2, T2>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<N: Unit, D: Unit, T1, T2> Div<Quantity<D, T2>> for Quantity<N, T1>
where
    T1: Div<T2>,
{
    type Output = Quantity<Per<N, D>, <T1 as Div<T2>>::Output>;
    #[inline]
    fn div(self, rhs: Quantity<D, T2>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

impl<U: Unit, T: Neg> Neg for Quantity<U, T> {
    type Output = Quantity<U, T::Output>;
    #[inline]
    fn neg(self) -> Self::Output {
        Quantity::new(-self.0)
    }
}

macro_rules! impl_scalar_ops {
    ($($scalar:ty),+) => {
        $(
            impl<U: Unit> Mul<$scalar> for Quantity<U, $scalar> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $scalar) -> Self {
                    Self::new(self.0 * rhs)
                }
            }

            impl<U: Unit> Mul<Quantity<U, $scalar>> for $scalar {
                type Output = Quantity<U, $scalar>;
                #[inline]
                fn mul(self, rhs: Quantity<U, $scalar>) -> Self::Output {
                    rhs * self
                }
            }

            impl<U: Unit> Div<$scalar> for Quantity<U, $scalar> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $scalar) -> Self {
                    Self::new(self.0 / rhs)
                }
            }

            impl<U: Unit> Div<Quantity<U, $scalar>> for $scalar {
                type Output = Quantity<Per<Unitless, U>, $scalar>;
                #[inline]
                fn div(self, rhs: Quantity<U, $scalar>) -> Self::Output {
                    Quantity::new(self / rhs.0)
                }
            }

            impl<U: Unit> MulAssign<$scalar> for Quantity<U, $scalar> {
                #[inline]
                fn mul_assign(&mut self, rhs: $scalar) {
                    self.0 *= rhs;
                }
            }

            impl<U: Unit> DivAssign<$scalar> for Quantity<U, $scalar> {
                #[inline]
                fn div_assign(&mut self, rhs: $scalar) {
                    self.0 /= rhs;
                }
            }
        )+
    };
}

impl_scalar_ops!(f32, f64);

/// Only dimensionless quantities are built implicitly from a bare number.
impl<T> From<T> for Quantity<Unitless, T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Formats as `<value> <unit name>`; the value's own format options (precision, width) apply.
///
/// Dimensionless quantities whose terms all cancel print as the bare value.
impl<U: Unit, T: fmt::Display> fmt::Display for Quantity<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)?;
        if U::TERMS.is_empty() {
            Ok(())
        } else {
            write!(f, " {}", U::TERMS)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit, T: Serialize> Serialize for Quantity<U, T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit, T: Deserialize<'de>> Deserialize<'de> for Quantity<U, T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Quantity::new)
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to keep the unit name next to the value. Absolute units
/// also write `"absolute": true`, since an absolute unit and its [`Relative`](crate::Relative) form share a name.
/// On input the `unit` and `absolute` fields are optional, but when present they must match the target unit; a
/// `unit` without `absolute` is read as relative.
///
/// # Examples
///
/// ```rust
/// use kul_core::length::Meters;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "kul_core::serde_with_unit")]
///     max_distance: Meters,  // Serializes as {"value": 100.0, "unit": "m"}
///
///     min_distance: Meters,  // Serializes as 50.0
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use alloc::format;
    use alloc::string::String;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity<U, T>` as a struct with `value` and `unit` fields.
    pub fn serialize<U, T, S>(quantity: &Quantity<U, T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        T: Serialize,
        S: Serializer,
    {
        let absolute = is_absolute::<U>();
        let mut state = serializer.serialize_struct("Quantity", if absolute { 3 } else { 2 })?;
        state.serialize_field("value", &quantity.0)?;
        state.serialize_field("unit", &U::name())?;
        if absolute {
            state.serialize_field("absolute", &true)?;
        } else {
            state.skip_field("absolute")?;
        }
        state.end()
    }

    /// Deserializes a `Quantity<U, T>` from a struct with `value` and optionally `unit` fields.
    pub fn deserialize<'de, U, T, D>(deserializer: D) -> Result<Quantity<U, T>, D::Error>
    where
        U: Unit,
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
            Absolute,
        }

        struct QuantityVisitor<U, T>(PhantomData<(U, T)>);

        impl<'de, U: Unit, T: Deserialize<'de>> Visitor<'de> for QuantityVisitor<U, T> {
            type Value = Quantity<U, T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U, T>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<T> = None;
                let mut unit: Option<String> = None;
                let mut absolute: Option<bool> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                        Field::Absolute => {
                            if absolute.is_some() {
                                return Err(de::Error::duplicate_field("absolute"));
                            }
                            absolute = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(unit) = &unit {
                    let expected = U::name();
                    if *unit != expected {
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            expected, unit
                        )));
                    }
                }

                let found = match (absolute, &unit) {
                    (Some(absolute), _) => Some(absolute),
                    (None, Some(_)) => Some(false),
                    (None, None) => None,
                };
                if let Some(found) = found {
                    let expected = is_absolute::<U>();
                    if found != expected {
                        let kind = |absolute: bool| if absolute { "absolute" } else { "relative" };
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected {} '{}', found {}",
                            kind(expected),
                            U::name(),
                            kind(found)
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct("Quantity", &["value", "unit"], QuantityVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::{Kilo, Micro, Milli};
    use crate::units::derived::{Joule, Joules, Watts};
    use crate::units::length::{Inch, Meter, Meters};
    use crate::units::temperature::{Celsius, DegreesCelsius, Fahrenheit, Kelvin, Kelvins};
    use crate::units::time::{Second, Seconds};
    use crate::velocity::MetersPerSecond;
    use crate::Relative;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn watts_times_seconds_are_joules() {
        let energy = Watts::new(1.0) * Seconds::new(2.0);
        assert!(units_equal::<Product<crate::units::derived::Watt, Second>, Joule>());
        let joules: Joules = energy.to();
        assert_eq!(joules.value(), 2.0);
        assert_eq!(<Product<crate::units::derived::Watt, Second> as Unit>::DIMENSION, Joule::DIMENSION);
    }

    #[test]
    fn meters_per_second() {
        let v = Meters::new(1.0) / Seconds::new(2.0);
        let v: MetersPerSecond = v;
        assert_eq!(v.value(), 0.5);
    }

    #[test]
    fn conversion_copies_when_equal() {
        let q = Quantity::<Per<Meter, Meter>>::new(0.25);
        assert_eq!(q.to::<Unitless>().value(), 0.25);
    }

    #[test]
    fn kelvin_difference_is_relative() {
        let delta = Kelvins::new(300.0) - Kelvins::new(273.15);
        let delta: Quantity<Relative<Kelvin>> = delta;
        assert_abs_diff_eq!(delta.value(), 26.85, epsilon = 1e-12);
        let sum = delta + delta;
        assert_abs_diff_eq!(sum.value(), 53.7, epsilon = 1e-12);
        assert_abs_diff_eq!(sum.to::<Relative<Celsius>>().value(), 53.7, epsilon = 1e-12);
        assert_abs_diff_eq!(sum.to::<Relative<Fahrenheit>>().value(), 96.66, epsilon = 1e-9);
    }

    #[test]
    fn absolute_conversions() {
        let c = DegreesCelsius::new(0.0);
        assert_abs_diff_eq!(c.to::<Fahrenheit>().value(), 32.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.to::<Kelvin>().value(), 273.15, epsilon = 1e-12);
    }

    #[test]
    fn thou_in_micrometers() {
        let thou = Quantity::<Milli<Inch>>::new(1.0);
        assert_abs_diff_eq!(thou.to::<Micro<Meter>>().value(), 25.4, epsilon = 1e-12);
    }

    #[test]
    fn scalar_operations() {
        let d = Meters::new(2.0);
        assert_eq!((d * 3.0).value(), 6.0);
        assert_eq!((3.0 * d).value(), 6.0);
        assert_eq!((d / 4.0).value(), 0.5);
        let inverse = 1.0 / Seconds::new(4.0);
        assert_eq!(inverse.value(), 0.25);
        assert_eq!(<Per<Unitless, Second> as Unit>::name(), "s^-1");
        let mut x = Meters::new(1.0);
        x *= 5.0;
        x /= 2.0;
        x += Meters::new(0.5);
        x -= Meters::new(1.0);
        assert_eq!(x.value(), 2.0);
        assert_eq!((-x).value(), -2.0);
    }

    #[test]
    fn single_precision_payload() {
        let a = Quantity::<Meter, f32>::new(1.5);
        let b = Quantity::<Meter, f32>::new(2.0);
        let sum: Quantity<Meter, f32> = a + b;
        assert_eq!(sum.value(), 3.5_f32);
    }

    #[test]
    fn roots_and_powers() {
        let area = Meters::new(3.0) * Meters::new(3.0);
        let side = area.sqrt();
        assert_eq!(side.value(), 3.0);
        assert!(units_equal::<Root<Product<Meter, Meter>, 2>, Meter>());
        let volume = Meters::new(2.0).powi::<3>();
        assert_abs_diff_eq!(volume.cbrt().value(), 2.0, epsilon = 1e-12);
        assert_eq!(<Root<Power<Meter, 3>, 3> as Unit>::name(), "m");
    }

    #[test]
    fn hypot_and_fma() {
        assert_abs_diff_eq!(Meters::new(3.0).hypot(Meters::new(4.0)).value(), 5.0);
        assert_abs_diff_eq!(
            Meters::new(2.0).hypot3(Meters::new(3.0), Meters::new(6.0)).value(),
            7.0,
            epsilon = 1e-12
        );
        let area = Meters::new(2.0).fma(Meters::new(3.0), Quantity::<Power<Meter, 2>>::new(1.0));
        assert_eq!(area.value(), 7.0);
    }

    #[test]
    fn comparisons_and_min_max() {
        let a = Meters::new(1.0);
        let b = Meters::new(2.0);
        assert!(a < b);
        assert!(a <= a);
        assert!(b > a);
        assert_ne!(a, b);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
        assert_eq!(Meters::new(-3.0).abs(), Meters::new(3.0));
    }

    #[test]
    fn display() {
        assert_eq!(Meters::new(1.5).to_string(), "1.5 m");
        assert_eq!(format!("{:.2}", Meters::new(1.0 / 3.0)), "0.33 m");
        assert_eq!(Quantity::<Per<Meter, Meter>>::new(0.5).to_string(), "0.5");
        assert_eq!(Quantity::<Kilo<Meter>>::new(2.0).to_string(), "2 km");
        assert_eq!((Meters::new(1.0) / Seconds::new(1.0)).to_string(), "1 m * s^-1");
        assert_eq!(DegreesCelsius::new(20.0).to_string(), "20 °C");
    }

    #[test]
    fn unitless_from_number() {
        let q: Quantity<Unitless> = 0.5.into();
        assert_eq!(q.value(), 0.5);
    }

    proptest! {
        #[test]
        fn prop_conversion_round_trip(x in -1.0e9f64..1.0e9) {
            let there = Quantity::<Inch>::new(x).to::<Kilo<Meter>>();
            let back = there.to::<Inch>();
            prop_assert!((back.value() - x).abs() <= 1e-9 * x.abs().max(1.0));

            let there = Quantity::<Fahrenheit>::new(x).to::<Celsius>();
            let back = there.to::<Fahrenheit>();
            prop_assert!((back.value() - x).abs() <= 1e-9 * x.abs().max(1.0));
        }

        #[test]
        fn prop_product_then_quotient(a in 1.0e-3f64..1.0e3, b in 1.0e-3f64..1.0e3) {
            let product = Meters::new(a) * Seconds::new(b);
            let back: Meters = (product / Seconds::new(b)).to();
            prop_assert!((back.value() - a).abs() <= 1e-12 * a);
        }
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[test]
        fn serialize_quantity() {
            let q = Meters::new(42.5);
            let json = serde_json::to_string(&q).unwrap();
            assert_eq!(json, "42.5");
            let back: Meters = serde_json::from_str(&json).unwrap();
            assert_eq!(back, q);
        }

        #[derive(Serialize, Deserialize, Debug)]
        struct Reading {
            #[serde(with = "crate::serde_with_unit")]
            speed: MetersPerSecond,
        }

        #[test]
        fn serde_with_unit_writes_the_name() {
            let data = Reading {
                speed: MetersPerSecond::new(3.0),
            };
            let json = serde_json::to_string(&data).unwrap();
            assert_eq!(json, r#"{"speed":{"value":3.0,"unit":"m * s^-1"}}"#);
            let back: Reading = serde_json::from_str(&json).unwrap();
            assert_eq!(back.speed.value(), 3.0);
        }

        #[test]
        fn serde_with_unit_rejects_other_units() {
            let json = r#"{"speed":{"value":3.0,"unit":"km * h^-1"}}"#;
            let err = serde_json::from_str::<Reading>(json).unwrap_err().to_string();
            assert!(err.contains("unit mismatch"));
        }

        #[test]
        fn serde_with_unit_unit_is_optional() {
            let json = r#"{"speed":{"value":3.0}}"#;
            let data: Reading = serde_json::from_str(json).unwrap();
            assert_eq!(data.speed.value(), 3.0);
        }

        #[derive(Serialize, Deserialize, Debug)]
        struct Thermostat {
            #[serde(with = "crate::serde_with_unit")]
            setpoint: Quantity<Kelvin>,
            #[serde(with = "crate::serde_with_unit")]
            hysteresis: Quantity<Relative<Kelvin>>,
        }

        #[test]
        fn serde_with_unit_marks_absolute_units() {
            let data = Thermostat {
                setpoint: Kelvins::new(293.0),
                hysteresis: Quantity::new(0.5),
            };
            let json = serde_json::to_string(&data).unwrap();
            assert_eq!(
                json,
                r#"{"setpoint":{"value":293.0,"unit":"K","absolute":true},"hysteresis":{"value":0.5,"unit":"K"}}"#
            );
            let back: Thermostat = serde_json::from_str(&json).unwrap();
            assert_eq!(back.setpoint.value(), 293.0);
            assert_eq!(back.hysteresis.value(), 0.5);
        }

        #[test]
        fn serde_with_unit_rejects_absolute_relative_swaps() {
            let interval_as_reading = r#"{"setpoint":{"value":1.0,"unit":"K"},"hysteresis":{"value":0.5}}"#;
            let err = serde_json::from_str::<Thermostat>(interval_as_reading).unwrap_err().to_string();
            assert!(err.contains("expected absolute 'K', found relative"), "{err}");

            let reading_as_interval =
                r#"{"setpoint":{"value":1.0},"hysteresis":{"value":0.5,"unit":"K","absolute":true}}"#;
            let err = serde_json::from_str::<Thermostat>(reading_as_interval).unwrap_err().to_string();
            assert!(err.contains("expected relative 'K', found absolute"), "{err}");
        }

        #[test]
        fn serde_with_unit_requires_value() {
            let json = r#"{"speed":{"unit":"m * s^-1"}}"#;
            assert!(serde_json::from_str::<Reading>(json).is_err());
        }
    }
}
