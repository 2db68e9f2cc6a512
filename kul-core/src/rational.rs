//! Exact rational numbers for unit magnitudes and conversion factors.
//!
//! A [`Rational`] is always stored in canonical form: the denominator is positive, the sign lives on the numerator
//! and `gcd(|numerator|, |denominator|) == 1`. Every operation is a `const fn` so unit magnitudes can be composed
//! inside associated constants.
//!
//! Arithmetic uses fixed-width `i64` components. Overflow is not promoted to a wider representation: it panics, which
//! surfaces as a compile error when the overflowing operation runs during constant evaluation.
//!
//! ```rust
//! use kul_core::Rational;
//!
//! let inch = Rational::new(254, 10_000);
//! assert_eq!(inch, Rational::new(127, 5_000));
//! assert_eq!(inch.mul(inch.inverse()), Rational::ONE);
//! ```

use crate::error::UnitError;
use core::fmt;
use core::ops::{Div, Mul};
use num_traits::Float;

/// Offset of an affine unit's zero from the SI zero, expressed in SI base units. `None` marks a relative unit.
pub type Origin = Option<Rational>;

#[inline]
const fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

#[inline]
const fn checked(value: Option<i64>) -> i64 {
    match value {
        Some(v) => v,
        None => panic!("rational overflow"),
    }
}

/// A fraction of two `i64` values held in lowest terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "(i64, i64)", try_from = "(i64, i64)")
)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// `0/1`.
    pub const ZERO: Self = Self::from_integer(0);
    /// `1/1`.
    pub const ONE: Self = Self::from_integer(1);

    /// Builds the canonical form of `numerator / denominator`.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            panic!("rational with zero denominator");
        }
        let abs_num = numerator.abs();
        let abs_den = denominator.abs();
        let common = gcd(abs_num, abs_den);
        let abs_num = abs_num / common;
        let abs_den = abs_den / common;
        let is_negative = (numerator < 0) != (denominator < 0);
        Self {
            numerator: if is_negative { -abs_num } else { abs_num },
            denominator: abs_den,
        }
    }

    /// `value / 1`.
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    /// Signed numerator of the canonical form.
    #[inline]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Positive denominator of the canonical form.
    #[inline]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Returns `true` for `0/1`.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Swaps numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[inline]
    pub const fn inverse(self) -> Self {
        Self::new(self.denominator, self.numerator)
    }

    /// Exact product.
    ///
    /// Cross-reduces each numerator against the opposite denominator before multiplying, so intermediate values stay
    /// as small as the result allows.
    ///
    /// # Panics
    ///
    /// Panics if the reduced product does not fit in `i64`.
    pub const fn mul(self, rhs: Self) -> Self {
        let g1 = gcd(self.numerator.abs(), rhs.denominator);
        let g2 = gcd(rhs.numerator.abs(), self.denominator);
        // Both gcds are at least 1 because denominators are positive.
        let numerator = checked((self.numerator / g1).checked_mul(rhs.numerator / g2));
        let denominator = checked((self.denominator / g2).checked_mul(rhs.denominator / g1));
        Self::new(numerator, denominator)
    }

    /// Exact quotient.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero or on overflow.
    #[inline]
    pub const fn div(self, rhs: Self) -> Self {
        self.mul(rhs.inverse())
    }

    /// Exact sum.
    ///
    /// # Panics
    ///
    /// Panics on overflow.
    pub const fn add(self, rhs: Self) -> Self {
        let common = gcd(self.denominator, rhs.denominator);
        let lhs_scale = rhs.denominator / common;
        let rhs_scale = self.denominator / common;
        let numerator = checked(
            checked(self.numerator.checked_mul(lhs_scale))
                .checked_add(checked(rhs.numerator.checked_mul(rhs_scale))),
        );
        let denominator = checked(self.denominator.checked_mul(lhs_scale));
        Self::new(numerator, denominator)
    }

    /// Exact difference.
    ///
    /// # Panics
    ///
    /// Panics on overflow.
    #[inline]
    pub const fn sub(self, rhs: Self) -> Self {
        self.add(Self {
            numerator: checked(rhs.numerator.checked_neg()),
            denominator: rhs.denominator,
        })
    }

    /// Integer power: repeated multiplication for non-negative exponents, repeated division for negative ones.
    ///
    /// # Panics
    ///
    /// Panics on overflow, or if `self` is zero and `exponent` is negative.
    pub const fn pow(self, exponent: i32) -> Self {
        let mut result = Self::ONE;
        let mut i = 0;
        while i < exponent {
            result = result.mul(self);
            i += 1;
        }
        let mut i = 0;
        while i < -(exponent as i64) {
            result = result.div(self);
            i += 1;
        }
        result
    }

    /// `const` equality; canonical form makes this a component-wise comparison.
    #[inline]
    pub const fn equals(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }

    /// Nearest `f64`.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Converts numerator and denominator to `T` separately and divides them.
    #[inline]
    pub fn convert_to<T: Float>(self) -> T {
        match (T::from(self.numerator), T::from(self.denominator)) {
            (Some(n), Some(d)) => n / d,
            _ => T::nan(),
        }
    }
}

/// `const` equality of two optional origins: both absent, or both present and equal.
#[inline]
pub const fn origins_equal(a: Origin, b: Origin) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.equals(&b),
        _ => false,
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = UnitError;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self, Self::Error> {
        if denominator == 0 {
            return Err(UnitError::ZeroDenominator);
        }
        Ok(Self::new(numerator, denominator))
    }
}

impl From<Rational> for (i64, i64) {
    fn from(value: Rational) -> Self {
        (value.numerator, value.denominator)
    }
}

impl Mul for Rational {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Rational::mul(self, rhs)
    }
}

impl Div for Rational {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Rational::div(self, rhs)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Canonical form
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_reduces_to_lowest_terms() {
        let r = Rational::new(254, 10_000);
        assert_eq!(r.numerator(), 127);
        assert_eq!(r.denominator(), 5_000);
    }

    #[test]
    fn sign_lives_on_numerator() {
        assert_eq!(Rational::new(1, -2), Rational::new(-1, 2));
        assert_eq!(Rational::new(-1, -2), Rational::new(1, 2));
        assert_eq!(Rational::new(3, -6).denominator(), 2);
    }

    #[test]
    fn zero_is_canonical() {
        assert_eq!(Rational::new(0, -7), Rational::ZERO);
        assert!(Rational::new(0, 5).is_zero());
    }

    #[test]
    #[should_panic(expected = "zero denominator")]
    fn zero_denominator_panics() {
        let _ = Rational::new(1, 0);
    }

    #[test]
    fn try_from_rejects_zero_denominator() {
        assert_eq!(Rational::try_from((1, 0)), Err(UnitError::ZeroDenominator));
        assert_eq!(Rational::try_from((2, 4)), Ok(Rational::new(1, 2)));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn mul_cross_reduces() {
        let a = Rational::new(1_000_000_007, 3);
        let b = Rational::new(3, 1_000_000_007);
        assert_eq!(a * b, Rational::ONE);
    }

    #[test]
    fn div_by_inverse() {
        assert_eq!(Rational::new(1, 1000) / Rational::new(1, 1000), Rational::ONE);
        assert_eq!(Rational::new(5, 9) / Rational::ONE, Rational::new(5, 9));
    }

    #[test]
    fn add_and_sub_are_exact() {
        let fahrenheit_origin = Rational::new(45_967, 180);
        let celsius_origin = Rational::new(27_315, 100);
        assert_eq!(fahrenheit_origin.sub(celsius_origin), Rational::new(-160, 9));
        assert_eq!(Rational::new(1, 3).add(Rational::new(1, 6)), Rational::new(1, 2));
    }

    #[test]
    fn pow_positive_and_negative() {
        let r = Rational::new(2, 3);
        assert_eq!(r.pow(0), Rational::ONE);
        assert_eq!(r.pow(3), Rational::new(8, 27));
        assert_eq!(r.pow(-2), Rational::new(9, 4));
    }

    #[test]
    #[should_panic(expected = "rational overflow")]
    fn overflow_panics() {
        let big = Rational::from_integer(i64::MAX / 2);
        let _ = big.mul(Rational::from_integer(3));
    }

    #[test]
    fn const_evaluation() {
        const INCH_SQUARED: Rational = Rational::new(254, 10_000).pow(2);
        assert_eq!(INCH_SQUARED, Rational::new(16_129, 25_000_000));
    }

    #[test]
    fn float_conversion() {
        assert_eq!(Rational::new(1, 4).to_f64(), 0.25);
        assert_eq!(Rational::new(-3, 2).convert_to::<f32>(), -1.5_f32);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Rational::new(6, 3)), "2");
        assert_eq!(format!("{}", Rational::new(-1, 3)), "-1/3");
    }

    #[test]
    fn origin_equality() {
        assert!(origins_equal(None, None));
        assert!(origins_equal(Some(Rational::ZERO), Some(Rational::ZERO)));
        assert!(!origins_equal(Some(Rational::ZERO), None));
        assert!(!origins_equal(Some(Rational::ONE), Some(Rational::ZERO)));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_scaling_preserves_value(n in -10_000i64..10_000, d in 1i64..10_000, k in 1i64..1_000) {
            prop_assert_eq!(Rational::new(n, d), Rational::new(n * k, d * k));
            prop_assert_eq!(Rational::new(n, d), Rational::new(-n * k, -d * k));
        }

        #[test]
        fn prop_inverse_is_involution(n in 1i64..100_000, d in 1i64..100_000, negative in any::<bool>()) {
            let r = Rational::new(if negative { -n } else { n }, d);
            prop_assert_eq!(r.inverse().inverse(), r);
        }

        #[test]
        fn prop_reciprocal_product_is_one(a in 1i64..1_000_000, b in 1i64..1_000_000) {
            prop_assert_eq!(Rational::new(a, b) * Rational::new(b, a), Rational::ONE);
        }

        #[test]
        fn prop_canonical_form(n in -1_000_000i64..1_000_000, d in -1_000_000i64..1_000_000) {
            prop_assume!(d != 0);
            let r = Rational::new(n, d);
            prop_assert!(r.denominator() > 0);
            prop_assert_eq!(gcd(r.numerator().abs(), r.denominator()), 1);
        }
    }
}
