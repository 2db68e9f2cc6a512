//! Runtime unit algebra.
//!
//! [`DynUnit`] mirrors the static engine for units that are only known at run time. It is a closed enum over the
//! three shapes a unit can take: a bare [`NamedUnit`], a [`DynPower`] of one, or a [`DynProduct`] of several
//! powers. Composition follows the same rules as [`CanonicalProduct`]: terms merge by base, zero exponents vanish,
//! one-term products collapse to the term and empty products to the unitless unit.
//!
//! Where the static engine fails to compile, the runtime engine returns a [`UnitError`].
//!
//! ```rust
//! use kul_core::{DynUnit, Unit};
//! use kul_core::length::Meter;
//! use kul_core::time::Second;
//!
//! let m = Meter::to_dynamic();
//! let s = Second::to_dynamic();
//!
//! let speed = &m / &s;
//! assert_eq!(speed.name(), "m * s^-1");
//!
//! let volume = m.pow(3);
//! assert!(volume.sqrt().is_err());
//! assert_eq!(volume.cbrt().unwrap(), m);
//! ```

mod product;

pub use product::DynProduct;

use crate::canonical::CanonicalProduct;
use crate::dimension::Dimension;
use crate::error::{UnitError, UnitResult};
use crate::named::NamedUnit;
use crate::rational::{origins_equal, Origin, Rational};
use alloc::string::{String, ToString};
use core::fmt;
use core::ops::{Div, Mul};

/// A named unit raised to an integer power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DynPower {
    base: NamedUnit,
    exponent: i32,
}

impl DynPower {
    /// `base^exponent`.
    pub const fn new(base: NamedUnit, exponent: i32) -> Self {
        Self { base, exponent }
    }

    /// The base unit.
    pub const fn base(&self) -> NamedUnit {
        self.base
    }

    /// The exponent.
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// `base.dimension ^ exponent`.
    pub const fn dimension(&self) -> Dimension {
        self.base.dimension().pow(self.exponent)
    }

    /// `base.magnitude ^ exponent`.
    pub const fn magnitude(&self) -> Rational {
        self.base.magnitude().pow(self.exponent)
    }

    /// Exponent zero (or a unitless base) becomes unitless, exponent one becomes the bare base.
    pub fn simplify(&self) -> DynUnit {
        if self.base.is_unitless() {
            return DynUnit::UNITLESS;
        }
        match self.exponent {
            0 => DynUnit::UNITLESS,
            1 => DynUnit::Named(self.base),
            _ => DynUnit::Power(*self),
        }
    }

    fn root(&self, degree: i32) -> UnitResult<Self> {
        let remainder = self.exponent.checked_rem(degree);
        let (Some(remainder), Some(exponent)) = (remainder, self.exponent.checked_div(degree)) else {
            return Err(UnitError::ExponentOverflow {
                base: self.base.to_string(),
            });
        };
        if remainder != 0 {
            log::debug!("rejecting root of degree {degree} of {self}");
            return Err(UnitError::NonDivisiblePower {
                base: self.base.to_string(),
                exponent: self.exponent,
                degree,
            });
        }
        Ok(Self::new(self.base, exponent))
    }
}

impl fmt::Display for DynPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 1 {
            write!(f, "{}", self.base)
        } else {
            write!(f, "{}^{}", self.base, self.exponent)
        }
    }
}

/// A unit known at run time.
///
/// `PartialEq` is structural: `m * s` and `s * m` are different values. Use [`DynUnit::is_equivalent`] to compare
/// by dimension, magnitude and origin.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DynUnit {
    /// A leaf unit.
    Named(NamedUnit),
    /// A leaf unit raised to a power other than one.
    Power(DynPower),
    /// A product of two or more powers.
    Product(DynProduct),
}

impl DynUnit {
    /// The unitless unit.
    pub const UNITLESS: Self = Self::Named(NamedUnit::UNITLESS);

    /// Printable name, e.g. `"kg * m^2 * s^-2"`.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Exponents over the SI base dimensions.
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Named(named) => named.dimension(),
            Self::Power(power) => power.dimension(),
            Self::Product(product) => product.dimension(),
        }
    }

    /// Size of the unit in SI base units.
    pub fn magnitude(&self) -> Rational {
        match self {
            Self::Named(named) => named.magnitude(),
            Self::Power(power) => power.magnitude(),
            Self::Product(product) => product.magnitude(),
        }
    }

    /// Affine origin, taken from the canonical form: only a unit that simplifies to a bare named unit can have one.
    pub fn origin(&self) -> Origin {
        match self {
            Self::Named(named) => named.origin(),
            Self::Power(power) if power.exponent() == 1 => power.base().origin(),
            Self::Power(_) => None,
            Self::Product(product) => product.origin(),
        }
    }

    /// Returns `true` if the unit has an origin.
    pub fn is_absolute(&self) -> bool {
        self.origin().is_some()
    }

    /// Returns `true` for the unitless unit.
    pub fn is_unitless(&self) -> bool {
        matches!(self, Self::Named(named) if named.is_unitless())
    }

    /// Equal dimension, magnitude and origin, regardless of how the unit is written.
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.dimension() == other.dimension()
            && self.magnitude() == other.magnitude()
            && origins_equal(self.origin(), other.origin())
    }

    /// The same unit with any origin removed.
    pub fn relative(&self) -> Self {
        match self {
            Self::Named(named) => Self::Named(named.relative()),
            other => other.clone(),
        }
    }

    /// Canonical form: zero exponents removed and trivial products collapsed.
    pub fn simplify(&self) -> Self {
        match self {
            Self::Named(named) => Self::Named(*named),
            Self::Power(power) => power.simplify(),
            Self::Product(product) => product.simplify(),
        }
    }

    /// Simplified product `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut product = DynProduct::new();
        product.multiply_with(self);
        product.multiply_with(rhs);
        product.simplify()
    }

    /// Simplified quotient `self / rhs`.
    pub fn divide(&self, rhs: &Self) -> Self {
        let mut product = DynProduct::new();
        product.multiply_with(self);
        product.divide_by(rhs);
        product.simplify()
    }

    /// Every exponent multiplied by `exponent`.
    ///
    /// # Panics
    ///
    /// Panics if an exponent leaves the `i32` range; use [`DynUnit::checked_pow`] to get an error instead.
    pub fn pow(&self, exponent: i32) -> Self {
        match self.checked_pow(exponent) {
            Ok(unit) => unit,
            Err(err) => panic!("{err}"),
        }
    }

    /// Every exponent multiplied by `exponent`.
    ///
    /// # Errors
    ///
    /// [`UnitError::ExponentOverflow`] if an exponent leaves the `i32` range.
    pub fn checked_pow(&self, exponent: i32) -> UnitResult<Self> {
        let mut product = DynProduct::new();
        product.multiply_with(self);
        product
            .terms()
            .iter()
            .map(|term| match term.exponent().checked_mul(exponent) {
                Some(raised) => Ok(DynPower::new(term.base(), raised)),
                None => Err(UnitError::ExponentOverflow {
                    base: term.base().to_string(),
                }),
            })
            .collect::<UnitResult<DynProduct>>()
            .map(|product| product.simplify())
    }

    /// The `degree`-th root.
    ///
    /// A bare named unit is `base^1`, so its only roots are of degree `1` (itself) and `-1` (its inverse), the
    /// same as `Root<U, 1>` and `Root<U, -1>` in the static engine. Unitless roots to itself for every degree.
    ///
    /// # Errors
    ///
    /// - [`UnitError::ZeroRootDegree`] if `degree` is zero.
    /// - [`UnitError::UnrootableUnit`] for a bare named unit other than unitless and a degree other than `±1`.
    /// - [`UnitError::NonDivisiblePower`] if some exponent is not a multiple of `degree`.
    /// - [`UnitError::ExponentOverflow`] for `i32::MIN` exponents and degree `-1`.
    pub fn root(&self, degree: i32) -> UnitResult<Self> {
        if degree == 0 {
            return Err(UnitError::ZeroRootDegree);
        }
        match self {
            Self::Named(named) if named.is_unitless() => Ok(self.clone()),
            Self::Named(named) if degree == 1 || degree == -1 => Ok(DynPower::new(*named, degree).simplify()),
            Self::Named(named) => {
                log::debug!("rejecting root of degree {degree} of named unit {named}");
                Err(UnitError::UnrootableUnit {
                    unit: named.to_string(),
                    degree,
                })
            }
            Self::Power(power) => Ok(power.root(degree)?.simplify()),
            Self::Product(product) => {
                let mut out = DynProduct::new();
                for term in product.terms() {
                    out.multiply_with(&Self::Power(term.root(degree)?));
                }
                Ok(out.simplify())
            }
        }
    }

    /// Square root.
    pub fn sqrt(&self) -> UnitResult<Self> {
        self.root(2)
    }

    /// Cube root.
    pub fn cbrt(&self) -> UnitResult<Self> {
        self.root(3)
    }
}

impl Default for DynUnit {
    fn default() -> Self {
        Self::UNITLESS
    }
}

impl From<NamedUnit> for DynUnit {
    fn from(named: NamedUnit) -> Self {
        Self::Named(named)
    }
}

impl From<DynPower> for DynUnit {
    fn from(power: DynPower) -> Self {
        power.simplify()
    }
}

impl From<DynProduct> for DynUnit {
    fn from(product: DynProduct) -> Self {
        product.simplify()
    }
}

/// Builds the runtime form of a static canonical product.
impl From<CanonicalProduct> for DynUnit {
    fn from(product: CanonicalProduct) -> Self {
        if let Some(named) = product.as_named() {
            return Self::Named(named);
        }
        product
            .terms()
            .iter()
            .map(|term| DynPower::new(term.base(), term.exponent()))
            .collect::<DynProduct>()
            .simplify()
    }
}

impl fmt::Display for DynUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => write!(f, "{named}"),
            Self::Power(power) => write!(f, "{power}"),
            Self::Product(product) => write!(f, "{product}"),
        }
    }
}

impl Mul for &DynUnit {
    type Output = DynUnit;
    fn mul(self, rhs: Self) -> DynUnit {
        self.multiply(rhs)
    }
}

impl Mul for DynUnit {
    type Output = DynUnit;
    fn mul(self, rhs: Self) -> DynUnit {
        self.multiply(&rhs)
    }
}

impl Div for &DynUnit {
    type Output = DynUnit;
    fn div(self, rhs: Self) -> DynUnit {
        self.divide(rhs)
    }
}

impl Div for DynUnit {
    type Output = DynUnit;
    fn div(self, rhs: Self) -> DynUnit {
        self.divide(&rhs)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DynUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const M: NamedUnit = NamedUnit::new("m", Dimension::length(), Rational::ONE, None);
    const S: NamedUnit = NamedUnit::new("s", Dimension::time(), Rational::ONE, None);
    const G: NamedUnit = NamedUnit::new("g", Dimension::mass(), Rational::new(1, 1000), None);
    const K: NamedUnit = NamedUnit::new("K", Dimension::temperature(), Rational::ONE, Some(Rational::ZERO));

    fn m() -> DynUnit {
        DynUnit::Named(M)
    }

    fn s() -> DynUnit {
        DynUnit::Named(S)
    }

    fn arb_unit() -> impl Strategy<Value = DynUnit> {
        let pool = [M, S, G, NamedUnit::UNITLESS];
        prop::collection::vec((0..pool.len(), -3i32..=3), 0..5).prop_map(move |terms| {
            terms
                .into_iter()
                .map(|(i, e)| DynPower::new(pool[i], e))
                .collect::<DynProduct>()
                .simplify()
        })
    }

    #[test]
    fn multiply_and_divide() {
        let speed = &m() / &s();
        assert_eq!(speed.to_string(), "m * s^-1");
        assert_eq!(speed.dimension(), Dimension::length() / Dimension::time());
        assert_eq!(&speed * &s(), m());
        assert_eq!(&m() / &m(), DynUnit::UNITLESS);
        assert_eq!(m() * m(), DynUnit::Power(DynPower::new(M, 2)));
    }

    #[test]
    fn product_merge_has_single_entry_per_base() {
        let p = m().pow(2) * s();
        let q = p.multiply(&m().pow(3));
        let DynUnit::Product(product) = q else {
            panic!("expected a product, got {q:?}");
        };
        assert_eq!(product.terms(), &[DynPower::new(M, 5), DynPower::new(S, 1)]);
    }

    #[test]
    fn root_rules() {
        assert_eq!(
            m().sqrt(),
            Err(UnitError::UnrootableUnit {
                unit: "m".into(),
                degree: 2
            })
        );
        let cube = m().pow(3) * s().pow(-3);
        assert_eq!(
            cube.sqrt(),
            Err(UnitError::NonDivisiblePower {
                base: "m".into(),
                exponent: 3,
                degree: 2
            })
        );
        assert_eq!(cube.cbrt(), Ok(&m() / &s()));
        assert_eq!(m().pow(4).sqrt(), Ok(m().pow(2)));
        assert_eq!(m().pow(2).root(0), Err(UnitError::ZeroRootDegree));
        assert_eq!(DynUnit::UNITLESS.sqrt(), Ok(DynUnit::UNITLESS));
    }

    #[test]
    fn trivial_roots_of_named_units() {
        assert_eq!(m().root(1), Ok(m()));
        assert_eq!(m().root(-1), Ok(m().pow(-1)));
        assert_eq!(DynUnit::Named(K).root(1), Ok(DynUnit::Named(K)));
        assert!(matches!(m().root(3), Err(UnitError::UnrootableUnit { degree: 3, .. })));
    }

    #[test]
    fn exponent_overflow_is_an_error() {
        let huge = DynUnit::Power(DynPower::new(M, i32::MIN));
        assert_eq!(
            huge.root(-1),
            Err(UnitError::ExponentOverflow { base: "m".into() })
        );
        assert_eq!(huge.root(2), Ok(DynUnit::Power(DynPower::new(M, i32::MIN / 2))));
        assert_eq!(
            m().pow(i32::MAX).checked_pow(2),
            Err(UnitError::ExponentOverflow { base: "m".into() })
        );
        assert_eq!(m().checked_pow(3), Ok(m().pow(3)));
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn pow_panics_on_overflow() {
        let _ = m().pow(i32::MAX).pow(-2);
    }

    #[test]
    fn collapsed_composites_keep_the_origin() {
        let kelvin = DynUnit::Named(K);
        let scaled = kelvin.multiply(&(&m() / &m()));
        assert_eq!(scaled, kelvin);
        assert!(scaled.is_absolute());
        assert_eq!(kelvin.pow(3).cbrt(), Ok(kelvin.clone()));
        assert_eq!(DynUnit::Power(DynPower::new(K, 1)).origin(), K.origin());
        let unsimplified: DynProduct = [DynPower::new(K, 1), DynPower::new(M, 0)].into_iter().collect();
        assert_eq!(DynUnit::Product(unsimplified).origin(), K.origin());
    }

    #[test]
    fn composites_are_relative() {
        let kelvin = DynUnit::Named(K);
        assert!(kelvin.is_absolute());
        assert!(!kelvin.relative().is_absolute());
        assert!(!(kelvin.clone() * m()).is_absolute());
        assert!(!kelvin.pow(2).is_absolute());
    }

    #[test]
    fn equivalence_ignores_order_and_names() {
        let a = m() * s();
        let b = s() * m();
        assert_ne!(a, b);
        assert!(a.is_equivalent(&b));
        let kg = DynUnit::Named(G.with_prefix("k", Rational::from_integer(1000)));
        assert!(kg.magnitude() == Rational::ONE);
        assert!(!kg.is_equivalent(&DynUnit::Named(G)));
    }

    #[test]
    fn from_canonical_product() {
        assert_eq!(DynUnit::from(CanonicalProduct::EMPTY), DynUnit::UNITLESS);
        assert_eq!(DynUnit::from(CanonicalProduct::of(M)), m());
        assert_eq!(DynUnit::from(CanonicalProduct::of(M).pow(2)), m().pow(2));
        let speed = CanonicalProduct::of(M).divide(CanonicalProduct::of(S));
        assert_eq!(DynUnit::from(speed), &m() / &s());
    }

    proptest! {
        #[test]
        fn prop_simplify_is_a_fixed_point(u in arb_unit()) {
            prop_assert_eq!(u.simplify(), u.clone());
            prop_assert_eq!(u.simplify().simplify(), u.simplify());
        }

        #[test]
        fn prop_division_cancels(u in arb_unit()) {
            prop_assert_eq!(&u / &u, DynUnit::UNITLESS);
        }

        #[test]
        fn prop_root_of_power(u in arb_unit(), n in 2i32..4) {
            let raised = u.pow(n);
            prop_assert_eq!(raised.root(n), Ok(u.clone()));
        }
    }
}
