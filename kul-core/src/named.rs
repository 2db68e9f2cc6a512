//! Leaf unit descriptors.
//!
//! A [`NamedUnit`] is the runtime description of a unit with its own symbol: metre, second, degree Celsius. Both unit
//! engines are built out of these descriptors: static composite units hold them inside their
//! [`CanonicalProduct`](crate::CanonicalProduct) constant, and dynamic composite units hold them inside
//! [`DynPower`](crate::DynPower) terms.

use crate::dimension::Dimension;
use crate::rational::{origins_equal, Origin, Rational};
use core::fmt;

const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Symbol, dimension, magnitude and optional origin of a leaf unit.
///
/// `magnitude` is the size of one unit expressed in SI base units (`1 in = 127/5000 m`). `origin` is present only
/// for absolute units such as kelvin or degree Celsius and gives the SI value (in SI base units) of this unit's
/// zero: `273.15` for degree Celsius.
///
/// Two descriptors denote the same unit only if every field matches; this is the identity used when merging
/// product terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NamedUnit {
    prefix: &'static str,
    symbol: &'static str,
    dimension: Dimension,
    magnitude: Rational,
    origin: Origin,
}

impl NamedUnit {
    /// The dimensionless unit of magnitude one, printed as `1`.
    pub const UNITLESS: Self = Self::new("1", Dimension::dimensionless(), Rational::ONE, None);

    /// Declares a leaf unit.
    pub const fn new(symbol: &'static str, dimension: Dimension, magnitude: Rational, origin: Origin) -> Self {
        Self {
            prefix: "",
            symbol,
            dimension,
            magnitude,
            origin,
        }
    }

    /// Scales this unit by a decimal prefix.
    ///
    /// The result is always relative: `1 k°C` has no meaningful zero.
    ///
    /// # Panics
    ///
    /// Panics if the unit already carries a prefix.
    pub const fn with_prefix(self, prefix: &'static str, factor: Rational) -> Self {
        if !self.prefix.is_empty() {
            panic!("unit prefixes cannot be stacked");
        }
        Self {
            prefix,
            symbol: self.symbol,
            dimension: self.dimension,
            magnitude: factor.mul(self.magnitude),
            origin: None,
        }
    }

    /// The same unit with its origin removed, for expressing differences of absolute quantities.
    pub const fn relative(self) -> Self {
        Self { origin: None, ..self }
    }

    /// Prefix symbol, empty for unprefixed units.
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Unprefixed symbol.
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Dimension of the unit.
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Size of the unit in SI base units.
    pub const fn magnitude(&self) -> Rational {
        self.magnitude
    }

    /// SI value of this unit's zero, if the unit is absolute.
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    /// Returns `true` if the unit has an origin.
    pub const fn is_absolute(&self) -> bool {
        self.origin.is_some()
    }

    /// Returns `true` for [`NamedUnit::UNITLESS`].
    pub const fn is_unitless(&self) -> bool {
        self.same_as(&Self::UNITLESS)
    }

    /// `const` descriptor equality.
    pub const fn same_as(&self, other: &Self) -> bool {
        str_eq(self.prefix, other.prefix)
            && str_eq(self.symbol, other.symbol)
            && self.dimension.equals(&other.dimension)
            && self.magnitude.equals(&other.magnitude)
            && origins_equal(self.origin, other.origin)
    }
}

impl fmt::Display for NamedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METER: NamedUnit = NamedUnit::new("m", Dimension::length(), Rational::ONE, None);
    const KELVIN: NamedUnit = NamedUnit::new("K", Dimension::temperature(), Rational::ONE, Some(Rational::ZERO));

    #[test]
    fn prefixes_scale_and_rename() {
        const KM: NamedUnit = METER.with_prefix("k", Rational::from_integer(1000));
        assert_eq!(KM.magnitude(), Rational::from_integer(1000));
        assert_eq!(KM.to_string(), "km");
        assert!(!KM.same_as(&METER));
    }

    #[test]
    fn prefixed_units_are_relative() {
        let mk = KELVIN.with_prefix("m", Rational::new(1, 1000));
        assert!(KELVIN.is_absolute());
        assert!(!mk.is_absolute());
    }

    #[test]
    #[should_panic(expected = "stacked")]
    fn prefixes_do_not_stack() {
        let km = METER.with_prefix("k", Rational::from_integer(1000));
        let _ = km.with_prefix("m", Rational::new(1, 1000));
    }

    #[test]
    fn relative_drops_only_the_origin() {
        let delta = KELVIN.relative();
        assert_eq!(delta.origin(), None);
        assert_eq!(delta.to_string(), "K");
        assert_eq!(delta.magnitude(), KELVIN.magnitude());
        assert!(!delta.same_as(&KELVIN));
        assert!(delta.same_as(&KELVIN.relative()));
    }

    #[test]
    fn same_as_agrees_with_eq() {
        let units = [METER, KELVIN, KELVIN.relative(), NamedUnit::UNITLESS];
        for a in units {
            for b in units {
                assert_eq!(a.same_as(&b), a == b, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn unitless() {
        assert!(NamedUnit::UNITLESS.is_unitless());
        assert!(!METER.is_unitless());
        let radian = NamedUnit::new("rad", Dimension::dimensionless(), Rational::ONE, None);
        assert!(!radian.is_unitless());
        assert_eq!(NamedUnit::UNITLESS.to_string(), "1");
    }
}
