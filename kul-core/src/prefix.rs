//! Decimal prefixes.
//!
//! A prefix wrapper scales a [`Named`] unit by an exact power of ten and prepends the prefix symbol:
//! `Kilo<Meter>` is `km`, `Milli<Inch>` is `min` (the thou). Prefixed units are always relative and cannot be
//! prefixed again.
//!
//! ```rust
//! use kul_core::prefix::{Kilo, Milli};
//! use kul_core::length::{Inch, Meter};
//! use kul_core::{Quantity, Unit};
//!
//! let thou = Quantity::<Milli<Inch>>::new(1.0);
//! assert!((thou.to::<Meter>().value() - 25.4e-6).abs() < 1e-18);
//! assert_eq!(Kilo::<Meter>::name(), "km");
//! ```

use crate::canonical::CanonicalProduct;
use crate::dimension::Dimension;
use crate::named::NamedUnit;
use crate::rational::{Origin, Rational};
use crate::unit::{Named, Unit};
use core::marker::PhantomData;

macro_rules! prefix {
    ($(#[$meta:meta])* $name:ident, $symbol:literal, $num:expr, $den:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
        pub struct $name<U: Named>(PhantomData<U>);

        impl<U: Named> Named for $name<U> {
            const NAMED: NamedUnit = U::NAMED.with_prefix($symbol, Rational::new($num, $den));
        }

        impl<U: Named> Unit for $name<U> {
            const DIMENSION: Dimension = <Self as Named>::NAMED.dimension();
            const MAGNITUDE: Rational = <Self as Named>::NAMED.magnitude();
            const ORIGIN: Origin = None;
            const TERMS: CanonicalProduct = CanonicalProduct::of(<Self as Named>::NAMED);
            type Difference = Self;
        }
    };
}

prefix!(
    /// `10^6 U`.
    Mega, "M", 1_000_000, 1
);
prefix!(
    /// `10^3 U`.
    Kilo, "k", 1_000, 1
);
prefix!(
    /// `10^-2 U`.
    Centi, "c", 1, 100
);
prefix!(
    /// `10^-3 U`.
    Milli, "m", 1, 1_000
);
prefix!(
    /// `10^-6 U`.
    Micro, "µ", 1, 1_000_000
);
prefix!(
    /// `10^-9 U`.
    Nano, "n", 1, 1_000_000_000
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Inch, Meter};
    use crate::units::mass::Gram;
    use crate::units::temperature::Kelvin;

    #[test]
    fn magnitudes() {
        assert_eq!(Kilo::<Meter>::MAGNITUDE, Rational::from_integer(1000));
        assert_eq!(Kilo::<Gram>::MAGNITUDE, Rational::ONE);
        assert_eq!(Milli::<Inch>::MAGNITUDE, Rational::new(127, 5_000_000));
        assert_eq!(Nano::<Meter>::MAGNITUDE, Rational::new(1, 1_000_000_000));
    }

    #[test]
    fn names() {
        assert_eq!(Micro::<Meter>::name(), "µm");
        assert_eq!(Centi::<Meter>::name(), "cm");
        assert_eq!(Mega::<Gram>::name(), "Mg");
    }

    #[test]
    fn prefixed_absolute_units_are_relative() {
        assert!(Kelvin::ORIGIN.is_some());
        assert_eq!(Milli::<Kelvin>::ORIGIN, None);
        assert_eq!(Milli::<Kelvin>::DIMENSION, Dimension::temperature());
    }
}
