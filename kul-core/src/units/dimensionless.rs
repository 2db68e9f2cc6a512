//! Dimensionless units.
//!
//! [`Radian`] and [`Percent`] have the empty dimension but keep their own symbols, so `Quantity<Radian>` and
//! `Quantity<Percent>` are distinct types from `Quantity<Unitless>`. Trigonometric functions are only defined on
//! radians.
//!
//! ```rust
//! use kul_core::dimensionless::Percents;
//! use kul_core::{Quantity, Unitless};
//!
//! let ratio: Quantity<Unitless> = Percents::new(80.0).into();
//! assert!((ratio.value() - 0.8).abs() < 1e-15);
//! ```

use crate::{Dimension, Quantity, Unitless};
use kul_derive::Unit;

/// Radian, the SI unit of plane angle.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad", dimension = Dimension::dimensionless())]
pub struct Radian;
/// An angle in radians.
pub type Radians = Quantity<Radian>;

/// Percent (`1/100`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "%", dimension = Dimension::dimensionless(), magnitude = 1 / 100)]
pub struct Percent;
/// A quantity in percent.
pub type Percents = Quantity<Percent>;

crate::impl_unit_conversions!(Unitless, Radian, Percent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Meters;
    use crate::{units_equal, Unit};

    #[test]
    fn radian_is_not_unitless_by_name() {
        assert!(units_equal::<Radian, Unitless>());
        assert_ne!(Radian::TERMS, Unitless::TERMS);
        assert_eq!(Radians::new(1.5).to_string(), "1.5 rad");
    }

    #[test]
    fn percent() {
        let p: Percents = Quantity::<Unitless>::new(0.25).into();
        assert_eq!(p.value(), 25.0);
        assert_eq!(p.to_string(), "25 %");
    }

    #[test]
    fn display_unitless() {
        let u: Quantity<Unitless> = Quantity::new(123.456);
        assert_eq!(format!("{}", u), "123.456");
    }

    #[test]
    fn cancelled_lengths_are_unitless() {
        let ratio = Meters::new(3.0) / Meters::new(4.0);
        let u: Quantity<Unitless> = ratio.to();
        assert_eq!(u.value(), 0.75);
        let p: Percents = u.into();
        assert_eq!(p.value(), 75.0);
    }
}
