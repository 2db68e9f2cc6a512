//! Temperature units.
//!
//! Temperature scales are *absolute* (affine) units: besides a magnitude they carry an origin, the SI value of
//! the scale's zero. Two absolute temperatures cannot be added, and their difference is a temperature *interval*
//! in the corresponding [`Relative`] unit.
//!
//! ```rust
//! use kul_core::temperature::{Celsius, DegreesFahrenheit, Kelvin, KelvinInterval};
//!
//! let fever = DegreesFahrenheit::new(100.4);
//! assert!((fever.to::<Celsius>().value() - 38.0).abs() < 1e-12);
//!
//! let rise: KelvinInterval = fever.to::<Kelvin>() - Celsius::ZERO.to::<Kelvin>();
//! assert!((rise.value() - 38.0).abs() < 1e-12);
//! ```
//!
//! The electronvolt temperature is `e / k_B` kelvin with the exact 2019 SI values of the elementary charge and the
//! Boltzmann constant.

use crate::{Dimension, Quantity, Relative};
use kul_derive::Unit;

/// Kelvin (SI base unit), absolute with its zero at absolute zero.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "K", dimension = Dimension::temperature(), origin = 0)]
pub struct Kelvin;
/// A thermodynamic temperature in kelvin.
pub type Kelvins = Quantity<Kelvin>;
/// A temperature interval in kelvin.
pub type KelvinInterval = Quantity<Relative<Kelvin>>;

/// Degree Celsius.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°C", dimension = Dimension::temperature(), origin = 27315 / 100)]
pub struct Celsius;
/// A temperature in degrees Celsius.
pub type DegreesCelsius = Quantity<Celsius>;
/// A temperature interval in degrees Celsius.
pub type CelsiusInterval = Quantity<Relative<Celsius>>;

impl Celsius {
    /// The freezing point of water.
    pub const ZERO: DegreesCelsius = DegreesCelsius::new(0.0);
}

/// Degree Fahrenheit (`5/9 K`, zero at `459.67 °R`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°F", dimension = Dimension::temperature(), magnitude = 5 / 9, origin = 45967 / 180)]
pub struct Fahrenheit;
/// A temperature in degrees Fahrenheit.
pub type DegreesFahrenheit = Quantity<Fahrenheit>;
/// A temperature interval in degrees Fahrenheit.
pub type FahrenheitInterval = Quantity<Relative<Fahrenheit>>;

/// Electronvolt temperature (`e / k_B ≈ 11604.5 K`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "eV",
    dimension = Dimension::temperature(),
    magnitude = 16021766340 / 1380649,
    origin = 0
)]
pub struct ElectronvoltTemperature;
/// A temperature in electronvolts.
pub type ElectronvoltTemperatures = Quantity<ElectronvoltTemperature>;

crate::impl_unit_conversions!(Kelvin, Celsius, Fahrenheit, ElectronvoltTemperature);
crate::impl_unit_conversions!(Relative<Kelvin>, Relative<Celsius>, Relative<Fahrenheit>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_absolute, Rational, Unit};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn origins() {
        assert_eq!(Kelvin::ORIGIN, Some(Rational::ZERO));
        assert_eq!(Celsius::ORIGIN, Some(Rational::new(27315, 100)));
        assert_eq!(Relative::<Celsius>::ORIGIN, None);
        assert!(is_absolute::<ElectronvoltTemperature>());
    }

    #[test]
    fn absolute_zero() {
        let zero = Kelvins::new(0.0);
        let c: DegreesCelsius = zero.into();
        let f: DegreesFahrenheit = zero.into();
        assert_abs_diff_eq!(c.value(), -273.15, epsilon = 1e-12);
        assert_abs_diff_eq!(f.value(), -459.67, epsilon = 1e-12);
    }

    #[test]
    fn freezing_point() {
        let f: DegreesFahrenheit = Celsius::ZERO.into();
        assert_abs_diff_eq!(f.value(), 32.0, epsilon = 1e-12);
    }

    #[test]
    fn electronvolts() {
        let k: Kelvins = ElectronvoltTemperatures::new(15.0e3).into();
        assert_relative_eq!(k.value(), 1.74067771800000012e+08, max_relative = 1e-7);
    }

    #[test]
    fn intervals() {
        let delta = DegreesCelsius::new(25.0) - DegreesCelsius::new(20.0);
        let delta: CelsiusInterval = delta;
        let in_f: FahrenheitInterval = delta.into();
        assert_abs_diff_eq!(in_f.value(), 9.0, epsilon = 1e-12);
        let in_k: KelvinInterval = delta.into();
        assert_abs_diff_eq!(in_k.value(), 5.0, epsilon = 1e-12);
        assert_eq!(in_k.to_string(), "5 K");
    }
}
