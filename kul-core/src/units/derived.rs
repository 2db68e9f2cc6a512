//! SI derived units with special names.
//!
//! Each of these is a named unit of magnitude one, so it is [equal](crate::units_equal) to the product of base
//! units it abbreviates and converts to it without any arithmetic:
//!
//! ```rust
//! use kul_core::derived::{Joule, Watts};
//! use kul_core::time::Seconds;
//!
//! let energy = (Watts::new(1.0) * Seconds::new(2.0)).to::<Joule>();
//! assert_eq!(energy.value(), 2.0);
//! assert_eq!(energy.to_string(), "2 J");
//! ```

use crate::prefix::{Kilo, Mega};
use crate::{Dimension, Quantity};
use kul_derive::Unit;

/// Hertz (`s^-1`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Hz", dimension = Dimension::new(-1, 0, 0, 0, 0, 0, 0))]
pub struct Hertz;
/// A frequency in hertz.
pub type Hertzes = Quantity<Hertz>;

/// Newton (`kg m s^-2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "N", dimension = Dimension::new(-2, 1, 1, 0, 0, 0, 0))]
pub struct Newton;
/// A force in newtons.
pub type Newtons = Quantity<Newton>;

/// Pascal (`kg m^-1 s^-2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Pa", dimension = Dimension::new(-2, -1, 1, 0, 0, 0, 0))]
pub struct Pascal;
/// A pressure in pascals.
pub type Pascals = Quantity<Pascal>;

/// Joule (`kg m^2 s^-2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "J", dimension = Dimension::new(-2, 2, 1, 0, 0, 0, 0))]
pub struct Joule;
/// An energy in joules.
pub type Joules = Quantity<Joule>;

/// Watt (`kg m^2 s^-3`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "W", dimension = Dimension::new(-3, 2, 1, 0, 0, 0, 0))]
pub struct Watt;
/// A power in watts.
pub type Watts = Quantity<Watt>;

/// Kilowatts.
pub type Kilowatt = Kilo<Watt>;
/// A power in kilowatts.
pub type Kilowatts = Quantity<Kilowatt>;

/// Megawatts.
pub type Megawatt = Mega<Watt>;
/// A power in megawatts.
pub type Megawatts = Quantity<Megawatt>;

crate::impl_unit_conversions!(Watt, Kilowatt, Megawatt);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Meter, Meters};
    use crate::mass::{Kilogram, Kilograms};
    use crate::time::{Hour, Hours, Second, Seconds};
    use crate::{units_equal, Per, Power, Product, Unit};
    use approx::assert_abs_diff_eq;

    #[test]
    fn special_names_equal_their_definitions() {
        assert!(units_equal::<Newton, Per<Product<Kilogram, Meter>, Power<Second, 2>>>());
        assert!(units_equal::<Joule, Product<Newton, Meter>>());
        assert!(units_equal::<Watt, Per<Joule, Second>>());
        assert!(units_equal::<Pascal, Per<Newton, Power<Meter, 2>>>());
        assert!(units_equal::<Hertz, Per<crate::Unitless, Second>>());
    }

    #[test]
    fn force_times_distance() {
        let force = Kilograms::new(2.0) * Meters::new(3.0) / (Seconds::new(1.0) * Seconds::new(1.0));
        let force: Newtons = force.to();
        assert_eq!(force.value(), 6.0);
        let work: Joules = (force * Meters::new(2.0)).to();
        assert_eq!(work.value(), 12.0);
    }

    #[test]
    fn kilowatt_hours() {
        let energy = Kilowatts::new(1.0) * Hours::new(1.0);
        assert_eq!(<Product<Kilowatt, Hour> as Unit>::name(), "kW * h");
        let joules: Joules = energy.to();
        assert_abs_diff_eq!(joules.value(), 3.6e6, epsilon = 1e-6);
    }

    #[test]
    fn named_units_print_their_symbol() {
        assert_eq!(Pascals::new(101_325.0).to_string(), "101325 Pa");
        assert_eq!(Megawatt::name(), "MW");
    }
}
