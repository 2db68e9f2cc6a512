//! Length units.
//!
//! The SI metre is the scaling unit for this dimension. Imperial units follow the international definitions: the
//! inch is exactly `0.0254 m` and the foot is twelve inches.
//!
//! ```rust
//! use kul_core::length::{Inch, Micrometer};
//! use kul_core::prefix::Milli;
//! use kul_core::Quantity;
//!
//! // One thou (a thousandth of an inch).
//! let thou = Quantity::<Milli<Inch>>::new(1.0);
//! assert!((thou.to::<Micrometer>().value() - 25.4).abs() < 1e-12);
//! ```

use crate::prefix::{Centi, Kilo, Micro, Milli};
use crate::{Dimension, Power, Quantity};
use kul_derive::Unit;

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = Dimension::length())]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters = Quantity<Meter>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

/// Kilometres.
pub type Kilometer = Kilo<Meter>;
/// A quantity measured in kilometres.
pub type Kilometers = Quantity<Kilometer>;
/// One kilometre.
pub const KM: Kilometers = Kilometers::new(1.0);

/// Centimetres.
pub type Centimeter = Centi<Meter>;
/// A quantity measured in centimetres.
pub type Centimeters = Quantity<Centimeter>;

/// Millimetres.
pub type Millimeter = Milli<Meter>;
/// A quantity measured in millimetres.
pub type Millimeters = Quantity<Millimeter>;

/// Micrometres.
pub type Micrometer = Micro<Meter>;
/// A quantity measured in micrometres.
pub type Micrometers = Quantity<Micrometer>;

/// International inch (`0.0254 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", dimension = Dimension::length(), magnitude = 254 / 10000)]
pub struct Inch;
/// A quantity measured in inches.
pub type Inches = Quantity<Inch>;

/// International foot (`0.3048 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", dimension = Dimension::length(), magnitude = 3048 / 10000)]
pub struct Foot;
/// A quantity measured in feet.
pub type Feet = Quantity<Foot>;

/// Square metre.
pub type SquareMeter = Power<Meter, 2>;
/// A quantity measured in square metres.
pub type SquareMeters = Quantity<SquareMeter>;

/// Cubic metre.
pub type CubicMeter = Power<Meter, 3>;
/// A quantity measured in cubic metres.
pub type CubicMeters = Quantity<CubicMeter>;

crate::impl_unit_conversions!(Meter, Kilometer, Centimeter, Millimeter, Micrometer, Inch, Foot);
