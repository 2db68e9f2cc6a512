//! Time units.
//!
//! The SI second is the scaling unit for this dimension; every other unit is an exact multiple of it. [`Day`] is
//! the civil day of `86_400 s` (leap seconds ignored).
//!
//! ```rust
//! use kul_core::time::{Hours, Second};
//!
//! let half_hour = Hours::new(0.5);
//! let seconds = half_hour.to::<Second>();
//! assert!((seconds.value() - 1800.0).abs() < 1e-12);
//! ```

use crate::prefix::{Micro, Milli, Nano};
use crate::{Dimension, Quantity};
use kul_derive::Unit;

/// Second (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = Dimension::time())]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds = Quantity<Second>;
/// One second.
pub const SEC: Seconds = Seconds::new(1.0);

/// Milliseconds.
pub type Millisecond = Milli<Second>;
/// A quantity measured in milliseconds.
pub type Milliseconds = Quantity<Millisecond>;

/// Microseconds.
pub type Microsecond = Micro<Second>;
/// A quantity measured in microseconds.
pub type Microseconds = Quantity<Microsecond>;

/// Nanoseconds.
pub type Nanosecond = Nano<Second>;
/// A quantity measured in nanoseconds.
pub type Nanoseconds = Quantity<Nanosecond>;

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", dimension = Dimension::time(), magnitude = 60)]
pub struct Minute;
/// A quantity measured in minutes.
pub type Minutes = Quantity<Minute>;
/// One minute.
pub const MIN: Minutes = Minutes::new(1.0);

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", dimension = Dimension::time(), magnitude = 3600)]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours = Quantity<Hour>;
/// One hour.
pub const HOUR: Hours = Hours::new(1.0);

/// Civil day (`86_400 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "d", dimension = Dimension::time(), magnitude = 86400)]
pub struct Day;
/// A quantity measured in days.
pub type Days = Quantity<Day>;
/// One day.
pub const DAY: Days = Days::new(1.0);

crate::impl_unit_conversions!(Second, Millisecond, Microsecond, Nanosecond, Minute, Hour, Day);
