//! Velocity unit aliases (`Length / Time`).
//!
//! Velocities are pure type aliases over [`Per`]; conversions go through the underlying length and time units.
//!
//! ```rust
//! use kul_core::length::{Kilometer, Meter};
//! use kul_core::time::{Hour, Second};
//! use kul_core::velocity::{MetersPerSecond, Velocity};
//!
//! let v: Velocity<Kilometer, Hour> = Velocity::new(36.0);
//! let v: MetersPerSecond = v.to::<kul_core::Per<Meter, Second>>();
//! assert!((v.value() - 10.0).abs() < 1e-12);
//! ```

use crate::units::length::{Kilometer, Meter};
use crate::units::time::{Hour, Second};
use crate::{Per, Quantity};

/// A velocity quantity parameterized by length and time units.
pub type Velocity<L, T> = Quantity<Per<L, T>>;

/// Metres per second.
pub type MeterPerSecond = Per<Meter, Second>;
/// A velocity in metres per second.
pub type MetersPerSecond = Quantity<MeterPerSecond>;

/// Kilometres per hour.
pub type KilometerPerHour = Per<Kilometer, Hour>;
/// A velocity in kilometres per hour.
pub type KilometersPerHour = Quantity<KilometerPerHour>;

crate::impl_unit_conversions!(MeterPerSecond, KilometerPerHour);
