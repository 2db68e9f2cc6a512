//! Dimension-checked physical quantities with exact unit algebra.
//!
//! `kul` is the user-facing crate in this workspace. It re-exports the full API from `kul-core` plus the predefined
//! units (SI base units, common derived units, temperature scales, customary lengths).
//!
//! A value is either a [`Quantity<U, T>`], where `U` is a zero-sized type describing the unit and every check
//! happens at compile time, or a [`DynQuantity<T>`], whose [`DynUnit`] is only known at run time and whose checks
//! return [`UnitError`]s. Both modes share one algebra: composite units reduce to a canonical product of
//! `(base, exponent)` terms, and magnitudes and origins are exact rationals.
//!
//! # Quick start
//!
//! Convert temperatures, including the affine offset:
//!
//! ```rust
//! use kul::{Celsius, Fahrenheit, Kelvins};
//!
//! let zero = Kelvins::new(0.0);
//! assert!((zero.to::<Celsius>().value() + 273.15).abs() < 1e-12);
//! assert!((zero.to::<Fahrenheit>().value() + 459.67).abs() < 1e-12);
//! ```
//!
//! Compose units with `*` and `/`:
//!
//! ```rust
//! use kul::{Joule, Meters, Seconds, Watts};
//!
//! let v = Meters::new(1.0) / Seconds::new(2.0);
//! assert_eq!(v.value(), 0.5);
//!
//! let e = (Watts::new(1.0) * Seconds::new(2.0)).to::<Joule>();
//! assert_eq!(e.value(), 2.0);
//! ```
//!
//! Work with units that are only known at run time:
//!
//! ```rust
//! use kul::{DynQuantity, Meter, Second, Unit};
//!
//! let d = DynQuantity::new(100.0, Meter::to_dynamic());
//! let t = DynQuantity::new(20.0, Second::to_dynamic());
//! assert_eq!((&d / &t).to_string(), "5 m * s^-1");
//! assert!(d.checked_add(&t).is_err());
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use kul::{Kilometers, Seconds};
//!
//! let _ = Kilometers::new(1.0) + Seconds::new(1.0); // cannot add different unit types
//! ```
//!
//! ```compile_fail
//! use kul::Kelvins;
//!
//! let _ = Kelvins::new(1.0) + Kelvins::new(2.0); // absolute temperatures do not add
//! ```
//!
//! ```compile_fail
//! use kul::{Celsius, KelvinInterval};
//!
//! let _ = KelvinInterval::new(1.0).to::<Celsius>(); // an interval is not a temperature
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `kul::time` (seconds, minutes, hours, days)
//! - `kul::length` (metres, inches, feet, areas)
//! - `kul::mass` (grams, kilograms)
//! - `kul::temperature` (kelvin, degrees Celsius and Fahrenheit, electronvolts)
//! - `kul::electric` (amperes, coulombs, volts)
//! - `kul::amount` (moles, candelas)
//! - `kul::dimensionless` (radians, percent)
//! - `kul::derived` (hertz, newtons, pascals, joules, watts)
//! - `kul::velocity` (`Length / Time` aliases)
//! - `kul::prefix` (`Kilo<U>`, `Milli<U>`, …)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `kul-core`.
//! - `serde`: `serde` support for quantities; static quantities serialize as the raw value.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! kul = { version = "0.1.0", default-features = false }
//! ```
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use kul_core::*;

/// Derive macro used by `kul-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit` and `crate::Named`, so it is intended for use inside `kul-core`
/// (or crates exposing the same crate-root API). Most users should not need this.
pub use kul_derive::Unit;

pub use kul_core::prefix;
pub use kul_core::units::amount;
pub use kul_core::units::derived;
pub use kul_core::units::dimensionless;
pub use kul_core::units::electric;
pub use kul_core::units::length;
pub use kul_core::units::mass;
pub use kul_core::units::temperature;
pub use kul_core::units::time;
pub use kul_core::units::velocity;

pub use kul_core::units::amount::*;
pub use kul_core::units::derived::*;
pub use kul_core::units::dimensionless::*;
pub use kul_core::units::electric::*;
pub use kul_core::units::length::*;
pub use kul_core::units::mass::*;
pub use kul_core::units::temperature::*;
pub use kul_core::units::time::*;
pub use kul_core::units::velocity::*;
