//! Core unit algebra for exact, dimension-checked physical quantities.
//!
//! `kul-core` lets numeric values carry a physical unit so that dimensionally inconsistent operations are rejected
//! and conversions, including affine ones such as temperature scales, are applied exactly. It offers two modes that
//! share one algebra:
//!
//! - **Static**: the unit is a zero-sized type implementing [`Unit`] and a value is a [`Quantity<U, T>`]. All
//!   dimension, magnitude and naming bookkeeping happens in associated constants, so a quantity is exactly its
//!   numeric payload at run time and every mistake is a compile error.
//! - **Dynamic**: the unit is a runtime [`DynUnit`] and a value is a [`DynQuantity`]. The same checks happen on each
//!   call and are reported as [`UnitError`]s.
//!
//! Both modes reduce composite units to a canonical product of `(base, exponent)` terms, merge terms with the same
//! base, drop zero exponents and collapse trivial products. Unit magnitudes and origins are exact [`Rational`]s and
//! are only rounded to floating point when a conversion is applied.
//!
//! # Quick start
//!
//! ```rust
//! use kul_core::length::{Kilometers, Meter};
//! use kul_core::temperature::{Celsius, DegreesFahrenheit};
//!
//! let m = Kilometers::new(1.25).to::<Meter>();
//! assert!((m.value() - 1250.0).abs() < 1e-12);
//!
//! let c = DegreesFahrenheit::new(100.4).to::<Celsius>();
//! assert!((c.value() - 38.0).abs() < 1e-12);
//! ```
//!
//! Products and quotients build composite units; names follow the canonical form:
//!
//! ```rust
//! use kul_core::derived::{Joule, Watts};
//! use kul_core::length::Meters;
//! use kul_core::time::Seconds;
//!
//! let v = Meters::new(1.0) / Seconds::new(2.0);
//! assert_eq!(v.to_string(), "0.5 m * s^-1");
//!
//! let e = (Watts::new(1.0) * Seconds::new(2.0)).to::<Joule>();
//! assert_eq!(e.value(), 2.0);
//! ```
//!
//! Mixing dimensions does not compile:
//!
//! ```compile_fail
//! use kul_core::length::Meters;
//! use kul_core::time::Seconds;
//!
//! let _ = Meters::new(1.0) + Seconds::new(1.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `kul-core` without `std`. An allocator is still required for unit names and
//! the dynamic engine. Floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: `Serialize`/`Deserialize` for [`Quantity`] (raw value), [`Rational`] and [`Dimension`];
//!   `Serialize` for [`DynUnit`] and [`DynQuantity`] (value plus unit name); the [`serde_with_unit`] helper.
//!
//! # Panics and errors
//!
//! Static operations never fail at run time. Dynamic operations return [`UnitResult`]. Constructing a
//! [`Rational`] with a zero denominator panics, which in a `const` context is a compile error.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod canonical;
mod conversion;
mod dimension;
mod dyn_quantity;
mod dynamic;
mod error;
mod functions;
mod macros;
mod named;
mod quantity;
mod rational;
mod unit;

pub mod prefix;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use canonical::{CanonicalProduct, Term, MAX_TERMS};
pub use conversion::Conversion;
pub use dimension::Dimension;
pub use dyn_quantity::DynQuantity;
pub use dynamic::{DynPower, DynProduct, DynUnit};
pub use error::{UnitError, UnitResult};
pub use functions::Real;
pub use named::NamedUnit;
pub use quantity::Quantity;
pub use rational::{origins_equal, Origin, Rational};
pub use unit::{is_absolute, units_equal, Named, Per, Power, Product, Relative, Root, Unit, Unitless};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `kul-core` so they can implement conversion traits without running into Rust's orphan
/// rules.
pub mod units;

pub use units::amount;
pub use units::derived;
pub use units::dimensionless;
pub use units::electric;
pub use units::length;
pub use units::mass;
pub use units::temperature;
pub use units::time;
pub use units::velocity;
