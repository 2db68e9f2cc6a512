//! Predefined unit modules grouped by dimension.
//!
//! `kul-core` ships the SI base units, a handful of derived and customary units, and the temperature scales, so that
//! conversions and formatting work out of the box without downstream crates having to fight Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`time`]: second, minute, hour, day.
//! - [`length`]: metre and its prefixes, inch, foot, area and volume aliases.
//! - [`mass`]: gram, kilogram (`Kilo<Gram>`), milligram.
//! - [`temperature`]: kelvin, degree Celsius, degree Fahrenheit, electronvolt temperature.
//! - [`electric`]: ampere, coulomb, volt.
//! - [`amount`]: mole and candela.
//! - [`dimensionless`]: radian and percent.
//! - [`derived`]: hertz, newton, pascal, joule, watt.
//! - [`velocity`]: velocity aliases (`Length / Time`) built from [`length`] and [`time`].

pub mod amount;
pub mod derived;
pub mod dimensionless;
pub mod electric;
pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;
pub mod velocity;
