//! Electromagnetic units.

use crate::prefix::Milli;
use crate::{Dimension, Quantity};
use kul_derive::Unit;

/// Ampere (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "A", dimension = Dimension::electric_current())]
pub struct Ampere;
/// A current in amperes.
pub type Amperes = Quantity<Ampere>;

/// Milliamperes.
pub type Milliampere = Milli<Ampere>;
/// A current in milliamperes.
pub type Milliamperes = Quantity<Milliampere>;

/// Coulomb (`A s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "C", dimension = Dimension::new(1, 0, 0, 1, 0, 0, 0))]
pub struct Coulomb;
/// A charge in coulombs.
pub type Coulombs = Quantity<Coulomb>;

/// Volt (`W A^-1`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "V", dimension = Dimension::new(-3, 2, 1, -1, 0, 0, 0))]
pub struct Volt;
/// An electric potential in volts.
pub type Volts = Quantity<Volt>;

crate::impl_unit_conversions!(Ampere, Milliampere);
