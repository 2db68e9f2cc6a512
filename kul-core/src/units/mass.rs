//! Mass units.
//!
//! The gram is the unprefixed unit and has magnitude `1/1000`, so that [`Kilogram`], the SI base unit, is exactly
//! `Kilo<Gram>` with magnitude one.

use crate::prefix::{Kilo, Milli};
use crate::{Dimension, Quantity};
use kul_derive::Unit;

/// Gram (`10^-3 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", dimension = Dimension::mass(), magnitude = 1 / 1000)]
pub struct Gram;
/// A quantity measured in grams.
pub type Grams = Quantity<Gram>;
/// One gram.
pub const G: Grams = Grams::new(1.0);

/// Kilogram (SI base unit).
pub type Kilogram = Kilo<Gram>;
/// A quantity measured in kilograms.
pub type Kilograms = Quantity<Kilogram>;
/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);

/// Milligram.
pub type Milligram = Milli<Gram>;
/// A quantity measured in milligrams.
pub type Milligrams = Quantity<Milligram>;

crate::impl_unit_conversions!(Gram, Kilogram, Milligram);
