//! Amount of substance and luminous intensity.

use crate::{Dimension, Quantity};
use kul_derive::Unit;

/// Mole (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mol", dimension = Dimension::amount_of_substance())]
pub struct Mole;
/// An amount of substance in moles.
pub type Moles = Quantity<Mole>;

/// Candela (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cd", dimension = Dimension::luminous_intensity())]
pub struct Candela;
/// A luminous intensity in candelas.
pub type Candelas = Quantity<Candela>;
