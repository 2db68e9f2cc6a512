//! Runtime products of powers.

use super::{DynPower, DynUnit};
use crate::dimension::Dimension;
use crate::named::NamedUnit;
use crate::rational::{Origin, Rational};
use alloc::vec::Vec;
use core::fmt;

/// Ordered product of [`DynPower`] terms with at most one term per base.
///
/// A product under construction may hold zero exponents; [`DynProduct::simplify`] removes them and collapses the
/// result to the smallest [`DynUnit`] variant. Unitless bases are never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DynProduct {
    terms: Vec<DynPower>,
}

impl DynProduct {
    /// The empty product.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored terms, in insertion order.
    pub fn terms(&self) -> &[DynPower] {
        &self.terms
    }

    /// Merges `base^exponent`: bumps the exponent of an existing term with the same base, or appends a new term.
    ///
    /// # Panics
    ///
    /// Panics if the merged exponent leaves the `i32` range.
    pub fn merge(&mut self, base: NamedUnit, exponent: i32) {
        if base.is_unitless() {
            return;
        }
        match self.terms.iter_mut().find(|term| term.base() == base) {
            Some(existing) => match existing.exponent().checked_add(exponent) {
                Some(sum) => *existing = DynPower::new(base, sum),
                None => panic!("exponent of `{base}` overflows"),
            },
            None => self.terms.push(DynPower::new(base, exponent)),
        }
    }

    /// Multiplies any unit into the product, term by term.
    pub fn multiply_with(&mut self, unit: &DynUnit) {
        match unit {
            DynUnit::Named(named) => self.merge(*named, 1),
            DynUnit::Power(power) => self.merge(power.base(), power.exponent()),
            DynUnit::Product(product) => {
                for term in &product.terms {
                    self.merge(term.base(), term.exponent());
                }
            }
        }
    }

    /// Divides any unit out of the product, term by term.
    ///
    /// # Panics
    ///
    /// Panics if an exponent leaves the `i32` range.
    pub fn divide_by(&mut self, unit: &DynUnit) {
        match unit {
            DynUnit::Named(named) => self.merge(*named, -1),
            DynUnit::Power(power) => self.merge(power.base(), negated(power)),
            DynUnit::Product(product) => {
                for term in &product.terms {
                    self.merge(term.base(), negated(term));
                }
            }
        }
    }

    /// Drops zero exponents, then collapses: no terms becomes unitless, one term becomes that term.
    pub fn simplify(&self) -> DynUnit {
        let mut kept: Vec<DynPower> = self
            .terms
            .iter()
            .filter(|term| term.exponent() != 0 && !term.base().is_unitless())
            .copied()
            .collect();
        match kept.len() {
            0 => DynUnit::Named(NamedUnit::UNITLESS),
            1 => kept.remove(0).simplify(),
            _ => DynUnit::Product(Self { terms: kept }),
        }
    }

    /// Origin of the single remaining base when the product reduces to it, otherwise none.
    pub fn origin(&self) -> Origin {
        let mut live = self
            .terms
            .iter()
            .filter(|term| term.exponent() != 0 && !term.base().is_unitless());
        match (live.next(), live.next()) {
            (Some(term), None) if term.exponent() == 1 => term.base().origin(),
            _ => None,
        }
    }

    /// Product of the term dimensions.
    pub fn dimension(&self) -> Dimension {
        self.terms
            .iter()
            .fold(Dimension::dimensionless(), |acc, term| acc * term.dimension())
    }

    /// Product of the term magnitudes.
    pub fn magnitude(&self) -> Rational {
        self.terms
            .iter()
            .fold(Rational::ONE, |acc, term| acc * term.magnitude())
    }
}

fn negated(term: &DynPower) -> i32 {
    match term.exponent().checked_neg() {
        Some(exponent) => exponent,
        None => panic!("exponent of `{}` overflows", term.base()),
    }
}

impl FromIterator<DynPower> for DynProduct {
    fn from_iter<I: IntoIterator<Item = DynPower>>(iter: I) -> Self {
        let mut product = Self::new();
        for term in iter {
            product.merge(term.base(), term.exponent());
        }
        product
    }
}

/// Terms joined by ` * `; the empty product prints as `1`.
impl fmt::Display for DynProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.terms.iter();
        match terms.next() {
            None => f.write_str("1"),
            Some(first) => {
                write!(f, "{first}")?;
                for term in terms {
                    write!(f, " * {term}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: NamedUnit = NamedUnit::new("m", Dimension::length(), Rational::ONE, None);
    const S: NamedUnit = NamedUnit::new("s", Dimension::time(), Rational::ONE, None);

    #[test]
    fn merge_accumulates_exponents() {
        let mut p = DynProduct::new();
        p.multiply_with(&DynUnit::Power(DynPower::new(M, 2)));
        p.multiply_with(&DynUnit::Named(S));
        p.multiply_with(&DynUnit::Power(DynPower::new(M, 3)));
        assert_eq!(p.terms(), &[DynPower::new(M, 5), DynPower::new(S, 1)]);
        assert_eq!(p.to_string(), "m^5 * s");
    }

    #[test]
    fn product_absorbs_product() {
        let speed: DynProduct = [DynPower::new(M, 1), DynPower::new(S, -1)].into_iter().collect();
        let mut p = DynProduct::new();
        p.multiply_with(&DynUnit::Named(S));
        p.multiply_with(&DynUnit::Product(speed.clone()));
        p.divide_by(&DynUnit::Product(speed));
        assert_eq!(p.terms(), &[DynPower::new(S, 1), DynPower::new(M, 0)]);
        assert_eq!(p.simplify(), DynUnit::Named(S));
    }

    #[test]
    fn simplify_collapses() {
        assert_eq!(DynProduct::new().simplify(), DynUnit::Named(NamedUnit::UNITLESS));
        let square: DynProduct = [DynPower::new(M, 2)].into_iter().collect();
        assert_eq!(square.simplify(), DynUnit::Power(DynPower::new(M, 2)));
        let mut cancelled = square.clone();
        cancelled.divide_by(&DynUnit::Power(DynPower::new(M, 2)));
        assert_eq!(cancelled.simplify(), DynUnit::Named(NamedUnit::UNITLESS));
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn merge_panics_on_overflow() {
        let mut p = DynProduct::new();
        p.merge(M, i32::MAX);
        p.merge(M, 1);
    }

    #[test]
    fn unitless_terms_are_skipped() {
        let mut p = DynProduct::new();
        p.multiply_with(&DynUnit::Named(NamedUnit::UNITLESS));
        assert!(p.terms().is_empty());
        assert_eq!(p.to_string(), "1");
    }
}
