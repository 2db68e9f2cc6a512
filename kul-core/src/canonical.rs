//! Compile-time canonical products.
//!
//! Every static unit exposes its normal form as a [`CanonicalProduct`] constant: an ordered list of
//! `(base, exponent)` [`Term`]s with at most one term per distinct base and no unitless terms. All operations are
//! `const fn`, so composing static units costs nothing at run time; a failure (non-divisible root, exceeding
//! [`MAX_TERMS`]) is reported as an error while evaluating the associated constant, which fails the build.
//!
//! ```rust
//! use kul_core::{CanonicalProduct, Dimension, NamedUnit, Rational};
//!
//! const M: NamedUnit = NamedUnit::new("m", Dimension::length(), Rational::ONE, None);
//! const S: NamedUnit = NamedUnit::new("s", Dimension::time(), Rational::ONE, None);
//!
//! const SPEED: CanonicalProduct = CanonicalProduct::of(M).divide(CanonicalProduct::of(S));
//! const AREA: CanonicalProduct = CanonicalProduct::of(M).pow(2);
//!
//! assert_eq!(SPEED.to_string(), "m * s^-1");
//! assert_eq!(AREA.root(2), CanonicalProduct::of(M));
//! ```

use crate::dimension::Dimension;
use crate::named::NamedUnit;
use crate::rational::{Origin, Rational};
use core::fmt;

/// Maximum number of distinct bases a static composite unit may mention.
pub const MAX_TERMS: usize = 16;

/// A base unit raised to an integer power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    base: NamedUnit,
    exponent: i32,
}

impl Term {
    /// `base^exponent`.
    pub const fn new(base: NamedUnit, exponent: i32) -> Self {
        Self { base, exponent }
    }

    /// The base unit.
    pub const fn base(&self) -> NamedUnit {
        self.base
    }

    /// The exponent.
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// `base.dimension ^ exponent`.
    pub const fn dimension(&self) -> Dimension {
        self.base.dimension().pow(self.exponent)
    }

    /// `base.magnitude ^ exponent`.
    pub const fn magnitude(&self) -> Rational {
        self.base.magnitude().pow(self.exponent)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 1 {
            write!(f, "{}", self.base)
        } else {
            write!(f, "{}^{}", self.base, self.exponent)
        }
    }
}

const FILLER: Term = Term::new(NamedUnit::UNITLESS, 0);

/// Ordered, deduplicated product of [`Term`]s.
///
/// Slots past `len` are unused filler; equality and formatting only look at [`CanonicalProduct::terms`].
#[derive(Clone, Copy, Debug)]
pub struct CanonicalProduct {
    terms: [Term; MAX_TERMS],
    len: usize,
}

impl CanonicalProduct {
    /// The empty product, i.e. the unitless unit.
    pub const EMPTY: Self = Self {
        terms: [FILLER; MAX_TERMS],
        len: 0,
    };

    /// Lifts a single named unit into canonical form. The unitless unit becomes the empty product.
    pub const fn of(unit: NamedUnit) -> Self {
        Self::EMPTY.multiply_with(unit, 1)
    }

    /// The live terms.
    pub const fn terms(&self) -> &[Term] {
        self.terms.split_at(self.len).0
    }

    /// Number of live terms.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for the unitless product.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Merges `base^exponent` into the product.
    ///
    /// If a term with the same base exists its exponent is increased, otherwise the term is appended. Unitless
    /// bases are ignored. Zero exponents are kept until [`simplify`](Self::simplify).
    ///
    /// # Panics
    ///
    /// Panics if a new term would exceed [`MAX_TERMS`].
    pub const fn multiply_with(self, base: NamedUnit, exponent: i32) -> Self {
        if base.is_unitless() {
            return self;
        }
        let mut terms = self.terms;
        let mut i = 0;
        while i < self.len {
            if terms[i].base.same_as(&base) {
                terms[i] = Term::new(base, terms[i].exponent + exponent);
                return Self { terms, len: self.len };
            }
            i += 1;
        }
        if self.len == MAX_TERMS {
            panic!("too many distinct base units in one composite unit");
        }
        terms[self.len] = Term::new(base, exponent);
        Self {
            terms,
            len: self.len + 1,
        }
    }

    /// Merges `base^-exponent` into the product.
    pub const fn divide_by(self, base: NamedUnit, exponent: i32) -> Self {
        self.multiply_with(base, -exponent)
    }

    /// Drops every term whose exponent is zero.
    pub const fn simplify(self) -> Self {
        let mut out = Self::EMPTY;
        let mut i = 0;
        while i < self.len {
            let term = self.terms[i];
            if term.exponent != 0 && !term.base.is_unitless() {
                out.terms[out.len] = term;
                out.len += 1;
            }
            i += 1;
        }
        out
    }

    /// Simplified product of `self` and `rhs`.
    pub const fn multiply(self, rhs: Self) -> Self {
        let mut out = self;
        let mut i = 0;
        while i < rhs.len {
            out = out.multiply_with(rhs.terms[i].base, rhs.terms[i].exponent);
            i += 1;
        }
        out.simplify()
    }

    /// Simplified quotient of `self` by `rhs`.
    pub const fn divide(self, rhs: Self) -> Self {
        let mut out = self;
        let mut i = 0;
        while i < rhs.len {
            out = out.divide_by(rhs.terms[i].base, rhs.terms[i].exponent);
            i += 1;
        }
        out.simplify()
    }

    /// Every exponent multiplied by `exponent`.
    pub const fn pow(self, exponent: i32) -> Self {
        let mut out = self;
        let mut i = 0;
        while i < out.len {
            out.terms[i].exponent *= exponent;
            i += 1;
        }
        out.simplify()
    }

    /// Every exponent divided by `degree`.
    ///
    /// # Panics
    ///
    /// Panics if `degree` is zero or does not divide every exponent.
    pub const fn root(self, degree: i32) -> Self {
        if degree == 0 {
            panic!("root degree must be non-zero");
        }
        let mut out = self;
        let mut i = 0;
        while i < out.len {
            if out.terms[i].exponent % degree != 0 {
                panic!("taking root of non-divisible power");
            }
            out.terms[i].exponent /= degree;
            i += 1;
        }
        out.simplify()
    }

    /// Product of the term dimensions.
    pub const fn dimension(&self) -> Dimension {
        let mut out = Dimension::dimensionless();
        let mut i = 0;
        while i < self.len {
            out = out.mul(self.terms[i].dimension());
            i += 1;
        }
        out
    }

    /// Product of the term magnitudes.
    pub const fn magnitude(&self) -> Rational {
        let mut out = Rational::ONE;
        let mut i = 0;
        while i < self.len {
            out = out.mul(self.terms[i].magnitude());
            i += 1;
        }
        out
    }

    /// The bare named unit, if the product is a single term with exponent one.
    pub const fn as_named(&self) -> Option<NamedUnit> {
        if self.len == 1 && self.terms[0].exponent == 1 {
            Some(self.terms[0].base)
        } else {
            None
        }
    }

    /// Origin of the product: the base's origin when the product is a bare named unit, otherwise none.
    pub const fn origin(&self) -> Origin {
        match self.as_named() {
            Some(named) => named.origin(),
            None => None,
        }
    }

    /// `const` structural equality: same terms in the same order.
    pub const fn equals(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut i = 0;
        while i < self.len {
            let a = self.terms[i];
            let b = other.terms[i];
            if a.exponent != b.exponent || !a.base.same_as(&b.base) {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl Default for CanonicalProduct {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for CanonicalProduct {
    fn eq(&self, other: &Self) -> bool {
        self.terms() == other.terms()
    }
}

impl Eq for CanonicalProduct {}

/// Terms joined by ` * `; the empty product prints as `1`.
impl fmt::Display for CanonicalProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.terms().iter();
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
