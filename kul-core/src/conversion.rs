//! Affine unit conversions.
//!
//! Converting a value from one unit to another of the same dimension is the affine map
//! `x ↦ x * multiplier + offset`, with both coefficients kept exact as [`Rational`]s until the moment they are
//! applied. For static units the coefficients are an associated-constant computation and fold into a single
//! multiply-add; for runtime units [`Conversion::between`] computes them once per call.
//!
//! ```rust
//! use kul_core::Conversion;
//! use kul_core::temperature::{Celsius, Fahrenheit};
//!
//! const F_TO_C: Conversion = Conversion::of::<Fahrenheit, Celsius>();
//! assert!((F_TO_C.apply(100.4_f64) - 38.0).abs() < 1e-12);
//! ```

use crate::dynamic::DynUnit;
use crate::error::{UnitError, UnitResult};
use crate::rational::{Origin, Rational};
use crate::unit::Unit;
use num_traits::Float;

const fn origin_or_zero(origin: Origin) -> Rational {
    match origin {
        Some(origin) => origin,
        None => Rational::ZERO,
    }
}

/// Exact coefficients of `x ↦ x * multiplier + offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Conversion {
    multiplier: Rational,
    offset: Rational,
}

impl Conversion {
    /// The identity map.
    pub const IDENTITY: Self = Self {
        multiplier: Rational::ONE,
        offset: Rational::ZERO,
    };

    /// Conversion from a unit of magnitude `old_magnitude` and origin `old_origin` to one of `new_magnitude` and
    /// `new_origin`.
    ///
    /// An absent origin counts as zero; dimension and absolute/relative compatibility are the caller's concern.
    pub const fn new(old_magnitude: Rational, old_origin: Origin, new_magnitude: Rational, new_origin: Origin) -> Self {
        let old_origin = origin_or_zero(old_origin);
        let new_origin = origin_or_zero(new_origin);
        Self {
            multiplier: old_magnitude.div(new_magnitude),
            offset: old_origin.div(new_magnitude).sub(new_origin.div(new_magnitude)),
        }
    }

    /// Conversion between two static units.
    ///
    /// Static call sites ([`Quantity::to`](crate::Quantity::to)) check compatibility before using this.
    pub const fn of<Src: Unit, Dst: Unit>() -> Self {
        Self::new(Src::MAGNITUDE, Src::ORIGIN, Dst::MAGNITUDE, Dst::ORIGIN)
    }

    /// Conversion between two runtime units.
    ///
    /// # Errors
    ///
    /// - [`UnitError::DimensionMismatch`] if the dimensions differ.
    /// - [`UnitError::AffineMismatch`] if exactly one of the units is absolute.
    pub fn between(from: &DynUnit, to: &DynUnit) -> UnitResult<Self> {
        if from.dimension() != to.dimension() {
            log::debug!("rejecting conversion from {from} to {to}: dimensions differ");
            return Err(UnitError::DimensionMismatch {
                from: from.name(),
                to: to.name(),
            });
        }
        if from.is_absolute() != to.is_absolute() {
            log::debug!("rejecting conversion from {from} to {to}: absolute/relative mismatch");
            return Err(UnitError::AffineMismatch {
                from: from.name(),
                to: to.name(),
            });
        }
        let conversion = Self::new(from.magnitude(), from.origin(), to.magnitude(), to.origin());
        log::trace!(
            "conversion {from} -> {to}: x * {} + {}",
            conversion.multiplier,
            conversion.offset
        );
        Ok(conversion)
    }

    /// Scale factor.
    pub const fn multiplier(&self) -> Rational {
        self.multiplier
    }

    /// Additive offset, in destination units.
    pub const fn offset(&self) -> Rational {
        self.offset
    }

    /// Returns `true` for the identity map.
    pub const fn is_identity(&self) -> bool {
        self.multiplier.equals(&Rational::ONE) && self.offset.is_zero()
    }

    /// The reverse conversion.
    pub const fn inverse(&self) -> Self {
        let multiplier = self.multiplier.inverse();
        Self {
            multiplier,
            offset: Rational::ZERO.sub(self.offset.mul(multiplier)),
        }
    }

    /// Applies the map to `x`.
    #[inline]
    pub fn apply<T: Float>(&self, x: T) -> T {
        let scaled = if self.multiplier.equals(&Rational::ONE) {
            x
        } else {
            x * self.multiplier.convert_to::<T>()
        };
        if self.offset.is_zero() {
            scaled
        } else {
            scaled + self.offset.convert_to::<T>()
        }
    }
}

impl Default for Conversion {
    fn default() -> Self {
        Self::IDENTITY
    }
}
