//! Unit types and traits.

use crate::canonical::CanonicalProduct;
use crate::dimension::Dimension;
use crate::dynamic::DynUnit;
use crate::named::NamedUnit;
use crate::rational::{origins_equal, Origin, Rational};
use alloc::string::{String, ToString};
use core::fmt::Debug;
use core::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// All information about a unit lives in associated constants, so unit types are zero-sized markers and every
/// conversion factor is folded at compile time.
///
/// * `DIMENSION` is the exponent vector over the SI base dimensions.
/// * `MAGNITUDE` is the exact size of one unit in SI base units (`Inch::MAGNITUDE == 127/5000`).
/// * `ORIGIN` is present only for absolute units (kelvin, degree Celsius) and is the SI value of the unit's zero.
///   A composite is absolute only when it collapses to a single absolute base, as `Product<Kelvin, Unitless>` does.
/// * `TERMS` is the canonical product: the simplified `(base, exponent)` list this unit denotes. It drives naming,
///   root-taking and the static/dynamic bridge.
/// * `Difference` is the unit of `a - b`: `Self` for relative named units, [`Relative<Self>`] for absolute ones, and
///   the same composite over the operands' differences for composites.
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `MAGNITUDE` is non-zero and equals `TERMS.magnitude()`; `DIMENSION` equals `TERMS.dimension()`.
/// - `ORIGIN` equals `TERMS.origin()`, so [`Unit::to_dynamic`] reports the same origin.
/// - `Difference` is never absolute.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Exponents over the SI base dimensions.
    const DIMENSION: Dimension;

    /// Size of the unit in SI base units.
    const MAGNITUDE: Rational;

    /// Affine origin, for absolute units only.
    const ORIGIN: Origin;

    /// Canonical product this unit denotes.
    const TERMS: CanonicalProduct;

    /// Unit of the difference of two quantities in this unit.
    type Difference: Unit;

    /// Printable name derived from the canonical product, e.g. `"m * s^-1"`; unitless prints as `"1"`.
    fn name() -> String {
        Self::TERMS.to_string()
    }

    /// The runtime representation of this unit.
    fn to_dynamic() -> DynUnit {
        DynUnit::from(Self::TERMS)
    }
}

/// A [`Unit`] with its own symbol, as opposed to a composite.
pub trait Named: Unit {
    /// Descriptor of this unit.
    const NAMED: NamedUnit;
}

/// Returns `true` when `A` and `B` denote the same physical unit: equal dimension, magnitude and origin.
///
/// Names are not compared, so `Per<Joule, Second>` equals `Watt`.
pub const fn units_equal<A: Unit, B: Unit>() -> bool {
    A::DIMENSION.equals(&B::DIMENSION)
        && A::MAGNITUDE.equals(&B::MAGNITUDE)
        && origins_equal(A::ORIGIN, B::ORIGIN)
}

/// Returns `true` when `U` has an origin.
pub const fn is_absolute<U: Unit>() -> bool {
    U::ORIGIN.is_some()
}

// ─────────────────────────────────────────────────────────────────────────────
// Unitless
// ─────────────────────────────────────────────────────────────────────────────

/// Zero-sized marker type for dimensionless quantities.
///
/// `Unitless` is the only unit a bare number converts into implicitly (`Quantity<Unitless>: From<f64>`). Any
/// composite whose terms cancel out, such as `Per<Meter, Meter>`, converts to it losslessly with
/// [`Quantity::to`](crate::Quantity::to).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Unitless;

impl Unit for Unitless {
    const DIMENSION: Dimension = Dimension::dimensionless();
    const MAGNITUDE: Rational = Rational::ONE;
    const ORIGIN: Origin = None;
    const TERMS: CanonicalProduct = CanonicalProduct::EMPTY;
    type Difference = Self;
}

impl Named for Unitless {
    const NAMED: NamedUnit = NamedUnit::UNITLESS;
}

// ─────────────────────────────────────────────────────────────────────────────
// Composite units
// ─────────────────────────────────────────────────────────────────────────────

/// Unit representing the product `A * B`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Product<A: Unit, B: Unit>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Product<A, B> {
    const DIMENSION: Dimension = A::DIMENSION.mul(B::DIMENSION);
    const MAGNITUDE: Rational = A::MAGNITUDE.mul(B::MAGNITUDE);
    const ORIGIN: Origin = Self::TERMS.origin();
    const TERMS: CanonicalProduct = A::TERMS.multiply(B::TERMS);
    type Difference = Product<A::Difference, B::Difference>;
}

/// Unit representing the quotient `N / D`.
///
/// `Per<Meter, Second>` is metres per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    const DIMENSION: Dimension = N::DIMENSION.div(D::DIMENSION);
    const MAGNITUDE: Rational = N::MAGNITUDE.div(D::MAGNITUDE);
    const ORIGIN: Origin = Self::TERMS.origin();
    const TERMS: CanonicalProduct = N::TERMS.divide(D::TERMS);
    type Difference = Per<N::Difference, D::Difference>;
}

/// Unit `U` raised to the integer power `E`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Power<U: Unit, const E: i32>(PhantomData<U>);

impl<U: Unit, const E: i32> Unit for Power<U, E> {
    const DIMENSION: Dimension = U::DIMENSION.pow(E);
    const MAGNITUDE: Rational = U::MAGNITUDE.pow(E);
    const ORIGIN: Origin = Self::TERMS.origin();
    const TERMS: CanonicalProduct = U::TERMS.pow(E);
    type Difference = Power<U::Difference, E>;
}

/// The `N`-th root of unit `U`.
///
/// Every exponent of `U`'s canonical product must be divisible by `N`; otherwise using this type fails to
/// compile.
///
/// ```compile_fail
/// use kul_core::{Power, Quantity, Root, Unit};
/// use kul_core::length::Meter;
///
/// // m^3 has no square root.
/// let _ = <Root<Power<Meter, 3>, 2> as Unit>::DIMENSION;
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Root<U: Unit, const N: i32>(PhantomData<U>);

impl<U: Unit, const N: i32> Unit for Root<U, N> {
    const DIMENSION: Dimension = Self::TERMS.dimension();
    const MAGNITUDE: Rational = Self::TERMS.magnitude();
    const ORIGIN: Origin = Self::TERMS.origin();
    const TERMS: CanonicalProduct = U::TERMS.root(N);
    type Difference = Root<U::Difference, N>;
}

/// Named unit `U` with its origin removed: the unit of a difference of two absolute quantities.
///
/// `Relative<Kelvin>` is a temperature interval; `Kelvin` is a point on the thermodynamic scale.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Relative<U: Named>(PhantomData<U>);

impl<U: Named> Named for Relative<U> {
    const NAMED: NamedUnit = U::NAMED.relative();
}

impl<U: Named> Unit for Relative<U> {
    const DIMENSION: Dimension = U::DIMENSION;
    const MAGNITUDE: Rational = U::MAGNITUDE;
    const ORIGIN: Origin = None;
    const TERMS: CanonicalProduct = CanonicalProduct::of(<Self as Named>::NAMED);
    type Difference = Self;
}
