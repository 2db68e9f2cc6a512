//! Error type for runtime (dynamic) unit operations.
//!
//! Static units never produce these: every mistake they can express is rejected while the program is compiled.

use alloc::string::String;

/// Result type for dynamic unit operations.
pub type UnitResult<T> = Result<T, UnitError>;

/// Error type for dynamic unit operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    /// A bare named unit was asked for a root.
    #[error("cannot take root of degree {degree} of named unit `{unit}`")]
    UnrootableUnit {
        /// Name of the unit.
        unit: String,
        /// Requested root degree.
        degree: i32,
    },

    /// A power term's exponent is not a multiple of the requested root degree.
    #[error("cannot take root of degree {degree} of `{base}^{exponent}`: exponent is not divisible")]
    NonDivisiblePower {
        /// Name of the base unit.
        base: String,
        /// Exponent of the offending term.
        exponent: i32,
        /// Requested root degree.
        degree: i32,
    },

    /// An exponent left the `i32` range while raising or rooting a unit.
    #[error("exponent of `{base}` overflows")]
    ExponentOverflow {
        /// Name of the base unit.
        base: String,
    },

    /// A root of degree zero was requested.
    #[error("root degree must be non-zero")]
    ZeroRootDegree,

    /// Conversion between units of different dimension.
    #[error("cannot convert `{from}` to `{to}`: dimensions differ")]
    DimensionMismatch {
        /// Source unit.
        from: String,
        /// Destination unit.
        to: String,
    },

    /// Conversion between an absolute (origin-bearing) unit and a relative one.
    #[error("cannot convert between absolute and relative units `{from}` and `{to}`")]
    AffineMismatch {
        /// Source unit.
        from: String,
        /// Destination unit.
        to: String,
    },

    /// Addition, subtraction or comparison of quantities whose units are not equivalent.
    #[error("operands have different units: `{lhs}` and `{rhs}`")]
    UnitMismatch {
        /// Unit of the left operand.
        lhs: String,
        /// Unit of the right operand.
        rhs: String,
    },

    /// Addition of two quantities expressed in an absolute unit.
    #[error("cannot add quantities of absolute unit `{unit}`")]
    AbsoluteAddition {
        /// The absolute unit.
        unit: String,
    },

    /// A function that only accepts dimensionless input got a dimensioned quantity.
    #[error("expected a dimensionless quantity, found `{unit}`")]
    NotDimensionless {
        /// Unit of the argument.
        unit: String,
    },

    /// A trigonometric function got a quantity that is not in radians.
    #[error("expected a quantity in radians, found `{unit}`")]
    NotAngular {
        /// Unit of the argument.
        unit: String,
    },

    /// A rational was built with a zero denominator.
    #[error("rational with zero denominator")]
    ZeroDenominator,
}
