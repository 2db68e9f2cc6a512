//! Macros for unit conversions.

/// Generates `From` implementations in both directions between every pair of the listed units.
///
/// The units must share a dimension and must all be absolute or all be relative; anything else fails to compile
/// through [`Quantity::to`](crate::Quantity::to). A unit must not be listed twice.
///
/// ```rust
/// use kul_core::length::{Feet, Inches};
///
/// let foot: Feet = Inches::new(12.0).into();
/// assert!((foot.value() - 1.0).abs() < 1e-12);
/// ```
#[macro_export]
macro_rules! impl_unit_conversions {
    ($unit:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<$crate::Quantity<$first>> for $crate::Quantity<$rest> {
                fn from(value: $crate::Quantity<$first>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl From<$crate::Quantity<$rest>> for $crate::Quantity<$first> {
                fn from(value: $crate::Quantity<$rest>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        $crate::impl_unit_conversions!($($rest),+);
    };
}
