//! Dimension vectors over the seven SI base dimensions.
//!
//! A [`Dimension`] is the category that distinguishes a metre from a second. Dimensions form an abelian group under
//! multiplication: `*` adds exponents, `/` subtracts them, [`Dimension::pow`] scales them, and
//! [`Dimension::dimensionless`] is the identity.
//!
//! ```rust
//! use kul_core::Dimension;
//!
//! let energy = Dimension::mass() * Dimension::length().pow(2) / Dimension::time().pow(2);
//! assert_eq!(energy, Dimension::new(-2, 2, 1, 0, 0, 0, 0));
//! ```

use core::fmt;
use core::ops::{Div, Mul};

/// Exponents of time, length, mass, electric current, temperature, amount of substance and luminous intensity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    time: i32,
    length: i32,
    mass: i32,
    electric_current: i32,
    temperature: i32,
    amount_of_substance: i32,
    luminous_intensity: i32,
}

impl Dimension {
    /// Builds a dimension from its seven exponents, in SI base order.
    pub const fn new(
        time: i32,
        length: i32,
        mass: i32,
        electric_current: i32,
        temperature: i32,
        amount_of_substance: i32,
        luminous_intensity: i32,
    ) -> Self {
        Self {
            time,
            length,
            mass,
            electric_current,
            temperature,
            amount_of_substance,
            luminous_intensity,
        }
    }

    /// All exponents zero.
    pub const fn dimensionless() -> Self {
        Self::new(0, 0, 0, 0, 0, 0, 0)
    }

    /// Time (T).
    pub const fn time() -> Self {
        Self::new(1, 0, 0, 0, 0, 0, 0)
    }

    /// Length (L).
    pub const fn length() -> Self {
        Self::new(0, 1, 0, 0, 0, 0, 0)
    }

    /// Mass (M).
    pub const fn mass() -> Self {
        Self::new(0, 0, 1, 0, 0, 0, 0)
    }

    /// Electric current (I).
    pub const fn electric_current() -> Self {
        Self::new(0, 0, 0, 1, 0, 0, 0)
    }

    /// Thermodynamic temperature (Θ).
    pub const fn temperature() -> Self {
        Self::new(0, 0, 0, 0, 1, 0, 0)
    }

    /// Amount of substance (N).
    pub const fn amount_of_substance() -> Self {
        Self::new(0, 0, 0, 0, 0, 1, 0)
    }

    /// Luminous intensity (J).
    pub const fn luminous_intensity() -> Self {
        Self::new(0, 0, 0, 0, 0, 0, 1)
    }

    /// Exponent of time.
    pub const fn time_exponent(&self) -> i32 {
        self.time
    }

    /// Exponent of length.
    pub const fn length_exponent(&self) -> i32 {
        self.length
    }

    /// Exponent of mass.
    pub const fn mass_exponent(&self) -> i32 {
        self.mass
    }

    /// Exponent of electric current.
    pub const fn electric_current_exponent(&self) -> i32 {
        self.electric_current
    }

    /// Exponent of temperature.
    pub const fn temperature_exponent(&self) -> i32 {
        self.temperature
    }

    /// Exponent of amount of substance.
    pub const fn amount_of_substance_exponent(&self) -> i32 {
        self.amount_of_substance
    }

    /// Exponent of luminous intensity.
    pub const fn luminous_intensity_exponent(&self) -> i32 {
        self.luminous_intensity
    }

    const fn exponents(&self) -> [i32; 7] {
        [
            self.time,
            self.length,
            self.mass,
            self.electric_current,
            self.temperature,
            self.amount_of_substance,
            self.luminous_intensity,
        ]
    }

    /// Component-wise sum of exponents.
    pub const fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.time + rhs.time,
            self.length + rhs.length,
            self.mass + rhs.mass,
            self.electric_current + rhs.electric_current,
            self.temperature + rhs.temperature,
            self.amount_of_substance + rhs.amount_of_substance,
            self.luminous_intensity + rhs.luminous_intensity,
        )
    }

    /// Component-wise difference of exponents.
    pub const fn div(self, rhs: Self) -> Self {
        Self::new(
            self.time - rhs.time,
            self.length - rhs.length,
            self.mass - rhs.mass,
            self.electric_current - rhs.electric_current,
            self.temperature - rhs.temperature,
            self.amount_of_substance - rhs.amount_of_substance,
            self.luminous_intensity - rhs.luminous_intensity,
        )
    }

    /// Every exponent multiplied by `exponent`.
    pub const fn pow(self, exponent: i32) -> Self {
        Self::new(
            self.time * exponent,
            self.length * exponent,
            self.mass * exponent,
            self.electric_current * exponent,
            self.temperature * exponent,
            self.amount_of_substance * exponent,
            self.luminous_intensity * exponent,
        )
    }

    /// `const` equality.
    pub const fn equals(&self, other: &Self) -> bool {
        let a = self.exponents();
        let b = other.exponents();
        let mut i = 0;
        while i < a.len() {
            if a[i] != b[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Returns `true` when every exponent is zero.
    pub const fn is_dimensionless(&self) -> bool {
        self.equals(&Self::dimensionless())
    }
}

impl Mul for Dimension {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Dimension::mul(self, rhs)
    }
}

impl Div for Dimension {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Dimension::div(self, rhs)
    }
}

/// Formats as a product of SI base symbols, e.g. `kg m^2 s^-2`; the dimensionless vector prints as `1`.
impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SYMBOLS: [&str; 7] = ["s", "m", "kg", "A", "K", "mol", "cd"];
        // Conventional SI ordering: mass, length, time, then the rest.
        const ORDER: [usize; 7] = [2, 1, 0, 3, 4, 5, 6];
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let exponents = self.exponents();
        let mut first = true;
        for index in ORDER {
            let exponent = exponents[index];
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            if exponent == 1 {
                f.write_str(SYMBOLS[index])?;
            } else {
                write!(f, "{}^{}", SYMBOLS[index], exponent)?;
            }
        }
        Ok(())
    }
}
