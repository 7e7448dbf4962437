//! Dimensional analysis over the 7 SI base quantities
//!
//! Every physical type in a model carries a dimension: a vector of
//! exponents over the SI base quantities. Two unit types are the same
//! type exactly when these vectors are equal; prefixes and scale never
//! enter the comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exponent vector over the 7 SI base quantities
///
/// - L: Length (meter)
/// - M: Mass (kilogram)
/// - T: Time (second)
/// - I: Electric current (ampere)
/// - Θ: Thermodynamic temperature (kelvin)
/// - N: Amount of substance (mole)
/// - J: Luminous intensity (candela)
///
/// Derived dimensions are products of powers:
/// - Voltage = M L² T⁻³ I⁻¹
/// - Conductance = M⁻¹ L⁻² T³ I²
/// - Concentration = N L⁻³
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimension {
    /// Length exponent [L]
    pub length: i8,
    /// Mass exponent [M]
    pub mass: i8,
    /// Time exponent [T]
    pub time: i8,
    /// Electric current exponent [I]
    pub current: i8,
    /// Temperature exponent [Θ]
    pub temperature: i8,
    /// Amount of substance exponent [N]
    pub amount: i8,
    /// Luminous intensity exponent [J]
    pub luminosity: i8,
}

impl Dimension {
    // Base dimensions

    /// Dimensionless (pure number)
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    /// Length [L] - meter
    pub const LENGTH: Self = Self::new(1, 0, 0, 0, 0, 0, 0);

    /// Mass [M] - kilogram
    pub const MASS: Self = Self::new(0, 1, 0, 0, 0, 0, 0);

    /// Time [T] - second
    pub const TIME: Self = Self::new(0, 0, 1, 0, 0, 0, 0);

    /// Electric current [I] - ampere
    pub const CURRENT: Self = Self::new(0, 0, 0, 1, 0, 0, 0);

    /// Temperature [Θ] - kelvin
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 0, 1, 0, 0);

    /// Amount of substance [N] - mole
    pub const AMOUNT: Self = Self::new(0, 0, 0, 0, 0, 1, 0);

    /// Luminous intensity [J] - candela
    pub const LUMINOSITY: Self = Self::new(0, 0, 0, 0, 0, 0, 1);

    // Derived dimensions that show up in membrane dynamics

    /// Area [L²]
    pub const AREA: Self = Self::new(2, 0, 0, 0, 0, 0, 0);

    /// Volume [L³]
    pub const VOLUME: Self = Self::new(3, 0, 0, 0, 0, 0, 0);

    /// Frequency [T⁻¹] - hertz
    pub const FREQUENCY: Self = Self::new(0, 0, -1, 0, 0, 0, 0);

    /// Force [M L T⁻²] - newton
    pub const FORCE: Self = Self::new(1, 1, -2, 0, 0, 0, 0);

    /// Pressure [M L⁻¹ T⁻²] - pascal
    pub const PRESSURE: Self = Self::new(-1, 1, -2, 0, 0, 0, 0);

    /// Energy [M L² T⁻²] - joule
    pub const ENERGY: Self = Self::new(2, 1, -2, 0, 0, 0, 0);

    /// Power [M L² T⁻³] - watt
    pub const POWER: Self = Self::new(2, 1, -3, 0, 0, 0, 0);

    /// Electric charge [T I] - coulomb
    pub const CHARGE: Self = Self::new(0, 0, 1, 1, 0, 0, 0);

    /// Voltage [M L² T⁻³ I⁻¹] - volt
    pub const VOLTAGE: Self = Self::new(2, 1, -3, -1, 0, 0, 0);

    /// Capacitance [M⁻¹ L⁻² T⁴ I²] - farad
    pub const CAPACITANCE: Self = Self::new(-2, -1, 4, 2, 0, 0, 0);

    /// Conductance [M⁻¹ L⁻² T³ I²] - siemens
    pub const CONDUCTANCE: Self = Self::new(-2, -1, 3, 2, 0, 0, 0);

    /// Resistance [M L² T⁻³ I⁻²] - ohm
    pub const RESISTANCE: Self = Self::new(2, 1, -3, -2, 0, 0, 0);

    /// Molar concentration [N L⁻³] - mol/m³
    pub const CONCENTRATION: Self = Self::new(-3, 0, 0, 0, 0, 1, 0);

    /// Create a new dimension with given exponents
    pub const fn new(
        length: i8,
        mass: i8,
        time: i8,
        current: i8,
        temperature: i8,
        amount: i8,
        luminosity: i8,
    ) -> Self {
        Self {
            length,
            mass,
            time,
            current,
            temperature,
            amount,
            luminosity,
        }
    }

    /// Multiply dimensions (add exponents)
    ///
    /// Used when multiplying quantities: [A] × [B] = [A × B].
    /// Exponents saturate at the `i8` bounds; use [`checked_mul`](Self::checked_mul)
    /// where saturation must be detected instead.
    pub const fn mul(&self, other: &Dimension) -> Dimension {
        Dimension {
            length: self.length.saturating_add(other.length),
            mass: self.mass.saturating_add(other.mass),
            time: self.time.saturating_add(other.time),
            current: self.current.saturating_add(other.current),
            temperature: self.temperature.saturating_add(other.temperature),
            amount: self.amount.saturating_add(other.amount),
            luminosity: self.luminosity.saturating_add(other.luminosity),
        }
    }

    /// Divide dimensions (subtract exponents, saturating)
    ///
    /// Used when dividing quantities: [A] / [B] = [A / B]
    pub const fn div(&self, other: &Dimension) -> Dimension {
        Dimension {
            length: self.length.saturating_sub(other.length),
            mass: self.mass.saturating_sub(other.mass),
            time: self.time.saturating_sub(other.time),
            current: self.current.saturating_sub(other.current),
            temperature: self.temperature.saturating_sub(other.temperature),
            amount: self.amount.saturating_sub(other.amount),
            luminosity: self.luminosity.saturating_sub(other.luminosity),
        }
    }

    /// Reciprocal (negate all exponents, saturating)
    ///
    /// [1/A] = [A]⁻¹
    pub const fn recip(&self) -> Dimension {
        Dimension {
            length: self.length.saturating_neg(),
            mass: self.mass.saturating_neg(),
            time: self.time.saturating_neg(),
            current: self.current.saturating_neg(),
            temperature: self.temperature.saturating_neg(),
            amount: self.amount.saturating_neg(),
            luminosity: self.luminosity.saturating_neg(),
        }
    }

    /// Raise to integer power (multiply all exponents, saturating)
    ///
    /// [A]ⁿ
    pub const fn pow(&self, n: i8) -> Dimension {
        Dimension {
            length: self.length.saturating_mul(n),
            mass: self.mass.saturating_mul(n),
            time: self.time.saturating_mul(n),
            current: self.current.saturating_mul(n),
            temperature: self.temperature.saturating_mul(n),
            amount: self.amount.saturating_mul(n),
            luminosity: self.luminosity.saturating_mul(n),
        }
    }

    /// [`mul`](Self::mul) that reports exponent overflow as `None`
    pub fn checked_mul(&self, other: &Dimension) -> Option<Dimension> {
        Some(Dimension {
            length: self.length.checked_add(other.length)?,
            mass: self.mass.checked_add(other.mass)?,
            time: self.time.checked_add(other.time)?,
            current: self.current.checked_add(other.current)?,
            temperature: self.temperature.checked_add(other.temperature)?,
            amount: self.amount.checked_add(other.amount)?,
            luminosity: self.luminosity.checked_add(other.luminosity)?,
        })
    }

    /// [`div`](Self::div) that reports exponent overflow as `None`
    pub fn checked_div(&self, other: &Dimension) -> Option<Dimension> {
        Some(Dimension {
            length: self.length.checked_sub(other.length)?,
            mass: self.mass.checked_sub(other.mass)?,
            time: self.time.checked_sub(other.time)?,
            current: self.current.checked_sub(other.current)?,
            temperature: self.temperature.checked_sub(other.temperature)?,
            amount: self.amount.checked_sub(other.amount)?,
            luminosity: self.luminosity.checked_sub(other.luminosity)?,
        })
    }

    /// [`recip`](Self::recip) that reports exponent overflow as `None`
    pub fn checked_recip(&self) -> Option<Dimension> {
        Some(Dimension {
            length: self.length.checked_neg()?,
            mass: self.mass.checked_neg()?,
            time: self.time.checked_neg()?,
            current: self.current.checked_neg()?,
            temperature: self.temperature.checked_neg()?,
            amount: self.amount.checked_neg()?,
            luminosity: self.luminosity.checked_neg()?,
        })
    }

    /// [`pow`](Self::pow) that reports exponent overflow as `None`
    pub fn checked_pow(&self, n: i8) -> Option<Dimension> {
        Some(Dimension {
            length: self.length.checked_mul(n)?,
            mass: self.mass.checked_mul(n)?,
            time: self.time.checked_mul(n)?,
            current: self.current.checked_mul(n)?,
            temperature: self.temperature.checked_mul(n)?,
            amount: self.amount.checked_mul(n)?,
            luminosity: self.luminosity.checked_mul(n)?,
        })
    }

    /// Check if dimensionless
    pub const fn is_dimensionless(&self) -> bool {
        self.length == 0
            && self.mass == 0
            && self.time == 0
            && self.current == 0
            && self.temperature == 0
            && self.amount == 0
            && self.luminosity == 0
    }

    /// Check if dimensions are equal
    pub const fn equals(&self, other: &Dimension) -> bool {
        self.length == other.length
            && self.mass == other.mass
            && self.time == other.time
            && self.current == other.current
            && self.temperature == other.temperature
            && self.amount == other.amount
            && self.luminosity == other.luminosity
    }

    /// Get the name of this dimension if it matches a known quantity
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Self::DIMENSIONLESS => Some("dimensionless"),
            Self::LENGTH => Some("length"),
            Self::MASS => Some("mass"),
            Self::TIME => Some("time"),
            Self::CURRENT => Some("electric current"),
            Self::TEMPERATURE => Some("temperature"),
            Self::AMOUNT => Some("amount of substance"),
            Self::LUMINOSITY => Some("luminous intensity"),
            Self::AREA => Some("area"),
            Self::VOLUME => Some("volume"),
            Self::FREQUENCY => Some("frequency"),
            Self::CHARGE => Some("electric charge"),
            Self::VOLTAGE => Some("voltage"),
            Self::CAPACITANCE => Some("capacitance"),
            Self::CONDUCTANCE => Some("conductance"),
            Self::RESISTANCE => Some("resistance"),
            Self::CONCENTRATION => Some("molar concentration"),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }

        let mut num: Vec<String> = Vec::new();
        let mut den: Vec<String> = Vec::new();

        let add_dim = |parts: &mut Vec<String>, name: &str, exp: i8| {
            if exp == 1 {
                parts.push(name.to_string());
            } else {
                parts.push(format!("{}{}", name, superscript(exp)));
            }
        };

        if self.mass > 0 {
            add_dim(&mut num, "M", self.mass);
        } else if self.mass < 0 {
            add_dim(&mut den, "M", -self.mass);
        }

        if self.length > 0 {
            add_dim(&mut num, "L", self.length);
        } else if self.length < 0 {
            add_dim(&mut den, "L", -self.length);
        }

        if self.time > 0 {
            add_dim(&mut num, "T", self.time);
        } else if self.time < 0 {
            add_dim(&mut den, "T", -self.time);
        }

        if self.current > 0 {
            add_dim(&mut num, "I", self.current);
        } else if self.current < 0 {
            add_dim(&mut den, "I", -self.current);
        }

        if self.temperature > 0 {
            add_dim(&mut num, "Θ", self.temperature);
        } else if self.temperature < 0 {
            add_dim(&mut den, "Θ", -self.temperature);
        }

        if self.amount > 0 {
            add_dim(&mut num, "N", self.amount);
        } else if self.amount < 0 {
            add_dim(&mut den, "N", -self.amount);
        }

        if self.luminosity > 0 {
            add_dim(&mut num, "J", self.luminosity);
        } else if self.luminosity < 0 {
            add_dim(&mut den, "J", -self.luminosity);
        }

        let num_str = if num.is_empty() {
            "1".to_string()
        } else {
            num.join(" ")
        };

        if den.is_empty() {
            write!(f, "{}", num_str)
        } else {
            write!(f, "{} / {}", num_str, den.join(" "))
        }
    }
}

/// Convert integer to superscript string
fn superscript(n: i8) -> String {
    let digits: Vec<char> = n.abs().to_string().chars().collect();
    let mut result = String::new();

    for d in digits {
        result.push(match d {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            _ => d,
        });
    }

    if n < 0 {
        format!("⁻{}", result)
    } else {
        result
    }
}
