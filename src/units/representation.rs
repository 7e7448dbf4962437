//! Serialized unit representation
//!
//! A [`UnitRepresentation`] is what a unit literal like `mV` or
//! `nS/ms` denotes: a dimension vector plus a power-of-ten magnitude.
//! It is built from the textual form, printed back canonically, and
//! compared magnitude-insensitively by the type checker.
//!
//! An unparsable literal becomes the invalid sentinel, which compares
//! incompatible with everything so the failure cannot be silently
//! absorbed by a later compatibility check.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dimension::Dimension;
use super::si;

/// Failure to parse a serialized unit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitParseError {
    #[error("empty unit expression")]
    Empty,
    #[error("unknown unit symbol `{0}`")]
    UnknownSymbol(String),
    #[error("malformed exponent `{0}`")]
    InvalidExponent(String),
    #[error("unit exponents overflow in `{0}`")]
    ExponentOverflow(String),
    #[error("unbalanced parentheses in `{0}`")]
    UnbalancedParens(String),
}

/// A physical unit: dimension vector plus decimal magnitude
///
/// `magnitude` is the power of ten separating this unit from its
/// SI-base rendition: `mV` has the voltage dimension and magnitude −3.
/// Magnitude participates in full equality but never in
/// [`compatible_with`](Self::compatible_with); the scale conversion is
/// a code-generation concern, not a typing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitRepresentation {
    dimension: Dimension,
    magnitude: i32,
    valid: bool,
}

impl UnitRepresentation {
    /// Build from parts (used for the predefined function signatures)
    pub const fn new(dimension: Dimension, magnitude: i32) -> Self {
        Self {
            dimension,
            magnitude,
            valid: true,
        }
    }

    /// The invalid sentinel: incompatible with every unit, itself included
    pub const fn invalid() -> Self {
        Self {
            dimension: Dimension::DIMENSIONLESS,
            magnitude: 0,
            valid: false,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub const fn magnitude(&self) -> i32 {
        self.magnitude
    }

    /// Parse a serialized unit expression
    ///
    /// Grammar:
    /// ```text
    /// unit   := term ('/' term)*
    /// term   := factor ('*' factor)*
    /// factor := base ('^' int)?
    /// base   := '1' | '10^' int | symbol | '(' unit ')'
    /// ```
    /// where `symbol` is a base or derived SI symbol with at most one
    /// decimal prefix.
    pub fn parse(serialized: &str) -> Result<Self, UnitParseError> {
        let trimmed = serialized.trim();
        if trimmed.is_empty() {
            return Err(UnitParseError::Empty);
        }
        Self::parse_quotient(trimmed)
    }

    fn parse_quotient(expr: &str) -> Result<Self, UnitParseError> {
        let parts = split_top_level(expr, '/')?;
        let mut iter = parts.iter();
        let first = iter.next().ok_or(UnitParseError::Empty)?;
        let mut result = Self::parse_product(first)?;
        for part in iter {
            let term = Self::parse_product(part)?;
            result = result.divide(&term);
            // Both operands parsed valid, so a sentinel here is overflow
            if !result.valid {
                return Err(UnitParseError::ExponentOverflow(expr.to_string()));
            }
        }
        Ok(result)
    }

    fn parse_product(expr: &str) -> Result<Self, UnitParseError> {
        let parts = split_top_level(expr, '*')?;
        let mut result = Self::new(Dimension::DIMENSIONLESS, 0);
        for part in &parts {
            let factor = Self::parse_factor(part)?;
            result = result.multiply(&factor);
            if !result.valid {
                return Err(UnitParseError::ExponentOverflow(expr.to_string()));
            }
        }
        Ok(result)
    }

    fn parse_factor(expr: &str) -> Result<Self, UnitParseError> {
        let expr = expr.trim();
        if expr.is_empty() {
            return Err(UnitParseError::Empty);
        }

        // Powers of ten are their own base so canonical forms like
        // `10^3*m` round-trip.
        if let Some(exp) = expr.strip_prefix("10^") {
            let n: i32 = exp
                .parse()
                .map_err(|_| UnitParseError::InvalidExponent(exp.to_string()))?;
            return Ok(Self::new(Dimension::DIMENSIONLESS, n));
        }

        let (base, exponent) = match split_exponent(expr) {
            Some((base, exp)) => {
                let n: i32 = exp
                    .parse()
                    .map_err(|_| UnitParseError::InvalidExponent(exp.to_string()))?;
                (base.trim(), n)
            }
            None => (expr, 1),
        };

        let inner = Self::parse_base(base)?;
        if exponent == 1 {
            return Ok(inner);
        }
        if !(-127..=127).contains(&exponent) {
            return Err(UnitParseError::InvalidExponent(exponent.to_string()));
        }
        let powered = inner.power(exponent as i8);
        if !powered.valid {
            return Err(UnitParseError::ExponentOverflow(expr.to_string()));
        }
        Ok(powered)
    }

    fn parse_base(expr: &str) -> Result<Self, UnitParseError> {
        let expr = expr.trim();
        if expr.is_empty() {
            return Err(UnitParseError::Empty);
        }
        if expr == "1" {
            return Ok(Self::new(Dimension::DIMENSIONLESS, 0));
        }
        if let Some(stripped) = expr.strip_prefix('(') {
            let inner = stripped
                .strip_suffix(')')
                .ok_or_else(|| UnitParseError::UnbalancedParens(expr.to_string()))?;
            return Self::parse_quotient(inner);
        }
        match si::resolve_symbol(expr) {
            Some((dimension, magnitude)) => Ok(Self::new(dimension, magnitude)),
            None => Err(UnitParseError::UnknownSymbol(expr.to_string())),
        }
    }

    /// Product of two units: dimensions and magnitudes add
    ///
    /// Invalidity is sticky so a sentinel can never launder itself
    /// through arithmetic. Exponent or magnitude overflow also yields
    /// the sentinel; all failures are values, never panics.
    pub fn multiply(&self, other: &UnitRepresentation) -> UnitRepresentation {
        if !self.valid || !other.valid {
            return Self::invalid();
        }
        match (
            self.dimension.checked_mul(&other.dimension),
            self.magnitude.checked_add(other.magnitude),
        ) {
            (Some(dimension), Some(magnitude)) => Self::new(dimension, magnitude),
            _ => Self::invalid(),
        }
    }

    /// Quotient of two units: dimensions and magnitudes subtract
    pub fn divide(&self, other: &UnitRepresentation) -> UnitRepresentation {
        if !self.valid || !other.valid {
            return Self::invalid();
        }
        match (
            self.dimension.checked_div(&other.dimension),
            self.magnitude.checked_sub(other.magnitude),
        ) {
            (Some(dimension), Some(magnitude)) => Self::new(dimension, magnitude),
            _ => Self::invalid(),
        }
    }

    /// Reciprocal unit
    pub fn reciprocal(&self) -> UnitRepresentation {
        if !self.valid {
            return Self::invalid();
        }
        match (self.dimension.checked_recip(), self.magnitude.checked_neg()) {
            (Some(dimension), Some(magnitude)) => Self::new(dimension, magnitude),
            _ => Self::invalid(),
        }
    }

    /// Integer power
    pub fn power(&self, n: i8) -> UnitRepresentation {
        if !self.valid {
            return Self::invalid();
        }
        match (
            self.dimension.checked_pow(n),
            self.magnitude.checked_mul(n as i32),
        ) {
            (Some(dimension), Some(magnitude)) => Self::new(dimension, magnitude),
            _ => Self::invalid(),
        }
    }

    /// True iff the exponent vectors are element-wise equal
    ///
    /// Magnitude is deliberately ignored: `mV` and `V` are one type.
    /// The invalid sentinel is compatible with nothing.
    pub fn compatible_with(&self, other: &UnitRepresentation) -> bool {
        self.valid && other.valid && self.dimension.equals(&other.dimension)
    }

    /// Render the canonical, re-parseable form
    ///
    /// A unit matching a (possibly prefixed) symbol prints as that
    /// symbol (`mV`); anything else prints as a product of base symbols
    /// with an explicit `10^k` factor when the magnitude is nonzero.
    pub fn pretty_print(&self) -> String {
        if !self.valid {
            return "<invalid unit>".to_string();
        }

        if self.dimension.is_dimensionless() {
            return if self.magnitude == 0 {
                "1".to_string()
            } else {
                format!("10^{}", self.magnitude)
            };
        }

        if let Some(symbol) = si::symbol_for(&self.dimension, self.magnitude) {
            return symbol;
        }

        let mut num: Vec<String> = Vec::new();
        let mut den: Vec<String> = Vec::new();
        let mut push = |sym: &str, exp: i8| {
            if exp > 0 {
                num.push(factor_string(sym, exp));
            } else if exp < 0 {
                den.push(factor_string(sym, -exp));
            }
        };
        let d = self.dimension;
        push("kg", d.mass);
        push("m", d.length);
        push("s", d.time);
        push("A", d.current);
        push("K", d.temperature);
        push("mol", d.amount);
        push("cd", d.luminosity);

        if self.magnitude != 0 {
            num.insert(0, format!("10^{}", self.magnitude));
        }
        let num_str = if num.is_empty() {
            "1".to_string()
        } else {
            num.join("*")
        };
        if den.is_empty() {
            num_str
        } else {
            format!("{}/{}", num_str, den.join("*"))
        }
    }
}

fn factor_string(sym: &str, exp: i8) -> String {
    if exp == 1 {
        sym.to_string()
    } else {
        format!("{}^{}", sym, exp)
    }
}

/// Split at the rightmost `^` outside parentheses, if any
fn split_exponent(expr: &str) -> Option<(&str, &str)> {
    let mut depth: i32 = 0;
    for (i, c) in expr.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' => depth -= 1,
            '^' if depth == 0 => return Some((&expr[..i], &expr[i + 1..])),
            _ => {}
        }
    }
    None
}

/// Split at top-level occurrences of `sep`, respecting parentheses
fn split_top_level(expr: &str, sep: char) -> Result<Vec<String>, UnitParseError> {
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut current = String::new();
    for c in expr.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(UnitParseError::UnbalancedParens(expr.to_string()));
                }
                current.push(c);
            }
            c if c == sep && depth == 0 => {
                parts.push(std::mem::take(&mut current));
            }
            c => current.push(c),
        }
    }
    if depth != 0 {
        return Err(UnitParseError::UnbalancedParens(expr.to_string()));
    }
    parts.push(current);
    Ok(parts)
}

impl fmt::Display for UnitRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty_print())
    }
}
