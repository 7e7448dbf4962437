//! Type symbols
//!
//! A [`TypeSymbol`] names one type of the modeling language: one of the
//! five primitives or a physical unit. Unit symbols are built per
//! parsed literal and are never interned, so two spellings of the same
//! dimension are distinct values that the compatibility predicate still
//! deems equal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::units::UnitRepresentation;

/// The type of an expression or variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeSymbol {
    Void,
    Boolean,
    String,
    Integer,
    Real,
    Unit(UnitRepresentation),
}

impl TypeSymbol {
    /// Canonical name, used for map keys and diagnostics
    pub fn name(&self) -> String {
        match self {
            Self::Void => "Void".to_string(),
            Self::Boolean => "Boolean".to_string(),
            Self::String => "String".to_string(),
            Self::Integer => "Integer".to_string(),
            Self::Real => "Real".to_string(),
            Self::Unit(unit) => unit.pretty_print(),
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer)
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Self::Real)
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Unit(_))
    }

    /// Real or Integer
    pub fn is_numeric_primitive(&self) -> bool {
        matches!(self, Self::Real | Self::Integer)
    }

    /// Real, Integer, or any unit
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Real | Self::Integer | Self::Unit(_))
    }

    pub fn unit(&self) -> Option<&UnitRepresentation> {
        match self {
            Self::Unit(unit) => Some(unit),
            _ => None,
        }
    }
}

impl fmt::Display for TypeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Dimension, UnitRepresentation};

    #[test]
    fn test_predicates() {
        assert!(TypeSymbol::Boolean.is_boolean());
        assert!(!TypeSymbol::Boolean.is_numeric());
        assert!(TypeSymbol::Integer.is_numeric_primitive());
        assert!(TypeSymbol::Real.is_numeric_primitive());
        assert!(TypeSymbol::Void.is_void());

        let mv = TypeSymbol::Unit(UnitRepresentation::new(Dimension::VOLTAGE, -3));
        assert!(mv.is_unit());
        assert!(mv.is_numeric());
        assert!(!mv.is_numeric_primitive());
    }

    #[test]
    fn test_names() {
        assert_eq!(TypeSymbol::Real.name(), "Real");
        assert_eq!(TypeSymbol::Void.name(), "Void");
        let mv = TypeSymbol::Unit(UnitRepresentation::new(Dimension::VOLTAGE, -3));
        assert_eq!(mv.name(), "mV");
    }
}
