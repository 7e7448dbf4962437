//! Type compatibility predicates
//!
//! Pure functions deciding assignability between type symbols. These
//! never produce diagnostics; they degrade to `false` or pass input
//! through on anything malformed. Only the inference visitors report.

use super::predefined::get_type;
use super::symbol::TypeSymbol;

/// Is a value of type `rhs` assignable to a slot of type `lhs`?
///
/// The unit-vs-unit case must come first: two unit symbols with equal
/// dimensions but different spellings are not equal values, yet are one
/// type. Falling through to the equality check would wrongly demand
/// equal magnitudes.
pub fn is_compatible(lhs: &TypeSymbol, rhs: &TypeSymbol) -> bool {
    if let (TypeSymbol::Unit(lhs_unit), TypeSymbol::Unit(rhs_unit)) = (lhs, rhs) {
        return lhs_unit.compatible_with(rhs_unit);
    }

    if lhs == rhs {
        return true;
    }

    // Numeric widening: a Real slot accepts an Integer expression
    lhs.is_real() && rhs.is_integer()
}

/// [`is_compatible`] over serialized type names
pub fn is_compatible_names(lhs: &str, rhs: &str) -> bool {
    is_compatible(&get_type(lhs), &get_type(rhs))
}

/// Integer or Real
pub fn check_number(ty: &TypeSymbol) -> bool {
    ty.is_integer() || ty.is_real()
}

/// Is this one of the five primitive type names?
///
/// Decides whether a serialized name needs dimensional parsing.
pub fn is_primitive_type_name(name: &str) -> bool {
    matches!(name, "Void" | "Boolean" | "String" | "Integer" | "Real")
}

/// Canonicalize a serialized type name
///
/// Primitive names pass through unchanged; unit names are parsed and
/// pretty-printed. An unparsable name also passes through unchanged,
/// per the no-failure policy of this module.
pub fn deserialize_unit_if_not_primitive(name: &str) -> String {
    if is_primitive_type_name(name) {
        return name.to_string();
    }
    match crate::units::UnitRepresentation::parse(name) {
        Ok(unit) => unit.pretty_print(),
        Err(_) => name.to_string(),
    }
}
