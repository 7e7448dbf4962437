//! Predefined types and function signatures
//!
//! Process-wide read-only tables, initialized on first access. This is
//! the sole entry point for turning a serialized type name back into a
//! live [`TypeSymbol`].

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

use super::symbol::TypeSymbol;
use crate::units::{Dimension, UnitRepresentation};

/// Signature of a predefined function
#[derive(Debug, Clone)]
pub struct FunctionSignature {
    pub name: &'static str,
    pub params: Vec<TypeSymbol>,
    pub returns: TypeSymbol,
}

/// Resolve a textual type name to a [`TypeSymbol`]
///
/// The five primitive names resolve to their singletons; everything
/// else is treated as a serialized unit literal. An unparsable unit
/// name yields the invalid-unit sentinel, which is incompatible with
/// every type, so the error surfaces at the first compatibility check
/// instead of vanishing.
pub fn get_type(name: &str) -> TypeSymbol {
    match name {
        "Void" => TypeSymbol::Void,
        "Boolean" => TypeSymbol::Boolean,
        "String" => TypeSymbol::String,
        "Integer" => TypeSymbol::Integer,
        "Real" => TypeSymbol::Real,
        unit_name => match UnitRepresentation::parse(unit_name) {
            Ok(unit) => TypeSymbol::Unit(unit),
            Err(err) => {
                tracing::debug!(name = unit_name, %err, "unparsable unit literal");
                TypeSymbol::Unit(UnitRepresentation::invalid())
            }
        },
    }
}

/// Look up a predefined function signature
pub fn get_function(name: &str) -> Option<&'static FunctionSignature> {
    functions().get(name)
}

fn functions() -> &'static FxHashMap<&'static str, FunctionSignature> {
    static FUNCTIONS: OnceLock<FxHashMap<&'static str, FunctionSignature>> = OnceLock::new();
    FUNCTIONS.get_or_init(|| {
        let ms = TypeSymbol::Unit(UnitRepresentation::new(Dimension::TIME, -3));
        let table = [
            FunctionSignature {
                name: "exp",
                params: vec![TypeSymbol::Real],
                returns: TypeSymbol::Real,
            },
            FunctionSignature {
                name: "ln",
                params: vec![TypeSymbol::Real],
                returns: TypeSymbol::Real,
            },
            FunctionSignature {
                name: "max",
                params: vec![TypeSymbol::Real, TypeSymbol::Real],
                returns: TypeSymbol::Real,
            },
            FunctionSignature {
                name: "min",
                params: vec![TypeSymbol::Real, TypeSymbol::Real],
                returns: TypeSymbol::Real,
            },
            // Simulation timestep, in milliseconds
            FunctionSignature {
                name: "resolution",
                params: vec![],
                returns: ms.clone(),
            },
            // Number of timesteps covering a duration
            FunctionSignature {
                name: "steps",
                params: vec![ms],
                returns: TypeSymbol::Integer,
            },
            FunctionSignature {
                name: "emit_spike",
                params: vec![],
                returns: TypeSymbol::Void,
            },
        ];
        table.into_iter().map(|sig| (sig.name, sig)).collect()
    })
}
