//! Variable symbols and scopes
//!
//! The surrounding symbol-table phase populates a [`TypeEnv`] with one
//! [`VariableSymbol`] per declaration; the checker only resolves names
//! through it. The [`BlockType`] tag records which model block a
//! variable was declared in, and is what the downstream equation
//! processing reclassifies once the ODE solver has run (solved state
//! variables move between `State`, `InitialValues` and `Internals`).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::common::Span;
use crate::typeck::TypeSymbol;

/// The model block a variable belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    State,
    InitialValues,
    Internals,
    Equations,
    Parameters,
    Local,
    Input,
    Output,
}

/// A declared variable with its resolved type and block tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSymbol {
    pub name: String,
    pub type_symbol: TypeSymbol,
    pub block_type: BlockType,
    pub span: Span,
}

impl VariableSymbol {
    pub fn new(
        name: impl Into<String>,
        type_symbol: TypeSymbol,
        block_type: BlockType,
        span: Span,
    ) -> Self {
        Self {
            name: name.into(),
            type_symbol,
            block_type,
            span,
        }
    }
}

/// Scoped variable environment
#[derive(Default)]
pub struct TypeEnv {
    scopes: Vec<FxHashMap<String, VariableSymbol>>,
}

impl TypeEnv {
    pub fn new() -> Self {
        Self {
            scopes: vec![FxHashMap::default()],
        }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
    }

    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Declare a variable in the innermost scope
    pub fn define(&mut self, symbol: VariableSymbol) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(symbol.name.clone(), symbol);
        }
    }

    /// Resolve a name, innermost scope first
    pub fn resolve(&self, name: &str) -> Option<&VariableSymbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }
}
