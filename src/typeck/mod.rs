//! Unit-aware type checking
//!
//! Inference never throws: every step yields a [`TypeOutcome`], either
//! the inferred [`TypeSymbol`] or a [`TypeError`] carrying the message
//! and position of the one diagnostic produced for that subtree.

pub mod checker;
pub mod infer;
pub mod predefined;
pub mod symbol;

use serde::{Deserialize, Serialize};

use crate::common::Span;

pub use checker::{
    check_number, deserialize_unit_if_not_primitive, is_compatible, is_compatible_names,
    is_primitive_type_name,
};
pub use infer::ExprTyper;
pub use predefined::{get_function, get_type, FunctionSignature};
pub use symbol::TypeSymbol;

/// A type error attached to the expression where it occurred
///
/// Ancestors of a failed subtree propagate this value verbatim; the
/// message is never rewritten and the span keeps pointing at the
/// deepest node where the mismatch actually happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeError {
    pub message: String,
    pub span: Span,
}

impl TypeError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

/// The two-case result of one inference step
pub type TypeOutcome = Result<TypeSymbol, TypeError>;
