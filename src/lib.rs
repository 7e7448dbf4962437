//! NervML type-checking core
//!
//! The static type system of a modeling language for neuron dynamics:
//! membrane equations, physical quantities, discrete spike logic. This
//! crate assigns every expression a type, rejects ill-typed models with
//! one diagnostic per root cause, and exposes the type queries the
//! later phases (equation solving, code generation) consume.
//!
//! # Architecture
//!
//! ```text
//! AST ─→ ExprTyper ─→ TypeOutcome per node ─→ downstream phases
//!            │
//!            └─→ Reporter (miette diagnostics)
//! ```
//!
//! Types are either primitives (`Void`, `Boolean`, `String`, `Integer`,
//! `Real`) or physical units carrying a 7-exponent SI dimension vector
//! and a power-of-ten magnitude. Two units of the same dimension are
//! one type regardless of magnitude: `mV` and `V` differ only by a
//! scale factor that code generation handles, so
//!
//! ```
//! use nervml::typeck::{get_type, is_compatible};
//!
//! assert!(is_compatible(&get_type("mV"), &get_type("V")));
//! assert!(!is_compatible(&get_type("mV"), &get_type("ms")));
//! ```

pub mod ast;
pub mod common;
pub mod diagnostics;
pub mod symbols;
pub mod typeck;
pub mod units;
