//! Expression AST for model equations
//!
//! The checker walks these nodes bottom-up and caches one
//! [`TypeOutcome`] per node. The cache has a single mutation point,
//! [`Expr::set_type`], which never overwrites: once a node is resolved
//! its result is final, so a re-visit can only ever re-read it.

use serde::{Deserialize, Serialize};

use crate::common::Span;
use crate::typeck::TypeOutcome;

/// Literal value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(String),
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Logical negation `not`
    Not,
    /// Arithmetic negation `-`
    Neg,
    /// Identity `+`
    Plus,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    // Comparison
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    // Logical
    And,
    Or,
}

impl BinaryOp {
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Lt | Self::Le | Self::Gt | Self::Ge | Self::Eq | Self::Ne
        )
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Source spelling, used in diagnostics
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// Expression node kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExprKind {
    /// Literal value
    Literal(Literal),
    /// Variable reference
    Variable { name: String },
    /// Unary operation
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Binary operation
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Call of a predefined function
    Call { callee: String, args: Vec<Expr> },
}

/// Expression node with its source span and cached inference result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub span: Span,
    pub kind: ExprKind,
    ty: Option<TypeOutcome>,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self {
            span,
            kind,
            ty: None,
        }
    }

    /// The cached inference result, if this node has been resolved
    pub fn get_type(&self) -> Option<&TypeOutcome> {
        self.ty.as_ref()
    }

    /// Cache the inference result; a second call is a no-op
    pub fn set_type(&mut self, outcome: TypeOutcome) {
        if self.ty.is_none() {
            self.ty = Some(outcome);
        }
    }

    // Construction helpers used by the driver and tests

    pub fn literal(lit: Literal, span: Span) -> Self {
        Self::new(ExprKind::Literal(lit), span)
    }

    pub fn variable(name: impl Into<String>, span: Span) -> Self {
        Self::new(
            ExprKind::Variable { name: name.into() },
            span,
        )
    }

    pub fn unary(op: UnaryOp, operand: Expr, span: Span) -> Self {
        Self::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        )
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr, span: Span) -> Self {
        Self::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        )
    }

    pub fn call(callee: impl Into<String>, args: Vec<Expr>, span: Span) -> Self {
        Self::new(
            ExprKind::Call {
                callee: callee.into(),
                args,
            },
            span,
        )
    }
}
