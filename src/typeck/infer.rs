//! Expression type inference
//!
//! One rule per expression node kind, dispatched by matching the
//! closed [`ExprKind`] enum. The protocol is the same for every kind:
//!
//! 1. A node that already carries a result returns it unchanged.
//! 2. Operand errors propagate upward verbatim; no second diagnostic
//!    is ever produced for the same root cause.
//! 3. Fresh failures are reported to the [`Reporter`] exactly once, at
//!    the node where the mismatch actually occurs, and cached as the
//!    node's final result.

use crate::ast::{BinaryOp, Expr, ExprKind, Literal, UnaryOp};
use crate::common::Span;
use crate::diagnostics::{CompileError, Reporter};
use crate::symbols::TypeEnv;
use crate::units::UnitRepresentation;

use super::checker::is_compatible;
use super::predefined::get_function;
use super::symbol::TypeSymbol;
use super::{TypeError, TypeOutcome};

/// Infer the type of `expr` against `env`, reporting into `reporter`
pub fn infer_expr(expr: &mut Expr, env: &TypeEnv, reporter: &mut Reporter) -> TypeOutcome {
    ExprTyper::new(env, reporter).infer(expr)
}

/// Visitor that computes and caches expression types
pub struct ExprTyper<'a> {
    env: &'a TypeEnv,
    reporter: &'a mut Reporter,
}

impl<'a> ExprTyper<'a> {
    pub fn new(env: &'a TypeEnv, reporter: &'a mut Reporter) -> Self {
        Self { env, reporter }
    }

    /// Resolve the type of an expression tree
    ///
    /// Each node is evaluated at most once; re-entry returns the cached
    /// outcome without recomputation or re-reporting.
    pub fn infer(&mut self, expr: &mut Expr) -> TypeOutcome {
        if let Some(cached) = expr.get_type() {
            return cached.clone();
        }

        let span = expr.span;
        let outcome = match &mut expr.kind {
            ExprKind::Literal(lit) => Ok(literal_type(lit)),
            ExprKind::Variable { name } => {
                let name = name.clone();
                self.infer_variable(&name, span)
            }
            ExprKind::Unary { op, operand } => {
                let op = *op;
                self.infer_unary(op, operand, span)
            }
            ExprKind::Binary { op, left, right } => {
                let op = *op;
                self.infer_binary(op, left, right, span)
            }
            ExprKind::Call { callee, args } => {
                let callee = callee.clone();
                self.infer_call(&callee, args, span)
            }
        };

        expr.set_type(outcome.clone());
        outcome
    }

    fn infer_variable(&mut self, name: &str, span: Span) -> TypeOutcome {
        let Some(symbol) = self.env.resolve(name) else {
            let src = self.reporter.named_source();
            self.reporter.error(CompileError::UndefinedVariable {
                name: name.to_string(),
                span: span.into(),
                src,
            });
            return Err(TypeError::new(
                format!("undefined variable `{name}`"),
                span,
            ));
        };

        // A declaration whose unit failed to parse carries the sentinel;
        // diagnose at the first use instead of letting it flow silently.
        if let TypeSymbol::Unit(unit) = &symbol.type_symbol {
            if !unit.is_valid() {
                let src = self.reporter.named_source();
                self.reporter.error(CompileError::UnknownUnit {
                    name: name.to_string(),
                    span: span.into(),
                    src,
                });
                return Err(TypeError::new(
                    format!("variable `{name}` has an unparsable unit type"),
                    span,
                ));
            }
        }

        Ok(symbol.type_symbol.clone())
    }

    fn infer_unary(&mut self, op: UnaryOp, operand: &mut Expr, span: Span) -> TypeOutcome {
        let operand_ty = self.infer(operand)?;

        match op {
            UnaryOp::Not => {
                if operand_ty.is_boolean() {
                    Ok(TypeSymbol::Boolean)
                } else {
                    Err(self.type_error(
                        format!(
                            "logical negation requires a Boolean operand, got {}",
                            operand_ty.name()
                        ),
                        span,
                    ))
                }
            }
            UnaryOp::Neg | UnaryOp::Plus => {
                if operand_ty.is_numeric() {
                    Ok(operand_ty)
                } else {
                    let sign = if op == UnaryOp::Neg { "-" } else { "+" };
                    Err(self.type_error(
                        format!(
                            "unary `{sign}` requires a numeric operand, got {}",
                            operand_ty.name()
                        ),
                        span,
                    ))
                }
            }
        }
    }

    fn infer_binary(
        &mut self,
        op: BinaryOp,
        left: &mut Expr,
        right: &mut Expr,
        span: Span,
    ) -> TypeOutcome {
        let lhs = self.infer(left)?;
        let rhs = self.infer(right)?;

        if op.is_logical() {
            return self.infer_logical(op, &lhs, &rhs, span);
        }
        if op.is_comparison() {
            return self.infer_comparison(op, &lhs, &rhs, span);
        }
        if op == BinaryOp::Pow {
            return self.infer_pow(&lhs, &rhs, right, span);
        }
        self.infer_arithmetic(op, &lhs, &rhs, span)
    }

    fn infer_logical(
        &mut self,
        op: BinaryOp,
        lhs: &TypeSymbol,
        rhs: &TypeSymbol,
        span: Span,
    ) -> TypeOutcome {
        if lhs.is_boolean() && rhs.is_boolean() {
            Ok(TypeSymbol::Boolean)
        } else {
            Err(self.type_error(
                format!(
                    "logical `{}` requires Boolean operands, got {} and {}",
                    op.symbol(),
                    lhs.name(),
                    rhs.name()
                ),
                span,
            ))
        }
    }

    fn infer_comparison(
        &mut self,
        op: BinaryOp,
        lhs: &TypeSymbol,
        rhs: &TypeSymbol,
        span: Span,
    ) -> TypeOutcome {
        let mutually_compatible = is_compatible(lhs, rhs) || is_compatible(rhs, lhs);

        let ok = if matches!(op, BinaryOp::Eq | BinaryOp::Ne) {
            mutually_compatible
        } else {
            lhs.is_numeric() && rhs.is_numeric() && mutually_compatible
        };

        if ok {
            Ok(TypeSymbol::Boolean)
        } else {
            Err(self.type_error(
                format!(
                    "cannot compare {} and {} with `{}`",
                    lhs.name(),
                    rhs.name(),
                    op.symbol()
                ),
                span,
            ))
        }
    }

    fn infer_arithmetic(
        &mut self,
        op: BinaryOp,
        lhs: &TypeSymbol,
        rhs: &TypeSymbol,
        span: Span,
    ) -> TypeOutcome {
        if !lhs.is_numeric() || !rhs.is_numeric() {
            return Err(self.type_error(
                format!(
                    "operands of `{}` must be numeric, got {} and {}",
                    op.symbol(),
                    lhs.name(),
                    rhs.name()
                ),
                span,
            ));
        }

        match (op, lhs, rhs) {
            // Additive: units must agree in dimension; the left spelling wins
            (BinaryOp::Add | BinaryOp::Sub, TypeSymbol::Unit(l), TypeSymbol::Unit(r)) => {
                if l.compatible_with(r) {
                    Ok(lhs.clone())
                } else {
                    Err(self.type_error(
                        format!(
                            "operands of `{}` have incompatible units: {} and {}",
                            op.symbol(),
                            l.pretty_print(),
                            r.pretty_print()
                        ),
                        span,
                    ))
                }
            }
            // A dimensioned quantity cannot absorb a dimensionless offset
            (BinaryOp::Add | BinaryOp::Sub, TypeSymbol::Unit(_), _)
            | (BinaryOp::Add | BinaryOp::Sub, _, TypeSymbol::Unit(_)) => {
                Err(self.type_error(
                    format!(
                        "cannot apply `{}` to {} and {}",
                        op.symbol(),
                        lhs.name(),
                        rhs.name()
                    ),
                    span,
                ))
            }
            // Multiplicative: the dimension vector is computed, not checked
            (BinaryOp::Mul, TypeSymbol::Unit(l), TypeSymbol::Unit(r)) => {
                let unit = l.multiply(r);
                self.computed_unit(op, unit, span)
            }
            (BinaryOp::Div, TypeSymbol::Unit(l), TypeSymbol::Unit(r)) => {
                let unit = l.divide(r);
                self.computed_unit(op, unit, span)
            }
            // Scalar scaling keeps the unit
            (BinaryOp::Mul, TypeSymbol::Unit(_), _) => Ok(lhs.clone()),
            (BinaryOp::Mul, _, TypeSymbol::Unit(_)) => Ok(rhs.clone()),
            (BinaryOp::Div, TypeSymbol::Unit(_), _) => Ok(lhs.clone()),
            (BinaryOp::Div, _, TypeSymbol::Unit(r)) => {
                let unit = r.reciprocal();
                self.computed_unit(op, unit, span)
            }
            // Numeric primitives widen
            _ => {
                if lhs.is_real() || rhs.is_real() {
                    Ok(TypeSymbol::Real)
                } else {
                    Ok(TypeSymbol::Integer)
                }
            }
        }
    }

    fn infer_pow(
        &mut self,
        lhs: &TypeSymbol,
        rhs: &TypeSymbol,
        exponent: &Expr,
        span: Span,
    ) -> TypeOutcome {
        if !rhs.is_integer() {
            return Err(self.type_error(
                format!("exponent must be an Integer, got {}", rhs.name()),
                span,
            ));
        }

        match lhs {
            TypeSymbol::Unit(base) => {
                // The result dimension must be computable statically, so
                // a unit base demands a literal exponent.
                let Some(n) = const_int_exponent(exponent) else {
                    return Err(self.type_error(
                        "exponent of a unit base must be an integer literal".to_string(),
                        span,
                    ));
                };
                if !(-127..=127).contains(&n) {
                    return Err(self.type_error(
                        format!("exponent {n} is out of range for a unit base"),
                        span,
                    ));
                }
                let unit = base.power(n as i8);
                self.computed_unit(BinaryOp::Pow, unit, span)
            }
            TypeSymbol::Integer => Ok(TypeSymbol::Integer),
            TypeSymbol::Real => Ok(TypeSymbol::Real),
            _ => Err(self.type_error(
                format!("base of `**` must be numeric, got {}", lhs.name()),
                span,
            )),
        }
    }

    fn infer_call(&mut self, callee: &str, args: &mut [Expr], span: Span) -> TypeOutcome {
        let mut arg_types = Vec::with_capacity(args.len());
        for arg in args.iter_mut() {
            arg_types.push(self.infer(arg)?);
        }

        let Some(signature) = get_function(callee) else {
            let src = self.reporter.named_source();
            self.reporter.error(CompileError::UnknownFunction {
                name: callee.to_string(),
                span: span.into(),
                src,
            });
            return Err(TypeError::new(
                format!("unknown function `{callee}`"),
                span,
            ));
        };

        if signature.params.len() != arg_types.len() {
            return Err(self.type_error(
                format!(
                    "function `{}` expects {} argument(s), got {}",
                    callee,
                    signature.params.len(),
                    arg_types.len()
                ),
                span,
            ));
        }

        for (index, (param, arg)) in signature.params.iter().zip(&arg_types).enumerate() {
            if !is_compatible(param, arg) {
                return Err(self.type_error(
                    format!(
                        "argument {} of `{}` expects {}, got {}",
                        index + 1,
                        callee,
                        param.name(),
                        arg.name()
                    ),
                    span,
                ));
            }
        }

        Ok(signature.returns.clone())
    }

    /// Accept a computed unit, rejecting exponent overflow
    ///
    /// Both operands were valid here, so the unit algebra only returns
    /// the sentinel when an exponent or magnitude left its range.
    fn computed_unit(
        &mut self,
        op: BinaryOp,
        unit: UnitRepresentation,
        span: Span,
    ) -> TypeOutcome {
        if unit.is_valid() {
            Ok(TypeSymbol::Unit(unit))
        } else {
            Err(self.type_error(
                format!(
                    "result of `{}` exceeds the representable unit exponent range",
                    op.symbol()
                ),
                span,
            ))
        }
    }

    /// Build a fresh type error and report it to the sink
    ///
    /// This is the single place a new diagnostic enters the Reporter
    /// from inference; propagation paths never come through here.
    fn type_error(&mut self, message: String, span: Span) -> TypeError {
        tracing::debug!(%message, %span, "type error");
        let src = self.reporter.named_source();
        self.reporter.error(CompileError::TypeMismatch {
            message: message.clone(),
            span: span.into(),
            src,
        });
        TypeError::new(message, span)
    }
}

fn literal_type(lit: &Literal) -> TypeSymbol {
    match lit {
        Literal::Boolean(_) => TypeSymbol::Boolean,
        Literal::Integer(_) => TypeSymbol::Integer,
        Literal::Real(_) => TypeSymbol::Real,
        Literal::String(_) => TypeSymbol::String,
    }
}

/// Constant integer exponent, if the expression is one syntactically
fn const_int_exponent(expr: &Expr) -> Option<i64> {
    match &expr.kind {
        ExprKind::Literal(Literal::Integer(n)) => Some(*n),
        ExprKind::Unary {
            op: UnaryOp::Neg,
            operand,
        } => match &operand.kind {
            ExprKind::Literal(Literal::Integer(n)) => Some(-n),
            _ => None,
        },
        _ => None,
    }
}
