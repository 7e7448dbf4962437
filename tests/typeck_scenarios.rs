//! End-to-end checker scenarios over small expression trees

use nervml::ast::{BinaryOp, Expr, Literal, UnaryOp};
use nervml::common::Span;
use nervml::diagnostics::{Reporter, SourceFile};
use nervml::symbols::{BlockType, TypeEnv, VariableSymbol};
use nervml::typeck::{
    deserialize_unit_if_not_primitive, get_type, infer::infer_expr, is_compatible,
    is_primitive_type_name, TypeSymbol,
};

fn env_with(vars: &[(&str, &str, BlockType)]) -> TypeEnv {
    let mut env = TypeEnv::new();
    for (name, ty, block) in vars {
        env.define(VariableSymbol::new(
            *name,
            get_type(ty),
            *block,
            Span::dummy(),
        ));
    }
    env
}

fn reporter() -> Reporter {
    Reporter::new(SourceFile::new(
        "iaf_neuron.nml",
        "V_m' = -(V_m - E_L) / tau_m + I_syn / C_m",
    ))
}

#[test]
fn scenario_negation_of_boolean_literal() {
    let env = TypeEnv::new();
    let mut rep = reporter();
    let mut expr = Expr::unary(
        UnaryOp::Not,
        Expr::literal(Literal::Boolean(true), Span::new(4, 8)),
        Span::new(0, 8),
    );
    assert_eq!(
        infer_expr(&mut expr, &env, &mut rep),
        Ok(TypeSymbol::Boolean)
    );
    assert!(!rep.has_errors());
}

#[test]
fn scenario_negation_of_integer_literal() {
    let env = TypeEnv::new();
    let mut rep = reporter();
    let mut expr = Expr::unary(
        UnaryOp::Not,
        Expr::literal(Literal::Integer(5), Span::new(4, 5)),
        Span::new(0, 5),
    );
    let err = infer_expr(&mut expr, &env, &mut rep).unwrap_err();
    assert_eq!(
        err.message,
        "logical negation requires a Boolean operand, got Integer"
    );
    assert_eq!(rep.error_count(), 1);
}

#[test]
fn scenario_unit_compatibility() {
    assert!(is_compatible(&get_type("mV"), &get_type("V")));
    assert!(!is_compatible(&get_type("mV"), &get_type("ms")));
}

#[test]
fn scenario_primitive_names_and_unit_deserialization() {
    assert!(is_primitive_type_name("Real"));
    assert!(!is_primitive_type_name("mV"));
    assert_eq!(deserialize_unit_if_not_primitive("Real"), "Real");
    assert_eq!(deserialize_unit_if_not_primitive("mV"), "mV");
    assert_eq!(deserialize_unit_if_not_primitive("10^-3*V"), "mV");
}

#[test]
fn widening_is_asymmetric() {
    assert!(is_compatible(&TypeSymbol::Real, &TypeSymbol::Integer));
    assert!(!is_compatible(&TypeSymbol::Integer, &TypeSymbol::Real));
}

#[test]
fn membrane_equation_right_hand_side() {
    // -(V_m - E_L) / tau_m : the canonical leaky-integrate term
    let env = env_with(&[
        ("V_m", "mV", BlockType::State),
        ("E_L", "mV", BlockType::Parameters),
        ("tau_m", "ms", BlockType::Parameters),
    ]);
    let mut rep = reporter();

    let diff = Expr::binary(
        BinaryOp::Sub,
        Expr::variable("V_m", Span::new(9, 12)),
        Expr::variable("E_L", Span::new(15, 18)),
        Span::new(9, 18),
    );
    let neg = Expr::unary(UnaryOp::Neg, diff, Span::new(7, 19));
    let mut rhs = Expr::binary(
        BinaryOp::Div,
        neg,
        Expr::variable("tau_m", Span::new(22, 27)),
        Span::new(7, 27),
    );

    let ty = infer_expr(&mut rhs, &env, &mut rep).unwrap();
    let unit = ty.unit().expect("expected a unit type");
    let expected = nervml::units::Dimension::VOLTAGE.div(&nervml::units::Dimension::TIME);
    assert!(unit.dimension().equals(&expected));
    assert!(!rep.has_errors());
}

#[test]
fn one_diagnostic_per_root_cause() {
    // (V_m + tau_m) < E_L  and  not ((V_m + tau_m) < E_L)
    // the addition is the single root cause; everything above propagates
    let env = env_with(&[
        ("V_m", "mV", BlockType::State),
        ("E_L", "mV", BlockType::Parameters),
        ("tau_m", "ms", BlockType::Parameters),
    ]);
    let mut rep = reporter();

    let bad_sum = Expr::binary(
        BinaryOp::Add,
        Expr::variable("V_m", Span::new(1, 4)),
        Expr::variable("tau_m", Span::new(7, 12)),
        Span::new(1, 12),
    );
    let cmp = Expr::binary(
        BinaryOp::Lt,
        bad_sum,
        Expr::variable("E_L", Span::new(16, 19)),
        Span::new(1, 19),
    );
    let mut root = Expr::unary(UnaryOp::Not, cmp, Span::new(0, 19));

    let err = infer_expr(&mut root, &env, &mut rep).unwrap_err();
    assert!(err.message.contains("incompatible units"));
    // attributed to the deepest failing node
    assert_eq!(err.span, Span::new(1, 12));
    assert_eq!(rep.error_count(), 1);

    // a second pass over the same tree adds nothing
    let again = infer_expr(&mut root, &env, &mut rep);
    assert_eq!(again.unwrap_err(), err);
    assert_eq!(rep.error_count(), 1);
}

#[test]
fn spike_condition_with_calls() {
    // V_m >= Theta and steps(resolution()) > 0
    let env = env_with(&[
        ("V_m", "mV", BlockType::State),
        ("Theta", "mV", BlockType::Parameters),
    ]);
    let mut rep = reporter();

    let threshold = Expr::binary(
        BinaryOp::Ge,
        Expr::variable("V_m", Span::new(0, 3)),
        Expr::variable("Theta", Span::new(7, 12)),
        Span::new(0, 12),
    );
    let steps = Expr::binary(
        BinaryOp::Gt,
        Expr::call(
            "steps",
            vec![Expr::call("resolution", vec![], Span::new(23, 35))],
            Span::new(17, 36),
        ),
        Expr::literal(Literal::Integer(0), Span::new(39, 40)),
        Span::new(17, 40),
    );
    let mut cond = Expr::binary(BinaryOp::And, threshold, steps, Span::new(0, 40));

    assert_eq!(
        infer_expr(&mut cond, &env, &mut rep),
        Ok(TypeSymbol::Boolean)
    );
    assert!(!rep.has_errors());
}

#[test]
fn extreme_exponents_surface_as_data_not_panics() {
    // A persisted type name with exponents past the representable range
    // must come back as the incompatible sentinel, never kill the caller.
    for name in ["m^127*m^127", "10^2147483647*10^2147483647", "(m^2)^127"] {
        let ty = get_type(name);
        assert!(!is_compatible(&ty, &ty), "no overflow rejection for {name}");
    }

    // The same class through inference: squaring past the exponent range
    // is one reported type error at the power node.
    let env = env_with(&[("area", "m^2", BlockType::Parameters)]);
    let mut rep = reporter();
    let mut expr = Expr::binary(
        BinaryOp::Pow,
        Expr::variable("area", Span::new(0, 4)),
        Expr::literal(Literal::Integer(127), Span::new(8, 11)),
        Span::new(0, 11),
    );
    let err = infer_expr(&mut expr, &env, &mut rep).unwrap_err();
    assert_eq!(err.span, Span::new(0, 11));
    assert_eq!(rep.error_count(), 1);
}

#[test]
fn round_trip_unit_names() {
    for name in ["mV", "V", "ms", "pF", "nS", "pA", "mV/ms"] {
        let ty = get_type(name);
        let printed = ty.name();
        let reparsed = get_type(&printed);
        assert!(
            is_compatible(&ty, &reparsed),
            "round trip broke compatibility for {name}"
        );
    }
}

#[test]
fn block_type_tags_survive_for_downstream() {
    // downstream equation processing reads types only through get_type()
    let env = env_with(&[
        ("V_m", "mV", BlockType::State),
        ("V_m_init", "mV", BlockType::InitialValues),
        ("alpha", "Real", BlockType::Internals),
    ]);
    let mut rep = reporter();

    let mut expr = Expr::variable("V_m_init", Span::new(0, 8));
    infer_expr(&mut expr, &env, &mut rep);

    let cached = expr.get_type().expect("type must be cached on the node");
    assert_eq!(cached.as_ref().unwrap().name(), "mV");
    assert_eq!(
        env.resolve("V_m_init").unwrap().block_type,
        BlockType::InitialValues
    );
}
