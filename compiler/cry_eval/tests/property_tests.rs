//! Property-based tests for the evaluator.
//!
//! Generates operands and names and checks:
//! 1. Number arithmetic matches host `f64` arithmetic exactly
//! 2. Strings support `+` (concatenation) and nothing else
//! 3. Inner-scope declarations never disturb outer bindings
//! 4. Constant bindings survive failed reassignment
//! 5. Number equality agrees with the host

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::float_cmp,
    reason = "Proptest macros generate code with these patterns"
)]

use cry_eval::{
    buffer_handler, create_global_env_with, evaluate, Environment, EvalErrorKind, EvalResult, Value,
};
use cry_ir::{BinaryOp, ComparisonOp, Node};
use proptest::prelude::*;

// -- Strategies --

fn number_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e12f64..1.0e12,
        (-1_000_000i64..1_000_000).prop_map(|n| n as f64),
        Just(0.0),
    ]
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,10}")
        .expect("valid regex")
        .prop_filter("not a global", |s| {
            !matches!(s.as_str(), "true" | "false" | "null" | "print" | "time")
        })
}

fn eval_binary(left: Node, op: BinaryOp, right: Node) -> EvalResult {
    let env = create_global_env_with(buffer_handler()).unwrap();
    evaluate(&Node::program(vec![Node::binary(left, op, right)]), &env)
}

// -- Properties --

proptest! {
    #[test]
    fn number_arithmetic_matches_host(a in number_strategy(), b in number_strategy()) {
        let cases = [
            (BinaryOp::Add, a + b),
            (BinaryOp::Sub, a - b),
            (BinaryOp::Mul, a * b),
        ];
        for (op, expected) in cases {
            let result = eval_binary(Node::number(a), op, Node::number(b)).unwrap();
            prop_assert_eq!(result, Value::Number(expected));
        }
    }

    #[test]
    fn nonzero_division_matches_host(
        a in number_strategy(),
        b in number_strategy().prop_filter("nonzero", |b| *b != 0.0),
    ) {
        let quotient = eval_binary(Node::number(a), BinaryOp::Div, Node::number(b)).unwrap();
        prop_assert_eq!(quotient, Value::Number(a / b));
        let remainder = eval_binary(Node::number(a), BinaryOp::Mod, Node::number(b)).unwrap();
        prop_assert_eq!(remainder, Value::Number(a % b));
    }

    #[test]
    fn strings_only_concatenate(a in ".{0,20}", b in ".{0,20}") {
        let joined = eval_binary(Node::string(a.as_str()), BinaryOp::Add, Node::string(b.as_str()))
            .unwrap();
        prop_assert_eq!(joined, Value::string(format!("{a}{b}")));

        for op in [BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div, BinaryOp::Mod] {
            let err = eval_binary(Node::string(a.as_str()), op, Node::string(b.as_str()))
                .unwrap_err();
            let is_invalid_operation = matches!(err.kind, EvalErrorKind::InvalidOperation { .. });
            prop_assert!(is_invalid_operation);
        }
    }

    #[test]
    fn shadowing_leaves_outer_binding(
        name in identifier_strategy(),
        outer in number_strategy(),
        inner in number_strategy(),
    ) {
        let global = Environment::new();
        global.declare_var(&name, Value::Number(outer), false).unwrap();
        let child = Environment::with_parent(&global);
        child.declare_var(&name, Value::Number(inner), false).unwrap();

        prop_assert_eq!(child.lookup_var(&name).unwrap(), Value::Number(inner));
        prop_assert_eq!(global.lookup_var(&name).unwrap(), Value::Number(outer));
    }

    #[test]
    fn constants_survive_reassignment(
        name in identifier_strategy(),
        original in number_strategy(),
        replacement in number_strategy(),
    ) {
        let env = Environment::new();
        env.declare_var(&name, Value::Number(original), true).unwrap();
        let err = env.assign_var(&name, Value::Number(replacement)).unwrap_err();
        let is_constant_assignment =
            matches!(err.kind, EvalErrorKind::ConstantAssignment { .. });
        prop_assert!(is_constant_assignment);
        prop_assert_eq!(env.lookup_var(&name).unwrap(), Value::Number(original));
    }

    #[test]
    fn number_equality_matches_host(a in number_strategy(), b in number_strategy()) {
        let env = create_global_env_with(buffer_handler()).unwrap();
        let program = Node::program(vec![Node::comparison(
            Node::number(a),
            ComparisonOp::Eq,
            Node::number(b),
        )]);
        prop_assert_eq!(evaluate(&program, &env).unwrap(), Value::Bool(a == b));
    }
}
