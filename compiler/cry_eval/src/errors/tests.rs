use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_message_matches_kind() {
    let err = undefined_variable("x");
    assert_eq!(err.message, "variable x is not defined");
    assert_eq!(err.to_string(), err.kind.to_string());
    assert!(err.span.is_none());
    assert!(err.backtrace.is_none());
}

#[test]
fn test_operator_messages() {
    assert_eq!(
        invalid_operation("string", BinaryOp::Sub).message,
        "invalid binary operation: `-` cannot be applied to string"
    );
    assert_eq!(
        operand_mismatch("number", "string", BinaryOp::Add).message,
        "cannot apply `+` to number and string"
    );
    assert_eq!(division_by_zero().message, "division by zero");
    assert_eq!(
        type_mismatch("number", "string").message,
        "cannot compare values of different types number and string"
    );
}

#[test]
fn test_arity_message_pluralizes() {
    let one = arity_mismatch("f", 1, 2);
    assert_eq!(one.message, "f expects 1 argument, got 2");
    let two = arity_mismatch("g", 2, 0);
    assert_eq!(two.message, "g expects 2 arguments, got 0");
}

#[test]
fn test_unimplemented_node_keeps_debug_dump() {
    let err = unimplemented_node("Property", &"payload");
    assert_eq!(err.message, "unimplemented AST type: Property");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnimplementedNode {
            kind: "Property".to_string(),
            node: "\"payload\"".to_string(),
        }
    );
}

#[test]
fn test_or_span_keeps_innermost() {
    let err = not_callable("number")
        .or_span(Span::new(4, 6))
        .or_span(Span::new(0, 10));
    assert_eq!(err.span, Some(Span::new(4, 6)));
}

#[test]
fn test_or_span_ignores_dummy() {
    let err = not_callable("number").or_span(Span::DUMMY);
    assert!(err.span.is_none());
    let err = err.with_span(Span::new(1, 2));
    assert_eq!(err.span, Some(Span::new(1, 2)));
}

#[test]
fn test_native_error() {
    let err = EvalError::native("boom");
    assert_eq!(
        err.kind,
        EvalErrorKind::Native {
            message: "boom".to_string()
        }
    );
    assert_eq!(err.to_string(), "boom");
}

#[test]
fn test_backtrace_display() {
    let bt = EvalBacktrace::new(vec![
        BacktraceFrame {
            name: "inner".to_string(),
            span: Some(Span::new(10, 14)),
        },
        BacktraceFrame {
            name: "outer".to_string(),
            span: None,
        },
    ]);
    assert_eq!(bt.len(), 2);
    assert_eq!(
        bt.to_string(),
        "stack backtrace:\n  0: inner at 10..14\n  1: outer\n"
    );
    assert_eq!(EvalBacktrace::default().to_string(), "");
}
