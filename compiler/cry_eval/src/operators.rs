//! Binary and comparison operator implementations.
//!
//! Direct enum dispatch over the operand pair. The value kinds are a closed
//! set, so pattern matching keeps every combination visible in one place.

use cry_ir::{BinaryOp, ComparisonOp};

use crate::errors::{
    division_by_zero, invalid_operation, modulo_by_zero, operand_mismatch, type_mismatch,
    unsupported_comparison, EvalResult,
};
use crate::policy::{EvalPolicy, MixedOperandPolicy, ZeroDivisionPolicy};
use crate::value::Value;

/// Evaluate an arithmetic operator.
///
/// Numbers support all five operators, strings only `+`. Any other operand
/// pair is handled per `policy.mixed_operands`.
pub fn evaluate_binary(
    left: &Value,
    right: &Value,
    op: BinaryOp,
    policy: &EvalPolicy,
) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            eval_number_binary(*a, *b, op, policy.zero_division)
        }
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        _ => match policy.mixed_operands {
            MixedOperandPolicy::NullFallback => Ok(Value::Null),
            MixedOperandPolicy::Strict => {
                Err(operand_mismatch(left.type_name(), right.type_name(), op))
            }
        },
    }
}

fn eval_number_binary(
    a: f64,
    b: f64,
    op: BinaryOp,
    zero_division: ZeroDivisionPolicy,
) -> EvalResult {
    let checked = matches!(zero_division, ZeroDivisionPolicy::Error);
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if checked && b == 0.0 {
                return Err(division_by_zero());
            }
            a / b
        }
        BinaryOp::Mod => {
            if checked && b == 0.0 {
                return Err(modulo_by_zero());
            }
            a % b
        }
    };
    Ok(Value::Number(result))
}

fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => {
            Err(invalid_operation("string", op))
        }
    }
}

/// Evaluate `==` / `!=`.
///
/// Both operands must be the same kind, and only numbers, booleans, and
/// strings have a defined equality.
pub fn evaluate_comparison(left: &Value, right: &Value, op: ComparisonOp) -> EvalResult {
    let equal = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a.as_str() == b.as_str(),
        _ if left.type_name() != right.type_name() => {
            return Err(type_mismatch(left.type_name(), right.type_name()));
        }
        _ => return Err(unsupported_comparison(left.type_name())),
    };
    Ok(Value::Bool(match op {
        ComparisonOp::Eq => equal,
        ComparisonOp::NotEq => !equal,
    }))
}
