//! Evaluation policies.
//!
//! The language leaves a few behaviors open: what binary operators do with
//! operands of different kinds, whether calls check arity, and what division
//! by zero produces. `EvalPolicy` pins each one so a host can choose between
//! failing fast and the permissive behavior older scripts depend on.

/// Default limit on nested user-function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Behavior of a binary operator whose operands are not both numbers or both
/// strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MixedOperandPolicy {
    /// The expression evaluates to `null`.
    #[default]
    NullFallback,
    /// Fail with `OperandMismatch`.
    Strict,
}

/// Behavior when a user function is called with the wrong number of
/// arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ArityPolicy {
    /// Fail with `ArityMismatch`.
    #[default]
    Strict,
    /// Missing trailing parameters bind `null`; extra arguments are dropped.
    Lenient,
}

/// Behavior of `/` and `%` with a zero divisor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ZeroDivisionPolicy {
    /// Fail with `DivisionByZero` / `ModuloByZero`.
    #[default]
    Error,
    /// IEEE 754 results (`Infinity`, `-Infinity`, `NaN`).
    Ieee,
}

/// Evaluation policy for one interpreter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EvalPolicy {
    pub mixed_operands: MixedOperandPolicy,
    pub arity: ArityPolicy,
    pub zero_division: ZeroDivisionPolicy,
    /// Maximum user-function call depth, or `None` for unlimited.
    pub max_call_depth: Option<usize>,
}

impl EvalPolicy {
    /// The behavior scripts were written against: mixed operands yield
    /// `null`, arity is unchecked, division follows IEEE.
    pub fn permissive() -> Self {
        EvalPolicy {
            mixed_operands: MixedOperandPolicy::NullFallback,
            arity: ArityPolicy::Lenient,
            zero_division: ZeroDivisionPolicy::Ieee,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Every open behavior fails fast.
    pub fn strict() -> Self {
        EvalPolicy {
            mixed_operands: MixedOperandPolicy::Strict,
            arity: ArityPolicy::Strict,
            zero_division: ZeroDivisionPolicy::Error,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

impl Default for EvalPolicy {
    fn default() -> Self {
        EvalPolicy {
            mixed_operands: MixedOperandPolicy::default(),
            arity: ArityPolicy::default(),
            zero_division: ZeroDivisionPolicy::default(),
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}
