//! Error types for evaluation.
//!
//! Every runtime failure is an `EvalError` carrying a structured
//! `EvalErrorKind`. Errors are fatal to the current evaluation: they propagate
//! with `?` to the host, which decides how to report them.
//!
//! Construct errors through the `#[cold]` factory functions below, never by
//! filling in the struct by hand, so that `message` always matches `kind`.

use std::fmt;

use cry_ir::{BinaryOp, Span};

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
///
/// The `Display` impl is the human-readable message; hosts match on the
/// variant to tell failure modes apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Scope
    DuplicateDeclaration {
        name: String,
    },
    ConstantAssignment {
        name: String,
    },
    UndefinedVariable {
        name: String,
    },

    // Operators
    InvalidOperation {
        type_name: String,
        op: BinaryOp,
    },
    OperandMismatch {
        left: String,
        right: String,
        op: BinaryOp,
    },
    DivisionByZero,
    ModuloByZero,
    TypeMismatch {
        left: String,
        right: String,
    },
    UnsupportedComparison {
        type_name: String,
    },

    // Access
    NotAnObject {
        type_name: String,
    },
    UndefinedProperty {
        property: String,
    },
    InvalidAssignmentTarget {
        node_kind: String,
    },

    // Calls
    NotCallable {
        type_name: String,
    },
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    StackOverflow {
        depth: usize,
    },

    // Control
    NonBooleanCondition {
        type_name: String,
    },

    // Dispatch
    UnimplementedNode {
        kind: String,
        node: String,
    },

    /// Failure raised by a host-provided native function.
    Native {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Scope
            Self::DuplicateDeclaration { name } => {
                write!(f, "cannot declare variable {name}: it is already defined")
            }
            Self::ConstantAssignment { name } => {
                write!(
                    f,
                    "cannot reassign variable {name}: it was declared constant"
                )
            }
            Self::UndefinedVariable { name } => write!(f, "variable {name} is not defined"),

            // Operators
            Self::InvalidOperation { type_name, op } => {
                write!(
                    f,
                    "invalid binary operation: `{}` cannot be applied to {type_name}",
                    op.as_symbol()
                )
            }
            Self::OperandMismatch { left, right, op } => {
                write!(
                    f,
                    "cannot apply `{}` to {left} and {right}",
                    op.as_symbol()
                )
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::TypeMismatch { left, right } => {
                write!(
                    f,
                    "cannot compare values of different types {left} and {right}"
                )
            }
            Self::UnsupportedComparison { type_name } => {
                write!(f, "unsupported data type for comparison: {type_name}")
            }

            // Access
            Self::NotAnObject { type_name } => {
                write!(f, "cannot access property of non-object type {type_name}")
            }
            Self::UndefinedProperty { property } => {
                write!(f, "property {property} does not exist on object")
            }
            Self::InvalidAssignmentTarget { node_kind } => {
                write!(f, "invalid left-hand side in assignment: {node_kind}")
            }

            // Calls
            Self::NotCallable { type_name } => {
                write!(f, "cannot call value that is not a function: {type_name}")
            }
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }
            Self::StackOverflow { depth } => {
                write!(f, "maximum call depth exceeded (limit: {depth})")
            }

            // Control
            Self::NonBooleanCondition { type_name } => {
                write!(f, "condition must be a boolean value, got {type_name}")
            }

            // Dispatch
            Self::UnimplementedNode { kind, .. } => write!(f, "unimplemented AST type: {kind}"),

            Self::Native { message } => write!(f, "{message}"),
        }
    }
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Function name.
    pub name: String,
    /// Source location of the call site.
    pub span: Option<Span>,
}

/// Immutable snapshot of the call stack at an error site, most recent call
/// first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    /// Create a backtrace from a list of frames.
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    /// Get the backtrace frames.
    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    /// Check if the backtrace is empty.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of frames in the backtrace.
    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            write!(f, "  {i}: {}", frame.name)?;
            if let Some(span) = frame.span {
                write!(f, " at {span}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message (`kind.to_string()`).
    pub message: String,
    /// Location of the innermost node at which the error surfaced.
    pub span: Option<Span>,
    /// Call stack at the error site, when raised inside a user function.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
            backtrace: None,
        }
    }

    /// Error raised by a native function.
    pub fn native(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::Native {
            message: message.into(),
        })
    }

    /// Attach a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already set. Dummy spans
    /// carry no location and are ignored.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        if self.span.is_none() && !span.is_dummy() {
            self.span = Some(span);
        }
        self
    }

    /// Attach a backtrace to this error.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Scope Errors

/// Redeclaring a name already bound in the same scope.
#[cold]
pub fn duplicate_declaration(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateDeclaration {
        name: name.to_string(),
    })
}

/// Assigning to a name declared constant.
#[cold]
pub fn constant_assignment(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ConstantAssignment {
        name: name.to_string(),
    })
}

/// Looking up or assigning a name no reachable scope declares.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

// Operator Errors

/// Operator not supported for the operand kind (e.g. `-` on strings).
#[cold]
pub fn invalid_operation(type_name: &str, op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperation {
        type_name: type_name.to_string(),
        op,
    })
}

/// Binary operands of different kinds under the strict operand policy.
#[cold]
pub fn operand_mismatch(left: &str, right: &str, op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandMismatch {
        left: left.to_string(),
        right: right.to_string(),
        op,
    })
}

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Modulo by zero error.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

/// Comparing values of different kinds.
#[cold]
pub fn type_mismatch(left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        left: left.to_string(),
        right: right.to_string(),
    })
}

/// Comparing values whose kind has no defined equality.
#[cold]
pub fn unsupported_comparison(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedComparison {
        type_name: type_name.to_string(),
    })
}

// Access Errors

/// Member access on a non-object value.
#[cold]
pub fn not_an_object(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAnObject {
        type_name: type_name.to_string(),
    })
}

/// Member access naming a missing property.
#[cold]
pub fn undefined_property(property: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedProperty {
        property: property.to_string(),
    })
}

/// Assignment whose left-hand side is not a bare identifier.
#[cold]
pub fn invalid_assignment_target(node_kind: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidAssignmentTarget {
        node_kind: node_kind.to_string(),
    })
}

// Call Errors

/// Calling a value that is not a function.
#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

/// Wrong number of arguments under the strict arity policy.
#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// Call depth limit exceeded.
#[cold]
pub fn stack_overflow(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}

// Control Errors

/// Conditional whose condition is not a boolean.
#[cold]
pub fn non_boolean_condition(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonBooleanCondition {
        type_name: type_name.to_string(),
    })
}

// Dispatch Errors

/// Node kind with no evaluation handler.
#[cold]
pub fn unimplemented_node(kind: &str, node: &dyn fmt::Debug) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnimplementedNode {
        kind: kind.to_string(),
        node: format!("{node:?}"),
    })
}

#[cfg(test)]
mod tests;
