//! Tree-walking interpreter for Cry.
//!
//! # Architecture
//!
//! `Interpreter::evaluate` is the single dispatch point: it matches on the
//! node kind and hands off to one handler per kind. Handlers never recurse
//! into children directly; they call `evaluate` again, so stack growth,
//! tracing, and span attachment happen in exactly one place.
//!
//! - `expr` - identifiers, member access, assignment, object literals,
//!   operators, conditionals
//! - `call` - native and user function calls
//! - `stmt` - programs and declarations
//!
//! The interpreter itself holds no scope state. Every handler receives the
//! environment to evaluate in, and function calls build a fresh child of the
//! callee's captured environment.

mod builder;
mod call;
mod expr;
mod stmt;

pub use builder::InterpreterBuilder;

use cry_ir::{Node, NodeKind};

use crate::diagnostics::CallStack;
use crate::environment::Environment;
use crate::errors::{unimplemented_node, EvalError, EvalResult};
use crate::globals::create_global_env_with;
use crate::policy::EvalPolicy;
use crate::print_handler::SharedPrintHandler;
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

/// Tree-walking interpreter.
pub struct Interpreter {
    policy: EvalPolicy,
    print_handler: SharedPrintHandler,
    call_stack: CallStack,
}

impl Interpreter {
    /// Interpreter with the default policy, printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn policy(&self) -> &EvalPolicy {
        &self.policy
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Output captured by a buffer print handler (empty for stdout).
    pub fn print_output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Current user-function call depth.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Fresh global environment whose `print` writes to this interpreter's
    /// print handler.
    pub fn global_env(&self) -> Result<Environment, EvalError> {
        create_global_env_with(self.print_handler.clone())
    }

    /// Evaluate `node` in `env`.
    ///
    /// Errors leave with the span of the innermost node that has one.
    pub fn evaluate(&mut self, node: &Node, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.dispatch(node, env)).map_err(|e| e.or_span(node.span))
    }

    fn dispatch(&mut self, node: &Node, env: &Environment) -> EvalResult {
        tracing::trace!(kind = node.kind_name(), "evaluate");
        match &node.kind {
            // Statements
            NodeKind::Program { body } => self.eval_program(body, env),
            NodeKind::VarDeclaration {
                constant,
                identifier,
                value,
            } => self.eval_var_declaration(identifier, value.as_deref(), *constant, env),
            NodeKind::FunctionDeclaration {
                name,
                parameters,
                body,
            } => self.eval_function_declaration(name, parameters, body, env),

            // Literals
            NodeKind::NumericLiteral { value } => Ok(Value::Number(*value)),
            NodeKind::StringLiteral { value } => Ok(Value::string(value.as_str())),
            NodeKind::ObjectLiteral { properties } => self.eval_object(properties, env),

            // Expressions
            NodeKind::Identifier { symbol } => env.lookup_var(symbol),
            NodeKind::AssignmentExpr { assignee, value } => {
                self.eval_assignment(assignee, value, env)
            }
            NodeKind::BinaryExpr {
                left,
                right,
                operator,
            } => self.eval_binary(left, *operator, right, env),
            NodeKind::ComparisonExpr {
                left,
                right,
                operator,
            } => self.eval_comparison(left, *operator, right, env),
            NodeKind::MemberExpr { object, property } => self.eval_member(object, property, env),
            NodeKind::CallExpr { caller, args } => self.eval_call(caller, args, node.span, env),
            NodeKind::IfExpr {
                condition,
                then,
                otherwise,
            } => self.eval_if(condition, then, otherwise.as_deref(), env),

            NodeKind::Property(_) => Err(unimplemented_node(node.kind_name(), node)),
        }
    }

    /// Evaluate statements in order; the result is the last statement's
    /// value, or `null` for an empty sequence.
    fn eval_block(&mut self, statements: &[Node], env: &Environment) -> EvalResult {
        let mut last = Value::Null;
        for statement in statements {
            last = self.evaluate(statement, env)?;
        }
        Ok(last)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
