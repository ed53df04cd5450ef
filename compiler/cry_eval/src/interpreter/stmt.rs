//! Programs and declarations.

use std::sync::Arc;

use cry_ir::{Block, Node};

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::value::{FunctionValue, Value};

impl Interpreter {
    /// Top-level statements run directly in the supplied environment.
    pub(super) fn eval_program(&mut self, body: &[Node], env: &Environment) -> EvalResult {
        self.eval_block(body, env)
    }

    /// `let`/`const`. A declaration without an initializer binds `null`.
    pub(super) fn eval_var_declaration(
        &mut self,
        identifier: &str,
        value: Option<&Node>,
        constant: bool,
        env: &Environment,
    ) -> EvalResult {
        let value = match value {
            Some(init) => self.evaluate(init, env)?,
            None => Value::Null,
        };
        tracing::debug!(variable = identifier, constant, "declare variable");
        env.declare_var(identifier, value, constant)
    }

    /// Build a closure over `env` and bind it, as a constant, under its own
    /// name in `env`. The body sees later bindings in `env`, which is what
    /// makes recursion work.
    pub(super) fn eval_function_declaration(
        &mut self,
        name: &str,
        parameters: &[String],
        body: &Block,
        env: &Environment,
    ) -> EvalResult {
        let func = FunctionValue::new(name, parameters.to_vec(), Arc::clone(body), env.clone());
        tracing::debug!(
            function = name,
            params = parameters.len(),
            "declare function"
        );
        env.declare_var(name, Value::Function(func), true)
    }
}
