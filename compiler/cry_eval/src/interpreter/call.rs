//! Function call evaluation.
//!
//! Arguments are evaluated left to right in the caller's environment, then
//! the callee. Natives get the caller's environment; user functions run in a
//! fresh child of the environment they were declared in.

use cry_ir::{Node, Span};

use super::Interpreter;
use crate::diagnostics::CallFrame;
use crate::environment::Environment;
use crate::errors::{arity_mismatch, not_callable, EvalResult};
use crate::policy::ArityPolicy;
use crate::value::{FunctionValue, NativeFunctionValue, Value};

impl Interpreter {
    /// `caller(args...)`
    pub(super) fn eval_call(
        &mut self,
        caller: &Node,
        args: &[Node],
        call_span: Span,
        env: &Environment,
    ) -> EvalResult {
        let arg_values = args
            .iter()
            .map(|arg| self.evaluate(arg, env))
            .collect::<Result<Vec<_>, _>>()?;
        match self.evaluate(caller, env)? {
            Value::NativeFunction(native) => call_native(&native, &arg_values, env),
            Value::Function(func) => self.call_function(&func, arg_values, call_span),
            other => Err(not_callable(other.type_name())),
        }
    }

    /// Call a user function with already-evaluated arguments.
    ///
    /// Parameters are bound positionally in a new environment whose parent is
    /// the function's declaration environment. Argument count is checked per
    /// `EvalPolicy::arity`. The body's last statement value is the result.
    #[tracing::instrument(level = "debug", skip_all, fields(function = func.name()))]
    pub fn call_function(
        &mut self,
        func: &FunctionValue,
        args: Vec<Value>,
        call_span: Span,
    ) -> EvalResult {
        let params = func.params();
        if params.len() != args.len() && matches!(self.policy.arity, ArityPolicy::Strict) {
            return Err(arity_mismatch(func.name(), params.len(), args.len()));
        }

        let call_env = Environment::with_parent(func.declaration_env());
        let mut args = args.into_iter();
        for param in params {
            let value = args.next().unwrap_or(Value::Null);
            call_env.declare_var(param, value, false)?;
        }

        self.call_stack
            .push(CallFrame::new(func.name(), call_span))
            .map_err(|e| e.or_span(call_span))?;
        let result = self
            .eval_block(func.body(), &call_env)
            .map_err(|e| self.call_stack.attach_backtrace(e));
        self.call_stack.pop();
        result
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(function = native.name()))]
fn call_native(native: &NativeFunctionValue, args: &[Value], env: &Environment) -> EvalResult {
    native.call(args, env)
}
