//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::diagnostics::CallStack;
use crate::policy::EvalPolicy;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Defaults: `EvalPolicy::default()` and a stdout print handler.
#[derive(Default)]
pub struct InterpreterBuilder {
    policy: Option<EvalPolicy>,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the evaluation policy.
    #[must_use]
    pub fn policy(mut self, policy: EvalPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Set the handler `print` writes to in environments from
    /// `Interpreter::global_env`.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter {
        let policy = self.policy.unwrap_or_default();
        let call_stack = CallStack::new(policy.max_call_depth);
        Interpreter {
            policy,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_stack,
        }
    }
}
