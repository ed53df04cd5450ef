//! Cry Eval - Tree-walking evaluator for the Cry scripting language.
//!
//! Takes an already-built syntax tree (`cry_ir::Node`) and an environment,
//! and produces a runtime value or an error.
//!
//! # Architecture
//!
//! - `Environment`: lexical scope records linked to their parents
//! - `Value`: the closed set of runtime value kinds
//! - `Interpreter`: the dispatch core plus expression and statement handlers
//! - `evaluate_binary` / `evaluate_comparison`: direct operator dispatch
//! - `EvalPolicy`: the host-selectable behaviors (mixed operands, arity,
//!   division by zero, call depth)
//! - `create_global_env`: the standard root environment (`true`, `false`,
//!   `null`, `print`, `time`)
//!
//! ```ignore
//! let env = cry_eval::create_global_env()?;
//! let value = cry_eval::evaluate(&program, &env)?;
//! ```

mod diagnostics;
mod environment;
pub mod errors;
mod globals;
pub mod interpreter;
mod operators;
mod policy;
mod print_handler;
mod stack;
mod value;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

pub use diagnostics::{CallFrame, CallStack};
pub use environment::{Environment, LocalScope, Mutability, Scope};
pub use errors::{BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult};
pub use globals::{create_global_env, create_global_env_with};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, evaluate_comparison};
pub use policy::{
    ArityPolicy, EvalPolicy, MixedOperandPolicy, ZeroDivisionPolicy, DEFAULT_MAX_CALL_DEPTH,
};
pub use print_handler::{
    buffer_handler, render_print_line, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use value::{FunctionValue, Heap, NativeFn, NativeFunctionValue, ObjectValue, Value};

use cry_ir::Node;

/// Evaluate `node` in `env` with the default policy.
pub fn evaluate(node: &Node, env: &Environment) -> EvalResult {
    Interpreter::new().evaluate(node, env)
}
