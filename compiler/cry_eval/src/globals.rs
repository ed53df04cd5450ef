//! Global environment bootstrap.
//!
//! Every program runs against a root environment pre-populated with the
//! literal names and the host natives. All of them are constant.

use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::environment::Environment;
use crate::errors::{EvalError, EvalResult};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::value::Value;

/// Global environment whose `print` writes to stdout.
pub fn create_global_env() -> Result<Environment, EvalError> {
    create_global_env_with(stdout_handler())
}

/// Global environment whose `print` writes to `handler`.
pub fn create_global_env_with(handler: SharedPrintHandler) -> Result<Environment, EvalError> {
    let env = Environment::new();

    env.declare_var("true", Value::Bool(true), true)?;
    env.declare_var("false", Value::Bool(false), true)?;
    env.declare_var("null", Value::Null, true)?;

    env.declare_var(
        "print",
        Value::native(
            "print",
            Rc::new(move |args: &[Value], _env: &Environment| {
                handler.print_values(args);
                Ok(Value::Null)
            }),
        ),
        true,
    )?;
    env.declare_var("time", Value::native("time", Rc::new(native_time)), true)?;

    tracing::debug!("global environment initialized");
    Ok(env)
}

/// Milliseconds since the Unix epoch.
#[expect(
    clippy::cast_precision_loss,
    reason = "millisecond timestamps stay well inside f64's exact integer range"
)]
fn native_time(_args: &[Value], _env: &Environment) -> EvalResult {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| EvalError::native(format!("system clock is before the Unix epoch: {e}")))?;
    Ok(Value::Number(elapsed.as_millis() as f64))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;
    use crate::print_handler::buffer_handler;
    use pretty_assertions::assert_eq;

    #[test]
    fn literal_names_are_bound() {
        let env = create_global_env_with(buffer_handler()).unwrap();
        assert_eq!(env.lookup_var("true").unwrap(), Value::Bool(true));
        assert_eq!(env.lookup_var("false").unwrap(), Value::Bool(false));
        assert_eq!(env.lookup_var("null").unwrap(), Value::Null);
        assert!(!env.has_parent());
    }

    #[test]
    fn globals_are_constant() {
        let env = create_global_env_with(buffer_handler()).unwrap();
        for name in ["true", "false", "null", "print", "time"] {
            let err = env.assign_var(name, Value::Null).unwrap_err();
            assert_eq!(
                err.kind,
                EvalErrorKind::ConstantAssignment {
                    name: name.to_string()
                }
            );
        }
    }

    #[test]
    fn print_writes_to_handler_and_returns_null() {
        let handler = buffer_handler();
        let env = create_global_env_with(handler.clone()).unwrap();
        let Value::NativeFunction(print) = env.lookup_var("print").unwrap() else {
            panic!("print is not a native function");
        };
        let result = print
            .call(&[Value::string("hi"), Value::Number(2.0)], &env)
            .unwrap();
        assert_eq!(result, Value::Null);
        assert_eq!(handler.get_output(), "hi 2\n");
    }

    #[test]
    fn time_returns_recent_millis() {
        let env = create_global_env_with(buffer_handler()).unwrap();
        let Value::NativeFunction(time) = env.lookup_var("time").unwrap() else {
            panic!("time is not a native function");
        };
        let millis = time.call(&[], &env).unwrap().as_number().unwrap();
        // 2020-01-01T00:00:00Z
        assert!(millis > 1_577_836_800_000.0);
        assert_eq!(millis.fract(), 0.0);
    }
}
