//! The `run` command: load a serialized syntax tree and evaluate it.

use std::fmt;
use std::path::{Path, PathBuf};

use cry_eval::{
    ArityPolicy, EvalError, EvalPolicy, InterpreterBuilder, MixedOperandPolicy, SharedPrintHandler,
    Value, ZeroDivisionPolicy,
};
use cry_ir::Node;

/// Options for `cry run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub policy: EvalPolicy,
    /// Print the program's final value after evaluation.
    pub print_result: bool,
}

/// Parse `cry run` flags.
///
/// Returns the options and the first non-flag argument (the AST path), or a
/// message naming the offending flag.
pub fn parse_run_options(args: &[String]) -> Result<(RunOptions, Option<String>), String> {
    let mut options = RunOptions::default();
    let mut path = None;

    for arg in args {
        if arg == "--strict-operands" {
            options.policy.mixed_operands = MixedOperandPolicy::Strict;
        } else if arg == "--lenient-arity" {
            options.policy.arity = ArityPolicy::Lenient;
        } else if arg == "--ieee-division" {
            options.policy.zero_division = ZeroDivisionPolicy::Ieee;
        } else if arg == "--print-result" {
            options.print_result = true;
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            options.policy.max_call_depth = if depth == "none" {
                None
            } else {
                let n = depth
                    .parse::<usize>()
                    .map_err(|_| format!("invalid --max-depth value '{depth}'"))?;
                Some(n)
            };
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    Ok((options, path))
}

/// Failure to turn a file into a syntax tree.
#[derive(Debug)]
pub enum LoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(
                    f,
                    "'{}' is not a valid syntax tree: {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Read and decode a JSON syntax tree.
pub fn load_program(path: &Path) -> Result<Node, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Either stage of `cry run` failing.
#[derive(Debug)]
pub enum RunError {
    Load(LoadError),
    Eval(EvalError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<LoadError> for RunError {
    fn from(e: LoadError) -> Self {
        RunError::Load(e)
    }
}

impl From<EvalError> for RunError {
    fn from(e: EvalError) -> Self {
        RunError::Eval(e)
    }
}

/// Load `path` and evaluate it against a fresh global environment whose
/// `print` writes to `handler`.
pub fn execute(
    path: &Path,
    options: &RunOptions,
    handler: SharedPrintHandler,
) -> Result<Value, RunError> {
    let program = load_program(path)?;
    let mut interpreter = InterpreterBuilder::new()
        .policy(options.policy.clone())
        .print_handler(handler)
        .build();
    let env = interpreter.global_env()?;
    tracing::debug!(path = %path.display(), "evaluating program");
    Ok(interpreter.evaluate(&program, &env)?)
}

/// Render an error the way `cry run` reports it on stderr.
pub fn report_error(path: &Path, error: &RunError) -> String {
    let mut out = format!("error: {error}\n");
    if let RunError::Eval(e) = error {
        if let Some(span) = e.span {
            out.push_str(&format!("  --> {} at {span}\n", path.display()));
        }
        if let Some(backtrace) = &e.backtrace {
            out.push_str(&backtrace.to_string());
        }
    }
    out
}

/// `cry run`: evaluate, print the result if asked, exit 1 on failure.
pub fn run_file(path: &str, options: &RunOptions) {
    let path = Path::new(path);
    match execute(path, options, cry_eval::stdout_handler()) {
        Ok(value) => {
            if options.print_result {
                println!("{value}");
            }
        }
        Err(error) => {
            eprint!("{}", report_error(path, &error));
            std::process::exit(1);
        }
    }
}
