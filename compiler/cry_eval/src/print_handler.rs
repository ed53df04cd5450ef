//! Output sink for the `print` native.
//!
//! Scripts print through a handler rather than straight to stdout so hosts
//! and tests can capture what a program wrote:
//! - Stdout: the command-line host (default)
//! - Buffer: tests and embedders that want the text back
//!
//! Enum dispatch keeps the call static; the set of sinks is closed.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::value::Value;

/// Render `print` arguments: each value's print form, separated by spaces.
pub fn render_print_line(args: &[Value]) -> String {
    let mut line = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&arg.to_print_string());
    }
    line
}

/// Handler that captures output to a buffer.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Append a line (with newline).
    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Everything captured so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Print sink.
pub enum PrintHandlerImpl {
    /// Writes to stdout.
    Stdout,
    /// Captures to a buffer.
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Write one line.
    ///
    /// A closed stdout (e.g. a downstream pipe that exited) is not a script
    /// error, so write failures are dropped.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                let _ = writeln!(out, "{msg}");
            }
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Write the `print` rendering of `args` as one line.
    pub fn print_values(&self, args: &[Value]) {
        self.println(&render_print_line(args));
    }

    /// Captured output. Always empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }

    /// Discard captured output. No-op for stdout.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared print handler.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Handler that writes to stdout.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

/// Handler that captures output for later inspection.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_handler_println_captures_with_newline() {
        let handler = BufferPrintHandler::new();
        handler.println("hello");
        assert_eq!(handler.get_output(), "hello\n");
    }

    #[test]
    fn buffer_handler_clear_empties_buffer() {
        let handler = buffer_handler();
        handler.println("hello");
        assert!(!handler.get_output().is_empty());
        handler.clear();
        assert!(handler.get_output().is_empty());
    }

    #[test]
    fn stdout_handler_captures_nothing() {
        let handler = stdout_handler();
        handler.clear();
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn print_values_joins_with_spaces() {
        let handler = buffer_handler();
        handler.print_values(&[
            Value::string("x ="),
            Value::Number(30.0),
            Value::Bool(true),
            Value::Null,
        ]);
        handler.print_values(&[]);
        assert_eq!(handler.get_output(), "x = 30 true null\n\n");
    }

    #[test]
    fn render_quotes_strings_only_inside_objects() {
        let obj = Value::object([("name".to_string(), Value::string("cry"))]);
        assert_eq!(
            render_print_line(&[Value::string("obj:"), obj]),
            "obj: { name: \"cry\" }"
        );
    }

    #[test]
    fn large_numbers_print_in_exponent_form() {
        let line = render_print_line(&[Value::string("big:"), Value::Number(1e300)]);
        assert_eq!(line, "big: 1e+300");
    }
}
