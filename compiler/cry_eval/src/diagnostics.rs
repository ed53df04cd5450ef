//! Call stack tracking.
//!
//! - `CallStack`: live user-function frames, with the depth limit checked on
//!   push
//! - `CallFrame`: callee name and call-site span
//!
//! When a function body fails, the stack is snapshotted into an
//! `EvalBacktrace` attached to the error.

use cry_ir::Span;

use crate::errors::{stack_overflow, BacktraceFrame, EvalBacktrace, EvalError};

/// A single frame in the live call stack.
#[derive(Clone, Debug)]
pub struct CallFrame {
    /// Callee name.
    pub name: String,
    /// Source location of the call site (not the definition).
    pub call_span: Option<Span>,
}

impl CallFrame {
    pub fn new(name: impl Into<String>, call_span: Span) -> Self {
        CallFrame {
            name: name.into(),
            call_span: (!call_span.is_dummy()).then_some(call_span),
        }
    }
}

/// Live call stack for the interpreter.
///
/// ```ignore
/// let mut stack = CallStack::new(Some(10_000));
/// stack.push(CallFrame::new("add", span))?;
/// // ... evaluate function body ...
/// stack.pop();
/// ```
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` is `None` for unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// On overflow the frame is not pushed and a `StackOverflow` error is
    /// returned.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(stack_overflow(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Pop the most recent call frame.
    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Snapshot the stack, most recent call first.
    pub fn capture(&self) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|f| BacktraceFrame {
                name: f.name.clone(),
                span: f.call_span,
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a backtrace to `err` unless it already carries one or the
    /// stack is empty.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() || err.backtrace.is_some() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::errors::{undefined_variable, EvalErrorKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn push_pop_tracks_depth() {
        let mut stack = CallStack::default();
        stack.push(CallFrame::new("a", Span::DUMMY)).unwrap();
        stack.push(CallFrame::new("b", Span::new(3, 7))).unwrap();
        assert_eq!(stack.depth(), 2);
        stack.pop();
        assert_eq!(stack.depth(), 1);
        stack.pop();
        assert!(stack.is_empty());
    }

    #[test]
    fn push_past_limit_overflows() {
        let mut stack = CallStack::new(Some(2));
        stack.push(CallFrame::new("f", Span::DUMMY)).unwrap();
        stack.push(CallFrame::new("f", Span::DUMMY)).unwrap();
        let err = stack.push(CallFrame::new("f", Span::DUMMY)).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 2 });
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn capture_is_most_recent_first() {
        let mut stack = CallStack::default();
        stack.push(CallFrame::new("outer", Span::DUMMY)).unwrap();
        stack
            .push(CallFrame::new("inner", Span::new(5, 9)))
            .unwrap();
        let bt = stack.capture();
        assert_eq!(
            bt.frames(),
            &[
                BacktraceFrame {
                    name: "inner".to_string(),
                    span: Some(Span::new(5, 9)),
                },
                BacktraceFrame {
                    name: "outer".to_string(),
                    span: None,
                },
            ]
        );
    }

    #[test]
    fn attach_backtrace_only_once() {
        let mut stack = CallStack::default();
        let err = stack.attach_backtrace(undefined_variable("x"));
        assert!(err.backtrace.is_none());

        stack.push(CallFrame::new("outer", Span::DUMMY)).unwrap();
        stack.push(CallFrame::new("inner", Span::DUMMY)).unwrap();
        let err = stack.attach_backtrace(undefined_variable("x"));
        stack.pop();
        let err = stack.attach_backtrace(err);
        assert_eq!(err.backtrace.map(|bt| bt.len()), Some(2));
    }
}
