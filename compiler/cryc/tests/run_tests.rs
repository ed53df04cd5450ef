//! Integration tests for `cry run`: syntax trees loaded from disk.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io::Write;
use std::path::Path;
use std::process::Command;

use cry_eval::{buffer_handler, EvalErrorKind, Value};
use cryc::commands::{execute, report_error, RunError, RunOptions};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn ast_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(json.as_bytes()).expect("write AST");
    file.flush().expect("flush AST");
    file
}

const SUM_PROGRAM: &str = r#"{
    "kind": "Program",
    "body": [
        {"kind": "VarDeclaration", "constant": false, "identifier": "x",
         "value": {"kind": "NumericLiteral", "value": 10}},
        {"kind": "VarDeclaration", "constant": false, "identifier": "y",
         "value": {"kind": "NumericLiteral", "value": 20}},
        {"kind": "CallExpr",
         "caller": {"kind": "Identifier", "symbol": "print"},
         "args": [{"kind": "StringLiteral", "value": "sum:"},
                  {"kind": "BinaryExpr", "operator": "+",
                   "left": {"kind": "Identifier", "symbol": "x"},
                   "right": {"kind": "Identifier", "symbol": "y"}}]},
        {"kind": "BinaryExpr", "operator": "+",
         "left": {"kind": "Identifier", "symbol": "x"},
         "right": {"kind": "Identifier", "symbol": "y"}}
    ]
}"#;

const UNDEFINED_IN_FUNCTION: &str = r#"{
    "kind": "Program",
    "body": [
        {"kind": "FunctionDeclaration", "name": "broken", "parameters": [],
         "body": [{"kind": "Identifier", "symbol": "missing", "span": {"start": 20, "end": 27}}]},
        {"kind": "CallExpr", "caller": {"kind": "Identifier", "symbol": "broken"}, "args": [],
         "span": {"start": 40, "end": 48}}
    ]
}"#;

#[test]
fn evaluates_program_from_file() {
    let file = ast_file(SUM_PROGRAM);
    let handler = buffer_handler();
    let value = execute(file.path(), &RunOptions::default(), handler.clone()).unwrap();
    assert_eq!(value, Value::Number(30.0));
    assert_eq!(handler.get_output(), "sum: 30\n");
}

#[test]
fn closure_program_from_file() {
    // fn add(a, b) { a + b }  add(2, 3)
    let file = ast_file(
        r#"{"kind": "Program", "body": [
            {"kind": "FunctionDeclaration", "name": "add", "parameters": ["a", "b"],
             "body": [{"kind": "BinaryExpr", "operator": "+",
                       "left": {"kind": "Identifier", "symbol": "a"},
                       "right": {"kind": "Identifier", "symbol": "b"}}]},
            {"kind": "CallExpr", "caller": {"kind": "Identifier", "symbol": "add"},
             "args": [{"kind": "NumericLiteral", "value": 2},
                      {"kind": "NumericLiteral", "value": 3}]}
        ]}"#,
    );
    let value = execute(file.path(), &RunOptions::default(), buffer_handler()).unwrap();
    assert_eq!(value, Value::Number(5.0));
}

#[test]
fn policy_flags_reach_the_interpreter() {
    let file = ast_file(
        r#"{"kind": "BinaryExpr", "operator": "/",
            "left": {"kind": "NumericLiteral", "value": 1},
            "right": {"kind": "NumericLiteral", "value": 0}}"#,
    );

    let err = execute(file.path(), &RunOptions::default(), buffer_handler()).unwrap_err();
    assert!(matches!(
        err,
        RunError::Eval(ref e) if e.kind == EvalErrorKind::DivisionByZero
    ));

    let mut options = RunOptions::default();
    options.policy.zero_division = cry_eval::ZeroDivisionPolicy::Ieee;
    let value = execute(file.path(), &options, buffer_handler()).unwrap();
    assert_eq!(value, Value::Number(f64::INFINITY));
}

#[test]
fn malformed_json_is_a_load_error() {
    let file = ast_file(r#"{"kind": "Nope"}"#);
    let err = execute(file.path(), &RunOptions::default(), buffer_handler()).unwrap_err();
    assert!(matches!(err, RunError::Load(_)));
    assert!(err.to_string().contains("is not a valid syntax tree"));
}

#[test]
fn report_includes_span_and_backtrace() {
    let file = ast_file(UNDEFINED_IN_FUNCTION);
    let err = execute(file.path(), &RunOptions::default(), buffer_handler()).unwrap_err();
    let report = report_error(Path::new("prog.json"), &err);
    assert_eq!(
        report,
        "error: variable missing is not defined\n\
         \x20 --> prog.json at 20..27\n\
         stack backtrace:\n\
         \x20 0: broken at 40..48\n"
    );
}

#[test]
fn binary_exits_with_error_status() {
    let file = ast_file(UNDEFINED_IN_FUNCTION);
    let output = Command::new(env!("CARGO_BIN_EXE_cry"))
        .arg("run")
        .arg(file.path())
        .output()
        .expect("run cry");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: variable missing is not defined"));
}

#[test]
fn binary_prints_result_on_request() {
    let file = ast_file(SUM_PROGRAM);
    let output = Command::new(env!("CARGO_BIN_EXE_cry"))
        .arg("run")
        .arg(file.path())
        .arg("--print-result")
        .output()
        .expect("run cry");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "sum: 30\n30\n");
}

#[test]
fn binary_rejects_unknown_option() {
    let output = Command::new(env!("CARGO_BIN_EXE_cry"))
        .args(["run", "--turbo"])
        .output()
        .expect("run cry");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: unknown option '--turbo'"));
}
