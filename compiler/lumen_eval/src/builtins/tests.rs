use std::fs;

use lumen_ir::StringInterner;
use pretty_assertions::assert_eq;

use super::call_builtin;
use crate::{buffer_handler, Builtin, EvalErrorKind, Value};

#[test]
fn print_writes_display_form_and_returns_false() {
    let interner = StringInterner::new();
    let printer = buffer_handler();
    let result = call_builtin(Builtin::Print, &[Value::Number(14.0)], &printer, &interner);
    assert_eq!(result, Ok(Value::FALSE));
    call_builtin(Builtin::Print, &[Value::string("hi")], &printer, &interner).unwrap();
    assert_eq!(printer.output(), "14\nhi\n");
}

#[test]
fn print_without_arguments_prints_false() {
    let interner = StringInterner::new();
    let printer = buffer_handler();
    call_builtin(Builtin::Print, &[], &printer, &interner).unwrap();
    assert_eq!(printer.output(), "false\n");
}

#[test]
fn length_counts_characters() {
    let interner = StringInterner::new();
    let printer = buffer_handler();
    let len = |s: &str| call_builtin(Builtin::Length, &[Value::string(s)], &printer, &interner);
    assert_eq!(len("hello"), Ok(Value::Number(5.0)));
    assert_eq!(len(""), Ok(Value::Number(0.0)));
    assert_eq!(len("héllo"), Ok(Value::Number(5.0)));
    // Scalar values, not UTF-16 code units.
    assert_eq!(len("😀"), Ok(Value::Number(1.0)));
}

#[test]
fn length_rejects_non_strings() {
    let interner = StringInterner::new();
    let printer = buffer_handler();
    let err = call_builtin(Builtin::Length, &[Value::Number(5.0)], &printer, &interner)
        .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::WrongArgType {
            function: "length",
            expected: "a string",
            found: "number",
        }
    );
    let missing = call_builtin(Builtin::Length, &[], &printer, &interner).unwrap_err();
    assert!(matches!(
        missing.kind,
        EvalErrorKind::WrongArgType {
            found: "nothing",
            ..
        }
    ));
}

#[test]
fn write_overwrites_the_file() {
    let interner = StringInterner::new();
    let printer = buffer_handler();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "old contents").unwrap();

    let path_value = Value::string(path.to_str().unwrap());
    let result = call_builtin(
        Builtin::Write,
        &[path_value.clone(), Value::string("new")],
        &printer,
        &interner,
    );
    assert_eq!(result, Ok(Value::FALSE));
    assert_eq!(fs::read_to_string(&path).unwrap(), "new");

    call_builtin(
        Builtin::Write,
        &[path_value, Value::Number(42.0)],
        &printer,
        &interner,
    )
    .unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "42");
}

#[test]
fn write_failure_is_not_an_error() {
    let interner = StringInterner::new();
    let printer = buffer_handler();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");
    let result = call_builtin(
        Builtin::Write,
        &[Value::string(path.to_str().unwrap()), Value::string("x")],
        &printer,
        &interner,
    );
    assert_eq!(result, Ok(Value::FALSE));
    assert!(!path.exists());
}
