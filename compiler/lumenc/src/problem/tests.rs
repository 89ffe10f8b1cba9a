use lumen_diagnostic::ErrorCode;
use lumen_eval::{stack_overflow, undefined_variable, EvalErrorKind, EvalError};
use lumen_ir::{Span, StringInterner};
use pretty_assertions::assert_eq;

use super::*;

fn syntax_diagnostic(source: &str) -> Diagnostic {
    let interner = StringInterner::new();
    let err = lumen_parse::parse(source, &interner).unwrap_err();
    syntax_error_to_diagnostic(&err)
}

#[test]
fn lexer_errors_use_e0_codes() {
    let diag = syntax_diagnostic("x = \"open");
    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(diag.message, "unterminated string");
    assert_eq!(diag.primary_span(), Some(Span::point(9)));

    assert_eq!(syntax_diagnostic("x @ y").code, ErrorCode::E0002);
}

#[test]
fn parser_errors_use_e1_codes() {
    assert_eq!(syntax_diagnostic(")").code, ErrorCode::E1001);
    assert_eq!(syntax_diagnostic("1 +").code, ErrorCode::E1002);
    assert_eq!(syntax_diagnostic("a b").code, ErrorCode::E1003);
    assert_eq!(syntax_diagnostic("1 = 2").code, ErrorCode::E1004);
    assert_eq!(syntax_diagnostic("lambda (1) 2").code, ErrorCode::E1005);
}

#[test]
fn parse_diagnostic_keeps_the_message_and_span() {
    let diag = syntax_diagnostic("a b");
    assert_eq!(diag.message, "expected `;`, found identifier `b`");
    assert_eq!(diag.primary_span(), Some(Span::new(2, 3)));
    assert_eq!(diag.labels[0].message, "expected `;`");
}

#[test]
fn runtime_errors_use_e6_codes() {
    let err = undefined_variable("y").with_span(Span::new(0, 1));
    let diag = eval_error_to_diagnostic(&err);
    assert_eq!(diag.code, ErrorCode::E6001);
    assert_eq!(diag.message, "undefined variable `y`");
    assert_eq!(diag.primary_span(), Some(Span::new(0, 1)));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn runtime_error_without_span_has_no_label() {
    let diag = eval_error_to_diagnostic(&stack_overflow(3));
    assert_eq!(diag.code, ErrorCode::E6007);
    assert!(diag.labels.is_empty());
    assert_eq!(diag.notes, vec!["use `--max-depth=N` to raise the limit".to_string()]);
}

#[test]
fn every_runtime_kind_maps_into_the_runtime_range() {
    let kinds = [
        EvalErrorKind::UndefinedVariable {
            name: "x".to_string(),
        },
        EvalErrorKind::NotANumber {
            op: lumen_ir::BinaryOp::Sub,
            found: "string",
        },
        EvalErrorKind::InvalidDenominator {
            op: lumen_ir::BinaryOp::Div,
            found: "0".to_string(),
        },
        EvalErrorKind::TypeMismatch {
            op: lumen_ir::BinaryOp::Add,
            left: "number",
            right: "string",
        },
        EvalErrorKind::NotCallable { found: "number" },
        EvalErrorKind::WrongArgType {
            function: "length",
            expected: "a string",
            found: "number",
        },
        EvalErrorKind::StackOverflow { limit: 1 },
    ];
    for kind in kinds {
        let diag = eval_error_to_diagnostic(&EvalError::new(kind));
        assert_eq!(diag.code.phase(), "runtime", "{}", diag.code);
    }
}
