use lumen_ir::{BinaryOp, Span};
use pretty_assertions::assert_eq;

use super::*;
use crate::Value;

#[test]
fn messages() {
    assert_eq!(
        undefined_variable("x").to_string(),
        "undefined variable `x`"
    );
    assert_eq!(
        not_a_number(BinaryOp::Sub, &Value::string("a")).to_string(),
        "`-` expects numbers, found string"
    );
    assert_eq!(
        type_mismatch(BinaryOp::Add, &Value::Number(1.0), &Value::string("a")).to_string(),
        "cannot apply `+` to number and string"
    );
    assert_eq!(
        not_callable(&Value::Number(3.0)).to_string(),
        "number is not callable"
    );
    assert_eq!(
        wrong_arg_type("length", "a string", None).to_string(),
        "`length` expects a string, found nothing"
    );
    assert_eq!(
        stack_overflow(10).to_string(),
        "maximum call depth of 10 exceeded"
    );
}

#[test]
fn invalid_denominator_shows_zero_or_kind() {
    assert_eq!(
        invalid_denominator(BinaryOp::Div, &Value::Number(0.0)).to_string(),
        "invalid denominator for `/`: 0"
    );
    assert_eq!(
        invalid_denominator(BinaryOp::Mod, &Value::Bool(true)).to_string(),
        "invalid denominator for `%`: boolean"
    );
}

#[test]
fn innermost_span_wins() {
    let err = undefined_variable("x")
        .with_span(Span::new(4, 5))
        .with_span(Span::new(0, 10));
    assert_eq!(err.span, Some(Span::new(4, 5)));
}

#[test]
fn from_kind() {
    let err = EvalError::from(EvalErrorKind::StackOverflow { limit: 3 });
    assert_eq!(err.span, None);
    assert_eq!(err.kind, EvalErrorKind::StackOverflow { limit: 3 });
}
