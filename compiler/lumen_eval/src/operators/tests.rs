use lumen_ir::BinaryOp;
use pretty_assertions::assert_eq;

use super::evaluate_binary;
use crate::{EvalErrorKind, Value};

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn eval(op: BinaryOp, left: Value, right: Value) -> Value {
    evaluate_binary(left, right, op).unwrap()
}

fn error(op: BinaryOp, left: Value, right: Value) -> EvalErrorKind {
    evaluate_binary(left, right, op).unwrap_err().kind
}

// === Arithmetic ===

#[test]
fn arithmetic_on_numbers() {
    assert_eq!(eval(BinaryOp::Add, num(1.0), num(2.0)), num(3.0));
    assert_eq!(eval(BinaryOp::Sub, num(1.0), num(2.0)), num(-1.0));
    assert_eq!(eval(BinaryOp::Mul, num(3.0), num(4.0)), num(12.0));
    assert_eq!(eval(BinaryOp::Div, num(1.0), num(4.0)), num(0.25));
    assert_eq!(eval(BinaryOp::Mod, num(7.0), num(3.0)), num(1.0));
    assert_eq!(eval(BinaryOp::Mod, num(-7.0), num(3.0)), num(-1.0));
}

#[test]
fn plus_concatenates_strings() {
    assert_eq!(
        eval(BinaryOp::Add, Value::string("a"), Value::string("b")),
        Value::string("ab")
    );
}

#[test]
fn plus_does_not_coerce() {
    let mismatch = |l: Value, r: Value| error(BinaryOp::Add, l, r);
    assert_eq!(
        mismatch(num(1.0), Value::string("a")),
        EvalErrorKind::TypeMismatch {
            op: BinaryOp::Add,
            left: "number",
            right: "string",
        }
    );
    assert!(matches!(
        mismatch(Value::string("a"), num(1.0)),
        EvalErrorKind::TypeMismatch { .. }
    ));
    assert!(matches!(
        mismatch(Value::Bool(true), num(1.0)),
        EvalErrorKind::TypeMismatch { .. }
    ));
}

#[test]
fn minus_reports_the_first_non_number() {
    assert_eq!(
        error(BinaryOp::Sub, Value::string("a"), Value::Bool(true)),
        EvalErrorKind::NotANumber {
            op: BinaryOp::Sub,
            found: "string",
        }
    );
    assert_eq!(
        error(BinaryOp::Mul, num(2.0), Value::Bool(true)),
        EvalErrorKind::NotANumber {
            op: BinaryOp::Mul,
            found: "boolean",
        }
    );
}

#[test]
fn division_checks_left_before_denominator() {
    assert_eq!(
        error(BinaryOp::Div, Value::string("a"), num(0.0)),
        EvalErrorKind::NotANumber {
            op: BinaryOp::Div,
            found: "string",
        }
    );
}

#[test]
fn zero_or_non_number_denominator_is_rejected() {
    assert_eq!(
        error(BinaryOp::Div, num(1.0), num(0.0)),
        EvalErrorKind::InvalidDenominator {
            op: BinaryOp::Div,
            found: "0".to_string(),
        }
    );
    assert!(matches!(
        error(BinaryOp::Div, num(1.0), num(-0.0)),
        EvalErrorKind::InvalidDenominator { .. }
    ));
    assert_eq!(
        error(BinaryOp::Mod, num(1.0), Value::string("x")),
        EvalErrorKind::InvalidDenominator {
            op: BinaryOp::Mod,
            found: "string".to_string(),
        }
    );
}

// === Comparison ===

#[test]
fn ordering_on_numbers_and_strings() {
    assert_eq!(eval(BinaryOp::Lt, num(1.0), num(2.0)), Value::Bool(true));
    assert_eq!(eval(BinaryOp::LtEq, num(2.0), num(2.0)), Value::Bool(true));
    assert_eq!(eval(BinaryOp::Gt, num(1.0), num(2.0)), Value::Bool(false));
    assert_eq!(eval(BinaryOp::GtEq, num(2.0), num(3.0)), Value::Bool(false));
    assert_eq!(
        eval(BinaryOp::Lt, Value::string("abc"), Value::string("abd")),
        Value::Bool(true)
    );
}

#[test]
fn nan_orders_false() {
    let nan = || num(f64::NAN);
    for op in [BinaryOp::Lt, BinaryOp::LtEq, BinaryOp::Gt, BinaryOp::GtEq] {
        assert_eq!(eval(op, nan(), num(1.0)), Value::Bool(false));
    }
}

#[test]
fn ordering_across_kinds_is_a_mismatch() {
    assert!(matches!(
        error(BinaryOp::Lt, num(1.0), Value::string("2")),
        EvalErrorKind::TypeMismatch { .. }
    ));
}

#[test]
fn equality() {
    assert_eq!(eval(BinaryOp::Eq, num(1.0), num(1.0)), Value::Bool(true));
    assert_eq!(
        eval(BinaryOp::Eq, num(1.0), Value::string("1")),
        Value::Bool(false)
    );
    assert_eq!(
        eval(BinaryOp::NotEq, Value::FALSE, num(0.0)),
        Value::Bool(true)
    );
    assert_eq!(
        eval(BinaryOp::NotEq, num(f64::NAN), num(f64::NAN)),
        Value::Bool(true)
    );
}

// === Logic ===

#[test]
fn logic_returns_an_operand() {
    assert_eq!(eval(BinaryOp::And, num(1.0), num(2.0)), num(2.0));
    assert_eq!(eval(BinaryOp::And, Value::FALSE, num(2.0)), Value::FALSE);
    assert_eq!(eval(BinaryOp::Or, num(1.0), num(2.0)), num(1.0));
    assert_eq!(eval(BinaryOp::Or, Value::FALSE, num(2.0)), num(2.0));
}
