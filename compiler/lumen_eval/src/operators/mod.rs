//! Binary operator implementations.
//!
//! Direct enum dispatch on [`BinaryOp`]. The evaluator handles the lazy
//! right operand of `&&` and `||` itself; given both operands, this module
//! computes the same result.

use std::cmp::Ordering;

use lumen_ir::BinaryOp;

use crate::errors::{invalid_denominator, not_a_number, type_mismatch};
use crate::{EvalError, EvalResult, Value};

/// Apply `op` to two evaluated operands.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub | BinaryOp::Mul => {
            let (a, b) = numbers(op, &left, &right)?;
            Ok(Value::Number(if op == BinaryOp::Sub { a - b } else { a * b }))
        }
        BinaryOp::Div | BinaryOp::Mod => {
            let (a, b) = divisor_operands(op, &left, &right)?;
            Ok(Value::Number(if op == BinaryOp::Div { a / b } else { a % b }))
        }
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            compare(op, &left, &right)
        }
        BinaryOp::Eq => Ok(Value::Bool(left.strict_eq(&right))),
        BinaryOp::NotEq => Ok(Value::Bool(!left.strict_eq(&right))),
        BinaryOp::And => Ok(if left.is_false() { left } else { right }),
        BinaryOp::Or => Ok(if left.is_false() { right } else { left }),
    }
}

/// Numbers add, strings concatenate; nothing else mixes.
fn add(left: Value, right: Value) -> EvalResult {
    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(joined.into()))
        }
        _ => Err(type_mismatch(BinaryOp::Add, &left, &right)),
    }
}

fn numbers(op: BinaryOp, left: &Value, right: &Value) -> Result<(f64, f64), EvalError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        (Value::Number(_), other) | (other, _) => Err(not_a_number(op, other)),
    }
}

/// `/` and `%`: the left operand must be a number, the right a non-zero
/// number.
fn divisor_operands(
    op: BinaryOp,
    left: &Value,
    right: &Value,
) -> Result<(f64, f64), EvalError> {
    let Value::Number(a) = left else {
        return Err(not_a_number(op, left));
    };
    match right {
        Value::Number(b) if *b != 0.0 => Ok((*a, *b)),
        other => Err(invalid_denominator(op, other)),
    }
}

fn compare(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => return Err(type_mismatch(op, left, right)),
    };
    // `None` only for NaN, which compares false every way.
    let result = ordering.is_some_and(|ord| match op {
        BinaryOp::Lt => ord == Ordering::Less,
        BinaryOp::LtEq => ord != Ordering::Greater,
        BinaryOp::Gt => ord == Ordering::Greater,
        _ => ord != Ordering::Less,
    });
    Ok(Value::Bool(result))
}

#[cfg(test)]
mod tests;
