//! Runtime errors.
//!
//! Every runtime error aborts evaluation. [`EvalErrorKind`] carries the
//! structured cause; the factory functions below are the way the evaluator
//! builds errors, and the span of the failing node is attached on the way
//! out.

use lumen_ir::{BinaryOp, Span};
use thiserror::Error;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },

    #[error("`{op}` expects numbers, found {found}")]
    NotANumber { op: BinaryOp, found: &'static str },

    #[error("invalid denominator for `{op}`: {found}")]
    InvalidDenominator { op: BinaryOp, found: String },

    #[error("cannot apply `{op}` to {left} and {right}")]
    TypeMismatch {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },

    #[error("{found} is not callable")]
    NotCallable { found: &'static str },

    #[error("`{function}` expects {expected}, found {found}")]
    WrongArgType {
        function: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("maximum call depth of {limit} exceeded")]
    StackOverflow { limit: usize },
}

/// A runtime error, with the span of the expression that raised it when
/// known.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach `span` unless a more precise one is already present.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_a_number(op: BinaryOp, found: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::NotANumber {
        op,
        found: found.type_name(),
    })
}

/// A zero divisor reports the number; any other operand reports its kind.
#[cold]
pub fn invalid_denominator(op: BinaryOp, found: &Value) -> EvalError {
    let found = match found {
        Value::Number(n) => n.to_string(),
        other => other.type_name().to_string(),
    };
    EvalError::new(EvalErrorKind::InvalidDenominator { op, found })
}

#[cold]
pub fn type_mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::TypeMismatch {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

#[cold]
pub fn not_callable(found: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable {
        found: found.type_name(),
    })
}

/// `found` is `None` when the argument was not supplied.
#[cold]
pub fn wrong_arg_type(
    function: &'static str,
    expected: &'static str,
    found: Option<&Value>,
) -> EvalError {
    EvalError::new(EvalErrorKind::WrongArgType {
        function,
        expected,
        found: found.map_or("nothing", Value::type_name),
    })
}

#[cold]
pub fn stack_overflow(limit: usize) -> EvalError {
    EvalError::new(EvalErrorKind::StackOverflow { limit })
}

#[cfg(test)]
mod tests;
