//! Error to diagnostic conversion.
//!
//! Each phase's error becomes a [`Diagnostic`] with an [`ErrorCode`] from
//! that phase's range: E0xxx lexer, E1xxx parser, E6xxx runtime.

use lumen_diagnostic::{Diagnostic, ErrorCode};
use lumen_eval::{EvalError, EvalErrorKind};
use lumen_ir::Span;
use lumen_lexer::{LexError, LexErrorKind};
use lumen_parse::{ParseError, ParseErrorKind, SyntaxError};

pub fn lex_error_to_diagnostic(err: &LexError) -> Diagnostic {
    let (code, label) = match err.kind {
        LexErrorKind::UnterminatedString => (ErrorCode::E0001, "missing closing `\"`"),
        LexErrorKind::InvalidCharacter(_) => (ErrorCode::E0002, "not valid here"),
    };
    Diagnostic::error(code)
        .with_message(err.kind.to_string())
        .with_label(Span::point(err.offset), label)
}

pub fn parse_error_to_diagnostic(err: &ParseError) -> Diagnostic {
    let diag = Diagnostic::error(parse_error_code(&err.kind)).with_message(err.to_string());
    match &err.kind {
        ParseErrorKind::UnexpectedToken { .. } => {
            diag.with_label(err.span, "cannot start an expression")
        }
        ParseErrorKind::Expected { expected, .. } => {
            diag.with_label(err.span, format!("expected {expected}"))
        }
        ParseErrorKind::UnexpectedEof { expected } => diag
            .with_label(err.span, "input ends here")
            .with_note(format!("expected {expected} before the end of the file")),
        ParseErrorKind::InvalidAssignmentTarget => diag
            .with_label(err.span, "cannot assign to this")
            .with_note("only variables can appear on the left of `=`"),
        ParseErrorKind::ExpectedParameterName { .. } => {
            diag.with_label(err.span, "expected an identifier")
        }
    }
}

fn parse_error_code(kind: &ParseErrorKind) -> ErrorCode {
    match kind {
        ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
        ParseErrorKind::UnexpectedEof { .. } => ErrorCode::E1002,
        ParseErrorKind::Expected { .. } => ErrorCode::E1003,
        ParseErrorKind::InvalidAssignmentTarget => ErrorCode::E1004,
        ParseErrorKind::ExpectedParameterName { .. } => ErrorCode::E1005,
    }
}

pub fn syntax_error_to_diagnostic(err: &SyntaxError) -> Diagnostic {
    match err {
        SyntaxError::Lex(err) => lex_error_to_diagnostic(err),
        SyntaxError::Parse(err) => parse_error_to_diagnostic(err),
    }
}

pub fn eval_error_to_diagnostic(err: &EvalError) -> Diagnostic {
    let (code, label) = match &err.kind {
        EvalErrorKind::UndefinedVariable { .. } => (ErrorCode::E6001, "not defined"),
        EvalErrorKind::NotANumber { .. } => (ErrorCode::E6002, "in this operation"),
        EvalErrorKind::InvalidDenominator { .. } => (ErrorCode::E6003, "in this division"),
        EvalErrorKind::TypeMismatch { .. } => (ErrorCode::E6004, "in this operation"),
        EvalErrorKind::NotCallable { .. } => (ErrorCode::E6005, "in this call"),
        EvalErrorKind::WrongArgType { .. } => (ErrorCode::E6006, "in this call"),
        EvalErrorKind::StackOverflow { .. } => (ErrorCode::E6007, "while making this call"),
    };
    let mut diag = Diagnostic::error(code).with_message(err.to_string());
    if let Some(span) = err.span {
        diag = diag.with_label(span, label);
    }
    match &err.kind {
        EvalErrorKind::UndefinedVariable { .. } => diag.with_note(
            "assignment only defines new variables at the top level; inside a function, \
             assign to a parameter or to a variable defined outside it",
        ),
        EvalErrorKind::StackOverflow { .. } => {
            diag.with_note("use `--max-depth=N` to raise the limit")
        }
        _ => diag,
    }
}

#[cfg(test)]
mod tests;
