//! Parse errors.
//!
//! Parsing stops at the first error; there is no recovery. Because the
//! parser pulls tokens lazily, a lexical error can also surface while
//! parsing, so the parser's error type is [`SyntaxError`], which is either.

use lumen_ir::Span;
use lumen_lexer::LexError;
use thiserror::Error;

/// What the parser expected and did not get.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A token that cannot start an expression.
    #[error("unexpected {found}")]
    UnexpectedToken { found: String },
    /// A specific token was required here.
    #[error("expected {expected}, found {found}")]
    Expected { expected: String, found: String },
    /// Input ended where more was required.
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: String },
    /// The left side of `=` is not a variable.
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    /// A lambda parameter list entry is not an identifier.
    #[error("expected parameter name, found {found}")]
    ExpectedParameterName { found: String },
}

/// A grammar violation at `span`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }
}

/// Any failure while turning source text into an AST.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result type used throughout the parser.
pub type ParseResult<T> = Result<T, SyntaxError>;
