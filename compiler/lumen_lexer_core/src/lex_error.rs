//! Lexer errors.

use thiserror::Error;

/// What went wrong while turning characters into tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// End of input reached before the closing `"` of a string literal.
    #[error("unterminated string")]
    UnterminatedString,
    /// A character that cannot start any token.
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
}

/// A lexer error, annotated with the stream position at the point of failure.
///
/// `line` is 1-based. `column` counts the characters already consumed on the
/// current line, so it is 0 at the start of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{kind} ({line}:{column})")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
    pub column: u32,
    /// Byte offset into the source.
    pub offset: u32,
}
