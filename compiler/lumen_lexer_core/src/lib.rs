//! Character-level input for the Lumen lexer.
//!
//! This crate has no `lumen_*` dependencies. It provides:
//!
//! - [`CharStream`]: a one-character-lookahead stream over source text that
//!   tracks line and column for diagnostics
//! - [`LexError`]: the error raised for malformed source, annotated with the
//!   position where lexing stopped
//!
//! The token-level stream built on top of it lives in `lumen_lexer`.

mod char_stream;
mod lex_error;

pub use char_stream::{CharStream, SourceLocation};
pub use lex_error::{LexError, LexErrorKind};
