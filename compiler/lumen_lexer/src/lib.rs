//! Lexer for Lumen.
//!
//! [`TokenStream`] turns a [`CharStream`] into tokens on demand, with one
//! token of lookahead. The parser pulls from it directly, so a lexical error
//! late in a file surfaces only when the parser reaches it. [`lex`] drains a
//! stream eagerly for tooling (`lumen lex`) and tests.

mod token_stream;

pub use lumen_lexer_core::{CharStream, LexError, LexErrorKind, SourceLocation};
pub use token_stream::TokenStream;

use lumen_ir::{StringInterner, Token};

/// Tokenize all of `source`.
///
/// Stops at the first lexical error.
pub fn lex(source: &str, interner: &StringInterner) -> Result<Vec<Token>, LexError> {
    let mut stream = TokenStream::new(source, interner);
    let mut tokens = Vec::new();
    while let Some(token) = stream.next()? {
        tokens.push(token);
    }
    Ok(tokens)
}
