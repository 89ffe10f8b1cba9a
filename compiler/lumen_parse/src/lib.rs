//! Parser for Lumen.
//!
//! Recursive descent for atoms, precedence climbing for binary operators.
//! The parser pulls tokens from a lazy [`TokenStream`] and stops at the
//! first lexical or grammatical error.
//!
//! A program is a `;`-separated list of expressions; [`parse`] returns it as
//! a single [`ExprKind::Sequence`].

mod cursor;
mod error;
mod grammar;

pub use error::{ParseError, ParseErrorKind, ParseResult, SyntaxError};

use cursor::Cursor;
use lumen_ir::{Expr, ExprKind, Punct, Span, StringInterner};
use lumen_lexer::TokenStream;
use tracing::debug;

/// Parser state: a cursor over the token stream.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, interner: &'a StringInterner) -> Self {
        Self::from_tokens(TokenStream::new(source, interner))
    }

    pub fn from_tokens(tokens: TokenStream<'a>) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse a whole program.
    ///
    /// Expressions are separated by `;`. A trailing `;` is accepted. The
    /// result is always a [`ExprKind::Sequence`], empty for empty input.
    pub fn parse_top_level(&mut self) -> ParseResult<Expr> {
        let mut items = Vec::new();
        while !self.cursor.is_at_end()? {
            items.push(self.parse_expression()?);
            if !self.cursor.is_at_end()? {
                self.cursor.expect_punct(Punct::Semicolon)?;
            }
        }
        debug!(expressions = items.len(), "parsed program");

        let span = match (items.first(), items.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::point(0),
        };
        Ok(Expr::new(ExprKind::Sequence(items), span))
    }
}

/// Parse `source` into a program expression.
pub fn parse(source: &str, interner: &StringInterner) -> Result<Expr, SyntaxError> {
    Parser::new(source, interner).parse_top_level()
}
