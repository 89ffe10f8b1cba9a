//! Token cursor over the lazy token stream.
//!
//! Wraps [`TokenStream`] with the predicate and `expect_*` helpers the
//! grammar uses. All lookahead is a single token.

use lumen_ir::{Keyword, Name, Punct, Span, StringInterner, Token, TokenKind};
use lumen_lexer::{LexError, TokenStream};
use tracing::trace;

use crate::{ParseError, ParseErrorKind, ParseResult};

pub struct Cursor<'a> {
    tokens: TokenStream<'a>,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: TokenStream<'a>) -> Self {
        Cursor { tokens }
    }

    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.tokens.interner()
    }

    #[inline]
    pub fn peek(&mut self) -> Result<Option<Token>, LexError> {
        self.tokens.peek()
    }

    /// Consume the current token.
    pub fn advance(&mut self) -> Result<Option<Token>, LexError> {
        let token = self.tokens.next()?;
        trace!(?token, "advance");
        Ok(token)
    }

    pub fn is_at_end(&mut self) -> Result<bool, LexError> {
        self.tokens.eof()
    }

    pub fn is_punct(&mut self, punct: Punct) -> Result<bool, LexError> {
        Ok(self.peek()?.is_some_and(|t| t.is_punct(punct)))
    }

    pub fn is_keyword(&mut self, keyword: Keyword) -> Result<bool, LexError> {
        Ok(self.peek()?.is_some_and(|t| t.is_keyword(keyword)))
    }

    /// The current token's operator spelling, if it is an operator.
    pub fn peek_operator(&mut self) -> Result<Option<(&'a str, Span)>, LexError> {
        Ok(match self.peek()? {
            Some(Token {
                kind: TokenKind::Operator(name),
                span,
            }) => Some((self.interner().lookup(name), span)),
            _ => None,
        })
    }

    /// Consume `punct` or fail.
    pub fn expect_punct(&mut self, punct: Punct) -> ParseResult<Span> {
        match self.peek()? {
            Some(token) if token.is_punct(punct) => {
                self.advance()?;
                Ok(token.span)
            }
            other => Err(self.expected(other, &format!("`{punct}`")).into()),
        }
    }

    /// Consume `keyword` or fail.
    pub fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<Span> {
        match self.peek()? {
            Some(token) if token.is_keyword(keyword) => {
                self.advance()?;
                Ok(token.span)
            }
            other => Err(self
                .expected(other, &format!("keyword `{keyword}`"))
                .into()),
        }
    }

    /// Consume an identifier, or return the offending token untouched.
    pub fn eat_ident(&mut self) -> Result<Result<(Name, Span), Option<Token>>, LexError> {
        match self.peek()? {
            Some(Token {
                kind: TokenKind::Ident(name),
                span,
            }) => {
                self.advance()?;
                Ok(Ok((name, span)))
            }
            other => Ok(Err(other)),
        }
    }

    /// Span used for errors at end of input.
    pub fn eof_span(&self) -> Span {
        Span::point(self.tokens.offset())
    }

    /// Describe `token` for a diagnostic ("end of input" for `None`).
    pub fn describe(&self, token: Option<Token>) -> String {
        match token {
            Some(token) => token.kind.describe(self.interner()),
            None => "end of input".to_string(),
        }
    }

    /// Error for a missing `expected`, given what was found instead.
    #[cold]
    pub fn expected(&self, found: Option<Token>, expected: &str) -> ParseError {
        match found {
            Some(token) => ParseError::new(
                ParseErrorKind::Expected {
                    expected: expected.to_string(),
                    found: token.kind.describe(self.interner()),
                },
                token.span,
            ),
            None => ParseError::new(
                ParseErrorKind::UnexpectedEof {
                    expected: expected.to_string(),
                },
                self.eof_span(),
            ),
        }
    }
}
