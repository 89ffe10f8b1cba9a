//! Lazy token stream with one token of lookahead.

use lumen_ir::{Keyword, Punct, Span, StringInterner, Token, TokenKind};
use lumen_lexer_core::{CharStream, LexError, LexErrorKind};
use tracing::trace;

#[inline]
fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

#[inline]
fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Digits may follow the first character of an identifier (`add5`).
#[inline]
fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[inline]
fn is_op_char(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-' | '*' | '/' | '%' | '=' | '&' | '|' | '<' | '>' | '!'
    )
}

/// Token stream over a [`CharStream`].
///
/// Tokens are produced on demand. [`peek`](Self::peek) lexes at most one
/// token ahead and caches it; [`next`](Self::next) hands out the cached token
/// before lexing a new one. Once the source is exhausted every call reports
/// `None`.
pub struct TokenStream<'a> {
    chars: CharStream<'a>,
    interner: &'a StringInterner,
    /// Lookahead cache. `Some(None)` records that end of input was reached.
    peeked: Option<Option<Token>>,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str, interner: &'a StringInterner) -> Self {
        Self::from_chars(CharStream::new(source), interner)
    }

    pub fn from_chars(chars: CharStream<'a>, interner: &'a StringInterner) -> Self {
        TokenStream {
            chars,
            interner,
            peeked: None,
        }
    }

    /// The interner holding identifier, string and operator text.
    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// The next token, without consuming it.
    ///
    /// Repeated calls return the same token and do not advance the stream.
    pub fn peek(&mut self) -> Result<Option<Token>, LexError> {
        if let Some(token) = self.peeked {
            return Ok(token);
        }
        let token = self.read_next()?;
        self.peeked = Some(token);
        Ok(token)
    }

    /// Consume and return the next token.
    #[allow(
        clippy::should_implement_trait,
        reason = "fallible lookahead API; an Iterator would hide the peek cache"
    )]
    pub fn next(&mut self) -> Result<Option<Token>, LexError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.read_next(),
        }
    }

    /// True iff no tokens remain.
    pub fn eof(&mut self) -> Result<bool, LexError> {
        Ok(self.peek()?.is_none())
    }

    /// Byte offset just past the last character the lexer has read.
    ///
    /// At end of input this is the source length, which is where
    /// "unexpected end of input" diagnostics point.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.chars.offset()
    }

    fn read_next(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            self.chars.eat_while(is_whitespace);
            let start = self.chars.offset();
            let Some(ch) = self.chars.peek() else {
                return Ok(None);
            };

            let kind = if ch == '#' {
                self.chars.skip_line();
                continue;
            } else if ch == '"' {
                self.read_string()?
            } else if ch.is_ascii_digit() {
                self.read_number()
            } else if is_ident_start(ch) {
                self.read_word()
            } else if let Some(punct) = Punct::from_char(ch) {
                self.chars.next();
                TokenKind::Punct(punct)
            } else if is_op_char(ch) {
                let op = self.chars.eat_while(is_op_char);
                TokenKind::Operator(self.interner.intern(op))
            } else {
                return Err(self.chars.fail(LexErrorKind::InvalidCharacter(ch)));
            };

            let span = Span::new(start, self.chars.offset());
            trace!(?kind, ?span, "token");
            return Ok(Some(Token::new(kind, span)));
        }
    }

    fn read_string(&mut self) -> Result<TokenKind, LexError> {
        // Opening quote.
        self.chars.next();
        let contents = self.chars.eat_while(|c| c != '"');
        if self.chars.peek() != Some('"') {
            return Err(self.chars.fail(LexErrorKind::UnterminatedString));
        }
        self.chars.next();
        Ok(TokenKind::Str(self.interner.intern(contents)))
    }

    fn read_number(&mut self) -> TokenKind {
        let digits = self.chars.eat_while(|c| c.is_ascii_digit());
        // A non-empty run of ASCII digits always parses; overlong runs
        // saturate to infinity.
        TokenKind::Number(digits.parse().unwrap_or(f64::INFINITY))
    }

    fn read_word(&mut self) -> TokenKind {
        let word = self.chars.eat_while(is_ident_char);
        match Keyword::from_word(word) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Ident(self.interner.intern(word)),
        }
    }
}

#[cfg(test)]
mod tests;
