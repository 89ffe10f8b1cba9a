//! One-character-lookahead stream over source text.
//!
//! The stream walks the source `char` by `char`. End of input is reported as
//! `None` from [`CharStream::peek`] and [`CharStream::next`]; there is no
//! in-band sentinel character, so a literal NUL in the source is just another
//! (invalid) character for the lexer to reject.

use std::fmt;

use crate::{LexError, LexErrorKind};

/// Line/column pair for diagnostics.
///
/// `line` starts at 1. `column` is the number of characters consumed on the
/// current line and resets to 0 after every newline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Character stream over a borrowed source string.
#[derive(Clone, Debug)]
pub struct CharStream<'a> {
    source: &'a str,
    /// Byte offset of the current character.
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> CharStream<'a> {
    /// Create a stream positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        CharStream {
            source,
            pos: 0,
            line: 1,
            column: 0,
        }
    }

    /// The character at the current position, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Consume and return the current character.
    ///
    /// A `\n` bumps the line and resets the column; any other character
    /// bumps the column.
    #[inline]
    #[allow(
        clippy::should_implement_trait,
        reason = "peek/next/eof mirror the token stream API; not an iterator"
    )]
    pub fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        self.bump_location(ch);
        Some(ch)
    }

    /// True once every character has been consumed.
    #[inline]
    pub fn eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Byte offset of the current position.
    #[inline]
    pub fn offset(&self) -> u32 {
        u32::try_from(self.pos).unwrap_or(u32::MAX)
    }

    /// Line and column of the current position.
    #[inline]
    pub fn location(&self) -> SourceLocation {
        SourceLocation {
            line: self.line,
            column: self.column,
        }
    }

    /// Consume the maximal run of characters matching `pred` and return it.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
            self.bump_location(ch);
        }
        &self.source[start..self.pos]
    }

    /// Discard everything up to and including the next newline.
    ///
    /// At the last line this consumes the rest of the input.
    pub fn skip_line(&mut self) {
        let rest = &self.source[self.pos..];
        match memchr::memchr(b'\n', rest.as_bytes()) {
            Some(idx) => {
                // A newline byte never appears inside a multi-byte sequence,
                // so `idx` is a char boundary.
                self.pos += idx + 1;
                self.line += 1;
                self.column = 0;
            }
            None => {
                self.advance_column(rest.chars().count());
                self.pos = self.source.len();
            }
        }
    }

    /// Build a [`LexError`] at the current position.
    #[cold]
    pub fn fail(&self, kind: LexErrorKind) -> LexError {
        LexError {
            kind,
            line: self.line,
            column: self.column,
            offset: self.offset(),
        }
    }

    #[inline]
    fn bump_location(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    fn advance_column(&mut self, chars: usize) {
        let chars = u32::try_from(chars).unwrap_or(u32::MAX);
        self.column = self.column.saturating_add(chars);
    }
}
