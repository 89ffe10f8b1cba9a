//! Lexer output: tokens and their kinds.

use std::fmt;

use crate::{Name, Span, StringInterner};

/// Reserved words. An identifier-shaped run equal to one of these lexes as a
/// keyword instead of an identifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    If,
    Then,
    Else,
    Lambda,
    True,
    False,
    While,
}

impl Keyword {
    /// Classify an identifier-shaped word. Matching is exact (case-sensitive).
    pub fn from_word(word: &str) -> Option<Keyword> {
        Some(match word {
            "if" => Keyword::If,
            "then" => Keyword::Then,
            "else" => Keyword::Else,
            "lambda" => Keyword::Lambda,
            "true" => Keyword::True,
            "false" => Keyword::False,
            "while" => Keyword::While,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::Lambda => "lambda",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::While => "while",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-character punctuation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Punct {
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
}

impl Punct {
    pub fn from_char(ch: char) -> Option<Punct> {
        Some(match ch {
            ',' => Punct::Comma,
            ';' => Punct::Semicolon,
            '(' => Punct::LParen,
            ')' => Punct::RParen,
            '{' => Punct::LBrace,
            '}' => Punct::RBrace,
            '[' => Punct::LBracket,
            ']' => Punct::RBracket,
            _ => return None,
        })
    }

    pub const fn as_char(self) -> char {
        match self {
            Punct::Comma => ',',
            Punct::Semicolon => ';',
            Punct::LParen => '(',
            Punct::RParen => ')',
            Punct::LBrace => '{',
            Punct::RBrace => '}',
            Punct::LBracket => '[',
            Punct::RBracket => ']',
        }
    }
}

impl fmt::Display for Punct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Token payload.
///
/// String contents, identifiers and operator spellings are interned. An
/// operator token is any maximal run of operator characters, so its
/// spelling may not correspond to a known operator (`+-`, `=>`); the
/// parser decides.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum TokenKind {
    Number(f64),
    Str(Name),
    Ident(Name),
    Keyword(Keyword),
    Punct(Punct),
    Operator(Name),
}

impl TokenKind {
    /// Human-readable description for error messages, e.g. ``identifier `x` ``.
    pub fn describe(&self, interner: &StringInterner) -> String {
        match self {
            TokenKind::Number(n) => format!("number `{n}`"),
            TokenKind::Str(s) => format!("string \"{}\"", interner.lookup(*s)),
            TokenKind::Ident(name) => format!("identifier `{}`", interner.lookup(*name)),
            TokenKind::Keyword(kw) => format!("keyword `{kw}`"),
            TokenKind::Punct(p) => format!("`{p}`"),
            TokenKind::Operator(op) => format!("operator `{}`", interner.lookup(*op)),
        }
    }
}

/// A token and the source range it was read from.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    #[inline]
    pub fn is_punct(&self, punct: Punct) -> bool {
        self.kind == TokenKind::Punct(punct)
    }

    #[inline]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }
}
