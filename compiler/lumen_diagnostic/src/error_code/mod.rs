//! Error codes.
//!
//! The first digit is the phase that raised the error:
//! - E0xxx: lexer
//! - E1xxx: parser
//! - E6xxx: runtime

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Unexpected end of input
    E1002,
    /// Expected a specific token
    E1003,
    /// Invalid assignment target
    E1004,
    /// Expected parameter name
    E1005,

    // Runtime Errors (E6xxx)
    /// Undefined variable
    E6001,
    /// Arithmetic on a non-number
    E6002,
    /// Zero or non-number denominator
    E6003,
    /// Operand kinds do not match
    E6004,
    /// Called a value that is not a function
    E6005,
    /// Built-in received the wrong kind of argument
    E6006,
    /// Call depth limit exceeded
    E6007,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
        }
    }

    /// One-line summary of what the code means.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character in source",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "unexpected end of input",
            ErrorCode::E1003 => "expected a specific token",
            ErrorCode::E1004 => "invalid assignment target",
            ErrorCode::E1005 => "expected parameter name",
            ErrorCode::E6001 => "undefined variable",
            ErrorCode::E6002 => "arithmetic on a non-number",
            ErrorCode::E6003 => "invalid denominator",
            ErrorCode::E6004 => "mismatched operand kinds",
            ErrorCode::E6005 => "value is not callable",
            ErrorCode::E6006 => "wrong argument type",
            ErrorCode::E6007 => "call depth limit exceeded",
        }
    }

    /// The stage that reports this code: `"lexer"`, `"parser"` or `"runtime"`.
    pub const fn phase(self) -> &'static str {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 => "lexer",
            ErrorCode::E1001
            | ErrorCode::E1002
            | ErrorCode::E1003
            | ErrorCode::E1004
            | ErrorCode::E1005 => "parser",
            _ => "runtime",
        }
    }

    /// Look up a code by its spelling, e.g. `"E6001"`.
    pub fn from_str_code(code: &str) -> Option<ErrorCode> {
        ErrorCode::ALL.iter().copied().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
