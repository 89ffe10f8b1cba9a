//! Lumen IR - types shared by the lexer, parser and evaluator.
//!
//! - [`Span`]: byte ranges into the source, for diagnostics
//! - [`Name`] and [`StringInterner`]: interned identifiers, string literal
//!   contents and operator spellings
//! - [`Token`] and [`TokenKind`]: lexer output
//! - [`Expr`], [`ExprKind`], [`Lambda`], [`BinaryOp`]: the AST
//!
//! The AST is an owned tree. The only shared node is [`Lambda`], held behind
//! an `Rc` so that every closure created from it can keep it alive.

pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{BinaryOp, Expr, ExprKind, Lambda};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::Span;
pub use token::{Keyword, Punct, Token, TokenKind};
