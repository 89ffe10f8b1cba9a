//! Expression tree produced by the parser.
//!
//! Every construct in the language is an expression. Nodes own their
//! children, except that a lambda body is reference counted: each closure
//! value created from a `lambda` expression holds the same [`Lambda`].

mod dump;
mod operators;

use std::rc::Rc;

use crate::{Name, Span};

pub use dump::dump;
pub use operators::BinaryOp;

/// An expression node with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// The `false` literal, used for empty blocks.
    #[inline]
    pub fn false_literal(span: Span) -> Self {
        Expr::new(ExprKind::Bool(false), span)
    }
}

/// Expression kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// Number literal. All numbers are `f64`.
    Number(f64),
    /// String literal (interned contents, quotes excluded).
    Str(Name),
    /// `true` / `false`.
    Bool(bool),
    /// Variable reference.
    Var(Name),
    /// `target = value`. The parser only accepts a variable on the left.
    Assign { target: Name, value: Box<Expr> },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Option<Box<Expr>>,
    },
    While { cond: Box<Expr>, body: Box<Expr> },
    /// Expressions evaluated in order; the value is the last one's.
    Sequence(Vec<Expr>),
    Lambda(Rc<Lambda>),
    Call { callee: Box<Expr>, args: Vec<Expr> },
}

/// A `lambda (params) body` expression.
///
/// Parameter names are not required to be unique; when a name repeats, the
/// last binding wins at call time.
#[derive(Clone, Debug, PartialEq)]
pub struct Lambda {
    pub params: Vec<Name>,
    pub body: Expr,
}

#[cfg(test)]
mod tests;
