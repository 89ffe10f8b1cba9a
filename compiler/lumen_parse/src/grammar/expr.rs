//! Expression parsing.
//!
//! Binary operators use precedence climbing over the table in
//! [`BinaryOp::precedence`], with assignment below everything at 1.
//! Binary operators are left-associative; assignment is right-associative.

use lumen_ir::{BinaryOp, Expr, ExprKind, Punct};
use lumen_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, ParseErrorKind, ParseResult, Parser};

const ASSIGN_PRECEDENCE: u8 = 1;

/// An infix operator as the parser sees it.
#[derive(Copy, Clone, Debug)]
enum Infix {
    Assign,
    Binary(BinaryOp),
}

impl Infix {
    fn from_symbol(symbol: &str) -> Option<Self> {
        if symbol == "=" {
            return Some(Infix::Assign);
        }
        BinaryOp::from_symbol(symbol).map(Infix::Binary)
    }

    fn precedence(self) -> u8 {
        match self {
            Infix::Assign => ASSIGN_PRECEDENCE,
            Infix::Binary(op) => op.precedence(),
        }
    }

    /// Minimum precedence for the right operand.
    fn right_precedence(self) -> u8 {
        match self {
            // One below its own, so `a = b = c` nests to the right.
            Infix::Assign => ASSIGN_PRECEDENCE - 1,
            Infix::Binary(op) => op.precedence(),
        }
    }
}

impl Parser<'_> {
    /// Parse a full expression: an atom, any binary operators, any calls.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| {
            let atom = self.parse_atom()?;
            let expr = self.maybe_binary(atom, 0)?;
            self.maybe_call(expr)
        })
    }

    /// Fold operators binding tighter than `min_prec` onto `left`.
    ///
    /// Operator spellings that are not in the table (`!`, `=>`, ...) end the
    /// expression; whatever follows then fails as an unexpected token.
    fn maybe_binary(&mut self, mut left: Expr, min_prec: u8) -> ParseResult<Expr> {
        loop {
            let Some((symbol, _)) = self.cursor.peek_operator()? else {
                return Ok(left);
            };
            let Some(infix) = Infix::from_symbol(symbol) else {
                return Ok(left);
            };
            if infix.precedence() <= min_prec {
                return Ok(left);
            }
            self.cursor.advance()?;
            trace!(?infix, "binary operator");

            let atom = self.parse_atom()?;
            let right =
                ensure_sufficient_stack(|| self.maybe_binary(atom, infix.right_precedence()))?;
            left = Self::combine(infix, left, right)?;
        }
    }

    fn combine(infix: Infix, left: Expr, right: Expr) -> ParseResult<Expr> {
        let span = left.span.merge(right.span);
        let kind = match infix {
            Infix::Assign => {
                let ExprKind::Var(target) = left.kind else {
                    return Err(
                        ParseError::new(ParseErrorKind::InvalidAssignmentTarget, left.span).into(),
                    );
                };
                ExprKind::Assign {
                    target,
                    value: Box::new(right),
                }
            }
            Infix::Binary(op) => ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        };
        Ok(Expr::new(kind, span))
    }

    /// Wrap `expr` in calls for every `(args)` suffix that follows it.
    pub(crate) fn maybe_call(&mut self, mut expr: Expr) -> ParseResult<Expr> {
        while self.cursor.is_punct(Punct::LParen)? {
            let (args, args_span) = self.delimited(
                Punct::LParen,
                Punct::RParen,
                Punct::Comma,
                Self::parse_expression,
            )?;
            let span = expr.span.merge(args_span);
            expr = Expr::new(
                ExprKind::Call {
                    callee: Box::new(expr),
                    args,
                },
                span,
            );
        }
        Ok(expr)
    }
}
