//! Atoms and the compound forms that start with a keyword or bracket.

use std::rc::Rc;

use lumen_ir::{Expr, ExprKind, Keyword, Lambda, Name, Punct, Span, TokenKind};
use tracing::trace;

use crate::{ParseError, ParseErrorKind, ParseResult, Parser};

impl Parser<'_> {
    /// Parse an atom followed by any call suffixes.
    pub(crate) fn parse_atom(&mut self) -> ParseResult<Expr> {
        let atom = self.parse_atom_inner()?;
        self.maybe_call(atom)
    }

    fn parse_atom_inner(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.cursor.peek()? else {
            return Err(self.cursor.expected(None, "expression").into());
        };
        trace!(kind = ?token.kind, "atom");

        let span = token.span;
        let kind = match token.kind {
            TokenKind::Punct(Punct::LParen) => {
                self.cursor.advance()?;
                let inner = self.parse_expression()?;
                self.cursor.expect_punct(Punct::RParen)?;
                return Ok(inner);
            }
            TokenKind::Punct(Punct::LBrace) => return self.parse_block(),
            TokenKind::Keyword(Keyword::If) => return self.parse_if(),
            TokenKind::Keyword(Keyword::While) => return self.parse_while(),
            TokenKind::Keyword(Keyword::Lambda) => return self.parse_lambda(),
            TokenKind::Keyword(Keyword::True) => ExprKind::Bool(true),
            TokenKind::Keyword(Keyword::False) => ExprKind::Bool(false),
            TokenKind::Ident(name) => ExprKind::Var(name),
            TokenKind::Number(value) => ExprKind::Number(value),
            TokenKind::Str(value) => ExprKind::Str(value),
            other => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken {
                        found: other.describe(self.cursor.interner()),
                    },
                    span,
                )
                .into());
            }
        };
        self.cursor.advance()?;
        Ok(Expr::new(kind, span))
    }

    /// `{ e1; e2; ... }`
    ///
    /// An empty block is `false`; a single expression is returned as-is.
    fn parse_block(&mut self) -> ParseResult<Expr> {
        let (mut items, span) = self.delimited(
            Punct::LBrace,
            Punct::RBrace,
            Punct::Semicolon,
            Self::parse_expression,
        )?;
        Ok(match items.len() {
            0 => Expr::false_literal(span),
            1 => items.swap_remove(0),
            _ => Expr::new(ExprKind::Sequence(items), span),
        })
    }

    /// `if cond [then] expr [else expr]`
    ///
    /// `then` may be omitted only when the branch is a block.
    fn parse_if(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.expect_keyword(Keyword::If)?;
        let cond = self.parse_expression()?;
        self.skip_then()?;
        let then_branch = self.parse_expression()?;

        let else_branch = if self.cursor.is_keyword(Keyword::Else)? {
            self.cursor.advance()?;
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };

        let end = else_branch.as_ref().map_or(then_branch.span, |e| e.span);
        Ok(Expr::new(
            ExprKind::If {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch,
            },
            start.merge(end),
        ))
    }

    /// `while cond [then] body`, with the same `then` rule as `if`.
    fn parse_while(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.expect_keyword(Keyword::While)?;
        let cond = self.parse_expression()?;
        self.skip_then()?;
        let body = self.parse_expression()?;
        let span = start.merge(body.span);
        Ok(Expr::new(
            ExprKind::While {
                cond: Box::new(cond),
                body: Box::new(body),
            },
            span,
        ))
    }

    fn skip_then(&mut self) -> ParseResult<()> {
        if !self.cursor.is_punct(Punct::LBrace)? {
            self.cursor.expect_keyword(Keyword::Then)?;
        }
        Ok(())
    }

    /// `lambda (p1, p2, ...) body`
    fn parse_lambda(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.expect_keyword(Keyword::Lambda)?;
        let (params, _) = self.delimited(
            Punct::LParen,
            Punct::RParen,
            Punct::Comma,
            Self::parse_param,
        )?;
        let body = self.parse_expression()?;
        let span = start.merge(body.span);
        Ok(Expr::new(
            ExprKind::Lambda(Rc::new(Lambda { params, body })),
            span,
        ))
    }

    fn parse_param(&mut self) -> ParseResult<Name> {
        match self.cursor.eat_ident()? {
            Ok((name, _)) => Ok(name),
            Err(found) => {
                let span = found.map_or_else(|| self.cursor.eof_span(), |t| t.span);
                Err(ParseError::new(
                    ParseErrorKind::ExpectedParameterName {
                        found: self.cursor.describe(found),
                    },
                    span,
                )
                .into())
            }
        }
    }

    /// `open item (sep item)* [sep] close`, returning the items and the
    /// span from `open` to `close`.
    pub(crate) fn delimited<T>(
        &mut self,
        open: Punct,
        close: Punct,
        separator: Punct,
        mut item: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<(Vec<T>, Span)> {
        let start = self.cursor.expect_punct(open)?;
        let mut items = Vec::new();
        let mut first = true;
        while !self.cursor.is_punct(close)? {
            if !first {
                self.cursor.expect_punct(separator)?;
                if self.cursor.is_punct(close)? {
                    break;
                }
            }
            first = false;
            items.push(item(self)?);
        }
        let end = self.cursor.expect_punct(close)?;
        Ok((items, start.merge(end)))
    }
}
