use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;
use crate::StringInterner;

fn num(n: f64) -> Box<Expr> {
    Box::new(Expr::new(ExprKind::Number(n), Span::DUMMY))
}

#[test]
fn precedence_orders_operators() {
    assert!(BinaryOp::Mul.precedence() > BinaryOp::Add.precedence());
    assert!(BinaryOp::Add.precedence() > BinaryOp::Lt.precedence());
    assert!(BinaryOp::Eq.precedence() > BinaryOp::And.precedence());
    assert!(BinaryOp::And.precedence() > BinaryOp::Or.precedence());
    assert_eq!(BinaryOp::Mod.precedence(), BinaryOp::Div.precedence());
}

#[test]
fn symbols_round_trip() {
    for symbol in ["+", "-", "*", "/", "%", "==", "!=", "<", "<=", ">", ">=", "&&", "||"] {
        let op = BinaryOp::from_symbol(symbol);
        assert_eq!(op.map(BinaryOp::as_symbol), Some(symbol));
    }
}

#[test]
fn unknown_symbols_are_not_operators() {
    assert_eq!(BinaryOp::from_symbol("="), None);
    assert_eq!(BinaryOp::from_symbol("!"), None);
    assert_eq!(BinaryOp::from_symbol("=>"), None);
    assert_eq!(BinaryOp::from_symbol("&"), None);
}

#[test]
fn only_logical_operators_short_circuit() {
    assert!(BinaryOp::And.is_short_circuit());
    assert!(BinaryOp::Or.is_short_circuit());
    assert!(!BinaryOp::Add.is_short_circuit());
    assert!(!BinaryOp::Eq.is_short_circuit());
}

#[test]
fn dump_binary_tree() {
    let interner = StringInterner::new();
    let mul = Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Mul,
            left: num(3.0),
            right: num(4.0),
        },
        Span::DUMMY,
    );
    let add = Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Add,
            left: num(2.0),
            right: Box::new(mul),
        },
        Span::DUMMY,
    );
    assert_eq!(dump(&add, &interner), "(+ 2 (* 3 4))");
}

#[test]
fn dump_lambda_and_call() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let f = interner.intern("f");
    let lambda = Rc::new(Lambda {
        params: vec![x],
        body: Expr::new(ExprKind::Var(x), Span::DUMMY),
    });
    let assign = Expr::new(
        ExprKind::Assign {
            target: f,
            value: Box::new(Expr::new(ExprKind::Lambda(lambda), Span::DUMMY)),
        },
        Span::DUMMY,
    );
    let call = Expr::new(
        ExprKind::Call {
            callee: Box::new(Expr::new(ExprKind::Var(f), Span::DUMMY)),
            args: vec![*num(1.0)],
        },
        Span::DUMMY,
    );
    let program = Expr::new(ExprKind::Sequence(vec![assign, call]), Span::DUMMY);
    assert_eq!(
        dump(&program, &interner),
        "(seq (= f (lambda (x) x)) (call f 1))"
    );
}

#[test]
fn dump_if_without_else_and_strings() {
    let interner = StringInterner::new();
    let s = interner.intern("hi");
    let expr = Expr::new(
        ExprKind::If {
            cond: Box::new(Expr::new(ExprKind::Bool(true), Span::DUMMY)),
            then_branch: Box::new(Expr::new(ExprKind::Str(s), Span::DUMMY)),
            else_branch: None,
        },
        Span::DUMMY,
    );
    assert_eq!(dump(&expr, &interner), "(if true \"hi\")");
}
