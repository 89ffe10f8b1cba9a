//! S-expression rendering of the AST, used by `lumen parse`.

use std::fmt::Write;

use crate::{Expr, ExprKind, StringInterner};

/// Render `expr` as a single-line S-expression.
///
/// ```text
/// sum = lambda(x) x + 1   =>   (= sum (lambda (x) (+ x 1)))
/// ```
pub fn dump(expr: &Expr, interner: &StringInterner) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr, interner);
    out
}

fn write_expr(out: &mut String, expr: &Expr, interner: &StringInterner) {
    // Writing into a String never fails.
    let _ = match &expr.kind {
        ExprKind::Number(n) => write!(out, "{n}"),
        ExprKind::Str(s) => write!(out, "{:?}", interner.lookup(*s)),
        ExprKind::Bool(b) => write!(out, "{b}"),
        ExprKind::Var(name) => write!(out, "{}", interner.lookup(*name)),
        ExprKind::Assign { target, value } => {
            let _ = write!(out, "(= {} ", interner.lookup(*target));
            write_expr(out, value, interner);
            write!(out, ")")
        }
        ExprKind::Binary { op, left, right } => {
            let _ = write!(out, "({op} ");
            write_expr(out, left, interner);
            out.push(' ');
            write_expr(out, right, interner);
            write!(out, ")")
        }
        ExprKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            out.push_str("(if ");
            write_expr(out, cond, interner);
            out.push(' ');
            write_expr(out, then_branch, interner);
            if let Some(else_branch) = else_branch {
                out.push(' ');
                write_expr(out, else_branch, interner);
            }
            write!(out, ")")
        }
        ExprKind::While { cond, body } => {
            out.push_str("(while ");
            write_expr(out, cond, interner);
            out.push(' ');
            write_expr(out, body, interner);
            write!(out, ")")
        }
        ExprKind::Sequence(items) => {
            out.push_str("(seq");
            for item in items {
                out.push(' ');
                write_expr(out, item, interner);
            }
            write!(out, ")")
        }
        ExprKind::Lambda(lambda) => {
            out.push_str("(lambda (");
            for (i, param) in lambda.params.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(interner.lookup(*param));
            }
            out.push_str(") ");
            write_expr(out, &lambda.body, interner);
            write!(out, ")")
        }
        ExprKind::Call { callee, args } => {
            out.push_str("(call ");
            write_expr(out, callee, interner);
            for arg in args {
                out.push(' ');
                write_expr(out, arg, interner);
            }
            write!(out, ")")
        }
    };
}
