//! S-expression dump of parsed programs, used by `slang parse` and the
//! REPL's `.parse` command.

use std::fmt::Write;

use crate::ast::{Expr, ExprKind, MatchRow, PostfixOp, Stmt, StmtKind};

/// Render each statement on its own line.
pub fn print_program(stmts: &[Stmt]) -> String {
    let mut out = String::new();
    for stmt in stmts {
        print_stmt_into(&mut out, stmt);
        out.push('\n');
    }
    out
}

pub fn print_stmt(stmt: &Stmt) -> String {
    let mut out = String::new();
    print_stmt_into(&mut out, stmt);
    out
}

pub fn print_expr(expr: &Expr) -> String {
    let mut out = String::new();
    print_expr_into(&mut out, expr);
    out
}

fn print_stmt_into(out: &mut String, stmt: &Stmt) {
    match &stmt.kind {
        StmtKind::Expr(expr) => print_expr_into(out, expr),
        StmtKind::Let { pattern, init } => {
            let _ = write!(out, "(let {pattern} ");
            print_expr_into(out, init);
            out.push(')');
        }
        StmtKind::Print(expr) => {
            out.push_str("(print ");
            print_expr_into(out, expr);
            out.push(')');
        }
    }
}

fn print_expr_into(out: &mut String, expr: &Expr) {
    match &expr.kind {
        ExprKind::Literal(lit) => {
            let _ = write!(out, "{lit}");
        }
        ExprKind::Ident(name) => out.push_str(name.as_str()),
        ExprKind::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                print_expr_into(out, item);
            }
            out.push(']');
        }
        ExprKind::Unary { op, operand } => {
            let _ = write!(out, "({} ", op.as_symbol());
            print_expr_into(out, operand);
            out.push(')');
        }
        ExprKind::Postfix {
            op: PostfixOp::Factorial,
            operand,
        } => {
            out.push_str("(! ");
            print_expr_into(out, operand);
            out.push(')');
        }
        ExprKind::Binary { op, left, right } => {
            let _ = write!(out, "({} ", op.as_symbol());
            print_expr_into(out, left);
            out.push(' ');
            print_expr_into(out, right);
            out.push(')');
        }
        ExprKind::Call { callee, args } => {
            out.push_str("(call ");
            print_expr_into(out, callee);
            for arg in args {
                out.push(' ');
                print_expr_into(out, arg);
            }
            out.push(')');
        }
        ExprKind::Assign { pattern, value } => {
            let _ = write!(out, "(= {pattern} ");
            print_expr_into(out, value);
            out.push(')');
        }
        ExprKind::Block(stmts) => {
            out.push_str("(block");
            for stmt in stmts.iter() {
                out.push(' ');
                print_stmt_into(out, stmt);
            }
            out.push(')');
        }
        ExprKind::MatchBlock(rows) => {
            out.push_str("(match");
            for row in rows.iter() {
                out.push(' ');
                print_row_into(out, row);
            }
            out.push(')');
        }
    }
}

fn print_row_into(out: &mut String, row: &MatchRow) {
    out.push('(');
    for pattern in &row.patterns {
        let _ = write!(out, "{pattern} ");
    }
    out.push_str("-> ");
    print_expr_into(out, &row.body);
    out.push(')');
}
