//! Tests for operator implementations, direct and through programs.

use pretty_assertions::assert_eq;
use slang_ir::{BinaryOp, PostfixOp, UnaryOp};

use super::{eval_err, eval_ok, num};
use crate::errors::EvalErrorKind;
use crate::{evaluate_binary, evaluate_postfix, evaluate_unary, Value};

#[test]
fn test_number_arithmetic() {
    assert_eq!(evaluate_binary(num(2.0), num(3.0), BinaryOp::Add).unwrap(), num(5.0));
    assert_eq!(evaluate_binary(num(5.0), num(3.0), BinaryOp::Sub).unwrap(), num(2.0));
    assert_eq!(evaluate_binary(num(2.0), num(3.0), BinaryOp::Mul).unwrap(), num(6.0));
    assert_eq!(evaluate_binary(num(7.0), num(2.0), BinaryOp::Div).unwrap(), num(3.5));
}

#[test]
fn test_division_by_zero_is_infinite() {
    assert_eq!(
        evaluate_binary(num(1.0), num(0.0), BinaryOp::Div).unwrap(),
        num(f64::INFINITY)
    );
}

#[test]
fn test_comparisons() {
    let t = Value::boolean(true);
    let f = Value::boolean(false);
    assert_eq!(evaluate_binary(num(2.0), num(3.0), BinaryOp::Lt).unwrap(), t);
    assert_eq!(evaluate_binary(num(3.0), num(3.0), BinaryOp::LtEq).unwrap(), t);
    assert_eq!(evaluate_binary(num(2.0), num(3.0), BinaryOp::Gt).unwrap(), f);
    assert_eq!(evaluate_binary(num(3.0), num(3.0), BinaryOp::GtEq).unwrap(), t);
}

#[test]
fn test_equality_is_structural() {
    let a = Value::list(vec![num(1.0), Value::text("x")]);
    let b = Value::list(vec![num(1.0), Value::text("x")]);
    assert_eq!(
        evaluate_binary(a.clone(), b, BinaryOp::Eq).unwrap(),
        Value::boolean(true)
    );
    assert_eq!(
        evaluate_binary(a, Value::Nothing, BinaryOp::NotEq).unwrap(),
        Value::boolean(true)
    );
    assert_eq!(
        evaluate_binary(Value::atom("ok"), Value::atom("no"), BinaryOp::Eq).unwrap(),
        Value::boolean(false)
    );
}

#[test]
fn test_text_concatenation_uses_display_form() {
    assert_eq!(
        evaluate_binary(Value::text("n="), num(4.0), BinaryOp::Add).unwrap(),
        Value::text("n=4")
    );
    assert_eq!(
        evaluate_binary(Value::text("a"), Value::text("b"), BinaryOp::Add).unwrap(),
        Value::text("ab")
    );
    assert_eq!(
        evaluate_binary(Value::text("l="), Value::list(vec![Value::text("q")]), BinaryOp::Add)
            .unwrap(),
        Value::text("l=[\"q\"]")
    );
}

#[test]
fn test_list_concatenation() {
    let left = Value::list(vec![num(1.0)]);
    let right = Value::list(vec![num(2.0), num(3.0)]);
    assert_eq!(
        evaluate_binary(left, right, BinaryOp::Add).unwrap(),
        Value::list(vec![num(1.0), num(2.0), num(3.0)])
    );
}

#[test]
fn test_binary_type_mismatch() {
    let err = evaluate_binary(num(1.0), Value::text("a"), BinaryOp::Add).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::BinaryTypeMismatch {
            op: BinaryOp::Add,
            left: "number",
            right: "text",
        }
    );
    assert!(evaluate_binary(Value::text("a"), num(1.0), BinaryOp::Sub).is_err());
    assert!(evaluate_binary(Value::Nothing, Value::Nothing, BinaryOp::Lt).is_err());
}

#[test]
fn test_unary() {
    assert_eq!(evaluate_unary(num(3.0), UnaryOp::Neg).unwrap(), num(-3.0));
    assert_eq!(evaluate_unary(num(3.0), UnaryOp::Plus).unwrap(), num(3.0));
    assert_eq!(
        evaluate_unary(Value::boolean(true), UnaryOp::Not).unwrap(),
        Value::boolean(false)
    );
    assert_eq!(
        evaluate_unary(Value::atom("maybe"), UnaryOp::Not)
            .unwrap_err()
            .kind,
        EvalErrorKind::TypeMismatch {
            expected: "boolean",
            got: "atom",
        }
    );
    assert!(evaluate_unary(Value::text("x"), UnaryOp::Neg).is_err());
}

#[test]
fn test_factorial() {
    let fact = |n: f64| evaluate_postfix(&num(n), PostfixOp::Factorial).unwrap();
    assert_eq!(fact(0.0), num(1.0));
    assert_eq!(fact(5.0), num(120.0));
    assert_eq!(fact(5.9), num(120.0));
    assert_eq!(fact(-3.0), num(1.0));
    assert_eq!(fact(1000.0), num(f64::INFINITY));
    assert!(evaluate_postfix(&Value::Nothing, PostfixOp::Factorial).is_err());
}

#[test]
fn test_operators_in_programs() {
    assert_eq!(eval_ok("1 + 2 * 3"), num(7.0));
    assert_eq!(eval_ok("(1 + 2) * 3"), num(9.0));
    assert_eq!(eval_ok("-4 + +1"), num(-3.0));
    assert_eq!(eval_ok("3! + 1"), num(7.0));
    assert_eq!(eval_ok("!(1 < 2)"), Value::boolean(false));
    assert_eq!(eval_ok("[1] + [2]"), Value::list(vec![num(1.0), num(2.0)]));
}

#[test]
fn test_operands_are_forced() {
    assert_eq!(eval_ok("{ 2 } * { 1 + 2 }"), num(6.0));
    assert_eq!(eval_ok("let t = { 4 }\n-t"), num(-4.0));
}

#[test]
fn test_operator_error_carries_span() {
    let err = eval_err("let x = 1\nx + y");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundName {
            name: "y".to_string()
        }
    );
    assert_eq!(err.span, Some(slang_ir::Span::new(14, 15)));
}

#[test]
fn test_interpolation() {
    assert_eq!(eval_ok("let n = 3\n\"n is \\(n)!\""), Value::text("n is 3!"));
    assert_eq!(
        eval_ok("\"\\(1 + 1) and \\(\"x\")\""),
        Value::text("2 and x")
    );
}
