//! Binary operator implementations for the evaluator.
//!
//! Operands arrive already forced. `@` never reaches this module; it needs
//! the interpreter to apply a closure.

use slang_ir::BinaryOp;

use crate::errors::{binary_type_mismatch, EvalResult};
use crate::Value;

/// Evaluate a binary operation on forced operands.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Callers own the forced operands; taking them by value avoids clones at every call site"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => return Ok(Value::boolean(left == right)),
        BinaryOp::NotEq => return Ok(Value::boolean(left != right)),
        _ => {}
    }

    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => eval_number_binary(*a, *b, op)
            .ok_or_else(|| binary_type_mismatch(op, &left, &right)),
        // Text on the left absorbs anything on the right.
        (Value::Text(a), _) if op == BinaryOp::Add => {
            let mut out = String::with_capacity(a.len());
            out.push_str(a);
            out.push_str(&right.display_string());
            Ok(Value::text(&out))
        }
        (Value::List(a), Value::List(b)) if op == BinaryOp::Add => {
            Ok(Value::list(a.iter().chain(b.iter()).cloned().collect()))
        }
        _ => Err(binary_type_mismatch(op, &left, &right)),
    }
}

/// Arithmetic and comparison on numbers. Division follows IEEE-754, so
/// `1 / 0` is `Infinity`.
fn eval_number_binary(a: f64, b: f64, op: BinaryOp) -> Option<Value> {
    Some(match op {
        BinaryOp::Add => Value::number(a + b),
        BinaryOp::Sub => Value::number(a - b),
        BinaryOp::Mul => Value::number(a * b),
        BinaryOp::Div => Value::number(a / b),
        BinaryOp::Lt => Value::boolean(a < b),
        BinaryOp::LtEq => Value::boolean(a <= b),
        BinaryOp::Gt => Value::boolean(a > b),
        BinaryOp::GtEq => Value::boolean(a >= b),
        BinaryOp::Eq | BinaryOp::NotEq | BinaryOp::Apply => return None,
    })
}
