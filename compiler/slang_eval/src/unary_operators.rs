//! Prefix and postfix operator implementations for the evaluator.

use slang_ir::{PostfixOp, UnaryOp};

use crate::errors::{type_mismatch, EvalResult};
use crate::Value;

/// Evaluate a prefix operation on a forced operand.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Mirrors evaluate_binary: operands are owned forced values"
)]
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (&value, op) {
        (Value::Number(n), UnaryOp::Neg) => Ok(Value::number(-n)),
        (Value::Number(n), UnaryOp::Plus) => Ok(Value::number(*n)),
        (_, UnaryOp::Not) => match value.as_bool() {
            Some(b) => Ok(Value::boolean(!b)),
            None => Err(type_mismatch("boolean", &value)),
        },
        _ => Err(type_mismatch("number", &value)),
    }
}

/// Evaluate a postfix operation on a forced operand.
pub fn evaluate_postfix(value: &Value, op: PostfixOp) -> EvalResult {
    match (value, op) {
        (Value::Number(n), PostfixOp::Factorial) => Ok(Value::number(factorial(*n))),
        _ => Err(type_mismatch("number", value)),
    }
}

/// Largest `n` whose factorial is finite in an `f64`.
const MAX_FINITE_FACTORIAL: f64 = 170.0;

/// Factorial of the integral part of `n`. Anything below 2 (negative
/// numbers and NaN included) gives 1.
fn factorial(n: f64) -> f64 {
    let n = n.trunc();
    if n > MAX_FINITE_FACTORIAL {
        return f64::INFINITY;
    }
    let mut acc = 1.0;
    let mut k = 2.0;
    while k <= n {
        acc *= k;
        k += 1.0;
    }
    acc
}
