//! Behaviour tests that run whole programs through the lexer, parser and
//! interpreter.

mod dispatch_tests;
mod operators_tests;

use crate::{buffer_handler, Environment, EvalError, EvalResult, InterpreterBuilder, Value};

/// Run `source` in a fresh environment; the last statement's value and
/// everything printed.
pub(crate) fn run(source: &str) -> (EvalResult, String) {
    let tokens = slang_lexer::lex(source);
    let stmts = slang_parse::parse(&tokens).unwrap();
    let interpreter = InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build();
    let result = interpreter.evaluate_all(&stmts, &Environment::new());
    (result, interpreter.get_print_output())
}

/// Run each line as its own program in one shared environment, carrying on
/// after errors the way the REPL does.
pub(crate) fn run_lines(lines: &[&str]) -> Vec<EvalResult> {
    let interpreter = InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build();
    let env = Environment::new();
    lines
        .iter()
        .map(|line| {
            let stmts = slang_parse::parse(&slang_lexer::lex(line)).unwrap();
            interpreter.evaluate_all(&stmts, &env)
        })
        .collect()
}

pub(crate) fn eval_ok(source: &str) -> Value {
    run(source).0.unwrap()
}

pub(crate) fn eval_err(source: &str) -> EvalError {
    run(source).0.unwrap_err()
}

pub(crate) fn num(n: f64) -> Value {
    Value::number(n)
}
