//! Calling matchboxes: dispatch, currying, forks and `self`.

use pretty_assertions::assert_eq;

use super::{eval_err, eval_ok, num, run};
use crate::errors::EvalErrorKind;
use crate::Value;

#[test]
fn test_currying() {
    let src = "let add = { a b -> a + b }\nlet add3 = add 3\nadd3 4";
    assert_eq!(eval_ok(src), num(7.0));
    assert!(matches!(
        eval_ok("let add = { a b -> a + b }\nadd 3"),
        Value::Closure(_)
    ));
}

#[test]
fn test_curried_closures_are_independent() {
    let src = "let add = { a b -> a + b }\n\
               let inc = add 1\n\
               let dec = add (-1)\n\
               [inc 10, dec 10, inc 0]";
    assert_eq!(
        eval_ok(src),
        Value::list(vec![num(11.0), num(9.0), num(1.0)])
    );
}

#[test]
fn test_literal_before_variable() {
    let src = "let f = { 0 -> \"zero\", n -> \"other\" }\n[f 0, f 5]";
    assert_eq!(
        eval_ok(src),
        Value::list(vec![Value::text("zero"), Value::text("other")])
    );
}

#[test]
fn test_first_declared_row_wins() {
    assert_eq!(eval_ok("let f = { n -> :var, 0 -> :zero }\nf 0"), Value::atom("var"));
    assert_eq!(eval_ok("let f = { 0 -> :a, 0 -> :b }\nf 0"), Value::atom("a"));
}

#[test]
fn test_shorter_row_shadows_longer() {
    // `a` alone reaches a body first; the two-argument row never runs.
    let src = "let f = { a b -> :two, a -> :one }\nf 1 2";
    let err = eval_err(src);
    assert_eq!(
        err.kind,
        EvalErrorKind::NotCallable {
            type_name: "atom"
        }
    );
}

#[test]
fn test_over_application() {
    assert_eq!(eval_ok("let f = { a -> { b -> a + b } }\nf 1 2"), num(3.0));
}

#[test]
fn test_over_application_requires_closure() {
    let err = eval_err("let f = { a -> a }\nf 1 2");
    assert_eq!(
        err.kind,
        EvalErrorKind::NotCallable {
            type_name: "number"
        }
    );
}

#[test]
fn test_no_match() {
    let err = eval_err("let f = { 0 -> 1 }\nf 2");
    assert_eq!(
        err.kind,
        EvalErrorKind::NoMatch {
            args: "2".to_string()
        }
    );
}

#[test]
fn test_self_recursion() {
    let src = "let fact = { 0 -> 1, n -> n * self (n - 1) }\nfact 5";
    assert_eq!(eval_ok(src), num(120.0));
}

#[test]
fn test_deep_self_recursion() {
    let src = "let down = { 0 -> :done, n -> self (n - 1) }\ndown 3000";
    assert_eq!(eval_ok(src), Value::atom("done"));
}

#[test]
fn test_self_is_the_outermost_closure() {
    // Inside a curried call `self` still takes both arguments.
    let src = "let sum = { 0 acc -> acc, n acc -> self (n - 1) (acc + n) }\nsum 4 0";
    assert_eq!(eval_ok(src), num(10.0));
}

#[test]
fn test_ambiguous_fork() {
    let src = "let f = { a 1 -> a, b 2 -> b + 100 }\nlet g = f 5\n[g 1, g 2, f 7 2]";
    assert_eq!(
        eval_ok(src),
        Value::list(vec![num(5.0), num(105.0), num(107.0)])
    );
}

#[test]
fn test_fork_keeps_branch_bindings_apart() {
    let src = "let f = { x :l -> [:left, x], y :r -> [:right, y] }\nlet g = f 9\ng :r";
    assert_eq!(
        eval_ok(src),
        Value::list(vec![Value::atom("right"), num(9.0)])
    );
}

#[test]
fn test_partial_application_keeps_every_binding() {
    let src = "let f = { a b c -> [a, b, c] }\nlet g = f 1 2\ng 3";
    assert_eq!(
        eval_ok(src),
        Value::list(vec![num(1.0), num(2.0), num(3.0)])
    );
}

#[test]
fn test_partial_application_in_stages() {
    let src = "let f = { a b c d -> [a, b, c, d] }\n\
               let g = f 1 2\n\
               let h = g 3\n\
               [h 4, g 5 6]";
    assert_eq!(
        eval_ok(src),
        Value::list(vec![
            Value::list(vec![num(1.0), num(2.0), num(3.0), num(4.0)]),
            Value::list(vec![num(1.0), num(2.0), num(5.0), num(6.0)]),
        ])
    );
}

#[test]
fn test_fork_two_levels_deep_keeps_bindings() {
    let src = "let f = { a b 1 -> [a, b], c d 2 -> [c, d] }\nlet g = f 5 6\n[g 1, g 2]";
    assert_eq!(
        eval_ok(src),
        Value::list(vec![
            Value::list(vec![num(5.0), num(6.0)]),
            Value::list(vec![num(5.0), num(6.0)]),
        ])
    );
}

#[test]
fn test_list_patterns_in_rows() {
    let src = "let len = { [] -> 0, [_, rest..] -> 1 + self rest }\nlen [4, 5, 6]";
    assert_eq!(eval_ok(src), num(3.0));
}

#[test]
fn test_literal_list_row() {
    let src = "let f = { [1, :x] -> :exact, _ -> :other }\n[f [1, :x], f [1, :y]]";
    assert_eq!(
        eval_ok(src),
        Value::list(vec![Value::atom("exact"), Value::atom("other")])
    );
}

#[test]
fn test_arguments_stay_lazy() {
    let (result, output) = run("let first = { x y -> x }\nfirst 1 { print \"boom\"; 2 }");
    assert_eq!(result.unwrap(), num(1.0));
    assert_eq!(output, "");
}

#[test]
fn test_literal_rows_force_the_argument() {
    let (result, output) = run("let f = { 1 -> :one, _ -> :other }\nf { print \"forced\"; 1 }");
    assert_eq!(result.unwrap(), Value::atom("one"));
    assert_eq!(output, "forced\n");
}

#[test]
fn test_strict_pattern_forces() {
    let (result, output) = run("let f = { {x} -> :ok }\nf { print \"forced\"; 5 }");
    assert_eq!(result.unwrap(), Value::atom("ok"));
    assert_eq!(output, "forced\n");
}

#[test]
fn test_apply_operator() {
    assert_eq!(eval_ok("3 @ { x -> x * 2 }"), num(6.0));
    assert_eq!(eval_ok("2 @ { x -> x + 1 } @ { x -> x * 10 }"), num(30.0));
    let err = eval_err("3 @ 4");
    assert_eq!(
        err.kind,
        EvalErrorKind::NotCallable {
            type_name: "number"
        }
    );
}

#[test]
fn test_list_indexing() {
    assert_eq!(eval_ok("let l = [10, 20, 30]\nl 1"), num(20.0));
    assert_eq!(eval_ok("let m = [[1, 2], [3, 4]]\nm 1 0"), num(3.0));
    assert_eq!(
        eval_err("[1, 2] 2").kind,
        EvalErrorKind::IndexOutOfBounds {
            index: "2".to_string(),
            len: 2
        }
    );
    assert_eq!(
        eval_err("[1, 2] 0.5").kind,
        EvalErrorKind::NonIntegerIndex {
            index: "0.5".to_string()
        }
    );
    assert_eq!(
        eval_err("[1, 2] (-1)").kind,
        EvalErrorKind::IndexOutOfBounds {
            index: "-1".to_string(),
            len: 2
        }
    );
}

#[test]
fn test_calling_a_non_callable() {
    assert_eq!(
        eval_err("\"f\" 1").kind,
        EvalErrorKind::NotCallable {
            type_name: "text"
        }
    );
}
