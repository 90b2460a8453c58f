use pretty_assertions::assert_eq;
use slang_diagnostic::ErrorCode;
use slang_ir::printer::print_program;
use slang_ir::{Span, StmtKind};

use super::*;

fn parse_source(source: &str) -> Result<Vec<Stmt>, ParseError> {
    parse(&slang_lexer::lex(source))
}

fn sexpr(source: &str) -> String {
    match parse_source(source) {
        Ok(stmts) => print_program(&stmts).trim_end().to_string(),
        Err(err) => panic!("parse failed for {source:?}: {err}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    match parse_source(source) {
        Ok(stmts) => panic!("expected error for {source:?}, got {}", print_program(&stmts)),
        Err(err) => err,
    }
}

// Precedence

#[test]
fn test_product_binds_tighter_than_sum() {
    assert_eq!(sexpr("1 + 2 * 3"), "(+ 1 (* 2 3))");
}

#[test]
fn test_binary_operators_are_left_associative() {
    assert_eq!(sexpr("a - b - c"), "(- (- a b) c)");
    assert_eq!(sexpr("a / b * c"), "(* (/ a b) c)");
}

#[test]
fn test_call_binds_tighter_than_operators() {
    assert_eq!(sexpr("f x y + 1"), "(+ (call f x y) 1)");
    assert_eq!(sexpr("f (g x) [1, 2]"), "(call f (call g x) [1, 2])");
}

#[test]
fn test_prefix_and_postfix() {
    assert_eq!(sexpr("-x!"), "(- (! x))");
    assert_eq!(sexpr("!!a"), "(! (! a))");
    assert_eq!(sexpr("3!!"), "(! (! 3))");
}

#[test]
fn test_apply_is_lowest_binary_operator() {
    assert_eq!(sexpr("3 @ f"), "(@ 3 f)");
    assert_eq!(sexpr("x + 1 @ f == g"), "(@ (+ x 1) (== f g))");
}

#[test]
fn test_comparisons() {
    assert_eq!(sexpr("a < b"), "(< a b)");
    assert_eq!(sexpr("a + 1 != b"), "(!= (+ a 1) b)");
}

// Literals

#[test]
fn test_keyword_literals() {
    assert_eq!(sexpr("[true, false, nothing, :ok]"), "[:true, :false, nothing, :ok]");
}

#[test]
fn test_list_allows_newlines_and_trailing_comma() {
    assert_eq!(sexpr("[1,\n 2,\n]"), "[1, 2]");
    assert_eq!(sexpr("[]"), "[]");
}

#[test]
fn test_interpolation_desugars_to_concatenation() {
    assert_eq!(sexpr(r#""a\(x)b""#), r#"(+ (+ "a" x) "b")"#);
    assert_eq!(sexpr(r#""\(x)""#), r#"(+ "" x)"#);
    assert_eq!(
        sexpr(r#""\(a) and \(b + 1)!""#),
        r#"(+ (+ (+ (+ "" a) " and ") (+ b 1)) "!")"#
    );
}

// Statements

#[test]
fn test_statements_and_separators() {
    assert_eq!(
        sexpr("let x = 1; print x\n\nx"),
        "(let x 1)\n(print x)\nx"
    );
}

#[test]
fn test_let_statement_span() {
    let stmts = parse_source("let x = 42").unwrap_or_default();
    assert_eq!(stmts.len(), 1);
    assert!(matches!(stmts[0].kind, StmtKind::Let { .. }));
    assert_eq!(stmts[0].span, Span::new(0, 10));
}

#[test]
fn test_let_with_list_pattern() {
    assert_eq!(sexpr("let [a, rest..] = xs"), "(let [a, rest..] xs)");
}

#[test]
fn test_comment_only_program_is_empty() {
    assert_eq!(parse_source("-- nothing here\n").map(|s| s.len()), Ok(0));
}

// Assignment

#[test]
fn test_assignment_expression() {
    assert_eq!(sexpr("x = 1"), "(= x 1)");
    assert_eq!(sexpr("x = y = 1"), "(= x (= y 1))");
    assert_eq!(sexpr("[a, b] = [b, a]"), "(= [a, b] [b, a])");
}

#[test]
fn test_pattern_lookalikes_backtrack_to_expressions() {
    assert_eq!(sexpr("x == 1"), "(== x 1)");
    assert_eq!(sexpr("[a, b]"), "[a, b]");
    assert_eq!(sexpr("-1 + 2"), "(+ (- 1) 2)");
}

// Braces

#[test]
fn test_block_and_match_block() {
    assert_eq!(sexpr("{ x }"), "(block x)");
    assert_eq!(sexpr("{ }"), "(block)");
    assert_eq!(sexpr("{ print 1; 2 }"), "(block (print 1) 2)");
    assert_eq!(sexpr("{ n -> n }"), "(match (n -> n))");
}

#[test]
fn test_match_rows_sorted_by_arity() {
    assert_eq!(
        sexpr("{ a b -> 1, 0 -> 2\n c -> 3 }"),
        "(match (0 -> 2) (c -> 3) (a b -> 1))"
    );
}

#[test]
fn test_match_row_patterns() {
    assert_eq!(
        sexpr("{ -1 -> :neg, [x, xs..] \"s\" _ -> x }"),
        "(match (-1 -> :neg) ([x, xs..] \"s\" _ -> x))"
    );
}

#[test]
fn test_strict_patterns() {
    assert_eq!(sexpr("{ {x} -> x }"), "(match ({x} -> x))");
    assert_eq!(sexpr("{ {{x}} -> x }"), "(match ({{x}} -> x))");
}

#[test]
fn test_nested_match_blocks() {
    assert_eq!(
        sexpr("{ a -> { b -> a + b } }"),
        "(match (a -> (match (b -> (+ a b)))))"
    );
}

// Errors

#[test]
fn test_missing_pattern() {
    let err = parse_err("let = 1");
    assert_eq!(err.code, ErrorCode::E1004);
    assert_eq!(err.message, "expected pattern, found `=`");
    assert_eq!(err.context, Some(ErrorContext::Pattern));
    assert!(!err.incomplete);
}

#[test]
fn test_spread_must_be_last() {
    let err = parse_err("let [a.., b] = x");
    assert_eq!(err.code, ErrorCode::E1005);
    assert_eq!(err.context, Some(ErrorContext::ListPattern));

    let err = parse_err("let x.. = 1");
    assert_eq!(err.code, ErrorCode::E1005);
}

#[test]
fn test_strict_pattern_takes_only_a_name() {
    let err = parse_err("let {1} = x");
    assert_eq!(err.code, ErrorCode::E1004);
}

#[test]
fn test_unclosed_group_is_incomplete() {
    let err = parse_err("(1 + 2");
    assert_eq!(err.code, ErrorCode::E1003);
    assert!(err.incomplete);
    assert_eq!(err.opened_at, Some(Span::new(0, 1)));
    assert_eq!(err.context, Some(ErrorContext::Group));
}

#[test]
fn test_missing_expression_at_end_is_incomplete() {
    let err = parse_err("let x =");
    assert_eq!(err.code, ErrorCode::E1002);
    assert!(err.incomplete);
}

#[test]
fn test_unfinished_match_block_is_incomplete() {
    let err = parse_err("{ x ->");
    assert!(err.incomplete);
    assert_eq!(err.context, Some(ErrorContext::MatchRow));

    let err = parse_err("{ print 1");
    assert!(err.incomplete);
    assert_eq!(err.code, ErrorCode::E1003);
}

#[test]
fn test_unexpected_token_after_statement() {
    let err = parse_err("x )");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.message, "expected newline or `;`, found `)`");
    assert!(!err.incomplete);
}

#[test]
fn test_unterminated_string_is_incomplete() {
    let err = parse_err("print \"abc");
    assert_eq!(err.code, ErrorCode::E0001);
    assert!(err.incomplete);
}

#[test]
fn test_invalid_character() {
    let err = parse_err("1 + $");
    assert_eq!(err.code, ErrorCode::E0002);
    assert!(!err.incomplete);
}

#[test]
fn test_diagnostic_has_context_note() {
    let diag = parse_err("(1 + 2").to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.notes, vec!["while parsing a parenthesized expression".to_string()]);
    assert_eq!(diag.labels.len(), 2);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let depth = 2000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(sexpr(&source), "1");
}

#[test]
fn test_match_row_needs_a_pattern() {
    let err = parse_err("{ a -> 1, -> 2 }");
    assert_eq!(err.code, ErrorCode::E1004);
    assert_eq!(err.context, Some(ErrorContext::Pattern));
}
