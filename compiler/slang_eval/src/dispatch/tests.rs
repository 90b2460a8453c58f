use std::rc::Rc;

use pretty_assertions::assert_eq;
use slang_ir::{ExprKind, MatchRow, StmtKind};

use super::*;

/// Rows of the match block in `source`, which must be a single expression.
fn rows(source: &str) -> Rc<[MatchRow]> {
    let stmts = slang_parse::parse(&slang_lexer::lex(source)).unwrap_or_default();
    match stmts.first().map(|s| &s.kind) {
        Some(StmtKind::Expr(expr)) => match &expr.kind {
            ExprKind::MatchBlock(rows) => Rc::clone(rows),
            other => panic!("expected a match block, got {other:?}"),
        },
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

/// Edge labels at `node`: literal values as rendered, patterns by shape.
fn labels(node: &DispatchNode) -> Vec<String> {
    match node {
        DispatchNode::Internal(edges) => edges
            .iter()
            .map(|edge| match &edge.key {
                EdgeKey::Literal(value) => format!("={value}"),
                EdgeKey::Pattern { shape, .. } => shape.clone(),
            })
            .collect(),
        DispatchNode::Leaf(_) => vec!["<leaf>".to_string()],
        DispatchNode::WithEnv(_, inner) => labels(inner),
    }
}

fn child<'a>(node: &'a DispatchNode, index: usize) -> &'a DispatchNode {
    match node {
        DispatchNode::Internal(edges) => &edges[index].node,
        _ => panic!("not an internal node"),
    }
}

#[test]
fn test_one_edge_per_row() {
    let tree = DispatchNode::build(&rows("{ 0 -> :a, n -> :b, \"s\" -> :c }"));
    assert_eq!(labels(&tree), vec!["=0", "n", "=\"s\""]);
    assert!(child(&tree, 0).is_leaf());
    assert!(child(&tree, 1).is_leaf());
}

#[test]
fn test_shared_prefix() {
    let tree = DispatchNode::build(&rows("{ a 0 -> :zero\n a n -> :other }"));
    assert_eq!(labels(&tree), vec!["a"]);
    assert_eq!(labels(child(&tree, 0)), vec!["=0", "n"]);
}

#[test]
fn test_same_shape_different_names_do_not_share() {
    let tree = DispatchNode::build(&rows("{ a 1 -> a, b 2 -> b }"));
    assert_eq!(labels(&tree), vec!["a", "b"]);
}

#[test]
fn test_literal_lists_are_literal_edges() {
    let tree = DispatchNode::build(&rows("{ [1, :x] -> 1, [a, b..] -> 2, [] -> 3 }"));
    assert_eq!(labels(&tree), vec!["=[1, :x]", "[a, b..]", "=[]"]);
}

#[test]
fn test_strict_patterns_key_by_shape() {
    let tree = DispatchNode::build(&rows("{ {x} y -> 1, {x} z -> 2 }"));
    assert_eq!(labels(&tree), vec!["{x}"]);
    assert_eq!(labels(child(&tree, 0)), vec!["y", "z"]);
}

#[test]
fn test_shorter_row_claims_the_leaf() {
    // Sorted by arity, so `a -> 1` is inserted first and `a b -> 2` is
    // shadowed even though it is written first.
    let tree = DispatchNode::build(&rows("{ a b -> 2, a -> 1 }"));
    assert_eq!(labels(&tree), vec!["a"]);
    assert!(child(&tree, 0).is_leaf());
}

#[test]
fn test_duplicate_row_is_shadowed() {
    let tree = DispatchNode::build(&rows("{ 0 -> :first, 0 -> :second }"));
    assert_eq!(labels(&tree), vec!["=0"]);
    let DispatchNode::Leaf(body) = child(&tree, 0) else {
        panic!("expected a leaf");
    };
    assert_eq!(
        body.kind,
        ExprKind::Literal(slang_ir::Literal::Atom(slang_ir::Name::intern("first")))
    );
}
