//! Dispatch trees: the callable form of a match block.
//!
//! Each row of a match block is a path from the root, one edge per
//! pattern, ending in a `Leaf` holding the row's body. Rows that start with
//! the same patterns share a prefix of the tree, which is what lets a call
//! consume arguments one at a time and stop part way (currying).
//!
//! # Edges
//!
//! A fully literal pattern (`0`, `"a"`, `[1, :x]`) becomes a literal edge
//! keyed by the value it accepts. Any other pattern becomes a pattern edge
//! keyed by its canonical rendering, so `n` in two rows is one edge. Edges
//! keep declaration order, and when several accept an argument the first
//! one to reach a `Leaf` wins.
//!
//! Trees are built once per match-block evaluation and never mutated.
//! Applying one only allocates new nodes (see `resolve`).

mod resolve;

use std::rc::Rc;

use slang_ir::{Expr, MatchRow, Pattern};

use crate::{Environment, Value};

/// Node of a dispatch tree.
pub enum DispatchNode {
    /// A row's body, reached once all its patterns matched.
    Leaf(Rc<Expr>),
    /// Outgoing edges in declaration order.
    Internal(Vec<Edge>),
    /// A subtree whose matching continues in a captured environment. Only
    /// created when an ambiguous argument leaves several branches open.
    WithEnv(Environment, Rc<DispatchNode>),
}

pub struct Edge {
    pub key: EdgeKey,
    pub node: Rc<DispatchNode>,
}

#[derive(Clone)]
pub enum EdgeKey {
    /// Accepts exactly this value.
    Literal(Value),
    /// Accepts what `pattern` matches; `shape` is its canonical rendering.
    Pattern { shape: String, pattern: Pattern },
}

impl EdgeKey {
    fn for_pattern(pattern: &Pattern) -> Self {
        match literal_value(pattern) {
            Some(value) => EdgeKey::Literal(value),
            None => EdgeKey::Pattern {
                shape: pattern.to_string(),
                pattern: pattern.clone(),
            },
        }
    }

    fn same_key(&self, other: &EdgeKey) -> bool {
        match (self, other) {
            (EdgeKey::Literal(a), EdgeKey::Literal(b)) => a == b,
            (EdgeKey::Pattern { shape: a, .. }, EdgeKey::Pattern { shape: b, .. }) => a == b,
            _ => false,
        }
    }
}

/// The one value a fully literal pattern accepts.
fn literal_value(pattern: &Pattern) -> Option<Value> {
    match pattern {
        Pattern::Literal(lit) => Some(Value::from_literal(lit)),
        Pattern::Seq(items) => items
            .iter()
            .map(literal_value)
            .collect::<Option<Vec<_>>>()
            .map(Value::list),
        _ => None,
    }
}

impl DispatchNode {
    /// Build the tree for a match block's rows.
    ///
    /// Rows are taken shortest first (stable), so a shorter row that reaches
    /// a shared prefix first claims the `Leaf` there and a later row on the
    /// same path is shadowed.
    pub fn build(rows: &[MatchRow]) -> Rc<DispatchNode> {
        let mut sorted: Vec<&MatchRow> = rows.iter().collect();
        sorted.sort_by_key(|row| row.arity());

        let mut root = Builder::Internal(Vec::new());
        for row in sorted {
            if !root.insert(&row.patterns, &row.body) {
                tracing::debug!(row = %row.span, "match row shadowed by an earlier row");
            }
        }
        root.finish()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, DispatchNode::Leaf(_))
    }
}

/// Mutable tree used while inserting rows.
enum Builder {
    Leaf(Rc<Expr>),
    Internal(Vec<(EdgeKey, Builder)>),
}

impl Builder {
    /// Add the path for one row. Returns `false` if an existing leaf already
    /// covers it.
    fn insert(&mut self, patterns: &[Pattern], body: &Rc<Expr>) -> bool {
        let Builder::Internal(edges) = self else {
            return false;
        };
        let Some((first, rest)) = patterns.split_first() else {
            return false;
        };

        let key = EdgeKey::for_pattern(first);
        let index = match edges.iter().position(|(k, _)| k.same_key(&key)) {
            Some(index) => index,
            None => {
                let child = if rest.is_empty() {
                    Builder::Leaf(Rc::clone(body))
                } else {
                    Builder::Internal(Vec::new())
                };
                edges.push((key, child));
                if rest.is_empty() {
                    return true;
                }
                edges.len() - 1
            }
        };
        edges[index].1.insert(rest, body)
    }

    fn finish(self) -> Rc<DispatchNode> {
        Rc::new(match self {
            Builder::Leaf(body) => DispatchNode::Leaf(body),
            Builder::Internal(edges) => DispatchNode::Internal(
                edges
                    .into_iter()
                    .map(|(key, child)| Edge {
                        key,
                        node: child.finish(),
                    })
                    .collect(),
            ),
        })
    }
}

#[cfg(test)]
mod tests;
