//! Applying a dispatch tree to arguments.
//!
//! `resolve` walks the tree one argument at a time. Every edge that accepts
//! the argument is followed, each with its own bindings. The first branch
//! to reach a `Leaf` wins. If none does, the surviving branches are merged
//! into a fresh `Internal` node whose children carry their branch's
//! environment in a `WithEnv` wrapper: an ambiguous fork, decided by later
//! arguments.

use std::rc::Rc;

use slang_stack::ensure_sufficient_stack;

use super::{DispatchNode, Edge, EdgeKey};
use crate::errors::{no_match, not_callable, EvalError, EvalResult};
use crate::matcher::BindMode;
use crate::value::ClosureValue;
use crate::{Environment, Interpreter, Value};

/// Where a call ended up: the node reached, the environment holding the
/// bindings made on the way, and the arguments not yet consumed.
struct Resolution<'a> {
    node: Rc<DispatchNode>,
    env: Environment,
    rest: &'a [Value],
}

impl Interpreter {
    /// Call a closure with `args`.
    pub fn apply_closure(&self, closure: &ClosureValue, args: &[Value]) -> EvalResult {
        self.apply_node(closure.node(), closure.env(), args)
    }

    fn apply_node(&self, node: &Rc<DispatchNode>, env: &Environment, args: &[Value]) -> EvalResult {
        ensure_sufficient_stack(|| {
            let Some(resolution) = self.resolve(node, args, env)? else {
                return Err(no_match(args));
            };
            let DispatchNode::Leaf(body) = resolution.node.as_ref() else {
                tracing::debug!(args = args.len(), "curried matchbox");
                return Ok(Value::closure(resolution.node, resolution.env));
            };

            let value = self.eval(body, &resolution.env)?;
            if resolution.rest.is_empty() {
                return Ok(value);
            }

            // Over-application: the body must produce the next callable.
            let callee = self.force(value)?;
            match &callee {
                Value::Closure(closure) => self.apply_closure(closure, resolution.rest),
                other => Err(not_callable(other)),
            }
        })
    }

    fn resolve<'a>(
        &self,
        node: &Rc<DispatchNode>,
        args: &'a [Value],
        env: &Environment,
    ) -> Result<Option<Resolution<'a>>, EvalError> {
        let edges = match node.as_ref() {
            DispatchNode::Leaf(_) => {
                return Ok(Some(Resolution {
                    node: Rc::clone(node),
                    env: env.clone(),
                    rest: args,
                }));
            }
            // `env` already descends from the wrapper's frame; see `base`.
            DispatchNode::WithEnv(_, inner) => return self.resolve(inner, args, env),
            DispatchNode::Internal(edges) => edges,
        };
        let Some((arg, rest)) = args.split_first() else {
            return Ok(Some(Resolution {
                node: Rc::clone(node),
                env: env.clone(),
                rest: args,
            }));
        };
        tracing::trace!(arg = %arg, edges = edges.len(), "resolving argument");

        // Literal edges compare against the forced argument; pattern edges
        // force only if their pattern asks for it.
        let forced = if edges.iter().any(|e| matches!(e.key, EdgeKey::Literal(_))) {
            Some(self.force(arg.clone())?)
        } else {
            None
        };

        let mut open = Vec::new();
        for edge in edges {
            // A wrapped child continues a fork branch: its bindings so far
            // live in the captured frame, not the caller's. This is the only
            // place a `WithEnv` switches environments; `resolve` on the
            // wrapper itself just unwraps it.
            let base = match edge.node.as_ref() {
                DispatchNode::WithEnv(captured, _) => captured,
                _ => env,
            };
            let resolution = match &edge.key {
                EdgeKey::Literal(expected) => {
                    if forced.as_ref() != Some(expected) {
                        continue;
                    }
                    ensure_sufficient_stack(|| self.resolve(&edge.node, rest, base))?
                }
                EdgeKey::Pattern { pattern, .. } => {
                    let frame = base.child();
                    if !self.match_pattern(pattern, arg.clone(), &frame, BindMode::Define)? {
                        continue;
                    }
                    ensure_sufficient_stack(|| self.resolve(&edge.node, rest, &frame))?
                }
            };
            match resolution {
                Some(found) if found.node.is_leaf() => return Ok(Some(found)),
                Some(found) => open.push(found),
                None => {}
            }
        }

        if open.is_empty() {
            return Ok(None);
        }
        if open.len() > 1 {
            tracing::debug!(branches = open.len(), "ambiguous fork");
        }
        Ok(Some(Resolution {
            node: Rc::new(merge(open, env)),
            env: env.clone(),
            rest: &[],
        }))
    }
}

/// Combine the open branches of a call into one node. Each branch's bare
/// edges are wrapped in that branch's environment unless it is the caller's.
///
/// Edges that are already wrapped came from a deeper merge; their frame is a
/// descendant of the branch's and holds the deeper bindings, so they are kept
/// as they are.
fn merge(open: Vec<Resolution<'_>>, caller: &Environment) -> DispatchNode {
    let mut edges = Vec::new();
    for branch in open {
        let DispatchNode::Internal(branch_edges) = branch.node.as_ref() else {
            continue;
        };
        for edge in branch_edges {
            let node = match edge.node.as_ref() {
                DispatchNode::WithEnv(..) => Rc::clone(&edge.node),
                _ if branch.env.ptr_eq(caller) => Rc::clone(&edge.node),
                _ => Rc::new(DispatchNode::WithEnv(
                    branch.env.clone(),
                    Rc::clone(&edge.node),
                )),
            };
            edges.push(Edge {
                key: edge.key.clone(),
                node,
            });
        }
    }
    DispatchNode::Internal(edges)
}
