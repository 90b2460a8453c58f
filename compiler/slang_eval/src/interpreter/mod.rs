//! Tree-walking interpreter.
//!
//! Expressions evaluate to values without forcing them; forcing happens
//! where a value is actually inspected (operators, literal patterns, list
//! indices, callees) and at statement level. Calls go through the dispatch
//! tree in `crate::dispatch`.

mod builder;

use std::rc::Rc;

use slang_ir::{BinaryOp, Expr, ExprKind, Name, Stmt, StmtKind};
use slang_stack::ensure_sufficient_stack;

use crate::dispatch::DispatchNode;
use crate::errors::{
    cyclic_force, index_out_of_bounds, match_failed, non_integer_index, not_callable, EvalResult,
};
use crate::matcher::BindMode;
use crate::operators::evaluate_binary;
use crate::unary_operators::{evaluate_postfix, evaluate_unary};
use crate::value::ForceStart;
use crate::{Environment, SharedPrintHandler, Value};

pub use builder::InterpreterBuilder;

/// The Slang interpreter.
///
/// Holds no program state of its own: bindings live in the `Environment`
/// passed to each call, so one interpreter can serve many sessions.
pub struct Interpreter {
    pub(crate) print_handler: SharedPrintHandler,
    /// Interned `self`, bound by every match block to its own closure.
    pub(crate) self_name: Name,
}

impl Interpreter {
    /// An interpreter printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Output captured by a buffer print handler; empty for stdout.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    pub fn clear_print_output(&self) {
        self.print_handler.clear();
    }

    /// Run one statement and return its value.
    ///
    /// Expression statements force their result once; `let`, `print` and
    /// assignment statements yield `nothing`.
    pub fn evaluate(&self, stmt: &Stmt, env: &Environment) -> EvalResult {
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                let value = self.eval(expr, env)?;
                if matches!(expr.kind, ExprKind::Assign { .. }) {
                    return Ok(Value::Nothing);
                }
                self.force(value).map_err(|e| e.with_span(expr.span))
            }
            StmtKind::Let { pattern, init } => {
                let value = self.eval(init, env)?;
                let matched = self
                    .match_pattern(pattern, value, env, BindMode::Define)
                    .map_err(|e| e.with_span(stmt.span))?;
                if matched {
                    Ok(Value::Nothing)
                } else {
                    Err(match_failed(pattern).with_span(stmt.span))
                }
            }
            StmtKind::Print(expr) => {
                let value = self.eval(expr, env)?;
                let value = self.force(value).map_err(|e| e.with_span(expr.span))?;
                self.print_handler.println(&value.display_string());
                Ok(Value::Nothing)
            }
        }
    }

    /// Run statements in order; the value of the last one, or `nothing`.
    pub fn evaluate_all(&self, stmts: &[Stmt], env: &Environment) -> EvalResult {
        let mut last = Value::Nothing;
        for stmt in stmts {
            last = self.evaluate(stmt, env)?;
        }
        Ok(last)
    }

    /// Evaluate an expression. The result may be a deferred value.
    pub fn eval(&self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr, env))
            .map_err(|e| e.with_span(expr.span))
    }

    fn eval_inner(&self, expr: &Expr, env: &Environment) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(lit) => Ok(Value::from_literal(lit)),
            ExprKind::Ident(name) => env.lookup(*name),
            ExprKind::List(items) => {
                let values = items
                    .iter()
                    .map(|item| self.eval(item, env))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::list(values))
            }
            ExprKind::Unary { op, operand } => {
                let value = self.eval_forced(operand, env)?;
                evaluate_unary(value, *op)
            }
            ExprKind::Postfix { op, operand } => {
                let value = self.eval_forced(operand, env)?;
                evaluate_postfix(&value, *op)
            }
            ExprKind::Binary {
                op: BinaryOp::Apply,
                left,
                right,
            } => {
                // The argument stays lazy; the function must be a matchbox.
                let arg = self.eval(left, env)?;
                match self.eval_forced(right, env)? {
                    Value::Closure(closure) => self.apply_closure(&closure, &[arg]),
                    other => Err(not_callable(&other)),
                }
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_forced(left, env)?;
                let right = self.eval_forced(right, env)?;
                evaluate_binary(left, right, *op)
            }
            ExprKind::Call { callee, args } => {
                let callee = self.eval(callee, env)?;
                let args = args
                    .iter()
                    .map(|arg| self.eval(arg, env))
                    .collect::<Result<Vec<_>, _>>()?;
                self.call(callee, &args)
            }
            ExprKind::Assign { pattern, value } => {
                let value = self.eval(value, env)?;
                if self.match_pattern(pattern, value.clone(), env, BindMode::Assign)? {
                    Ok(value)
                } else {
                    Err(match_failed(pattern))
                }
            }
            ExprKind::Block(stmts) => Ok(Value::deferred(Rc::clone(stmts), env.clone())),
            ExprKind::MatchBlock(rows) => Ok(self.make_matchbox(&DispatchNode::build(rows), env)),
        }
    }

    fn eval_forced(&self, expr: &Expr, env: &Environment) -> EvalResult {
        let value = self.eval(expr, env)?;
        self.force(value).map_err(|e| e.with_span(expr.span))
    }

    /// The closure for a freshly evaluated match block, with `self` bound to
    /// it in a frame of its own.
    fn make_matchbox(&self, node: &Rc<DispatchNode>, env: &Environment) -> Value {
        let scope = env.child();
        scope.define(self.self_name, Value::Nothing);
        let closure = Value::closure(Rc::clone(node), scope.clone());
        scope.define(self.self_name, closure.clone());
        closure
    }

    /// Call `callee` with `args`.
    ///
    /// A matchbox dispatches on the arguments. A list is indexed by the
    /// first argument and the element is called with any others.
    pub fn call(&self, callee: Value, args: &[Value]) -> EvalResult {
        let Some((first, rest)) = args.split_first() else {
            return Ok(callee);
        };
        match self.force(callee)? {
            Value::Closure(closure) => self.apply_closure(&closure, args),
            Value::List(items) => {
                let index = self.force(first.clone())?;
                let element = list_element(&items, &index)?;
                if rest.is_empty() {
                    Ok(element)
                } else {
                    self.call(element, rest)
                }
            }
            other => Err(not_callable(&other)),
        }
    }

    /// Evaluate a deferred value, once. Anything else is returned as is.
    ///
    /// A block that fails is left unevaluated, so forcing it again runs it
    /// again.
    pub fn force(&self, value: Value) -> EvalResult {
        let thunk = match value {
            Value::Deferred(thunk) => thunk,
            other => return Ok(other),
        };
        match thunk.begin_force() {
            ForceStart::Cached(value) => Ok(value),
            ForceStart::Cycle => Err(cyclic_force()),
            ForceStart::Run => {
                tracing::trace!(stmts = thunk.stmts().len(), "forcing deferred block");
                let result = self.evaluate_all(thunk.stmts(), &thunk.env().child());
                thunk.finish_force(result.as_ref().ok().cloned());
                result
            }
        }
    }

    /// Force until the value is no longer deferred.
    pub fn force_fully(&self, mut value: Value) -> EvalResult {
        while matches!(value, Value::Deferred(_)) {
            value = self.force(value)?;
        }
        Ok(value)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn list_element(items: &[Value], index: &Value) -> EvalResult {
    let Value::Number(n) = *index else {
        return Err(non_integer_index(index));
    };
    if n.fract() != 0.0 || !n.is_finite() {
        return Err(non_integer_index(index));
    }
    if n < 0.0 || n >= items.len() as f64 {
        return Err(index_out_of_bounds(n, items.len()));
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "n is a non-negative integer below items.len()"
    )]
    let i = n as usize;
    Ok(items[i].clone())
}
