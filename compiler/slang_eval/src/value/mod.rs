//! Runtime values for the Slang interpreter.
//!
//! Heap-backed variants hold a [`Heap`], whose constructor is private to this
//! module, so values are built through the factory methods on `Value`:
//!
//! ```text
//! let t = Value::text("hi");               // OK
//! let l = Value::list(vec![]);             // OK
//! let t = Value::Text(Heap::new(...));     // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Equality
//!
//! Numbers, texts, atoms and lists compare by value (lists elementwise).
//! Closures and deferred blocks are equal only to themselves.

mod composite;
mod heap;

use std::fmt;
use std::rc::Rc;

use slang_ir::ast::{format_number, write_quoted};
use slang_ir::{Literal, Name, Stmt};

use crate::dispatch::DispatchNode;
use crate::Environment;

pub use composite::{ClosureValue, DeferredValue};
pub(crate) use composite::ForceStart;
pub use heap::Heap;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    /// The unit value.
    Nothing,
    Number(f64),
    Text(Heap<str>),
    /// Interned symbol; identity is the interned name.
    Atom(Name),
    /// Immutable list.
    List(Heap<[Value]>),
    /// Pattern-dispatched callable.
    Closure(Heap<ClosureValue>),
    /// Block evaluated lazily, at most once.
    Deferred(Heap<DeferredValue>),
}

impl Value {
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    pub fn text(s: &str) -> Self {
        Value::Text(Heap::from_rc(Rc::from(s)))
    }

    pub fn atom(name: &str) -> Self {
        Value::Atom(Name::intern(name))
    }

    /// `:true` or `:false`.
    pub fn boolean(b: bool) -> Self {
        Value::atom(if b { "true" } else { "false" })
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::from_rc(Rc::from(items)))
    }

    pub fn closure(node: Rc<DispatchNode>, env: Environment) -> Self {
        Value::Closure(Heap::new(ClosureValue::new(node, env)))
    }

    pub fn deferred(stmts: Rc<[Stmt]>, env: Environment) -> Self {
        Value::Deferred(Heap::new(DeferredValue::new(stmts, env)))
    }

    /// The value a literal denotes.
    pub fn from_literal(lit: &Literal) -> Self {
        match lit {
            Literal::Nothing => Value::Nothing,
            Literal::Number(n) => Value::Number(*n),
            Literal::Text(text) => Value::text(text.as_str()),
            Literal::Atom(name) => Value::Atom(*name),
        }
    }

    /// Name of this value's kind, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nothing => "nothing",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Atom(_) => "atom",
            Value::List(_) => "list",
            Value::Closure(_) => "matchbox",
            Value::Deferred(_) => "deferred block",
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// `Some(true)` for `:true`, `Some(false)` for `:false`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Atom(name) => match name.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Text as printed by `print` and concatenated by `+`: texts raw,
    /// everything else in its rendered form.
    pub fn display_string(&self) -> String {
        match self {
            Value::Text(text) => text.to_string(),
            other => other.to_string(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nothing, Value::Nothing) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => **a == **b,
            (Value::Atom(a), Value::Atom(b)) => a == b,
            (Value::List(a), Value::List(b)) => **a == **b,
            (Value::Closure(a), Value::Closure(b)) => Heap::ptr_eq(a, b),
            (Value::Deferred(a), Value::Deferred(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// The rendering contract: what the REPL echoes for a result.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nothing => f.write_str("nothing"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Text(text) => write_quoted(f, text),
            Value::Atom(name) => write!(f, ":{name}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Closure(_) => f.write_str("<matchbox>"),
            Value::Deferred(_) => f.write_str("{ ... }"),
        }
    }
}

// Closures can reach themselves through `self`, so Debug never looks inside
// an environment.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Deferred(thunk) => match thunk.cached() {
                Some(value) => write!(f, "Deferred({value:?})"),
                None => f.write_str("Deferred(<pending>)"),
            },
            other => write!(f, "{other}"),
        }
    }
}
