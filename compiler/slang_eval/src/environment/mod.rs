//! Lexical environments.
//!
//! An environment is one mutable binding frame chained to a shared parent.
//! Closures and deferred blocks capture the environment they were created
//! in by reference, so frames live as long as anything can still see them.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use slang_ir::Name;

use crate::errors::{unbound_name, undeclared_assignment, EvalError, EvalResult};
use crate::Value;

/// A single-threaded, shared, mutable cell.
///
/// All frame allocations go through [`LocalScope::new`]. The interpreter is
/// single-threaded, so this is `Rc<RefCell<T>>` and never `Arc`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles share one allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One binding frame.
#[derive(Default)]
pub struct Scope {
    /// `FxHashMap` for faster hashing with `Name` keys.
    bindings: FxHashMap<Name, Value>,
    parent: Option<Environment>,
}

/// Handle to a frame and, through it, all enclosing frames.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A fresh root environment.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::default()))
    }

    /// A new empty frame whose parent is `self`.
    pub fn child(&self) -> Self {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            parent: Some(self.clone()),
        }))
    }

    /// Bind `name` in this frame, shadowing any outer binding.
    #[inline]
    pub fn define(&self, name: Name, value: Value) {
        self.0.borrow_mut().bindings.insert(name, value);
    }

    /// Find `name` in this frame or the nearest enclosing one.
    pub fn lookup(&self, name: Name) -> EvalResult {
        let mut frame = self.clone();
        loop {
            let parent = {
                let scope = frame.0.borrow();
                if let Some(value) = scope.bindings.get(&name) {
                    return Ok(value.clone());
                }
                scope.parent.clone()
            };
            match parent {
                Some(parent) => frame = parent,
                None => return Err(unbound_name(name)),
            }
        }
    }

    /// Whether any frame from here outward binds `name`.
    pub fn is_declared(&self, name: Name) -> bool {
        self.lookup(name).is_ok()
    }

    /// Rebind `name` in the frame that declares it. Never creates a binding.
    pub fn assign(&self, name: Name, value: Value) -> Result<(), EvalError> {
        let mut frame = self.clone();
        loop {
            let parent = {
                let mut scope = frame.0.borrow_mut();
                if let Some(slot) = scope.bindings.get_mut(&name) {
                    *slot = value;
                    return Ok(());
                }
                scope.parent.clone()
            };
            match parent {
                Some(parent) => frame = parent,
                None => return Err(undeclared_assignment(name)),
            }
        }
    }

    /// Whether both handles are the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }

    /// Whether this frame (not its parents) has no bindings.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().bindings.is_empty()
    }

    /// Names bound in this frame, sorted by text.
    pub fn names(&self) -> Vec<Name> {
        let mut names: Vec<Name> = self.0.borrow().bindings.keys().copied().collect();
        names.sort_by_key(|name| name.as_str());
        names
    }

    /// Number of frames from here to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut parent = self.0.borrow().parent.clone();
        while let Some(frame) = parent {
            depth += 1;
            parent = frame.0.borrow().parent.clone();
        }
        depth
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Values in a frame can point back at the frame (`self`), so Debug only
// shows names.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.names())
            .field("depth", &self.depth())
            .finish()
    }
}
