//! Closures and deferred blocks: the two values that capture an environment.

use std::cell::RefCell;
use std::rc::Rc;

use slang_ir::Stmt;

use super::Value;
use crate::dispatch::DispatchNode;
use crate::Environment;

/// A matchbox: a dispatch-tree node plus the environment it was created in.
pub struct ClosureValue {
    node: Rc<DispatchNode>,
    env: Environment,
}

impl ClosureValue {
    pub(super) fn new(node: Rc<DispatchNode>, env: Environment) -> Self {
        ClosureValue { node, env }
    }

    #[inline]
    pub fn node(&self) -> &Rc<DispatchNode> {
        &self.node
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

/// Progress of a deferred block.
enum ForceState {
    Pending,
    /// Being evaluated right now; forcing again is a cycle.
    Forcing,
    Done(Value),
}

/// What a caller of [`DeferredValue::begin_force`] has to do next.
pub(crate) enum ForceStart {
    /// Already forced; here is the cached result.
    Cached(Value),
    /// The caller must run the block and report back with `finish_force`.
    Run,
    /// The block is already running further up the stack.
    Cycle,
}

/// A block evaluated at most once, on first force.
pub struct DeferredValue {
    stmts: Rc<[Stmt]>,
    env: Environment,
    state: RefCell<ForceState>,
}

impl DeferredValue {
    pub(super) fn new(stmts: Rc<[Stmt]>, env: Environment) -> Self {
        DeferredValue {
            stmts,
            env,
            state: RefCell::new(ForceState::Pending),
        }
    }

    #[inline]
    pub fn stmts(&self) -> &[Stmt] {
        &self.stmts
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// The memoized result, if the block has been forced.
    pub fn cached(&self) -> Option<Value> {
        match &*self.state.borrow() {
            ForceState::Done(value) => Some(value.clone()),
            ForceState::Pending | ForceState::Forcing => None,
        }
    }

    pub(crate) fn begin_force(&self) -> ForceStart {
        let mut state = self.state.borrow_mut();
        match &*state {
            ForceState::Done(value) => ForceStart::Cached(value.clone()),
            ForceState::Forcing => ForceStart::Cycle,
            ForceState::Pending => {
                *state = ForceState::Forcing;
                ForceStart::Run
            }
        }
    }

    /// Record the outcome of a force. `None` (the block failed) makes the
    /// block pending again.
    pub(crate) fn finish_force(&self, result: Option<Value>) {
        *self.state.borrow_mut() = match result {
            Some(value) => ForceState::Done(value),
            None => ForceState::Pending,
        };
    }
}
