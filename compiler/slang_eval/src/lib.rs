//! Slang Eval - pattern-dispatch interpreter for Slang.
//!
//! # Architecture
//!
//! - `Value`: runtime values; heap payloads behind `Heap`
//! - `Environment`: chained binding frames shared by closures
//! - `Interpreter::match_pattern`: destructuring with all-or-nothing binding
//! - `DispatchNode`: the trie a match block compiles to; applying it
//!   consumes arguments one at a time, which is what makes matchboxes curry
//! - `evaluate_binary` / `evaluate_unary`: operators on forced values
//!
//! Values are single-threaded (`Rc`); only the print handler is `Arc`, so a
//! buffer can be shared with a test harness.

mod dispatch;
mod environment;
pub mod errors;
mod interpreter;
mod matcher;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use dispatch::{DispatchNode, Edge, EdgeKey};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use matcher::BindMode;
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use unary_operators::{evaluate_postfix, evaluate_unary};
pub use value::{ClosureValue, DeferredValue, Heap, Value};

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
