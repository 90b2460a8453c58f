//! `InterpreterBuilder` for creating Interpreter instances.

use slang_ir::Name;

use super::Interpreter;
use crate::{stdout_handler, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Output goes to stdout unless a handler is supplied:
/// - `stdout_handler()` for `slang run` and the REPL
/// - `buffer_handler()` for tests and embedding
#[derive(Default)]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            self_name: Name::intern("self"),
        }
    }
}
