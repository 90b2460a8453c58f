//! Diagnostics for the Slang interpreter.
//!
//! Every phase reports problems as a [`Diagnostic`] tagged with an
//! [`ErrorCode`]; the REPL and CLI render them with a [`TerminalEmitter`].

mod diagnostic;
mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
