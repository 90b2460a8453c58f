//! Command handlers for the `slang` binary.
//!
//! Each submodule implements one command. Shared helpers (reading files,
//! rendering diagnostics) live here in the module root.

mod debug;
mod repl;
mod run;

use std::io::Write;

use slang_diagnostic::{ColorMode, Diagnostic, DiagnosticEmitter, TerminalEmitter};

pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use repl::{run_repl, Repl};
pub use run::run_file;

/// Read a source file, describing the failure for the user.
pub fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Render `diagnostic` against `source` into `writer`.
pub(crate) fn report<W: Write>(
    writer: W,
    diagnostic: &Diagnostic,
    source: &str,
    color: ColorMode,
    is_tty: bool,
) {
    let mut emitter = TerminalEmitter::with_color_mode(writer, color, is_tty).with_source(source);
    emitter.emit(diagnostic);
    emitter.flush();
}

fn stderr_is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}
