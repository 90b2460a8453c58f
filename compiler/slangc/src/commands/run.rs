//! The `run` command: evaluate a Slang source file.

use slang_diagnostic::ColorMode;

use super::{read_file, report, stderr_is_tty};
use crate::Session;

/// Run a source file. Returns the process exit code: 0 on success, 1 on a
/// read, parse or runtime error.
pub fn run_file(path: &str, color: ColorMode) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            return 1;
        }
    };

    let mut session = Session::new();
    let _span = tracing::debug_span!("run", path).entered();
    match session.eval_source(&source) {
        Ok(_) => 0,
        Err(e) => {
            report(
                std::io::stderr(),
                &e.to_diagnostic(),
                session.history(),
                color,
                stderr_is_tty(),
            );
            1
        }
    }
}
