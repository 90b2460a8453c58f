//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::fmt::Write;

use slang_diagnostic::ColorMode;
use slang_ir::printer::print_program;
use slang_parse::ParseError;

use super::{read_file, report, stderr_is_tty};

/// One line per token: kind and byte span.
pub fn lex_source(source: &str) -> String {
    let tokens = slang_lexer::lex(source);
    let mut out = String::new();
    for tok in tokens.iter() {
        let _ = writeln!(out, "{:?} @ {}", tok.kind, tok.span);
    }
    out
}

/// The program as S-expressions, one statement per line.
pub fn parse_source(source: &str) -> Result<String, ParseError> {
    slang_parse::parse(&slang_lexer::lex(source)).map(|stmts| print_program(&stmts))
}

/// Lex a file and print its tokens. Returns the process exit code.
pub fn lex_file(path: &str) -> i32 {
    match read_file(path) {
        Ok(source) => {
            print!("{}", lex_source(&source));
            0
        }
        Err(msg) => {
            eprintln!("{msg}");
            1
        }
    }
}

/// Parse a file and print its AST. Returns the process exit code.
pub fn parse_file(path: &str, color: ColorMode) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            return 1;
        }
    };
    match parse_source(&source) {
        Ok(dump) => {
            print!("{dump}");
            0
        }
        Err(e) => {
            report(
                std::io::stderr(),
                &e.to_diagnostic(),
                &source,
                color,
                stderr_is_tty(),
            );
            1
        }
    }
}
