use pretty_assertions::assert_eq;
use slang_ir::Span;

use super::*;
use crate::ErrorCode;

fn render(emitter: TerminalEmitter<Vec<u8>>, diag: &Diagnostic) -> String {
    let mut emitter = emitter;
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E6001)
        .with_message("unbound name `y`")
        .with_label(Span::new(16, 17), "not found in this scope")
        .with_note("bind it with `let` first")
}

#[test]
fn test_without_source_shows_span() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let text = render(emitter, &sample_diagnostic());
    assert_eq!(
        text,
        "error[E6001]: unbound name `y`\n  --> 16..17: not found in this scope\n  = note: bind it with `let` first\n"
    );
}

#[test]
fn test_with_source_shows_snippet() {
    let source = "let x = 1\nprint y\n";
    let emitter =
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false).with_source(source);
    let text = render(emitter, &sample_diagnostic());
    assert_eq!(
        text,
        "error[E6001]: unbound name `y`\n \
         --> 2:7\n  |\n\
         2 | print y\n  \
         |       ^ not found in this scope\n  \
         = note: bind it with `let` first\n"
    );
}

#[test]
fn test_colors_emit_ansi() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    let text = render(emitter, &sample_diagnostic());
    assert!(text.contains("\x1b["));
    assert!(text.contains("E6001"));
}

#[test]
fn test_color_mode_parse() {
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("sometimes"), None);
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
}
