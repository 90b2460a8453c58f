use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_builder_collects_parts() {
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_message("unbound name `x`")
        .with_secondary_label(Span::new(0, 3), "in this call")
        .with_label(Span::new(4, 5), "not found in this scope")
        .with_note("names must be bound with `let` before use");

    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.primary_span(), Some(Span::new(4, 5)));
    assert_eq!(diag.to_string(), "error[E6001]: unbound name `x`");
}
