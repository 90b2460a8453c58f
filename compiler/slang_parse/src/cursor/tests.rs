use slang_ir::{Name, TokenKind};

use super::*;

#[test]
fn test_advance_stops_at_eof() {
    let tokens = slang_lexer::lex("a");
    let mut cursor = Cursor::new(&tokens);
    assert_eq!(cursor.advance().kind, TokenKind::Ident(Name::intern("a")));
    assert!(cursor.is_at_end());
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());
}

#[test]
fn test_snapshot_and_restore() {
    let tokens = slang_lexer::lex("x = 1");
    let mut cursor = Cursor::new(&tokens);
    let start = cursor.position();
    cursor.advance();
    assert!(cursor.check(TokenKind::Eq));
    assert_eq!(cursor.peek_next_kind(), TokenKind::number(1.0));
    cursor.set_position(start);
    assert_eq!(cursor.current_kind(), TokenKind::Ident(Name::intern("x")));
}

#[test]
fn test_expect_reports_found_token() {
    let tokens = slang_lexer::lex("]");
    let mut cursor = Cursor::new(&tokens);
    let Err(err) = cursor.expect(TokenKind::RParen) else {
        panic!("expected an error");
    };
    assert_eq!(err.message, "expected `)`, found `]`");
}

#[test]
fn test_skip_separators() {
    let tokens = slang_lexer::lex("\n;\n b");
    let mut cursor = Cursor::new(&tokens);
    cursor.skip_separators();
    assert_eq!(cursor.current_kind(), TokenKind::Ident(Name::intern("b")));
    assert_eq!(cursor.previous_span(), Span::new(2, 3));
}
