use super::*;

#[test]
fn test_number_bits_round_trip() {
    let kind = TokenKind::number(3.25);
    assert_eq!(kind.as_number(), Some(3.25));
    assert_eq!(TokenKind::Comma.as_number(), None);
}

#[test]
fn test_starts_primary() {
    assert!(TokenKind::LBrace.starts_primary());
    assert!(TokenKind::Ident(Name::intern("x")).starts_primary());
    assert!(!TokenKind::Minus.starts_primary());
    assert!(!TokenKind::Newline.starts_primary());
}

#[test]
fn test_debug_format() {
    let token = Token::new(TokenKind::Atom(Name::intern("ok")), Span::new(0, 3));
    assert_eq!(format!("{token:?}"), "Atom(ok) @ 0..3");
    assert_eq!(format!("{:?}", TokenKind::Arrow), "->");
}

#[test]
fn test_token_list_kinds() {
    let mut list = TokenList::new();
    assert!(list.is_empty());
    list.push(Token::new(TokenKind::number(1.0), Span::new(0, 1)));
    list.push(Token::new(TokenKind::Eof, Span::point(1)));
    assert_eq!(list.len(), 2);
    assert_eq!(list.kinds(), vec![TokenKind::number(1.0), TokenKind::Eof]);
}
