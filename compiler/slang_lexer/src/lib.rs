//! Lexer for Slang using logos with string interning.
//!
//! Lexing never fails: unrecognized input becomes `TokenKind::Error` (or
//! `TokenKind::UnterminatedString`) and the parser reports it. The output
//! always ends with `TokenKind::Eof`.
//!
//! Interpolated strings are flattened into the token stream:
//! `"a\(x)b"` lexes as `InterpStart("a") Ident(x) InterpEnd("b")`, with the
//! tokens of each interpolation lexed recursively in between.

mod raw_token;
mod string;

use logos::Logos;
use slang_ir::{Name, Span, Token, TokenKind, TokenList};

use crate::raw_token::RawToken;
use crate::string::split_literal;

/// Lex source code into a `TokenList`.
pub fn lex(source: &str) -> TokenList {
    lex_at(source, 0)
}

/// Lex `source` as if it started at byte `base` of a larger text.
///
/// The REPL appends every input to one session buffer, so spans from
/// different inputs never collide.
pub fn lex_at(source: &str, base: u32) -> TokenList {
    let mut result = TokenList::new();
    lex_into(&mut result, source, base, false);

    let len = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::new(TokenKind::Eof, Span::point(base.saturating_add(len))));

    tracing::trace!(tokens = result.len(), "lexed source");
    result
}

/// Lex `source`, whose first byte sits at `base` in the outer text.
/// Newlines inside interpolations are not significant and are dropped.
fn lex_into(result: &mut TokenList, source: &str, base: u32, in_interpolation: bool) {
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span()).offset(base);
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::LineComment) => {}
            Ok(RawToken::Newline) => {
                if !in_interpolation {
                    result.push(Token::new(TokenKind::Newline, span));
                }
            }
            Ok(RawToken::Str) => push_string(result, slice, span.start),
            Ok(raw) => result.push(Token::new(convert_token(raw, slice), span)),
            Err(()) => {
                let kind = if slice.starts_with('"') {
                    TokenKind::UnterminatedString
                } else {
                    TokenKind::Error
                };
                result.push(Token::new(kind, span));
            }
        }
    }
}

/// Emit a scanned string literal starting at `start`.
fn push_string(result: &mut TokenList, literal: &str, start: u32) {
    let split = split_literal(literal);
    let span_of = |range: &std::ops::Range<usize>| Span::from_range(range.clone()).offset(start);

    if split.is_plain() {
        for (text, range) in split.texts {
            result.push(Token::new(
                TokenKind::Str(Name::intern_owned(text)),
                span_of(&range),
            ));
        }
        return;
    }

    let last = split.texts.len() - 1;
    let mut codes = split.codes.into_iter();
    for (i, (text, range)) in split.texts.into_iter().enumerate() {
        let name = Name::intern_owned(text);
        let kind = match i {
            0 => TokenKind::InterpStart(name),
            i if i == last => TokenKind::InterpEnd(name),
            _ => TokenKind::InterpMid(name),
        };
        result.push(Token::new(kind, span_of(&range)));

        if let Some((code, offset)) = codes.next() {
            let base = start.saturating_add(u32::try_from(offset).unwrap_or(u32::MAX));
            lex_into(result, code, base, true);
        }
    }
}

/// Convert a raw token to a `TokenKind`, interning names.
fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Number(n) => TokenKind::number(n),
        RawToken::Atom => TokenKind::Atom(Name::intern(&slice[1..])),
        RawToken::Ident => TokenKind::Ident(Name::intern(slice)),

        RawToken::Let => TokenKind::Let,
        RawToken::Print => TokenKind::Print,
        RawToken::Nothing => TokenKind::Nothing,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::At => TokenKind::At,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::DotDot => TokenKind::DotDot,

        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Bang => TokenKind::Bang,

        // Handled by the caller.
        RawToken::LineComment | RawToken::Newline | RawToken::Str => TokenKind::Error,
    }
}
