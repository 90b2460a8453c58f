//! The logos-derived tokenizer output, before interning and string cooking.

use logos::Logos;

use crate::string::scan_string_tail;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[regex(r"--[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    #[token("let")]
    Let,
    #[token("print")]
    Print,
    #[token("nothing")]
    Nothing,
    #[token("true")]
    True,
    #[token("false")]
    False,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("@")]
    At,
    #[token("->")]
    Arrow,
    #[token("..")]
    DotDot,

    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("!")]
    Bang,

    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    /// The callback consumes the whole literal, interpolations included.
    #[token("\"", |lex| {
        let consumed = scan_string_tail(lex.remainder());
        match consumed {
            Some(len) => {
                lex.bump(len);
                true
            }
            None => {
                lex.bump(lex.remainder().len());
                false
            }
        }
    })]
    Str,

    #[regex(r":[a-zA-Z0-9_!?]+")]
    Atom,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
