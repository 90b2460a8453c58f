//! Token types for the Slang lexer.

use std::fmt;

use crate::{Name, Span};

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds for Slang.
///
/// Number literals store their `f64` bits so the enum stays `Eq + Hash`.
/// Text-carrying tokens hold cooked (unescaped) contents as interned names.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Number literal: `42`, `3.5`
    Number(u64),
    /// Plain string literal without interpolation.
    Str(Name),
    /// Text before the first `\(` of an interpolated string.
    InterpStart(Name),
    /// Text between a closing `)` and the next `\(`.
    InterpMid(Name),
    /// Text after the last `)` up to the closing quote.
    InterpEnd(Name),
    /// Atom literal `:name`; stores the name without the colon.
    Atom(Name),
    Ident(Name),

    // Keywords
    Let,
    Print,
    Nothing,
    True,
    False,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,

    // Operators
    At,
    Arrow,
    DotDot,
    Plus,
    Minus,
    Star,
    Slash,
    Eq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Bang,

    Newline,
    /// Unterminated string literal.
    UnterminatedString,
    /// Any character the lexer does not recognize.
    Error,
    Eof,
}

impl TokenKind {
    /// Build a number token from its value.
    #[inline]
    pub fn number(value: f64) -> Self {
        TokenKind::Number(value.to_bits())
    }

    /// The value of a number token.
    #[inline]
    pub fn as_number(self) -> Option<f64> {
        match self {
            TokenKind::Number(bits) => Some(f64::from_bits(bits)),
            _ => None,
        }
    }

    /// Whether this token can begin a primary expression, and therefore an
    /// argument in a juxtaposition call.
    pub fn starts_primary(self) -> bool {
        matches!(
            self,
            TokenKind::Number(_)
                | TokenKind::Str(_)
                | TokenKind::InterpStart(_)
                | TokenKind::Atom(_)
                | TokenKind::Ident(_)
                | TokenKind::Nothing
                | TokenKind::True
                | TokenKind::False
                | TokenKind::LParen
                | TokenKind::LBrace
                | TokenKind::LBracket
        )
    }

    /// Human-readable description used in parse errors.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Number(_) => "number",
            TokenKind::Str(_) => "string",
            TokenKind::InterpStart(_) | TokenKind::InterpMid(_) | TokenKind::InterpEnd(_) => {
                "interpolated string"
            }
            TokenKind::Atom(_) => "atom",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Let => "`let`",
            TokenKind::Print => "`print`",
            TokenKind::Nothing => "`nothing`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::At => "`@`",
            TokenKind::Arrow => "`->`",
            TokenKind::DotDot => "`..`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Eq => "`=`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Lt => "`<`",
            TokenKind::LtEq => "`<=`",
            TokenKind::Gt => "`>`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Bang => "`!`",
            TokenKind::Newline => "newline",
            TokenKind::UnterminatedString => "unterminated string",
            TokenKind::Error => "invalid character",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(bits) => write!(f, "Number({})", f64::from_bits(*bits)),
            TokenKind::Str(text) => write!(f, "Str({:?})", text.as_str()),
            TokenKind::InterpStart(text) => write!(f, "InterpStart({:?})", text.as_str()),
            TokenKind::InterpMid(text) => write!(f, "InterpMid({:?})", text.as_str()),
            TokenKind::InterpEnd(text) => write!(f, "InterpEnd({:?})", text.as_str()),
            TokenKind::Atom(name) => write!(f, "Atom({name})"),
            TokenKind::Ident(name) => write!(f, "Ident({name})"),
            other => f.write_str(other.display_name().trim_matches('`')),
        }
    }
}

/// Lexer output: tokens in source order, always terminated by `Eof`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Token kinds only, handy for tests and the `lex` command.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
