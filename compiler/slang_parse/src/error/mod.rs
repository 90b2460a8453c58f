//! Parse error types.
//!
//! A `ParseError` carries an error code, message and span, plus the
//! construct being parsed (`ErrorContext`) for "while parsing X" notes.

use std::fmt;

use slang_diagnostic::{Diagnostic, ErrorCode};
use slang_ir::{Span, Token, TokenKind};

/// What was being parsed when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    LetStatement,
    PrintStatement,
    Group,
    ListLiteral,
    Block,
    MatchBlock,
    MatchRow,
    Pattern,
    ListPattern,
    Interpolation,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::LetStatement => "a let statement",
            Self::PrintStatement => "a print statement",
            Self::Group => "a parenthesized expression",
            Self::ListLiteral => "a list literal",
            Self::Block => "a block",
            Self::MatchBlock => "a match block",
            Self::MatchRow => "a match row",
            Self::Pattern => "a pattern",
            Self::ListPattern => "a list pattern",
            Self::Interpolation => "a string interpolation",
        }
    }
}

/// Parse error with error code for rich diagnostics.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// Innermost construct being parsed.
    pub context: Option<ErrorContext>,
    /// Where an unclosed delimiter was opened.
    pub opened_at: Option<Span>,
    /// The input ended before the construct did; more input could fix it.
    pub incomplete: bool,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
            opened_at: None,
            incomplete: false,
        }
    }

    /// Error for finding `found` where `expected` was required.
    ///
    /// Lexer error tokens are reported with their own lexer codes.
    #[cold]
    pub fn unexpected(found: &Token, expected: &str) -> Self {
        match found.kind {
            TokenKind::UnterminatedString => {
                let mut err = ParseError::new(
                    ErrorCode::E0001,
                    "unterminated string literal",
                    found.span,
                );
                err.incomplete = true;
                err
            }
            TokenKind::Error => {
                ParseError::new(ErrorCode::E0002, "invalid character", found.span)
            }
            TokenKind::Eof => {
                let mut err = ParseError::new(
                    ErrorCode::E1001,
                    format!("expected {expected}, found end of input"),
                    found.span,
                );
                err.incomplete = true;
                err
            }
            kind => ParseError::new(
                ErrorCode::E1001,
                format!("expected {expected}, found {}", kind.display_name()),
                found.span,
            ),
        }
    }

    /// Error for a token that cannot start an expression.
    #[cold]
    pub fn expected_expression(found: &Token) -> Self {
        let mut err = ParseError::unexpected(found, "expression");
        if err.code == ErrorCode::E1001 {
            err.code = ErrorCode::E1002;
        }
        err
    }

    /// Error for a delimiter opened at `open` that the input never closes.
    #[cold]
    pub fn unclosed(open: Span, delimiter: &str, eof: Span) -> Self {
        let mut err = ParseError::new(
            ErrorCode::E1003,
            format!("unclosed delimiter `{delimiter}`"),
            eof,
        );
        err.opened_at = Some(open);
        err.incomplete = true;
        err
    }

    /// Record the construct being parsed unless a more specific one is set.
    #[must_use]
    pub fn in_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = if self.incomplete {
            "input ends here"
        } else {
            "unexpected here"
        };
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, label);
        if let Some(open) = self.opened_at {
            diag = diag.with_secondary_label(open, "opened here");
        }
        if let Some(context) = self.context {
            diag = diag.with_note(format!("while parsing {}", context.description()));
        }
        diag
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ParseError {}
