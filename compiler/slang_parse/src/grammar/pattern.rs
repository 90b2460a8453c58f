//! Patterns for `let`, assignment and match rows.

use slang_diagnostic::ErrorCode;
use slang_ir::{Literal, Name, Pattern, Span, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Whether the current token can begin a pattern.
    pub(crate) fn starts_pattern(&self) -> bool {
        match self.cursor.current_kind() {
            TokenKind::Ident(_)
            | TokenKind::Number(_)
            | TokenKind::Str(_)
            | TokenKind::Atom(_)
            | TokenKind::Nothing
            | TokenKind::True
            | TokenKind::False
            | TokenKind::LBracket
            | TokenKind::LBrace => true,
            TokenKind::Minus => matches!(self.cursor.peek_next_kind(), TokenKind::Number(_)),
            _ => false,
        }
    }

    /// Parse one pattern. A spread is rejected here; it is only valid as the
    /// last element of a list pattern.
    pub(crate) fn parse_pattern(&mut self) -> Result<Pattern, ParseError> {
        let token = self.cursor.current();
        if let (TokenKind::Ident(_), TokenKind::DotDot) =
            (token.kind, self.cursor.peek_next_kind())
        {
            return Err(misplaced_spread(token.span));
        }

        let pattern = match token.kind {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                name_pattern(name)
            }
            TokenKind::Number(_) => {
                self.cursor.advance();
                Pattern::Literal(Literal::Number(token.kind.as_number().unwrap_or(f64::NAN)))
            }
            TokenKind::Minus => {
                self.cursor.advance();
                let number = self.cursor.current();
                let Some(n) = number.kind.as_number() else {
                    return Err(ParseError::unexpected(&number, "number after `-`")
                        .in_context(ErrorContext::Pattern));
                };
                self.cursor.advance();
                Pattern::Literal(Literal::Number(-n))
            }
            TokenKind::Str(text) => {
                self.cursor.advance();
                Pattern::Literal(Literal::Text(text))
            }
            TokenKind::Atom(name) => {
                self.cursor.advance();
                Pattern::Literal(Literal::Atom(name))
            }
            TokenKind::Nothing => {
                self.cursor.advance();
                Pattern::Literal(Literal::Nothing)
            }
            TokenKind::True => {
                self.cursor.advance();
                Pattern::Literal(Literal::Atom(Name::intern("true")))
            }
            TokenKind::False => {
                self.cursor.advance();
                Pattern::Literal(Literal::Atom(Name::intern("false")))
            }
            TokenKind::LBracket => {
                self.cursor.advance();
                self.parse_seq_pattern(token.span)
                    .map_err(|e| e.in_context(ErrorContext::ListPattern))?
            }
            TokenKind::LBrace => {
                self.cursor.advance();
                self.parse_strict_pattern(token.span)
                    .map_err(|e| e.in_context(ErrorContext::Pattern))?
            }
            TokenKind::InterpStart(_) => {
                return Err(ParseError::new(
                    ErrorCode::E1004,
                    "interpolated strings cannot be used as patterns",
                    token.span,
                ));
            }
            _ => {
                let mut err = ParseError::unexpected(&token, "pattern");
                if err.code == ErrorCode::E1001 {
                    err.code = ErrorCode::E1004;
                }
                return Err(err.in_context(ErrorContext::Pattern));
            }
        };
        Ok(pattern)
    }

    /// `[p, q, rest..]` after the `[`.
    fn parse_seq_pattern(&mut self, open: Span) -> Result<Pattern, ParseError> {
        let mut items = Vec::new();
        self.cursor.skip_newlines();
        while !self.cursor.check(TokenKind::RBracket) {
            if let (TokenKind::Ident(name), TokenKind::DotDot) =
                (self.cursor.current_kind(), self.cursor.peek_next_kind())
            {
                let span = self.cursor.advance().span;
                self.cursor.advance();
                items.push(Pattern::Spread(name));
                self.cursor.skip_newlines();
                self.cursor.eat(TokenKind::Comma);
                self.cursor.skip_newlines();
                if !self.cursor.check(TokenKind::RBracket) && !self.cursor.is_at_end() {
                    return Err(misplaced_spread(span));
                }
                break;
            }

            items.push(self.parse_pattern()?);
            self.cursor.skip_newlines();
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
            self.cursor.skip_newlines();
        }
        self.expect_closing(TokenKind::RBracket, open, "[")?;
        Ok(Pattern::Seq(items))
    }

    /// `{x}`, `{_}` or `{{x}}` after the first `{`.
    fn parse_strict_pattern(&mut self, open: Span) -> Result<Pattern, ParseError> {
        let forces_fully = self.cursor.eat(TokenKind::LBrace);
        let token = self.cursor.current();
        let TokenKind::Ident(name) = token.kind else {
            return Err(ParseError::new(
                ErrorCode::E1004,
                "only a name or `_` can be marked strict",
                token.span,
            ));
        };
        self.cursor.advance();
        if forces_fully {
            self.expect_closing(TokenKind::RBrace, open, "{")?;
        }
        self.expect_closing(TokenKind::RBrace, open, "{")?;
        Ok(Pattern::Strict {
            inner: Box::new(name_pattern(name)),
            forces_fully,
        })
    }
}

fn name_pattern(name: Name) -> Pattern {
    if name.as_str() == "_" {
        Pattern::Ignore
    } else {
        Pattern::Id(name)
    }
}

fn misplaced_spread(span: Span) -> ParseError {
    ParseError::new(
        ErrorCode::E1005,
        "a spread pattern can only be the last element of a list pattern",
        span,
    )
}
