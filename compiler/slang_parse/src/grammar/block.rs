//! Brace forms: statement blocks `{ a; b }` and match blocks
//! `{ p q -> body, ... }`.

use std::rc::Rc;

use slang_diagnostic::ErrorCode;
use slang_ir::{Expr, ExprKind, MatchRow, Span, Stmt, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse `{ ... }`, deciding between a statement block and a match block.
    pub(crate) fn parse_brace(&mut self) -> Result<Expr, ParseError> {
        let open = self.cursor.expect(TokenKind::LBrace)?;
        let start = self.cursor.position();

        let block_err = match self.parse_block_body(open) {
            Ok((stmts, close)) => {
                return Ok(Expr::new(
                    ExprKind::Block(Rc::from(stmts)),
                    open.merge(close),
                ));
            }
            Err(err) => err.in_context(ErrorContext::Block),
        };

        self.cursor.set_position(start);
        match self.parse_match_rows(open) {
            Ok((rows, close)) => {
                tracing::trace!(rows = rows.len(), "parsed match block");
                Ok(Expr::new(
                    ExprKind::MatchBlock(Rc::from(rows)),
                    open.merge(close),
                ))
            }
            Err(match_err) => {
                let match_err = match_err.in_context(ErrorContext::MatchBlock);
                // Report whichever reading got further into the input.
                if match_err.span.start > block_err.span.start {
                    Err(match_err)
                } else {
                    Err(block_err)
                }
            }
        }
    }

    fn parse_block_body(&mut self, open: Span) -> Result<(Vec<Stmt>, Span), ParseError> {
        let mut stmts = Vec::new();
        loop {
            self.cursor.skip_separators();
            if self.cursor.check(TokenKind::RBrace) {
                let close = self.cursor.advance().span;
                return Ok((stmts, close));
            }
            if self.cursor.is_at_end() {
                return Err(ParseError::unclosed(
                    open,
                    "{",
                    self.cursor.current_span(),
                ));
            }
            stmts.push(self.parse_stmt()?);
            self.expect_stmt_end(Some(TokenKind::RBrace))?;
        }
    }

    /// Rows separated by newlines or commas. Rows come back ordered
    /// shortest-arity first, keeping declaration order among equals.
    fn parse_match_rows(&mut self, open: Span) -> Result<(Vec<MatchRow>, Span), ParseError> {
        let mut rows = Vec::new();
        let close = loop {
            while matches!(
                self.cursor.current_kind(),
                TokenKind::Newline | TokenKind::Comma
            ) {
                self.cursor.advance();
            }
            if self.cursor.check(TokenKind::RBrace) {
                break self.cursor.advance().span;
            }
            if self.cursor.is_at_end() {
                return Err(ParseError::unclosed(
                    open,
                    "{",
                    self.cursor.current_span(),
                ));
            }
            rows.push(
                self.parse_match_row()
                    .map_err(|e| e.in_context(ErrorContext::MatchRow))?,
            );
            if !matches!(
                self.cursor.current_kind(),
                TokenKind::Newline | TokenKind::Comma | TokenKind::RBrace | TokenKind::Eof
            ) {
                return Err(ParseError::unexpected(
                    &self.cursor.current(),
                    "newline, `,` or `}`",
                ));
            }
        };

        if rows.is_empty() {
            return Err(ParseError::new(
                ErrorCode::E1002,
                "a match block needs at least one row",
                open.merge(close),
            ));
        }
        rows.sort_by_key(MatchRow::arity);
        Ok((rows, close))
    }

    fn parse_match_row(&mut self) -> Result<MatchRow, ParseError> {
        let start = self.cursor.current_span();
        let mut patterns = vec![self.parse_pattern()?];
        while !self.cursor.check(TokenKind::Arrow) {
            if self.cursor.is_at_end() {
                return Err(ParseError::unexpected(&self.cursor.current(), "`->`"));
            }
            patterns.push(self.parse_pattern()?);
        }
        self.cursor.advance();
        let body = self.parse_expr()?;
        let span = start.merge(body.span);
        Ok(MatchRow {
            patterns,
            body: Rc::new(body),
            span,
        })
    }
}
