//! Statements: `let`, `print` and expression statements.

use slang_ir::{Span, Stmt, StmtKind, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::Let => {
                self.cursor.advance();
                self.parse_let_rest(start)
                    .map_err(|e| e.in_context(ErrorContext::LetStatement))
            }
            TokenKind::Print => {
                self.cursor.advance();
                let expr = self
                    .parse_expr()
                    .map_err(|e| e.in_context(ErrorContext::PrintStatement))?;
                let span = start.merge(expr.span);
                Ok(Stmt::new(StmtKind::Print(expr), span))
            }
            _ => {
                let expr = self.parse_expr()?;
                let span = expr.span;
                Ok(Stmt::new(StmtKind::Expr(expr), span))
            }
        }
    }

    fn parse_let_rest(&mut self, start: Span) -> Result<Stmt, ParseError> {
        let pattern = self.parse_pattern()?;
        self.cursor.expect(TokenKind::Eq)?;
        let init = self.parse_expr()?;
        let span = start.merge(init.span);
        Ok(Stmt::new(StmtKind::Let { pattern, init }, span))
    }

    /// After a statement: a separator, end of input, or `closer`.
    pub(crate) fn expect_stmt_end(&mut self, closer: Option<TokenKind>) -> Result<(), ParseError> {
        let kind = self.cursor.current_kind();
        let ok = matches!(
            kind,
            TokenKind::Newline | TokenKind::Semicolon | TokenKind::Eof
        ) || Some(kind) == closer;
        if ok {
            Ok(())
        } else {
            let expected = if closer.is_some() {
                "newline, `;` or `}`"
            } else {
                "newline or `;`"
            };
            Err(ParseError::unexpected(&self.cursor.current(), expected))
        }
    }
}
