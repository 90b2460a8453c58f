//! Expressions, lowest precedence first:
//!
//! assignment, `@`, comparison, `+ -`, `* /`, prefix `- + !`, postfix `!`,
//! juxtaposition call, primary.

use slang_ir::{BinaryOp, Expr, ExprKind, Literal, Name, PostfixOp, Span, TokenKind, UnaryOp};
use slang_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse a full expression, including assignment.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            if let Some(assign) = self.try_parse_assignment()? {
                return Ok(assign);
            }
            self.parse_apply()
        })
    }

    /// `pattern = expr`, tried speculatively. Restores the cursor and yields
    /// `None` if the input is not an assignment.
    fn try_parse_assignment(&mut self) -> Result<Option<Expr>, ParseError> {
        if !self.starts_pattern() {
            return Ok(None);
        }
        let snapshot = self.cursor.position();
        let start = self.cursor.current_span();
        if let Ok(pattern) = self.parse_pattern() {
            if self.cursor.eat(TokenKind::Eq) {
                let value = self.parse_expr()?;
                let span = start.merge(value.span);
                return Ok(Some(Expr::new(
                    ExprKind::Assign {
                        pattern,
                        value: Box::new(value),
                    },
                    span,
                )));
            }
        }
        self.cursor.set_position(snapshot);
        Ok(None)
    }

    fn parse_apply(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;
        while self.cursor.eat(TokenKind::At) {
            let right = self.parse_comparison()?;
            left = binary(BinaryOp::Apply, left, right);
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_sum()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::EqEq => BinaryOp::Eq,
                TokenKind::NotEq => BinaryOp::NotEq,
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::LtEq => BinaryOp::LtEq,
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::GtEq => BinaryOp::GtEq,
                _ => return Ok(left),
            };
            self.cursor.advance();
            let right = self.parse_sum()?;
            left = binary(op, left, right);
        }
    }

    fn parse_sum(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_product()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => return Ok(left),
            };
            self.cursor.advance();
            let right = self.parse_product()?;
            left = binary(op, left, right);
        }
    }

    fn parse_product(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_prefix()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => return Ok(left),
            };
            self.cursor.advance();
            let right = self.parse_prefix()?;
            left = binary(op, left, right);
        }
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let op = match self.cursor.current_kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Bang => UnaryOp::Not,
            _ => return self.parse_postfix(),
        };
        let start = self.cursor.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_prefix())?;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_call()?;
        while self.cursor.check(TokenKind::Bang) {
            let bang = self.cursor.advance().span;
            let span = expr.span.merge(bang);
            expr = Expr::new(
                ExprKind::Postfix {
                    op: PostfixOp::Factorial,
                    operand: Box::new(expr),
                },
                span,
            );
        }
        Ok(expr)
    }

    /// A primary followed by zero or more primary arguments.
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let callee = self.parse_primary()?;
        let mut args = Vec::new();
        while self.cursor.current_kind().starts_primary() {
            args.push(self.parse_primary()?);
        }
        let Some(last) = args.last() else {
            return Ok(callee);
        };
        let span = callee.span.merge(last.span);
        Ok(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                args,
            },
            span,
        ))
    }

    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let literal = |lit: Literal| -> Result<Expr, ParseError> {
            Ok(Expr::new(ExprKind::Literal(lit), token.span))
        };
        match token.kind {
            TokenKind::Number(_) => {
                self.cursor.advance();
                literal(Literal::Number(token.kind.as_number().unwrap_or(f64::NAN)))
            }
            TokenKind::Str(text) => {
                self.cursor.advance();
                literal(Literal::Text(text))
            }
            TokenKind::Atom(name) => {
                self.cursor.advance();
                literal(Literal::Atom(name))
            }
            TokenKind::Nothing => {
                self.cursor.advance();
                literal(Literal::Nothing)
            }
            TokenKind::True => {
                self.cursor.advance();
                literal(Literal::Atom(Name::intern("true")))
            }
            TokenKind::False => {
                self.cursor.advance();
                literal(Literal::Atom(Name::intern("false")))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Ident(name), token.span))
            }
            TokenKind::InterpStart(text) => {
                self.cursor.advance();
                self.parse_interpolation(text, token.span)
                    .map_err(|e| e.in_context(ErrorContext::Interpolation))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                self.parse_group(token.span)
                    .map_err(|e| e.in_context(ErrorContext::Group))
            }
            TokenKind::LBracket => {
                self.cursor.advance();
                self.parse_list(token.span)
                    .map_err(|e| e.in_context(ErrorContext::ListLiteral))
            }
            TokenKind::LBrace => self.parse_brace(),
            _ => Err(ParseError::expected_expression(&token)),
        }
    }

    /// `"text \(expr) text"` desugars to `"text" + expr + "text"`. Starting
    /// from a text literal makes `+` concatenate whatever `expr` is.
    fn parse_interpolation(&mut self, head: Name, start: Span) -> Result<Expr, ParseError> {
        let mut expr = Expr::new(ExprKind::Literal(Literal::Text(head)), start);
        loop {
            let part = self.parse_expr()?;
            expr = binary(BinaryOp::Add, expr, part);

            let token = self.cursor.current();
            let (text, done) = match token.kind {
                TokenKind::InterpMid(text) => (text, false),
                TokenKind::InterpEnd(text) => (text, true),
                _ => return Err(ParseError::unexpected(&token, "`)` closing the interpolation")),
            };
            self.cursor.advance();
            if !text.as_str().is_empty() {
                let text = Expr::new(ExprKind::Literal(Literal::Text(text)), token.span);
                expr = binary(BinaryOp::Add, expr, text);
            }
            expr.span = start.merge(token.span);
            if done {
                return Ok(expr);
            }
        }
    }

    fn parse_group(&mut self, open: Span) -> Result<Expr, ParseError> {
        self.cursor.skip_newlines();
        let mut inner = self.parse_expr()?;
        self.cursor.skip_newlines();
        let close = self.expect_closing(TokenKind::RParen, open, "(")?;
        inner.span = open.merge(close);
        Ok(inner)
    }

    fn parse_list(&mut self, open: Span) -> Result<Expr, ParseError> {
        let mut items = Vec::new();
        self.cursor.skip_newlines();
        while !self.cursor.check(TokenKind::RBracket) {
            items.push(self.parse_expr()?);
            self.cursor.skip_newlines();
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
            self.cursor.skip_newlines();
        }
        let close = self.expect_closing(TokenKind::RBracket, open, "[")?;
        Ok(Expr::new(ExprKind::List(items), open.merge(close)))
    }

    /// Expect a closing delimiter, reporting an unclosed delimiter at end of
    /// input.
    pub(crate) fn expect_closing(
        &mut self,
        kind: TokenKind,
        open: Span,
        delimiter: &str,
    ) -> Result<Span, ParseError> {
        if self.cursor.is_at_end() {
            return Err(ParseError::unclosed(
                open,
                delimiter,
                self.cursor.current_span(),
            ));
        }
        self.cursor.expect(kind)
    }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}
