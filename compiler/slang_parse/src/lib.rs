//! Recursive descent parser for Slang.
//!
//! Produces a `Vec<Stmt>` for a whole program. Braces are ambiguous between
//! statement blocks and match blocks, so the parser tries a statement block
//! first and backtracks to a match block, keeping whichever error got
//! further if both fail.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError};

use slang_ir::{Stmt, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse every statement up to end of input.
    pub fn parse_program(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        loop {
            self.cursor.skip_separators();
            if self.cursor.is_at_end() {
                break;
            }
            stmts.push(self.parse_stmt()?);
            self.expect_stmt_end(None)?;
        }
        tracing::trace!(statements = stmts.len(), "parsed program");
        Ok(stmts)
    }
}

/// Parse a token list into statements.
pub fn parse(tokens: &TokenList) -> Result<Vec<Stmt>, ParseError> {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests;
