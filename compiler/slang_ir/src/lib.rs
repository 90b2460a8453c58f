//! Slang IR - shared data structures for the Slang interpreter.
//!
//! This crate contains the types every other phase agrees on:
//! - Spans for source locations
//! - Names for interned identifiers, atoms and string contents
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (`Expr`, `Stmt`, `Pattern`, `MatchRow`)
//! - An S-expression printer for debugging parsed programs
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and atom names become `Name(u32)`
//!   backed by one process-wide table, so atom identity is a `u32` compare.
//! - **Share bodies, not copies**: block and match-row bodies sit behind
//!   `Rc` so closures and deferred values can hold them without cloning.

mod interner;
mod name;
mod span;
mod token;

pub mod ast;
pub mod printer;

pub use ast::{
    BinaryOp, Expr, ExprKind, Literal, MatchRow, Pattern, PostfixOp, Stmt, StmtKind, UnaryOp,
};
pub use interner::{global_interner, StringInterner};
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
