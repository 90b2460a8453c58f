//! Grammar productions, split by construct.

mod block;
mod expr;
mod pattern;
mod stmt;
