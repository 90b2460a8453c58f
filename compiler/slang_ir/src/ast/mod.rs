//! AST node types.
//!
//! The tree is a closed set of sum types. Bodies that runtime values must
//! keep alive (block statements, match rows and their bodies) are behind
//! `Rc` so a closure or deferred value can share them with the AST.

use std::fmt;
use std::rc::Rc;

use crate::{Name, Span};

/// Literal constants that can appear in expressions and patterns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Literal {
    Nothing,
    Number(f64),
    /// Cooked string contents.
    Text(Name),
    /// Atom name without the leading colon.
    Atom(Name),
}

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `a @ f`: apply `f` to `a`.
    Apply,
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Apply => "@",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
        }
    }
}

/// Prefix operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Plus,
    Not,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Plus => "+",
            UnaryOp::Not => "!",
        }
    }
}

/// Postfix operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PostfixOp {
    /// `n!`
    Factorial,
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    Ident(Name),
    /// List literal `[a, b, c]`.
    List(Vec<Expr>),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Postfix {
        op: PostfixOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Juxtaposition call `f a b`; `args` is never empty.
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// `pattern = value`: rebinds already-declared names.
    Assign {
        pattern: Pattern,
        value: Box<Expr>,
    },
    /// `{ stmt; stmt }`: evaluates to a deferred value.
    Block(Rc<[Stmt]>),
    /// `{ p q -> body, ... }`: evaluates to a closure.
    /// Rows are ordered shortest-arity first.
    MatchBlock(Rc<[MatchRow]>),
}

/// One `patterns -> body` row of a match block.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchRow {
    pub patterns: Vec<Pattern>,
    pub body: Rc<Expr>,
    pub span: Span,
}

impl MatchRow {
    pub fn arity(&self) -> usize {
        self.patterns.len()
    }
}

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    Expr(Expr),
    /// `let pattern = init`: declares new bindings.
    Let { pattern: Pattern, init: Expr },
    Print(Expr),
}

/// Destructuring pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    /// Binds the value without forcing it.
    Id(Name),
    /// `_`
    Ignore,
    Literal(Literal),
    /// `[p, q, rest..]`; a `Spread` may only appear last.
    Seq(Vec<Pattern>),
    /// `rest..`
    Spread(Name),
    /// `{x}` forces one level; `{{x}}` forces until the value is not deferred.
    /// `inner` is always `Id` or `Ignore`.
    Strict {
        inner: Box<Pattern>,
        forces_fully: bool,
    },
}

impl Pattern {
    /// A pattern whose accepted value is fully known up front: a literal,
    /// or a list pattern made only of such patterns.
    pub fn is_literal(&self) -> bool {
        match self {
            Pattern::Literal(_) => true,
            Pattern::Seq(items) => items.iter().all(Pattern::is_literal),
            _ => false,
        }
    }

    /// Whether this is a list pattern ending in a spread.
    pub fn has_trailing_spread(&self) -> bool {
        matches!(self, Pattern::Seq(items) if matches!(items.last(), Some(Pattern::Spread(_))))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Nothing => f.write_str("nothing"),
            Literal::Number(n) => f.write_str(&format_number(*n)),
            Literal::Text(text) => write_quoted(f, text.as_str()),
            Literal::Atom(name) => write!(f, ":{name}"),
        }
    }
}

/// Canonical pattern rendering. Two patterns with the same rendering accept
/// the same values and bind the same names, which is what dispatch edges are
/// keyed by.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Id(name) => write!(f, "{name}"),
            Pattern::Ignore => f.write_str("_"),
            Pattern::Literal(lit) => write!(f, "{lit}"),
            Pattern::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Pattern::Spread(name) => write!(f, "{name}.."),
            Pattern::Strict {
                inner,
                forces_fully: false,
            } => write!(f, "{{{inner}}}"),
            Pattern::Strict {
                inner,
                forces_fully: true,
            } => write!(f, "{{{{{inner}}}}}"),
        }
    }
}

/// Shortest decimal rendering of a number, without a trailing `.0`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // `Display` for f64 never emits an exponent and drops `.0` for integers.
    format!("{n}")
}

/// Write `text` double-quoted, escaping what the lexer would otherwise read
/// as syntax.
pub fn write_quoted(out: &mut impl fmt::Write, text: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in text.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\t' => out.write_str("\\t")?,
            '\r' => out.write_str("\\r")?,
            '\0' => out.write_str("\\0")?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}
