//! Runtime errors.
//!
//! `EvalErrorKind` carries the structured category; the factory functions
//! below are the only way the runtime builds an `EvalError`, and they fill in
//! both `kind` and `message`.
//!
//! # Error Codes (E6xxx)
//!
//! - E6001–E6002: names (unbound, undeclared assignment)
//! - E6003–E6004: calls (no matching row, not callable)
//! - E6005–E6008: operands and indexing
//! - E6009–E6011: patterns and deferred blocks

use std::fmt;

use slang_diagnostic::{Diagnostic, ErrorCode};
use slang_ir::{BinaryOp, Name, Pattern, Span};

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    UnboundName {
        name: String,
    },
    UndeclaredAssignment {
        name: String,
    },
    /// No dispatch row accepts the arguments (rendered).
    NoMatch {
        args: String,
    },
    NotCallable {
        type_name: &'static str,
    },
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    BinaryTypeMismatch {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },
    NonIntegerIndex {
        index: String,
    },
    IndexOutOfBounds {
        index: String,
        len: usize,
    },
    /// A `let` or assignment pattern rejected its value.
    MatchFailed {
        pattern: String,
    },
    CyclicForce,
    InvalidPattern {
        pattern: String,
    },
}

impl EvalErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnboundName { .. } => ErrorCode::E6001,
            Self::UndeclaredAssignment { .. } => ErrorCode::E6002,
            Self::NoMatch { .. } => ErrorCode::E6003,
            Self::NotCallable { .. } => ErrorCode::E6004,
            Self::TypeMismatch { .. } => ErrorCode::E6005,
            Self::BinaryTypeMismatch { .. } => ErrorCode::E6006,
            Self::NonIntegerIndex { .. } => ErrorCode::E6007,
            Self::IndexOutOfBounds { .. } => ErrorCode::E6008,
            Self::MatchFailed { .. } => ErrorCode::E6009,
            Self::CyclicForce => ErrorCode::E6010,
            Self::InvalidPattern { .. } => ErrorCode::E6011,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundName { name } => write!(f, "unbound name `{name}`"),
            Self::UndeclaredAssignment { name } => {
                write!(f, "cannot assign to `{name}`: it was never declared with `let`")
            }
            Self::NoMatch { args } => write!(f, "no row matches the arguments ({args})"),
            Self::NotCallable { type_name } => write!(f, "a {type_name} is not callable"),
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::BinaryTypeMismatch { op, left, right } => write!(
                f,
                "operator `{}` cannot be applied to {left} and {right}",
                op.as_symbol()
            ),
            Self::NonIntegerIndex { index } => {
                write!(f, "list index must be an integer, got {index}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for a list of length {len}")
            }
            Self::MatchFailed { pattern } => write!(f, "value does not match pattern `{pattern}`"),
            Self::CyclicForce => write!(f, "deferred block forced while it is already running"),
            Self::InvalidPattern { pattern } => write!(
                f,
                "invalid pattern `{pattern}`: a spread can only end a list pattern"
            ),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Equals `kind.to_string()`.
    pub message: String,
    /// Innermost expression being evaluated when the error occurred.
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a location unless a more precise one is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.kind.error_code()).with_message(&self.message);
        match self.span {
            Some(span) => diag.with_label(span, "while evaluating this"),
            None => diag,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

fn render_args(args: &[Value]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// Factories

#[cold]
pub fn unbound_name(name: Name) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundName {
        name: name.as_str().to_string(),
    })
}

#[cold]
pub fn undeclared_assignment(name: Name) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndeclaredAssignment {
        name: name.as_str().to_string(),
    })
}

#[cold]
pub fn no_match(args: &[Value]) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoMatch {
        args: render_args(args),
    })
}

#[cold]
pub fn not_callable(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn type_mismatch(expected: &'static str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected,
        got: got.type_name(),
    })
}

#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

#[cold]
pub fn non_integer_index(index: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonIntegerIndex {
        index: index.to_string(),
    })
}

#[cold]
pub fn index_out_of_bounds(index: f64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds {
        index: Value::number(index).to_string(),
        len,
    })
}

#[cold]
pub fn match_failed(pattern: &Pattern) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MatchFailed {
        pattern: pattern.to_string(),
    })
}

#[cold]
pub fn cyclic_force() -> EvalError {
    EvalError::from_kind(EvalErrorKind::CyclicForce)
}

#[cold]
pub fn invalid_pattern(pattern: &Pattern) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidPattern {
        pattern: pattern.to_string(),
    })
}
