//! A persistent evaluation session.
//!
//! A `Session` keeps one root environment across inputs, so bindings made
//! by one `eval_source` call are visible to the next. Every input is
//! appended to a history buffer and lexed at its offset in that buffer:
//! spans from any input, including those captured by closures defined
//! earlier, point into `history()`.

use std::fmt;

use slang_diagnostic::Diagnostic;
use slang_eval::{
    buffer_handler, stdout_handler, Environment, EvalError, Interpreter, InterpreterBuilder,
    SharedPrintHandler, Value,
};
use slang_ir::Name;
use slang_parse::ParseError;

/// Why an input produced no value.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionError {
    Parse(ParseError),
    Runtime(EvalError),
}

impl SessionError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            SessionError::Parse(e) => e.to_diagnostic(),
            SessionError::Runtime(e) => e.to_diagnostic(),
        }
    }

    /// Whether more input could complete the source (an unclosed delimiter
    /// or a statement cut short at end of input).
    pub fn is_incomplete(&self) -> bool {
        matches!(self, SessionError::Parse(e) if e.incomplete)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Parse(e) => write!(f, "{}", e.message),
            SessionError::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {}

pub struct Session {
    interpreter: Interpreter,
    env: Environment,
    history: String,
}

impl Session {
    /// A session printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    /// A session capturing `print` output; see [`Session::print_output`].
    pub fn buffered() -> Self {
        Self::with_print_handler(buffer_handler())
    }

    pub fn with_print_handler(handler: SharedPrintHandler) -> Self {
        Session {
            interpreter: InterpreterBuilder::new().print_handler(handler).build(),
            env: Environment::new(),
            history: String::new(),
        }
    }

    /// Lex, parse and run `source` in the session environment, returning the
    /// value of its last statement.
    ///
    /// A failure stops at the failing statement; bindings made by earlier
    /// statements and earlier inputs stay.
    pub fn eval_source(&mut self, source: &str) -> Result<Value, SessionError> {
        let base = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history.push_str(source);
        self.history.push('\n');

        let tokens = slang_lexer::lex_at(source, base);
        let stmts = slang_parse::parse(&tokens).map_err(SessionError::Parse)?;
        tracing::debug!(base, statements = stmts.len(), "evaluating input");

        self.interpreter
            .evaluate_all(&stmts, &self.env)
            .map_err(|e| {
                tracing::debug!(code = %e.kind.error_code(), "input failed");
                SessionError::Runtime(e)
            })
    }

    /// Whether `source` stops inside an unclosed construct.
    pub fn needs_more_input(source: &str) -> bool {
        matches!(
            slang_parse::parse(&slang_lexer::lex(source)),
            Err(e) if e.incomplete
        )
    }

    /// All input so far; diagnostic spans index into this.
    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Names bound at the top level, sorted.
    pub fn bound_names(&self) -> Vec<Name> {
        self.env.names()
    }

    /// Output captured by a buffered session.
    pub fn print_output(&self) -> String {
        self.interpreter.get_print_output()
    }

    pub fn clear_print_output(&self) {
        self.interpreter.clear_print_output();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
