//! Destructuring values against patterns.
//!
//! Bindings collect in a scratch list and reach the environment only once
//! the whole pattern has matched, so a failed match never leaves partial
//! bindings behind.

use slang_ir::{Name, Pattern};

use crate::errors::{invalid_pattern, undeclared_assignment, EvalError};
use crate::{Environment, Interpreter, Value};

/// How a successful match writes its bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindMode {
    /// `let` and dispatch: new bindings in the target frame.
    Define,
    /// Assignment expressions: rebind names that are already declared.
    Assign,
}

type Bindings = Vec<(Name, Value)>;

impl Interpreter {
    /// Match `value` against `pattern`, binding into `env` on success.
    ///
    /// `Ok(false)` means the pattern rejected the value. Errors come from
    /// forcing deferred values, from malformed patterns, and from assigning
    /// to undeclared names.
    pub fn match_pattern(
        &self,
        pattern: &Pattern,
        value: Value,
        env: &Environment,
        mode: BindMode,
    ) -> Result<bool, EvalError> {
        let mut scratch = Bindings::new();
        if !self.destructure(pattern, value, &mut scratch)? {
            return Ok(false);
        }

        match mode {
            BindMode::Define => {
                for (name, value) in scratch {
                    env.define(name, value);
                }
            }
            BindMode::Assign => {
                if let Some((name, _)) = scratch.iter().find(|(name, _)| !env.is_declared(*name)) {
                    return Err(undeclared_assignment(*name));
                }
                for (name, value) in scratch {
                    env.assign(name, value)?;
                }
            }
        }
        Ok(true)
    }

    fn destructure(
        &self,
        pattern: &Pattern,
        value: Value,
        out: &mut Bindings,
    ) -> Result<bool, EvalError> {
        match pattern {
            Pattern::Id(name) => {
                out.push((*name, value));
                Ok(true)
            }
            Pattern::Ignore => Ok(true),
            Pattern::Strict {
                inner,
                forces_fully,
            } => {
                if !matches!(**inner, Pattern::Id(_) | Pattern::Ignore) {
                    return Err(invalid_pattern(pattern));
                }
                let forced = if *forces_fully {
                    self.force_fully(value)?
                } else {
                    self.force(value)?
                };
                self.destructure(inner, forced, out)
            }
            Pattern::Literal(lit) => Ok(self.force(value)? == Value::from_literal(lit)),
            Pattern::Seq(items) => match self.force(value)? {
                Value::List(values) => self.destructure_seq(items, &values, out),
                _ => Ok(false),
            },
            Pattern::Spread(_) => Err(invalid_pattern(pattern)),
        }
    }

    fn destructure_seq(
        &self,
        items: &[Pattern],
        values: &[Value],
        out: &mut Bindings,
    ) -> Result<bool, EvalError> {
        let (prefix, rest) = match items.split_last() {
            Some((Pattern::Spread(name), prefix)) => (prefix, Some(*name)),
            _ => (items, None),
        };
        let fits = match rest {
            Some(_) => values.len() >= prefix.len(),
            None => values.len() == prefix.len(),
        };
        if !fits {
            return Ok(false);
        }

        for (item, value) in prefix.iter().zip(values) {
            if !self.destructure(item, value.clone(), out)? {
                return Ok(false);
            }
        }
        if let Some(name) = rest {
            out.push((name, Value::list(values[prefix.len()..].to_vec())));
        }
        Ok(true)
    }
}
