//! The interactive read-eval-print loop.
//!
//! Lines accumulate until they parse or fail for a reason more input cannot
//! fix, then run in the session. Results other than `nothing` are echoed.
//! Lines starting with `.` are REPL commands.

use std::io::{self, BufRead, Write};

use slang_diagnostic::ColorMode;
use slang_eval::Value;

use super::{lex_source, parse_source, read_file, report, stderr_is_tty};
use crate::Session;

const PROMPT: &str = "> ";
const CONTINUATION_PROMPT: &str = "| ";

const HELP: &str = "\
.lex <src>     show the tokens of <src>
.parse <src>   show the parse tree of <src>
.load <file>   run a file in this session
.env           list the names bound in this session
.help          show this message
.quit          leave the REPL";

/// Whether the loop should keep reading.
enum Flow {
    Continue,
    Quit,
}

/// A REPL over arbitrary input and output streams.
pub struct Repl<W: Write, E: Write> {
    session: Session,
    out: W,
    err: E,
    color: ColorMode,
    is_tty: bool,
}

impl<W: Write, E: Write> Repl<W, E> {
    pub fn new(session: Session, out: W, err: E, color: ColorMode, is_tty: bool) -> Self {
        Repl {
            session,
            out,
            err,
            color,
            is_tty,
        }
    }

    /// Read from `input` until end of input or `.quit`.
    pub fn run(&mut self, input: impl BufRead) -> io::Result<()> {
        let mut pending = String::new();
        let mut lines = input.lines();
        loop {
            let prompt = if pending.is_empty() {
                PROMPT
            } else {
                CONTINUATION_PROMPT
            };
            write!(self.out, "{prompt}")?;
            self.out.flush()?;

            let Some(line) = lines.next().transpose()? else {
                // Report whatever was left open.
                if !pending.is_empty() {
                    writeln!(self.out)?;
                    self.eval(&pending)?;
                }
                return Ok(());
            };

            if pending.is_empty() {
                if let Some(command) = line.trim_start().strip_prefix('.') {
                    match self.command(command)? {
                        Flow::Continue => continue,
                        Flow::Quit => return Ok(()),
                    }
                }
            }

            if !pending.is_empty() {
                pending.push('\n');
            }
            pending.push_str(&line);
            if Session::needs_more_input(&pending) {
                continue;
            }
            self.eval(&pending)?;
            pending.clear();
        }
    }

    /// The session, for inspecting state after a run.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consume the REPL, returning its output streams.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    fn eval(&mut self, source: &str) -> io::Result<()> {
        if source.trim().is_empty() {
            return Ok(());
        }
        match self.session.eval_source(source) {
            Ok(Value::Nothing) => {}
            Ok(value) => writeln!(self.out, "{value}")?,
            Err(e) => {
                self.out.flush()?;
                report(
                    &mut self.err,
                    &e.to_diagnostic(),
                    self.session.history(),
                    self.color,
                    self.is_tty,
                );
            }
        }
        Ok(())
    }

    fn command(&mut self, command: &str) -> io::Result<Flow> {
        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, arg)| (name, arg.trim()));
        match name {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => writeln!(self.out, "{HELP}")?,
            "lex" => write!(self.out, "{}", lex_source(arg))?,
            "parse" => match parse_source(arg) {
                Ok(dump) => write!(self.out, "{dump}")?,
                Err(e) => report(&mut self.err, &e.to_diagnostic(), arg, self.color, self.is_tty),
            },
            "load" => match read_file(arg) {
                Ok(source) => {
                    tracing::debug!(path = arg, "loading file");
                    self.eval(&source)?;
                }
                Err(msg) => writeln!(self.err, "{msg}")?,
            },
            "env" => {
                let env = self.session.env();
                for name in self.session.bound_names() {
                    match env.lookup(name) {
                        Ok(value) => writeln!(self.out, "{name} = {value}")?,
                        Err(_) => writeln!(self.out, "{name}")?,
                    }
                }
            }
            other => writeln!(self.err, "unknown command '.{other}' (try .help)")?,
        }
        Ok(Flow::Continue)
    }
}

/// Run the REPL on stdin and stdout.
pub fn run_repl(color: ColorMode) -> i32 {
    println!("Slang {} (.help for commands)", env!("CARGO_PKG_VERSION"));
    let mut repl = Repl::new(
        Session::new(),
        io::stdout(),
        io::stderr(),
        color,
        stderr_is_tty(),
    );
    match repl.run(io::stdin().lock()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}
