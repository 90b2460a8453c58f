//! Command-line configuration.
//!
//! Flags are parsed by hand: `--color=<mode>` may appear anywhere, the first
//! other argument picks the command, and the next one is its file.

use std::path::Path;

use slang_diagnostic::ColorMode;

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Repl,
    Run(String),
    Lex(String),
    Parse(String),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub command: Command,
    pub color: ColorMode,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            command: Command::Repl,
            color: ColorMode::Auto,
        }
    }
}

impl CliConfig {
    /// Parse arguments, not including the program name.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut config = CliConfig::default();
        let mut positional = Vec::new();

        for arg in args {
            if let Some(mode) = arg.strip_prefix("--color=") {
                config.color = ColorMode::parse(mode).ok_or_else(|| {
                    format!("invalid value '{mode}' for --color (expected auto, always or never)")
                })?;
            } else if arg == "--help" || arg == "-h" {
                positional.insert(0, "help");
            } else if arg == "--version" || arg == "-V" {
                positional.insert(0, "version");
            } else if arg.starts_with("--") {
                return Err(format!("unknown option '{arg}'"));
            } else {
                positional.push(arg.as_str());
            }
        }

        let file = |name: &str| -> Result<String, String> {
            positional
                .get(1)
                .map(|path| (*path).to_string())
                .ok_or_else(|| format!("missing file path\nUsage: slang {name} <file.slang>"))
        };

        config.command = match positional.first().copied() {
            None | Some("repl") => Command::Repl,
            Some("run") => Command::Run(file("run")?),
            Some("lex") => Command::Lex(file("lex")?),
            Some("parse") => Command::Parse(file("parse")?),
            Some("help") => Command::Help,
            Some("version") => Command::Version,
            Some(other) if is_source_file(other) => Command::Run(other.to_string()),
            Some(other) => return Err(format!("unknown command: {other}")),
        };
        Ok(config)
    }
}

fn is_source_file(arg: &str) -> bool {
    Path::new(arg)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("slang"))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
