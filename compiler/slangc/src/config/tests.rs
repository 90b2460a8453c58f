use pretty_assertions::assert_eq;

use super::*;

fn parse(args: &[&str]) -> Result<CliConfig, String> {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    CliConfig::from_args(&args)
}

#[test]
fn test_no_arguments_starts_repl() {
    assert_eq!(parse(&[]).unwrap(), CliConfig::default());
}

#[test]
fn test_subcommands() {
    assert_eq!(parse(&["run", "a.slang"]).unwrap().command, Command::Run("a.slang".into()));
    assert_eq!(parse(&["lex", "b"]).unwrap().command, Command::Lex("b".into()));
    assert_eq!(parse(&["parse", "c"]).unwrap().command, Command::Parse("c".into()));
    assert_eq!(parse(&["repl"]).unwrap().command, Command::Repl);
    assert_eq!(parse(&["--help"]).unwrap().command, Command::Help);
    assert_eq!(parse(&["--version"]).unwrap().command, Command::Version);
}

#[test]
fn test_bare_source_file_runs() {
    assert_eq!(
        parse(&["demo.slang"]).unwrap().command,
        Command::Run("demo.slang".into())
    );
}

#[test]
fn test_color_flag_anywhere() {
    let config = parse(&["run", "--color=never", "x.slang"]).unwrap();
    assert_eq!(config.color, ColorMode::Never);
    assert_eq!(config.command, Command::Run("x.slang".into()));
    assert_eq!(parse(&["--color=always"]).unwrap().color, ColorMode::Always);
}

#[test]
fn test_errors() {
    assert!(parse(&["--color=sometimes"]).unwrap_err().contains("--color"));
    assert!(parse(&["run"]).unwrap_err().starts_with("missing file path"));
    assert_eq!(parse(&["frobnicate"]).unwrap_err(), "unknown command: frobnicate");
    assert_eq!(parse(&["--fast"]).unwrap_err(), "unknown option '--fast'");
}
