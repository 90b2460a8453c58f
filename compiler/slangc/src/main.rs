//! Slang interpreter CLI.

use slangc::commands::{lex_file, parse_file, run_file, run_repl};
use slangc::{init_tracing, CliConfig, Command};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match CliConfig::from_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    init_tracing();

    let code = match &config.command {
        Command::Repl => run_repl(config.color),
        Command::Run(path) => run_file(path, config.color),
        Command::Lex(path) => lex_file(path),
        Command::Parse(path) => parse_file(path, config.color),
        Command::Help => {
            print_usage();
            0
        }
        Command::Version => {
            println!("Slang {}", env!("CARGO_PKG_VERSION"));
            0
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    println!("Slang, a pattern-dispatch language");
    println!();
    println!("Usage: slang [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Start the interactive REPL (default)");
    println!("  run <file.slang>     Run a program");
    println!("  lex <file.slang>     Tokenize and display tokens");
    println!("  parse <file.slang>   Parse and display the syntax tree");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>       Diagnostic colors: auto (default), always, never");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=slang_eval=debug slang run main.slang");
}
