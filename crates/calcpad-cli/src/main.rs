//! calcpad: desk calculator
//!
//! ## Usage
//!
//! ```bash
//! calcpad tui                    # Interactive keypad
//! calcpad eval "2+3*4="          # Prints 20
//! calcpad eval --trace "5%%"     # Display after every key
//! echo "5+\n3=" | calcpad repl   # One calculator, many lines
//! ```

use std::io;
use std::process::ExitCode;

use calcpad_cli::{handlers, logging, Cli, CliResult, Commands};
use clap::Parser;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = cli.config();

    config.color.apply();
    logging::init(&config, matches!(cli.command, Commands::Tui))?;

    match &cli.command {
        Commands::Tui => handlers::execute_tui(&config),
        Commands::Eval(args) => handlers::execute_eval(&config, args, &mut io::stdout().lock()),
        Commands::Repl(args) => handlers::execute_repl(&config, args),
    }
}
