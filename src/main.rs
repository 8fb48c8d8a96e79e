use anyhow::Result;

use league_summary::cli::Command;
use league_summary::{handle_completions, handle_report, handle_setup, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Report(args) => handle_report(args),
        Command::Setup { database } => handle_setup(database.as_deref()),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
