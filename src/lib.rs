pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod input;
pub mod rating;
pub mod report;
pub mod services;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::{Cli, ReportArgs};

use crate::cli::Command;
use crate::config::settings::{AppConfig, LeagueBaseline};
use crate::services::SummaryService;
use crate::store::SqliteStore;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_report(args: &ReportArgs) -> Result<()> {
    let config = build_config(args);
    let service = SummaryService::new(config);
    service.run().map(|_| ())
}

pub fn handle_setup(database: Option<&str>) -> Result<()> {
    let mut config = AppConfig::new();
    if let Some(path) = database {
        config.store.database_path = path.to_string();
    }

    let store = SqliteStore::open(&config.store.database_path)?;
    let mut conn = store.connection()?;
    database::setup::reset_database(&mut conn)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

pub fn build_config(args: &ReportArgs) -> AppConfig {
    let mut config = AppConfig::new();

    if let Some(path) = &args.database {
        config.store.database_path = path.clone();
    }
    config.input.summoners_path = args.summoners.clone();
    config.windows.season_start = args.season_start.clone();
    config.windows.day_ranges = args.window_days.clone();
    config.windows.baseline = if args.include_own_games {
        LeagueBaseline::IncludeOwnGames
    } else {
        LeagueBaseline::ExcludeOwnGames
    };
    config.output.path = args.output.clone();
    config.output.format = args.format;

    config
}
