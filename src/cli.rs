use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare summoners against their league")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Rate each summoner's recent games against their tier and division
    Report(ReportArgs),
    /// Drop and recreate the game store schema
    Setup {
        /// Path to the SQLite game store (defaults to $DATABASE_PATH or league_summary.db)
        #[arg(short, long)]
        database: Option<String>,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    /// File with one summoner id per line
    #[arg(short, long, default_value = "input/summoners.txt")]
    pub summoners: String,

    /// Path to the SQLite game store (defaults to $DATABASE_PATH or league_summary.db)
    #[arg(short, long)]
    pub database: Option<String>,

    /// First day of the current season (YYYY-MM-DD)
    #[arg(long, default_value = "2015-01-21")]
    pub season_start: String,

    /// Where to write the report
    #[arg(short, long, default_value = "summary.html")]
    pub output: String,

    /// Output document format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Trailing windows in days, evaluated before the season window
    #[arg(long = "window-days", num_args = 1.., default_values_t = [3u32, 7, 30])]
    pub window_days: Vec<u32>,

    /// Count the summoner's own games in the league baseline
    #[arg(long)]
    pub include_own_games: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_defaults() {
        let cli = Cli::try_parse_from(["league_summary", "report"]).unwrap();
        match cli.command {
            Command::Report(args) => {
                assert_eq!(args.summoners, "input/summoners.txt");
                assert_eq!(args.database, None);
                assert_eq!(args.window_days, vec![3, 7, 30]);
                assert_eq!(args.format, OutputFormat::Html);
                assert!(!args.include_own_games);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_report_overrides() {
        let cli = Cli::try_parse_from([
            "league_summary",
            "report",
            "--summoners",
            "ids.txt",
            "--format",
            "json",
            "--window-days",
            "1",
            "14",
            "--include-own-games",
        ])
        .unwrap();

        let Command::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.summoners, "ids.txt");
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.window_days, vec![1, 14]);
        assert!(args.include_own_games);
    }
}
