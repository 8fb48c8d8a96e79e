use serde::Serialize;

pub const DEFAULT_DATABASE_PATH: &str = "league_summary.db";
pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub database_path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var(DATABASE_PATH_ENV)
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputSettings {
    pub summoners_path: String,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            summoners_path: "input/summoners.txt".to_string(),
        }
    }
}

/// Whether the evaluated player's own games count towards the league baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LeagueBaseline {
    ExcludeOwnGames,
    IncludeOwnGames,
}

#[derive(Debug, Clone)]
pub struct WindowSettings {
    /// Season start as `YYYY-MM-DD`, parsed at startup
    pub season_start: String,
    pub day_ranges: Vec<u32>,
    pub baseline: LeagueBaseline,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            season_start: "2015-01-21".to_string(),
            day_ranges: vec![3, 7, 30],
            baseline: LeagueBaseline::ExcludeOwnGames,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub path: String,
    pub format: OutputFormat,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: "summary.html".to_string(),
            format: OutputFormat::Html,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub store: StoreSettings,
    pub input: InputSettings,
    pub windows: WindowSettings,
    pub output: OutputSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
