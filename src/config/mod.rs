pub mod settings;

pub use settings::{AppConfig, LeagueBaseline, OutputFormat};
