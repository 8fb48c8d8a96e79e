pub mod models;
pub mod window;

pub use models::{Division, GameRecord, PlayerStats, Summoner, SummonerId, Tier, UnknownTier};
pub use window::{parse_season_start, standard_windows, TimeWindow, WindowError};
