use super::classifier::classify_sample;
use super::statistics::{median, sample_std_dev};
use super::types::{MetricValue, Polarity};
use crate::domain::GameRecord;

/// A named statistic pulled out of each game, with its scoring direction
#[derive(Clone, Copy)]
pub struct MetricDefinition {
    pub name: &'static str,
    pub extract: fn(&GameRecord) -> f64,
    pub polarity: Polarity,
}

pub const CREEP_SCORE: MetricDefinition = MetricDefinition {
    name: "Creep score",
    extract: minions_killed,
    polarity: Polarity::HigherIsBetter,
};

pub const DEATHS: MetricDefinition = MetricDefinition {
    name: "Deaths",
    extract: deaths,
    polarity: Polarity::LowerIsBetter,
};

pub const WARDS_PLACED: MetricDefinition = MetricDefinition {
    name: "Wards placed",
    extract: wards_placed,
    polarity: Polarity::HigherIsBetter,
};

pub const WARDS_CLEARED: MetricDefinition = MetricDefinition {
    name: "Wards cleared",
    extract: wards_cleared,
    polarity: Polarity::HigherIsBetter,
};

fn minions_killed(game: &GameRecord) -> f64 {
    f64::from(game.stats.minions_killed)
}

fn deaths(game: &GameRecord) -> f64 {
    f64::from(game.stats.deaths)
}

fn wards_placed(game: &GameRecord) -> f64 {
    f64::from(game.stats.wards_placed)
}

fn wards_cleared(game: &GameRecord) -> f64 {
    f64::from(game.stats.wards_cleared)
}

/// Tracked metrics, in report order
pub const METRIC_DEFINITIONS: [MetricDefinition; 4] = [CREEP_SCORE, DEATHS, WARDS_PLACED, WARDS_CLEARED];

impl MetricDefinition {
    pub fn sample(&self, games: &[GameRecord]) -> Vec<f64> {
        games.iter().map(self.extract).collect()
    }
}

/// Compares the player's median against the league distribution for one window.
pub fn build_metric(
    window: &str,
    player_games: &[GameRecord],
    league_games: &[GameRecord],
    definition: &MetricDefinition,
) -> MetricValue {
    let player_score = median(&definition.sample(player_games));

    let league_sample = definition.sample(league_games);
    let league_median = median(&league_sample);
    let league_std_dev = league_median.map(|_| sample_std_dev(&league_sample));

    let rating = classify_sample(player_score, league_median, league_std_dev, definition.polarity);

    MetricValue {
        window: window.to_string(),
        player_score,
        league_median,
        league_std_dev,
        rating,
        rating_label: rating.label(),
        sample_size: player_games.len(),
        league_sample_size: league_games.len(),
    }
}
