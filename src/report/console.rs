use colored::{ColoredString, Colorize};

use super::models::Report;
use crate::rating::{MetricValue, Rating};

/// Prints one line per summoner and metric, using the first window.
pub fn print_summary(report: &Report) {
    for summoner_report in report.summoners.values() {
        let summoner = &summoner_report.summoner;
        println!(
            "{} {}",
            summoner.name.as_str().bold(),
            format!("({}, #{})", summoner.league(), summoner.summoner_id).as_str().dimmed()
        );

        for metric in &summoner_report.metrics {
            if let Some(value) = metric.values.first() {
                println!("  {:<14} {}", metric.name, describe(value));
            }
        }
    }

    for skipped in &report.skipped {
        println!("{} #{}: {}", "skipped".red(), skipped.summoner_id, skipped.reason);
    }
}

fn describe(value: &MetricValue) -> String {
    match (value.player_score, value.league_median) {
        (Some(score), Some(median)) => format!(
            "{} ({:.1} vs league {:.1}, {} games, {})",
            paint(value.rating),
            score,
            median,
            value.sample_size,
            value.window
        ),
        _ => format!("{} ({})", paint(value.rating), value.window),
    }
}

fn paint(rating: Rating) -> ColoredString {
    let label = rating.label();
    match rating {
        Rating::Top => label.green().bold(),
        Rating::AboveAverage => label.green(),
        Rating::Average => label.normal(),
        Rating::BelowAverage => label.yellow(),
        Rating::Bottom => label.red(),
        Rating::InsufficientData => label.dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(player_score: Option<f64>, rating: Rating) -> MetricValue {
        MetricValue {
            window: "Last 7 days".to_string(),
            player_score,
            league_median: Some(110.0),
            league_std_dev: Some(84.4),
            rating,
            rating_label: rating.label(),
            sample_size: 3,
            league_sample_size: 5,
        }
    }

    #[test]
    fn test_describe_contains_scores() {
        colored::control::set_override(false);
        let line = describe(&value(Some(140.0), Rating::AboveAverage));
        assert_eq!(line, "above average (140.0 vs league 110.0, 3 games, Last 7 days)");
    }

    #[test]
    fn test_describe_without_games() {
        colored::control::set_override(false);
        let line = describe(&value(None, Rating::InsufficientData));
        assert_eq!(line, "not enough games (Last 7 days)");
    }
}
