use chrono::{Days, NaiveDate};
use serde::Serialize;
use thiserror::Error;

pub const SEASON_START_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq)]
pub enum WindowError {
    #[error("invalid date range: end {end} is not after start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("could not parse season start '{0}', expected YYYY-MM-DD")]
    InvalidSeasonStart(String),
}

/// Half-open date range `[start, end)` used to select games
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeWindow {
    pub fn new(label: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Result<Self, WindowError> {
        if end <= start {
            return Err(WindowError::InvalidDateRange { start, end });
        }

        Ok(Self {
            label: label.into(),
            start,
            end,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

pub fn parse_season_start(value: &str) -> Result<NaiveDate, WindowError> {
    NaiveDate::parse_from_str(value.trim(), SEASON_START_FORMAT)
        .map_err(|_| WindowError::InvalidSeasonStart(value.to_string()))
}

/// Builds the trailing windows ("last N days") followed by the season window.
///
/// Every window ends the day after `today` so games played today are included.
pub fn standard_windows(
    today: NaiveDate,
    day_ranges: &[u32],
    season_start: NaiveDate,
) -> Result<Vec<TimeWindow>, WindowError> {
    let end = next_day(today)?;
    let mut windows = Vec::with_capacity(day_ranges.len() + 1);

    for &days in day_ranges {
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or(WindowError::InvalidDateRange { start: end, end })?;
        windows.push(TimeWindow::new(trailing_label(days), start, end)?);
    }

    windows.push(TimeWindow::new("Season", season_start, end)?);
    Ok(windows)
}

fn next_day(date: NaiveDate) -> Result<NaiveDate, WindowError> {
    date.checked_add_days(Days::new(1))
        .ok_or(WindowError::InvalidDateRange { start: date, end: date })
}

fn trailing_label(days: u32) -> String {
    match days {
        1 => "Last day".to_string(),
        n => format!("Last {} days", n),
    }
}
