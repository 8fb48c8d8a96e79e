use serde::{Deserialize, Serialize};

/// Where a player's score lands relative to their league
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rating {
    Top,
    AboveAverage,
    Average,
    BelowAverage,
    Bottom,
    /// No player or league games were available for the comparison
    InsufficientData,
}

impl Rating {
    /// Mirror image of the rating, used for lower-is-better metrics
    pub fn invert(self) -> Self {
        match self {
            Rating::Top => Rating::Bottom,
            Rating::AboveAverage => Rating::BelowAverage,
            Rating::BelowAverage => Rating::AboveAverage,
            Rating::Bottom => Rating::Top,
            Rating::Average => Rating::Average,
            Rating::InsufficientData => Rating::InsufficientData,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Top => "top",
            Rating::AboveAverage => "above_average",
            Rating::Average => "average",
            Rating::BelowAverage => "below_average",
            Rating::Bottom => "bottom",
            Rating::InsufficientData => "insufficient_data",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Top => "top of the league",
            Rating::AboveAverage => "above average",
            Rating::Average => "average",
            Rating::BelowAverage => "below average",
            Rating::Bottom => "bottom of the bucket",
            Rating::InsufficientData => "not enough games",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

/// Snapshot of one metric for one time window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    pub window: String,
    pub player_score: Option<f64>,
    pub league_median: Option<f64>,
    pub league_std_dev: Option<f64>,
    pub rating: Rating,
    pub rating_label: &'static str,
    pub sample_size: usize,
    pub league_sample_size: usize,
}

/// One metric across all requested windows, in request order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricResult {
    pub name: &'static str,
    pub polarity: Polarity,
    pub values: Vec<MetricValue>,
}

impl MetricResult {
    pub fn new(name: &'static str, polarity: Polarity) -> Self {
        Self {
            name,
            polarity,
            values: Vec::new(),
        }
    }

    pub fn push(&mut self, value: MetricValue) {
        self.values.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_is_an_involution() {
        for rating in [
            Rating::Top,
            Rating::AboveAverage,
            Rating::Average,
            Rating::BelowAverage,
            Rating::Bottom,
            Rating::InsufficientData,
        ] {
            assert_eq!(rating.invert().invert(), rating);
        }
    }

    #[test]
    fn test_invert_fixes_neutral_ratings() {
        assert_eq!(Rating::Average.invert(), Rating::Average);
        assert_eq!(Rating::InsufficientData.invert(), Rating::InsufficientData);
        assert_eq!(Rating::Top.invert(), Rating::Bottom);
        assert_eq!(Rating::BelowAverage.invert(), Rating::AboveAverage);
    }

    #[test]
    fn test_rating_serializes_as_camel_case() {
        let json = serde_json::to_string(&Rating::AboveAverage).unwrap();
        assert_eq!(json, "\"aboveAverage\"");
    }
}
