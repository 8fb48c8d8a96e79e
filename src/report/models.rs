use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::LeagueBaseline;
use crate::domain::{Summoner, SummonerId, TimeWindow};
use crate::rating::MetricResult;

/// Everything computed for one summoner
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerReport {
    pub summoner: Summoner,
    pub metrics: Vec<MetricResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedSummoner {
    pub summoner_id: SummonerId,
    pub reason: String,
}

/// Final output of a run, keyed by summoner id in ascending order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_on: NaiveDate,
    pub baseline: LeagueBaseline,
    pub windows: Vec<TimeWindow>,
    pub summoners: BTreeMap<SummonerId, SummonerReport>,
    pub skipped: Vec<SkippedSummoner>,
}

impl Report {
    pub fn new(generated_on: NaiveDate, windows: Vec<TimeWindow>, baseline: LeagueBaseline) -> Self {
        Self {
            generated_on,
            baseline,
            windows,
            summoners: BTreeMap::new(),
            skipped: Vec::new(),
        }
    }

    /// Inserts a summoner's results. Existing entries are never overwritten;
    /// returns `false` if the id was already present.
    pub fn insert(&mut self, summoner_report: SummonerReport) -> bool {
        let summoner_id = summoner_report.summoner.summoner_id;
        if self.summoners.contains_key(&summoner_id) {
            return false;
        }
        self.summoners.insert(summoner_id, summoner_report);
        true
    }

    pub fn skip(&mut self, summoner_id: SummonerId, reason: impl Into<String>) {
        self.skipped.push(SkippedSummoner {
            summoner_id,
            reason: reason.into(),
        });
    }

    /// True once the id has been either built or skipped
    pub fn contains(&self, summoner_id: SummonerId) -> bool {
        self.summoners.contains_key(&summoner_id)
            || self.skipped.iter().any(|s| s.summoner_id == summoner_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Division, Tier};

    fn report() -> Report {
        let generated_on = NaiveDate::from_ymd_opt(2015, 3, 10).unwrap();
        Report::new(generated_on, Vec::new(), LeagueBaseline::ExcludeOwnGames)
    }

    fn summoner_report(summoner_id: SummonerId, name: &str) -> SummonerReport {
        SummonerReport {
            summoner: Summoner {
                summoner_id,
                name: name.to_string(),
                tier: Tier::Gold,
                division: Division(2),
            },
            metrics: Vec::new(),
        }
    }

    #[test]
    fn test_insert_never_overwrites() {
        let mut report = report();

        assert!(report.insert(summoner_report(1, "first")));
        assert!(!report.insert(summoner_report(1, "second")));
        assert_eq!(report.summoners[&1].summoner.name, "first");
    }

    #[test]
    fn test_contains_covers_skipped_ids() {
        let mut report = report();
        report.skip(404, "summoner 404 not found");

        assert!(report.contains(404));
        assert!(!report.contains(1));
    }
}
