use chrono::NaiveDate;
use log::{error, info, warn};

use crate::config::LeagueBaseline;
use crate::domain::{GameRecord, Summoner, SummonerId, TimeWindow};
use crate::errors::StoreError;
use crate::rating::{build_metric, MetricResult, METRIC_DEFINITIONS};
use crate::report::{Report, SummonerReport};
use crate::store::GameStore;

/// Builds multi-window metric series for summoners, one at a time
pub struct ReportBuilder<'a, S: GameStore> {
    store: &'a S,
    baseline: LeagueBaseline,
}

impl<'a, S: GameStore> ReportBuilder<'a, S> {
    pub fn new(store: &'a S, baseline: LeagueBaseline) -> Self {
        Self { store, baseline }
    }

    /// Builds a report for every id. A summoner whose data cannot be fetched
    /// is recorded in `Report::skipped` and does not stop the others.
    pub fn build_report(
        &self,
        summoner_ids: &[SummonerId],
        windows: &[TimeWindow],
        generated_on: NaiveDate,
    ) -> Report {
        let mut report = Report::new(generated_on, windows.to_vec(), self.baseline);

        for (idx, &summoner_id) in summoner_ids.iter().enumerate() {
            if report.contains(summoner_id) {
                warn!("Summoner #{} listed more than once, skipping duplicate", summoner_id);
                continue;
            }

            info!("Summoner #{} ({}/{})", summoner_id, idx + 1, summoner_ids.len());

            match self.build_summoner_report(summoner_id, windows) {
                Ok(summoner_report) => {
                    if !report.insert(summoner_report) {
                        warn!("Summoner #{} already in report, keeping first result", summoner_id);
                    }
                }
                Err(e) => {
                    error!("Skipping summoner #{}: {}", summoner_id, e);
                    report.skip(summoner_id, e.to_string());
                }
            }
        }

        report
    }

    pub fn build_summoner_report(
        &self,
        summoner_id: SummonerId,
        windows: &[TimeWindow],
    ) -> Result<SummonerReport, StoreError> {
        let summoner = self.store.fetch_summoner(summoner_id)?;
        let metrics = self.build_summoner_metrics(&summoner, windows)?;
        Ok(SummonerReport { summoner, metrics })
    }

    /// One `MetricResult` per tracked metric, each holding one value per window
    /// in the order the windows were given.
    pub fn build_summoner_metrics(
        &self,
        summoner: &Summoner,
        windows: &[TimeWindow],
    ) -> Result<Vec<MetricResult>, StoreError> {
        let mut metrics: Vec<MetricResult> = METRIC_DEFINITIONS
            .iter()
            .map(|definition| MetricResult::new(definition.name, definition.polarity))
            .collect();

        for window in windows {
            let (player_games, league_games) = self.fetch_window(summoner, window)?;

            info!(
                "  [window={}] summoner games: {}, league games: {}",
                window.label,
                player_games.len(),
                league_games.len()
            );

            for (metric, definition) in metrics.iter_mut().zip(METRIC_DEFINITIONS.iter()) {
                metric.push(build_metric(&window.label, &player_games, &league_games, definition));
            }
        }

        Ok(metrics)
    }

    fn fetch_window(
        &self,
        summoner: &Summoner,
        window: &TimeWindow,
    ) -> Result<(Vec<GameRecord>, Vec<GameRecord>), StoreError> {
        let player_games = self.store.fetch_games_by_summoner(summoner.summoner_id, window)?;
        let mut league_games =
            self.store
                .fetch_games_by_tier_division(summoner.tier, summoner.division, window)?;

        if self.baseline == LeagueBaseline::ExcludeOwnGames {
            league_games.retain(|game| game.summoner_id != summoner.summoner_id);
        }

        Ok((player_games, league_games))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Division, PlayerStats, Tier};
    use crate::rating::Rating;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        summoners: HashMap<SummonerId, Summoner>,
        games: Vec<GameRecord>,
        broken: Vec<SummonerId>,
    }

    impl GameStore for MemoryStore {
        fn fetch_summoner(&self, summoner_id: SummonerId) -> Result<Summoner, StoreError> {
            if self.broken.contains(&summoner_id) {
                return Err(StoreError::Query(rusqlite::Error::InvalidQuery));
            }
            self.summoners
                .get(&summoner_id)
                .cloned()
                .ok_or(StoreError::SummonerNotFound(summoner_id))
        }

        fn fetch_games_by_summoner(
            &self,
            summoner_id: SummonerId,
            window: &TimeWindow,
        ) -> Result<Vec<GameRecord>, StoreError> {
            Ok(self
                .games
                .iter()
                .filter(|g| g.summoner_id == summoner_id && window.contains(g.game_date))
                .cloned()
                .collect())
        }

        fn fetch_games_by_tier_division(
            &self,
            tier: Tier,
            division: Division,
            window: &TimeWindow,
        ) -> Result<Vec<GameRecord>, StoreError> {
            Ok(self
                .games
                .iter()
                .filter(|g| g.tier == tier && g.division == division && window.contains(g.game_date))
                .cloned()
                .collect())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn summoner(summoner_id: SummonerId) -> Summoner {
        Summoner {
            summoner_id,
            name: format!("summoner-{}", summoner_id),
            tier: Tier::Gold,
            division: Division(2),
        }
    }

    fn game(game_id: i64, summoner_id: SummonerId, game_date: NaiveDate, minions_killed: i32) -> GameRecord {
        GameRecord {
            game_id,
            summoner_id,
            game_date,
            tier: Tier::Gold,
            division: Division(2),
            stats: PlayerStats {
                minions_killed,
                deaths: 4,
                wards_placed: 8,
                wards_cleared: 1,
            },
        }
    }

    fn store_with_player_and_league() -> MemoryStore {
        let mut store = MemoryStore::default();
        store.summoners.insert(1, summoner(1));
        store.summoners.insert(2, summoner(2));

        for (idx, cs) in [120, 150, 140].into_iter().enumerate() {
            store.games.push(game(idx as i64, 1, date(2015, 3, 9), cs));
        }
        for (idx, cs) in [100, 110, 105, 120, 300].into_iter().enumerate() {
            store.games.push(game(100 + idx as i64, 50 + idx as i64, date(2015, 3, 9), cs));
        }
        store
    }

    #[test]
    fn test_one_value_per_window_in_request_order() {
        let store = store_with_player_and_league();
        let builder = ReportBuilder::new(&store, LeagueBaseline::ExcludeOwnGames);
        let windows = vec![
            TimeWindow::new("Season", date(2015, 1, 21), date(2015, 3, 11)).unwrap(),
            TimeWindow::new("Empty", date(2014, 1, 1), date(2014, 2, 1)).unwrap(),
        ];

        let metrics = builder.build_summoner_metrics(&summoner(1), &windows).unwrap();

        let names: Vec<&str> = metrics.iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Creep score", "Deaths", "Wards placed", "Wards cleared"]);

        for metric in &metrics {
            assert_eq!(metric.values.len(), 2);
            assert_eq!(metric.values[0].window, "Season");
            assert_eq!(metric.values[1].window, "Empty");
            assert_eq!(metric.values[1].sample_size, 0);
            assert_eq!(metric.values[1].rating, Rating::InsufficientData);
        }

        let creep_score = &metrics[0].values[0];
        assert_eq!(creep_score.player_score, Some(140.0));
        assert_eq!(creep_score.league_median, Some(110.0));
        assert_eq!(creep_score.rating, Rating::AboveAverage);
    }

    #[test]
    fn test_overlapping_windows_are_computed_independently() {
        let store = store_with_player_and_league();
        let builder = ReportBuilder::new(&store, LeagueBaseline::ExcludeOwnGames);
        let window = TimeWindow::new("Week", date(2015, 3, 4), date(2015, 3, 11)).unwrap();

        let metrics = builder
            .build_summoner_metrics(&summoner(1), &[window.clone(), window])
            .unwrap();

        assert_eq!(metrics[0].values.len(), 2);
        assert_eq!(metrics[0].values[0], metrics[0].values[1]);
    }

    #[test]
    fn test_baseline_excludes_own_games() {
        let store = store_with_player_and_league();
        let window = TimeWindow::new("Season", date(2015, 1, 21), date(2015, 3, 11)).unwrap();

        let excluded = ReportBuilder::new(&store, LeagueBaseline::ExcludeOwnGames)
            .build_summoner_metrics(&summoner(1), std::slice::from_ref(&window))
            .unwrap();
        assert_eq!(excluded[0].values[0].league_sample_size, 5);
        assert_eq!(excluded[0].values[0].league_median, Some(110.0));

        let included = ReportBuilder::new(&store, LeagueBaseline::IncludeOwnGames)
            .build_summoner_metrics(&summoner(1), std::slice::from_ref(&window))
            .unwrap();
        assert_eq!(included[0].values[0].league_sample_size, 8);
        assert_eq!(included[0].values[0].league_median, Some(120.0));
    }

    #[test]
    fn test_failed_summoner_does_not_abort_report() {
        let mut store = store_with_player_and_league();
        store.broken.push(3);
        let builder = ReportBuilder::new(&store, LeagueBaseline::ExcludeOwnGames);
        let windows = vec![TimeWindow::new("Season", date(2015, 1, 21), date(2015, 3, 11)).unwrap()];

        let report = builder.build_report(&[3, 1, 404, 2], &windows, date(2015, 3, 10));

        let ids: Vec<SummonerId> = report.summoners.keys().cloned().collect();
        assert_eq!(ids, vec![1, 2]);

        let skipped: Vec<SummonerId> = report.skipped.iter().map(|s| s.summoner_id).collect();
        assert_eq!(skipped, vec![3, 404]);
        assert!(report.skipped[1].reason.contains("not found"));
    }

    #[test]
    fn test_duplicate_ids_are_built_once() {
        let store = store_with_player_and_league();
        let builder = ReportBuilder::new(&store, LeagueBaseline::ExcludeOwnGames);
        let windows = vec![TimeWindow::new("Season", date(2015, 1, 21), date(2015, 3, 11)).unwrap()];

        let report = builder.build_report(&[1, 1], &windows, date(2015, 3, 10));

        assert_eq!(report.summoners.len(), 1);
        assert!(report.skipped.is_empty());
        assert_eq!(report.windows, windows);
    }

    #[test]
    fn test_duplicate_failed_id_is_skipped_once() {
        let store = store_with_player_and_league();
        let builder = ReportBuilder::new(&store, LeagueBaseline::ExcludeOwnGames);
        let windows = vec![TimeWindow::new("Season", date(2015, 1, 21), date(2015, 3, 11)).unwrap()];

        let report = builder.build_report(&[404, 1, 404], &windows, date(2015, 3, 10));

        assert_eq!(report.summoners.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].summoner_id, 404);
    }
}
