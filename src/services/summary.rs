use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use log::info;
use std::path::Path;

use crate::config::AppConfig;
use crate::domain::{self, TimeWindow};
use crate::input;
use crate::report::{self, Report};
use crate::services::aggregation::ReportBuilder;
use crate::store::SqliteStore;

/// Runs one full summary: windows, ids, metrics, output file
pub struct SummaryService {
    config: AppConfig,
}

impl SummaryService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<Report> {
        self.run_on(Local::now().date_naive())
    }

    pub fn run_on(&self, today: NaiveDate) -> Result<Report> {
        info!("=== Building league summary ===");

        // Window errors are fatal and must surface before any summoner is processed
        let windows = self.build_windows(today)?;
        for window in &windows {
            info!("  Window {}: [{}, {})", window.label, window.start, window.end);
        }

        let summoners_path = &self.config.input.summoners_path;
        info!("Loading summoner ids from {}", summoners_path);
        let summoner_ids = input::load_summoner_ids(summoners_path)?;
        info!("Done; loaded {} summoner ids", summoner_ids.len());

        let store = self.open_store()?;
        let builder = ReportBuilder::new(&store, self.config.windows.baseline);
        let report = builder.build_report(&summoner_ids, &windows, today);

        report::write_report(&report, &self.config.output.path, self.config.output.format)?;
        report::console::print_summary(&report);

        info!("=== Summary complete ===");
        Ok(report)
    }

    fn build_windows(&self, today: NaiveDate) -> Result<Vec<TimeWindow>> {
        let settings = &self.config.windows;
        let season_start = domain::parse_season_start(&settings.season_start)?;
        let windows = domain::standard_windows(today, &settings.day_ranges, season_start)
            .context("Invalid reporting windows")?;
        Ok(windows)
    }

    fn open_store(&self) -> Result<SqliteStore> {
        let database_path = &self.config.store.database_path;
        if !Path::new(database_path).exists() {
            anyhow::bail!(
                "Database {} does not exist; run the `setup` command first",
                database_path
            );
        }

        SqliteStore::open(database_path)
            .with_context(|| format!("Failed to open game store at {}", database_path))
    }
}
