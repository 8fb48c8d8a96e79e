pub mod console;
pub mod html;
pub mod models;

pub use html::render_html;
pub use models::{Report, SkippedSummoner, SummonerReport};

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::config::OutputFormat;

pub fn render_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Html => render_html(report).context("Failed to render HTML report"),
        OutputFormat::Json => render_json(report),
    }
}

pub fn write_report<P: AsRef<Path>>(report: &Report, path: P, format: OutputFormat) -> Result<()> {
    let path = path.as_ref();
    let document = render(report, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }

    fs::write(path, document).with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!("Wrote {} summoner(s) to {}", report.summoners.len(), path.display());
    Ok(())
}
