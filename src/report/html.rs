use std::fmt::{self, Write};

use super::models::{Report, SummonerReport};
use crate::rating::{MetricResult, MetricValue};

const STYLE: &str = "body{font-family:sans-serif}table{border-collapse:collapse;margin-bottom:1em}\
th,td{border:1px solid #ccc;padding:4px 8px;text-align:right}th:first-child,td:first-child{text-align:left}";

pub fn render_html(report: &Report) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head><meta charset=\"utf-8\"><title>League summary</title><style>{}</style></head>", STYLE)?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h1>League summary</h1>")?;
    writeln!(out, "<p class=\"generated\">Generated on {}</p>", report.generated_on)?;

    for summoner_report in report.summoners.values() {
        write_summoner(&mut out, summoner_report)?;
    }

    if !report.skipped.is_empty() {
        writeln!(out, "<section class=\"skipped\">")?;
        writeln!(out, "<h2>Skipped summoners</h2>")?;
        writeln!(out, "<ul>")?;
        for skipped in &report.skipped {
            writeln!(out, "<li>#{}: {}</li>", skipped.summoner_id, escape(&skipped.reason))?;
        }
        writeln!(out, "</ul>")?;
        writeln!(out, "</section>")?;
    }

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(out)
}

fn write_summoner(out: &mut String, summoner_report: &SummonerReport) -> fmt::Result {
    let summoner = &summoner_report.summoner;

    writeln!(out, "<section class=\"summoner\" data-summoner-id=\"{}\">", summoner.summoner_id)?;
    writeln!(out, "<h2>{} <small>{}</small></h2>", escape(&summoner.name), summoner.league())?;

    for metric in &summoner_report.metrics {
        write_metric(out, metric)?;
    }

    writeln!(out, "</section>")
}

fn write_metric(out: &mut String, metric: &MetricResult) -> fmt::Result {
    writeln!(out, "<table class=\"metric\">")?;
    writeln!(out, "<caption>{}</caption>", escape(metric.name))?;
    writeln!(out, "<tr><th>Window</th><th>You</th><th>League median</th><th>Rating</th><th>Games</th></tr>")?;

    for value in &metric.values {
        write_value_row(out, value)?;
    }

    writeln!(out, "</table>")
}

fn write_value_row(out: &mut String, value: &MetricValue) -> fmt::Result {
    writeln!(
        out,
        "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        value.rating.as_str(),
        escape(&value.window),
        format_score(value.player_score),
        format_score(value.league_median),
        value.rating_label,
        value.sample_size
    )
}

fn format_score(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{:.1}", score),
        None => "n/a".to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>Tom & \"Jerry\"</b>"), "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(140.0)), "140.0");
        assert_eq!(format_score(Some(2.26)), "2.3");
        assert_eq!(format_score(None), "n/a");
    }
}
