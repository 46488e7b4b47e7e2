use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;

use crate::batch::Sample;
use crate::engine::{MatchResult, SearchStats};
use crate::shift_table::ShiftTable;

pub fn render_result(result: &MatchResult) -> String {
    match result.shift() {
        Some(shift) => format!("{} Pattern occurs at shift = {}", "Found a match!".green().bold(), shift),
        None => format!("{}", "Pattern not found!".red().bold()),
    }
}

pub fn render_stats(stats: &SearchStats) -> String {
    format!(
        "windows: {}, comparisons: {}, lookups: {}, floored: {}, capped: {}",
        stats.windows, stats.comparisons, stats.lookups, stats.floored, stats.capped
    )
}

pub fn render_table(table: &ShiftTable) -> String {
    if table.is_empty() {
        return "(empty pattern)".dimmed().to_string();
    }
    let rows = table
        .entries()
        .into_iter()
        .map(|(ch, advance)| format!("  {:?} -> {}", ch, advance))
        .join("\n");
    format!("{}\n  * -> {}", rows, table.default_advance())
}

#[derive(Serialize)]
struct JsonLine<'a> {
    text: &'a str,
    pattern: &'a str,
    #[serde(flatten)]
    result: &'a MatchResult,
}

pub fn render_json(text: &str, pattern: &str, result: &MatchResult) -> serde_json::Result<String> {
    serde_json::to_string(&JsonLine { text, pattern, result })
}

pub fn render_sample(sample: &Sample, result: &MatchResult) -> String {
    let status = if result.found() == sample.expect_found {
        "PASS".green()
    } else {
        "FAIL".red()
    };
    let outcome = match result.shift() {
        Some(shift) => format!("found at {}", shift),
        None => "not found".to_string(),
    };
    format!("[{}] {:?} in {:?}: {}", status, sample.pattern, sample.text, outcome)
}
