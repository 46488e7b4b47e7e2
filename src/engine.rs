use serde::Serialize;
use tracing::{debug, trace};

use crate::config::{SearchConfig, TablePolicy};
use crate::error::SearchError;
use crate::normalize::normalize;
use crate::shift_table::ShiftTable;

/// Outcome of one search: found at a shift into the normalized text, or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    found: bool,
    shift: Option<usize>,
}

impl MatchResult {
    pub fn at(shift: usize) -> Self {
        MatchResult {
            found: true,
            shift: Some(shift),
        }
    }

    pub fn not_found() -> Self {
        MatchResult {
            found: false,
            shift: None,
        }
    }

    pub fn found(&self) -> bool {
        self.found
    }

    pub fn shift(&self) -> Option<usize> {
        self.shift
    }
}

/// Counters collected while scanning one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub windows: usize,
    pub comparisons: usize,
    pub lookups: usize,
    pub table_builds: usize,
    /// Mismatches where the table asked for less than one position.
    pub floored: usize,
    /// Mismatches where the table asked to jump past a possible alignment.
    pub capped: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Searcher { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn search(&self, text: &str, pattern: &str) -> Result<MatchResult, SearchError> {
        self.search_with_stats(text, pattern).map(|(result, _)| result)
    }

    pub fn search_with_stats(
        &self,
        text: &str,
        pattern: &str,
    ) -> Result<(MatchResult, SearchStats), SearchError> {
        let text = normalize(text);
        let pattern = normalize(pattern);
        let mut stats = SearchStats::default();

        if text.is_empty() || pattern.is_empty() {
            debug!(text_len = text.len(), pattern_len = pattern.len(), "empty input, nothing to search");
            return Ok((MatchResult::not_found(), stats));
        }

        let result = self.scan(&text, &pattern, &mut stats)?;
        debug!(
            found = result.found(),
            shift = ?result.shift(),
            windows = stats.windows,
            comparisons = stats.comparisons,
            "search finished"
        );
        Ok((result, stats))
    }

    fn scan(
        &self,
        text: &[char],
        pattern: &[char],
        stats: &mut SearchStats,
    ) -> Result<MatchResult, SearchError> {
        let n = text.len();
        let m = pattern.len();

        let mut table = match self.config.table_policy {
            TablePolicy::Precomputed => {
                stats.table_builds += 1;
                Some(ShiftTable::build(pattern))
            }
            TablePolicy::PerMismatch => None,
        };

        let mut shift = 0;

        while shift + m <= n {
            if let Some(limit) = self.config.step_limit {
                if stats.windows >= limit {
                    return Err(SearchError::DidNotConverge {
                        steps: stats.windows,
                        shift,
                    });
                }
            }
            stats.windows += 1;

            // Scan from right to left; j is one past the index being compared
            let mut j = m;
            while j > 0 {
                stats.comparisons += 1;
                if text[shift + j - 1] != pattern[j - 1] {
                    break;
                }
                j -= 1;
            }

            if j == 0 {
                return Ok(MatchResult::at(shift));
            }

            let i = j - 1;
            let bad = text[shift + i];

            if self.config.table_policy == TablePolicy::PerMismatch {
                stats.table_builds += 1;
                table = Some(ShiftTable::build(pattern));
            }
            let table = table.get_or_insert_with(|| ShiftTable::build(pattern));

            stats.lookups += 1;
            let proposed = table.advance_for(bad);
            let bound = table.safe_bound(bad, i);
            let advance = proposed.clamp(1, bound);

            if proposed == 0 {
                stats.floored += 1;
            } else if proposed > bound {
                stats.capped += 1;
            }

            trace!(shift, mismatch_at = i, %bad, proposed, advance, "mismatch");
            shift += advance;
        }

        Ok(MatchResult::not_found())
    }
}

/// Search `text` for `pattern` with the default configuration.
pub fn search(text: &str, pattern: &str) -> MatchResult {
    let text = normalize(text);
    let pattern = normalize(pattern);
    if text.is_empty() || pattern.is_empty() {
        return MatchResult::not_found();
    }

    let mut stats = SearchStats::default();
    // Without a step limit the scan has no error path
    Searcher::default()
        .scan(&text, &pattern, &mut stats)
        .unwrap_or_else(|_| MatchResult::not_found())
}
