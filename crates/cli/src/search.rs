// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel keyword search over a record collection.
//!
//! One [`PatternMatcher`] is built per keyword and shared read-only
//! across rayon workers. Hits are returned in input order.

use rayon::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::config::defaults;
use crate::pattern::PatternMatcher;
use crate::records::Record;

/// Search settings.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Match regardless of case.
    pub ignore_case: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { ignore_case: defaults::search::IGNORE_CASE }
    }
}

/// A record containing at least one occurrence of the keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: Uuid,
    pub string_content: String,
    pub match_times: usize,
}

/// Totals for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub records_scanned: usize,
    pub hits: usize,
    pub total_occurrences: usize,
}

/// Hits and totals for one search.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub hits: Vec<SearchHit>,
    pub summary: SearchSummary,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Search `records` for `keyword`.
///
/// An empty keyword scans nothing and yields no hits.
pub fn search(keyword: &str, records: &[Record], options: SearchOptions) -> SearchOutcome {
    if keyword.is_empty() {
        return SearchOutcome::default();
    }
    let matcher = PatternMatcher::new(keyword, options.ignore_case);
    search_with(&matcher, records)
}

/// Apply a prebuilt matcher to every record.
pub fn search_with(matcher: &PatternMatcher, records: &[Record]) -> SearchOutcome {
    let hits: Vec<SearchHit> = records
        .par_iter()
        .filter_map(|record| {
            let match_times = matcher.count_occurrences(&record.value);
            (match_times > 0).then(|| SearchHit {
                id: record.id,
                string_content: record.value.clone(),
                match_times,
            })
        })
        .collect();

    let summary = SearchSummary {
        records_scanned: records.len(),
        hits: hits.len(),
        total_occurrences: hits.iter().map(|h| h.match_times).sum(),
    };
    tracing::debug!(
        "pattern {:?}: {} hits, {} occurrences in {} records",
        matcher.pattern(),
        summary.hits,
        summary.total_occurrences,
        summary.records_scanned
    );

    SearchOutcome { hits, summary }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
