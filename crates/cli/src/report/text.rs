// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::Write;

use super::{ReportFormatter, ReportOptions};
use crate::search::SearchOutcome;

/// One tab-separated line per hit, then a summary line.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write_to(
        &self,
        writer: &mut dyn Write,
        outcome: &SearchOutcome,
        options: &ReportOptions,
    ) -> anyhow::Result<()> {
        let (visible, hidden) = options.visible(&outcome.hits);

        for hit in visible {
            if options.show_content {
                writeln!(writer, "{}\t{}\t{}", hit.id, hit.match_times, hit.string_content)?;
            } else {
                writeln!(writer, "{}\t{}", hit.id, hit.match_times)?;
            }
        }
        if hidden > 0 {
            writeln!(writer, "... {} more", hidden)?;
        }

        let summary = &outcome.summary;
        writeln!(
            writer,
            "{} of {} records matched ({} occurrences)",
            summary.hits, summary.records_scanned, summary.total_occurrences
        )?;
        Ok(())
    }
}
