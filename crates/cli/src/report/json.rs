// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io::Write;

use super::{ReportFormatter, ReportOptions};
use crate::search::SearchOutcome;

/// Pretty-printed array of hits.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn write_to(
        &self,
        writer: &mut dyn Write,
        outcome: &SearchOutcome,
        options: &ReportOptions,
    ) -> anyhow::Result<()> {
        let (visible, _) = options.visible(&outcome.hits);
        serde_json::to_writer_pretty(&mut *writer, visible)?;
        writeln!(writer)?;
        Ok(())
    }
}
