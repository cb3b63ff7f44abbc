// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search result reporting.
//!
//! Renders search hits as text or JSON.

mod json;
mod text;

use std::io::Write;

use crate::cli::OutputFormat;
use crate::search::{SearchHit, SearchOutcome};

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Presentation settings shared by all formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Include each record's value in text output.
    pub show_content: bool,
    /// Maximum hits to print (None = all).
    pub limit: Option<usize>,
}

impl ReportOptions {
    /// The hits to print, and how many were left out.
    pub fn visible<'a>(&self, hits: &'a [SearchHit]) -> (&'a [SearchHit], usize) {
        match self.limit {
            Some(limit) if limit < hits.len() => (&hits[..limit], hits.len() - limit),
            _ => (hits, 0),
        }
    }
}

/// Trait for writing search outcomes in a specific output format.
pub trait ReportFormatter {
    fn write_to(
        &self,
        writer: &mut dyn Write,
        outcome: &SearchOutcome,
        options: &ReportOptions,
    ) -> anyhow::Result<()>;
}

fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Write a report to `writer`.
pub fn format_report_to<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    outcome: &SearchOutcome,
    options: &ReportOptions,
) -> anyhow::Result<()> {
    formatter(format).write_to(writer, outcome, options)
}

/// Format a report into a string.
pub fn format_report(
    format: OutputFormat,
    outcome: &SearchOutcome,
    options: &ReportOptions,
) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    format_report_to(&mut buf, format, outcome, options)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
