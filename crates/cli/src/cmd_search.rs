// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `occurs search` command implementation.
//!
//! Loads the record store, counts the keyword in every record, and reports
//! the records with at least one occurrence.

use std::io::Write;
use std::time::Instant;

use anyhow::Context;

use occurs::cli::{Cli, SearchArgs};
use occurs::config::Config;
use occurs::error::ExitCode;
use occurs::pattern::PatternMatcher;
use occurs::records::{self, ColumnLayout};
use occurs::report::{self, ReportOptions};
use occurs::search::{self, SearchOutcome};
use occurs::verbose::VerboseLogger;

/// Run the `occurs search` command.
pub fn run(cli: &Cli, args: &SearchArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let verbose = VerboseLogger::from_flag_or_env(cli.verbose);
    let ignore_case = args.ignore_case(config);

    let outcome = if args.keyword.is_empty() {
        tracing::info!("empty keyword, skipping record store");
        SearchOutcome::default()
    } else {
        let path = args.data_path(config);
        let layout = ColumnLayout::from(&config.data);

        verbose.section("Search");
        verbose.log(&format!("data: {}", path.display()));
        verbose.log(&format!("keyword: {:?} (ignore case: {})", args.keyword, ignore_case));

        let started = Instant::now();
        let records = records::read_records(&path, &layout)
            .with_context(|| format!("failed to load records from {}", path.display()))?;
        verbose.timing(&format!("read {} records", records.len()), started.elapsed());

        let started = Instant::now();
        let matcher = PatternMatcher::new(&args.keyword, ignore_case);
        let outcome = search::search_with(&matcher, &records);
        verbose.timing("scan", started.elapsed());
        outcome
    };

    let options = ReportOptions { show_content: args.show_content, limit: args.limit };
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    report::format_report_to(&mut handle, args.output, &outcome, &options)?;
    handle.flush()?;

    Ok(if outcome.is_empty() { ExitCode::NoMatches } else { ExitCode::Success })
}
