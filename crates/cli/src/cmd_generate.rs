// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `occurs generate` command implementation.

use std::time::Instant;

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;

use occurs::cli::{Cli, GenerateArgs};
use occurs::config::Config;
use occurs::error::ExitCode;
use occurs::generate::RecordGenerator;
use occurs::records::{self, ColumnLayout};
use occurs::verbose::VerboseLogger;

/// Run the `occurs generate` command.
pub fn run(cli: &Cli, args: &GenerateArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let verbose = VerboseLogger::from_flag_or_env(cli.verbose);
    let path = args.data_path(config);
    let count = args.count(config);

    let generator = RecordGenerator::new(args.length(config), &config.generate.alphabet)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    verbose.section("Generate");
    verbose.log(&format!("data: {}", path.display()));
    verbose.log(&format!("records: {} x {} chars", count, generator.length()));

    let started = Instant::now();
    let generated = generator.generate(count, &mut rng);
    verbose.timing("generate", started.elapsed());

    let started = Instant::now();
    records::write_records(&path, &ColumnLayout::from(&config.data), &generated)
        .with_context(|| format!("failed to write records to {}", path.display()))?;
    verbose.timing("write", started.elapsed());

    tracing::info!("wrote {} records to {}", generated.len(), path.display());
    Ok(ExitCode::Success)
}
