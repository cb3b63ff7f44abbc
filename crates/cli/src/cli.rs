// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

/// Count keyword occurrences across large collections of text records
#[derive(Parser)]
#[command(name = "occurs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "OCCURS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Count keyword occurrences in every stored record
    Search(SearchArgs),
    /// Replace the record store with randomly generated records
    Generate(GenerateArgs),
}

#[derive(clap::Args)]
pub struct SearchArgs {
    /// Keyword to count (empty matches nothing)
    #[arg(value_name = "KEYWORD", default_value = "")]
    pub keyword: String,

    /// CSV file to search
    #[arg(short, long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Match case exactly
    #[arg(short = 's', long, conflicts_with = "ignore_case")]
    pub case_sensitive: bool,

    /// Match regardless of case (default unless configured otherwise)
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Print each matching record's value
    #[arg(long)]
    pub show_content: bool,

    /// Maximum hits to display
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

impl SearchArgs {
    /// Resolve case handling: flags first, then config.
    pub fn ignore_case(&self, config: &Config) -> bool {
        if self.case_sensitive {
            false
        } else if self.ignore_case {
            true
        } else {
            config.search.ignore_case
        }
    }

    /// Resolve the data file: flag first, then config.
    pub fn data_path(&self, config: &Config) -> PathBuf {
        self.data.clone().unwrap_or_else(|| config.data.path.clone())
    }
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// CSV file to write
    #[arg(short, long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Number of records
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Characters per value
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Seed for reproducible values
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    pub fn data_path(&self, config: &Config) -> PathBuf {
        self.data.clone().unwrap_or_else(|| config.data.path.clone())
    }

    pub fn count(&self, config: &Config) -> usize {
        self.count.unwrap_or(config.generate.count)
    }

    pub fn length(&self, config: &Config) -> usize {
        self.length.unwrap_or(config.generate.length)
    }
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
