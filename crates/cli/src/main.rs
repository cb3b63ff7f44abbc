// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use occurs::cli::{Cli, Command};
use occurs::config::{self, Config, ConfigError};
use occurs::discovery;
use occurs::error::ExitCode;
use occurs::generate::GenerateError;

mod cmd_generate;
mod cmd_search;

/// Environment variable holding the tracing filter.
const LOG_ENV: &str = "OCCURS_LOG";

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("occurs: {:#}", err);
            let code = if is_config_error(&err) {
                ExitCode::ConfigError
            } else {
                ExitCode::InternalError
            };
            code.into()
        }
    }
}

/// Errors caused by configuration values rather than by the environment.
fn is_config_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ConfigError>().is_some() || err.downcast_ref::<GenerateError>().is_some()
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = load_config(cli.config.as_deref(), &cwd)?;

    match &cli.command {
        Command::Search(args) => cmd_search::run(cli, args, &config),
        Command::Generate(args) => cmd_generate::run(cli, args, &config),
    }
}

/// Load the explicit config file, or discover one from `cwd`.
fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config, ConfigError> {
    match explicit.map(|p| cwd.join(p)).or_else(|| discovery::find_config(cwd)) {
        Some(path) => config::load_with_warnings(&path),
        None => Ok(Config::default()),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
