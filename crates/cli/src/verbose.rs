// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for diagnostic information.
//!
//! Writes diagnostic output to stderr. Enabled with `--verbose`
//! or `OCCURS_DEBUG=1`.

use std::time::Duration;

/// Environment variable that enables verbose output.
pub const DEBUG_ENV: &str = "OCCURS_DEBUG";

/// Verbose output logger. Writes to stderr when enabled.
/// All output is conditional on verbose mode being enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enabled by `flag` or by `OCCURS_DEBUG` set to anything but `0` or empty.
    pub fn from_flag_or_env(flag: bool) -> Self {
        let env = std::env::var(DEBUG_ENV).ok();
        Self::new(flag || env_enables(env.as_deref()))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr (indented as content under a section).
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("  {}", msg);
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("\n{}:", title);
        }
    }

    /// Print a labeled duration in milliseconds.
    pub fn timing(&self, label: &str, elapsed: Duration) {
        self.log(&format_timing(label, elapsed));
    }
}

fn env_enables(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty() && v != "0")
}

fn format_timing(label: &str, elapsed: Duration) -> String {
    format!("{}: {:.1}ms", label, elapsed.as_secs_f64() * 1000.0)
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
