// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes.

/// Exit codes reported by the `occurs` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed (search found at least one hit).
    Success = 0,
    /// Search completed without any hits.
    NoMatches = 1,
    /// Configuration or argument error.
    ConfigError = 2,
    /// Unexpected failure (I/O, malformed data).
    InternalError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
