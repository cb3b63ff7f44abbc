// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! occurs: count keyword occurrences across collections of text records.
//!
//! The core is [`pattern::PatternMatcher`], a bad-character-shift substring
//! counter. The remaining modules load records, generate test data, run
//! searches in parallel, and render reports.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod generate;
pub mod pattern;
pub mod records;
pub mod report;
pub mod search;
pub mod verbose;
