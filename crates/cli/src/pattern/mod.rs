// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword occurrence counting.
//!
//! A pattern is preprocessed once into a [`PatternMatcher`], then applied
//! to any number of texts.

pub mod matcher;

pub use matcher::{PatternMatcher, fold_case};
