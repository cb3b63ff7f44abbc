// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pattern occurrence counter.
//!
//! Right-to-left comparison at each alignment, with skips driven by a
//! last-occurrence (bad character) table:
//! - On mismatch: align the bad character with its rightmost pattern position,
//!   never shifting by less than one.
//! - On a full match: align the character just past the match with its
//!   rightmost pattern position. Shifts shorter than the pattern let
//!   overlapping occurrences be counted.

use std::collections::HashMap;

/// Case-fold text the same way for patterns and haystacks.
///
/// Lowercases one character at a time, so the result never depends on
/// neighboring characters (`Σ` is always `σ`, even at the end of a word).
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// A preprocessed search pattern that counts its occurrences in text.
///
/// Immutable after construction, so one matcher can be shared across threads.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    /// Pattern as stored (folded when `ignore_case`).
    pattern: String,
    /// Pattern characters, indexed by position.
    chars: Vec<char>,
    /// Rightmost index of each character in `chars`.
    last_occurrence: HashMap<char, usize>,
    ignore_case: bool,
}

impl PatternMatcher {
    /// Build a matcher for `pattern`.
    ///
    /// With `ignore_case`, only the folded pattern is kept.
    pub fn new(pattern: &str, ignore_case: bool) -> Self {
        let pattern = if ignore_case { fold_case(pattern) } else { pattern.to_string() };
        let chars: Vec<char> = pattern.chars().collect();
        let last_occurrence = build_last_occurrence(&chars);

        Self { pattern, chars, last_occurrence, ignore_case }
    }

    /// Build a case-insensitive matcher.
    pub fn ignoring_case(pattern: &str) -> Self {
        Self::new(pattern, true)
    }

    /// The stored pattern (folded when case is ignored).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Pattern length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Rightmost index of `c` in the stored pattern, if present.
    pub fn last_occurrence(&self, c: char) -> Option<usize> {
        self.last_occurrence.get(&c).copied()
    }

    /// Count every alignment at which the pattern fully matches `text`.
    ///
    /// Overlapping occurrences are counted: `"aa"` occurs 3 times in `"aaaa"`.
    /// An empty pattern never matches.
    pub fn count_occurrences(&self, text: &str) -> usize {
        if self.chars.is_empty() {
            return 0;
        }

        let text: Vec<char> = if self.ignore_case {
            fold_case(text).chars().collect()
        } else {
            text.chars().collect()
        };

        self.count_in(&text)
    }

    fn count_in(&self, text: &[char]) -> usize {
        let m = self.chars.len();
        let n = text.len();
        let mut count = 0;
        let mut start = 0;

        while start + m <= n {
            // Scan right to left; `j` is one past the index being compared.
            let mut j = m;
            while j > 0 && self.chars[j - 1] == text[start + j - 1] {
                j -= 1;
            }

            if j == 0 {
                count += 1;
                start += if start + m < n {
                    match self.last_occurrence(text[start + m]) {
                        Some(last) => m - last,
                        None => 1,
                    }
                } else {
                    1
                };
            } else {
                let bad = j - 1;
                start += match self.last_occurrence(text[start + bad]) {
                    // Last occurrence right of `bad` would shift backwards.
                    Some(last) => bad.saturating_sub(last).max(1),
                    None => bad + 1,
                };
            }
        }

        count
    }
}

/// Map each character to its rightmost index; later positions overwrite.
fn build_last_occurrence(chars: &[char]) -> HashMap<char, usize> {
    chars.iter().enumerate().map(|(i, &c)| (c, i)).collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
