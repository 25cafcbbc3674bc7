// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Knuth-Morris-Pratt: linear-time exact matching with a failure table.
//!
//! The failure table (`lps`) records, for each prefix of the pattern, the
//! length of its longest proper prefix that is also a suffix. On a mismatch
//! the scan falls back through that table instead of re-reading text, so the
//! text index never moves backwards. Search is O(n), table build is O(m).
//!
//! After a full match the scan falls back to `lps[m - 1]` and keeps going,
//! so overlapping occurrences are reported: `"aa"` in `"aaaa"` matches at
//! 0, 1 and 2.

use tracing::warn;

use super::PatternMatcher;
use crate::contracts::{check_failure_table, check_matches_ascending};

/// Longest-proper-prefix-suffix table for a pattern. Length equals pattern length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FailureTable {
    lps: Vec<usize>,
}

impl FailureTable {
    pub fn len(&self) -> usize {
        self.lps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lps.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.lps
    }
}

/// Build the failure table for `pattern`. An empty pattern gives an empty table.
pub fn build_failure_table(pattern: &[u8]) -> FailureTable {
    let m = pattern.len();
    let mut lps = vec![0usize; m];
    let mut len = 0usize;
    let mut i = 1usize;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    check_failure_table(pattern, &lps);
    FailureTable { lps }
}

/// All start offsets of `pattern` in `text`, ascending, overlaps included.
///
/// `table` must have been built from `pattern`; a table of the wrong length
/// yields no matches.
pub fn search(text: &[u8], pattern: &[u8], table: &FailureTable) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    let mut matches = Vec::new();

    if m == 0 {
        warn!("empty pattern provided to KMP search");
        return matches;
    }
    if n == 0 {
        warn!("empty text provided to KMP search");
        return matches;
    }
    if table.len() != m {
        warn!(
            table_len = table.len(),
            pattern_len = m,
            "failure table built for a different pattern"
        );
        return matches;
    }

    let lps = table.as_slice();
    let mut i = 0usize;
    let mut j = 0usize;

    while i < n {
        if pattern[j] == text[i] {
            i += 1;
            j += 1;
            if j == m {
                matches.push(i - j);
                j = lps[j - 1];
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    check_matches_ascending(&matches, n, m);
    matches
}

/// KMP matcher with its failure table prepared for one pattern.
#[derive(Debug, Clone)]
pub struct KmpMatcher {
    pattern: Vec<u8>,
    table: FailureTable,
}

impl KmpMatcher {
    pub fn new(pattern: &str) -> Self {
        let pattern = pattern.as_bytes().to_vec();
        let table = build_failure_table(&pattern);
        Self { pattern, table }
    }

    /// Replace the pattern. The failure table is rebuilt.
    pub fn set_pattern(&mut self, pattern: &str) {
        *self = Self::new(pattern);
    }

    pub fn table(&self) -> &FailureTable {
        &self.table
    }
}

impl PatternMatcher for KmpMatcher {
    fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    fn find_all(&self, text: &str) -> Vec<usize> {
        search(text.as_bytes(), &self.pattern, &self.table)
    }
}
