// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boyer-Moore with the bad-character heuristic.
//!
//! The pattern is compared right to left against a window of the text. On a
//! mismatch at pattern position `j`, the window slides so that the rightmost
//! occurrence of the offending text byte lines up under it (or past it, when
//! the byte never occurs in the pattern). On long patterns with a diverse
//! alphabet most windows are rejected after one comparison, which is where
//! the sub-linear average case comes from.
//!
//! # Shift rule
//!
//! | Situation                         | Shift                              |
//! |-----------------------------------|------------------------------------|
//! | mismatch at `j`                   | `max(1, j - last[text[s + j]])`    |
//! | full match, window not at the end | `max(1, m - last[text[s + m]])`    |
//! | full match at the end of the text | `1`                                |
//!
//! The clamp to 1 applies in both mismatch and match branches: a table
//! lookup can exceed `j` (or equal `m`), and a non-positive shift would
//! never terminate.
//!
//! Shifting past a full match by the byte *after* the window never skips an
//! overlapping occurrence: any occurrence starting inside the skipped range
//! would have to place a pattern byte equal to `text[s + m]` to the right of
//! its last occurrence in the pattern.

use tracing::warn;

use super::PatternMatcher;
use crate::contracts::{check_bad_char_table, check_matches_ascending};

/// Alphabet size. The table is indexed by byte value.
pub const ALPHABET_SIZE: usize = 256;

/// Rightmost index of each byte in the pattern, `-1` when absent.
///
/// Size is fixed by the alphabet, not by the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadCharTable {
    last: [isize; ALPHABET_SIZE],
}

impl BadCharTable {
    /// Rightmost index of `byte` in the pattern, or `-1`.
    #[inline]
    pub fn lookup(&self, byte: u8) -> isize {
        self.last[byte as usize]
    }

    /// Number of distinct bytes present in the pattern.
    pub fn distinct(&self) -> usize {
        self.last.iter().filter(|&&idx| idx >= 0).count()
    }
}

impl Default for BadCharTable {
    fn default() -> Self {
        Self {
            last: [-1; ALPHABET_SIZE],
        }
    }
}

/// Build the last-occurrence table for `pattern`.
pub fn build_bad_char_table(pattern: &[u8]) -> BadCharTable {
    let mut table = BadCharTable::default();
    for (i, &byte) in pattern.iter().enumerate() {
        table.last[byte as usize] = i as isize;
    }
    check_bad_char_table(pattern, &table);
    table
}

/// All start offsets of `pattern` in `text`, ascending, overlaps included.
///
/// `table` must have been built from `pattern`.
pub fn search(text: &[u8], pattern: &[u8], table: &BadCharTable) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    let mut matches = Vec::new();

    if m == 0 {
        warn!("empty pattern provided to Boyer-Moore search");
        return matches;
    }
    if n == 0 {
        warn!("empty text provided to Boyer-Moore search");
        return matches;
    }
    if m > n {
        return matches;
    }

    let mut s = 0usize;
    while s <= n - m {
        // Compare right to left; `j` ends as the count of unmatched bytes.
        let mut j = m;
        while j > 0 && pattern[j - 1] == text[s + j - 1] {
            j -= 1;
        }

        if j == 0 {
            matches.push(s);
            s += if s + m < n {
                clamp_shift(m as isize - table.lookup(text[s + m]))
            } else {
                1
            };
        } else {
            let mismatch = j - 1;
            s += clamp_shift(mismatch as isize - table.lookup(text[s + mismatch]));
        }
    }

    check_matches_ascending(&matches, n, m);
    matches
}

#[inline]
fn clamp_shift(shift: isize) -> usize {
    shift.max(1) as usize
}

/// Boyer-Moore matcher with its bad-character table prepared for one pattern.
#[derive(Debug, Clone)]
pub struct BoyerMooreMatcher {
    pattern: Vec<u8>,
    table: BadCharTable,
}

impl BoyerMooreMatcher {
    pub fn new(pattern: &str) -> Self {
        let pattern = pattern.as_bytes().to_vec();
        let table = build_bad_char_table(&pattern);
        Self { pattern, table }
    }

    /// Replace the pattern. The bad-character table is rebuilt.
    pub fn set_pattern(&mut self, pattern: &str) {
        *self = Self::new(pattern);
    }

    pub fn table(&self) -> &BadCharTable {
        &self.table
    }
}

impl PatternMatcher for BoyerMooreMatcher {
    fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    fn find_all(&self, text: &str) -> Vec<usize> {
        search(text.as_bytes(), &self.pattern, &self.table)
    }
}
