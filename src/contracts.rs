// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for matcher tables, match lists, and rankings.
//!
//! Debug-mode assertions only: zero-cost in release builds. They check the
//! structural invariants every caller relies on, close to where the data is
//! produced, so a broken table fails at construction instead of as a wrong
//! count three layers up.
//!
//! | Contract                   | Invariant                                         |
//! |----------------------------|---------------------------------------------------|
//! | `check_failure_table`      | `lps[0] == 0`, `lps[i] <= i`, `lps[i] <= lps[i-1] + 1`, prefix == suffix |
//! | `check_bad_char_table`     | one entry per distinct pattern byte, rightmost index |
//! | `check_matches_ascending`  | strictly ascending, every window inside the text  |
//! | `check_ranking_order`      | score descending, corpus index ascending on ties  |

use crate::matcher::BadCharTable;
use crate::types::RankedResult;

// ============================================================================
// MATCHER TABLE CONTRACTS
// ============================================================================

/// Check a KMP failure table against its pattern.
///
/// # Panics (debug builds only)
/// Panics if the length differs from the pattern, `lps[0] != 0`, any entry
/// grows by more than one or reaches its own index, or the recorded prefix
/// is not also a suffix.
#[inline]
pub fn check_failure_table(pattern: &[u8], lps: &[usize]) {
    debug_assert_eq!(
        lps.len(),
        pattern.len(),
        "Contract violation: failure table length {} != pattern length {}",
        lps.len(),
        pattern.len()
    );

    if let Some(&first) = lps.first() {
        debug_assert_eq!(first, 0, "Contract violation: lps[0] = {} (expected 0)", first);
    }

    for i in 1..lps.len() {
        debug_assert!(
            lps[i] <= i,
            "Contract violation: lps[{}] = {} is not a proper prefix",
            i,
            lps[i]
        );
        debug_assert!(
            lps[i] <= lps[i - 1] + 1,
            "Contract violation: lps[{}] = {} grew by more than one from {}",
            i,
            lps[i],
            lps[i - 1]
        );
        debug_assert!(
            lps[i] > i || pattern[..lps[i]] == pattern[i + 1 - lps[i]..=i],
            "Contract violation: lps[{}] = {} is not a border of the prefix",
            i,
            lps[i]
        );
    }
}

/// Check a Boyer-Moore bad-character table against its pattern.
///
/// # Panics (debug builds only)
/// Panics if a pattern byte does not map to its rightmost index, or a byte
/// absent from the pattern has an entry.
#[inline]
pub fn check_bad_char_table(pattern: &[u8], table: &BadCharTable) {
    if !cfg!(debug_assertions) {
        return;
    }
    for byte in 0..=u8::MAX {
        let expected = pattern
            .iter()
            .rposition(|&b| b == byte)
            .map_or(-1, |i| i as isize);
        debug_assert_eq!(
            table.lookup(byte),
            expected,
            "Contract violation: bad-char table entry for byte {:#04x}",
            byte
        );
    }
}

// ============================================================================
// SEARCH CONTRACTS
// ============================================================================

/// Check that match offsets are strictly ascending and in bounds.
///
/// # Panics (debug builds only)
/// Panics if offsets repeat, go backwards, or a match window runs past the
/// end of a text of length `text_len` for a pattern of length `pattern_len`.
#[inline]
pub fn check_matches_ascending(matches: &[usize], text_len: usize, pattern_len: usize) {
    for window in matches.windows(2) {
        debug_assert!(
            window[0] < window[1],
            "Contract violation: match offsets not ascending ({} then {})",
            window[0],
            window[1]
        );
    }
    if let Some(&last) = matches.last() {
        debug_assert!(
            last + pattern_len <= text_len,
            "Contract violation: match at {} overruns text of length {}",
            last,
            text_len
        );
    }
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that ranked results are ordered by (score desc, corpus index asc)
/// and that each score equals the sum of its keyword counts.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_ranking_order(results: &[RankedResult]) {
    for result in results {
        debug_assert_eq!(
            result.score,
            result.matches.total(),
            "Contract violation: score {} != keyword total {} for entry {}",
            result.score,
            result.matches.total(),
            result.corpus_index
        );
    }
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        debug_assert!(
            a.score > b.score || (a.score == b.score && a.corpus_index < b.corpus_index),
            "Contract violation: ranking out of order at corpus indexes {} and {}",
            a.corpus_index,
            b.corpus_index
        );
    }
}
