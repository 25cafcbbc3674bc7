// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact substring matchers.
//!
//! Two independent implementations of the same contract: every start offset
//! of a pattern in a text, ascending, overlapping occurrences included.
//! They must agree on every input; the property tests in
//! `tests/property/equivalence.rs` hold them to it.
//!
//! Both work on the UTF-8 bytes of already-normalized text, so offsets are
//! byte offsets and the Boyer-Moore alphabet is exactly 256 symbols.

pub mod boyer_moore;
pub mod kmp;

pub use boyer_moore::{build_bad_char_table, BadCharTable, BoyerMooreMatcher};
pub use kmp::{build_failure_table, FailureTable, KmpMatcher};

use crate::strategy::StrategyId;

/// A pattern with its precomputed table, ready to scan any number of texts.
pub trait PatternMatcher: Send + Sync {
    /// The pattern bytes this matcher was built for.
    fn pattern(&self) -> &[u8];

    /// All start offsets of the pattern in `text`, ascending.
    fn find_all(&self, text: &str) -> Vec<usize>;

    /// Number of occurrences, overlaps included.
    fn count(&self, text: &str) -> usize {
        self.find_all(text).len()
    }
}

/// Closed set of exact matchers, selected by strategy.
#[derive(Debug, Clone)]
pub enum Matcher {
    Kmp(KmpMatcher),
    BoyerMoore(BoyerMooreMatcher),
}

impl Matcher {
    /// Build the matcher for an exact strategy.
    ///
    /// Returns `None` for strategies without an exact matcher (fuzzy).
    pub fn compile(strategy: StrategyId, pattern: &str) -> Option<Self> {
        match strategy {
            StrategyId::Kmp => Some(Matcher::Kmp(KmpMatcher::new(pattern))),
            StrategyId::BoyerMoore => Some(Matcher::BoyerMoore(BoyerMooreMatcher::new(pattern))),
            StrategyId::Fuzzy => None,
        }
    }

    pub fn strategy(&self) -> StrategyId {
        match self {
            Matcher::Kmp(_) => StrategyId::Kmp,
            Matcher::BoyerMoore(_) => StrategyId::BoyerMoore,
        }
    }
}

impl PatternMatcher for Matcher {
    fn pattern(&self) -> &[u8] {
        match self {
            Matcher::Kmp(m) => m.pattern(),
            Matcher::BoyerMoore(m) => m.pattern(),
        }
    }

    fn find_all(&self, text: &str) -> Vec<usize> {
        match self {
            Matcher::Kmp(m) => m.find_all(text),
            Matcher::BoyerMoore(m) => m.find_all(text),
        }
    }
}
