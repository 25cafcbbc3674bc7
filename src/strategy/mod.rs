// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Strategy selection: algorithm name → matcher → occurrence count.
//!
//! A closed set: two exact strategies and one reserved approximate one.
//! The outcome of a dispatch is a `SearchOutcome`, never a bare integer,
//! so "found nothing", "no such strategy" and "strategy not available" can
//! not be confused with each other or with a count.
//!
//! | Call                               | Outcome                 |
//! |------------------------------------|-------------------------|
//! | exact strategy, ≥1 occurrence      | `Matches(n)`            |
//! | exact strategy, 0 occurrences      | `AwaitingFallback`      |
//! | `"fuzzy"` called directly          | `Unavailable`           |
//! | unknown identifier                 | `InvalidStrategy`       |

pub mod fuzzy;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use fuzzy::FuzzyMatcher;

use crate::error::ScanError;
use crate::matcher::{Matcher, PatternMatcher};
use crate::search::DocumentText;

/// Search algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyId {
    /// Knuth-Morris-Pratt
    #[value(name = "kmp")]
    Kmp,
    /// Boyer-Moore, bad-character rule
    #[value(name = "bm", alias = "boyer-moore")]
    #[serde(rename = "bm")]
    BoyerMoore,
    /// Approximate matching (reserved)
    #[value(name = "fuzzy")]
    Fuzzy,
}

impl StrategyId {
    pub const ALL: [StrategyId; 3] = [StrategyId::Kmp, StrategyId::BoyerMoore, StrategyId::Fuzzy];

    pub fn name(self) -> &'static str {
        match self {
            StrategyId::Kmp => "kmp",
            StrategyId::BoyerMoore => "bm",
            StrategyId::Fuzzy => FuzzyMatcher::NAME,
        }
    }

    /// Human-readable algorithm name for summaries.
    pub fn label(self) -> &'static str {
        match self {
            StrategyId::Kmp => "KMP",
            StrategyId::BoyerMoore => "Boyer-Moore",
            StrategyId::Fuzzy => "Fuzzy",
        }
    }

    /// Whether this strategy has an exact matcher.
    pub fn is_exact(self) -> bool {
        !matches!(self, StrategyId::Fuzzy)
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyId {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kmp" => Ok(StrategyId::Kmp),
            "bm" | "boyer-moore" | "boyermoore" => Ok(StrategyId::BoyerMoore),
            "fuzzy" => Ok(StrategyId::Fuzzy),
            _ => Err(ScanError::InvalidStrategy(s.to_string())),
        }
    }
}

/// Result of one strategy dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Exact occurrences found (always ≥ 1).
    Matches(usize),
    /// Exact search found nothing; the approximate fallback is reserved.
    AwaitingFallback,
    /// The identifier names no strategy.
    InvalidStrategy,
    /// The strategy exists but cannot be called directly.
    Unavailable,
}

impl SearchOutcome {
    /// Outcome for an exact count.
    pub fn from_count(count: usize) -> Self {
        if count > 0 {
            SearchOutcome::Matches(count)
        } else {
            SearchOutcome::AwaitingFallback
        }
    }

    /// Occurrence count for aggregation; every non-match outcome counts 0.
    pub fn count(self) -> usize {
        match self {
            SearchOutcome::Matches(n) => n,
            _ => 0,
        }
    }

    pub fn is_match(self) -> bool {
        matches!(self, SearchOutcome::Matches(_))
    }
}

/// Dispatches searches to the matcher named by a strategy identifier.
#[derive(Debug, Clone, Default)]
pub struct StrategyRegistry {
    fuzzy: FuzzyMatcher,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an identifier, or `None` if it names no strategy.
    pub fn resolve(&self, id: &str) -> Option<StrategyId> {
        id.parse().ok()
    }

    /// Strategies that can be passed to `search`.
    pub fn strategies(&self) -> &'static [StrategyId] {
        &StrategyId::ALL
    }

    /// Search `document` for `pattern` with the strategy named `id`.
    pub fn search(&self, id: &str, document: &DocumentText, pattern: &str) -> SearchOutcome {
        match self.resolve(id) {
            Some(strategy) => self.search_with(strategy, document, pattern),
            None => {
                debug!(strategy = id, "unknown search strategy");
                SearchOutcome::InvalidStrategy
            }
        }
    }

    /// Search `document` for `pattern` with a resolved strategy.
    ///
    /// Builds the matcher table for `pattern` on every call. Callers scanning
    /// many documents should compile once via `PreparedQuery`.
    pub fn search_with(
        &self,
        strategy: StrategyId,
        document: &DocumentText,
        pattern: &str,
    ) -> SearchOutcome {
        match Matcher::compile(strategy, pattern) {
            Some(matcher) => self.run(&matcher, document),
            None => {
                debug!(strategy = %strategy, "strategy cannot be called directly");
                SearchOutcome::Unavailable
            }
        }
    }

    /// Run a compiled matcher and classify the count.
    pub fn run(&self, matcher: &Matcher, document: &DocumentText) -> SearchOutcome {
        let count = matcher.count(document.as_str());
        debug!(
            strategy = %matcher.strategy(),
            pattern = %String::from_utf8_lossy(matcher.pattern()),
            count,
            "exact search"
        );
        if count > 0 || !self.fuzzy.is_available() {
            return SearchOutcome::from_count(count);
        }
        // Fallback path, reachable once the approximate matcher exists.
        match self.fuzzy.find_all(
            document.as_str(),
            &String::from_utf8_lossy(matcher.pattern()),
        ) {
            Ok(found) => SearchOutcome::from_count(found.len()),
            Err(_) => SearchOutcome::AwaitingFallback,
        }
    }
}
