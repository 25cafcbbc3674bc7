// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-document search: every keyword against one normalized text.
//!
//! Keywords are normalized once, before any dispatch (`parse_keywords` /
//! `normalize_keywords`, then `fold_keywords` when document text is
//! case-folded). Each keyword is then matched independently; there
//! is no state shared between keywords. Only keywords with at least one
//! occurrence end up in the `MatchResult`, and the document score is the
//! sum of those counts.
//!
//! Two entry points with identical results:
//!
//! - [`search_document`] dispatches through the `StrategyRegistry` by name
//!   and rebuilds each keyword's table per call.
//! - [`PreparedQuery`] compiles each keyword's matcher once and reuses it for
//!   every document in a scan. Compiled matchers still run through the
//!   registry, so both paths classify counts the same way.

pub mod document;

pub use document::DocumentText;

use std::collections::HashSet;

use crate::error::ScanError;
use crate::matcher::Matcher;
use crate::strategy::{SearchOutcome, StrategyId, StrategyRegistry};
use crate::types::MatchResult;
use crate::util::{fold_case, normalize_keyword};

/// Split a comma-separated keyword list ("React, Express, HTML") and normalize it.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    normalize_keywords(raw.split(','))
}

/// Normalize keywords: trim, lowercase, drop empties, de-duplicate
/// keeping the first occurrence.
pub fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    dedup_keywords(
        keywords
            .into_iter()
            .map(|keyword| normalize_keyword(keyword.as_ref())),
    )
}

/// Apply [`fold_case`] to normalized keywords, for matching against
/// case-folded document text. Keywords that fold together ("café",
/// "cafe") collapse into the first.
pub fn fold_keywords(keywords: &[String]) -> Vec<String> {
    dedup_keywords(keywords.iter().map(|keyword| fold_case(keyword)))
}

fn dedup_keywords(keywords: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .filter(|keyword| !keyword.is_empty())
        .filter(|keyword| seen.insert(keyword.clone()))
        .collect()
}

/// Count each keyword in `document` with the strategy named `strategy`.
///
/// `keywords` must already be normalized. Keywords with no occurrences
/// (including every keyword under an invalid or unavailable strategy) are
/// left out of the result.
pub fn search_document(
    registry: &StrategyRegistry,
    document: &DocumentText,
    strategy: &str,
    keywords: &[String],
) -> MatchResult {
    let mut result = MatchResult::new();
    for keyword in keywords {
        let outcome = registry.search(strategy, document, keyword);
        result.record(keyword.as_str(), outcome.count());
    }
    result
}

/// A keyword set compiled for one strategy.
///
/// Table construction depends only on the pattern, so one `PreparedQuery`
/// serves every document of a scan.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    strategy: StrategyId,
    registry: StrategyRegistry,
    matchers: Vec<(String, Matcher)>,
}

impl PreparedQuery {
    /// Compile matchers for already-normalized `keywords`.
    ///
    /// Fails with `StrategyUnavailable` for strategies without an exact matcher.
    pub fn compile(strategy: StrategyId, keywords: &[String]) -> Result<Self, ScanError> {
        if !strategy.is_exact() {
            return Err(ScanError::StrategyUnavailable(strategy.name()));
        }
        let matchers = keywords
            .iter()
            .filter_map(|keyword| {
                Matcher::compile(strategy, keyword).map(|matcher| (keyword.clone(), matcher))
            })
            .collect();
        Ok(Self {
            strategy,
            registry: StrategyRegistry::new(),
            matchers,
        })
    }

    pub fn strategy(&self) -> StrategyId {
        self.strategy
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(|(keyword, _)| keyword.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Per-keyword outcomes for one document, in keyword order.
    pub fn outcomes(&self, document: &DocumentText) -> Vec<(&str, SearchOutcome)> {
        self.matchers
            .iter()
            .map(|(keyword, matcher)| (keyword.as_str(), self.registry.run(matcher, document)))
            .collect()
    }

    /// Count each keyword in `document`; zero counts are dropped.
    pub fn search_document(&self, document: &DocumentText) -> MatchResult {
        let mut result = MatchResult::new();
        for (keyword, outcome) in self.outcomes(document) {
            result.record(keyword, outcome.count());
        }
        result
    }
}
