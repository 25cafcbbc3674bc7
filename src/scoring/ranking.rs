// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored documents get sorted.
//!
//! Sort order is (score descending, corpus index ascending). The corpus
//! index is assigned before any work is dispatched, so the ordering does
//! not depend on which worker finished first: results can reach the
//! collector in any order and still rank identically to a sequential scan.

use std::cmp::Ordering;

use parking_lot::Mutex;

use crate::contracts::check_ranking_order;
use crate::types::RankedResult;

/// Compare two ranked results.
///
/// 1. **Score** - higher wins
/// 2. **Corpus index** - earlier entry wins on equal score
pub fn compare_ranked(a: &RankedResult, b: &RankedResult) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.corpus_index.cmp(&b.corpus_index))
}

/// Sort by `compare_ranked` and keep the first `top_n`.
pub fn rank_results(mut results: Vec<RankedResult>, top_n: usize) -> Vec<RankedResult> {
    results.sort_by(compare_ranked);
    results.truncate(top_n);
    check_ranking_order(&results);
    results
}

/// Thread-safe sink for per-document results.
///
/// Workers push as they finish; insertion is serialized by the lock.
/// Empty match results are dropped on the way in.
#[derive(Debug, Default)]
pub struct ResultCollector {
    results: Mutex<Vec<RankedResult>>,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result. Returns `false` if it had no matches and was dropped.
    pub fn push(&self, result: RankedResult) -> bool {
        if result.matches.is_empty() {
            return false;
        }
        self.results.lock().push(result);
        true
    }

    pub fn len(&self) -> usize {
        self.results.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rank everything collected and keep the first `top_n`.
    pub fn into_ranked(self, top_n: usize) -> Vec<RankedResult> {
        rank_results(self.results.into_inner(), top_n)
    }
}
