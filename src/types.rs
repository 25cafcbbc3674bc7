// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows through a scan.
//!
//! | Type           | Produced by        | Purpose                                  |
//! |----------------|--------------------|------------------------------------------|
//! | `CorpusEntry`  | corpus source      | One application document to scan        |
//! | `MatchResult`  | search orchestrator| keyword → occurrence count for one doc   |
//! | `RankedResult` | ranker             | entry + counts + score, in ranked order  |
//! | `ScanStats`    | scanner            | Aggregate observability numbers          |
//! | `ScanReport`   | scanner            | Ranked results plus stats                |
//!
//! # Invariants
//!
//! - **MatchResult** only holds keywords with a count of at least one, in the
//!   order the keywords were supplied. An empty result contributes nothing.
//! - **RankedResult**: `score == matches.total()`. `corpus_index` is the
//!   position of the entry in the corpus listing and breaks score ties.

use serde::{Deserialize, Serialize, Serializer};
use std::time::Duration;

/// One application document in the corpus.
///
/// Display metadata (name, role) passes through the search core untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusEntry {
    /// Application (document) key.
    pub application_id: u64,
    /// Applicant key. One applicant may own several applications.
    pub applicant_id: u64,
    pub name: String,
    pub role: String,
    /// Where the extractor finds the document text.
    #[serde(rename = "path")]
    pub locator: String,
}

/// Occurrence count for one keyword in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Per-document keyword counts, zero counts dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchResult {
    hits: Vec<KeywordCount>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keyword count. Zero counts are not retained.
    pub fn record(&mut self, keyword: impl Into<String>, count: usize) {
        if count > 0 {
            self.hits.push(KeywordCount {
                keyword: keyword.into(),
                count,
            });
        }
    }

    /// Count for `keyword`, or `None` if it did not match.
    pub fn get(&self, keyword: &str) -> Option<usize> {
        self.hits
            .iter()
            .find(|hit| hit.keyword == keyword)
            .map(|hit| hit.count)
    }

    /// Sum of all retained counts.
    pub fn total(&self) -> usize {
        self.hits.iter().map(|hit| hit.count).sum()
    }

    /// Number of distinct keywords that matched.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordCount> {
        self.hits.iter()
    }
}

/// A scored corpus entry in ranked position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    pub entry: CorpusEntry,
    pub matches: MatchResult,
    /// Sum of keyword counts.
    pub score: usize,
    /// Position in the corpus listing; tie-breaker.
    pub corpus_index: usize,
}

impl RankedResult {
    pub fn new(entry: CorpusEntry, matches: MatchResult, corpus_index: usize) -> Self {
        let score = matches.total();
        Self {
            entry,
            matches,
            score,
            corpus_index,
        }
    }
}

/// Aggregate numbers for one scan. Observability only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    /// Entries in the corpus listing.
    pub corpus_size: usize,
    /// Entries whose text was searched (readable or not).
    pub scanned: usize,
    /// Entries with at least one keyword match.
    pub matched: usize,
    /// Entries whose text could not be extracted.
    pub skipped: usize,
    /// Scan stopped early (timeout or cancellation); results are partial.
    pub cancelled: bool,
    #[serde(rename = "elapsedMs", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

/// Output of a corpus scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub results: Vec<RankedResult>,
    pub stats: ScanStats,
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}
