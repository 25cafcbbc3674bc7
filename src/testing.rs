//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::HashMap;

use crate::corpus::{CorpusSource, TextExtractor};
use crate::error::{CorpusError, ExtractError};
use crate::types::{CorpusEntry, MatchResult, RankedResult};
use crate::util::normalize_text;

/// Create a corpus entry with matching application and applicant ids.
pub fn make_entry(id: u64, name: &str, role: &str) -> CorpusEntry {
    CorpusEntry {
        application_id: id,
        applicant_id: id,
        name: name.to_string(),
        role: role.to_string(),
        locator: format!("mem://{}", id),
    }
}

/// Create a ranked result at `corpus_index` with the given keyword counts.
pub fn make_ranked(corpus_index: usize, hits: &[(&str, usize)]) -> RankedResult {
    let mut matches = MatchResult::new();
    for (keyword, count) in hits {
        matches.record(*keyword, *count);
    }
    let id = corpus_index as u64 + 1;
    RankedResult::new(
        make_entry(id, &format!("Applicant {}", id), "GENERAL"),
        matches,
        corpus_index,
    )
}

/// In-memory corpus that is also its own text extractor.
///
/// Entries listed without text behave like files that vanished between
/// listing and extraction.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    entries: Vec<CorpusEntry>,
    texts: HashMap<String, String>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// One entry per text, in order, role `GENERAL`.
    pub fn from_texts(texts: &[&str]) -> Self {
        let mut corpus = Self::new();
        for (i, text) in texts.iter().enumerate() {
            corpus.push(&format!("Applicant {}", i + 1), "GENERAL", text);
        }
        corpus
    }

    /// Append an entry with text. Returns its corpus index.
    pub fn push(&mut self, name: &str, role: &str, text: &str) -> usize {
        let index = self.push_missing(name, role);
        let locator = self.entries[index].locator.clone();
        self.texts.insert(locator, text.to_string());
        index
    }

    /// Append an entry whose text cannot be extracted. Returns its corpus index.
    pub fn push_missing(&mut self, name: &str, role: &str) -> usize {
        let index = self.entries.len();
        self.entries
            .push(make_entry(index as u64 + 1, name, role));
        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CorpusSource for MemoryCorpus {
    fn list_corpus(&self) -> Result<Vec<CorpusEntry>, CorpusError> {
        Ok(self.entries.clone())
    }
}

impl TextExtractor for MemoryCorpus {
    fn extract_text(&self, locator: &str) -> Result<String, ExtractError> {
        self.texts
            .get(locator)
            .map(|text| normalize_text(text))
            .ok_or_else(|| ExtractError::NotFound(locator.to_string()))
    }
}

/// Naive overlapping occurrence count, used as an oracle for the matchers.
pub fn naive_count(text: &[u8], pattern: &[u8]) -> usize {
    if pattern.is_empty() || pattern.len() > text.len() {
        return 0;
    }
    text.windows(pattern.len()).filter(|w| *w == pattern).count()
}
