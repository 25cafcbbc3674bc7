// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus scanning: every document, every keyword, one ranked list.
//!
//! ```text
//! CorpusSource ──list──▶ entries ──(index, entry)──▶ worker ──▶ ResultCollector
//!                                                      │              │
//!                                         TextExtractor + PreparedQuery  rank + top-N
//! ```
//!
//! Documents are independent, so the scan is embarrassingly parallel. Each
//! entry is tagged with its corpus index before dispatch; the collector
//! accepts results in completion order and the final sort restores the
//! corpus-order tie-break.
//!
//! Nothing here aborts a scan once it has started. An unreadable document
//! is logged, counted in `stats.skipped`, and contributes no matches. A
//! timeout or cancellation stops dispatching new documents; whatever was
//! collected is still ranked and returned with `stats.cancelled` set.

#[cfg(feature = "parallel")]
pub mod parallel;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::config::ScanConfig;
use crate::corpus::{CorpusSource, TextExtractor};
use crate::error::ScanError;
use crate::scoring::ResultCollector;
use crate::search::{fold_keywords, normalize_keywords, DocumentText, PreparedQuery};
use crate::strategy::StrategyId;
use crate::types::{CorpusEntry, RankedResult, ScanReport, ScanStats};

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Stop conditions checked before each document.
#[derive(Debug, Clone)]
pub(crate) struct ScanControl {
    cancel: CancelToken,
    deadline: Option<Instant>,
}

impl ScanControl {
    fn should_stop(&self) -> bool {
        self.cancel.is_cancelled() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Counters shared by the workers of one scan.
#[derive(Debug, Default)]
pub(crate) struct ScanTally {
    collector: ResultCollector,
    scanned: AtomicUsize,
    skipped: AtomicUsize,
    cancelled: AtomicBool,
}

/// Scan one entry and record its outcome. Returns `false` if the scan
/// should stop before this entry.
pub(crate) fn scan_entry<E: TextExtractor + ?Sized>(
    index: usize,
    entry: &CorpusEntry,
    extractor: &E,
    query: &PreparedQuery,
    fold_case: bool,
    control: &ScanControl,
    tally: &ScanTally,
) -> bool {
    if control.should_stop() {
        tally.cancelled.store(true, Ordering::Relaxed);
        return false;
    }
    tally.scanned.fetch_add(1, Ordering::Relaxed);

    let raw = match extractor.extract_text(&entry.locator) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                application_id = entry.application_id,
                error = %e,
                "skipping unreadable document"
            );
            tally.skipped.fetch_add(1, Ordering::Relaxed);
            return true;
        }
    };

    let document = DocumentText::new(&raw, fold_case);
    let matches = query.search_document(&document);
    tally
        .collector
        .push(RankedResult::new(entry.clone(), matches, index));
    true
}

/// Scan entries in order on the calling thread.
pub(crate) fn scan_sequential<E: TextExtractor + ?Sized>(
    entries: &[CorpusEntry],
    extractor: &E,
    query: &PreparedQuery,
    fold_case: bool,
    control: &ScanControl,
    tally: &ScanTally,
) {
    for (index, entry) in entries.iter().enumerate() {
        if !scan_entry(index, entry, extractor, query, fold_case, control, tally) {
            break;
        }
    }
}

/// Ranks a corpus against a keyword set.
#[derive(Debug, Clone, Default)]
pub struct CorpusScanner {
    config: ScanConfig,
}

impl CorpusScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `corpus` and return the `top_n` highest-scoring entries.
    ///
    /// Keywords are normalized here, once, before any matching.
    pub fn rank<C, E>(
        &self,
        corpus: &C,
        extractor: &E,
        strategy: StrategyId,
        keywords: &[String],
        top_n: usize,
    ) -> Result<ScanReport, ScanError>
    where
        C: CorpusSource + ?Sized,
        E: TextExtractor + ?Sized,
    {
        self.rank_with_cancel(corpus, extractor, strategy, keywords, top_n, &CancelToken::new())
    }

    /// `rank` with the strategy given by name.
    pub fn rank_by_name<C, E>(
        &self,
        corpus: &C,
        extractor: &E,
        strategy: &str,
        keywords: &[String],
        top_n: usize,
    ) -> Result<ScanReport, ScanError>
    where
        C: CorpusSource + ?Sized,
        E: TextExtractor + ?Sized,
    {
        let strategy: StrategyId = strategy.parse()?;
        self.rank(corpus, extractor, strategy, keywords, top_n)
    }

    /// `rank` that stops early when `cancel` fires or the configured timeout
    /// passes. Partial results are ranked and returned.
    pub fn rank_with_cancel<C, E>(
        &self,
        corpus: &C,
        extractor: &E,
        strategy: StrategyId,
        keywords: &[String],
        top_n: usize,
        cancel: &CancelToken,
    ) -> Result<ScanReport, ScanError>
    where
        C: CorpusSource + ?Sized,
        E: TextExtractor + ?Sized,
    {
        let mut keywords = normalize_keywords(keywords);
        if self.config.fold_case {
            keywords = fold_keywords(&keywords);
        }
        let query = PreparedQuery::compile(strategy, &keywords)?;
        let started = Instant::now();
        let entries = corpus.list_corpus()?;
        Ok(self.rank_entries(&entries, extractor, &query, top_n, cancel, started))
    }

    fn rank_entries<E: TextExtractor + ?Sized>(
        &self,
        entries: &[CorpusEntry],
        extractor: &E,
        query: &PreparedQuery,
        top_n: usize,
        cancel: &CancelToken,
        started: Instant,
    ) -> ScanReport {
        let control = ScanControl {
            cancel: cancel.clone(),
            deadline: self.config.timeout().map(|t| started + t),
        };
        let tally = ScanTally::default();

        if !query.is_empty() {
            self.dispatch(entries, extractor, query, &control, &tally);
        }

        let matched = tally.collector.len();
        let results = tally.collector.into_ranked(top_n);
        let stats = ScanStats {
            corpus_size: entries.len(),
            scanned: tally.scanned.into_inner(),
            matched,
            skipped: tally.skipped.into_inner(),
            cancelled: tally.cancelled.into_inner(),
            elapsed: started.elapsed(),
        };

        info!(
            strategy = %query.strategy(),
            corpus = stats.corpus_size,
            scanned = stats.scanned,
            matched = stats.matched,
            skipped = stats.skipped,
            cancelled = stats.cancelled,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "scan complete"
        );

        ScanReport { results, stats }
    }

    #[cfg(feature = "parallel")]
    fn dispatch<E: TextExtractor + ?Sized>(
        &self,
        entries: &[CorpusEntry],
        extractor: &E,
        query: &PreparedQuery,
        control: &ScanControl,
        tally: &ScanTally,
    ) {
        if self.config.workers == 1 {
            scan_sequential(entries, extractor, query, self.config.fold_case, control, tally);
            return;
        }
        if let Err(e) = parallel::scan_parallel(entries, extractor, query, &self.config, control, tally) {
            warn!(error = %e, "worker pool unavailable, scanning sequentially");
            scan_sequential(entries, extractor, query, self.config.fold_case, control, tally);
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn dispatch<E: TextExtractor + ?Sized>(
        &self,
        entries: &[CorpusEntry],
        extractor: &E,
        query: &PreparedQuery,
        control: &ScanControl,
        tally: &ScanTally,
    ) {
        scan_sequential(entries, extractor, query, self.config.fold_case, control, tally);
    }
}
