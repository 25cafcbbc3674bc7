//! Timeouts and cancellation return partial, still-ranked results.

use std::time::Duration;

use super::common::MemoryCorpus;
use cvscan::{
    parse_keywords, CancelToken, CorpusEntry, CorpusScanner, ExtractError, ScanConfig, StrategyId,
    TextExtractor,
};

/// Extractor that cancels the scan once it has served `after` documents.
struct CancellingExtractor {
    inner: MemoryCorpus,
    cancel: CancelToken,
    after: usize,
    served: std::sync::atomic::AtomicUsize,
}

impl TextExtractor for CancellingExtractor {
    fn extract_text(&self, locator: &str) -> Result<String, ExtractError> {
        let served = self.served.fetch_add(1, std::sync::atomic::Ordering::SeqCst) + 1;
        if served >= self.after {
            self.cancel.cancel();
        }
        self.inner.extract_text(locator)
    }
}

/// Extractor that is slow enough for a short timeout to trip.
struct SlowExtractor(MemoryCorpus);

impl TextExtractor for SlowExtractor {
    fn extract_text(&self, locator: &str) -> Result<String, ExtractError> {
        std::thread::sleep(Duration::from_millis(20));
        self.0.extract_text(locator)
    }
}

fn sales_corpus(n: usize) -> MemoryCorpus {
    let texts: Vec<String> = (0..n).map(|i| "sales ".repeat(i % 5 + 1)).collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    MemoryCorpus::from_texts(&refs)
}

#[test]
fn test_cancel_mid_scan_keeps_partial_results() {
    let corpus = sales_corpus(50);
    let cancel = CancelToken::new();
    let extractor = CancellingExtractor {
        inner: corpus.clone(),
        cancel: cancel.clone(),
        after: 10,
        served: Default::default(),
    };
    let scanner = CorpusScanner::new(ScanConfig {
        workers: 1,
        ..ScanConfig::default()
    });

    let report = scanner
        .rank_with_cancel(&corpus, &extractor, StrategyId::Kmp, &parse_keywords("sales"), 3, &cancel)
        .unwrap();

    assert!(report.stats.cancelled);
    assert_eq!(report.stats.scanned, 10);
    assert_eq!(report.stats.matched, 10);
    let order: Vec<(usize, usize)> = report.results.iter().map(|r| (r.corpus_index, r.score)).collect();
    assert_eq!(order, vec![(4, 5), (9, 5), (3, 4)]);
}

#[test]
fn test_timeout_stops_a_slow_scan() {
    let corpus = sales_corpus(40);
    let scanner = CorpusScanner::new(ScanConfig {
        workers: 2,
        timeout_ms: Some(50),
        ..ScanConfig::default()
    });
    let report = scanner
        .rank(&corpus, &SlowExtractor(corpus.clone()), StrategyId::BoyerMoore, &parse_keywords("sales"), 5)
        .unwrap();

    assert!(report.stats.cancelled);
    assert!(report.stats.scanned < 40);
    assert!(report.results.len() <= 5);
    for pair in report.results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_token_clones_share_state() {
    let token = CancelToken::new();
    let clone = token.clone();
    assert!(!clone.is_cancelled());
    token.cancel();
    assert!(clone.is_cancelled());
}

#[test]
fn test_uncancelled_scan_is_complete() {
    let corpus = sales_corpus(12);
    let entries: Vec<CorpusEntry> = cvscan::CorpusSource::list_corpus(&corpus).unwrap();
    let report = CorpusScanner::default()
        .rank_with_cancel(&entries, &corpus, StrategyId::Kmp, &parse_keywords("sales"), 12, &CancelToken::new())
        .unwrap();
    assert!(!report.stats.cancelled);
    assert_eq!(report.stats.scanned, 12);
    assert_eq!(report.results.len(), 12);
}
