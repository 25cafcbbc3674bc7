//! Degenerate inputs: empty patterns, empty text, unknown strategies.

use super::common::{rank, scenario_corpus, MemoryCorpus};
use cvscan::matcher::{boyer_moore, kmp};
use cvscan::{
    CorpusScanner, DocumentText, PreparedQuery, ScanError, SearchOutcome, StrategyId,
    StrategyRegistry,
};

#[test]
fn test_empty_pattern_is_empty_for_both_algorithms() {
    let text = b"accountant";
    assert!(kmp::search(text, b"", &kmp::build_failure_table(b"")).is_empty());
    assert!(boyer_moore::search(text, b"", &boyer_moore::build_bad_char_table(b"")).is_empty());
}

#[test]
fn test_empty_text_is_empty_for_both_algorithms() {
    let p = b"sales";
    assert!(kmp::search(b"", p, &kmp::build_failure_table(p)).is_empty());
    assert!(boyer_moore::search(b"", p, &boyer_moore::build_bad_char_table(p)).is_empty());
}

#[test]
fn test_pattern_longer_than_text() {
    let p = b"accountant";
    assert!(kmp::search(b"acc", p, &kmp::build_failure_table(p)).is_empty());
    assert!(boyer_moore::search(b"acc", p, &boyer_moore::build_bad_char_table(p)).is_empty());
}

#[test]
fn test_invalid_strategy_is_distinct_from_zero() {
    let registry = StrategyRegistry::new();
    let document = DocumentText::from("x");
    let outcome = registry.search("bogus", &document, "x");
    assert_eq!(outcome, SearchOutcome::InvalidStrategy);
    assert_ne!(outcome, SearchOutcome::AwaitingFallback);
    assert_eq!(outcome.count(), 0);
}

#[test]
fn test_zero_exact_matches_awaits_fallback() {
    let registry = StrategyRegistry::new();
    let document = DocumentText::from("sales manager");
    assert_eq!(
        registry.search("kmp", &document, "python"),
        SearchOutcome::AwaitingFallback
    );
}

#[test]
fn test_fuzzy_called_directly_is_unavailable() {
    let registry = StrategyRegistry::new();
    let document = DocumentText::from("sales");
    assert_eq!(
        registry.search("fuzzy", &document, "sales"),
        SearchOutcome::Unavailable
    );
    assert!(matches!(
        PreparedQuery::compile(StrategyId::Fuzzy, &["sales".to_string()]),
        Err(ScanError::StrategyUnavailable(_))
    ));
}

#[test]
fn test_invalid_strategy_name_fails_the_scan() {
    let corpus = scenario_corpus();
    let err = CorpusScanner::default()
        .rank_by_name(&corpus, &corpus, "grep", &["sales".to_string()], 5)
        .unwrap_err();
    assert!(matches!(err, ScanError::InvalidStrategy(ref name) if name == "grep"));
}

#[test]
fn test_empty_keyword_list_reports_stats() {
    let corpus = scenario_corpus();
    let report = rank(&corpus, &corpus, StrategyId::Kmp, " , ", 5);
    assert!(report.results.is_empty());
    assert_eq!(report.stats.corpus_size, 3);
    assert_eq!(report.stats.matched, 0);
}

#[test]
fn test_empty_corpus() {
    let corpus = MemoryCorpus::new();
    let report = rank(&corpus, &corpus, StrategyId::BoyerMoore, "sales", 5);
    assert!(report.results.is_empty());
    assert_eq!(report.stats.corpus_size, 0);
    assert!(!report.stats.cancelled);
}

#[test]
fn test_empty_document_contributes_nothing() {
    let corpus = MemoryCorpus::from_texts(&["", "   ", "sales"]);
    let report = rank(&corpus, &corpus, StrategyId::Kmp, "sales", 5);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].corpus_index, 2);
}

#[test]
fn test_multibyte_text_uses_byte_offsets() {
    let p = "é".as_bytes();
    let text = "café é".as_bytes();
    let kmp = kmp::search(text, p, &kmp::build_failure_table(p));
    let bm = boyer_moore::search(text, p, &boyer_moore::build_bad_char_table(p));
    assert_eq!(kmp, vec![3, 6]);
    assert_eq!(kmp, bm);
}
