//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use cvscan::{CorpusScanner, ScanConfig, ScanReport, StrategyId, TextExtractor, CorpusSource};

// Re-export canonical test utilities from cvscan::testing
pub use cvscan::testing::{make_entry, make_ranked, naive_count, MemoryCorpus};

// ============================================================================
// FIXTURES
// ============================================================================

/// The three-document corpus used throughout the search tests.
pub const SCENARIO_TEXTS: [&str; 3] = [
    "accountant with sales experience",
    "sales manager",
    "no relevant terms here",
];

pub fn scenario_corpus() -> MemoryCorpus {
    MemoryCorpus::from_texts(&SCENARIO_TEXTS)
}

/// Write `rel` under `dir`, creating parent directories.
pub fn write_file(dir: &Path, rel: &str, content: &str) -> PathBuf {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// A role-directory corpus on disk:
///
/// ```text
/// ACCOUNTANT/ian.txt     accountant with sales experience
/// HR/jovi.txt            no relevant terms here
/// SALES/mara.txt         sales manager
/// ```
pub fn role_directory() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "ACCOUNTANT/ian.txt", "Accountant with\nSALES experience");
    write_file(tmp.path(), "HR/jovi.txt", "no relevant terms here");
    write_file(tmp.path(), "SALES/mara.txt", "  Sales   Manager ");
    tmp
}

// ============================================================================
// SCANNING
// ============================================================================

pub fn scanner_with_workers(workers: usize) -> CorpusScanner {
    CorpusScanner::new(ScanConfig {
        workers,
        ..ScanConfig::default()
    })
}

/// Rank with default settings; panics on scan errors.
pub fn rank<C, E>(corpus: &C, extractor: &E, strategy: StrategyId, keywords: &str, top_n: usize) -> ScanReport
where
    C: CorpusSource + ?Sized,
    E: TextExtractor + ?Sized,
{
    CorpusScanner::default()
        .rank(corpus, extractor, strategy, &cvscan::parse_keywords(keywords), top_n)
        .unwrap()
}

/// (corpus_index, score) pairs in ranked order.
pub fn ranking(report: &ScanReport) -> Vec<(usize, usize)> {
    report
        .results
        .iter()
        .map(|r| (r.corpus_index, r.score))
        .collect()
}
