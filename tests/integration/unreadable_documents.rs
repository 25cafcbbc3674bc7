//! Documents that cannot be extracted are skipped, not fatal.

use super::common::{rank, ranking, role_directory, write_file};
use cvscan::{DirectoryCorpus, ManifestCorpus, PlainTextExtractor, StrategyId};
use std::fs;

#[test]
fn test_missing_manifest_entry_is_skipped() {
    let tmp = role_directory();
    write_file(
        tmp.path(),
        "corpus.json",
        r#"{"version": 1, "entries": [
            {"applicationId": 1, "applicantId": 1, "name": "Gone", "role": "SALES", "path": "SALES/gone.txt"},
            {"applicationId": 2, "applicantId": 2, "name": "Mara", "role": "SALES", "path": "SALES/mara.txt"}
        ]}"#,
    );
    let corpus = ManifestCorpus::new(tmp.path().join("corpus.json"));
    let report = rank(&corpus, &PlainTextExtractor::new(), StrategyId::Kmp, "sales", 5);

    assert_eq!(report.stats.corpus_size, 2);
    assert_eq!(report.stats.scanned, 2);
    assert_eq!(report.stats.skipped, 1);
    assert_eq!(ranking(&report), vec![(1, 1)]);
}

#[test]
fn test_file_removed_after_listing_is_skipped() {
    let tmp = role_directory();
    let corpus = DirectoryCorpus::new(tmp.path());
    let entries = cvscan::CorpusSource::list_corpus(&corpus).unwrap();
    fs::remove_file(tmp.path().join("ACCOUNTANT/ian.txt")).unwrap();

    let report = rank(&entries, &PlainTextExtractor::new(), StrategyId::BoyerMoore, "sales", 5);
    assert_eq!(report.stats.skipped, 1);
    assert_eq!(ranking(&report), vec![(2, 1)]);
}

#[test]
fn test_non_utf8_bytes_are_read_lossily() {
    let tmp = role_directory();
    fs::write(tmp.path().join("HR/binary.txt"), b"\xff\xfe sales \x00").unwrap();
    let corpus = DirectoryCorpus::new(tmp.path());
    let report = rank(&corpus, &PlainTextExtractor::new(), StrategyId::Kmp, "sales", 5);
    assert_eq!(report.stats.skipped, 0);
    assert_eq!(report.results.len(), 3);
}
