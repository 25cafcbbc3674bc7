//! Scanning a corpus described by a JSON manifest.

use super::common::{rank, ranking, write_file};
use cvscan::{open_corpus, CorpusError, CorpusScanner, ManifestCorpus, PlainTextExtractor, ScanError, StrategyId};
use tempfile::TempDir;

fn manifest_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "cvs/1.txt", "React developer. React, Express, HTML");
    write_file(tmp.path(), "cvs/2.txt", "HTML and CSS");
    write_file(tmp.path(), "cvs/3.txt", "Express and react");
    write_file(
        tmp.path(),
        "corpus.json",
        r#"{
            "version": 1,
            "entries": [
                {"applicationId": 10, "applicantId": 1, "name": "Ian", "role": "WEB", "path": "cvs/1.txt"},
                {"applicationId": 11, "applicantId": 2, "name": "Jovi", "role": "WEB", "path": "cvs/2.txt"},
                {"applicationId": 12, "applicantId": 1, "name": "Ian", "role": "BACKEND", "path": "cvs/3.txt"}
            ]
        }"#,
    );
    tmp
}

#[test]
fn test_manifest_scan_end_to_end() {
    let tmp = manifest_dir();
    let corpus = open_corpus(&tmp.path().join("corpus.json"));
    let report = rank(corpus.as_ref(), &PlainTextExtractor::new(), StrategyId::BoyerMoore, "React, Express, HTML", 5);

    assert_eq!(ranking(&report), vec![(0, 4), (2, 2), (1, 1)]);
    let ids: Vec<u64> = report.results.iter().map(|r| r.entry.application_id).collect();
    assert_eq!(ids, vec![10, 12, 11]);
    assert_eq!(report.results[1].entry.applicant_id, 1);
}

#[test]
fn test_bad_manifest_fails_the_scan() {
    let tmp = manifest_dir();
    write_file(tmp.path(), "v2.json", r#"{"version": 2, "entries": []}"#);
    let err = CorpusScanner::default()
        .rank(
            &ManifestCorpus::new(tmp.path().join("v2.json")),
            &PlainTextExtractor::new(),
            StrategyId::Kmp,
            &["react".to_string()],
            5,
        )
        .unwrap_err();
    assert!(matches!(err, ScanError::Corpus(CorpusError::ManifestVersion(2))));
}

#[test]
fn test_report_serializes_to_json() {
    let tmp = manifest_dir();
    let corpus = ManifestCorpus::new(tmp.path().join("corpus.json"));
    let report = rank(&corpus, &PlainTextExtractor::new(), StrategyId::Kmp, "html", 1);
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    let first = &json["results"][0];
    assert_eq!(first["score"], 1);
    assert_eq!(first["corpusIndex"], 0);
    assert_eq!(first["entry"]["applicationId"], 10);
    assert_eq!(first["matches"][0]["keyword"], "html");
    assert_eq!(json["stats"]["corpusSize"], 3);
    assert!(json["stats"]["elapsedMs"].is_number());
}
