//! Exact-match keyword search over applicant documents.
//!
//! Each document in a corpus is searched for every keyword with one of two
//! exact string-matching algorithms. Documents are scored by total
//! occurrence count and the best ones are returned in ranked order.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌───────────────┐   ┌──────────────┐
//! │  corpus/     │──▶│  scan/       │──▶│  search/      │──▶│  strategy/   │
//! │ (list, read) │   │ (workers,    │   │ (per-document │   │ (name → algo │
//! │              │   │  cancel)     │   │  keyword loop)│   │  → outcome)  │
//! └──────────────┘   └──────┬───────┘   └───────────────┘   └──────┬───────┘
//!                           │                                      ▼
//!                           ▼                               ┌──────────────┐
//!                    ┌──────────────┐                       │  matcher/    │
//!                    │  scoring/    │                       │ (KMP, BM)    │
//!                    │ (rank, top-N)│                       └──────────────┘
//!                    └──────────────┘
//! ```
//!
//! | Module      | Role                                                     |
//! |-------------|----------------------------------------------------------|
//! | `matcher`   | Failure table + KMP, bad-character table + Boyer-Moore   |
//! | `strategy`  | `StrategyId`, `StrategyRegistry`, `SearchOutcome`        |
//! | `search`    | Keyword parsing, `search_document`, `PreparedQuery`      |
//! | `scoring`   | Score ordering, top-N, concurrent result collection      |
//! | `scan`      | `CorpusScanner`: parallel scan, timeout, cancellation    |
//! | `corpus`    | Corpus listings and text extraction                      |
//! | `contracts` | Debug-build invariant checks                             |
//!
//! # Usage
//!
//! ```no_run
//! use cvscan::{parse_keywords, CorpusScanner, DirectoryCorpus, PlainTextExtractor, StrategyId};
//!
//! let corpus = DirectoryCorpus::new("data");
//! let keywords = parse_keywords("React, Express, HTML");
//! let report = CorpusScanner::default()
//!     .rank(&corpus, &PlainTextExtractor::new(), StrategyId::Kmp, &keywords, 5)
//!     .unwrap();
//! for result in &report.results {
//!     println!("{} ({}): {}", result.entry.name, result.entry.role, result.score);
//! }
//! ```

pub mod config;
pub mod contracts;
pub mod corpus;
pub mod error;
pub mod matcher;
pub mod scan;
pub mod scoring;
pub mod search;
pub mod strategy;
pub mod testing;
pub mod types;
pub mod util;

pub use config::ScanConfig;
pub use corpus::{
    open_corpus, CorpusSource, DirectoryCorpus, ManifestCorpus, PlainTextExtractor, TextExtractor,
};
pub use error::{ConfigError, CorpusError, ExtractError, ScanError};
pub use matcher::{BoyerMooreMatcher, KmpMatcher, Matcher, PatternMatcher};
pub use scan::{CancelToken, CorpusScanner};
pub use scoring::{rank_results, ResultCollector};
pub use search::{
    fold_keywords, normalize_keywords, parse_keywords, search_document, DocumentText,
    PreparedQuery,
};
pub use strategy::{SearchOutcome, StrategyId, StrategyRegistry};
pub use types::{CorpusEntry, KeywordCount, MatchResult, RankedResult, ScanReport, ScanStats};
