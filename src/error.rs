// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! None of these are fatal. Extraction failures are recovered per document
//! inside the scan; the rest are returned to the caller before any scanning
//! starts (bad strategy name, unreadable corpus listing, malformed config).
//! Degenerate matcher inputs (empty pattern, empty text) are not errors at
//! all: they produce empty match lists.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a document locator into text.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("document unreadable: {locator}: {reason}")]
    Unreadable { locator: String, reason: String },
}

/// Failure to list the corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus manifest {path}: {source}")]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid corpus manifest {path}: {source}")]
    ManifestFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported manifest version {0} (expected 1)")]
    ManifestVersion(u32),
}

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to start a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unknown search strategy: {0:?}")]
    InvalidStrategy(String),
    #[error("search strategy {0} is not available")]
    StrategyUnavailable(&'static str),
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error("failed to start worker pool: {0}")]
    WorkerPool(String),
}
