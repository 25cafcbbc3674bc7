// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scan configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! The CLI loads an optional file first, then applies its flags on top.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanConfig {
    /// Worker threads for the scan. `0` lets rayon decide, `1` scans on the
    /// calling thread.
    pub workers: usize,
    /// Wall-clock budget for one scan in milliseconds. `None` means unbounded.
    pub timeout_ms: Option<u64>,
    /// Case-fold document text once per document before matching.
    pub fold_case: bool,
    /// Result count when the caller does not ask for one.
    pub default_top_n: usize,
    /// Show a progress bar on stderr while scanning.
    pub progress: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            timeout_ms: None,
            fold_case: true,
            default_top_n: DEFAULT_TOP_N,
            progress: false,
        }
    }
}

impl ScanConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Format {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
