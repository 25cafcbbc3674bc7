// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON manifest corpus.
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": [
//!     {"applicationId": 1, "applicantId": 1, "name": "Ian",
//!      "role": "ACCOUNTANT", "path": "ACCOUNTANT/10554236.txt"}
//!   ]
//! }
//! ```
//!
//! Relative paths resolve against the directory holding the manifest.
//! Entry order in the file is the corpus order.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::CorpusSource;
use crate::error::CorpusError;
use crate::types::CorpusEntry;

pub const MANIFEST_VERSION: u32 = 1;

#[derive(Deserialize, Clone, Debug)]
pub struct CorpusManifest {
    pub version: u32,
    #[serde(default)]
    pub entries: Vec<CorpusEntry>,
}

/// Corpus listed by a manifest file.
#[derive(Debug, Clone)]
pub struct ManifestCorpus {
    path: PathBuf,
}

impl ManifestCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and validate the manifest without resolving paths.
    pub fn load(&self) -> Result<CorpusManifest, CorpusError> {
        let content = fs::read_to_string(&self.path).map_err(|source| CorpusError::ManifestIo {
            path: self.path.clone(),
            source,
        })?;
        let manifest: CorpusManifest =
            serde_json::from_str(&content).map_err(|source| CorpusError::ManifestFormat {
                path: self.path.clone(),
                source,
            })?;
        if manifest.version != MANIFEST_VERSION {
            return Err(CorpusError::ManifestVersion(manifest.version));
        }
        Ok(manifest)
    }

    fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

impl CorpusSource for ManifestCorpus {
    fn list_corpus(&self) -> Result<Vec<CorpusEntry>, CorpusError> {
        let base = self.base_dir();
        Ok(self
            .load()?
            .entries
            .into_iter()
            .map(|mut entry| {
                let locator = Path::new(&entry.locator);
                if locator.is_relative() {
                    entry.locator = base.join(locator).to_string_lossy().into_owned();
                }
                entry
            })
            .collect())
    }
}
