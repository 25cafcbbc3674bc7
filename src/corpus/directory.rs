// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Role-directory corpus: `base/<ROLE>/<file>`.
//!
//! Each immediate subdirectory of the base is a role; each regular file
//! inside it is one application document. Listing is sorted (roles, then
//! file names) so repeated scans see the same corpus order, which the
//! ranking tie-break depends on.
//!
//! A missing base directory is an empty corpus. Subdirectories that cannot
//! be read are skipped.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::CorpusSource;
use crate::error::CorpusError;
use crate::types::CorpusEntry;

/// Corpus read from a directory of role subdirectories.
#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    base: PathBuf,
}

impl DirectoryCorpus {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Role name → sorted file paths. Roles without files are left out.
    pub fn tree(&self) -> BTreeMap<String, Vec<PathBuf>> {
        let mut tree = BTreeMap::new();
        let Ok(roles) = fs::read_dir(&self.base) else {
            debug!(base = %self.base.display(), "corpus directory not readable");
            return tree;
        };

        for role_dir in roles.flatten() {
            let path = role_dir.path();
            if !path.is_dir() {
                continue;
            }
            let Ok(files) = fs::read_dir(&path) else {
                debug!(dir = %path.display(), "skipping unreadable role directory");
                continue;
            };
            let mut files: Vec<PathBuf> = files
                .flatten()
                .map(|file| file.path())
                .filter(|file| file.is_file())
                .collect();
            if files.is_empty() {
                continue;
            }
            files.sort();
            let role = role_dir.file_name().to_string_lossy().into_owned();
            tree.insert(role, files);
        }
        tree
    }
}

impl CorpusSource for DirectoryCorpus {
    fn list_corpus(&self) -> Result<Vec<CorpusEntry>, CorpusError> {
        let mut entries = Vec::new();
        for (role, files) in self.tree() {
            for file in files {
                let id = entries.len() as u64 + 1;
                let name = file
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                entries.push(CorpusEntry {
                    application_id: id,
                    applicant_id: id,
                    name,
                    role: role.clone(),
                    locator: file.to_string_lossy().into_owned(),
                });
            }
        }
        Ok(entries)
    }
}
