// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The boundary with the outside world: where documents come from.
//!
//! The search core consumes two collaborators and never looks past them:
//!
//! - a [`CorpusSource`] lists the entries to scan, once per scan;
//! - a [`TextExtractor`] turns a document locator into normalized text.
//!
//! Binary document parsing is not part of this crate. The bundled sources
//! cover the common setups: a directory with one subdirectory per role
//! ([`DirectoryCorpus`]), a JSON manifest ([`ManifestCorpus`]), and plain
//! text files on disk ([`PlainTextExtractor`]).

pub mod directory;
pub mod extract;
pub mod manifest;

pub use directory::DirectoryCorpus;
pub use extract::PlainTextExtractor;
pub use manifest::{CorpusManifest, ManifestCorpus};

use std::path::Path;

use crate::error::{CorpusError, ExtractError};
use crate::types::CorpusEntry;

/// Lists the corpus entries for one scan.
pub trait CorpusSource {
    fn list_corpus(&self) -> Result<Vec<CorpusEntry>, CorpusError>;
}

/// Turns a document locator into normalized text.
///
/// Text is returned with whitespace collapsed and trimmed. Called from
/// worker threads, hence `Sync`.
pub trait TextExtractor: Sync {
    fn extract_text(&self, locator: &str) -> Result<String, ExtractError>;
}

impl<T: CorpusSource + ?Sized> CorpusSource for &T {
    fn list_corpus(&self) -> Result<Vec<CorpusEntry>, CorpusError> {
        (**self).list_corpus()
    }
}

impl<T: TextExtractor + ?Sized> TextExtractor for &T {
    fn extract_text(&self, locator: &str) -> Result<String, ExtractError> {
        (**self).extract_text(locator)
    }
}

impl CorpusSource for Vec<CorpusEntry> {
    fn list_corpus(&self) -> Result<Vec<CorpusEntry>, CorpusError> {
        Ok(self.clone())
    }
}

/// Pick a corpus source for a path: `.json` files are manifests, anything
/// else is treated as a role directory.
pub fn open_corpus(path: &Path) -> Box<dyn CorpusSource> {
    let is_manifest = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_manifest {
        Box::new(ManifestCorpus::new(path))
    } else {
        Box::new(DirectoryCorpus::new(path))
    }
}
