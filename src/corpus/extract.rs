// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain-text extraction from files on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::TextExtractor;
use crate::error::ExtractError;
use crate::util::normalize_text;

/// Reads locators as (lossy) UTF-8 files and normalizes whitespace.
///
/// Relative locators resolve against `root` when one is set.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor {
    root: Option<PathBuf>,
}

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, locator: &str) -> PathBuf {
        let path = PathBuf::from(locator);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path,
        }
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, locator: &str) -> Result<String, ExtractError> {
        let path = self.resolve(locator);
        let bytes = fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExtractError::NotFound(locator.to_string()),
            _ => ExtractError::Unreadable {
                locator: locator.to_string(),
                reason: e.to_string(),
            },
        })?;
        Ok(normalize_text(&String::from_utf8_lossy(&bytes)))
    }
}
