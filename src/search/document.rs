// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalized document text, computed once per document.

use crate::util::{fold_case, normalize_text};

/// Document text ready for matching.
///
/// Built once when a document enters the scan pipeline and passed by
/// reference to every keyword search. Construction is idempotent: building
/// from already-normalized text yields the same string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentText {
    text: String,
}

impl DocumentText {
    /// Normalize whitespace and, when `fold` is set, case-fold.
    pub fn new(raw: &str, fold: bool) -> Self {
        let collapsed = normalize_text(raw);
        let text = if fold { fold_case(&collapsed) } else { collapsed };
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for DocumentText {
    /// Whitespace normalization only, no case folding.
    fn from(raw: &str) -> Self {
        Self::new(raw, false)
    }
}
