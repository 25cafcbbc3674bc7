// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for documents and keywords.
//!
//! Two separate steps, applied at different points in the pipeline:
//!
//! - [`normalize_text`] turns extracted document text into one continuous
//!   line: whitespace runs collapse to a single space, ends are trimmed.
//!   Extractors apply it once per document.
//! - [`normalize_keyword`] trims and lowercases a keyword. Accents are kept.
//! - [`fold_case`] lowercases (and, with the `unicode-normalization`
//!   feature, strips diacritics). When `ScanConfig::fold_case` is set it is
//!   applied to the keywords and, once per document, to the document text,
//!   so both sides of a match always see the same transform.
//!
//! Matchers never normalize. They see exactly the bytes they are given.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Collapse whitespace runs to a single space and trim both ends.
///
/// Idempotent: `normalize_text(normalize_text(s)) == normalize_text(s)`.
pub fn normalize_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-fold a string for matching: lowercase and strip diacritics.
///
/// - "Accountant" → "accountant"
/// - "Résumé" → "resume"
///
/// Whitespace is left alone; run [`normalize_text`] first if needed.
#[cfg(feature = "unicode-normalization")]
pub fn fold_case(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase only. Used when the `unicode-normalization` feature is off.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Normalize a single keyword: trim, collapse inner whitespace, lowercase.
///
/// Diacritics are left alone; [`fold_case`] strips them only when the
/// document text is folded too.
pub fn normalize_keyword(value: &str) -> String {
    normalize_text(value).to_lowercase()
}

/// Combining marks (Unicode category Mn) in the common diacritic blocks.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
