// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate matching: reserved, not implemented.
//!
//! The registry consults this matcher when an exact search finds nothing.
//! Until an implementation lands, `is_available` is false and the registry
//! reports `SearchOutcome::AwaitingFallback` instead of a plain zero.

use crate::error::ScanError;

/// Placeholder for the approximate-match strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyMatcher;

impl FuzzyMatcher {
    pub const NAME: &'static str = "fuzzy";

    pub fn is_available(&self) -> bool {
        false
    }

    /// Always rejected.
    pub fn find_all(&self, _text: &str, _pattern: &str) -> Result<Vec<usize>, ScanError> {
        Err(ScanError::StrategyUnavailable(Self::NAME))
    }
}
