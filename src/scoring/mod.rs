// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how scan results get their order.
//!
//! A document's score is the total number of keyword occurrences found in
//! it, overlaps included. Ranking sorts by that score and falls back to
//! corpus order, so identical inputs always rank identically.

pub mod ranking;

pub use ranking::*;
