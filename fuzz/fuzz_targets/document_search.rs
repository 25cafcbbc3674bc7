// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for keyword parsing and per-document search.
//!
//! Whatever the keyword string and document look like, the registry path
//! and the prepared path must agree and every reported count must be
//! positive.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use cvscan::{parse_keywords, search_document, DocumentText, PreparedQuery, StrategyId, StrategyRegistry};

#[derive(Arbitrary, Debug)]
struct Input {
    keywords: String,
    document: String,
    fold: bool,
    boyer_moore: bool,
}

fuzz_target!(|input: Input| {
    let strategy = if input.boyer_moore {
        StrategyId::BoyerMoore
    } else {
        StrategyId::Kmp
    };
    let keywords = parse_keywords(&input.keywords);
    let document = DocumentText::new(&input.document, input.fold);

    let query = PreparedQuery::compile(strategy, &keywords).expect("exact strategy compiles");
    let prepared = query.search_document(&document);
    let dispatched = search_document(&StrategyRegistry::new(), &document, strategy.name(), &keywords);

    assert_eq!(prepared, dispatched);
    assert!(prepared.iter().all(|hit| hit.count > 0));
});
