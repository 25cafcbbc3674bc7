// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for KMP / Boyer-Moore equivalence.
//!
//! Arbitrary bytes for both text and pattern, including NULs and invalid
//! UTF-8. The two algorithms must report the same offsets, those offsets
//! must be real occurrences, and neither may loop or panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use cvscan::matcher::{boyer_moore, kmp};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let pattern = &input.pattern[..input.pattern.len().min(64)];
    let text = input.text;

    let kmp = kmp::search(text, pattern, &kmp::build_failure_table(pattern));
    let bm = boyer_moore::search(text, pattern, &boyer_moore::build_bad_char_table(pattern));
    assert_eq!(kmp, bm, "matchers disagree");

    for &offset in &kmp {
        assert_eq!(&text[offset..offset + pattern.len()], pattern);
    }
    if !pattern.is_empty() && pattern.len() <= text.len() {
        let expected = text.windows(pattern.len()).filter(|w| *w == pattern).count();
        assert_eq!(kmp.len(), expected);
    }
});
