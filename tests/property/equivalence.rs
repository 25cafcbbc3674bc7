//! Differential testing: KMP and Boyer-Moore against a naive oracle.
//!
//! Small alphabets force repeats, overlaps and partial matches, which is
//! where shift and failure-table bugs live.

use super::common::naive_count;
use cvscan::matcher::{boyer_moore, kmp};
use cvscan::{BoyerMooreMatcher, KmpMatcher, PatternMatcher};
use proptest::prelude::*;

/// Oracle: every offset where `pattern` starts in `text`.
fn oracle_offsets(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| &text[i..i + pattern.len()] == pattern)
        .collect()
}

fn bytes_from(alphabet: &'static [u8], max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(prop::sample::select(alphabet), 0..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Both algorithms produce exactly the oracle's offsets.
    #[test]
    fn diff_matchers_vs_oracle(
        text in bytes_from(b"ab", 80),
        pattern in bytes_from(b"ab", 6),
    ) {
        let expected = oracle_offsets(&text, &pattern);
        let kmp = kmp::search(&text, &pattern, &kmp::build_failure_table(&pattern));
        let bm = boyer_moore::search(&text, &pattern, &boyer_moore::build_bad_char_table(&pattern));
        prop_assert_eq!(&kmp, &expected);
        prop_assert_eq!(&bm, &expected);
    }

    /// Wider alphabet including bytes absent from the pattern.
    #[test]
    fn diff_matchers_wide_alphabet(
        text in bytes_from(b"abcxyz \xc3\xa9", 120),
        pattern in bytes_from(b"abc\xc3", 8),
    ) {
        let kmp = kmp::search(&text, &pattern, &kmp::build_failure_table(&pattern));
        let bm = boyer_moore::search(&text, &pattern, &boyer_moore::build_bad_char_table(&pattern));
        prop_assert_eq!(kmp.len(), naive_count(&text, &pattern));
        prop_assert_eq!(kmp, bm);
    }

    /// Prepared matchers agree with each other on arbitrary strings.
    #[test]
    fn prepared_matchers_agree(text in "[a-c ]{0,60}", pattern in "[a-c]{1,5}") {
        let kmp = KmpMatcher::new(&pattern);
        let bm = BoyerMooreMatcher::new(&pattern);
        prop_assert_eq!(kmp.find_all(&text), bm.find_all(&text));
        prop_assert_eq!(kmp.count(&text), naive_count(text.as_bytes(), pattern.as_bytes()));
    }

    /// Offsets are strictly ascending and every match fits in the text.
    #[test]
    fn offsets_ascending_and_in_bounds(
        text in bytes_from(b"aab", 60),
        pattern in bytes_from(b"ab", 4),
    ) {
        let offsets = boyer_moore::search(&text, &pattern, &boyer_moore::build_bad_char_table(&pattern));
        for pair in offsets.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for &o in &offsets {
            prop_assert!(o + pattern.len() <= text.len());
        }
    }
}

#[test]
fn test_overlap_example() {
    let text = b"aaaa";
    let pattern = b"aa";
    assert_eq!(kmp::search(text, pattern, &kmp::build_failure_table(pattern)), vec![0, 1, 2]);
    assert_eq!(
        boyer_moore::search(text, pattern, &boyer_moore::build_bad_char_table(pattern)),
        vec![0, 1, 2]
    );
}
