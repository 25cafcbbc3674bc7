//! Top-N selection and tie-breaking.

use super::common::{make_ranked, rank, ranking, MemoryCorpus};
use cvscan::{rank_results, StrategyId};

fn five_matching() -> MemoryCorpus {
    MemoryCorpus::from_texts(&[
        "sales",                   // 1
        "sales sales sales",       // 3
        "sales sales",             // 2
        "sales manager sales",     // 2
        "sales sales sales",       // 3
        "nothing to see",          // 0
    ])
}

#[test]
fn test_top_two_of_five() {
    let corpus = five_matching();
    for strategy in [StrategyId::Kmp, StrategyId::BoyerMoore] {
        let report = rank(&corpus, &corpus, strategy, "sales", 2);
        assert_eq!(ranking(&report), vec![(1, 3), (4, 3)]);
        assert_eq!(report.stats.matched, 5);
    }
}

#[test]
fn test_ties_follow_corpus_order() {
    let corpus = five_matching();
    let report = rank(&corpus, &corpus, StrategyId::Kmp, "sales", 10);
    assert_eq!(
        ranking(&report),
        vec![(1, 3), (4, 3), (2, 2), (3, 2), (0, 1)]
    );
}

#[test]
fn test_top_n_larger_than_matches_returns_all_matches() {
    let corpus = five_matching();
    let report = rank(&corpus, &corpus, StrategyId::BoyerMoore, "sales", 100);
    assert_eq!(report.results.len(), 5);
}

#[test]
fn test_rank_results_sorts_out_of_order_input() {
    let results = vec![
        make_ranked(3, &[("sales", 1)]),
        make_ranked(0, &[("sales", 1)]),
        make_ranked(2, &[("sales", 4)]),
        make_ranked(1, &[("sales", 2), ("manager", 2)]),
    ];
    let ranked = rank_results(results, 3);
    let order: Vec<(usize, usize)> = ranked.iter().map(|r| (r.corpus_index, r.score)).collect();
    assert_eq!(order, vec![(1, 4), (2, 4), (0, 1)]);
}
