//! End-to-end scenario tests against [`Hat`], one per §8 worked example.

use std::io::Write;

use rstest::rstest;

use simsets::collector::Collector;
use simsets::hat::Hat;
use simsets::ordset::OrdSet;

fn dataset(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(f, "{line}").unwrap();
    }
    f.flush().unwrap();
    f
}

fn hmg_search(hat: &Hat, query: &[u32], h: i64) -> Vec<Vec<u32>> {
    let mut q = OrdSet::from_sorted(query.to_vec());
    let mut budget = h;
    let mut out: Collector<_> = Collector::new();
    hat.search_hmg(&mut q, &mut budget, &mut out);
    assert_eq!(budget, h, "hamming budget must be restored");
    assert_eq!(q.cursor(), -1, "query cursor must be restored");
    let mut results: Vec<Vec<u32>> = out.iter().map(|r| r.as_slice().to_vec()).collect();
    results.sort();
    results.dedup();
    results
}

fn lcs_search(hat: &Hat, query: &[u32], add: i64, skp: i64) -> Vec<Vec<u32>> {
    let mut q = OrdSet::from_sorted(query.to_vec());
    let (mut a, mut s) = (add, skp);
    let mut out: Collector<OrdSet> = Collector::new();
    hat.search_lcs(&mut q, &mut a, &mut s, &mut out);
    assert_eq!(a, add, "add budget must be restored");
    assert_eq!(s, skp, "skp budget must be restored");
    let mut results: Vec<Vec<u32>> = out.iter().map(|r| r.as_slice().to_vec()).collect();
    results.sort();
    results.dedup();
    results
}

#[rstest]
// {1,2,3} △ {1,2,4} = {3,4}, Hamming distance 2, so h=1 still excludes it.
#[case::budget_one(1, &[1, 2, 3][..], vec![vec![1, 2, 3]])]
#[case::exact_match_only(0, &[1, 2, 3][..], vec![vec![1, 2, 3]])]
fn corpus_one_hamming_query_on_first_set(#[case] h: i64, #[case] query: &[u32], #[case] expected: Vec<Vec<u32>>) {
    let f = dataset(&["1 2 3", "1 2 4", "1 5"]);
    let hat = Hat::build(f.path(), 100, h).unwrap();
    assert_eq!(hmg_search(&hat, query, h), expected);
}

#[test]
fn scenario_3_budget_two_excludes_far_sets() {
    let f = dataset(&["1 2 3", "1 2 4", "1 5"]);
    let hat = Hat::build(f.path(), 100, 2).unwrap();
    assert_eq!(hmg_search(&hat, &[1, 5], 2), vec![vec![1, 5]]);
}

#[test]
fn scenario_4_small_band_population_confines_query_to_its_own_band() {
    let f = dataset(&["1 2 3 4 5", "6 7 8 9 10"]);
    let hat = Hat::build(f.path(), 1, 1).unwrap();
    // Both sets share length 5, and `partition` keys its band map by length
    // (capping each length's contribution at P but firing the crossing once
    // per length), so both land in the same single band.
    assert_eq!(hat.band_count(), 1);
    assert_eq!(hmg_search(&hat, &[1, 2, 3, 4, 5], 1), vec![vec![1, 2, 3, 4, 5]]);
}

#[test]
fn scenario_5_lcs_overlapping_triples() {
    let lines: Vec<String> = (1u32..=10).map(|k| format!("{} {} {}", k, k + 1, k + 2)).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let f = dataset(&refs);
    let hat = Hat::build(f.path(), 100, 2).unwrap();
    // {1,2,3} and {4,5,6} each need add=2 (inserting two elements not in the
    // query) to reach from {3,4}, exceeding add=1; only the two triples
    // reachable with a single insertion survive.
    assert_eq!(
        lcs_search(&hat, &[3, 4], 1, 1),
        vec![vec![2, 3, 4], vec![3, 4, 5]]
    );
}

#[test]
fn scenario_6_empty_query_bounds_by_deletions_available() {
    let f = dataset(&["1", "1 2", "1 2 3", "1 2 3 4"]);
    let hat = Hat::build(f.path(), 100, 3).unwrap();
    assert_eq!(
        hmg_search(&hat, &[], 3),
        vec![vec![1], vec![1, 2], vec![1, 2, 3]]
    );
}

#[test]
fn single_set_corpus_is_always_self_similar() {
    let f = dataset(&["4 8 15 16 23 42"]);
    let hat = Hat::build(f.path(), 10, 0).unwrap();
    assert_eq!(hmg_search(&hat, &[4, 8, 15, 16, 23, 42], 0), vec![vec![4, 8, 15, 16, 23, 42]]);
    assert!(hmg_search(&hat, &[1, 2], 0).is_empty());
}

#[test]
fn tail_split_at_maximum_depth() {
    // Two sets that diverge only at their last element force a tail split
    // at the deepest possible point in the trie.
    let f = dataset(&["1 2 3 4 10", "1 2 3 4 11"]);
    let hat = Hat::build(f.path(), 100, 1).unwrap();
    // {…10} △ {…11} = {10,11}, Hamming distance 2: h=1 is spent entirely on
    // skipping the shared prefix's last element, so the 11-tail is never
    // reached.
    assert_eq!(hmg_search(&hat, &[1, 2, 3, 4, 10], 1), vec![vec![1, 2, 3, 4, 10]]);
    assert_eq!(hmg_search(&hat, &[1, 2, 3, 4, 10], 0), vec![vec![1, 2, 3, 4, 10]]);
}

#[test]
fn duplicate_insertions_are_both_retrievable() {
    let f = dataset(&["1 2 3", "1 2 3"]);
    let hat = Hat::build(f.path(), 100, 0).unwrap();
    let mut q = OrdSet::from_sorted(vec![1, 2, 3]);
    let mut h = 0i64;
    let mut out: Collector<_> = Collector::new();
    hat.search_hmg(&mut q, &mut h, &mut out);
    assert_eq!(out.len(), 2);
}
