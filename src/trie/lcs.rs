use std::cell::RefCell;
use std::rc::Rc;

use crate::childmap::ChildMap;
use crate::collector::Collector;
use crate::ordset::{tail_similar_lcs_at, OrdSet};

use super::node::{NodeShape, TrieNode};

/// Finds every corpus set obtainable from `query` by at most `add` insertions
/// and `skp` deletions, appending newly allocated path copies to `out`.
///
/// `query`'s cursor and `add`/`skp` are restored to their entry values before
/// this returns, so a caller may reuse both for a following, independent
/// search.
pub fn simsearch_lcs(
    root: &Rc<RefCell<TrieNode>>,
    query: &mut OrdSet,
    add: &mut i64,
    skp: &mut i64,
    out: &mut Collector<OrdSet>,
) {
    let mut path = OrdSet::new();
    search(root, query, &mut path, add, skp, out);
}

fn search(
    node: &Rc<RefCell<TrieNode>>,
    q: &mut OrdSet,
    path: &mut OrdSet,
    add: &mut i64,
    skp: &mut i64,
    out: &mut Collector<OrdSet>,
) {
    let n = node.borrow();
    if n.is_unvisited() {
        return;
    }

    let qr = q.tail_size();
    if n.terminal.is_some() && *skp - qr >= 0 {
        out.append(path.clone());
    }

    match &n.shape {
        NodeShape::Empty => {}
        NodeShape::Tail { set, start } => {
            let (tmp_add, tmp_skp) = (*add, *skp);
            if tail_similar_lcs_at(set.as_slice(), *start as i64 - 1, q.as_slice(), q.cursor(), add, skp) {
                // Mirrors the C original: a tail match emits the whole stored
                // corpus set, not a reconstruction of `path` plus its suffix.
                out.append((**set).clone());
            }
            *add = tmp_add;
            *skp = tmp_skp;
        }
        NodeShape::Branch { children } => {
            search_branch(children, q, path, add, skp, out);
        }
    }
}

fn search_branch(
    children: &ChildMap<Rc<RefCell<TrieNode>>>,
    q: &mut OrdSet,
    path: &mut OrdSet,
    add: &mut i64,
    skp: &mut i64,
    out: &mut Collector<OrdSet>,
) {
    let saved_add = *add;
    let saved_skp = *skp;
    let saved_cursor = q.save_cursor();
    let mut idx = 0usize;

    while let (Some(nel), Some((ck, _))) = (q.peek(), children.get(idx)) {
        if nel > ck {
            if *add > 0 {
                loop {
                    let (ck2, child) = match children.get(idx) {
                        Some(entry) => entry,
                        None => break,
                    };
                    if ck2 >= nel {
                        break;
                    }
                    path.append(ck2);
                    *add -= 1;
                    search(child, q, path, add, skp, out);
                    *add += 1;
                    path.pop();
                    idx += 1;
                }
                continue;
            } else {
                idx = children.partition_point_at_least(nel);
                continue;
            }
        } else if nel == ck {
            let (_, child) = children.get(idx).expect("peeked above");
            q.read();
            path.append(nel);
            search(child, q, path, add, skp, out);
            path.pop();
            q.unread(1);
            idx += 1;

            if *skp > 0 {
                q.read();
                *skp -= 1;
                continue;
            } else {
                q.restore_cursor(saved_cursor);
                *add = saved_add;
                *skp = saved_skp;
                return;
            }
        } else {
            // nel < ck
            if *skp > 0 {
                q.read();
                *skp -= 1;
                continue;
            } else {
                q.restore_cursor(saved_cursor);
                *add = saved_add;
                *skp = saved_skp;
                return;
            }
        }
    }

    if q.peek().is_none() && *add > 0 {
        while let Some((ck, child)) = children.get(idx) {
            path.append(ck);
            *add -= 1;
            search(child, q, path, add, skp, out);
            *add += 1;
            path.pop();
            idx += 1;
        }
    }

    q.restore_cursor(saved_cursor);
    *add = saved_add;
    *skp = saved_skp;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::node::insert;

    fn set(vals: &[u32]) -> Rc<OrdSet> {
        Rc::new(OrdSet::from_sorted(vals.to_vec()))
    }

    fn build(sets: &[&[u32]]) -> Rc<RefCell<TrieNode>> {
        let root = TrieNode::new_rc();
        for s in sets {
            insert(&root, set(s));
        }
        root
    }

    fn search_result(root: &Rc<RefCell<TrieNode>>, query: &[u32], add: i64, skp: i64) -> Vec<Vec<u32>> {
        let mut q = OrdSet::from_sorted(query.to_vec());
        let mut a = add;
        let mut s = skp;
        let mut out = Collector::new();
        simsearch_lcs(root, &mut q, &mut a, &mut s, &mut out);
        assert_eq!(a, add, "add budget must be restored after the call");
        assert_eq!(s, skp, "skp budget must be restored after the call");
        assert_eq!(q.cursor(), -1, "query cursor must be restored after the call");
        let mut results: Vec<Vec<u32>> = out.iter().map(|r| r.as_slice().to_vec()).collect();
        results.sort();
        results.dedup();
        results
    }

    #[test]
    fn overlapping_triples_are_found() {
        let sets: Vec<Vec<u32>> = (1u32..=10).map(|k| vec![k, k + 1, k + 2]).collect();
        let refs: Vec<&[u32]> = sets.iter().map(|s| s.as_slice()).collect();
        let root = build(&refs);
        let found = search_result(&root, &[3, 4], 1, 1);
        // {1,2,3} and {4,5,6} each need add=2 (inserting two elements absent
        // from the query), exceeding add=1; only the triples reachable with
        // a single insertion survive.
        assert_eq!(found, vec![vec![2, 3, 4], vec![3, 4, 5]]);
    }

    #[test]
    fn empty_query_budget_bounds_prefix_length() {
        let root = build(&[&[1], &[1, 2], &[1, 2, 3], &[1, 2, 3, 4]]);
        let found = search_result(&root, &[], 0, 3);
        assert_eq!(found, vec![vec![1], vec![1, 2], vec![1, 2, 3]]);
    }

    #[test]
    fn exact_match_with_zero_budgets() {
        let root = build(&[&[1, 2, 3], &[1, 2, 4]]);
        assert_eq!(search_result(&root, &[1, 2, 3], 0, 0), vec![vec![1, 2, 3]]);
    }
}
