use std::cell::RefCell;
use std::rc::Rc;

use crate::childmap::ChildMap;
use crate::collector::Collector;
use crate::ordset::{tail_similar_rev_hmg_at, OrdSet};

use super::node::{NodeShape, TrieNode};

/// Finds every corpus set reachable from `root` within Hamming distance `h`
/// of `query`, appending matches to `out`.
///
/// `query`'s cursor and `h` are restored to their entry values before this
/// returns, so a caller may reuse both for a following, independent search.
pub fn simsearch_hmg(
    root: &Rc<RefCell<TrieNode>>,
    query: &mut OrdSet,
    h: &mut i64,
    out: &mut Collector<Rc<OrdSet>>,
) {
    search(root, query, h, out);
}

fn search(node: &Rc<RefCell<TrieNode>>, q: &mut OrdSet, h: &mut i64, out: &mut Collector<Rc<OrdSet>>) {
    let n = node.borrow();
    if n.is_unvisited() {
        return;
    }

    let qr = q.tail_size();
    if qr + *h < n.min() || qr > n.max() + *h {
        return;
    }

    if let Some(set) = &n.terminal {
        if *h - qr >= 0 {
            out.append(Rc::clone(set));
        }
    }

    match &n.shape {
        NodeShape::Empty => {}
        NodeShape::Tail { set, start } => {
            let tmp_h = *h;
            let sr = set.as_slice().len() as i64 - *start as i64;
            if (qr - sr).abs() <= tmp_h {
                let mut budget = tmp_h;
                if tail_similar_rev_hmg_at(q.as_slice(), q.cursor(), set.as_slice(), *start as i64 - 1, &mut budget) {
                    out.append(Rc::clone(set));
                }
            }
        }
        NodeShape::Branch { children } => {
            search_branch(children, q, h, out);
        }
    }
}

fn search_branch(
    children: &ChildMap<Rc<RefCell<TrieNode>>>,
    q: &mut OrdSet,
    h: &mut i64,
    out: &mut Collector<Rc<OrdSet>>,
) {
    let saved_h = *h;
    let saved_cursor = q.save_cursor();
    let mut idx = 0usize;

    while let (Some(nel), Some((ck, _))) = (q.peek(), children.get(idx)) {
        if nel > ck {
            if *h > 0 {
                loop {
                    let (ck2, child) = match children.get(idx) {
                        Some(entry) => entry,
                        None => break,
                    };
                    if ck2 >= nel {
                        break;
                    }
                    *h -= 1;
                    search(child, q, h, out);
                    *h += 1;
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
            search(child, q, h, out);
            q.unread(1);
            idx += 1;

            if *h > 0 {
                q.read();
                *h -= 1;
                continue;
            } else {
                q.restore_cursor(saved_cursor);
                *h = saved_h;
                return;
            }
        } else {
            // nel < ck
            if *h > 0 {
                q.read();
                *h -= 1;
                continue;
            } else {
                q.restore_cursor(saved_cursor);
                *h = saved_h;
                return;
            }
        }
    }

    if q.peek().is_none() && *h > 0 {
        while let Some((_, child)) = children.get(idx) {
            *h -= 1;
            search(child, q, h, out);
            *h += 1;
            idx += 1;
        }
    }

    q.restore_cursor(saved_cursor);
    *h = saved_h;
}
