//! Plain-text store/load for a bare trie (no banding), per §4.3.4.
//!
//! `store` walks depth-first, left to right, emitting one line per terminal
//! and one line per tail; `load` is just repeated [`super::insert`].

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use crate::ordset::OrdSet;

use super::node::{insert, NodeShape, TrieNode};

/// Writes every corpus set reachable from `root` to `w`, one per line, in
/// depth-first left-to-right order.
pub fn store<W: Write>(root: &Rc<RefCell<TrieNode>>, w: &mut W) -> io::Result<()> {
    store_at(root, w)
}

fn store_at<W: Write>(node: &Rc<RefCell<TrieNode>>, w: &mut W) -> io::Result<()> {
    let n = node.borrow();
    match &n.shape {
        NodeShape::Empty => {
            if let Some(set) = &n.terminal {
                writeln!(w, "{set}")?;
            }
        }
        NodeShape::Tail { set, .. } => {
            writeln!(w, "{set}")?;
        }
        NodeShape::Branch { children } => {
            if let Some(set) = &n.terminal {
                writeln!(w, "{set}")?;
            }
            for (_, child) in children.iter() {
                store_at(child, w)?;
            }
        }
    }
    Ok(())
}

/// Reads one set per line from `r` and inserts each into a fresh trie rooted
/// at `root`. Malformed lines are skipped (see `dataset::parse_line`).
pub fn load<R: BufRead>(root: &Rc<RefCell<TrieNode>>, r: R) -> io::Result<()> {
    for line in r.lines() {
        let line = line?;
        if let Some(set) = crate::dataset::parse_line(&line) {
            insert(root, Rc::new(set));
        }
    }
    Ok(())
}
