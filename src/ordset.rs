//! A sorted sequence of distinct integers with a cursor, plus the
//! tail-similarity helpers the trie search recursions merge-walk over.
//!
//! The cursor is transient traversal state, not part of a set's identity;
//! every recursive caller that reads through a cursor is responsible for
//! restoring it before returning (see the crate's cursor-invariance tests).

use std::fmt;

/// An ascending sequence of distinct `u32` elements with a read cursor.
///
/// The cursor starts at `-1` ("before the first element"); `read`/`peek`
/// operate relative to it, mirroring the C original's `set_open`/`set_read`
/// pair rather than a standard Rust iterator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrdSet {
    elems: Vec<u32>,
    cursor: i64,
}

impl OrdSet {
    pub fn new() -> Self {
        OrdSet { elems: Vec::new(), cursor: -1 }
    }

    pub fn with_capacity(cap: usize) -> Self {
        OrdSet { elems: Vec::with_capacity(cap), cursor: -1 }
    }

    pub fn from_sorted(elems: Vec<u32>) -> Self {
        OrdSet { elems, cursor: -1 }
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Appends `el` at the end. Caller is responsible for keeping the
    /// sequence sorted and distinct.
    pub fn append(&mut self, el: u32) {
        self.elems.push(el);
    }

    /// Keep-sorted insertion; relocates the cursor onto the inserted element.
    pub fn insert(&mut self, el: u32) {
        match self.elems.binary_search(&el) {
            Ok(pos) => self.cursor = pos as i64,
            Err(pos) => {
                self.elems.insert(pos, el);
                self.cursor = pos as i64;
            }
        }
    }

    /// Binary search for `el`. On a hit, the cursor lands on the element; on
    /// a miss it lands on the predecessor (possibly `-1`).
    pub fn lookup(&mut self, el: u32) -> bool {
        match self.elems.binary_search(&el) {
            Ok(pos) => {
                self.cursor = pos as i64;
                true
            }
            Err(pos) => {
                self.cursor = pos as i64 - 1;
                false
            }
        }
    }

    /// Resets the cursor to before the first element.
    pub fn open(&mut self) {
        self.cursor = -1;
    }

    /// Positions the cursor so the next `read` yields `el` if present, else
    /// the first element greater than `el`. Returns whether `el` was found.
    pub fn open_at(&mut self, el: u32) -> bool {
        self.lookup(el)
    }

    /// Element at cursor + 1, without moving the cursor.
    pub fn peek(&self) -> Option<u32> {
        let idx = self.cursor + 1;
        if idx >= 0 && (idx as usize) < self.elems.len() {
            Some(self.elems[idx as usize])
        } else {
            None
        }
    }

    /// Element at cursor + 1, advancing the cursor past it.
    pub fn read(&mut self) -> Option<u32> {
        let v = self.peek();
        if v.is_some() {
            self.cursor += 1;
        }
        v
    }

    /// Moves the cursor back by `n` positions, never past `-1`.
    pub fn unread(&mut self, n: i64) {
        self.cursor = (self.cursor - n).max(-1);
    }

    /// Number of elements strictly after the cursor.
    pub fn tail_size(&self) -> i64 {
        self.elems.len() as i64 - (self.cursor + 1)
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<u32> {
        let v = self.elems.pop();
        if v.is_some() {
            let last = self.elems.len() as i64 - 1;
            if self.cursor > last {
                self.cursor = last;
            }
        }
        v
    }

    pub fn save_cursor(&self) -> i64 {
        self.cursor
    }

    pub fn restore_cursor(&mut self, c: i64) {
        self.cursor = c;
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Iterates all elements from the start, leaving the cursor untouched.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.elems.iter().copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.elems
    }
}

impl fmt::Display for OrdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for e in &self.elems {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", e)?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<u32> for OrdSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut elems: Vec<u32> = iter.into_iter().collect();
        elems.sort_unstable();
        OrdSet { elems, cursor: -1 }
    }
}

/// Merge-walks the tails of `a` and `b` from their current cursors forward,
/// spending one from `budget` for every element present on exactly one side.
/// Restores both cursors before returning, regardless of outcome.
pub fn tail_similar_hmg(a: &mut OrdSet, b: &mut OrdSet, budget: &mut i64) -> bool {
    let (ac, bc) = (a.save_cursor(), b.save_cursor());
    let ok = tail_similar_hmg_inner(a, b, budget);
    a.restore_cursor(ac);
    b.restore_cursor(bc);
    ok
}

fn tail_similar_hmg_inner(a: &mut OrdSet, b: &mut OrdSet, budget: &mut i64) -> bool {
    loop {
        match (a.peek(), b.peek()) {
            (None, None) => return true,
            (Some(_), None) => {
                let rem = a.tail_size();
                return if rem <= *budget {
                    *budget -= rem;
                    true
                } else {
                    false
                };
            }
            (None, Some(_)) => {
                let rem = b.tail_size();
                return if rem <= *budget {
                    *budget -= rem;
                    true
                } else {
                    false
                };
            }
            (Some(x), Some(y)) => {
                if x == y {
                    a.read();
                    b.read();
                } else if *budget <= 0 {
                    return false;
                } else if x < y {
                    a.read();
                    *budget -= 1;
                } else {
                    b.read();
                    *budget -= 1;
                }
            }
        }
    }
}

/// Same predicate as [`tail_similar_hmg`], but walked from the sequence ends
/// toward the cursors. This is the variant wired into the live Hamming
/// search, on the heuristic that elements near the tail are rarer and so
/// mismatches surface earlier.
pub fn tail_similar_rev_hmg(a: &OrdSet, b: &OrdSet, budget: &mut i64) -> bool {
    tail_similar_rev_hmg_at(&a.elems, a.cursor, &b.elems, b.cursor, budget)
}

/// Slice-and-virtual-cursor form of [`tail_similar_rev_hmg`]. Lets the trie
/// compare a query's real cursor against a corpus set's tail without needing
/// mutable access to a set that may be shared (via `Rc`) across length bands.
pub fn tail_similar_rev_hmg_at(a: &[u32], a_cursor: i64, b: &[u32], b_cursor: i64, budget: &mut i64) -> bool {
    let mut i = a.len() as i64 - 1;
    let mut j = b.len() as i64 - 1;
    let ai = a_cursor;
    let bi = b_cursor;
    loop {
        match (i > ai, j > bi) {
            (false, false) => return true,
            (true, false) => {
                let rem = i - ai;
                return if rem <= *budget {
                    *budget -= rem;
                    true
                } else {
                    false
                };
            }
            (false, true) => {
                let rem = j - bi;
                return if rem <= *budget {
                    *budget -= rem;
                    true
                } else {
                    false
                };
            }
            (true, true) => {
                let x = a[i as usize];
                let y = b[j as usize];
                if x == y {
                    i -= 1;
                    j -= 1;
                } else if *budget <= 0 {
                    return false;
                } else if x > y {
                    i -= 1;
                    *budget -= 1;
                } else {
                    j -= 1;
                    *budget -= 1;
                }
            }
        }
    }
}

/// Merge-walks the tails of `a` (the trie side) and `b` (the query side),
/// spending `add` when `a` holds an element `b` lacks, `skp` when `b` holds
/// an element `a` lacks. Restores both cursors before returning.
pub fn tail_similar_lcs(a: &mut OrdSet, b: &mut OrdSet, add: &mut i64, skp: &mut i64) -> bool {
    let (ac, bc) = (a.save_cursor(), b.save_cursor());
    let ok = tail_similar_lcs_inner(a, b, add, skp);
    a.restore_cursor(ac);
    b.restore_cursor(bc);
    ok
}

/// Slice-and-virtual-cursor form of [`tail_similar_lcs`], for comparing a
/// shared corpus set's tail against the query without mutable access to it.
pub fn tail_similar_lcs_at(a: &[u32], a_cursor: i64, b: &[u32], b_cursor: i64, add: &mut i64, skp: &mut i64) -> bool {
    let mut ai = a_cursor;
    let mut bi = b_cursor;
    let peek_a = |ai: i64| -> Option<u32> {
        let idx = ai + 1;
        if idx >= 0 && (idx as usize) < a.len() { Some(a[idx as usize]) } else { None }
    };
    let peek_b = |bi: i64| -> Option<u32> {
        let idx = bi + 1;
        if idx >= 0 && (idx as usize) < b.len() { Some(b[idx as usize]) } else { None }
    };
    loop {
        match (peek_a(ai), peek_b(bi)) {
            (None, None) => return true,
            (Some(_), None) => {
                let rem = a.len() as i64 - (ai + 1);
                return if rem <= *add {
                    *add -= rem;
                    true
                } else {
                    false
                };
            }
            (None, Some(_)) => {
                let rem = b.len() as i64 - (bi + 1);
                return if rem <= *skp {
                    *skp -= rem;
                    true
                } else {
                    false
                };
            }
            (Some(x), Some(y)) => {
                if x == y {
                    ai += 1;
                    bi += 1;
                } else if x < y {
                    if *add <= 0 {
                        return false;
                    }
                    ai += 1;
                    *add -= 1;
                } else {
                    if *skp <= 0 {
                        return false;
                    }
                    bi += 1;
                    *skp -= 1;
                }
            }
        }
    }
}

fn tail_similar_lcs_inner(a: &mut OrdSet, b: &mut OrdSet, add: &mut i64, skp: &mut i64) -> bool {
    loop {
        match (a.peek(), b.peek()) {
            (None, None) => return true,
            (Some(_), None) => {
                let rem = a.tail_size();
                return if rem <= *add {
                    *add -= rem;
                    true
                } else {
                    false
                };
            }
            (None, Some(_)) => {
                let rem = b.tail_size();
                return if rem <= *skp {
                    *skp -= rem;
                    true
                } else {
                    false
                };
            }
            (Some(x), Some(y)) => {
                if x == y {
                    a.read();
                    b.read();
                } else if x < y {
                    if *add <= 0 {
                        return false;
                    }
                    a.read();
                    *add -= 1;
                } else {
                    if *skp <= 0 {
                        return false;
                    }
                    b.read();
                    *skp -= 1;
                }
            }
        }
    }
}
