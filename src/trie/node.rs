use std::cell::RefCell;
use std::rc::Rc;

use crate::childmap::ChildMap;
use crate::ordset::OrdSet;

/// The three shapes a trie node can take. `Empty` only ever appears
/// momentarily, on a freshly allocated node before its first insert.
#[derive(Debug, Clone, Default)]
pub enum NodeShape {
    #[default]
    Empty,
    /// A single corpus set's remaining suffix, stored inline rather than
    /// split into a one-child-per-level branch chain. `start` is the index
    /// into `set`'s elements at which the suffix begins.
    Tail { set: Rc<OrdSet>, start: usize },
    Branch { children: ChildMap<Rc<RefCell<TrieNode>>> },
}

/// One node of the trie.
///
/// `terminal` marks that the path from the root to this node spells a
/// complete corpus set; it may coexist with a `Branch` shape (a shorter set
/// is a prefix of a longer one) but never with `Tail` (a tail already stands
/// for one set's entire remainder, terminal or not).
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    pub shape: NodeShape,
    pub terminal: Option<Rc<OrdSet>>,
    min: Option<i64>,
    max: Option<i64>,
    count: usize,
}

impl TrieNode {
    pub fn empty() -> Self {
        TrieNode::default()
    }

    pub fn new_rc() -> Rc<RefCell<TrieNode>> {
        Rc::new(RefCell::new(TrieNode::empty()))
    }

    pub fn is_unvisited(&self) -> bool {
        matches!(self.shape, NodeShape::Empty) && self.terminal.is_none()
    }

    /// Minimum residual length of any set that has passed through this node.
    pub fn min(&self) -> i64 {
        self.min.unwrap_or(0)
    }

    /// Maximum residual length of any set that has passed through this node.
    pub fn max(&self) -> i64 {
        self.max.unwrap_or(0)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    fn touch_bounds(&mut self, residual: i64) {
        self.min = Some(self.min.map_or(residual, |m| m.min(residual)));
        self.max = Some(self.max.map_or(residual, |m| m.max(residual)));
        self.count += 1;
    }
}

/// Inserts `set` into the trie rooted at `root`.
pub fn insert(root: &Rc<RefCell<TrieNode>>, set: Rc<OrdSet>) {
    insert_at(root, &set, 0);
}

fn insert_at(node: &Rc<RefCell<TrieNode>>, set: &Rc<OrdSet>, pos: usize) {
    let elems = set.as_slice();
    let residual = (elems.len() - pos) as i64;
    node.borrow_mut().touch_bounds(residual);

    let needs_split = matches!(node.borrow().shape, NodeShape::Tail { .. });
    if needs_split {
        let (old_set, old_start) = match &node.borrow().shape {
            NodeShape::Tail { set, start } => (Rc::clone(set), *start),
            _ => unreachable!(),
        };
        node.borrow_mut().shape = NodeShape::Branch { children: ChildMap::new() };
        insert_at(node, &old_set, old_start);
        insert_at(node, set, pos);
        return;
    }

    let is_empty = node.borrow().is_unvisited();
    if is_empty {
        if residual == 0 {
            node.borrow_mut().terminal = Some(Rc::clone(set));
        } else {
            node.borrow_mut().shape = NodeShape::Tail { set: Rc::clone(set), start: pos };
        }
        return;
    }

    // Branch (possibly freshly split, possibly already established).
    if pos == elems.len() {
        node.borrow_mut().terminal = Some(Rc::clone(set));
        return;
    }
    let el = elems[pos];
    let child = {
        let mut n = node.borrow_mut();
        let children = match &mut n.shape {
            NodeShape::Branch { children } => children,
            NodeShape::Empty => {
                n.shape = NodeShape::Branch { children: ChildMap::new() };
                match &mut n.shape {
                    NodeShape::Branch { children } => children,
                    _ => unreachable!(),
                }
            }
            NodeShape::Tail { .. } => unreachable!("tail already split above"),
        };
        if children.lookup(el).is_none() {
            children.insert(el, TrieNode::new_rc());
        }
        Rc::clone(children.lookup(el).expect("just inserted"))
    };
    insert_at(&child, set, pos + 1);
}
