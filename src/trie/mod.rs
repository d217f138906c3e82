//! Set-trie with tail compression.
//!
//! A corpus of sorted integer sets is folded into a trie that shares common
//! prefixes and, while a subtree still holds only a single set, stores that
//! set's remaining suffix inline as a [`NodeShape::Tail`] rather than paying
//! for a chain of one-child branch nodes.

mod hamming;
mod lcs;
mod node;
mod serialize;

pub use hamming::simsearch_hmg;
pub use lcs::simsearch_lcs;
pub use node::{insert, NodeShape, TrieNode};
pub use serialize::{load, store};
