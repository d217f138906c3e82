//! An in-memory index for approximate set similarity search.
//!
//! Given a corpus of sorted sets of non-negative integers and a query set,
//! [`hat::Hat`] retrieves every corpus set whose edit distance to the query
//! lies within a budget — Hamming distance (symmetric difference bounded by
//! `h`) or LCS distance (at most `add` insertions plus `skp` deletions).
//!
//! The corpus is partitioned by set length into bands (`hat`), each owning a
//! prefix-sharing trie with inline tail compression (`trie`) over sorted
//! integer sets with cursors (`ordset`). Results accumulate in a resettable
//! [`collector::Collector`].

pub mod childmap;
pub mod collector;
pub mod config;
pub mod dataset;
pub mod error;
pub mod hat;
pub mod ordset;
pub mod trie;

pub use error::{Error, Result};
pub use hat::Hat;
