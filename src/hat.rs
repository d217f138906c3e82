//! Length-banded hat: partitions a corpus by set length into bands, each
//! owning its own trie, so a query is confined to a narrow length range
//! rather than walking one trie holding the entire dataset.

use std::cell::RefCell;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::rc::Rc;

use log::{debug, info};

use crate::childmap::ChildMap;
use crate::collector::Collector;
use crate::dataset;
use crate::error::{Error, Result};
use crate::ordset::OrdSet;
use crate::trie::{self, TrieNode};

/// Multiple length-banded trie roots, keyed by each band's upper bound.
pub struct Hat {
    bands: ChildMap<Rc<RefCell<TrieNode>>>,
}

impl Hat {
    /// Builds a hat from `path`, targeting `band_population` sets per band,
    /// and replicating every corpus set into every band reachable within
    /// `hamming_budget` of its own band (see §4.5 Phase C).
    ///
    /// Reads the dataset twice: once to histogram lengths (Phase A/B), once
    /// to actually insert (Phase C) — mirroring the original's `rewind`
    /// between `compute_statistics` and `load_dataset`.
    pub fn build(path: &Path, band_population: usize, hamming_budget: i64) -> Result<Hat> {
        let stats = Self::compute_statistics(path)?;
        let boundaries = Self::partition(&stats, band_population);
        debug!("hat: {} band(s), boundaries={:?}", boundaries.len(), boundaries);

        let mut bands = ChildMap::new();
        for hi in &boundaries {
            bands.insert(*hi, TrieNode::new_rc());
        }

        let inserted = Self::load_dataset(path, &mut bands, hamming_budget)?;
        info!("hat: loaded {inserted} corpus set(s) across {} band(s)", boundaries.len());

        Ok(Hat { bands })
    }

    fn open(path: &Path) -> Result<BufReader<File>> {
        let file = File::open(path).map_err(|source| Error::DatasetOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(BufReader::new(file))
    }

    /// Phase A: one streaming pass counting how many sets have each length.
    /// `stats[L]` is the number of corpus sets of length `L`.
    fn compute_statistics(path: &Path) -> Result<Vec<usize>> {
        let reader = Self::open(path)?;
        let mut stats: Vec<usize> = Vec::new();
        for set in dataset::read_sets(reader) {
            let len = set.len();
            if stats.len() <= len {
                stats.resize(len + 1, 0);
            }
            stats[len] += 1;
        }
        Ok(stats)
    }

    /// Phase B: derives band boundaries from the length histogram so each
    /// band holds roughly `band_population` sets. Returns the `hi` values of
    /// each band in ascending order; the first band covers `[1, hi[0]]`.
    fn partition(stats: &[usize], band_population: usize) -> Vec<u32> {
        let mut boundaries = Vec::new();
        let mut part_cnt: usize = 1;
        let mut part_sum: usize = 0;
        let max_len = stats.len().saturating_sub(1);
        let mut triggered_last = false;

        for l in 0..=max_len {
            let cnt = stats.get(l).copied().unwrap_or(0);
            part_sum += cnt.min(band_population.max(1));
            triggered_last = false;
            if part_sum >= part_cnt * band_population.max(1) {
                boundaries.push(l as u32);
                part_cnt += 1;
                triggered_last = true;
            }
        }

        if !triggered_last || boundaries.is_empty() {
            let last = max_len as u32;
            if boundaries.last().copied() != Some(last) {
                boundaries.push(last);
            }
        }
        boundaries
    }

    /// Phase C: inserts each corpus set into its primary band plus every
    /// neighboring band within `hamming_budget` of it.
    fn load_dataset(path: &Path, bands: &mut ChildMap<Rc<RefCell<TrieNode>>>, hamming_budget: i64) -> Result<usize> {
        let reader = Self::open(path)?;
        let mut count = 0usize;
        for set in dataset::read_sets(reader) {
            let len = set.len() as u32;
            let set = Rc::new(set);
            let idx = bands.partition_point_at_least(len);
            if idx >= bands.len() {
                continue;
            }

            let (_, primary_root) = bands.get(idx).expect("idx in range");
            trie::insert(primary_root, Rc::clone(&set));
            count += 1;

            let mut j = idx;
            while let Some((next_hi, next_root)) = bands.get(j + 1) {
                if (next_hi as i64) - (len as i64) + 1 > hamming_budget {
                    break;
                }
                trie::insert(next_root, Rc::clone(&set));
                j += 1;
            }

            let mut k = idx;
            while k > 0 {
                let (prev_hi, prev_root) = bands.get(k - 1).expect("k-1 in range");
                if (len as i64) - (prev_hi as i64) > hamming_budget {
                    break;
                }
                trie::insert(prev_root, Rc::clone(&set));
                k -= 1;
            }
        }
        Ok(count)
    }

    /// Phase D: routes `query` to the band with the smallest `hi >=
    /// query.len()` and runs the Hamming search there. Appends matches
    /// (shared `Rc<OrdSet>` references) to `out`; `query`'s cursor and `h`
    /// are restored to their entry values.
    pub fn search_hmg(&self, query: &mut OrdSet, h: &mut i64, out: &mut Collector<Rc<OrdSet>>) {
        let idx = self.bands.partition_point_at_least(query.len() as u32);
        if let Some((_, root)) = self.bands.get(idx) {
            trie::simsearch_hmg(root, query, h, out);
        }
    }

    /// Phase D for the LCS measure: same band routing, `add`/`skp` budgets.
    pub fn search_lcs(&self, query: &mut OrdSet, add: &mut i64, skp: &mut i64, out: &mut Collector<OrdSet>) {
        let idx = self.bands.partition_point_at_least(query.len() as u32);
        if let Some((_, root)) = self.bands.get(idx) {
            trie::simsearch_lcs(root, query, add, skp, out);
        }
    }

    /// Number of bands the hat partitioned the corpus into.
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }
}
