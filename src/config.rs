//! Runtime configuration, replacing the original's file-scope `ST_*` globals
//! with a plain value built once from parsed CLI arguments.

use std::path::PathBuf;

use clap::Parser;

/// `simsets-hamming <hamming> <band_population> <dataset>`
#[derive(Debug, Clone, Parser)]
#[clap(author, version, about = "Bounded-Hamming approximate set similarity search")]
pub struct HammingArgs {
    /// Maximum symmetric-difference size a result may have relative to a query.
    pub hamming: i64,
    /// Target number of sets per length band.
    pub band_population: usize,
    /// Path to the corpus dataset (one whitespace-separated set per line).
    pub dataset: PathBuf,
}

/// Configuration for the bounded-Hamming search binary.
#[derive(Debug, Clone)]
pub struct HammingConfig {
    /// Maximum symmetric-difference size a result may have relative to the query.
    pub hamming: i64,
    /// Target number of sets per length band.
    pub band_population: usize,
    pub dataset: PathBuf,
}

impl From<HammingArgs> for HammingConfig {
    fn from(args: HammingArgs) -> Self {
        HammingConfig {
            hamming: args.hamming,
            band_population: args.band_population,
            dataset: args.dataset,
        }
    }
}

/// `simsets-lcs <add> <skp> <band_population> <dataset>`
#[derive(Debug, Clone, Parser)]
#[clap(author, version, about = "Bounded-LCS approximate set similarity search")]
pub struct LcsArgs {
    /// Insertions into the query still allowed.
    pub add: i64,
    /// Deletions from the query still allowed.
    pub skp: i64,
    /// Target number of sets per length band.
    pub band_population: usize,
    /// Path to the corpus dataset (one whitespace-separated set per line).
    pub dataset: PathBuf,
}

/// Configuration for the bounded-LCS search binary.
#[derive(Debug, Clone)]
pub struct LcsConfig {
    /// Insertions into the query still allowed.
    pub add: i64,
    /// Deletions from the query still allowed.
    pub skp: i64,
    pub band_population: usize,
    pub dataset: PathBuf,
}

impl From<LcsArgs> for LcsConfig {
    fn from(args: LcsArgs) -> Self {
        LcsConfig {
            add: args.add,
            skp: args.skp,
            band_population: args.band_population,
            dataset: args.dataset,
        }
    }
}
