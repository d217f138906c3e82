//! `simsets-hamming <h> <P> <dataset>` — loads a corpus into a length-banded
//! set-trie and answers bounded-Hamming similarity queries read from stdin.
//!
//! Output format: a `# hamming=<h>` header, then per query a `? <elements>`
//! echo line, zero or more result lines (one corpus set each), and a
//! `= <elapsed_nanoseconds>` trailer.

use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;

use simsets::collector::Collector;
use simsets::config::{HammingArgs, HammingConfig};
use simsets::dataset;
use simsets::hat::Hat;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config: HammingConfig = HammingArgs::parse().into();

    info!(
        "loading dataset {:?} (band_population={}, hamming={})",
        config.dataset, config.band_population, config.hamming
    );
    let hat = Hat::build(&config.dataset, config.band_population, config.hamming)
        .with_context(|| format!("failed to load dataset {:?}", config.dataset))?;
    info!("loaded {} band(s)", hat.band_count());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    writeln!(out, "# hamming={}", config.hamming)?;

    let mut results: Collector<_> = Collector::new();
    for line in stdin.lock().lines() {
        let line = line?;
        let Some(mut query) = dataset::parse_line(&line) else {
            continue;
        };

        write!(out, "? ")?;
        writeln!(out, "{query}")?;

        results.reset();
        let mut h = config.hamming;

        let start = Instant::now();
        hat.search_hmg(&mut query, &mut h, &mut results);
        let elapsed = start.elapsed();

        for set in results.iter() {
            writeln!(out, "{set}")?;
        }
        writeln!(out, "= {}", elapsed.as_nanos())?;
    }

    out.flush()?;
    Ok(())
}
