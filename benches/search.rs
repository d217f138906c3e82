//! Load-then-search timing: builds a length-banded index from a synthetic
//! corpus once per benchmark group, then repeatedly issues bounded-Hamming
//! and bounded-LCS queries against it.

use std::io::Write;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use simsets::collector::Collector;
use simsets::hat::Hat;
use simsets::ordset::OrdSet;

/// Deterministic synthetic corpus: `n` sets of `width` consecutive integers
/// starting at every offset `0..n`, so consecutive sets overlap heavily —
/// close enough in Hamming/LCS distance to exercise the similarity
/// recursions rather than just the min/max pruning.
fn synthetic_corpus(n: u32, width: u32) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("create temp dataset");
    for k in 0..n {
        let elems: Vec<String> = (k..k + width).map(|e| e.to_string()).collect();
        writeln!(f, "{}", elems.join(" ")).expect("write dataset line");
    }
    f.flush().expect("flush dataset");
    f
}

fn bench_hamming(c: &mut Criterion) {
    let corpus = synthetic_corpus(2_000, 8);
    let hat = Hat::build(corpus.path(), 200, 2).expect("build index");

    let mut group = c.benchmark_group("hamming_search");
    for budget in [0i64, 1, 2] {
        group.bench_with_input(BenchmarkId::from_parameter(budget), &budget, |b, &budget| {
            b.iter(|| {
                let mut query = OrdSet::from_sorted((1000..1008).collect());
                let mut h = budget;
                let mut out: Collector<_> = Collector::new();
                hat.search_hmg(&mut query, &mut h, &mut out);
                out.len()
            });
        });
    }
    group.finish();
}

fn bench_lcs(c: &mut Criterion) {
    let corpus = synthetic_corpus(2_000, 8);
    let hat = Hat::build(corpus.path(), 200, 2).expect("build index");

    let mut group = c.benchmark_group("lcs_search");
    for (add, skp) in [(0i64, 0i64), (1, 1), (2, 2)] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{add}-{skp}")), &(add, skp), |b, &(add, skp)| {
            b.iter(|| {
                let mut query = OrdSet::from_sorted((1000..1008).collect());
                let mut a = add;
                let mut s = skp;
                let mut out: Collector<OrdSet> = Collector::new();
                hat.search_lcs(&mut query, &mut a, &mut s, &mut out);
                out.len()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hamming, bench_lcs);
criterion_main!(benches);
