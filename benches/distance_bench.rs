//! Benchmarks for the distance engine and document ranking.
//!
//! `strsim` is the baseline: it shows what a specialized unit-weight
//! Levenshtein costs, against which the weighted DP's overhead is measured.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tokmatch::{edit_distance, rank_documents, EditWeights};

/// Word pairs of increasing length for the DP benchmarks.
const WORD_PAIRS: &[(&str, &str)] = &[
    ("cat", "bat"),
    ("kitten", "sitting"),
    ("levenshtein", "damerau"),
    ("pneumonoultramicroscopic", "pseudopseudohypoparathyroidism"),
];

/// A small corpus of technical phrases for the ranking benchmark.
const CORPUS: &[&str] = &[
    "rust systems programming language",
    "fuzzy string matching algorithms",
    "dynamic programming edit distance",
    "token based similarity joins",
    "the quick brown fox jumps over the lazy dog",
    "normalized edit distance scoring",
    "whitespace tokenization and case folding",
    "document ranking by aggregate token score",
];

fn bench_edit_distance(c: &mut Criterion) {
    let unit = EditWeights::default();
    let damerau = EditWeights::new(1.0, 1.0, 1.0, 1.0).expect("valid weights");

    let mut group = c.benchmark_group("edit_distance");
    for &(a, b) in WORD_PAIRS {
        group.bench_with_input(
            BenchmarkId::new("weighted", format!("{}x{}", a.len(), b.len())),
            &(a, b),
            |bencher, &(a, b)| bencher.iter(|| edit_distance(black_box(a), black_box(b), &unit)),
        );
        group.bench_with_input(
            BenchmarkId::new("weighted_transposition", format!("{}x{}", a.len(), b.len())),
            &(a, b),
            |bencher, &(a, b)| {
                bencher.iter(|| edit_distance(black_box(a), black_box(b), &damerau))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("strsim_baseline", format!("{}x{}", a.len(), b.len())),
            &(a, b),
            |bencher, &(a, b)| bencher.iter(|| strsim::levenshtein(black_box(a), black_box(b))),
        );
    }
    group.finish();
}

fn bench_rank_documents(c: &mut Criterion) {
    let unit = EditWeights::default();
    let documents: Vec<String> = CORPUS.iter().map(|s| (*s).to_string()).collect();

    c.bench_function("rank_documents/8_docs", |bencher| {
        bencher.iter(|| {
            rank_documents(
                black_box("fuzzy token distance"),
                black_box(&documents),
                0.3,
                &unit,
            )
        })
    });
}

criterion_group!(benches, bench_edit_distance, bench_rank_documents);
criterion_main!(benches);
