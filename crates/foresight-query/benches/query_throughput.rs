//! Build + query benchmarks
//!
//! Run with: cargo bench --package foresight-query

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use foresight_core::models::Sequence;
use foresight_query::QueryEngine;

/// A branchy synthetic corpus: `width` first steps, each continued by
/// three-label chains cycling through a small vocabulary.
fn synthetic_corpus(width: usize, rows_per_branch: usize) -> Vec<Sequence> {
    let vocabulary = ["open", "read", "write", "close", "sync"];
    let mut corpus = Vec::with_capacity(width * rows_per_branch);
    for branch in 0..width {
        for row in 0..rows_per_branch {
            corpus.push(vec![
                format!("entry{branch}"),
                vocabulary[row % vocabulary.len()].to_string(),
                vocabulary[(row + branch) % vocabulary.len()].to_string(),
                vocabulary[(row * 3 + 1) % vocabulary.len()].to_string(),
            ]);
        }
    }
    corpus
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_build");
    for width in [4usize, 16, 64] {
        let corpus = synthetic_corpus(width, 50);
        group.bench_with_input(BenchmarkId::from_parameter(width), &corpus, |b, corpus| {
            b.iter(|| foresight_trie::build(black_box(corpus)));
        });
    }
    group.finish();
}

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_paths");
    for width in [4usize, 16, 64] {
        let engine = QueryEngine::new(foresight_trie::build(&synthetic_corpus(width, 50)));
        group.bench_with_input(BenchmarkId::from_parameter(width), &engine, |b, engine| {
            b.iter(|| engine.enumerate_paths(black_box(&[])).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_enumerate);
criterion_main!(benches);
