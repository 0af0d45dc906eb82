//! Benchmarks for label resolution.
//!
//! Tests resolution performance for:
//! - Cold resolution (scan, format, overrides) with a fresh cache per iteration
//! - Cached resolution of a full mapping
//! - Single-label lookups, which bypass the cache
//! - Label derivation from constant names

extern crate constlabel;

use std::{hint::black_box, sync::Arc};

use constlabel::{
    labels::{format_label, Dispatcher, GroupCache},
    metadata::{ConstSymbol, TypeBuilder, TypeDescriptorRc},
};
use criterion::{criterion_group, criterion_main, Criterion};

/// A type with a 64-member group and some unrelated constants.
fn wide_type() -> TypeDescriptorRc {
    let status = (0..64).map(|i| ConstSymbol::new(format!("STATUS_STEP_{i}_OF_MANY"), i));
    let noise = (0..64).map(|i| ConstSymbol::new(format!("OTHER_{i}"), i));

    TypeBuilder::new("Wide")
        .constants(status.chain(noise))
        .build()
        .unwrap()
}

/// Benchmark resolving a full mapping without any cached state.
fn bench_resolve_cold(c: &mut Criterion) {
    let owner = wide_type();

    c.bench_function("labels_resolve_cold", |b| {
        b.iter(|| {
            let dispatcher = Dispatcher::with_cache(Arc::new(GroupCache::new()));
            let labels = dispatcher.labels(&owner, black_box("constStatus")).unwrap();
            black_box(labels)
        });
    });
}

/// Benchmark resolving a full mapping that is already cached.
fn bench_resolve_cached(c: &mut Criterion) {
    let owner = wide_type();
    let dispatcher = Dispatcher::with_cache(Arc::new(GroupCache::new()));
    dispatcher.labels(&owner, "constStatus").unwrap();

    c.bench_function("labels_resolve_cached", |b| {
        b.iter(|| {
            let labels = dispatcher.labels(&owner, black_box("constStatus")).unwrap();
            black_box(labels)
        });
    });
}

/// Benchmark single-label lookups.
fn bench_resolve_single(c: &mut Criterion) {
    let owner = wide_type();
    let dispatcher = Dispatcher::with_cache(Arc::new(GroupCache::new()));

    c.bench_function("labels_resolve_single", |b| {
        b.iter(|| {
            let label = dispatcher
                .label(&owner, black_box("constStatus"), black_box(42))
                .unwrap();
            black_box(label)
        });
    });
}

/// Benchmark label derivation for shouting and mixed-case names.
fn bench_format_label(c: &mut Criterion) {
    c.bench_function("labels_format_shouting", |b| {
        b.iter(|| black_box(format_label("STATUS_", black_box("STATUS_WAITING_FOR_REVIEW"))));
    });

    c.bench_function("labels_format_mixed", |b| {
        b.iter(|| black_box(format_label("GROUP_TEST_", black_box("GROUP_TEST_COM_plex_LAbeL"))));
    });
}

criterion_group!(
    benches,
    bench_resolve_cold,
    bench_resolve_cached,
    bench_resolve_single,
    bench_format_label
);
criterion_main!(benches);
