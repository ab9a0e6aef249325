//! Criterion micro-benchmarks for view-level text operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use skein_test_utils::{arena, filled};

/// Forward substring search across the full region capacity.
fn bench_find(c: &mut Criterion) {
    let mut arena = arena(1024, 4);
    let s = arena.allocate(512).unwrap();
    s.append(&mut arena, &b"lorem ipsum dolor sit amet ".repeat(18))
        .unwrap();
    c.bench_function("text/find_needle", |b| {
        b.iter(|| black_box(s.find(&arena, black_box(b"amet"), 0)));
    });
    c.bench_function("text/rfind_needle", |b| {
        b.iter(|| black_box(s.rfind(&arena, black_box(b"lorem"))));
    });
}

/// Trim both ends of a padded string, restoring it each round.
fn bench_trim(c: &mut Criterion) {
    let (mut arena, views) = filled(256, 2, &[b"   \t padded payload \t   "]);
    let s = views[0];
    c.bench_function("text/trim", |b| {
        b.iter(|| {
            s.set(&mut arena, b"   \t padded payload \t   ").unwrap();
            s.trim(&mut arena).unwrap();
        });
    });
}

/// ASCII case folding over a mid-sized string.
fn bench_case_fold(c: &mut Criterion) {
    let (mut arena, views) = filled(256, 2, &[b"The Quick Brown Fox Jumps Over 13 Lazy Dogs"]);
    let s = views[0];
    c.bench_function("text/case_fold_round", |b| {
        b.iter(|| {
            s.to_lower(&mut arena).unwrap();
            s.to_upper(&mut arena).unwrap();
        });
    });
}

/// Shortlex comparison against a literal.
fn bench_compare(c: &mut Criterion) {
    let (arena, views) = filled(256, 2, &[b"comparison subject with some length"]);
    let s = views[0];
    c.bench_function("text/compare_bytes", |b| {
        b.iter(|| {
            black_box(s.compare_bytes(&arena, black_box(b"comparison subject with some length")))
        });
    });
}

/// Formatted append into spare capacity.
fn bench_append_fmt(c: &mut Criterion) {
    let mut arena = arena(256, 2);
    let s = arena.allocate(64).unwrap();
    c.bench_function("text/append_fmt_in_place", |b| {
        b.iter(|| {
            s.clear(&mut arena).unwrap();
            s.append_fmt(&mut arena, format_args!("tick={} dt={}", 42, 0.05))
                .unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_find,
    bench_trim,
    bench_case_fold,
    bench_compare,
    bench_append_fmt,
);
criterion_main!(benches);
