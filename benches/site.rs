//! Criterion benchmarks for the hot paths of the site engine.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use food3d::config::SiteConfig;
use food3d::search;
use food3d::visitors::{ViewCounter, ViewData};

/// Search runs on every submit and suggestions on every debounced keystroke.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for query in ["pizza", "fast food", "zzz"] {
        group.bench_with_input(BenchmarkId::new("full", query), &query, |b, q| {
            b.iter(|| search::search(black_box(q)))
        });
        group.bench_with_input(BenchmarkId::new("suggest", query), &query, |b, q| {
            b.iter(|| search::suggestions(black_box(q), 2, 3))
        });
    }
    group.finish();
}

/// Visit recording with many tabs' worth of visitors in the map.
fn bench_apply_visit(c: &mut Criterion) {
    let counter = ViewCounter::new(&SiteConfig::default());
    let mut group = c.benchmark_group("apply_visit");

    for visitors in [1usize, 100, 1000].iter() {
        let mut data = ViewData::default();
        for i in 0..*visitors {
            data.visitors
                .get_or_insert_with(Default::default)
                .insert(format!("visitor_{i}"), 1_000_000 + i as u64);
        }
        group.throughput(Throughput::Elements(*visitors as u64));
        group.bench_with_input(BenchmarkId::from_parameter(visitors), &data, |b, data| {
            b.iter(|| {
                let mut d = data.clone();
                counter.apply_visit(&mut d, "visitor_0", black_box(1_000_500))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search, bench_apply_visit);
criterion_main!(benches);
