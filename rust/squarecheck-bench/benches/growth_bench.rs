//! Criterion benchmarks for appending to a `Vec` versus rebuilding an
//! immutable slice on every step.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use squarecheck_core::growth::{append_to_list, concat_tuple};

fn bench_growth(c: &mut Criterion) {
    let sizes = [100, 1000, 10000];
    let mut group = c.benchmark_group("growth");

    for size in sizes {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("append", size), &size, |b, &n| {
            b.iter(|| append_to_list(black_box(n)));
        });
        group.bench_with_input(BenchmarkId::new("concat", size), &size, |b, &n| {
            b.iter(|| concat_tuple(black_box(n)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_growth);
criterion_main!(benches);
