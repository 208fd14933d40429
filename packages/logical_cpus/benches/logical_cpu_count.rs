//! Benchmarking the logical processor count query.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use logical_cpus::{logical_cpu_count, logical_cpu_count_nonzero};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("logical_cpus");

    // Nothing is cached, so this measures the operating system call every time. Callers that
    // query in a hot loop should see this number before deciding to cache the value themselves.
    group.bench_function("logical_cpu_count", |b| {
        b.iter(|| black_box(logical_cpu_count()));
    });

    group.bench_function("logical_cpu_count_nonzero", |b| {
        b.iter(|| black_box(logical_cpu_count_nonzero()));
    });

    group.finish();
}
