// Criterion benchmarks for the O(1) operations and the O(n) bulk ones.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use forward_list::ForwardList;

fn push_front_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_front");

    for size in [10, 100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut list = ForwardList::new();
                for i in 0..size {
                    list.push_front(i);
                }
                black_box(list);
            });
        });
    }

    group.finish();
}

fn collect_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect");

    for size in [10, 100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| black_box((0..size).collect::<ForwardList<u64>>()));
        });
    }

    group.finish();
}

fn clone_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    for size in [10, 100, 1000, 10000].iter() {
        let list: ForwardList<u64> = (0..*size).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |b, list| {
            b.iter(|| black_box(list.clone()));
        });
    }

    group.finish();
}

fn swap_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap");

    // Should stay flat across sizes.
    for size in [10, 10000].iter() {
        let mut left: ForwardList<u64> = (0..*size).collect();
        let mut right: ForwardList<u64> = (0..*size).rev().collect();
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| left.swap(black_box(&mut right)));
        });
    }

    group.finish();
}

fn insert_erase_after_benchmark(c: &mut Criterion) {
    let mut list: ForwardList<u64> = (0..1000).collect();
    let anchor = list.next(list.begin());

    c.bench_function("insert_erase_after", |b| {
        b.iter(|| {
            list.insert_after(anchor, black_box(7));
            list.erase_after(anchor);
        });
    });
}

criterion_group!(
    benches,
    push_front_benchmark,
    collect_benchmark,
    clone_benchmark,
    swap_benchmark,
    insert_erase_after_benchmark
);
criterion_main!(benches);
