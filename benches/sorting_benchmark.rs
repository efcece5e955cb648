use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use kvsort::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;
use std::hint::black_box;

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("String Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;

    let random_strings: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len).map(|_| rng.random::<char>()).collect()
        })
        .collect();

    let sorter = Sorter::new((0i64..).zip(random_strings.iter().cloned()));
    let maintain = sorter.by_value().maintain_keys();

    group.bench_function("kvsort (string mode, keys kept)", |b| {
        b.iter(|| maintain.sort(black_box(OrderingMode::String)))
    });

    group.bench_function("kvsort (regular mode, keys kept)", |b| {
        b.iter(|| maintain.sort(black_box(OrderingMode::Regular)))
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_long_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("Long Common Prefix");
    group.sample_size(10);

    // Dataset with heavy prefixes
    let mut rng = rand::rng();
    let count = 10_000;
    let prefix = "common_prefix_which_is_quite_long_indeed_";

    let input: Vec<String> = (0..count)
        .map(|_| {
            let suffix: String = (0..5).map(|_| rng.random::<char>()).collect();
            format!("{}{}", prefix, suffix)
        })
        .collect();

    let sorter = Sorter::new(input.iter().map(|s| (s.as_str(), 0)));
    let by_key = sorter.by_key();

    group.bench_function("kvsort (by key, string mode)", |b| {
        b.iter(|| by_key.sort(black_box(OrderingMode::String)))
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_natural(c: &mut Criterion) {
    let mut group = c.benchmark_group("Natural Sort");
    group.sample_size(10);

    let mut rng = rand::rng();
    let mut names: Vec<String> = (0..10_000).map(|i| format!("img{i}.png")).collect();
    names.shuffle(&mut rng);

    let sorter = Sorter::new((0i64..).zip(names));

    group.bench_function("kvsort (natural)", |b| b.iter(|| sorter.natural_sort()));

    group.bench_function("kvsort (natural, case-insensitive)", |b| {
        b.iter(|| sorter.natural_sort_case_insensitive())
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dispatch");

    let sorter = Sorter::new((0..100).map(|i: i64| (i, (i * 7919) % 100)));

    group.bench_function("explicit chain", |b| {
        b.iter(|| sorter.by_value().maintain_keys().sort(OrderingMode::Regular))
    });

    group.bench_function("precedence dispatch", |b| {
        b.iter(|| sorter.sort(black_box(OrderingMode::Regular)))
    });

    group.bench_function("named dispatch", |b| {
        b.iter(|| sorter.dispatch_named(black_box("sort")))
    });

    group.bench_function("shuffle", |b| b.iter(|| sorter.shuffle()));

    group.finish();
}

criterion_group!(
    benches,
    bench_strings,
    bench_long_prefix,
    bench_natural,
    bench_dispatch
);
criterion_main!(benches);
