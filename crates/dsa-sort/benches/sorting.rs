use criterion::{Criterion, criterion_group, criterion_main};
use dsa_sort::elementary::{insertion_sort, selection_sort, shell_sort};
use dsa_sort::heap::heap_sort;
use dsa_sort::merge::{bottom_up_merge_sort, merge_sort};
use dsa_sort::quick::{quick_sort, three_way_quick_sort};
use dsa_sort::shuffle::knuth_shuffle_with;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn shuffled_input(n: i32) -> Vec<i32> {
    let mut a: Vec<i32> = (0..n).collect();
    knuth_shuffle_with(&mut StdRng::seed_from_u64(42), &mut a);
    a
}

fn duplicate_heavy_input(n: i32) -> Vec<i32> {
    let mut a: Vec<i32> = (0..n).map(|i| i % 10).collect();
    knuth_shuffle_with(&mut StdRng::seed_from_u64(42), &mut a);
    a
}

fn bench_elementary_1k(c: &mut Criterion) {
    let input = shuffled_input(1_000);

    c.bench_function("selection_sort_1k", |b| {
        b.iter(|| {
            let mut a = black_box(&input).clone();
            selection_sort(&mut a);
            a
        })
    });

    c.bench_function("insertion_sort_1k", |b| {
        b.iter(|| {
            let mut a = black_box(&input).clone();
            insertion_sort(&mut a);
            a
        })
    });

    c.bench_function("shell_sort_1k", |b| {
        b.iter(|| {
            let mut a = black_box(&input).clone();
            shell_sort(&mut a);
            a
        })
    });
}

fn bench_linearithmic_10k(c: &mut Criterion) {
    let input = shuffled_input(10_000);

    c.bench_function("merge_sort_10k", |b| {
        b.iter(|| {
            let mut a = black_box(&input).clone();
            merge_sort(&mut a);
            a
        })
    });

    c.bench_function("bottom_up_merge_sort_10k", |b| {
        b.iter(|| {
            let mut a = black_box(&input).clone();
            bottom_up_merge_sort(&mut a);
            a
        })
    });

    c.bench_function("quick_sort_10k", |b| {
        b.iter(|| {
            let mut a = black_box(&input).clone();
            quick_sort(&mut a);
            a
        })
    });

    c.bench_function("heap_sort_10k", |b| {
        b.iter(|| {
            let mut a = black_box(&input).clone();
            heap_sort(&mut a);
            a
        })
    });
}

fn bench_duplicate_keys_10k(c: &mut Criterion) {
    let input = duplicate_heavy_input(10_000);

    c.bench_function("quick_sort_duplicates_10k", |b| {
        b.iter(|| {
            let mut a = black_box(&input).clone();
            quick_sort(&mut a);
            a
        })
    });

    c.bench_function("three_way_quick_sort_duplicates_10k", |b| {
        b.iter(|| {
            let mut a = black_box(&input).clone();
            three_way_quick_sort(&mut a);
            a
        })
    });
}

criterion_group!(
    benches,
    bench_elementary_1k,
    bench_linearithmic_10k,
    bench_duplicate_keys_10k,
);
criterion_main!(benches);
