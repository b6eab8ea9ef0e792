use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rb_ordered_tree::OrderedTree;
use std::hint::black_box;

struct KeyGenerator {
    rng: StdRng,
    limit: u32,
}
impl KeyGenerator {
    fn new() -> Self {
        const LIMIT: u32 = 1_000_000;
        Self {
            rng: StdRng::from_seed([0; 32]),
            limit: LIMIT,
        }
    }

    fn next(&mut self) -> u32 {
        self.rng.gen_range(0..self.limit)
    }
}

// insert helper fn
fn ordered_tree_insert(count: usize, bench: &mut Bencher) {
    let mut gen = KeyGenerator::new();
    let keys: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        let mut tree = OrderedTree::new();
        for &k in &keys {
            black_box(tree.insert(k));
        }
    });
}

// insert and remove helper fn
fn ordered_tree_insert_remove(count: usize, bench: &mut Bencher) {
    let mut gen = KeyGenerator::new();
    let keys: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        let mut tree = OrderedTree::new();
        for &k in &keys {
            black_box(tree.insert(k));
        }
        for k in &keys {
            black_box(tree.remove(k));
        }
    });
}

// lower_bound helper fn
fn ordered_tree_lower_bound(count: usize, bench: &mut Bencher) {
    let mut gen = KeyGenerator::new();
    let keys: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    let mut tree = OrderedTree::new();
    for &k in &keys {
        tree.insert(k);
    }
    let probes: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        for p in &probes {
            black_box(tree.lower_bound(p));
        }
    });
}

// full in-order walk helper fn
fn ordered_tree_iter(count: usize, bench: &mut Bencher) {
    let mut gen = KeyGenerator::new();
    let mut tree = OrderedTree::new();
    for _ in 0..count {
        tree.insert(gen.next());
    }
    bench.iter(|| black_box(tree.iter().fold(0u64, |acc, &k| acc + u64::from(k))));
}

fn bench_ordered_tree_insert(c: &mut Criterion) {
    c.bench_function("bench_ordered_tree_insert_100", |b| {
        ordered_tree_insert(100, b)
    });
    c.bench_function("bench_ordered_tree_insert_1000", |b| {
        ordered_tree_insert(1000, b)
    });
    c.bench_function("bench_ordered_tree_insert_10,000", |b| {
        ordered_tree_insert(10_000, b)
    });
    c.bench_function("bench_ordered_tree_insert_100,000", |b| {
        ordered_tree_insert(100_000, b)
    });
}

fn bench_ordered_tree_insert_remove(c: &mut Criterion) {
    c.bench_function("bench_ordered_tree_insert_remove_100", |b| {
        ordered_tree_insert_remove(100, b)
    });
    c.bench_function("bench_ordered_tree_insert_remove_1000", |b| {
        ordered_tree_insert_remove(1000, b)
    });
    c.bench_function("bench_ordered_tree_insert_remove_10,000", |b| {
        ordered_tree_insert_remove(10_000, b)
    });
    c.bench_function("bench_ordered_tree_insert_remove_100,000", |b| {
        ordered_tree_insert_remove(100_000, b)
    });
}

fn bench_ordered_tree_lower_bound(c: &mut Criterion) {
    c.bench_function("bench_ordered_tree_lower_bound_1000", |b| {
        ordered_tree_lower_bound(1000, b)
    });
    c.bench_function("bench_ordered_tree_lower_bound_100,000", |b| {
        ordered_tree_lower_bound(100_000, b)
    });
}

fn bench_ordered_tree_iter(c: &mut Criterion) {
    c.bench_function("bench_ordered_tree_iter_1000", |b| ordered_tree_iter(1000, b));
    c.bench_function("bench_ordered_tree_iter_100,000", |b| {
        ordered_tree_iter(100_000, b)
    });
}

fn criterion_config() -> Criterion {
    Criterion::default().configure_from_args().without_plots()
}

criterion_group! {
    name = benches_basic_op;
    config = criterion_config();
    targets = bench_ordered_tree_insert, bench_ordered_tree_insert_remove,
}

criterion_group! {
    name = benches_query;
    config = criterion_config();
    targets = bench_ordered_tree_lower_bound, bench_ordered_tree_iter
}

criterion_main!(benches_basic_op, benches_query);
