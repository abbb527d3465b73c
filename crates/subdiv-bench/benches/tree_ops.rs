//! Criterion micro-benchmarks for tree construction and neighbour
//! queries.
//!
//! The engine/oracle pair makes the complexity claim measurable: the
//! tree walk should stay flat as leaf count grows while the brute
//! force scan degrades linearly.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use subdiv_bench::{dense_profile, reference_profile};
use subdiv_tree::{neighbours, neighbours_bruteforce, PartitionTree};

/// Benchmark: build the reference 2D tree from scratch.
fn bench_build_reference(c: &mut Criterion) {
    let config = reference_profile(7);

    c.bench_function("build_reference_2d", |b| {
        b.iter(|| {
            let tree = PartitionTree::build(black_box(&config)).unwrap();
            black_box(&tree);
        });
    });
}

/// Benchmark: neighbour query for every leaf of the dense 3D tree.
fn bench_neighbours_dense(c: &mut Criterion) {
    let tree = PartitionTree::build(&dense_profile(7)).unwrap();
    let targets: Vec<_> = tree.leaves().collect();

    c.bench_function("neighbours_dense_3d_256", |b| {
        b.iter(|| {
            for &target in &targets {
                let labels = neighbours(&tree, target).unwrap();
                black_box(&labels);
            }
        });
    });
}

/// Benchmark: the brute-force oracle over the same workload, as the
/// baseline the engine is meant to beat.
fn bench_bruteforce_dense(c: &mut Criterion) {
    let tree = PartitionTree::build(&dense_profile(7)).unwrap();
    let targets: Vec<_> = tree.leaves().collect();

    c.bench_function("bruteforce_dense_3d_256", |b| {
        b.iter(|| {
            for &target in &targets {
                let labels = neighbours_bruteforce(&tree, target).unwrap();
                black_box(&labels);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_build_reference,
    bench_neighbours_dense,
    bench_bruteforce_dense
);
criterion_main!(benches);
