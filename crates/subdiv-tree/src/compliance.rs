//! Partition invariant assertion helpers.
//!
//! These functions verify the correctness contracts a built tree must
//! satisfy regardless of configuration. Reused across unit tests and
//! the randomized integration suite.

use crate::cell::Bounds;
use crate::neighbours::neighbours;
use crate::oracle::neighbours_bruteforce;
use crate::tree::PartitionTree;
use indexmap::IndexMap;
use subdiv_core::Label;

/// Assert that the leaf volumes sum to the root volume and that no two
/// leaves overlap with positive volume.
pub fn assert_partition_covers_domain(tree: &PartitionTree) {
    let dim = tree.dimension();
    let total: f64 = tree
        .leaves()
        .map(|id| tree.cell(id).bounds().volume(dim))
        .sum();
    assert!(
        (total - 1.0).abs() < 1e-9,
        "leaf volumes sum to {total}, expected 1.0"
    );

    let leaves: Vec<_> = tree.leaves().collect();
    for (i, &a) in leaves.iter().enumerate() {
        for &b in &leaves[i + 1..] {
            let overlap = overlap_volume(tree.cell(a).bounds(), tree.cell(b).bounds(), tree);
            assert!(
                overlap < 1e-9,
                "leaves {} and {} overlap with volume {overlap}",
                tree.cell(a).label(),
                tree.cell(b).label()
            );
        }
    }
}

fn overlap_volume(a: &Bounds, b: &Bounds, tree: &PartitionTree) -> f64 {
    tree.dimension()
        .axes()
        .iter()
        .map(|&axis| {
            let (a_lo, a_hi) = a.interval(axis);
            let (b_lo, b_hi) = b.interval(axis);
            (a_hi.min(b_hi) - a_lo.max(b_lo)).max(0.0)
        })
        .product()
}

/// Assert that the tree-walk engine and the brute-force oracle agree
/// for every leaf used as target.
pub fn assert_oracle_equivalence(tree: &PartitionTree) {
    for target in tree.leaves() {
        let fast = neighbours(tree, target).unwrap();
        let oracle = neighbours_bruteforce(tree, target).unwrap();
        assert_eq!(
            fast,
            oracle,
            "engine and oracle disagree for target {}",
            tree.cell(target).label()
        );
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(tree: &PartitionTree) {
    let mut sets: IndexMap<Label, Vec<Label>> = IndexMap::new();
    for target in tree.leaves() {
        sets.insert(
            tree.cell(target).label().clone(),
            neighbours(tree, target).unwrap(),
        );
    }
    for (label, nbrs) in &sets {
        for nbr in nbrs {
            assert!(
                sets[nbr].contains(label),
                "{label} lists {nbr} but not vice versa"
            );
        }
    }
}

/// Assert that no leaf appears in its own neighbour set.
pub fn assert_no_self_adjacency(tree: &PartitionTree) {
    for target in tree.leaves() {
        let label = tree.cell(target).label();
        let nbrs = neighbours(tree, target).unwrap();
        assert!(
            !nbrs.contains(label),
            "leaf {label} appears in its own neighbour set"
        );
    }
}

/// Assert that every leaf depth lies within the configured
/// `[min_depth, max_depth]` range.
pub fn assert_depth_bounds(tree: &PartitionTree, min_depth: u32, max_depth: u32) {
    for id in tree.leaves() {
        let depth = tree.cell(id).depth();
        assert!(
            (min_depth..=max_depth).contains(&depth),
            "leaf {} has depth {depth}, outside [{min_depth}, {max_depth}]",
            tree.cell(id).label()
        );
    }
}
