//! Brute-force neighbour oracle.
//!
//! Scans every leaf and applies the adjacency predicate pairwise. Cost
//! is O(leaf count) per query, so it never backs the production path —
//! it exists to cross-validate [`neighbours`](crate::neighbours()), which
//! must return an identical set for any valid tree and target.

use crate::adjacency::are_adjacent;
use crate::cell::CellId;
use crate::tree::PartitionTree;
use subdiv_core::{Label, QueryError};

/// All leaves adjacent to `target`, by exhaustive scan.
///
/// Same contract as [`neighbours`](crate::neighbours()): sorted labels,
/// [`QueryError::TargetNotLeaf`] for internal targets.
pub fn neighbours_bruteforce(
    tree: &PartitionTree,
    target: CellId,
) -> Result<Vec<Label>, QueryError> {
    let cell = tree.cell(target);
    if !cell.is_leaf() {
        return Err(QueryError::TargetNotLeaf {
            label: cell.label().clone(),
        });
    }

    let mut labels: Vec<Label> = tree
        .leaves()
        .filter(|&id| id != target)
        .filter(|&id| are_adjacent(tree.cell(id).bounds(), cell.bounds(), tree.dimension()))
        .map(|id| tree.cell(id).label().clone())
        .collect();
    labels.sort();
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use subdiv_core::{Dimension, SubdivisionConfig};

    #[test]
    fn oracle_matches_scenario_two() {
        let mut config = SubdivisionConfig::new(Dimension::D3, 2, 0);
        config.min_depth = 2;
        config.split_probability = 1.0;
        let tree = PartitionTree::build(&config).unwrap();
        let target = tree.leaf_by_label(&"00".parse().unwrap()).unwrap();
        let labels: Vec<String> = neighbours_bruteforce(&tree, target)
            .unwrap()
            .iter()
            .map(Label::to_string)
            .collect();
        assert_eq!(labels, vec!["01", "10"]);
    }

    #[test]
    fn oracle_rejects_internal_target() {
        let mut config = SubdivisionConfig::new(Dimension::D2, 2, 0);
        config.min_depth = 2;
        config.split_probability = 1.0;
        let tree = PartitionTree::build(&config).unwrap();
        let internal = tree.cell_by_label(&"1".parse().unwrap()).unwrap();
        assert!(matches!(
            neighbours_bruteforce(&tree, internal),
            Err(QueryError::TargetNotLeaf { .. })
        ));
    }
}
