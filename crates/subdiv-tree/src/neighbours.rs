//! The tree-walk neighbour query engine.
//!
//! For each of the target's `2 * d` boundary directions the engine
//! walks up the tree to find the sibling subtree across that boundary,
//! then descends into only the portion of that subtree touching the
//! target's extent. Cost is proportional to the target's depth plus the
//! number of cells actually touching the boundary, not the leaf count —
//! contrast [`neighbours_bruteforce`](crate::neighbours_bruteforce).

use crate::adjacency::EPS;
use crate::cell::{Bounds, CellId};
use crate::tree::PartitionTree;
use indexmap::IndexSet;
use smallvec::SmallVec;
use subdiv_core::{Axis, Label, QueryError};

/// Which side of the target's extent a query direction faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Toward decreasing coordinates on the query axis.
    Low,
    /// Toward increasing coordinates on the query axis.
    High,
}

impl Side {
    /// Both directions along one axis.
    pub const BOTH: [Side; 2] = [Side::Low, Side::High];
}

/// All leaves sharing a boundary of positive measure with `target`.
///
/// Labels are returned sorted for deterministic output. The target is
/// validated first: querying an internal cell returns
/// [`QueryError::TargetNotLeaf`].
///
/// # Examples
///
/// ```
/// use subdiv_core::{Axis, AxisSpec, Dimension, SubdivisionConfig};
/// use subdiv_tree::{neighbours, PartitionTree};
///
/// let mut config = SubdivisionConfig::new(Dimension::D2, 1, 0);
/// config.min_depth = 1;
/// config.split_probability = 1.0;
/// config.axis_spec = AxisSpec::Cycle(vec![Axis::X]);
/// let tree = PartitionTree::build(&config).unwrap();
///
/// let target = tree.leaf_by_label(&"0".parse().unwrap()).unwrap();
/// let labels = neighbours(&tree, target).unwrap();
/// assert_eq!(labels.len(), 1);
/// assert_eq!(labels[0].to_string(), "1");
/// ```
pub fn neighbours(tree: &PartitionTree, target: CellId) -> Result<Vec<Label>, QueryError> {
    let cell = tree.cell(target);
    if !cell.is_leaf() {
        return Err(QueryError::TargetNotLeaf {
            label: cell.label().clone(),
        });
    }

    let mut found: IndexSet<CellId> = IndexSet::new();
    for &axis in tree.dimension().axes() {
        for side in Side::BOTH {
            let Some(sibling) = sibling_across_boundary(tree, target, axis, side) else {
                // Target touches the domain boundary on this side.
                continue;
            };
            let slab = Slab::of(cell.bounds());
            for leaf in collect_touching(tree, sibling, axis, side, slab) {
                found.insert(leaf);
            }
        }
    }
    debug_assert!(
        !found.contains(&target),
        "target leaf appeared in its own neighbour set"
    );

    let mut labels: Vec<Label> = found
        .iter()
        .map(|&id| tree.cell(id).label().clone())
        .collect();
    labels.sort();
    Ok(labels)
}

/// Walk upward from `start` until a split on `axis` is crossed in
/// direction `side`; return the child subtree on the far side.
///
/// Returns `None` when the root is reached without a crossing: the
/// start cell touches the domain boundary in that direction.
fn sibling_across_boundary(
    tree: &PartitionTree,
    start: CellId,
    axis: Axis,
    side: Side,
) -> Option<CellId> {
    let mut current = start;
    while let Some(parent_id) = tree.cell(current).parent() {
        let parent = tree.cell(parent_id);
        if parent.split_axis() == Some(axis) {
            if let Some([low, high]) = parent.children() {
                // Moving further in `side` crosses into the other child
                // only when the current cell sits on the near side.
                match side {
                    Side::High if current == low => return Some(high),
                    Side::Low if current == high => return Some(low),
                    _ => {}
                }
            }
        }
        current = parent_id;
    }
    None
}

/// The target's extent on every axis other than the query axis,
/// progressively narrowed during descent.
#[derive(Clone, Copy, Debug)]
struct Slab {
    lo: [f64; 3],
    hi: [f64; 3],
}

impl Slab {
    fn of(bounds: &Bounds) -> Self {
        let mut lo = [0.0; 3];
        let mut hi = [0.0; 3];
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let (l, h) = bounds.interval(axis);
            lo[axis.index()] = l;
            hi[axis.index()] = h;
        }
        Self { lo, hi }
    }

    /// Intersect with `[low, high]` on `axis`.
    fn narrowed(mut self, axis: Axis, low: f64, high: f64) -> Self {
        let i = axis.index();
        self.lo[i] = self.lo[i].max(low);
        self.hi[i] = self.hi[i].min(high);
        self
    }

    /// Positive-measure check consistent with the adjacency tolerance.
    fn is_degenerate_on(&self, axis: Axis) -> bool {
        let i = axis.index();
        self.hi[i] - self.lo[i] <= EPS
    }
}

/// Collect the leaves of the sibling subtree whose extents intersect
/// the slab with positive measure on every non-query axis.
///
/// Pure recursion: each call returns an owned collection and the caller
/// merges, so no accumulator aliasing crosses the recursion.
fn collect_touching(
    tree: &PartitionTree,
    node: CellId,
    axis: Axis,
    side: Side,
    slab: Slab,
) -> SmallVec<[CellId; 8]> {
    if tree
        .dimension()
        .axes()
        .iter()
        .any(|&other| other != axis && slab.is_degenerate_on(other))
    {
        return SmallVec::new();
    }

    let cell = tree.cell(node);
    let Some([low, high]) = cell.children() else {
        return SmallVec::from_slice(&[node]);
    };

    match cell.split_axis() {
        Some(split) if split == axis => {
            // Only the child adjacent across the original boundary can
            // touch the target; the far child is occluded.
            let near = match side {
                Side::High => low,
                Side::Low => high,
            };
            collect_touching(tree, near, axis, side, slab)
        }
        Some(split) => {
            let mut out = SmallVec::new();
            for child in [low, high] {
                let (child_lo, child_hi) = tree.cell(child).bounds().interval(split);
                let narrowed = slab.narrowed(split, child_lo, child_hi);
                out.extend(collect_touching(tree, child, axis, side, narrowed));
            }
            out
        }
        // Unreachable: internal cells always carry a split axis.
        None => SmallVec::from_slice(&[node]),
    }
}
