//! The immutable partition tree arena.

use crate::cell::{Cell, CellId};
use indexmap::IndexMap;
use rand::Rng;
use subdiv_core::{AxisCycle, Dimension, Label, QueryError};

/// An immutable half-subdivision of the unit square or cube.
///
/// Cells live in an arena `Vec` addressed by [`CellId`] in pre-order;
/// children are owned indices and the parent link is a plain index, so
/// the parent/child graph carries no reference cycles. Built once by
/// [`PartitionTree::build`](crate::PartitionTree::build) and read-only
/// thereafter — queries never mutate the tree, so a tree may be shared
/// across threads freely.
#[derive(Clone, Debug)]
pub struct PartitionTree {
    pub(crate) cells: Vec<Cell>,
    pub(crate) dimension: Dimension,
    pub(crate) axis_cycle: AxisCycle,
    // Leaf labels in pre-order; doubles as the canonical leaf ordering.
    pub(crate) leaf_index: IndexMap<Label, CellId>,
}

impl PartitionTree {
    /// Sample size for [`QueryError::LabelNotFound`] suggestions.
    const LABEL_SAMPLE: usize = 10;

    /// The root cell id (always the first arena slot).
    pub fn root(&self) -> CellId {
        CellId(0)
    }

    /// Look up a cell by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this tree.
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    /// Dimensionality of the partitioned domain.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The resolved split-axis cycle the tree was built with.
    pub fn axis_cycle(&self) -> &AxisCycle {
        &self.axis_cycle
    }

    /// Total number of cells, internal and leaf.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false` — every tree has at least the root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of leaf cells.
    pub fn leaf_count(&self) -> usize {
        self.leaf_index.len()
    }

    /// Leaf ids in pre-order (the canonical leaf ordering).
    pub fn leaves(&self) -> impl Iterator<Item = CellId> + '_ {
        self.leaf_index.values().copied()
    }

    /// Look up a leaf by its label.
    ///
    /// Returns `None` for unknown labels and for labels of internal
    /// cells; use [`resolve_target`](Self::resolve_target) to
    /// distinguish the two.
    pub fn leaf_by_label(&self, label: &Label) -> Option<CellId> {
        self.leaf_index.get(label).copied()
    }

    /// All leaf labels, sorted.
    pub fn leaf_labels(&self) -> Vec<Label> {
        let mut labels: Vec<Label> = self.leaf_index.keys().cloned().collect();
        labels.sort();
        labels
    }

    /// Resolve the query target.
    ///
    /// With `Some(label)`, the label must name a leaf:
    /// [`QueryError::TargetNotLeaf`] if it names an internal cell,
    /// [`QueryError::LabelNotFound`] (with a short sample of leaf
    /// labels) if it names nothing. With `None`, a leaf is drawn
    /// uniformly from `rng` — pass the same sequence source that built
    /// the tree to reproduce the reference generator's selection.
    pub fn resolve_target<R: Rng>(
        &self,
        label: Option<&Label>,
        rng: &mut R,
    ) -> Result<CellId, QueryError> {
        let Some(label) = label else {
            let pick = rng.random_range(0..self.leaf_index.len());
            return Ok(self.leaf_index[pick]);
        };
        if let Some(id) = self.leaf_by_label(label) {
            return Ok(id);
        }
        if self.cell_by_label(label).is_some() {
            return Err(QueryError::TargetNotLeaf {
                label: label.clone(),
            });
        }
        let mut available = self.leaf_labels();
        available.truncate(Self::LABEL_SAMPLE);
        Err(QueryError::LabelNotFound {
            label: label.clone(),
            available,
        })
    }

    /// Follow a label's child picks from the root. `None` when the path
    /// leaves the tree.
    pub fn cell_by_label(&self, label: &Label) -> Option<CellId> {
        let mut current = self.root();
        for &bit in label.bits() {
            let children = self.cell(current).children()?;
            current = children[bit as usize];
        }
        Some(current)
    }
}
