//! Arena cells and axis-aligned bounds.

use std::fmt;
use subdiv_core::{Axis, Dimension, Label};

/// Index of a cell within its [`PartitionTree`](crate::PartitionTree) arena.
///
/// Cells are stored in pre-order, so `CellId(0)` is always the root and
/// a child's id is always greater than its parent's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u32);

impl CellId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Axis-aligned bounds of a cell, as per-axis `[low, high]` intervals.
///
/// Bounds always carry three axes; in 2D the Z interval stays `[0, 1]`
/// and is never split, so 2D and 3D share all geometric code.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    lo: [f64; 3],
    hi: [f64; 3],
}

impl Bounds {
    /// The unit square or cube `[0, 1]^d`.
    pub fn unit() -> Self {
        Self {
            lo: [0.0; 3],
            hi: [1.0; 3],
        }
    }

    /// Construct from explicit per-axis intervals.
    ///
    /// Intended for tests and external collaborators; the builder only
    /// ever bisects [`Bounds::unit`].
    pub fn from_intervals(lo: [f64; 3], hi: [f64; 3]) -> Self {
        Self { lo, hi }
    }

    /// Lower bound on `axis`.
    pub fn low(&self, axis: Axis) -> f64 {
        self.lo[axis.index()]
    }

    /// Upper bound on `axis`.
    pub fn high(&self, axis: Axis) -> f64 {
        self.hi[axis.index()]
    }

    /// The `(low, high)` interval on `axis`.
    pub fn interval(&self, axis: Axis) -> (f64, f64) {
        (self.low(axis), self.high(axis))
    }

    /// Midpoint of the interval on `axis`.
    pub fn midpoint(&self, axis: Axis) -> f64 {
        0.5 * (self.low(axis) + self.high(axis))
    }

    /// These bounds with the upper bound on `axis` replaced.
    pub fn with_high(&self, axis: Axis, value: f64) -> Self {
        let mut hi = self.hi;
        hi[axis.index()] = value;
        Self { lo: self.lo, hi }
    }

    /// These bounds with the lower bound on `axis` replaced.
    pub fn with_low(&self, axis: Axis, value: f64) -> Self {
        let mut lo = self.lo;
        lo[axis.index()] = value;
        Self { lo, hi: self.hi }
    }

    /// Volume of the region over the axes of `dimension`.
    pub fn volume(&self, dimension: Dimension) -> f64 {
        dimension
            .axes()
            .iter()
            .map(|&axis| self.high(axis) - self.low(axis))
            .product()
    }
}

/// A node of the partition tree: an axis-aligned region of the unit
/// domain.
///
/// Internal cells carry a split axis and exactly two children (child 0
/// is the low half, child 1 the high half). The parent link is a plain
/// arena index with no ownership semantics, used only for upward
/// traversal during neighbour queries.
#[derive(Clone, Debug)]
pub struct Cell {
    pub(crate) bounds: Bounds,
    pub(crate) label: Label,
    pub(crate) depth: u32,
    pub(crate) split_axis: Option<Axis>,
    pub(crate) children: Option<[CellId; 2]>,
    pub(crate) parent: Option<CellId>,
}

impl Cell {
    /// The cell's axis-aligned bounds.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The root-to-cell path label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Distance from the root; equals `label().depth()`.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The axis this cell was bisected along, if internal.
    pub fn split_axis(&self) -> Option<Axis> {
        self.split_axis
    }

    /// Child ids `[low, high]`, if internal.
    pub fn children(&self) -> Option<[CellId; 2]> {
        self.children
    }

    /// Parent id; `None` only for the root.
    pub fn parent(&self) -> Option<CellId> {
        self.parent
    }

    /// `true` when the cell has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}
