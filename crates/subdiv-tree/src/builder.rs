//! Deterministic, seed-driven tree construction.
//!
//! The builder consumes its sequence source in exactly one order:
//! pre-order, child 0 before child 1, with exactly one draw per cell
//! that is free to choose between splitting and stopping. Any change to
//! that order breaks seed reproducibility and is a regression.

use crate::cell::{Bounds, Cell, CellId};
use crate::tree::PartitionTree;
use indexmap::IndexMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::fmt;
use subdiv_core::{AxisCycle, ConfigError, Label, QueryError, SubdivisionConfig};

impl PartitionTree {
    /// Build a tree from a validated configuration.
    ///
    /// Seeds a fresh ChaCha8 source from `config.seed`. Use
    /// [`build_with_source`](Self::build_with_source) when the caller
    /// needs the source afterwards (e.g. for random target selection).
    ///
    /// # Examples
    ///
    /// ```
    /// use subdiv_core::{Dimension, SubdivisionConfig};
    /// use subdiv_tree::PartitionTree;
    ///
    /// let mut config = SubdivisionConfig::new(Dimension::D2, 2, 9);
    /// config.split_probability = 1.0;
    /// let tree = PartitionTree::build(&config).unwrap();
    /// // Full binary tree of depth 2: 4 leaves, 7 cells.
    /// assert_eq!(tree.leaf_count(), 4);
    /// assert_eq!(tree.len(), 7);
    /// ```
    pub fn build(config: &SubdivisionConfig) -> Result<Self, ConfigError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::build_with_source(config, &mut rng)
    }

    /// Build a tree, drawing from the given sequence source.
    ///
    /// The source is consumed in pre-order, child 0 first; after the
    /// call it is positioned exactly past the construction draws, so a
    /// subsequent [`resolve_target`](Self::resolve_target) with the
    /// same source reproduces the reference generator end to end.
    pub fn build_with_source<R: Rng>(
        config: &SubdivisionConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let axis_cycle = config.validate()?;
        let mut builder = Builder {
            cells: Vec::new(),
            leaf_index: IndexMap::new(),
            cycle: &axis_cycle,
            config,
            rng,
        };
        builder.subdivide(Bounds::unit(), Label::root(), 0, None);
        let Builder {
            cells, leaf_index, ..
        } = builder;
        Ok(Self {
            cells,
            dimension: config.dimension,
            axis_cycle,
            leaf_index,
        })
    }
}

struct Builder<'a, R: Rng> {
    cells: Vec<Cell>,
    leaf_index: IndexMap<Label, CellId>,
    cycle: &'a AxisCycle,
    config: &'a SubdivisionConfig,
    rng: &'a mut R,
}

impl<R: Rng> Builder<'_, R> {
    fn subdivide(
        &mut self,
        bounds: Bounds,
        label: Label,
        depth: u32,
        parent: Option<CellId>,
    ) -> CellId {
        let id = CellId(self.cells.len() as u32);
        self.cells.push(Cell {
            bounds,
            label: label.clone(),
            depth,
            split_axis: None,
            children: None,
            parent,
        });

        // One draw per cell that is free to stop, nowhere else.
        let stop = depth == self.config.max_depth
            || (depth >= self.config.min_depth
                && self.rng.random::<f64>() >= self.config.split_probability);
        if stop {
            self.leaf_index.insert(label, id);
            return id;
        }

        let axis = self.cycle.axis_for_depth(depth);
        let mid = bounds.midpoint(axis);
        let low = self.subdivide(
            bounds.with_high(axis, mid),
            label.child(0),
            depth + 1,
            Some(id),
        );
        let high = self.subdivide(
            bounds.with_low(axis, mid),
            label.child(1),
            depth + 1,
            Some(id),
        );
        let cell = &mut self.cells[id.index()];
        cell.split_axis = Some(axis);
        cell.children = Some([low, high]);
        id
    }
}

/// A built tree together with its resolved target leaf.
#[derive(Clone, Debug)]
pub struct GeneratedCase {
    /// The built partition tree.
    pub tree: PartitionTree,
    /// The resolved target leaf.
    pub target: CellId,
}

/// Errors from [`generate`].
#[derive(Clone, Debug, PartialEq)]
pub enum GenerateError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// The target label could not be resolved against the built tree.
    Query(QueryError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Query(e) => write!(f, "target resolution failed: {e}"),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Query(e) => Some(e),
        }
    }
}

impl From<ConfigError> for GenerateError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<QueryError> for GenerateError {
    fn from(e: QueryError) -> Self {
        Self::Query(e)
    }
}

/// Build a tree and resolve its target in one step.
///
/// Equivalent to seeding a ChaCha8 source from `config.seed`, calling
/// [`PartitionTree::build_with_source`], then
/// [`PartitionTree::resolve_target`] with `config.target_label` and the
/// same source.
pub fn generate(config: &SubdivisionConfig) -> Result<GeneratedCase, GenerateError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let tree = PartitionTree::build_with_source(config, &mut rng)?;
    let target = tree.resolve_target(config.target_label.as_ref(), &mut rng)?;
    Ok(GeneratedCase { tree, target })
}
