//! Subdiv: a deterministic half-subdivision partition engine with
//! face-adjacency queries.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the subdiv sub-crates. For most users, adding `subdiv` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use subdiv::prelude::*;
//!
//! // Bisect the unit square down to depth 4, splitting with
//! // probability 0.7 past the depth-1 floor.
//! let mut config = SubdivisionConfig::new(Dimension::D2, 4, 42);
//! config.min_depth = 1;
//!
//! let case = generate(&config).unwrap();
//! let target = case.tree.cell(case.target);
//! println!("target {} spans {:?}", target.label(), target.bounds());
//!
//! // Every leaf sharing a boundary segment with the target, sorted.
//! let labels = neighbours(&case.tree, case.target).unwrap();
//! assert!(!labels.contains(target.label()));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `subdiv-core` | Axes, labels, configuration, error types |
//! | [`tree`] | `subdiv-tree` | Partition tree, builder, adjacency, queries |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary types (`subdiv-core`).
///
/// Contains [`types::Axis`], [`types::AxisCycle`], [`types::Label`],
/// [`types::SubdivisionConfig`], and the error enums.
pub use subdiv_core as types;

/// Partition tree construction and queries (`subdiv-tree`).
///
/// Provides [`tree::PartitionTree`], the [`tree::neighbours()`] query
/// engine, the [`tree::are_adjacent`] predicate, and the
/// [`tree::neighbours_bruteforce`] validation oracle.
pub use subdiv_tree as tree;

/// Common imports for typical subdiv usage.
///
/// ```rust
/// use subdiv::prelude::*;
/// ```
///
/// This imports the configuration types, the partition tree, the
/// neighbour query, and the error enums.
pub mod prelude {
    // Core types
    pub use subdiv_core::{Axis, AxisCycle, AxisSpec, Dimension, Label, SubdivisionConfig};

    // Errors
    pub use subdiv_core::{ConfigError, QueryError};

    // Tree and queries
    pub use subdiv_tree::{
        generate, neighbours, Bounds, Cell, CellId, GenerateError, GeneratedCase, PartitionTree,
    };
}
