//! Partition tree construction and neighbour queries for subdiv.
//!
//! This crate builds deterministic half subdivisions of the unit
//! square or cube and answers face-adjacency queries over them.
//!
//! # Pipeline
//!
//! A validated [`SubdivisionConfig`](subdiv_core::SubdivisionConfig)
//! drives [`PartitionTree::build`]; the target leaf is resolved by
//! label or drawn from the same sequence source; [`neighbours()`] walks
//! the tree to produce the sorted neighbour label set. The
//! [`neighbours_bruteforce`] oracle cross-validates the engine in
//! tests and benchmarks, never in production queries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod builder;
pub mod cell;
pub mod neighbours;
pub mod oracle;
pub mod tree;

#[cfg(test)]
pub(crate) mod compliance;

pub use adjacency::{are_adjacent, EPS};
pub use builder::{generate, GenerateError, GeneratedCase};
pub use cell::{Bounds, Cell, CellId};
pub use neighbours::{neighbours, Side};
pub use oracle::neighbours_bruteforce;
pub use tree::PartitionTree;
