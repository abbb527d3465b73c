//! Benchmark profiles for the subdiv partition engine.
//!
//! Provides pre-built configurations shared by the criterion benches:
//!
//! - [`reference_profile`]: depth-10 2D tree, ~700 leaves at p = 0.7
//! - [`dense_profile`]: fully split depth-8 3D tree, 256 leaves

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use subdiv_core::{Dimension, SubdivisionConfig};

/// A representative randomized 2D profile.
pub fn reference_profile(seed: u64) -> SubdivisionConfig {
    let mut config = SubdivisionConfig::new(Dimension::D2, 10, seed);
    config.min_depth = 4;
    config.split_probability = 0.7;
    config
}

/// A fully split 3D profile: every leaf at depth 8.
pub fn dense_profile(seed: u64) -> SubdivisionConfig {
    let mut config = SubdivisionConfig::new(Dimension::D3, 8, seed);
    config.min_depth = 8;
    config.split_probability = 1.0;
    config
}
