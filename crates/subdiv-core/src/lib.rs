//! Core types for the subdiv half-subdivision partition engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the subdiv workspace:
//! axis tags and the split-axis cycle, path labels, configuration, and
//! error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod config;
pub mod error;
pub mod label;

pub use axis::{Axis, AxisCycle, Dimension};
pub use config::{AxisSpec, SubdivisionConfig};
pub use error::{ConfigError, ParseAxisError, ParseLabelError, QueryError};
pub use label::Label;
