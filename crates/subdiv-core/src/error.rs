//! Error types for configuration validation and target queries.
//!
//! All errors are detected eagerly, before any tree construction or
//! query begins, and returned to the caller. Generation is
//! deterministic, so retrying with the same inputs cannot change the
//! outcome; callers treat these as terminal for that configuration.

use crate::axis::{Axis, Dimension};
use crate::label::Label;
use std::error::Error;
use std::fmt;

/// Errors from validating a [`SubdivisionConfig`](crate::SubdivisionConfig).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// An explicit axis cycle names an axis outside the dimension's
    /// allowed set.
    InvalidAxis {
        /// The offending axis.
        axis: Axis,
        /// The dimension whose axis set was violated.
        dimension: Dimension,
    },
    /// The start axis is not a member of the dimension's default cycle.
    InvalidStartAxis {
        /// The offending axis.
        axis: Axis,
        /// The dimension whose default cycle was consulted.
        dimension: Dimension,
    },
    /// An explicit axis cycle was given but contains no axes.
    EmptyAxisCycle,
    /// `min_depth` exceeds `max_depth`.
    InvalidDepthRange {
        /// Configured minimum depth.
        min_depth: u32,
        /// Configured maximum depth.
        max_depth: u32,
    },
    /// `split_probability` is outside `[0, 1]` (or NaN).
    InvalidProbability {
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAxis { axis, dimension } => {
                write!(
                    f,
                    "axis '{axis}' is not valid for dimension {dimension} (allowed: {})",
                    axis_list(*dimension)
                )
            }
            Self::InvalidStartAxis { axis, dimension } => {
                write!(
                    f,
                    "start axis '{axis}' is not in the default cycle for dimension {dimension} (allowed: {})",
                    axis_list(*dimension)
                )
            }
            Self::EmptyAxisCycle => write!(f, "axis cycle must contain at least one axis"),
            Self::InvalidDepthRange {
                min_depth,
                max_depth,
            } => {
                write!(
                    f,
                    "min_depth {min_depth} cannot exceed max_depth {max_depth}"
                )
            }
            Self::InvalidProbability { value } => {
                write!(f, "split_probability {value} must be within [0, 1]")
            }
        }
    }
}

impl Error for ConfigError {}

fn axis_list(dimension: Dimension) -> String {
    dimension
        .axes()
        .iter()
        .map(|a| a.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors from resolving a target cell against a built tree.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryError {
    /// The requested label does not correspond to any cell in the tree.
    LabelNotFound {
        /// The requested label.
        label: Label,
        /// A short sorted sample of leaf labels that do exist, to aid
        /// debugging (at most ten).
        available: Vec<Label>,
    },
    /// The requested label names an internal cell, not a leaf.
    TargetNotLeaf {
        /// The requested label.
        label: Label,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LabelNotFound { label, available } => {
                write!(f, "label '{label}' is not a leaf in this subdivision")?;
                if !available.is_empty() {
                    write!(f, " (available leaves include: ")?;
                    for (i, leaf) in available.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{leaf}")?;
                    }
                    f.write_str(")")?;
                }
                Ok(())
            }
            Self::TargetNotLeaf { label } => {
                write!(f, "label '{label}' names an internal cell, not a leaf")
            }
        }
    }
}

impl Error for QueryError {}

/// Failure to parse an axis name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAxisError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseAxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not an axis name (expected x, y, or z)", self.input)
    }
}

impl Error for ParseAxisError {}

/// Failure to parse a cell label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseLabelError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a cell label (expected binary digits or \"\")",
            self.input
        )
    }
}

impl Error for ParseLabelError {}
