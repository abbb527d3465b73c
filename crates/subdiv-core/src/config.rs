//! Subdivision configuration parameters.

use crate::axis::{Axis, AxisCycle, Dimension};
use crate::error::ConfigError;
use crate::label::Label;

/// How the split-axis cycle is derived from the configuration.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AxisSpec {
    /// The dimension's default cycle: `(x, y)` or `(x, y, z)`.
    #[default]
    Default,
    /// The default cycle rotated so the given axis leads.
    StartAxis(Axis),
    /// An explicit cycle, used verbatim after validation.
    Cycle(Vec<Axis>),
}

/// Configuration for one half-subdivision case.
///
/// Fields are plain data: construct with [`SubdivisionConfig::new`],
/// adjust what you need, then let the builder validate. The same
/// configuration always produces the same tree, target, and neighbour
/// set.
///
/// # Examples
///
/// ```
/// use subdiv_core::{Dimension, SubdivisionConfig};
///
/// let config = SubdivisionConfig::new(Dimension::D2, 5, 42);
/// let cycle = config.validate().unwrap();
/// assert_eq!(cycle.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SubdivisionConfig {
    /// Dimensionality of the partitioned domain.
    pub dimension: Dimension,

    /// Depth at which recursion always stops.
    pub max_depth: u32,

    /// Depth below which every cell is forced to split.
    ///
    /// Must not exceed `max_depth`. Default: 0.
    pub min_depth: u32,

    /// Probability of splitting a cell between `min_depth` and
    /// `max_depth`. Must lie within `[0, 1]`. Default: 0.7.
    pub split_probability: f64,

    /// Seed for the deterministic sequence source.
    pub seed: u64,

    /// Split-axis derivation. Default: the dimension's default cycle.
    pub axis_spec: AxisSpec,

    /// Leaf to query for neighbours. `None` selects a leaf uniformly at
    /// random from the same sequence source after construction.
    pub target_label: Option<Label>,
}

impl SubdivisionConfig {
    /// Default split probability, matching the reference generator.
    pub const DEFAULT_SPLIT_PROBABILITY: f64 = 0.7;

    /// Create a configuration with default probability, zero minimum
    /// depth, the default axis cycle, and random target selection.
    pub fn new(dimension: Dimension, max_depth: u32, seed: u64) -> Self {
        Self {
            dimension,
            max_depth,
            min_depth: 0,
            split_probability: Self::DEFAULT_SPLIT_PROBABILITY,
            seed,
            axis_spec: AxisSpec::Default,
            target_label: None,
        }
    }

    /// Validate the configuration and resolve the split-axis cycle.
    ///
    /// Fail-fast: every error is detected here, before any tree is
    /// built. Returns the resolved [`AxisCycle`] on success.
    pub fn validate(&self) -> Result<AxisCycle, ConfigError> {
        if !(0.0..=1.0).contains(&self.split_probability) {
            return Err(ConfigError::InvalidProbability {
                value: self.split_probability,
            });
        }
        if self.min_depth > self.max_depth {
            return Err(ConfigError::InvalidDepthRange {
                min_depth: self.min_depth,
                max_depth: self.max_depth,
            });
        }
        match &self.axis_spec {
            AxisSpec::Default => AxisCycle::resolve(self.dimension, None, None),
            AxisSpec::StartAxis(axis) => AxisCycle::resolve(self.dimension, None, Some(*axis)),
            AxisSpec::Cycle(axes) => AxisCycle::resolve(self.dimension, Some(axes), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SubdivisionConfig::new(Dimension::D3, 4, 7);
        let cycle = config.validate().unwrap();
        assert_eq!(cycle.as_slice(), Dimension::D3.axes());
    }

    #[test]
    fn probability_above_one_is_rejected() {
        let mut config = SubdivisionConfig::new(Dimension::D2, 3, 0);
        config.split_probability = 1.5;
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvalidProbability { value: 1.5 }
        );
    }

    #[test]
    fn negative_probability_is_rejected() {
        let mut config = SubdivisionConfig::new(Dimension::D2, 3, 0);
        config.split_probability = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn nan_probability_is_rejected() {
        let mut config = SubdivisionConfig::new(Dimension::D2, 3, 0);
        config.split_probability = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn boundary_probabilities_are_accepted() {
        for p in [0.0, 1.0] {
            let mut config = SubdivisionConfig::new(Dimension::D2, 3, 0);
            config.split_probability = p;
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn min_depth_above_max_depth_is_rejected() {
        let mut config = SubdivisionConfig::new(Dimension::D2, 2, 0);
        config.min_depth = 3;
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvalidDepthRange {
                min_depth: 3,
                max_depth: 2,
            }
        );
    }

    #[test]
    fn axis_spec_errors_surface_through_validate() {
        let mut config = SubdivisionConfig::new(Dimension::D2, 2, 0);
        config.axis_spec = AxisSpec::Cycle(vec![Axis::Z]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAxis { .. })
        ));
    }
}
