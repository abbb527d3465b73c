//! Axis tags, dimensionality, and the split-axis cycle.

use crate::error::{ConfigError, ParseAxisError};
use std::fmt;
use std::str::FromStr;

/// A coordinate axis of the unit square or cube.
///
/// Axes double as indices into the per-cell bounds arrays via
/// [`Axis::index`]. In 2D only [`Axis::X`] and [`Axis::Y`] are valid
/// split axes; the Z extent of a 2D cell is fixed at `[0, 1]` and never
/// split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
    /// Depth axis (3D only).
    Z,
}

impl Axis {
    /// Position of this axis in a `[f64; 3]` bounds array.
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Lower-case axis name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            _ => Err(ParseAxisError {
                input: s.to_string(),
            }),
        }
    }
}

/// Number of spatial dimensions of the partitioned domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Unit square, axes X and Y.
    D2,
    /// Unit cube, axes X, Y, and Z.
    D3,
}

impl Dimension {
    /// Number of axes.
    pub fn ndim(self) -> usize {
        match self {
            Self::D2 => 2,
            Self::D3 => 3,
        }
    }

    /// The allowed axis set, in canonical order.
    ///
    /// This is also the default split cycle: `(x, y)` for 2D and
    /// `(x, y, z)` for 3D.
    pub fn axes(self) -> &'static [Axis] {
        match self {
            Self::D2 => &[Axis::X, Axis::Y],
            Self::D3 => &[Axis::X, Axis::Y, Axis::Z],
        }
    }

    /// Whether `axis` is a valid split axis for this dimension.
    pub fn contains(self, axis: Axis) -> bool {
        self.axes().contains(&axis)
    }

    /// Construct from an axis count, if supported.
    pub fn from_ndim(ndim: usize) -> Option<Self> {
        match ndim {
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.ndim())
    }
}

/// A validated, non-empty repeating sequence of split axes.
///
/// The axis used at depth `k` is `cycle[k mod len]`. Resolved once per
/// configuration by [`AxisCycle::resolve`] and immutable thereafter.
///
/// # Examples
///
/// ```
/// use subdiv_core::{Axis, AxisCycle, Dimension};
///
/// // Default 3D cycle: x, y, z, x, y, z, ...
/// let cycle = AxisCycle::resolve(Dimension::D3, None, None).unwrap();
/// assert_eq!(cycle.axis_for_depth(0), Axis::X);
/// assert_eq!(cycle.axis_for_depth(4), Axis::Y);
///
/// // Rotated so Y leads.
/// let cycle = AxisCycle::resolve(Dimension::D2, None, Some(Axis::Y)).unwrap();
/// assert_eq!(cycle.as_slice(), &[Axis::Y, Axis::X]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisCycle {
    axes: Vec<Axis>,
}

impl AxisCycle {
    /// Resolve the split cycle from an optional explicit sequence or
    /// start axis.
    ///
    /// Precedence:
    /// 1. `explicit`: used as-is after validation. Every element must be
    ///    in `dimension.axes()` ([`ConfigError::InvalidAxis`]) and the
    ///    sequence must be non-empty ([`ConfigError::EmptyAxisCycle`]).
    /// 2. `start`: the default cycle rotated so `start` leads. `start`
    ///    must be a member of the default cycle
    ///    ([`ConfigError::InvalidStartAxis`]).
    /// 3. Neither: the default cycle unrotated.
    pub fn resolve(
        dimension: Dimension,
        explicit: Option<&[Axis]>,
        start: Option<Axis>,
    ) -> Result<Self, ConfigError> {
        if let Some(seq) = explicit {
            if seq.is_empty() {
                return Err(ConfigError::EmptyAxisCycle);
            }
            for &axis in seq {
                if !dimension.contains(axis) {
                    return Err(ConfigError::InvalidAxis { axis, dimension });
                }
            }
            return Ok(Self {
                axes: seq.to_vec(),
            });
        }

        let default = dimension.axes();
        let Some(start) = start else {
            return Ok(Self {
                axes: default.to_vec(),
            });
        };
        let Some(pos) = default.iter().position(|&a| a == start) else {
            return Err(ConfigError::InvalidStartAxis {
                axis: start,
                dimension,
            });
        };
        let mut axes = default[pos..].to_vec();
        axes.extend_from_slice(&default[..pos]);
        Ok(Self { axes })
    }

    /// The axis to split on at the given depth.
    pub fn axis_for_depth(&self, depth: u32) -> Axis {
        self.axes[depth as usize % self.axes.len()]
    }

    /// The resolved sequence.
    pub fn as_slice(&self) -> &[Axis] {
        &self.axes
    }

    /// Cycle length.
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Always returns `false` — resolution rejects empty cycles.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for AxisCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, axis) in self.axes.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{axis}")?;
        }
        Ok(())
    }
}
