//! Root-to-cell path labels.

use crate::error::ParseLabelError;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// The path from the root to a cell as a sequence of binary child picks.
///
/// Child `0` is the low half along the split axis, child `1` the high
/// half. The root carries the empty label, rendered as `""` in display
/// output. Label length equals depth, and labels uniquely identify tree
/// positions.
///
/// Ordering is lexicographic over the bit sequence, which matches the
/// string ordering of the rendered labels and is used for deterministic
/// neighbour output.
///
/// # Examples
///
/// ```
/// use subdiv_core::Label;
///
/// let root = Label::root();
/// assert_eq!(root.to_string(), "\"\"");
///
/// let cell = root.child(0).child(1);
/// assert_eq!(cell.to_string(), "01");
/// assert_eq!(cell.depth(), 2);
/// assert_eq!("01".parse::<Label>().unwrap(), cell);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label {
    // Inline up to 16 levels; deeper trees spill to the heap.
    bits: SmallVec<[u8; 16]>,
}

impl Label {
    /// The empty label of the root cell.
    pub fn root() -> Self {
        Self::default()
    }

    /// The label extended by one child pick (`0` = low, `1` = high).
    pub fn child(&self, bit: u8) -> Self {
        debug_assert!(bit <= 1, "child pick must be 0 or 1");
        let mut bits = self.bits.clone();
        bits.push(bit);
        Self { bits }
    }

    /// Number of child picks; equals the depth of the labelled cell.
    pub fn depth(&self) -> usize {
        self.bits.len()
    }

    /// `true` only for the empty root label.
    pub fn is_root(&self) -> bool {
        self.bits.is_empty()
    }

    /// The child picks from root to cell.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bits.is_empty() {
            return f.write_str("\"\"");
        }
        for &bit in &self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

impl FromStr for Label {
    type Err = ParseLabelError;

    /// Parse a binary-digit string.
    ///
    /// The empty string and the literal `""` both denote the root label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "\"\"" {
            return Ok(Self::root());
        }
        let mut bits = SmallVec::new();
        for c in s.chars() {
            match c {
                '0' => bits.push(0),
                '1' => bits.push(1),
                _ => {
                    return Err(ParseLabelError {
                        input: s.to_string(),
                    })
                }
            }
        }
        Ok(Self { bits })
    }
}
