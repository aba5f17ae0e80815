//! Axis identifiers and axis permutations.

use crate::LatticeError;
use std::fmt;
use std::str::FromStr;

/// A natural geometry axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl Axis {
    /// All three axes in natural order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// The natural position of this axis: x is 0, y is 1, z is 2.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The lowercase character used in configuration strings.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Self::X),
            'y' => Some(Self::Y),
            'z' => Some(Self::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A permutation of the three geometry axes.
///
/// Configuration strings name the permutation as a rearrangement of "xyz":
/// "xyz" leaves the geometry unshuffled, "xzy" swaps y and z, and so on.
/// Conversion code asks where a natural axis landed via
/// [`AxisPermutation::position_of`].
///
/// # Example
///
/// ```
/// use lattice_units::{Axis, AxisPermutation};
///
/// let permutation: AxisPermutation = "xzy".parse()?;
/// assert_eq!(permutation.position_of(Axis::X), 0);
/// assert_eq!(permutation.position_of(Axis::Y), 2);
/// assert_eq!(permutation.to_string(), "xzy");
/// # Ok::<(), lattice_units::LatticeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct AxisPermutation {
    order: [Axis; 3],
}

impl AxisPermutation {
    /// The identity permutation "xyz".
    #[must_use]
    pub const fn natural() -> Self {
        Self { order: Axis::ALL }
    }

    /// Builds a permutation from three axes in permuted order.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::InvalidAxes`] when an axis repeats.
    pub fn new(order: [Axis; 3]) -> crate::Result<Self> {
        for axis in Axis::ALL {
            if !order.contains(&axis) {
                return Err(LatticeError::InvalidAxes {
                    axes: order.iter().map(|a| a.as_char()).collect(),
                });
            }
        }
        Ok(Self { order })
    }

    /// The permuted position of `axis`.
    #[must_use]
    pub const fn position_of(self, axis: Axis) -> usize {
        // Constructors guarantee each axis occurs exactly once.
        let target = axis as usize;
        if self.order[0] as usize == target {
            0
        } else if self.order[1] as usize == target {
            1
        } else {
            2
        }
    }

    /// The axes in permuted order.
    #[must_use]
    pub const fn order(self) -> [Axis; 3] {
        self.order
    }
}

impl Default for AxisPermutation {
    fn default() -> Self {
        Self::natural()
    }
}

impl FromStr for AxisPermutation {
    type Err = LatticeError;

    fn from_str(s: &str) -> crate::Result<Self> {
        let invalid = || LatticeError::InvalidAxes { axes: s.to_owned() };

        let mut chars = s.chars();
        let (Some(first), Some(second), Some(third), None) =
            (chars.next(), chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        let order = [
            Axis::from_char(first).ok_or_else(invalid)?,
            Axis::from_char(second).ok_or_else(invalid)?,
            Axis::from_char(third).ok_or_else(invalid)?,
        ];
        Self::new(order)
    }
}

impl fmt::Display for AxisPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for axis in self.order {
            write!(f, "{axis}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for AxisPermutation {
    type Error = LatticeError;

    fn try_from(value: String) -> crate::Result<Self> {
        value.parse()
    }
}

impl From<AxisPermutation> for String {
    fn from(permutation: AxisPermutation) -> Self {
        permutation.to_string()
    }
}
