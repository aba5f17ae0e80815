//! Conversion between physical positions and lattice node coordinates.

use crate::{Axis, AxisPermutation, LatticeError};
use nalgebra::Point3;
use tracing::debug;

/// Describes how a physical domain was embedded into a lattice.
///
/// The lattice stores nodes in the reverse of the natural axis order, so the
/// lattice extent along natural axis `i` lives at `size[2 - i]`. Padding
/// counts nodes added to the domain after voxelization and cuts count nodes
/// trimmed from the envelope, both in natural axis order.
///
/// # Example
///
/// ```
/// use lattice_units::DomainConfig;
///
/// let config = DomainConfig::new([(0.0, 2.0), (-1.0, 1.0), (0.0, 8.0)], [128, 64, 32])
///     .padding([2, 2, 0, 0, 4, 4]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainConfig {
    /// Physical span of the domain: `[(x0, x1), (y0, y1), (z0, z1)]`.
    pub bounding_box: [(f64, f64); 3],
    /// Lattice domain size, in lattice storage order.
    pub size: [u32; 3],
    /// Mapping from geometry axes to lattice axes.
    pub axes: AxisPermutation,
    /// Nodes added per axis end: `[fwd_x, back_x, fwd_y, back_y, fwd_z, back_z]`.
    pub padding: [u32; 6],
    /// Nodes removed per axis end: `[(fwd_x, back_x), (fwd_y, back_y), (fwd_z, back_z)]`.
    pub cuts: Option<[(u32, u32); 3]>,
}

impl DomainConfig {
    /// Creates a configuration with unshuffled axes, no padding, no cuts.
    #[must_use]
    pub const fn new(bounding_box: [(f64, f64); 3], size: [u32; 3]) -> Self {
        Self {
            bounding_box,
            size,
            axes: AxisPermutation::natural(),
            padding: [0; 6],
            cuts: None,
        }
    }

    /// Sets the axis permutation.
    #[must_use]
    pub const fn axes(mut self, axes: AxisPermutation) -> Self {
        self.axes = axes;
        self
    }

    /// Sets the per-end padding counts.
    #[must_use]
    pub const fn padding(mut self, padding: [u32; 6]) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the per-end cut counts.
    #[must_use]
    pub const fn cuts(mut self, cuts: [(u32, u32); 3]) -> Self {
        self.cuts = Some(cuts);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`LatticeError::InvalidBoundingBox`] for a non-finite or empty
    /// physical span, [`LatticeError::EmptyAxisSpan`] when padding and cuts
    /// leave no lattice nodes along an axis.
    pub fn validate(&self) -> crate::Result<()> {
        for axis in Axis::ALL {
            let (min, max) = self.bounding_box[axis.index()];
            if !min.is_finite() || !max.is_finite() || max <= min {
                return Err(LatticeError::InvalidBoundingBox { axis, min, max });
            }

            let span = self.raw_span(axis);
            if span <= 0 {
                return Err(LatticeError::EmptyAxisSpan { axis, span });
            }
        }
        Ok(())
    }

    /// Lattice span of the raw geometry along a natural axis: the stored
    /// extent with padding removed and cut nodes restored.
    fn raw_span(&self, axis: Axis) -> i64 {
        let i = axis.index();
        let mut span = i64::from(self.size[2 - i])
            - i64::from(self.padding[2 * i])
            - i64::from(self.padding[2 * i + 1]);
        if let Some(cuts) = self.cuts {
            span += i64::from(cuts[i].0) + i64::from(cuts[i].1);
        }
        span
    }
}

/// Converts between physical positions and lattice node coordinates.
///
/// Physical positions are natural `(x, y, z)` points. Lattice coordinates
/// are in lattice storage order: the reverse of the natural order, further
/// shuffled by the configured axis permutation, indexed from the padded
/// domain origin.
///
/// # Example
///
/// ```
/// use lattice_units::{CoordinateConverter, DomainConfig};
/// use nalgebra::Point3;
///
/// let config = DomainConfig::new([(0.0, 2.0), (0.0, 4.0), (0.0, 8.0)], [80, 40, 20]);
/// let converter = CoordinateConverter::new(&config)?;
///
/// assert_eq!(converter.to_lattice(Point3::new(1.0, 2.0, 4.0)), [40, 20, 10]);
/// let back = converter.from_lattice([40, 20, 10]);
/// assert!((back - Point3::new(1.0, 2.0, 4.0)).norm() < 1e-12);
/// # Ok::<(), lattice_units::LatticeError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateConverter {
    /// Permuted position of each natural axis.
    positions: [usize; 3],
    /// Node spacing per natural axis.
    dx: [f64; 3],
    /// Node offset per natural axis (cuts shift forward, padding back).
    offset: [f64; 3],
    /// Physical lower bound per natural axis.
    phys_min: [f64; 3],
}

impl CoordinateConverter {
    /// Builds a converter from a domain configuration.
    ///
    /// # Errors
    ///
    /// Whatever [`DomainConfig::validate`] reports.
    #[allow(clippy::cast_precision_loss)] // raw spans are small node counts
    pub fn new(config: &DomainConfig) -> crate::Result<Self> {
        config.validate()?;

        let mut positions = [0; 3];
        let mut dx = [0.0; 3];
        let mut offset = [0.0; 3];
        let mut phys_min = [0.0; 3];

        for axis in Axis::ALL {
            let i = axis.index();
            let (min, max) = config.bounding_box[i];
            let (front_cut, _) = config.cuts.map_or((0, 0), |cuts| cuts[i]);

            positions[i] = config.axes.position_of(axis);
            offset[i] = f64::from(front_cut) - f64::from(config.padding[2 * i]);
            dx[i] = (max - min) / config.raw_span(axis) as f64;
            phys_min[i] = min;
        }

        let converter = Self {
            positions,
            dx,
            offset,
            phys_min,
        };
        debug!(
            dx = ?converter.dx,
            offset = ?converter.offset,
            "Built coordinate converter"
        );
        Ok(converter)
    }

    /// Fractional lattice coordinates of a physical position, in lattice
    /// storage order.
    #[must_use]
    pub fn to_lattice_unrounded(&self, phys: Point3<f64>) -> [f64; 3] {
        let mut lattice = [0.0; 3];
        for i in 0..3 {
            lattice[2 - self.positions[i]] =
                (phys[i] - self.phys_min[i]) / self.dx[i] - self.offset[i];
        }
        lattice
    }

    /// Nearest lattice node to a physical position, in lattice storage
    /// order.
    ///
    /// # Example
    ///
    /// ```
    /// use lattice_units::{CoordinateConverter, DomainConfig};
    /// use nalgebra::Point3;
    ///
    /// let config = DomainConfig::new([(0.0, 1.0), (0.0, 1.0), (0.0, 1.0)], [10, 10, 10]);
    /// let converter = CoordinateConverter::new(&config)?;
    ///
    /// // 0.33 lands between nodes 3 and 4, closer to 3.
    /// assert_eq!(converter.to_lattice(Point3::new(0.33, 0.5, 0.5)), [5, 5, 3]);
    /// # Ok::<(), lattice_units::LatticeError>(())
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // rounded node coordinates fit i32
    pub fn to_lattice(&self, phys: Point3<f64>) -> [i32; 3] {
        let unrounded = self.to_lattice_unrounded(phys);
        [
            unrounded[0].round() as i32,
            unrounded[1].round() as i32,
            unrounded[2].round() as i32,
        ]
    }

    /// Physical position of a lattice node, in natural `(x, y, z)` order.
    #[must_use]
    pub fn from_lattice(&self, lattice: [i32; 3]) -> Point3<f64> {
        let mut phys = [0.0; 3];
        for i in 0..3 {
            let node = f64::from(lattice[2 - self.positions[i]]);
            phys[i] = self.dx[i].mul_add(node + self.offset[i], self.phys_min[i]);
        }
        Point3::new(phys[0], phys[1], phys[2])
    }

    /// Physical node spacing along a natural axis.
    #[must_use]
    pub fn node_spacing(&self, axis: Axis) -> f64 {
        self.dx[axis.index()]
    }
}
