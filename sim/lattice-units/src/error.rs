//! Error types for lattice conversions.

use crate::Axis;
use thiserror::Error;

/// Convenience alias for results carrying a [`LatticeError`].
pub type Result<T> = std::result::Result<T, LatticeError>;

/// Errors that can occur while building converters or resolving scales.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum LatticeError {
    /// An axes string must be a permutation of "xyz".
    #[error("axes must be a permutation of \"xyz\", got {axes:?}")]
    InvalidAxes {
        /// The rejected axes string.
        axes: String,
    },

    /// Padding and cuts left no lattice nodes along an axis.
    #[error("effective lattice span along {axis} is {span}, must be positive")]
    EmptyAxisSpan {
        /// The natural axis with the degenerate span.
        axis: Axis,
        /// Span after removing padding and restoring cut nodes.
        span: i64,
    },

    /// A physical bounding box must be finite with `max > min` per axis.
    #[error("bounding box along {axis} is [{min}, {max}], must be finite with max > min")]
    InvalidBoundingBox {
        /// The natural axis with the degenerate extent.
        axis: Axis,
        /// Lower physical bound.
        min: f64,
        /// Upper physical bound.
        max: f64,
    },

    /// A reference scale is neither supplied nor derivable.
    #[error("physical {name} is neither supplied nor derivable from the Reynolds number")]
    MissingScale {
        /// Name of the missing scale.
        name: &'static str,
    },

    /// A supplied scale must be positive and finite.
    #[error("{name} must be positive and finite, got {value}")]
    InvalidScale {
        /// Name of the offending scale.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A derived lattice viscosity exceeds the BGK stability bound.
    #[error("derived lattice viscosity {viscosity} exceeds the stability bound 1/6")]
    UnstableViscosity {
        /// The derived, out-of-range viscosity.
        viscosity: f64,
    },
}
