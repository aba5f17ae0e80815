//! Unit and coordinate conversion for lattice Boltzmann simulations.
//!
//! This crate maps a physical simulation domain onto a discrete lattice and
//! keeps the physical and lattice unit systems consistent:
//!
//! - [`DomainConfig`] - Physical bounding box, lattice size, padding and cuts
//! - [`CoordinateConverter`] - Physical positions to storage-order lattice nodes
//! - [`AxisPermutation`] - Remapping of physical axes onto storage slots
//! - [`PhysicalScales`] / [`LatticeScales`] - Reference scales on each side
//! - [`UnitConverter`] - Reynolds-matched scale derivation, `dx`/`dt`, Womersley
//!
//! # Coordinate Systems
//!
//! Physical positions are continuous `f64` points in natural `(x, y, z)`
//! order. Lattice nodes are discrete `i32` triples in **storage order**
//! `[z, y, x]`, matching how subdomain fields are laid out in memory. An
//! [`AxisPermutation`] such as `"zxy"` reroutes which physical axis lands in
//! which storage slot.
//!
//! Padding nodes shift the physical frame inside a larger allocation, and
//! cut nodes restore coordinates relative to an envelope larger than the
//! stored region, so distributed subdomains agree on global node indices.
//!
//! # Unit Systems
//!
//! Physical reference scales (viscosity, length, velocity) resolve against
//! the Reynolds number; lattice scales arrive once the domain is sized, and
//! the one still missing is derived by matching the lattice Reynolds number
//! to the physical one. [`UnitConverter`] then exposes the node spacing
//! `dx`, the timestep `dt`, and dimensionless groups on both sides.
//!
//! # Example
//!
//! ```
//! use lattice_units::{CoordinateConverter, DomainConfig};
//! use nalgebra::Point3;
//!
//! // A unit cube sampled on a 16x16x16 lattice.
//! let config = DomainConfig::new([(0.0, 1.0), (0.0, 1.0), (0.0, 1.0)], [16, 16, 16]);
//! let converter = CoordinateConverter::new(&config)?;
//!
//! // Physical positions map to [z, y, x] storage-order nodes.
//! let node = converter.to_lattice(Point3::new(0.5, 0.25, 0.75));
//! assert_eq!(node, [12, 4, 8]);
//!
//! // Node centers map back to exact physical positions.
//! let back = converter.from_lattice(node);
//! assert!((back - Point3::new(0.5, 0.25, 0.75)).norm() < 1e-12);
//! # Ok::<(), lattice_units::LatticeError>(())
//! ```

// Safety: Deny unwrap/expect in library code
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod axes;
mod coordinate;
mod error;
mod units;

pub use axes::{Axis, AxisPermutation};
pub use coordinate::{CoordinateConverter, DomainConfig};
pub use error::{LatticeError, Result};
pub use units::{LatticeScales, PhysicalScales, UnitConverter};

// Re-export nalgebra point type used in the public API.
pub use nalgebra::Point3;
