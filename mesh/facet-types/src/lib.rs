//! Triangle facet topology types.
//!
//! This crate provides the facet building block used by mesh processing and
//! simulation-preparation pipelines:
//!
//! - [`Facet`] - Three vertex indices into an external vertex array, plus a
//!   cached surface normal
//!
//! # Design Philosophy
//!
//! A facet is **pure topology plus payload**. It records which vertices a
//! triangle references, not where they are: the vertex container, normal
//! computation from positions, and mesh-level structures (face lists,
//! adjacency, half-edges) belong to the layers that own them. The facet
//! never dereferences its indices and never validates them. Out-of-range
//! or repeated indices are stored as given; only the owning mesh can
//! judge them.
//!
//! # Equality
//!
//! Two facets compare equal when each index of the right-hand facet occurs
//! among the left-hand facet's indices. For facets whose three indices are
//! pairwise distinct this is exactly "same three vertices, any winding
//! order", which is what deduplication and adjacency queries want. The
//! normal is auxiliary payload and never participates. See [`Facet`] for
//! the caveats around repeated indices.
//!
//! Facets are deliberately unordered: there is no `PartialOrd`/`Ord`, no
//! `Hash`. A consumer needing a total order over facets must build one on
//! a canonical form of the indices, independent of this equality.
//!
//! # Example
//!
//! ```
//! use facet_types::{Facet, Vector3};
//!
//! // Two windings of the same triangle compare equal.
//! let forward: Facet<u32, f64> = Facet::new(0, 1, 2);
//! let reversed: Facet<u32, f64> = Facet::new(2, 1, 0);
//! assert_eq!(forward, reversed);
//!
//! // The normal is cached payload, supplied by whoever computed it.
//! let mut lit = Facet::with_normal(0_u32, 1, 2, Vector3::new(0.0, 0.0, 1.0));
//! *lit.normal_mut() = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(lit.normal().y, 1.0);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod facet;

pub use facet::Facet;

// Re-export nalgebra types for convenience
pub use nalgebra::Vector3;
