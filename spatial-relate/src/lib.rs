//! Topological relations between 2D points, line segments and polygons.
//!
//! Every pair of primitives is classified into exactly one [`SpatialRelation`](geometry::geo_enums::SpatialRelation)
//! using elementary analytic geometry (distance sums, direction angles, winding sums and side tests)
//! with fixed floating point tolerances, see [`RelateConfig`](util::RelateConfig).

/// Geometric primitives, the closed [`Geometry`](geometry::Geometry) union and shared enums/traits
pub mod geometry;

/// Pairwise relation tests, from point containment up to polygon-polygon relations
pub mod predicates;

/// Entry point: dispatches a pair of geometries to the correct predicate
pub mod relate;

/// Recording of the numeric evidence behind a classification
pub mod trace;

/// Parallel classification of many pairs and summary statistics
pub mod batch;

/// External (JSON) representation of geometries and relation records
pub mod io;

/// Errors raised on malformed input
pub mod error;

/// Configuration and small numeric helpers
pub mod util;

#[doc(inline)]
pub use error::RelateError;
#[doc(inline)]
pub use predicates::de9im::De9im;
#[doc(inline)]
pub use relate::{Relator, classify};
