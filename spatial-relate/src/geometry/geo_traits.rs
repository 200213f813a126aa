use crate::geometry::geo_enums::SpatialRelation;
use crate::geometry::primitives::Rect;
use crate::trace::Recorder;
use crate::util::RelateConfig;

/// Trait for types that can determine their topological relation to `T`.
///
/// Only implemented for the canonical pairs (point/point, point/segment, point/polygon,
/// segment/segment, segment/polygon, polygon/polygon). The other orders are handled by
/// the dispatcher through [`SpatialRelation::converse`].
pub trait Relate<T> {
    /// Relation of `self` to `other`, evidence is handed to `rec`.
    fn relate(&self, other: &T, config: &RelateConfig, rec: &mut impl Recorder) -> SpatialRelation;
}

/// Trait for types that can compute the minimum distance between `Self` and `T`.
pub trait DistanceTo<T> {
    fn distance_to(&self, other: &T) -> f64;

    /// Squared version of [DistanceTo::distance_to]
    fn sq_distance_to(&self, other: &T) -> f64;
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Axis-aligned bounding box of the shape
    fn bbox(&self) -> Rect;
}
