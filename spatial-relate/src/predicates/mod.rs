use log::debug;

use crate::geometry::geo_enums::SpatialRelation;
use crate::trace::{Recorder, TraceStep};
use crate::util::RelateConfig;

/// Point-on-segment, point-in-polygon and point location tests
pub mod containment;

/// Collinearity gate, side tests and the segment-segment relation
pub mod segment_segment;

/// Dimensionally extended nine-intersection matrices
pub mod de9im;

mod point_relations;
mod polygon_polygon;
mod segment_polygon;

#[doc(inline)]
pub use polygon_polygon::VertexCensus;

/// Flags measurements that fall inside the ambiguity band around their threshold
pub(crate) fn note_ambiguity(
    config: &RelateConfig,
    rec: &mut impl Recorder,
    measure: &'static str,
    value: f64,
    threshold: f64,
) {
    if config.is_ambiguous(value, threshold) {
        debug!("[RELATE] ambiguous {measure}: {value:.6} vs threshold {threshold}");
        rec.record(|| TraceStep::Ambiguity {
            measure,
            value,
            threshold,
        });
    }
}

/// Records the final relation of a predicate together with the rule that produced it
pub(crate) fn conclude(
    rec: &mut impl Recorder,
    relation: SpatialRelation,
    reason: &'static str,
) -> SpatialRelation {
    rec.record(|| TraceStep::Conclusion { relation, reason });
    relation
}
