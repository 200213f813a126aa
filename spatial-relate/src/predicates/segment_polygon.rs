use crate::geometry::geo_enums::{GeoPosition, SpatialRelation};
use crate::geometry::geo_traits::{Relate, Shape};
use crate::geometry::primitives::{Polygon, Segment};
use crate::predicates::conclude;
use crate::predicates::containment::{locate_point, on_segment_reach, point_on_segment};
use crate::predicates::segment_segment::{piece_midpoints, segments_cross};
use crate::trace::{NoTrace, Recorder, TraceStep};
use crate::util::RelateConfig;

impl Relate<Polygon> for Segment {
    fn relate(&self, poly: &Polygon, config: &RelateConfig, rec: &mut impl Recorder) -> SpatialRelation {
        let reach = on_segment_reach(
            f64::max(self.length(), poly.longest_edge()),
            config.on_segment_tolerance,
        );
        if !poly.bbox.inflate(reach).collides_with(&self.bbox()) {
            rec.record(|| TraceStep::BoundingBoxRejection);
            return conclude(rec, SpatialRelation::Disjoint, "segment is far from the polygon");
        }

        let ends = [
            locate_point(&self.start(), poly, config, rec),
            locate_point(&self.end(), poly, config, rec),
        ];

        //scan untraced, only the decisive edge is narrated
        let crossed = poly
            .edge_iter()
            .position(|edge| segments_cross(self, edge, config, &mut NoTrace));
        if let Some(i) = crossed {
            segments_cross(self, &poly.edges[i], config, rec);
            rec.record(|| TraceStep::EdgeCrossing {
                edge: i,
                crosses: true,
            });
            return conclude(rec, SpatialRelation::Crosses, "segment properly crosses an edge");
        }
        if ends.contains(&GeoPosition::Interior) && ends.contains(&GeoPosition::Exterior) {
            return conclude(rec, SpatialRelation::Crosses, "one endpoint inside, the other outside");
        }

        let contacts = vertex_contacts(self, poly, config);
        let pieces = piece_positions(self, &contacts, poly, config, rec);
        let touches_at = |pos: GeoPosition| ends.contains(&pos) || pieces.contains(&pos);

        match (
            touches_at(GeoPosition::Interior),
            touches_at(GeoPosition::Exterior),
        ) {
            (true, true) => conclude(rec, SpatialRelation::Crosses, "segment enters and leaves through vertices"),
            (true, false) => conclude(rec, SpatialRelation::Within, "segment lies inside the polygon"),
            (false, _) if touches_at(GeoPosition::Boundary) || !contacts.is_empty() => {
                conclude(rec, SpatialRelation::Touches, "segment meets only the boundary")
            }
            (false, _) => conclude(rec, SpatialRelation::Disjoint, "segment stays outside the polygon"),
        }
    }
}

/// Positions along `seg` (distance from its start) of the polygon vertices lying on it
fn vertex_contacts(seg: &Segment, poly: &Polygon, config: &RelateConfig) -> Vec<f64> {
    poly.vertices
        .iter()
        .filter(|v| point_on_segment(v, seg, config, &mut NoTrace))
        .map(|v| seg.projection(v))
        .collect()
}

/// Cuts `seg` at the vertex contacts and locates the middle of every piece longer than the tolerance
fn piece_positions(
    seg: &Segment,
    contacts: &[f64],
    poly: &Polygon,
    config: &RelateConfig,
    rec: &mut impl Recorder,
) -> Vec<GeoPosition> {
    piece_midpoints(seg, contacts.iter().copied(), config.on_segment_tolerance)
        .iter()
        .map(|mid| locate_point(mid, poly, config, rec))
        .collect()
}
