use crate::geometry::geo_enums::{GeoPosition, SpatialRelation};
use crate::geometry::geo_traits::Relate;
use crate::geometry::primitives::{Point, Polygon, Segment};
use crate::predicates::conclude;
use crate::predicates::containment::{locate_point, point_on_segment};
use crate::trace::{Recorder, TraceStep};
use crate::util::RelateConfig;

impl Relate<Point> for Point {
    fn relate(&self, other: &Point, config: &RelateConfig, rec: &mut impl Recorder) -> SpatialRelation {
        let equal = self.coincides_with(other, config.coordinate_decimals);
        rec.record(|| TraceStep::CompareCoordinates {
            a: *self,
            b: *other,
            equal,
        });
        match equal {
            true => conclude(rec, SpatialRelation::Equals, "same coordinates"),
            false => conclude(rec, SpatialRelation::Disjoint, "different coordinates"),
        }
    }
}

impl Relate<Segment> for Point {
    fn relate(&self, seg: &Segment, config: &RelateConfig, rec: &mut impl Recorder) -> SpatialRelation {
        let dec = config.coordinate_decimals;
        for endpoint in seg.endpoints() {
            let equal = self.coincides_with(&endpoint, dec);
            rec.record(|| TraceStep::CompareCoordinates {
                a: *self,
                b: endpoint,
                equal,
            });
            if equal {
                return conclude(rec, SpatialRelation::Touches, "point is an endpoint of the segment");
            }
        }
        match point_on_segment(self, seg, config, rec) {
            true => conclude(rec, SpatialRelation::Within, "point lies on the segment"),
            false => conclude(rec, SpatialRelation::Disjoint, "point lies off the segment"),
        }
    }
}

impl Relate<Polygon> for Point {
    fn relate(&self, poly: &Polygon, config: &RelateConfig, rec: &mut impl Recorder) -> SpatialRelation {
        match locate_point(self, poly, config, rec) {
            GeoPosition::Boundary => conclude(rec, SpatialRelation::Touches, "point lies on an edge"),
            GeoPosition::Interior => conclude(rec, SpatialRelation::Within, "point lies inside the polygon"),
            GeoPosition::Exterior => conclude(rec, SpatialRelation::Disjoint, "point lies outside the polygon"),
        }
    }
}
