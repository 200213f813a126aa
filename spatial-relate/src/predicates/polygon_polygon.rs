use itertools::Itertools;

use crate::geometry::geo_enums::{GeoPosition, SpatialRelation};
use crate::geometry::geo_traits::Relate;
use crate::geometry::primitives::Polygon;
use crate::predicates::conclude;
use crate::predicates::containment::{locate_point, on_segment_reach};
use crate::predicates::segment_segment::segments_cross;
use crate::trace::{NoTrace, Recorder, TraceStep};
use crate::util::{PolygonMode, RelateConfig};

/// Positions of the vertices of one polygon relative to another
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct VertexCensus {
    pub interior: usize,
    pub boundary: usize,
    pub exterior: usize,
}

impl VertexCensus {
    /// Locates every vertex of `of` against `against`
    pub fn new(of: &Polygon, against: &Polygon, config: &RelateConfig) -> Self {
        of.vertices
            .iter()
            .map(|v| locate_point(v, against, config, &mut NoTrace))
            .fold(VertexCensus::default(), |mut c, pos| {
                match pos {
                    GeoPosition::Interior => c.interior += 1,
                    GeoPosition::Boundary => c.boundary += 1,
                    GeoPosition::Exterior => c.exterior += 1,
                }
                c
            })
    }

    pub fn total(&self) -> usize {
        self.interior + self.boundary + self.exterior
    }

    fn record(&self, label: &'static str, rec: &mut impl Recorder) {
        rec.record(|| TraceStep::VertexCensus {
            label,
            interior: self.interior,
            boundary: self.boundary,
            exterior: self.exterior,
        });
    }
}

/// First pair of edges `(i, j)` that properly cross, `i` indexing `a` and `j` indexing `b`
fn first_edge_crossing(a: &Polygon, b: &Polygon, config: &RelateConfig) -> Option<(usize, usize)> {
    (0..a.n_vertices())
        .cartesian_product(0..b.n_vertices())
        .find(|&(i, j)| segments_cross(&a.edge(i), &b.edge(j), config, &mut NoTrace))
}

impl Relate<Polygon> for Polygon {
    fn relate(&self, other: &Polygon, config: &RelateConfig, rec: &mut impl Recorder) -> SpatialRelation {
        let (a, b) = (self, other);
        let dec = config.coordinate_decimals;

        let equal = a.sorted_vertices(dec) == b.sorted_vertices(dec);
        rec.record(|| TraceStep::CompareVertexSets {
            n_a: a.n_vertices(),
            n_b: b.n_vertices(),
            equal,
        });
        if equal {
            return conclude(rec, SpatialRelation::Equals, "identical vertex sets");
        }

        let eps = config.on_segment_tolerance;
        let reach = on_segment_reach(f64::max(a.longest_edge(), b.longest_edge()), eps);
        if !a.bbox.inflate(reach).collides_with(&b.bbox.inflate(reach)) {
            rec.record(|| TraceStep::BoundingBoxRejection);
            return conclude(rec, SpatialRelation::Disjoint, "polygons are far apart");
        }

        let a_in_b = VertexCensus::new(a, b, config);
        let b_in_a = VertexCensus::new(b, a, config);
        a_in_b.record("the first polygon in the second", rec);
        b_in_a.record("the second polygon in the first", rec);

        let crossing = match config.polygon_mode {
            PolygonMode::VertexSampling => false,
            PolygonMode::EdgeIntersection => match first_edge_crossing(a, b, config) {
                Some((i, j)) => {
                    segments_cross(&a.edge(i), &b.edge(j), config, rec);
                    rec.record(|| TraceStep::EdgeCrossing {
                        edge: j,
                        crosses: true,
                    });
                    true
                }
                None => false,
            },
        };

        if a_in_b.boundary == a_in_b.total() && b_in_a.boundary == b_in_a.total() {
            return conclude(rec, SpatialRelation::Equals, "all vertices lie on the other's boundary");
        }
        if !crossing && b_in_a.exterior == 0 && a_in_b.interior == 0 {
            return conclude(rec, SpatialRelation::Contains, "no vertex of the second polygon outside the first");
        }
        if !crossing && a_in_b.exterior == 0 && b_in_a.interior == 0 {
            return conclude(rec, SpatialRelation::Within, "no vertex of the first polygon outside the second");
        }
        if !crossing && a_in_b.interior == 0 && b_in_a.interior == 0 {
            return match a_in_b.boundary + b_in_a.boundary > 0 {
                true => conclude(rec, SpatialRelation::Touches, "vertices meet only at the boundaries"),
                false => conclude(rec, SpatialRelation::Disjoint, "no vertex inside or on the other polygon"),
            };
        }
        conclude(rec, SpatialRelation::Overlaps, "interiors partially shared")
    }
}
