use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::geometry::geo_enums::{Orientation, SpatialRelation};
use crate::geometry::geo_traits::{Relate, Shape};
use crate::geometry::primitives::{Point, Segment};
use crate::predicates::containment::{on_segment_reach, point_on_segment};
use crate::predicates::{conclude, note_ambiguity};
use crate::trace::{Recorder, TraceStep};
use crate::util::RelateConfig;
use crate::util::angles;

/// Angular collinearity gate: direction angles equal modulo 180°,
/// within [`RelateConfig::collinear_tolerance_deg`]
pub fn orientation(
    a: &Segment,
    b: &Segment,
    config: &RelateConfig,
    rec: &mut impl Recorder,
) -> Orientation {
    let tol = config.collinear_tolerance_deg;
    let (angle_a, angle_b) = (a.direction_angle(), b.direction_angle());
    let delta = angles::undirected_delta_deg(angle_a, angle_b);
    let orientation = match delta <= tol {
        true => Orientation::Collinear,
        false => Orientation::NotCollinear,
    };

    note_ambiguity(config, rec, "direction difference (°)", delta, tol);
    rec.record(|| TraceStep::Collinearity {
        angle_a,
        angle_b,
        slope_a: a.slope(),
        slope_b: b.slope(),
        delta,
        orientation,
    });
    orientation
}

/// Whether `p1` and `p2` lie strictly on opposite sides of the supporting line of `line`
pub fn on_opposite_sides(
    line: &Segment,
    p1: &Point,
    p2: &Point,
    config: &RelateConfig,
    rec: &mut impl Recorder,
) -> bool {
    let sine_1 = line.side_sine(p1);
    let sine_2 = line.side_sine(p2);
    let product = sine_1 * sine_2;
    let opposite = product < -config.side_tolerance;

    rec.record(|| TraceStep::SideTest {
        line: *line,
        sine_1,
        sine_2,
        product,
        opposite,
    });
    opposite
}

/// Proper crossing: the endpoints of each segment straddle the other one
pub fn segments_cross(
    a: &Segment,
    b: &Segment,
    config: &RelateConfig,
    rec: &mut impl Recorder,
) -> bool {
    on_opposite_sides(a, &b.start(), &b.end(), config, rec)
        && on_opposite_sides(b, &a.start(), &a.end(), config, rec)
}

/// Length two (near) collinear segments have in common, the same in either order
pub fn shared_length(a: &Segment, b: &Segment) -> f64 {
    f64::min(covered_length(a, b), covered_length(b, a))
}

/// Length along `a` covered by the projection of `b`
fn covered_length(a: &Segment, b: &Segment) -> f64 {
    let (t1, t2) = (a.projection(&b.start()), a.projection(&b.end()));
    let lo = f64::max(0.0, t1.min(t2));
    let hi = f64::min(a.length(), t1.max(t2));
    f64::max(0.0, hi - lo)
}

/// Cuts `seg` at the distances `cuts` (measured from its start) and returns the middle of every piece
/// longer than `eps`. The middle of the whole segment when no piece is that long.
pub(crate) fn piece_midpoints(seg: &Segment, cuts: impl IntoIterator<Item = f64>, eps: f64) -> Vec<Point> {
    let length = seg.length();
    let cuts = [0.0, length]
        .into_iter()
        .chain(cuts.into_iter().map(|t| t.clamp(0.0, length)))
        .sorted_by_key(|t| OrderedFloat(*t))
        .collect_vec();

    let midpoints = cuts
        .iter()
        .tuple_windows()
        .filter(|(t0, t1)| *t1 - *t0 > eps)
        .map(|(t0, t1)| seg.point_at((t0 + t1) / 2.0))
        .collect_vec();

    match midpoints.is_empty() {
        true => vec![seg.point_at(length / 2.0)],
        false => midpoints,
    }
}

/// Which endpoints of two segments lie on the other segment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EndpointContacts {
    pub b_start_on_a: bool,
    pub b_end_on_a: bool,
    pub a_start_on_b: bool,
    pub a_end_on_b: bool,
}

impl EndpointContacts {
    pub fn new(a: &Segment, b: &Segment, config: &RelateConfig, rec: &mut impl Recorder) -> Self {
        EndpointContacts {
            b_start_on_a: point_on_segment(&b.start(), a, config, rec),
            b_end_on_a: point_on_segment(&b.end(), a, config, rec),
            a_start_on_b: point_on_segment(&a.start(), b, config, rec),
            a_end_on_b: point_on_segment(&a.end(), b, config, rec),
        }
    }

    pub fn count(&self) -> usize {
        [
            self.b_start_on_a,
            self.b_end_on_a,
            self.a_start_on_b,
            self.a_end_on_b,
        ]
        .into_iter()
        .filter(|c| *c)
        .count()
    }

    pub fn any(&self) -> bool {
        self.count() > 0
    }

    /// Both endpoints of `b` lie on `a`
    pub fn b_on_a(&self) -> bool {
        self.b_start_on_a && self.b_end_on_a
    }

    /// Both endpoints of `a` lie on `b`
    pub fn a_on_b(&self) -> bool {
        self.a_start_on_b && self.a_end_on_b
    }
}

impl Relate<Segment> for Segment {
    fn relate(
        &self,
        other: &Segment,
        config: &RelateConfig,
        rec: &mut impl Recorder,
    ) -> SpatialRelation {
        let dec = config.coordinate_decimals;
        let eps = config.on_segment_tolerance;
        let (a, b) = (self, other);

        let equal = (a.start().coincides_with(&b.start(), dec) && a.end().coincides_with(&b.end(), dec))
            || (a.start().coincides_with(&b.end(), dec) && a.end().coincides_with(&b.start(), dec));
        rec.record(|| TraceStep::CompareEndpoints {
            a: a.endpoints(),
            b: b.endpoints(),
            equal,
        });
        if equal {
            return conclude(rec, SpatialRelation::Equals, "identical endpoints");
        }

        let reach = on_segment_reach(f64::max(a.length(), b.length()), eps);
        if !a.bbox().inflate(reach).collides_with(&b.bbox().inflate(reach)) {
            rec.record(|| TraceStep::BoundingBoxRejection);
            return conclude(rec, SpatialRelation::Disjoint, "segments are far apart");
        }

        let contacts = EndpointContacts::new(a, b, config, rec);
        if contacts.b_on_a() && contacts.a_on_b() {
            return conclude(rec, SpatialRelation::Equals, "each segment holds both endpoints of the other");
        }
        //the tolerance region around a segment is convex: both endpoints on it implies the whole segment is
        if contacts.b_on_a() {
            return conclude(rec, SpatialRelation::Contains, "both endpoints of the second segment lie on the first");
        }
        if contacts.a_on_b() {
            return conclude(rec, SpatialRelation::Within, "both endpoints of the first segment lie on the second");
        }

        let orientation = orientation(a, b, config, rec);
        if contacts.any() {
            return match orientation {
                Orientation::Collinear => {
                    let length = shared_length(a, b);
                    let overlaps = length > eps;
                    note_ambiguity(config, rec, "shared length", length, eps);
                    rec.record(|| TraceStep::SharedLength { length, overlaps });
                    match overlaps {
                        true => conclude(rec, SpatialRelation::Overlaps, "collinear segments share a stretch"),
                        false => conclude(rec, SpatialRelation::Touches, "collinear segments meet end to end"),
                    }
                }
                Orientation::NotCollinear => {
                    conclude(rec, SpatialRelation::Touches, "an endpoint rests on the other segment")
                }
            };
        }

        match segments_cross(a, b, config, rec) {
            true => conclude(rec, SpatialRelation::Crosses, "endpoints straddle each other's line"),
            false => conclude(rec, SpatialRelation::Disjoint, "no contact and no crossing"),
        }
    }
}
