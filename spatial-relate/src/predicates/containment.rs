use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::{Point, Polygon, Segment, cross, dot};
use crate::predicates::note_ambiguity;
use crate::trace::{Recorder, TraceStep};
use crate::util::RelateConfig;
use crate::util::angles;

/// `|AP| + |PB| - |AB|`: zero on the segment, growing with the distance from it
fn distance_excess(p: &Point, seg: &Segment) -> (f64, f64, f64) {
    let d_start = seg.start().distance_to(p);
    let d_end = p.distance_to(&seg.end());
    (d_start, d_end, d_start + d_end - seg.length())
}

/// Farthest a point can lie from a segment of length `length` and still pass [`point_on_segment`].
///
/// The accepted region `|AP| + |PB| <= |AB| + ε` is an ellipse with semi-minor axis `sqrt(ε·L/2 + ε²/4)`,
/// which also covers the `ε/2` it reaches past either end.
pub fn on_segment_reach(length: f64, eps: f64) -> f64 {
    (eps * length / 2.0 + eps * eps / 4.0).sqrt()
}

/// Distance-sum test: whether `p` lies on `seg`, within [`RelateConfig::on_segment_tolerance`].
///
/// Works for any orientation of the segment, there is no slope involved.
/// Points in the band between "on" and [`point_outside_segment`] count as on.
pub fn point_on_segment(
    p: &Point,
    seg: &Segment,
    config: &RelateConfig,
    rec: &mut impl Recorder,
) -> bool {
    let eps = config.on_segment_tolerance;
    let (d_start, d_end, excess) = distance_excess(p, seg);
    let on = excess.abs() <= eps;

    note_ambiguity(config, rec, "distance-sum excess", excess, eps);
    rec.record(|| TraceStep::DistanceSum {
        point: *p,
        segment: *seg,
        d_start,
        d_end,
        length: seg.length(),
        on,
    });
    on
}

/// Strict complement of [`point_on_segment`]: `|AP| + |PB| > |AB| + ε`
pub fn point_outside_segment(p: &Point, seg: &Segment, config: &RelateConfig) -> bool {
    let (_, _, excess) = distance_excess(p, seg);
    excess > config.on_segment_tolerance
}

/// Winding test: whether `p` lies in the interior of `poly`.
///
/// Sums the signed turn of the direction from `p` to each vertex, edge by edge (wrapping around).
/// Every turn is normalized into (-180°, 180°], the total is ±360° for interior points and about 0° for exterior ones.
/// The boundary is not handled specially, callers check [`point_on_boundary`] first.
pub fn point_in_polygon(
    p: &Point,
    poly: &Polygon,
    config: &RelateConfig,
    rec: &mut impl Recorder,
) -> bool {
    let tol = config.winding_tolerance_deg;
    if !poly.bbox.inflate(config.on_segment_tolerance).contains_point(p) {
        rec.record(|| TraceStep::BoundingBoxRejection);
        return false;
    }

    let recording = rec.is_recording();
    let mut turns = vec![];
    let mut total = 0.0;
    for edge in poly.edge_iter() {
        let turn = winding_turn(p, edge);
        if recording {
            turns.push(turn);
        }
        total += turn;
    }

    let deviation = (f64::abs(total) - 360.0).abs();
    let interior = deviation < tol;

    note_ambiguity(config, rec, "winding deviation from 360°", deviation, tol);
    rec.record(|| TraceStep::Winding {
        point: *p,
        turns,
        total,
        interior,
    });
    interior
}

/// Signed angle (degrees) swept by the direction from `p` while travelling along `edge`
fn winding_turn(p: &Point, edge: &Segment) -> f64 {
    let c = cross(*p, edge.start(), edge.end());
    let d = dot(*p, edge.start(), edge.end());
    angles::wrap_signed_deg(c.atan2(d).to_degrees())
}

/// Index of the first edge of `poly` that `p` lies on, if any
pub fn point_on_boundary(
    p: &Point,
    poly: &Polygon,
    config: &RelateConfig,
    rec: &mut impl Recorder,
) -> Option<usize> {
    let eps = config.on_segment_tolerance;
    for (i, edge) in poly.edge_iter().enumerate() {
        let (d_start, d_end, excess) = distance_excess(p, edge);
        note_ambiguity(config, rec, "distance-sum excess", excess, eps);
        if excess.abs() <= eps {
            rec.record(|| TraceStep::DistanceSum {
                point: *p,
                segment: *edge,
                d_start,
                d_end,
                length: edge.length(),
                on: true,
            });
            return Some(i);
        }
    }
    None
}

/// Position of `p` relative to `poly`, the boundary takes precedence over the interior
pub fn locate_point(
    p: &Point,
    poly: &Polygon,
    config: &RelateConfig,
    rec: &mut impl Recorder,
) -> GeoPosition {
    let position = if point_on_boundary(p, poly, config, rec).is_some() {
        GeoPosition::Boundary
    } else if point_in_polygon(p, poly, config, rec) {
        GeoPosition::Interior
    } else {
        GeoPosition::Exterior
    };
    rec.record(|| TraceStep::PointPosition {
        point: *p,
        position,
    });
    position
}
