use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::geometry::geo_enums::{GeoPosition, GeometryKind, Orientation, SpatialRelation};
use crate::geometry::primitives::{Point, Segment};
use crate::predicates::de9im::De9im;

/// Sink for the evidence produced while classifying a pair.
///
/// Steps are passed as closures, so a recorder that discards them ([`NoTrace`]) never pays for building them.
pub trait Recorder {
    fn is_recording(&self) -> bool;

    fn record(&mut self, step: impl FnOnce() -> TraceStep);
}

/// Recorder that discards everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl Recorder for NoTrace {
    #[inline(always)]
    fn is_recording(&self) -> bool {
        false
    }

    #[inline(always)]
    fn record(&mut self, _step: impl FnOnce() -> TraceStep) {}
}

/// Ordered evidence behind a classification
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trace {
    pub steps: Vec<TraceStep>,
}

impl Recorder for Trace {
    fn is_recording(&self) -> bool {
        true
    }

    fn record(&mut self, step: impl FnOnce() -> TraceStep) {
        self.steps.push(step());
    }
}

impl Trace {
    /// The relation of the last conclusion recorded, if any
    pub fn conclusion(&self) -> Option<SpatialRelation> {
        self.steps.iter().rev().find_map(|s| match s {
            TraceStep::Conclusion { relation, .. } => Some(*relation),
            _ => None,
        })
    }

    /// Measurements that landed close to a classification threshold
    pub fn ambiguities(&self) -> impl Iterator<Item = &TraceStep> {
        self.steps
            .iter()
            .filter(|s| matches!(s, TraceStep::Ambiguity { .. }))
    }

    /// One narrated line per step
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.to_string()).collect()
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, step)?;
        }
        Ok(())
    }
}

/// A single piece of evidence
#[derive(Clone, Debug, PartialEq)]
pub enum TraceStep {
    /// Two points compared on rounded coordinates
    CompareCoordinates { a: Point, b: Point, equal: bool },
    /// Two segments compared as unordered endpoint pairs
    CompareEndpoints {
        a: [Point; 2],
        b: [Point; 2],
        equal: bool,
    },
    /// Two polygons compared as sorted vertex sets
    CompareVertexSets { n_a: usize, n_b: usize, equal: bool },
    /// Distance-sum test of a point against a segment
    DistanceSum {
        point: Point,
        segment: Segment,
        d_start: f64,
        d_end: f64,
        length: f64,
        on: bool,
    },
    /// Winding (signed angle sum) of a polygon around a point, one turn per edge
    Winding {
        point: Point,
        turns: Vec<f64>,
        total: f64,
        interior: bool,
    },
    /// Position of a point relative to a polygon
    PointPosition { point: Point, position: GeoPosition },
    /// Bounding boxes (inflated by the tolerance) do not meet
    BoundingBoxRejection,
    /// Angular collinearity test between two segments
    Collinearity {
        angle_a: f64,
        angle_b: f64,
        slope_a: f64,
        slope_b: f64,
        delta: f64,
        orientation: Orientation,
    },
    /// Length shared by two collinear segments
    SharedLength { length: f64, overlaps: bool },
    /// Side test of two points against the supporting line of a segment
    SideTest {
        line: Segment,
        sine_1: f64,
        sine_2: f64,
        product: f64,
        opposite: bool,
    },
    /// Proper crossing test against the i-th polygon edge
    EdgeCrossing { edge: usize, crosses: bool },
    /// Positions of the vertices of one polygon relative to the other
    VertexCensus {
        label: &'static str,
        interior: usize,
        boundary: usize,
        exterior: usize,
    },
    /// The pair was evaluated in swapped order and the result converted
    Swapped {
        first: GeometryKind,
        second: GeometryKind,
    },
    /// Intersection matrix of the pair
    Matrix { matrix: De9im },
    /// A measurement close to its threshold, the classification is sensitive to the tolerance
    Ambiguity {
        measure: &'static str,
        value: f64,
        threshold: f64,
    },
    Conclusion {
        relation: SpatialRelation,
        reason: &'static str,
    },
}

impl Display for TraceStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceStep::CompareCoordinates { a, b, equal } => write!(
                f,
                "compare {} with {}: {}",
                fmt_point(a),
                fmt_point(b),
                if *equal { "equal" } else { "different" }
            ),
            TraceStep::CompareEndpoints { a, b, equal } => write!(
                f,
                "compare endpoints [{}] with [{}]: {}",
                a.iter().map(fmt_point).join(", "),
                b.iter().map(fmt_point).join(", "),
                if *equal { "identical" } else { "different" }
            ),
            TraceStep::CompareVertexSets { n_a, n_b, equal } => write!(
                f,
                "compare sorted vertex sets ({n_a} vs {n_b} vertices): {}",
                if *equal { "identical" } else { "different" }
            ),
            TraceStep::DistanceSum {
                point,
                segment,
                d_start,
                d_end,
                length,
                on,
            } => write!(
                f,
                "{} against {}-{}: {:.3} + {:.3} = {:.3} vs length {:.3} -> {}",
                fmt_point(point),
                fmt_point(&segment.start()),
                fmt_point(&segment.end()),
                d_start,
                d_end,
                d_start + d_end,
                length,
                if *on { "on segment" } else { "off segment" }
            ),
            TraceStep::Winding {
                point,
                turns,
                total,
                interior,
            } => write!(
                f,
                "winding around {}: turns [{}] sum to {:.1}° -> {}",
                fmt_point(point),
                turns.iter().map(|t| format!("{t:.1}")).join(", "),
                total,
                if *interior { "inside" } else { "outside" }
            ),
            TraceStep::PointPosition { point, position } => {
                write!(f, "{} lies in the polygon's {:?}", fmt_point(point), position)
            }
            TraceStep::BoundingBoxRejection => {
                write!(f, "bounding boxes are apart, no contact possible")
            }
            TraceStep::Collinearity {
                angle_a,
                angle_b,
                slope_a,
                slope_b,
                delta,
                orientation,
            } => write!(
                f,
                "directions {:.1}° and {:.1}° (slopes {:.2} and {:.2}) differ by {:.2}° modulo 180° -> {:?}",
                angle_a, angle_b, slope_a, slope_b, delta, orientation
            ),
            TraceStep::SharedLength { length, overlaps } => write!(
                f,
                "collinear segments share a length of {:.3} -> {}",
                length,
                if *overlaps { "overlap" } else { "end contact only" }
            ),
            TraceStep::SideTest {
                line,
                sine_1,
                sine_2,
                product,
                opposite,
            } => write!(
                f,
                "sides of line {}-{}: sin = {:.3}, {:.3}, product {:.3} -> {}",
                fmt_point(&line.start()),
                fmt_point(&line.end()),
                sine_1,
                sine_2,
                product,
                if *opposite { "opposite sides" } else { "same side" }
            ),
            TraceStep::EdgeCrossing { edge, crosses } => write!(
                f,
                "edge {}: {}",
                edge + 1,
                if *crosses { "crossed" } else { "not crossed" }
            ),
            TraceStep::VertexCensus {
                label,
                interior,
                boundary,
                exterior,
            } => write!(
                f,
                "vertices of {label}: {interior} inside, {boundary} on the boundary, {exterior} outside"
            ),
            TraceStep::Swapped { first, second } => write!(
                f,
                "({first}, {second}) evaluated as ({second}, {first}), result converted"
            ),
            TraceStep::Matrix { matrix } => write!(
                f,
                "intersection matrix {matrix} (dimensions {} and {})",
                matrix.dims[0], matrix.dims[1]
            ),
            TraceStep::Ambiguity {
                measure,
                value,
                threshold,
            } => write!(
                f,
                "ambiguous {measure}: {value:.4} is close to the threshold {threshold:.4}"
            ),
            TraceStep::Conclusion { relation, reason } => {
                write!(f, "{reason} -> relation = '{relation}'")
            }
        }
    }
}

fn fmt_point(p: &Point) -> String {
    format!("({}, {})", p.x(), p.y())
}
