use float_cmp::approx_eq;
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::error::RelateError;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Point, Rect, Segment};

/// A simple polygon: a single closed ring of at least 3 vertices without holes.
///
/// The ring is stored open (no closing duplicate), edges wrap around from the last vertex to the first.
/// The orientation is kept as given, none of the predicates depend on it.
#[derive(Clone, Debug)]
pub struct Polygon {
    /// Vertices of the ring, without the closing point
    pub vertices: Vec<Point>,
    /// `edges[i]` runs from `vertices[i]` to `vertices[i + 1]` (wrapping)
    pub edges: Vec<Segment>,
    /// Bounding box
    pub bbox: Rect,
    /// Area of its interior (always positive)
    pub area: f64,
}

impl Polygon {
    /// Builds a polygon from its ring. A closing point equal to the first vertex is dropped.
    pub fn new(mut points: Vec<Point>) -> Result<Self, RelateError> {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < 3 {
            return Err(RelateError::degenerate(format!(
                "polygon must have at least 3 vertices: {points:?}"
            )));
        }
        if let Some(p) = points.iter().find(|p| !p.is_finite()) {
            return Err(RelateError::degenerate(format!(
                "polygon vertex with non-finite coordinates: {p:?}"
            )));
        }
        if let Some((p, _)) = points
            .iter()
            .circular_tuple_windows()
            .find(|(p1, p2)| p1 == p2)
        {
            return Err(RelateError::degenerate(format!(
                "polygon contains duplicate consecutive vertex {p:?}"
            )));
        }

        let signed_area = Polygon::calculate_area(&points);
        if approx_eq!(f64, signed_area, 0.0) {
            return Err(RelateError::degenerate(format!(
                "polygon has no area: {points:?}"
            )));
        }

        let edges = points
            .iter()
            .circular_tuple_windows()
            .map(|(p1, p2)| Segment::new(*p1, *p2))
            .collect::<Result<Vec<_>, _>>()?;

        let bbox = Rect::from_points(&points)
            .ok_or_else(|| RelateError::degenerate("polygon without vertices"))?;

        Ok(Polygon {
            vertices: points,
            edges,
            bbox,
            area: signed_area.abs(),
        })
    }

    pub fn edge(&self, i: usize) -> Segment {
        self.edges[i]
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.edges.iter()
    }

    pub fn longest_edge(&self) -> f64 {
        self.edge_iter().map(|e| e.length()).fold(0.0, f64::max)
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Vertices rounded to `decimals` places and sorted lexicographically,
    /// a representation independent of starting vertex and orientation
    pub fn sorted_vertices(&self, decimals: u32) -> Vec<Point> {
        self.vertices
            .iter()
            .map(|v| v.rounded(decimals))
            .sorted_by_key(|p| (OrderedFloat(p.0), OrderedFloat(p.1)))
            .collect()
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn calculate_area(points: &[Point]) -> f64 {
        let sigma: f64 = points
            .iter()
            .circular_tuple_windows()
            .map(|(p_i, p_j)| (p_i.0 * p_j.1) - (p_j.0 * p_i.1))
            .sum();

        0.5 * sigma
    }
}

impl Shape for Polygon {
    fn bbox(&self) -> Rect {
        self.bbox
    }
}
