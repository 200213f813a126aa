use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;
use crate::geometry::geo_enums::GeoPosition::{Boundary, Exterior, Interior};
use crate::geometry::geo_enums::{GeoPosition, SpatialRelation};
use crate::geometry::primitives::{Point, Segment};
use crate::predicates::containment::{locate_point, point_on_segment};
use crate::predicates::segment_segment::{piece_midpoints, segments_cross};
use crate::trace::NoTrace;
use crate::util::RelateConfig;

/// Dimension of an empty intersection
pub const EMPTY: i8 = -1;

/// Dimensionally extended nine-intersection matrix of a geometry A against a geometry B.
///
/// `matrix[i][j]` holds the dimension (0, 1 or 2) of the intersection between part `i` of A and part `j` of B,
/// or [`EMPTY`]. Parts are ordered interior, boundary, exterior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct De9im {
    pub matrix: [[i8; 3]; 3],
    /// Dimensions of A and B themselves
    pub dims: [i8; 2],
}

impl De9im {
    fn empty(dims: [i8; 2]) -> Self {
        De9im {
            matrix: [[EMPTY; 3]; 3],
            dims,
        }
    }

    pub fn get(&self, a: GeoPosition, b: GeoPosition) -> i8 {
        self.matrix[part_index(a)][part_index(b)]
    }

    fn raise(&mut self, a: GeoPosition, b: GeoPosition, dim: i8) {
        let cell = &mut self.matrix[part_index(a)][part_index(b)];
        *cell = i8::max(*cell, dim);
    }

    fn meets(&self, a: GeoPosition, b: GeoPosition) -> bool {
        self.get(a, b) != EMPTY
    }

    /// The matrix of B against A
    pub fn transpose(&self) -> Self {
        let mut matrix = [[EMPTY; 3]; 3];
        for (i, j) in (0..3).cartesian_product(0..3) {
            matrix[j][i] = self.matrix[i][j];
        }
        De9im {
            matrix,
            dims: [self.dims[1], self.dims[0]],
        }
    }

    /// Named relation of A to B implied by the matrix
    pub fn relation(&self) -> SpatialRelation {
        let [dim_a, dim_b] = self.dims;
        let ii = self.get(Interior, Interior);

        let a_escapes = self.meets(Interior, Exterior) || self.meets(Boundary, Exterior);
        let b_escapes = self.meets(Exterior, Interior) || self.meets(Exterior, Boundary);

        if ii != EMPTY && !a_escapes && !b_escapes {
            return SpatialRelation::Equals;
        }
        if ii == EMPTY {
            return match self.meets(Interior, Boundary)
                || self.meets(Boundary, Interior)
                || self.meets(Boundary, Boundary)
            {
                true => SpatialRelation::Touches,
                false => SpatialRelation::Disjoint,
            };
        }
        if !b_escapes {
            return SpatialRelation::Contains;
        }
        if !a_escapes {
            return SpatialRelation::Within;
        }

        let crosses = match dim_a.cmp(&dim_b) {
            std::cmp::Ordering::Less => self.meets(Interior, Exterior),
            std::cmp::Ordering::Greater => self.meets(Exterior, Interior),
            std::cmp::Ordering::Equal => dim_a == 1 && ii == 0,
        };
        match crosses {
            true => SpatialRelation::Crosses,
            false => SpatialRelation::Overlaps,
        }
    }
}

impl Display for De9im {
    /// The usual nine-character notation, row by row, `F` for an empty intersection
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for d in self.matrix.iter().flatten() {
            match *d {
                EMPTY => write!(f, "F")?,
                d => write!(f, "{d}")?,
            }
        }
        Ok(())
    }
}

fn part_index(pos: GeoPosition) -> usize {
    match pos {
        Interior => 0,
        Boundary => 1,
        Exterior => 2,
    }
}

fn dimension(g: &Geometry) -> i8 {
    match g {
        Geometry::Point(_) => 0,
        Geometry::Segment(_) => 1,
        Geometry::Polygon(_) => 2,
    }
}

/// Points of `g` together with the part of `g` they belong to
fn point_cells(g: &Geometry) -> Vec<(Point, GeoPosition)> {
    match g {
        Geometry::Point(p) => vec![(*p, Interior)],
        Geometry::Segment(s) => s.endpoints().map(|p| (p, Boundary)).to_vec(),
        Geometry::Polygon(poly) => poly.vertices.iter().map(|v| (*v, Boundary)).collect(),
    }
}

/// Segments of `g` together with the part of `g` their relative interiors belong to
fn line_cells(g: &Geometry) -> Vec<(Segment, GeoPosition)> {
    match g {
        Geometry::Point(_) => vec![],
        Geometry::Segment(s) => vec![(*s, Interior)],
        Geometry::Polygon(poly) => poly.edge_iter().map(|e| (*e, Boundary)).collect(),
    }
}

/// Position of `p` with respect to `g`, under the same tolerances the relation predicates use
pub fn locate_in(p: &Point, g: &Geometry, config: &RelateConfig) -> GeoPosition {
    let dec = config.coordinate_decimals;
    match g {
        Geometry::Point(q) => match p.coincides_with(q, dec) {
            true => Interior,
            false => Exterior,
        },
        Geometry::Segment(s) => {
            if s.endpoints().iter().any(|e| p.coincides_with(e, dec)) {
                Boundary
            } else if point_on_segment(p, s, config, &mut NoTrace) {
                Interior
            } else {
                Exterior
            }
        }
        Geometry::Polygon(poly) => locate_point(p, poly, config, &mut NoTrace),
    }
}

/// Cuts `seg` at every point and proper crossing of the other geometry lying on it
fn cut_midpoints(
    seg: &Segment,
    points: &[(Point, GeoPosition)],
    lines: &[(Segment, GeoPosition)],
    config: &RelateConfig,
) -> Vec<Point> {
    let contacts = points
        .iter()
        .filter(|(p, _)| point_on_segment(p, seg, config, &mut NoTrace))
        .map(|(p, _)| seg.projection(p));
    let crossings = lines
        .iter()
        .filter(|(other, _)| segments_cross(seg, other, config, &mut NoTrace))
        .filter_map(|(other, _)| seg.line_intersection(other))
        .map(|p| seg.projection(&p));

    piece_midpoints(seg, contacts.chain(crossings), config.on_segment_tolerance)
}

/// Computes the intersection matrix of `a` against `b`.
///
/// Both geometries are decomposed into points and segments, each lying in a single part of its geometry.
/// Points are located in the other geometry directly. Segments are cut at every contact with the other
/// geometry and the middle of each piece is located instead. Proper crossings between segments meet in a point.
/// Polygon interiors are derived from where their boundaries end up.
pub fn de9im(a: &Geometry, b: &Geometry, config: &RelateConfig) -> De9im {
    let mut m = De9im::empty([dimension(a), dimension(b)]);
    //both geometries are bounded
    m.raise(Exterior, Exterior, 2);

    let (points_a, lines_a) = (point_cells(a), line_cells(a));
    let (points_b, lines_b) = (point_cells(b), line_cells(b));

    for (p, part) in &points_a {
        m.raise(*part, locate_in(p, b, config), 0);
    }
    for (p, part) in &points_b {
        m.raise(locate_in(p, a, config), *part, 0);
    }

    for ((sa, part_a), (sb, part_b)) in lines_a.iter().cartesian_product(&lines_b) {
        if segments_cross(sa, sb, config, &mut NoTrace) {
            m.raise(*part_a, *part_b, 0);
        }
    }

    for (s, part) in &lines_a {
        for mid in cut_midpoints(s, &points_b, &lines_b, config) {
            m.raise(*part, locate_in(&mid, b, config), 1);
        }
    }
    for (s, part) in &lines_b {
        for mid in cut_midpoints(s, &points_a, &lines_a, config) {
            m.raise(locate_in(&mid, a, config), *part, 1);
        }
    }

    match (a, b) {
        (Geometry::Polygon(_), Geometry::Polygon(_)) => {
            //a boundary reaching into the other's exterior drags its interior along
            if m.meets(Boundary, Exterior) {
                m.raise(Interior, Exterior, 2);
            }
            if m.meets(Exterior, Boundary) {
                m.raise(Exterior, Interior, 2);
            }
            let same_boundaries = !m.meets(Boundary, Exterior) && !m.meets(Exterior, Boundary);
            if m.meets(Interior, Boundary) || m.meets(Boundary, Interior) || same_boundaries {
                m.raise(Interior, Interior, 2);
            }
        }
        (Geometry::Polygon(_), _) => m.raise(Interior, Exterior, 2),
        (_, Geometry::Polygon(_)) => m.raise(Exterior, Interior, 2),
        _ => {}
    }
    m
}
