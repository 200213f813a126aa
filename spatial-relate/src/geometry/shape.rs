use crate::geometry::geo_enums::GeometryKind;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Point, Polygon, Rect, Segment};

/// Closed union over the three supported primitives
#[derive(Clone, Debug)]
pub enum Geometry {
    Point(Point),
    Segment(Segment),
    Polygon(Polygon),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::Segment(_) => GeometryKind::Line,
            Geometry::Polygon(_) => GeometryKind::Polygon,
        }
    }
}

impl Shape for Geometry {
    fn bbox(&self) -> Rect {
        match self {
            Geometry::Point(p) => p.bbox(),
            Geometry::Segment(s) => s.bbox(),
            Geometry::Polygon(p) => p.bbox(),
        }
    }
}

impl From<Point> for Geometry {
    fn from(p: Point) -> Self {
        Geometry::Point(p)
    }
}

impl From<Segment> for Geometry {
    fn from(s: Segment) -> Self {
        Geometry::Segment(s)
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Geometry::Polygon(p)
    }
}
