use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Topological relation of A to B ("A is `SpatialRelation` B").
/// Exactly one relation applies to any pair of well-formed geometries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpatialRelation {
    /// A and B occupy the same set of points
    Equals,
    /// B lies inside A
    Contains,
    /// A lies inside B
    Within,
    /// A and B share part of their interiors, neither contains the other
    Overlaps,
    /// A passes through B
    Crosses,
    /// A and B only meet at their boundaries
    Touches,
    /// A ∩ B = ∅
    Disjoint,
}

impl SpatialRelation {
    /// All relations, in order of evaluation priority.
    pub const ALL: [SpatialRelation; 7] = [
        SpatialRelation::Equals,
        SpatialRelation::Contains,
        SpatialRelation::Within,
        SpatialRelation::Overlaps,
        SpatialRelation::Crosses,
        SpatialRelation::Touches,
        SpatialRelation::Disjoint,
    ];

    /// The relation of B to A, given that A is `self` B.
    pub fn converse(self) -> Self {
        match self {
            SpatialRelation::Contains => SpatialRelation::Within,
            SpatialRelation::Within => SpatialRelation::Contains,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpatialRelation::Equals => "Equals",
            SpatialRelation::Contains => "Contains",
            SpatialRelation::Within => "Within",
            SpatialRelation::Overlaps => "Overlaps",
            SpatialRelation::Crosses => "Crosses",
            SpatialRelation::Touches => "Touches",
            SpatialRelation::Disjoint => "Disjoint",
        }
    }
}

impl Display for SpatialRelation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpatialRelation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpatialRelation::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown spatial relation: {s:?}"))
    }
}

/// Position of a point with respect to a polygon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoPosition {
    Interior,
    Boundary,
    Exterior,
}

/// Outcome of the angular collinearity test between two segments
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Direction angles agree modulo 180°
    Collinear,
    NotCollinear,
}

/// Type tag of a [`Geometry`](crate::geometry::Geometry)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryKind {
    Point,
    Line,
    Polygon,
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryKind::Point => f.write_str("point"),
            GeometryKind::Line => f.write_str("line"),
            GeometryKind::Polygon => f.write_str("polygon"),
        }
    }
}
