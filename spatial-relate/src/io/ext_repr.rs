use serde::{Deserialize, Serialize};

use crate::geometry::geo_enums::SpatialRelation;

/// External representation of a [`Geometry`](crate::geometry::Geometry).
///
/// `{"type": "point", "coordinates": [x, y]}`, `{"type": "line", "coordinates": [[x, y], [x, y]]}`
/// or `{"type": "polygon", "coordinates": [[x, y], ..., [x, y]]}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "coordinates")]
#[serde(rename_all = "snake_case")]
pub enum ExtGeometry {
    Point((f64, f64)),
    /// Line segment between two points
    Line([(f64, f64); 2]),
    /// Outer ring, closed (first point repeated at the end)
    Polygon(Vec<(f64, f64)>),
}

/// A pair of geometries, optionally labelled with their relation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRelationRecord {
    pub entity1: ExtGeometry,
    pub entity2: ExtGeometry,
    /// Relation of `entity1` to `entity2`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub spatial_relation: Option<SpatialRelation>,
    /// Narrated reasoning ending in a relation label
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub output: Option<String>,
}
