use crate::geometry::Geometry;
use crate::geometry::geo_enums::SpatialRelation;
use crate::io::ext_repr::{ExtGeometry, ExtRelationRecord};

/// Converts a geometry into its external representation, polygon rings are closed again
pub fn export_geometry(geometry: &Geometry) -> ExtGeometry {
    match geometry {
        Geometry::Point(p) => ExtGeometry::Point((*p).into()),
        Geometry::Segment(s) => ExtGeometry::Line([s.start().into(), s.end().into()]),
        Geometry::Polygon(poly) => {
            let ring = poly
                .vertices
                .iter()
                .chain(poly.vertices.first())
                .map(|p| (*p).into())
                .collect();
            ExtGeometry::Polygon(ring)
        }
    }
}

pub fn export_record(
    a: &Geometry,
    b: &Geometry,
    relation: Option<SpatialRelation>,
) -> ExtRelationRecord {
    ExtRelationRecord {
        entity1: export_geometry(a),
        entity2: export_geometry(b),
        spatial_relation: relation,
        output: None,
    }
}
