use anyhow::{Context, Result, ensure};
use log::warn;

use crate::geometry::Geometry;
use crate::geometry::primitives::{Point, Polygon, Segment};
use crate::io::ext_repr::{ExtGeometry, ExtRelationRecord};

/// Converts an external geometry into a validated internal one
pub fn import_geometry(ext: &ExtGeometry) -> Result<Geometry> {
    let geometry = match ext {
        ExtGeometry::Point(p) => {
            let point = Point::from(*p);
            ensure!(point.is_finite(), "point with non-finite coordinates: {point:?}");
            Geometry::Point(point)
        }
        ExtGeometry::Line([start, end]) => Geometry::Segment(
            Segment::new(Point::from(*start), Point::from(*end)).context("invalid line")?,
        ),
        ExtGeometry::Polygon(ring) => {
            if ring.len() > 1 && ring.first() != ring.last() {
                warn!("polygon ring is not closed, closing it implicitly");
            }
            let points = ring.iter().map(|p| Point::from(*p)).collect();
            Geometry::Polygon(Polygon::new(points).context("invalid polygon")?)
        }
    };
    Ok(geometry)
}

/// Converts both entities of a record
pub fn import_record(record: &ExtRelationRecord) -> Result<(Geometry, Geometry)> {
    let a = import_geometry(&record.entity1).context("entity1")?;
    let b = import_geometry(&record.entity2).context("entity2")?;
    Ok((a, b))
}
