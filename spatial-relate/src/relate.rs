use log::{debug, trace};

use crate::error::RelateError;
use crate::geometry::Geometry;
use crate::geometry::geo_enums::SpatialRelation;
use crate::geometry::geo_traits::Relate;
use crate::predicates::conclude;
use crate::predicates::de9im::{De9im, de9im};
use crate::trace::{NoTrace, Recorder, Trace, TraceStep};
use crate::util::RelateConfig;

/// Classifies pairs of geometries under a fixed, validated [`RelateConfig`]
#[derive(Clone, Copy, Debug, Default)]
pub struct Relator {
    config: RelateConfig,
}

impl Relator {
    pub fn new(config: RelateConfig) -> Result<Self, RelateError> {
        config.validate()?;
        Ok(Relator { config })
    }

    pub fn config(&self) -> &RelateConfig {
        &self.config
    }

    /// Relation of `a` to `b` ("`a` is *relation* `b`")
    pub fn classify(&self, a: &Geometry, b: &Geometry) -> Result<SpatialRelation, RelateError> {
        self.classify_with(a, b, &mut NoTrace)
    }

    /// Same as [`Relator::classify`], together with the evidence the relation was derived from
    pub fn classify_traced(
        &self,
        a: &Geometry,
        b: &Geometry,
    ) -> Result<(SpatialRelation, Trace), RelateError> {
        let mut trace = Trace::default();
        let relation = self.classify_with(a, b, &mut trace)?;
        Ok((relation, trace))
    }

    pub fn classify_with(
        &self,
        a: &Geometry,
        b: &Geometry,
        rec: &mut impl Recorder,
    ) -> Result<SpatialRelation, RelateError> {
        if let Some(relation) = relate_ordered(a, b, &self.config, rec) {
            trace!("[RELATE] ({}, {}) -> {relation}", a.kind(), b.kind());
            return Ok(relation);
        }

        let (first, second) = (a.kind(), b.kind());
        rec.record(|| TraceStep::Swapped { first, second });
        match relate_ordered(b, a, &self.config, rec) {
            Some(relation) => {
                let converse = relation.converse();
                debug!("[RELATE] ({first}, {second}) evaluated swapped: {relation} -> {converse}");
                Ok(conclude(rec, converse, "converse of the swapped pair"))
            }
            None => Err(RelateError::UnsupportedPair { first, second }),
        }
    }

    /// Intersection matrix of `a` against `b`.
    ///
    /// Slower than [`Relator::classify`], but edges crossing without any vertex inside the other geometry
    /// are accounted for. [`De9im::relation`] names the relation it implies.
    pub fn relate_matrix(&self, a: &Geometry, b: &Geometry) -> De9im {
        self.relate_matrix_with(a, b, &mut NoTrace)
    }

    pub fn relate_matrix_traced(&self, a: &Geometry, b: &Geometry) -> (De9im, Trace) {
        let mut trace = Trace::default();
        let matrix = self.relate_matrix_with(a, b, &mut trace);
        (matrix, trace)
    }

    pub fn relate_matrix_with(&self, a: &Geometry, b: &Geometry, rec: &mut impl Recorder) -> De9im {
        let matrix = de9im(a, b, &self.config);
        trace!("[RELATE] ({}, {}) matrix {matrix}", a.kind(), b.kind());
        rec.record(|| TraceStep::Matrix { matrix });
        conclude(rec, matrix.relation(), "implied by the intersection matrix");
        matrix
    }
}

/// Relation of `a` to `b` under the default configuration
pub fn classify(a: &Geometry, b: &Geometry) -> Result<SpatialRelation, RelateError> {
    Relator::default().classify(a, b)
}

/// Evaluates the canonical pairs, `None` for an order without a dedicated predicate
fn relate_ordered(
    a: &Geometry,
    b: &Geometry,
    config: &RelateConfig,
    rec: &mut impl Recorder,
) -> Option<SpatialRelation> {
    match (a, b) {
        (Geometry::Point(a), Geometry::Point(b)) => Some(a.relate(b, config, rec)),
        (Geometry::Point(a), Geometry::Segment(b)) => Some(a.relate(b, config, rec)),
        (Geometry::Point(a), Geometry::Polygon(b)) => Some(a.relate(b, config, rec)),
        (Geometry::Segment(a), Geometry::Segment(b)) => Some(a.relate(b, config, rec)),
        (Geometry::Segment(a), Geometry::Polygon(b)) => Some(a.relate(b, config, rec)),
        (Geometry::Polygon(a), Geometry::Polygon(b)) => Some(a.relate(b, config, rec)),
        (Geometry::Segment(_), Geometry::Point(_))
        | (Geometry::Polygon(_), Geometry::Point(_))
        | (Geometry::Polygon(_), Geometry::Segment(_)) => None,
    }
}
