use std::collections::BTreeMap;

use itertools::Itertools;
use rayon::prelude::*;

use crate::error::RelateError;
use crate::geometry::Geometry;
use crate::geometry::geo_enums::{GeometryKind, SpatialRelation};
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Rect;
use crate::relate::Relator;

/// Relation between the geometries at index `i` and `j` (`i < j`) of a collection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairRelation {
    pub i: usize,
    pub j: usize,
    pub relation: SpatialRelation,
}

/// All-pairs relations of a collection of geometries
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PairwiseReport {
    /// In lexicographic order of `(i, j)`
    pub relations: Vec<PairRelation>,
    /// Number of pairs per relation, relations that never occur are absent
    pub distribution: BTreeMap<SpatialRelation, usize>,
}

/// Summary of a collection of geometries
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SpatialStatistics {
    pub total: usize,
    pub kinds: BTreeMap<GeometryKind, usize>,
    /// Bounding box of the whole collection, `None` when it is empty
    pub bbox: Option<Rect>,
}

impl Relator {
    /// Classifies every pair in parallel. The i-th result belongs to the i-th pair.
    pub fn classify_batch(
        &self,
        pairs: &[(Geometry, Geometry)],
    ) -> Vec<Result<SpatialRelation, RelateError>> {
        pairs
            .par_iter()
            .map(|(a, b)| self.classify(a, b))
            .collect()
    }

    /// Classifies every unordered pair `i < j` of `geoms`
    pub fn pairwise(&self, geoms: &[Geometry]) -> Result<PairwiseReport, RelateError> {
        let indices = (0..geoms.len()).tuple_combinations::<(_, _)>().collect_vec();

        let relations = indices
            .par_iter()
            .map(|&(i, j)| {
                self.classify(&geoms[i], &geoms[j])
                    .map(|relation| PairRelation { i, j, relation })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let distribution = relations
            .iter()
            .map(|r| r.relation)
            .counts()
            .into_iter()
            .collect();

        Ok(PairwiseReport {
            relations,
            distribution,
        })
    }
}

pub fn statistics(geoms: &[Geometry]) -> SpatialStatistics {
    SpatialStatistics {
        total: geoms.len(),
        kinds: geoms.iter().map(|g| g.kind()).counts().into_iter().collect(),
        bbox: geoms.iter().map(|g| g.bbox()).reduce(|acc, r| acc.union(&r)),
    }
}
