use serde::{Deserialize, Serialize};

use crate::error::RelateError;

/// Tolerances and modes used by the predicates.
/// One fixed value per predicate family, expressed in the units of the input coordinates or in degrees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct RelateConfig {
    ///Slack on the distance-sum test `|AP| + |PB| - |AB|` for a point to count as lying on segment AB
    pub on_segment_tolerance: f64,
    ///Maximum deviation (degrees) of the absolute winding sum from 360° for a point to count as interior
    pub winding_tolerance_deg: f64,
    ///Maximum difference (degrees, modulo 180°) between two direction angles for segments to count as collinear
    pub collinear_tolerance_deg: f64,
    ///A product of side sines must be below `-side_tolerance` for two points to lie on opposite sides of a line
    pub side_tolerance: f64,
    ///Number of decimals coordinates are rounded to before equality comparisons
    pub coordinate_decimals: u32,
    ///Fraction of a tolerance within which a measurement is reported as ambiguous
    pub ambiguity_band: f64,
    ///How polygon-polygon relations are determined
    pub polygon_mode: PolygonMode,
}

impl Default for RelateConfig {
    fn default() -> Self {
        Self {
            on_segment_tolerance: 0.1,
            winding_tolerance_deg: 5.0,
            collinear_tolerance_deg: 0.5,
            side_tolerance: 1e-9,
            coordinate_decimals: 6,
            ambiguity_band: 0.1,
            polygon_mode: PolygonMode::VertexSampling,
        }
    }
}

impl RelateConfig {
    pub fn validate(&self) -> Result<(), RelateError> {
        let tolerances = [
            ("on_segment_tolerance", self.on_segment_tolerance),
            ("winding_tolerance_deg", self.winding_tolerance_deg),
            ("collinear_tolerance_deg", self.collinear_tolerance_deg),
            ("side_tolerance", self.side_tolerance),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value <= 0.0 {
                return Err(RelateError::InvalidConfig {
                    reason: format!("{name} must be finite and positive, got {value}"),
                });
            }
        }
        if self.winding_tolerance_deg >= 180.0 {
            return Err(RelateError::InvalidConfig {
                reason: format!(
                    "winding_tolerance_deg must stay below 180°, got {}",
                    self.winding_tolerance_deg
                ),
            });
        }
        if !(0.0..1.0).contains(&self.ambiguity_band) {
            return Err(RelateError::InvalidConfig {
                reason: format!("ambiguity_band must lie in [0, 1), got {}", self.ambiguity_band),
            });
        }
        if self.coordinate_decimals > 15 {
            return Err(RelateError::InvalidConfig {
                reason: format!(
                    "coordinate_decimals beyond f64 precision: {}",
                    self.coordinate_decimals
                ),
            });
        }
        Ok(())
    }

    /// Whether `value` lies within the ambiguity band around `threshold`
    pub(crate) fn is_ambiguous(&self, value: f64, threshold: f64) -> bool {
        (value - threshold).abs() <= threshold.abs() * self.ambiguity_band
    }
}

/// Strategy for polygon-polygon relations
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PolygonMode {
    /// Only vertex positions are sampled: fast, but blind to edges crossing without any vertex
    /// lying inside the other polygon
    #[default]
    VertexSampling,
    /// Vertex positions plus a pairwise edge-crossing test, any crossing makes the polygons overlap.
    /// [`Relator::relate_matrix`](crate::Relator::relate_matrix) goes further and also resolves the other relations.
    EdgeIntersection,
}
