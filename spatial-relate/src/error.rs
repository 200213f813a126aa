use thiserror::Error;

use crate::geometry::geo_enums::GeometryKind;

/// Preconditions violated by the caller. Well-formed input never produces an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RelateError {
    /// Zero-length segment, duplicate consecutive polygon vertices, fewer than 3 vertices,
    /// zero area or non-finite coordinates.
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: String },
    /// No predicate exists for this pair of geometry kinds, in either order.
    #[error("unsupported geometry pair: ({first}, {second})")]
    UnsupportedPair {
        first: GeometryKind,
        second: GeometryKind,
    },
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl RelateError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        RelateError::DegenerateInput {
            reason: reason.into(),
        }
    }
}
