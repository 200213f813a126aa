use std::hash::{Hash, Hasher};

use crate::error::RelateError;
use crate::geometry::geo_traits::{DistanceTo, Shape};
use crate::geometry::primitives::Rect;
use crate::util::angles;

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }

    /// Direction from `self` towards `other` in degrees, normalized to [0, 360).
    /// Undefined for coinciding points.
    pub fn direction_angle(&self, other: &Point) -> Result<f64, RelateError> {
        if self == other {
            return Err(RelateError::degenerate(format!(
                "direction angle between coinciding points {self:?}"
            )));
        }
        Ok(angles::direction_deg(other.0 - self.0, other.1 - self.1))
    }

    /// (y2 - y1) / (x2 - x1), [`f64::INFINITY`] for a vertical pair.
    ///
    /// Only used to narrate traces. Collinearity is decided on direction angles,
    /// which do not blow up near the vertical.
    pub fn slope(&self, other: &Point) -> f64 {
        let dx = other.0 - self.0;
        if dx == 0.0 {
            f64::INFINITY
        } else {
            (other.1 - self.1) / dx
        }
    }

    /// Coordinates rounded to `decimals` places
    pub fn rounded(&self, decimals: u32) -> Point {
        Point(
            angles::round_to(self.0, decimals),
            angles::round_to(self.1, decimals),
        )
    }

    /// Whether both points are equal after rounding to `decimals` places
    pub fn coincides_with(&self, other: &Point, decimals: u32) -> bool {
        self.rounded(decimals) == other.rounded(decimals)
    }
}

impl DistanceTo<Point> for Point {
    fn distance_to(&self, other: &Point) -> f64 {
        self.sq_distance_to(other).sqrt()
    }

    fn sq_distance_to(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }
}

impl Shape for Point {
    fn bbox(&self) -> Rect {
        Rect {
            x_min: self.0,
            y_min: self.1,
            x_max: self.0,
            y_max: self.1,
        }
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
        self.1.to_bits().hash(state);
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

/// z-component of (a - o) × (b - o)
pub(crate) fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

/// (a - o) · (b - o)
pub(crate) fn dot(o: Point, a: Point, b: Point) -> f64 {
    (a.0 - o.0) * (b.0 - o.0) + (a.1 - o.1) * (b.1 - o.1)
}
