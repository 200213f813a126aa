use crate::error::RelateError;
use crate::geometry::geo_traits::{DistanceTo, Shape};
use crate::geometry::primitives::{Point, Rect, cross};
use crate::util::angles;

/// Finite line segment between two distinct [`Point`]s.
/// Only constructed through [`Segment::new`], which rejects zero-length segments.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Result<Self, RelateError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(RelateError::degenerate(format!(
                "segment with non-finite coordinates, {start:?} -> {end:?}"
            )));
        }
        if start == end {
            return Err(RelateError::degenerate(format!(
                "zero-length segment, {start:?} == {end:?}"
            )));
        }
        Ok(Segment { start, end })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn reverse(mut self) -> Self {
        std::mem::swap(&mut self.start, &mut self.end);
        self
    }

    pub fn endpoints(&self) -> [Point; 2] {
        [self.start, self.end]
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Point at distance `t` from `start`, towards `end`
    pub fn point_at(&self, t: f64) -> Point {
        let f = t / self.length();
        Point(
            self.start.0 + f * (self.end.0 - self.start.0),
            self.start.1 + f * (self.end.1 - self.start.1),
        )
    }

    /// Direction from start to end in degrees, [0, 360)
    pub fn direction_angle(&self) -> f64 {
        angles::direction_deg(self.end.0 - self.start.0, self.end.1 - self.start.1)
    }

    pub fn slope(&self) -> f64 {
        self.start.slope(&self.end)
    }

    /// sin(angle(start, p) - angle(start, end)).
    ///
    /// Positive left of the directed segment, negative right of it, zero on its supporting line
    /// (or when `p` coincides with `start`).
    pub fn side_sine(&self, p: &Point) -> f64 {
        let to_p = self.start.distance_to(p);
        if to_p == 0.0 {
            return 0.0;
        }
        cross(self.start, self.end, *p) / (self.length() * to_p)
    }

    /// Signed distance of `p` along the segment's direction, measured from `start`
    pub fn projection(&self, p: &Point) -> f64 {
        let (dx, dy) = (self.end.0 - self.start.0, self.end.1 - self.start.1);
        ((p.0 - self.start.0) * dx + (p.1 - self.start.1) * dy) / self.length()
    }

    /// Intersection of the supporting lines of `self` and `other`, `None` when they are parallel
    pub fn line_intersection(&self, other: &Segment) -> Option<Point> {
        //based on: https://en.wikipedia.org/wiki/Line%E2%80%93line_intersection#Given_two_points_on_each_line_segment
        let Point(x1, y1) = self.start;
        let Point(x2, y2) = self.end;
        let Point(x3, y3) = other.start;
        let Point(x4, y4) = other.end;

        let t_nom = (x2 - x4) * (y4 - y3) - (y2 - y4) * (x4 - x3);
        let t_denom = (x2 - x1) * (y4 - y3) - (y2 - y1) * (x4 - x3);

        if t_denom == 0.0 {
            //parallel
            None
        } else {
            let t = t_nom / t_denom;
            Some(Point(x2 + t * (x1 - x2), y2 + t * (y1 - y2)))
        }
    }
}

impl Shape for Segment {
    fn bbox(&self) -> Rect {
        Rect {
            x_min: f64::min(self.start.0, self.end.0),
            y_min: f64::min(self.start.1, self.end.1),
            x_max: f64::max(self.start.0, self.end.0),
            y_max: f64::max(self.start.1, self.end.1),
        }
    }
}
