use crate::geometry::primitives::Point;

///Axis-aligned rectangle, may be flat (zero width or height) when it bounds a point or an axis-parallel segment
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Smallest rectangle containing all `points`, `None` if there are none
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Rect {
                    x_min: p.0,
                    y_min: p.1,
                    x_max: p.0,
                    y_max: p.1,
                },
                Some(r) => Rect {
                    x_min: r.x_min.min(p.0),
                    y_min: r.y_min.min(p.1),
                    x_max: r.x_max.max(p.0),
                    y_max: r.y_max.max(p.1),
                },
            })
        })
    }

    /// Returns a new rectangle expanded by `d` in every direction
    pub fn inflate(&self, d: f64) -> Rect {
        Rect {
            x_min: self.x_min - d,
            y_min: self.y_min - d,
            x_max: self.x_max + d,
            y_max: self.y_max + d,
        }
    }

    /// Smallest rectangle containing both `self` and `other`
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Closed-interval overlap test, touching rectangles collide
    pub fn collides_with(&self, other: &Rect) -> bool {
        f64::max(self.x_min, other.x_min) <= f64::min(self.x_max, other.x_max)
            && f64::max(self.y_min, other.y_min) <= f64::min(self.y_max, other.y_max)
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        (self.x_min..=self.x_max).contains(&p.0) && (self.y_min..=self.y_max).contains(&p.1)
    }
}
