//! Axis-aligned rectangle in the plane.

use crate::point::Point2D;

/// An immutable two-dimensional axis-aligned rectangle with real-valued
/// coordinates. The rectangle is closed: points on the boundary count as
/// inside, and rectangles that touch only along an edge or corner still
/// intersect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectHV {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl RectHV {
    /// # Panics
    ///
    /// When `x_min > x_max` or `y_min > y_max`.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        assert!(x_min <= x_max, "x_min > x_max");
        assert!(y_min <= y_max, "y_min > y_max");
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether this rectangle and `other` share at least one point.
    pub fn intersects(&self, other: &RectHV) -> bool {
        self.x_max >= other.x_min
            && self.y_max >= other.y_min
            && self.x_min <= other.x_max
            && self.y_min <= other.y_max
    }

    /// Whether the point lies inside the rectangle or on its boundary.
    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// Euclidean distance from `p` to the closest point of the rectangle;
    /// zero when the rectangle contains `p`.
    pub fn distance_to(&self, p: Point2D) -> f64 {
        self.distance_squared_to(p).sqrt()
    }

    /// Square of the distance from `p` to the closest point of the
    /// rectangle.
    pub fn distance_squared_to(&self, p: Point2D) -> f64 {
        let dx = if p.x < self.x_min {
            p.x - self.x_min
        } else if p.x > self.x_max {
            p.x - self.x_max
        } else {
            0.0
        };
        let dy = if p.y < self.y_min {
            p.y - self.y_min
        } else if p.y > self.y_max {
            p.y - self.y_max
        } else {
            0.0
        };
        dx * dx + dy * dy
    }
}
