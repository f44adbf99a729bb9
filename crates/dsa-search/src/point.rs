//! Immutable point in the plane.

use std::cmp::Ordering;

/// A point with real-valued coordinates.
///
/// Points are totally ordered by y-coordinate, then x-coordinate, using
/// [`f64::total_cmp`], so they can serve as keys in the ordered symbol
/// tables of this crate.
#[derive(Debug, Clone, Copy)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between this point and `other`.
    pub fn distance_to(&self, other: Point2D) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    /// Square of the Euclidean distance between this point and `other`.
    /// Cheaper than [`Point2D::distance_to`] and orders points the same
    /// way, so nearest-neighbor searches compare squared distances.
    pub fn distance_squared_to(&self, other: Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl PartialEq for Point2D {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point2D {}

impl PartialOrd for Point2D {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point2D {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y
            .total_cmp(&other.y)
            .then(self.x.total_cmp(&other.x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_two_points() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(3.0, 4.0);
        assert_eq!(p1.distance_to(p2), 5.0);
        assert_eq!(p2.distance_to(p1), 5.0);
    }

    #[test]
    fn squared_distance_between_two_points() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(3.0, 4.0);
        assert_eq!(p1.distance_squared_to(p2), 25.0);
    }

    #[test]
    fn distance_to_itself_is_zero() {
        let p = Point2D::new(2.2, 3.3);
        assert_eq!(p.distance_to(p), 0.0);
    }

    #[test]
    fn points_order_by_y_then_x() {
        assert!(Point2D::new(2.0, 1.0) < Point2D::new(1.0, 2.0));
        assert!(Point2D::new(1.0, 2.0) < Point2D::new(2.0, 2.0));
        assert_eq!(Point2D::new(1.0, 2.0), Point2D::new(1.0, 2.0));

        let mut points = vec![
            Point2D::new(0.5, 0.5),
            Point2D::new(0.0, 1.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.0, 0.5),
        ];
        points.sort();
        assert_eq!(
            points,
            vec![
                Point2D::new(1.0, 0.0),
                Point2D::new(0.0, 0.5),
                Point2D::new(0.5, 0.5),
                Point2D::new(0.0, 1.0),
            ]
        );
    }
}
