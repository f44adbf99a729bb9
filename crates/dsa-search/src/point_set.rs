//! Brute-force collection of points supporting range and nearest queries.

use crate::point::Point2D;
use crate::rect::RectHV;
use crate::red_black::RedBlackBst;

/// A set of points in the plane, kept in an ordered symbol table and
/// searched by scanning every point. The baseline that [`crate::kd_tree`]
/// improves on.
pub struct PointSet {
    points: RedBlackBst<Point2D, ()>,
}

impl Default for PointSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PointSet {
    pub fn new() -> Self {
        Self {
            points: RedBlackBst::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adds the point to the set; inserting a point that is already
    /// present leaves the set unchanged.
    pub fn insert(&mut self, p: Point2D) {
        self.points.put(p, ());
    }

    pub fn contains(&self, p: Point2D) -> bool {
        self.points.contains(&p)
    }

    /// All points inside the rectangle or on its boundary, in ascending
    /// point order.
    pub fn range(&self, rect: &RectHV) -> Vec<Point2D> {
        self.points
            .keys()
            .into_iter()
            .copied()
            .filter(|&p| rect.contains(p))
            .collect()
    }

    /// A nearest neighbor to `p`; `None` when the set is empty. Among
    /// equally close points the one with the smallest coordinates wins,
    /// and a point already in the set is its own nearest neighbor.
    pub fn nearest(&self, p: Point2D) -> Option<Point2D> {
        self.points
            .keys()
            .into_iter()
            .copied()
            .min_by(|a, b| p.distance_squared_to(*a).total_cmp(&p.distance_squared_to(*b)))
    }
}
