//! 2d-tree over the unit square.
//!
//! A binary tree of points that alternates the splitting axis level by
//! level: the root divides the square with a vertical line through its
//! point, its children divide their cells with horizontal lines, and so
//! on. Every node remembers the axis-aligned cell it splits, which lets
//! range searches skip subtrees whose cell misses the query rectangle
//! and lets nearest-neighbor searches skip subtrees whose cell cannot
//! beat the best match found so far.

use crate::point::Point2D;
use crate::rect::RectHV;

type Link = Option<Box<Node>>;

struct Node {
    point: Point2D,
    /// The cell this node's splitting line divides.
    rect: RectHV,
    /// Points left of (or below) the splitting line.
    lb: Link,
    /// Points right of (or above) the splitting line, including ties.
    rt: Link,
    size: usize,
}

impl Node {
    fn new(point: Point2D, rect: RectHV) -> Self {
        Self {
            point,
            rect,
            lb: None,
            rt: None,
            size: 1,
        }
    }

    fn lb_cell(&self, vertical: bool) -> RectHV {
        if vertical {
            RectHV::new(
                self.rect.x_min(),
                self.rect.y_min(),
                self.point.x,
                self.rect.y_max(),
            )
        } else {
            RectHV::new(
                self.rect.x_min(),
                self.rect.y_min(),
                self.rect.x_max(),
                self.point.y,
            )
        }
    }

    fn rt_cell(&self, vertical: bool) -> RectHV {
        if vertical {
            RectHV::new(
                self.point.x,
                self.rect.y_min(),
                self.rect.x_max(),
                self.rect.y_max(),
            )
        } else {
            RectHV::new(
                self.rect.x_min(),
                self.point.y,
                self.rect.x_max(),
                self.rect.y_max(),
            )
        }
    }
}

fn size(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

fn goes_left_or_bottom(p: Point2D, at: Point2D, vertical: bool) -> bool {
    if vertical { p.x < at.x } else { p.y < at.y }
}

/// A set of points in the unit square, organized as a 2d-tree for
/// efficient range and nearest-neighbor search.
pub struct KdTree {
    root: Link,
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

impl KdTree {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn len(&self) -> usize {
        size(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Adds the point to the set; inserting a point that is already
    /// present leaves the set unchanged.
    ///
    /// # Panics
    ///
    /// When the point lies outside the unit square.
    pub fn insert(&mut self, p: Point2D) {
        assert!(
            (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y),
            "point ({}, {}) is outside the unit square",
            p.x,
            p.y
        );
        let unit_square = RectHV::new(0.0, 0.0, 1.0, 1.0);
        self.root = Some(insert_node(self.root.take(), p, unit_square, true));
    }

    pub fn contains(&self, p: Point2D) -> bool {
        let mut node = self.root.as_deref();
        let mut vertical = true;
        while let Some(n) = node {
            if p == n.point {
                return true;
            }
            node = if goes_left_or_bottom(p, n.point, vertical) {
                n.lb.as_deref()
            } else {
                n.rt.as_deref()
            };
            vertical = !vertical;
        }
        false
    }

    /// All points inside the rectangle or on its boundary, in no
    /// particular order.
    pub fn range(&self, rect: &RectHV) -> Vec<Point2D> {
        let mut found = Vec::new();
        collect_range(&self.root, rect, &mut found);
        found
    }

    /// A nearest neighbor to `p`; `None` when the set is empty. A point
    /// already in the set is its own nearest neighbor.
    pub fn nearest(&self, p: Point2D) -> Option<Point2D> {
        let root = self.root.as_deref()?;
        let mut best = root.point;
        let mut best_distance = p.distance_squared_to(best);
        nearest_node(&self.root, p, &mut best, &mut best_distance, true);
        Some(best)
    }
}

fn insert_node(link: Link, p: Point2D, cell: RectHV, vertical: bool) -> Box<Node> {
    let Some(mut node) = link else {
        return Box::new(Node::new(p, cell));
    };
    if p == node.point {
        return node;
    }
    if goes_left_or_bottom(p, node.point, vertical) {
        let cell = node.lb_cell(vertical);
        node.lb = Some(insert_node(node.lb.take(), p, cell, !vertical));
    } else {
        let cell = node.rt_cell(vertical);
        node.rt = Some(insert_node(node.rt.take(), p, cell, !vertical));
    }
    node.size = 1 + size(&node.lb) + size(&node.rt);
    node
}

fn collect_range(link: &Link, rect: &RectHV, found: &mut Vec<Point2D>) {
    let Some(node) = link else {
        return;
    };
    // the whole cell misses the query rectangle
    if !rect.intersects(&node.rect) {
        return;
    }
    if rect.contains(node.point) {
        found.push(node.point);
    }
    collect_range(&node.lb, rect, found);
    collect_range(&node.rt, rect, found);
}

fn nearest_node(
    link: &Link,
    p: Point2D,
    best: &mut Point2D,
    best_distance: &mut f64,
    vertical: bool,
) {
    let Some(node) = link else {
        return;
    };
    // nothing in this cell can beat the best match found so far
    if node.rect.distance_squared_to(p) >= *best_distance {
        return;
    }
    let distance = p.distance_squared_to(node.point);
    if distance < *best_distance {
        *best_distance = distance;
        *best = node.point;
    }
    // descend first into the half that holds the query point, so the
    // best match tightens early and prunes more of the other half
    let (near, far) = if goes_left_or_bottom(p, node.point, vertical) {
        (&node.lb, &node.rt)
    } else {
        (&node.rt, &node.lb)
    };
    nearest_node(near, p, best, best_distance, !vertical);
    nearest_node(far, p, best, best_distance, !vertical);
}
