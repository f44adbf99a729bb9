//! Ordered symbol tables and geometric search.
//!
//! Provides the plain binary search tree ([`bst::Bst`]), the left-leaning
//! red-black tree ([`red_black::RedBlackBst`]), and 2d range/nearest search
//! over points ([`point_set::PointSet`], [`kd_tree::KdTree`]).

pub mod bst;
pub mod kd_tree;
pub mod point;
pub mod point_set;
pub mod rect;
pub mod red_black;
