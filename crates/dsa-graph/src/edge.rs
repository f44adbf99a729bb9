//! Weighted undirected edges.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An undirected edge `v-w` carrying a `f64` weight.
///
/// Edges order by weight alone, using the IEEE total order, so they can
/// live in sorted lists and heaps without a wrapper. Equality follows the
/// same rule: two edges with equal weights compare equal regardless of
/// their endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    v: usize,
    w: usize,
    weight: f64,
}

impl Edge {
    /// The edge `v-w` with the given weight.
    pub fn new(v: usize, w: usize, weight: f64) -> Self {
        Self { v, w, weight }
    }

    /// One endpoint.
    pub fn either(&self) -> usize {
        self.v
    }

    /// The endpoint that is not `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is neither endpoint.
    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.v {
            self.w
        } else if vertex == self.w {
            self.v
        } else {
            panic!("vertex {vertex} is not an endpoint of {}-{}", self.v, self.w);
        }
    }

    /// The weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.weight.total_cmp(&other.weight) == Ordering::Equal
    }
}

impl Eq for Edge {}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.5}", self.v, self.w, self.weight)
    }
}

// ---------------------------------------------------------------------------
