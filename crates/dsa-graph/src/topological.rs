//! Topological ordering of a DAG.
//!
//! The order exists exactly when the digraph has no directed cycle, and
//! is the reverse postorder of a depth-first sweep. Every edge `v -> w`
//! then has `v` ranked before `w`.

use crate::dfs_order::DepthFirstOrder;
use crate::digraph::Digraph;
use crate::directed_cycle::DirectedCycle;

/// A linear order of a digraph's vertices respecting every edge, when one
/// exists.
#[derive(Debug, Clone)]
pub struct Topological {
    order: Option<Vec<usize>>,
    rank: Vec<Option<usize>>,
}

impl Topological {
    /// Orders `digraph` topologically, or records that no order exists.
    pub fn new(digraph: &Digraph) -> Self {
        let mut rank = vec![None; digraph.v()];
        let order = if DirectedCycle::new(digraph).has_cycle() {
            None
        } else {
            let order = DepthFirstOrder::new(digraph).reverse_post();
            for (position, &v) in order.iter().enumerate() {
                rank[v] = Some(position);
            }
            Some(order)
        };
        Self { order, rank }
    }

    /// Does the digraph admit a topological order?
    pub fn has_order(&self) -> bool {
        self.order.is_some()
    }

    /// The vertices in topological order, or `None` for a cyclic digraph.
    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    /// Position of `v` in the order, or `None` for a cyclic digraph.
    pub fn rank(&self, v: usize) -> Option<usize> {
        self.rank[v]
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_single_vertex_orders_itself() {
        let topological = Topological::new(&Digraph::new(1));
        assert!(topological.has_order());
        assert_eq!(topological.order(), Some(&[0][..]));
        assert_eq!(topological.rank(0), Some(0));
    }

    #[test]
    fn an_edge_against_vertex_order_is_respected() {
        let digraph = Digraph::with_edges(2, &[(1, 0)]);
        let topological = Topological::new(&digraph);
        assert_eq!(topological.order(), Some(&[1, 0][..]));
        assert_eq!(topological.rank(1), Some(0));
        assert_eq!(topological.rank(0), Some(1));
    }

    #[test]
    fn a_three_vertex_dag_has_the_expected_order() {
        let digraph = Digraph::with_edges(3, &[(0, 1), (0, 2), (1, 2)]);
        let topological = Topological::new(&digraph);
        assert_eq!(topological.order(), Some(&[0, 1, 2][..]));
    }

    #[test]
    fn a_cyclic_digraph_has_no_order() {
        let digraph = Digraph::with_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        let topological = Topological::new(&digraph);
        assert!(!topological.has_order());
        assert_eq!(topological.order(), None);
        for v in 0..3 {
            assert_eq!(topological.rank(v), None);
        }
    }

    #[test]
    fn a_self_loop_has_no_order() {
        let digraph = Digraph::with_edges(1, &[(0, 0)]);
        assert!(!Topological::new(&digraph).has_order());
    }

    #[test]
    fn every_edge_points_down_the_order() {
        let digraph = Digraph::with_edges(
            7,
            &[(0, 5), (0, 1), (3, 5), (5, 2), (6, 0), (1, 4), (0, 2), (3, 6), (5, 4), (6, 4)],
        );
        let topological = Topological::new(&digraph);
        assert!(topological.has_order());
        for v in 0..digraph.v() {
            for &w in digraph.adj(v) {
                assert!(
                    topological.rank(v) < topological.rank(w),
                    "edge {v} -> {w} is out of order"
                );
            }
        }
    }
}
