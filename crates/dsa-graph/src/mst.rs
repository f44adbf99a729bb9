//! Minimum spanning trees of edge-weighted graphs.
//!
//! [`KruskalMst`] sorts the edges and grows a forest, testing each edge
//! against a union-find structure. [`LazyPrimMst`] grows one tree at a
//! time from a priority queue of crossing edges, discarding edges lazily
//! once both endpoints are claimed. On a connected graph both produce a
//! spanning tree of minimum total weight; on a disconnected graph both
//! produce a minimum spanning forest.

use crate::edge::Edge;
use crate::ewgraph::EdgeWeightedGraph;
use dsa_core::union_find::{UnionFind, WeightedQuickUnion};
use dsa_sort::heap::MaxHeap;
use dsa_sort::merge::merge_sort;
use std::cmp::Reverse;

/// Kruskal's algorithm: cheapest edges first, cycles skipped.
#[derive(Debug, Clone)]
pub struct KruskalMst {
    edges: Vec<Edge>,
    weight: f64,
}

impl KruskalMst {
    /// Computes a minimum spanning forest of `graph`.
    pub fn new(graph: &EdgeWeightedGraph) -> Self {
        let mut mst = Self {
            edges: Vec::new(),
            weight: 0.0,
        };
        let mut candidates = graph.edges();
        merge_sort(&mut candidates);

        let mut forest = WeightedQuickUnion::new(graph.v());
        for edge in candidates {
            if mst.edges.len() + 1 >= graph.v() {
                break;
            }
            let v = edge.either();
            let w = edge.other(v);
            if !forest.connected(v, w) {
                forest.union(v, w);
                mst.edges.push(edge);
                mst.weight += edge.weight();
            }
        }
        mst
    }

    /// The edges of the spanning forest, cheapest first.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Total weight of the spanning forest.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Prim's algorithm in its lazy form: stale crossing edges stay on the
/// queue until they surface.
#[derive(Debug, Clone)]
pub struct LazyPrimMst {
    edges: Vec<Edge>,
    weight: f64,
}

impl LazyPrimMst {
    /// Computes a minimum spanning forest of `graph`.
    pub fn new(graph: &EdgeWeightedGraph) -> Self {
        let mut mst = Self {
            edges: Vec::new(),
            weight: 0.0,
        };
        let mut marked = vec![false; graph.v()];
        let mut crossing = MaxHeap::new();
        for s in 0..graph.v() {
            if !marked[s] {
                mst.prim(graph, s, &mut marked, &mut crossing);
            }
        }
        mst
    }

    fn prim(
        &mut self,
        graph: &EdgeWeightedGraph,
        s: usize,
        marked: &mut [bool],
        crossing: &mut MaxHeap<Reverse<Edge>>,
    ) {
        scan(graph, s, marked, crossing);
        while let Some(Reverse(edge)) = crossing.del_max() {
            let v = edge.either();
            let w = edge.other(v);
            if marked[v] && marked[w] {
                continue;
            }
            self.edges.push(edge);
            self.weight += edge.weight();
            if !marked[v] {
                scan(graph, v, marked, crossing);
            }
            if !marked[w] {
                scan(graph, w, marked, crossing);
            }
        }
    }

    /// The edges of the spanning forest, in the order they were claimed.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Total weight of the spanning forest.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Marks `v` and queues its edges that still cross out of the tree.
fn scan(
    graph: &EdgeWeightedGraph,
    v: usize,
    marked: &mut [bool],
    crossing: &mut MaxHeap<Reverse<Edge>>,
) {
    marked[v] = true;
    for &edge in graph.adj(v) {
        if !marked[edge.other(v)] {
            crossing.insert(Reverse(edge));
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cc::ConnectedComponents;
    use crate::cycle::Cycle;
    use crate::graph::Graph;

    fn tiny_ewg() -> EdgeWeightedGraph {
        EdgeWeightedGraph::with_edges(
            8,
            &[
                (4, 5, 0.35),
                (4, 7, 0.37),
                (5, 7, 0.28),
                (0, 7, 0.16),
                (1, 5, 0.32),
                (0, 4, 0.38),
                (2, 3, 0.17),
                (1, 7, 0.19),
                (0, 2, 0.26),
                (1, 2, 0.36),
                (1, 3, 0.29),
                (2, 7, 0.34),
                (6, 2, 0.40),
                (3, 6, 0.52),
                (6, 0, 0.58),
                (6, 4, 0.93),
            ],
        )
    }

    fn canonical(edges: &[Edge]) -> Vec<(usize, usize)> {
        let mut pairs: Vec<(usize, usize)> = edges
            .iter()
            .map(|edge| {
                let v = edge.either();
                let w = edge.other(v);
                (v.min(w), v.max(w))
            })
            .collect();
        pairs.sort_unstable();
        pairs
    }

    #[test]
    fn kruskal_finds_the_textbook_tree() {
        let mst = KruskalMst::new(&tiny_ewg());
        assert_eq!(mst.edges().len(), 7);
        assert!((mst.weight() - 1.81).abs() < 1e-10);
        assert_eq!(
            canonical(mst.edges()),
            vec![(0, 2), (0, 7), (1, 7), (2, 3), (2, 6), (4, 5), (5, 7)]
        );
    }

    #[test]
    fn lazy_prim_finds_the_textbook_tree() {
        let mst = LazyPrimMst::new(&tiny_ewg());
        assert_eq!(mst.edges().len(), 7);
        assert!((mst.weight() - 1.81).abs() < 1e-10);
        assert_eq!(
            canonical(mst.edges()),
            vec![(0, 2), (0, 7), (1, 7), (2, 3), (2, 6), (4, 5), (5, 7)]
        );
    }

    #[test]
    fn both_algorithms_agree_on_the_weight() {
        let graph = EdgeWeightedGraph::with_edges(
            6,
            &[
                (0, 1, 2.0),
                (1, 2, 3.0),
                (2, 3, 1.0),
                (3, 4, 4.0),
                (4, 5, 5.0),
                (5, 0, 6.0),
                (1, 4, 1.5),
                (2, 5, 2.5),
            ],
        );
        let kruskal = KruskalMst::new(&graph);
        let prim = LazyPrimMst::new(&graph);
        assert!((kruskal.weight() - prim.weight()).abs() < 1e-10);
        assert_eq!(canonical(kruskal.edges()), canonical(prim.edges()));
    }

    #[test]
    fn kruskal_edges_come_out_cheapest_first() {
        let mst = KruskalMst::new(&tiny_ewg());
        for pair in mst.edges().windows(2) {
            assert!(pair[0].weight() <= pair[1].weight());
        }
    }

    #[test]
    fn the_tree_spans_without_a_cycle() {
        let mst = KruskalMst::new(&tiny_ewg());
        let mut skeleton = Graph::new(8);
        for edge in mst.edges() {
            let v = edge.either();
            skeleton.add_edge(v, edge.other(v));
        }
        assert_eq!(ConnectedComponents::new(&skeleton).count(), 1);
        assert!(!Cycle::new(&skeleton).has_cycle());
    }

    #[test]
    fn a_disconnected_graph_yields_a_forest() {
        let graph = EdgeWeightedGraph::with_edges(
            6,
            &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0), (3, 4, 1.0), (4, 5, 2.0)],
        );
        let kruskal = KruskalMst::new(&graph);
        let prim = LazyPrimMst::new(&graph);
        for (edges, weight) in [
            (kruskal.edges(), kruskal.weight()),
            (prim.edges(), prim.weight()),
        ] {
            assert_eq!(edges.len(), 4);
            assert!((weight - 6.0).abs() < 1e-10);
        }
    }

    #[test]
    fn trivial_graphs_have_empty_trees() {
        for graph in [EdgeWeightedGraph::new(0), EdgeWeightedGraph::new(1)] {
            assert!(KruskalMst::new(&graph).edges().is_empty());
            assert!(LazyPrimMst::new(&graph).edges().is_empty());
            assert!((LazyPrimMst::new(&graph).weight()).abs() < 1e-10);
        }
    }

    #[test]
    fn parallel_edges_pick_the_cheaper_copy() {
        let graph = EdgeWeightedGraph::with_edges(2, &[(0, 1, 5.0), (0, 1, 1.0)]);
        let mst = KruskalMst::new(&graph);
        assert_eq!(mst.edges().len(), 1);
        assert!((mst.weight() - 1.0).abs() < 1e-10);
    }
}
