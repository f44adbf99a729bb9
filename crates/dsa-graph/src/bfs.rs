//! Breadth-first search on undirected graphs.
//!
//! The queue-driven sweep visits vertices in order of distance from the
//! source, so the recorded tree holds a shortest path (fewest edges) to
//! every reachable vertex.

use crate::graph::Graph;
use dsa_core::queue::Queue;

/// Shortest paths from a single source, measured in edges.
#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    source: usize,
    marked: Vec<bool>,
    edge_to: Vec<Option<usize>>,
    dist_to: Vec<Option<usize>>,
}

impl BreadthFirstPaths {
    /// Searches `graph` from `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not a vertex of `graph`.
    pub fn new(graph: &Graph, source: usize) -> Self {
        let mut paths = Self {
            source,
            marked: vec![false; graph.v()],
            edge_to: vec![None; graph.v()],
            dist_to: vec![None; graph.v()],
        };
        graph.adj(source);
        paths.bfs(graph, source);
        paths
    }

    fn bfs(&mut self, graph: &Graph, source: usize) {
        let mut queue = Queue::new();
        self.marked[source] = true;
        self.dist_to[source] = Some(0);
        queue.enqueue(source);

        while let Some(v) = queue.dequeue() {
            let Some(distance) = self.dist_to[v] else {
                continue;
            };
            for &w in graph.adj(v) {
                if !self.marked[w] {
                    self.marked[w] = true;
                    self.edge_to[w] = Some(v);
                    self.dist_to[w] = Some(distance + 1);
                    queue.enqueue(w);
                }
            }
        }
    }

    /// Is there a path from the source to `v`?
    pub fn has_path_to(&self, v: usize) -> bool {
        self.marked[v]
    }

    /// Number of edges on a shortest path from the source to `v`, or
    /// `None` when `v` is unreachable.
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.dist_to[v]
    }

    /// A shortest path from the source to `v`, or `None` when `v` is
    /// unreachable. The path starts at the source and ends at `v`.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.marked[v] {
            return None;
        }
        let mut path = vec![v];
        let mut x = v;
        while x != self.source {
            let Some(previous) = self.edge_to[x] else {
                break;
            };
            path.push(previous);
            x = previous;
        }
        path.reverse();
        Some(path)
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_without_edges_reaches_only_the_source() {
        let graph = Graph::new(2);
        let paths = BreadthFirstPaths::new(&graph, 0);
        assert_eq!(paths.dist_to(0), Some(0));
        assert_eq!(paths.dist_to(1), None);
        assert!(!paths.has_path_to(1));
    }

    #[test]
    fn one_edge_is_one_step() {
        let graph = Graph::with_edges(3, &[(0, 1)]);
        let paths = BreadthFirstPaths::new(&graph, 0);
        assert_eq!(paths.dist_to(0), Some(0));
        assert_eq!(paths.dist_to(1), Some(1));
        assert_eq!(paths.dist_to(2), None);
    }

    #[test]
    fn a_triangle_puts_both_neighbors_one_step_away() {
        let graph = Graph::with_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        let paths = BreadthFirstPaths::new(&graph, 0);
        assert_eq!(paths.dist_to(1), Some(1));
        assert_eq!(paths.dist_to(2), Some(1));
        assert_eq!(paths.path_to(1), Some(vec![0, 1]));
        assert_eq!(paths.path_to(2), Some(vec![0, 2]));
    }

    #[test]
    fn a_chain_counts_its_edges() {
        let graph = Graph::with_edges(3, &[(0, 1), (1, 2)]);
        let paths = BreadthFirstPaths::new(&graph, 0);
        assert_eq!(paths.dist_to(2), Some(2));
        assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn paths_exist_from_every_vertex_of_a_chain() {
        let graph = Graph::with_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        for source in 0..4 {
            let paths = BreadthFirstPaths::new(&graph, source);
            for v in 0..4 {
                let path = paths.path_to(v).unwrap();
                assert_eq!(path[0], source);
                assert_eq!(*path.last().unwrap(), v);
            }
        }
    }

    #[test]
    fn the_shorter_of_two_routes_wins() {
        // Two routes from 0 to 4: through 1 then 3 (three edges) and
        // through 2 (two edges). The sweep must pick the short one.
        let graph = Graph::with_edges(6, &[(0, 1), (1, 3), (3, 4), (0, 2), (2, 4), (4, 5)]);
        let paths = BreadthFirstPaths::new(&graph, 0);

        assert_eq!(paths.path_to(3), Some(vec![0, 1, 3]));
        assert_eq!(paths.path_to(4), Some(vec![0, 2, 4]));
        assert_eq!(paths.path_to(5), Some(vec![0, 2, 4, 5]));
        assert_eq!(paths.dist_to(4), Some(2));
    }

    #[test]
    fn distances_on_a_branching_graph() {
        let graph = Graph::with_edges(
            9,
            &[
                (0, 1),
                (0, 2),
                (1, 3),
                (2, 4),
                (3, 5),
                (4, 6),
                (5, 7),
                (6, 7),
                (7, 8),
            ],
        );
        let paths = BreadthFirstPaths::new(&graph, 0);
        assert_eq!(paths.dist_to(3), Some(2));
        assert_eq!(paths.dist_to(4), Some(2));
        assert_eq!(paths.dist_to(5), Some(3));
        assert_eq!(paths.dist_to(6), Some(3));
        assert_eq!(paths.dist_to(7), Some(4));
        assert_eq!(paths.dist_to(8), Some(5));
    }

    #[test]
    fn unreachable_vertices_have_no_path_and_no_distance() {
        let graph = Graph::with_edges(4, &[(0, 1), (2, 3)]);
        let paths = BreadthFirstPaths::new(&graph, 0);
        assert_eq!(paths.path_to(2), None);
        assert_eq!(paths.dist_to(3), None);
    }

    #[test]
    #[should_panic(expected = "is not in a graph")]
    fn search_from_an_unknown_source_panics() {
        let graph = Graph::new(1);
        let _ = BreadthFirstPaths::new(&graph, 1);
    }
}
