//! Shortest directed paths from one or many source vertices.
//!
//! The multi-source form seeds the queue with every source at distance
//! zero, so each reachable vertex records its distance from the nearest
//! source. Two such sweeps side by side find shortest common-ancestor
//! paths in a hypernym hierarchy.

use crate::digraph::Digraph;
use dsa_core::queue::Queue;

/// Shortest paths along directed edges from a set of sources.
#[derive(Debug, Clone)]
pub struct DirectedBreadthFirstPaths {
    marked: Vec<bool>,
    edge_to: Vec<Option<usize>>,
    dist_to: Vec<Option<usize>>,
}

impl DirectedBreadthFirstPaths {
    /// Searches `digraph` from a single `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not a vertex of `digraph`.
    pub fn new(digraph: &Digraph, source: usize) -> Self {
        Self::from_sources(digraph, &[source])
    }

    /// Searches `digraph` from every vertex in `sources` at once.
    ///
    /// # Panics
    ///
    /// Panics if any source is not a vertex of `digraph`.
    pub fn from_sources(digraph: &Digraph, sources: &[usize]) -> Self {
        let mut paths = Self {
            marked: vec![false; digraph.v()],
            edge_to: vec![None; digraph.v()],
            dist_to: vec![None; digraph.v()],
        };
        paths.bfs(digraph, sources);
        paths
    }

    fn bfs(&mut self, digraph: &Digraph, sources: &[usize]) {
        let mut queue = Queue::new();
        for &source in sources {
            digraph.adj(source);
            if !self.marked[source] {
                self.marked[source] = true;
                self.dist_to[source] = Some(0);
                queue.enqueue(source);
            }
        }

        while let Some(v) = queue.dequeue() {
            let Some(distance) = self.dist_to[v] else {
                continue;
            };
            for &w in digraph.adj(v) {
                if !self.marked[w] {
                    self.marked[w] = true;
                    self.edge_to[w] = Some(v);
                    self.dist_to[w] = Some(distance + 1);
                    queue.enqueue(w);
                }
            }
        }
    }

    /// Is `v` reachable from some source?
    pub fn has_path_to(&self, v: usize) -> bool {
        self.marked[v]
    }

    /// Number of edges on a shortest path from the nearest source to `v`.
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.dist_to[v]
    }

    /// A shortest path to `v`, starting at whichever source is nearest.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.marked[v] {
            return None;
        }
        let mut path = vec![v];
        let mut x = v;
        while let Some(previous) = self.edge_to[x] {
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

    fn fixture() -> Digraph {
        // 0 feeds 1, 3 and 4; 2 feeds 0; 3 feeds 0 back; 4 feeds 5;
        // 6 stands apart.
        Digraph::with_edges(7, &[(0, 1), (2, 0), (0, 3), (3, 0), (0, 4), (4, 5)])
    }

    #[test]
    fn distances_follow_the_edge_direction() {
        let paths = DirectedBreadthFirstPaths::new(&fixture(), 0);
        assert_eq!(paths.dist_to(0), Some(0));
        assert_eq!(paths.dist_to(1), Some(1));
        assert_eq!(paths.dist_to(2), None);
        assert_eq!(paths.dist_to(3), Some(1));
        assert_eq!(paths.dist_to(4), Some(1));
        assert_eq!(paths.dist_to(5), Some(2));
        assert_eq!(paths.dist_to(6), None);
    }

    #[test]
    fn paths_walk_forward_edges_only() {
        let paths = DirectedBreadthFirstPaths::new(&fixture(), 0);
        assert_eq!(paths.path_to(5), Some(vec![0, 4, 5]));
        assert_eq!(paths.path_to(0), Some(vec![0]));
        assert_eq!(paths.path_to(2), None);
    }

    #[test]
    fn a_cycle_does_not_trap_the_sweep() {
        let digraph = Digraph::with_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        let paths = DirectedBreadthFirstPaths::new(&digraph, 0);
        assert_eq!(paths.dist_to(1), Some(1));
        assert_eq!(paths.dist_to(2), Some(2));
        assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn multiple_sources_cover_the_union() {
        let paths = DirectedBreadthFirstPaths::from_sources(&fixture(), &[6, 2]);
        for v in 0..7 {
            assert!(paths.has_path_to(v), "vertex {v} should be reached");
        }
        assert_eq!(paths.dist_to(6), Some(0));
        assert_eq!(paths.dist_to(2), Some(0));
        assert_eq!(paths.dist_to(0), Some(1));
        assert_eq!(paths.dist_to(5), Some(3));
    }

    #[test]
    fn each_vertex_reports_its_nearest_source() {
        // 0 -> 1 -> 2 <- 3: sourcing from both ends, 2 is one step
        // from 3, not two steps from 0.
        let digraph = Digraph::with_edges(4, &[(0, 1), (1, 2), (3, 2)]);
        let paths = DirectedBreadthFirstPaths::from_sources(&digraph, &[0, 3]);
        assert_eq!(paths.dist_to(2), Some(1));
        assert_eq!(paths.path_to(2), Some(vec![3, 2]));
    }

    #[test]
    fn repeated_sources_are_seeded_once() {
        let paths = DirectedBreadthFirstPaths::from_sources(&fixture(), &[0, 0]);
        assert_eq!(paths.dist_to(5), Some(2));
    }

    #[test]
    #[should_panic(expected = "is not in a graph")]
    fn search_from_an_unknown_source_panics() {
        let digraph = Digraph::new(2);
        let _ = DirectedBreadthFirstPaths::from_sources(&digraph, &[0, 2]);
    }
}
