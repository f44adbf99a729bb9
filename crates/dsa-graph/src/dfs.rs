//! Depth-first search on undirected graphs.
//!
//! [`DepthFirstSearch`] answers reachability from a source vertex;
//! [`DepthFirstPaths`] additionally remembers the tree edges so the
//! path taken to any reached vertex can be reconstructed.

use crate::graph::Graph;

/// Vertices reachable from a single source, found by recursive search.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    marked: Vec<bool>,
    count: usize,
}

impl DepthFirstSearch {
    /// Searches `graph` from `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not a vertex of `graph`.
    pub fn new(graph: &Graph, source: usize) -> Self {
        let mut search = Self {
            marked: vec![false; graph.v()],
            count: 0,
        };
        graph.adj(source);
        search.dfs(graph, source);
        search
    }

    fn dfs(&mut self, graph: &Graph, v: usize) {
        self.marked[v] = true;
        self.count += 1;
        for &w in graph.adj(v) {
            if !self.marked[w] {
                self.dfs(graph, w);
            }
        }
    }

    /// Is `v` reachable from the source?
    pub fn marked(&self, v: usize) -> bool {
        self.marked[v]
    }

    /// Number of vertices reachable from the source, the source included.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Paths from a single source, one per reachable vertex, following the
/// depth-first tree.
#[derive(Debug, Clone)]
pub struct DepthFirstPaths {
    source: usize,
    marked: Vec<bool>,
    edge_to: Vec<Option<usize>>,
}

impl DepthFirstPaths {
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
        };
        graph.adj(source);
        paths.dfs(graph, source);
        paths
    }

    fn dfs(&mut self, graph: &Graph, v: usize) {
        self.marked[v] = true;
        for &w in graph.adj(v) {
            if !self.marked[w] {
                self.edge_to[w] = Some(v);
                self.dfs(graph, w);
            }
        }
    }

    /// Is there a path from the source to `v`?
    pub fn has_path_to(&self, v: usize) -> bool {
        self.marked[v]
    }

    /// The path from the source to `v`, or `None` when `v` is unreachable.
    ///
    /// The path starts at the source and ends at `v`. It follows the
    /// depth-first tree, so it is a valid path but not necessarily a
    /// shortest one.
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
