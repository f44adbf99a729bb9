//! Directed reachability from one or many source vertices.

use crate::digraph::Digraph;

/// Vertices reachable along directed edges from a set of sources.
#[derive(Debug, Clone)]
pub struct DirectedDfs {
    marked: Vec<bool>,
    count: usize,
}

impl DirectedDfs {
    /// Searches `digraph` from a single `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not a vertex of `digraph`.
    pub fn new(digraph: &Digraph, source: usize) -> Self {
        Self::from_sources(digraph, &[source])
    }

    /// Searches `digraph` from every vertex in `sources`. A vertex is
    /// marked when at least one source reaches it.
    ///
    /// # Panics
    ///
    /// Panics if any source is not a vertex of `digraph`.
    pub fn from_sources(digraph: &Digraph, sources: &[usize]) -> Self {
        let mut search = Self {
            marked: vec![false; digraph.v()],
            count: 0,
        };
        for &source in sources {
            digraph.adj(source);
            if !search.marked[source] {
                search.dfs(digraph, source);
            }
        }
        search
    }

    fn dfs(&mut self, digraph: &Digraph, v: usize) {
        self.marked[v] = true;
        self.count += 1;
        for &w in digraph.adj(v) {
            if !self.marked[w] {
                self.dfs(digraph, w);
            }
        }
    }

    /// Is `v` reachable from some source?
    pub fn marked(&self, v: usize) -> bool {
        self.marked[v]
    }

    /// Number of reachable vertices, sources included.
    pub fn count(&self) -> usize {
        self.count
    }
}

// ---------------------------------------------------------------------------
