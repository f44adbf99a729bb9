//! Two-colorability of undirected graphs.
//!
//! A graph is bipartite exactly when it has no odd-length cycle. The search
//! two-colors each component depth-first; the first edge joining two
//! same-colored vertices yields an odd cycle as a witness.

use crate::graph::Graph;

/// Splits a graph into two vertex sides, or exhibits an odd cycle.
#[derive(Debug, Clone)]
pub struct Bipartite {
    is_bipartite: bool,
    color: Vec<bool>,
    odd_cycle: Option<Vec<usize>>,
}

impl Bipartite {
    /// Two-colors `graph`, stopping at the first odd cycle found.
    pub fn new(graph: &Graph) -> Self {
        let mut search = Self {
            is_bipartite: true,
            color: vec![false; graph.v()],
            odd_cycle: None,
        };
        let mut marked = vec![false; graph.v()];
        let mut edge_to = vec![None; graph.v()];
        for v in 0..graph.v() {
            if !marked[v] {
                search.dfs(graph, v, &mut marked, &mut edge_to);
            }
        }
        search
    }

    fn dfs(
        &mut self,
        graph: &Graph,
        v: usize,
        marked: &mut [bool],
        edge_to: &mut [Option<usize>],
    ) {
        marked[v] = true;
        for &w in graph.adj(v) {
            if self.odd_cycle.is_some() {
                return;
            }
            if !marked[w] {
                edge_to[w] = Some(v);
                self.color[w] = !self.color[v];
                self.dfs(graph, w, marked, edge_to);
            } else if self.color[w] == self.color[v] {
                // Same color at both ends of v-w: the tree path from w to v
                // has even length, so closing it makes an odd cycle.
                self.is_bipartite = false;
                let mut cycle = vec![w];
                let mut x = v;
                while x != w {
                    cycle.push(x);
                    let Some(previous) = edge_to[x] else {
                        break;
                    };
                    x = previous;
                }
                cycle.push(w);
                self.odd_cycle = Some(cycle);
            }
        }
    }

    /// Can the vertices be split into two sides with every edge crossing?
    pub fn is_bipartite(&self) -> bool {
        self.is_bipartite
    }

    /// The side `v` was assigned to. Meaningful only when
    /// [`is_bipartite`](Self::is_bipartite) holds.
    pub fn color(&self, v: usize) -> bool {
        self.color[v]
    }

    /// An odd cycle, first and last vertices equal, or `None` when the
    /// graph is bipartite.
    pub fn odd_cycle(&self) -> Option<&[usize]> {
        self.odd_cycle.as_deref()
    }
}

// ---------------------------------------------------------------------------
