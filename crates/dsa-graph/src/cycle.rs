//! Cycle detection in undirected graphs.
//!
//! Self-loops and parallel edges count as cycles. For cyclic graphs a
//! witness cycle is kept as a vertex sequence whose first and last entries
//! coincide, so consecutive entries always name an edge of the graph.

use crate::graph::Graph;

/// Finds one cycle of an undirected graph, if any exists.
#[derive(Debug, Clone)]
pub struct Cycle {
    cycle: Option<Vec<usize>>,
}

impl Cycle {
    /// Searches `graph` for a cycle, stopping at the first one found.
    pub fn new(graph: &Graph) -> Self {
        let mut search = Self { cycle: None };
        if search.find_self_loop(graph) || search.find_parallel_edges(graph) {
            return search;
        }

        let mut marked = vec![false; graph.v()];
        let mut edge_to = vec![None; graph.v()];
        for v in 0..graph.v() {
            if !marked[v] {
                search.dfs(graph, v, v, &mut marked, &mut edge_to);
            }
        }
        search
    }

    fn find_self_loop(&mut self, graph: &Graph) -> bool {
        for v in 0..graph.v() {
            if graph.adj(v).contains(&v) {
                self.cycle = Some(vec![v, v]);
                return true;
            }
        }
        false
    }

    fn find_parallel_edges(&mut self, graph: &Graph) -> bool {
        let mut seen = vec![false; graph.v()];
        for v in 0..graph.v() {
            for &w in graph.adj(v) {
                if seen[w] {
                    self.cycle = Some(vec![v, w, v]);
                    return true;
                }
                seen[w] = true;
            }
            for &w in graph.adj(v) {
                seen[w] = false;
            }
        }
        false
    }

    fn dfs(
        &mut self,
        graph: &Graph,
        v: usize,
        parent: usize,
        marked: &mut [bool],
        edge_to: &mut [Option<usize>],
    ) {
        marked[v] = true;
        for &w in graph.adj(v) {
            if self.cycle.is_some() {
                return;
            }
            if !marked[w] {
                edge_to[w] = Some(v);
                self.dfs(graph, w, v, marked, edge_to);
            } else if w != parent {
                // Back edge v-w: w is an ancestor of v in the search tree.
                let mut climb = Vec::new();
                let mut x = v;
                while x != w {
                    climb.push(x);
                    let Some(previous) = edge_to[x] else {
                        break;
                    };
                    x = previous;
                }
                climb.reverse();
                let mut cycle = vec![v, w];
                cycle.extend(climb);
                self.cycle = Some(cycle);
            }
        }
    }

    /// Does the graph contain a cycle?
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// A witness cycle, first and last vertices equal, or `None` for an
    /// acyclic graph.
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}

// ---------------------------------------------------------------------------
