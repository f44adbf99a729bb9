//! Directed cycle detection.
//!
//! A depth-first search keeps the recursion stack explicit; an edge back
//! into the stack closes a directed cycle. The witness lists the cycle's
//! vertices with the first and last entries equal, every consecutive pair
//! a directed edge.

use crate::digraph::Digraph;

/// Finds one directed cycle of a digraph, if any exists.
#[derive(Debug, Clone)]
pub struct DirectedCycle {
    cycle: Option<Vec<usize>>,
}

impl DirectedCycle {
    /// Searches `digraph` for a directed cycle, stopping at the first one
    /// found.
    pub fn new(digraph: &Digraph) -> Self {
        let mut search = Self { cycle: None };
        let mut marked = vec![false; digraph.v()];
        let mut on_stack = vec![false; digraph.v()];
        let mut edge_to = vec![None; digraph.v()];
        for v in 0..digraph.v() {
            if search.cycle.is_none() && !marked[v] {
                search.dfs(digraph, v, &mut marked, &mut on_stack, &mut edge_to);
            }
        }
        search
    }

    fn dfs(
        &mut self,
        digraph: &Digraph,
        v: usize,
        marked: &mut [bool],
        on_stack: &mut [bool],
        edge_to: &mut [Option<usize>],
    ) {
        marked[v] = true;
        on_stack[v] = true;
        for &w in digraph.adj(v) {
            if self.cycle.is_some() {
                break;
            }
            if !marked[w] {
                edge_to[w] = Some(v);
                self.dfs(digraph, w, marked, on_stack, edge_to);
            } else if on_stack[w] {
                // Back edge v -> w: w is still on the recursion stack, so
                // the tree path from w to v plus this edge is a cycle.
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
        on_stack[v] = false;
    }

    /// Does the digraph contain a directed cycle?
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// A witness cycle, first and last vertices equal, or `None` for a DAG.
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}

// ---------------------------------------------------------------------------
