//! Strong components of a digraph, by the Kosaraju-Sharir sweep.
//!
//! The first pass computes the reverse postorder of the reverse digraph;
//! the second runs depth-first search on the digraph itself in that
//! order. Each second-pass tree is one strong component.

use crate::dfs_order::DepthFirstOrder;
use crate::digraph::Digraph;

/// Partition of a digraph's vertices into strongly connected components.
///
/// Components are numbered `0` through `count() - 1` in the order the
/// second pass discovers them. Two vertices share an id exactly when each
/// is reachable from the other.
#[derive(Debug, Clone)]
pub struct KosarajuSharirScc {
    count: usize,
    id: Vec<usize>,
}

impl KosarajuSharirScc {
    /// Finds the strong components of `digraph`.
    pub fn new(digraph: &Digraph) -> Self {
        let mut components = Self {
            count: 0,
            id: vec![0; digraph.v()],
        };
        let order = DepthFirstOrder::new(&digraph.reverse()).reverse_post();
        let mut marked = vec![false; digraph.v()];
        for v in order {
            if !marked[v] {
                components.dfs(digraph, v, &mut marked);
                components.count += 1;
            }
        }
        components
    }

    fn dfs(&mut self, digraph: &Digraph, v: usize, marked: &mut [bool]) {
        marked[v] = true;
        self.id[v] = self.count;
        for &w in digraph.adj(v) {
            if !marked[w] {
                self.dfs(digraph, w, marked);
            }
        }
    }

    /// Number of strong components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The component id of `v`.
    pub fn id(&self, v: usize) -> usize {
        self.id[v]
    }

    /// Are `v` and `w` mutually reachable?
    pub fn strongly_connected(&self, v: usize, w: usize) -> bool {
        self.id[v] == self.id[w]
    }
}

// ---------------------------------------------------------------------------
