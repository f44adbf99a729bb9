//! Depth-first vertex orderings of a digraph.
//!
//! Preorder is the order vertices are first reached; postorder is the
//! order their searches finish. Reverse postorder of a DAG is a
//! topological order, which is what [`Topological`](crate::topological)
//! and the strong-component search build on.

use crate::digraph::Digraph;

/// Preorder and postorder of a depth-first sweep over every vertex.
///
/// The sweep starts sources from vertex `0` upward, so the orderings are
/// deterministic for a given digraph.
#[derive(Debug, Clone)]
pub struct DepthFirstOrder {
    pre: Vec<usize>,
    post: Vec<usize>,
    pre_of: Vec<usize>,
    post_of: Vec<usize>,
}

impl DepthFirstOrder {
    /// Computes both orderings of `digraph`.
    pub fn new(digraph: &Digraph) -> Self {
        let mut order = Self {
            pre: Vec::with_capacity(digraph.v()),
            post: Vec::with_capacity(digraph.v()),
            pre_of: vec![0; digraph.v()],
            post_of: vec![0; digraph.v()],
        };
        let mut marked = vec![false; digraph.v()];
        for v in 0..digraph.v() {
            if !marked[v] {
                order.dfs(digraph, v, &mut marked);
            }
        }
        order
    }

    fn dfs(&mut self, digraph: &Digraph, v: usize, marked: &mut [bool]) {
        marked[v] = true;
        self.pre_of[v] = self.pre.len();
        self.pre.push(v);
        for &w in digraph.adj(v) {
            if !marked[w] {
                self.dfs(digraph, w, marked);
            }
        }
        self.post_of[v] = self.post.len();
        self.post.push(v);
    }

    /// Vertices in the order they were first reached.
    pub fn pre(&self) -> &[usize] {
        &self.pre
    }

    /// Vertices in the order their searches finished.
    pub fn post(&self) -> &[usize] {
        &self.post
    }

    /// Postorder, reversed.
    pub fn reverse_post(&self) -> Vec<usize> {
        self.post.iter().rev().copied().collect()
    }

    /// Position of `v` in preorder.
    pub fn pre_of(&self, v: usize) -> usize {
        self.pre_of[v]
    }

    /// Position of `v` in postorder.
    pub fn post_of(&self, v: usize) -> usize {
        self.post_of[v]
    }
}

// ---------------------------------------------------------------------------
