//! Connected components of an undirected graph.

use crate::graph::Graph;

/// Partition of a graph's vertices into connected components.
///
/// Components are numbered `0` through `count() - 1` in the order depth-first
/// search discovers them, sweeping sources from vertex `0` upward. Two
/// vertices get the same id exactly when some path joins them.
#[derive(Debug, Clone)]
pub struct ConnectedComponents {
    count: usize,
    id: Vec<usize>,
    size: Vec<usize>,
}

impl ConnectedComponents {
    /// Finds the components of `graph`.
    pub fn new(graph: &Graph) -> Self {
        let mut components = Self {
            count: 0,
            id: vec![0; graph.v()],
            size: Vec::new(),
        };
        let mut marked = vec![false; graph.v()];
        for v in 0..graph.v() {
            if !marked[v] {
                components.size.push(0);
                components.dfs(graph, v, &mut marked);
                components.count += 1;
            }
        }
        components
    }

    fn dfs(&mut self, graph: &Graph, v: usize, marked: &mut [bool]) {
        marked[v] = true;
        self.id[v] = self.count;
        self.size[self.count] += 1;
        for &w in graph.adj(v) {
            if !marked[w] {
                self.dfs(graph, w, marked);
            }
        }
    }

    /// Number of connected components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The component id of `v`.
    pub fn id(&self, v: usize) -> usize {
        self.id[v]
    }

    /// Number of vertices in component `component`.
    pub fn size(&self, component: usize) -> usize {
        self.size[component]
    }

    /// Are `v` and `w` joined by a path?
    pub fn connected(&self, v: usize, w: usize) -> bool {
        self.id[v] == self.id[w]
    }
}

// ---------------------------------------------------------------------------
