//! Directed graphs with vertices named `0` through `V - 1`.
//!
//! Both outgoing and incoming adjacency bags are maintained, so indegrees
//! and the reverse digraph come cheap. Parallel edges accumulate, matching
//! the undirected [`Graph`](crate::graph::Graph).

use crate::graph::{ParseGraphError, data_lines, parse_edge_line, parse_number};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// A directed multigraph backed by vertex-indexed adjacency bags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Digraph {
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
    edges: usize,
}

impl Digraph {
    /// A digraph of `vertices` isolated vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        Self {
            outgoing: vec![Vec::new(); vertices],
            incoming: vec![Vec::new(); vertices],
            edges: 0,
        }
    }

    /// Builds a digraph from a `v -> w` edge list.
    pub fn with_edges(vertices: usize, edges: &[(usize, usize)]) -> Self {
        let mut digraph = Self::new(vertices);
        for &(v, w) in edges {
            digraph.add_edge(v, w);
        }
        digraph
    }

    /// Parses the textbook format: `V`, `E`, then `E` lines `"v w"`, each
    /// read as the directed edge `v -> w`.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ParseGraphError> {
        let mut lines = data_lines(reader)?.into_iter();

        let (line, token) = lines
            .next()
            .ok_or(ParseGraphError::MissingLine("vertex count"))?;
        let vertices = parse_number(line, &token)?;
        let (line, token) = lines
            .next()
            .ok_or(ParseGraphError::MissingLine("edge count"))?;
        let expected = parse_number(line, &token)?;

        let mut digraph = Self::new(vertices);
        for (line, text) in lines {
            let (v, w) = parse_edge_line(line, &text, vertices)?;
            digraph.add_edge(v, w);
        }

        if digraph.e() != expected {
            return Err(ParseGraphError::EdgeCountMismatch {
                expected,
                found: digraph.e(),
            });
        }
        Ok(digraph)
    }

    /// Appends an isolated vertex and returns its name.
    pub fn add_vertex(&mut self) -> usize {
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.outgoing.len() - 1
    }

    /// Adds the directed edge `v -> w`. Parallel edges accumulate.
    pub fn add_edge(&mut self, v: usize, w: usize) {
        self.validate(v);
        self.validate(w);
        self.outgoing[v].push(w);
        self.incoming[w].push(v);
        self.edges += 1;
    }

    /// Vertices `v` points at, in insertion order.
    pub fn adj(&self, v: usize) -> &[usize] {
        self.validate(v);
        &self.outgoing[v]
    }

    /// Vertices pointing at `v`.
    pub fn incoming(&self, v: usize) -> &[usize] {
        self.validate(v);
        &self.incoming[v]
    }

    /// Number of edges out of `v`.
    pub fn outdegree(&self, v: usize) -> usize {
        self.adj(v).len()
    }

    /// Number of edges into `v`.
    pub fn indegree(&self, v: usize) -> usize {
        self.incoming(v).len()
    }

    /// Number of vertices.
    pub fn v(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of edges.
    pub fn e(&self) -> usize {
        self.edges
    }

    /// The digraph with every edge reversed.
    pub fn reverse(&self) -> Self {
        Self {
            outgoing: self.incoming.clone(),
            incoming: self.outgoing.clone(),
            edges: self.edges,
        }
    }

    fn validate(&self, v: usize) {
        assert!(
            v < self.outgoing.len(),
            "vertex {v} is not in a graph of {} vertices",
            self.outgoing.len()
        );
    }
}

// ---------------------------------------------------------------------------
