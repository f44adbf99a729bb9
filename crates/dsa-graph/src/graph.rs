//! Undirected graphs with vertices named `0` through `V - 1`.
//!
//! Adjacency is bag-backed: every `add_edge` call is kept, so parallel edges
//! and self-loops stay visible in the structure and the edge count always
//! agrees with it. A self-loop appears twice in its vertex's adjacency list
//! and contributes two to the degree.

use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// Errors from parsing the textbook graph format: a vertex-count line, an
/// edge-count line, then one edge per line.
#[derive(Debug, thiserror::Error)]
pub enum ParseGraphError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing {0} line")]
    MissingLine(&'static str),
    #[error("line {line}: {token:?} is not a number")]
    BadNumber { line: usize, token: String },
    #[error("line {line}: expected {expected:?}, found {found:?}")]
    Malformed {
        line: usize,
        expected: &'static str,
        found: String,
    },
    #[error("line {line}: vertex {vertex} is out of range for {vertices} vertices")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        vertices: usize,
    },
    #[error("header names {expected} edges, input holds {found}")]
    EdgeCountMismatch { expected: usize, found: usize },
}

/// Reads the input into numbered, trimmed, non-blank lines.
pub(crate) fn data_lines<R: BufRead>(reader: R) -> Result<Vec<(usize, String)>, ParseGraphError> {
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push((index + 1, trimmed.to_string()));
        }
    }
    Ok(lines)
}

pub(crate) fn parse_number(line: usize, token: &str) -> Result<usize, ParseGraphError> {
    token.parse().map_err(|_| ParseGraphError::BadNumber {
        line,
        token: token.to_string(),
    })
}

pub(crate) fn check_vertex(
    line: usize,
    vertex: usize,
    vertices: usize,
) -> Result<usize, ParseGraphError> {
    if vertex < vertices {
        Ok(vertex)
    } else {
        Err(ParseGraphError::VertexOutOfRange {
            line,
            vertex,
            vertices,
        })
    }
}

/// Parses a `"v w"` edge line against a known vertex count.
pub(crate) fn parse_edge_line(
    line: usize,
    text: &str,
    vertices: usize,
) -> Result<(usize, usize), ParseGraphError> {
    let mut tokens = text.split_whitespace();
    let (Some(v), Some(w), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(ParseGraphError::Malformed {
            line,
            expected: "v w",
            found: text.to_string(),
        });
    };
    let v = check_vertex(line, parse_number(line, v)?, vertices)?;
    let w = check_vertex(line, parse_number(line, w)?, vertices)?;
    Ok((v, w))
}

/// An undirected multigraph backed by vertex-indexed adjacency bags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    edges: usize,
}

impl Graph {
    /// A graph of `vertices` isolated vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertices],
            edges: 0,
        }
    }

    /// Builds a graph from an edge list.
    pub fn with_edges(vertices: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new(vertices);
        for &(v, w) in edges {
            graph.add_edge(v, w);
        }
        graph
    }

    /// Parses the textbook format: first line `V`, second line `E`, then `E`
    /// lines `"v w"`. Blank lines are skipped.
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

        let mut graph = Self::new(vertices);
        for (line, text) in lines {
            let (v, w) = parse_edge_line(line, &text, vertices)?;
            graph.add_edge(v, w);
        }

        if graph.e() != expected {
            return Err(ParseGraphError::EdgeCountMismatch {
                expected,
                found: graph.e(),
            });
        }
        Ok(graph)
    }

    /// Appends an isolated vertex and returns its name.
    pub fn add_vertex(&mut self) -> usize {
        self.adj.push(Vec::new());
        self.adj.len() - 1
    }

    /// Adds the undirected edge `v`-`w`. Parallel edges accumulate; a
    /// self-loop lands twice in `adj(v)`.
    pub fn add_edge(&mut self, v: usize, w: usize) {
        self.validate(v);
        self.validate(w);
        self.adj[v].push(w);
        self.adj[w].push(v);
        self.edges += 1;
    }

    /// Vertices adjacent to `v`, in insertion order.
    pub fn adj(&self, v: usize) -> &[usize] {
        self.validate(v);
        &self.adj[v]
    }

    /// Number of edge endpoints at `v`; a self-loop counts twice.
    pub fn degree(&self, v: usize) -> usize {
        self.adj(v).len()
    }

    /// Number of vertices.
    pub fn v(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges.
    pub fn e(&self) -> usize {
        self.edges
    }

    fn validate(&self, v: usize) {
        assert!(
            v < self.adj.len(),
            "vertex {v} is not in a graph of {} vertices",
            self.adj.len()
        );
    }
}

// ---------------------------------------------------------------------------
