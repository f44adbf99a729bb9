//! Edge-weighted undirected graphs.

use crate::edge::Edge;
use crate::graph::{ParseGraphError, check_vertex, data_lines, parse_number};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

fn parse_weighted_line(line: usize, text: &str, vertices: usize) -> Result<Edge, ParseGraphError> {
    let mut tokens = text.split_whitespace();
    let (Some(v), Some(w), Some(weight), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(ParseGraphError::Malformed {
            line,
            expected: "v w weight",
            found: text.to_string(),
        });
    };
    let v = check_vertex(line, parse_number(line, v)?, vertices)?;
    let w = check_vertex(line, parse_number(line, w)?, vertices)?;
    let weight: f64 = weight.parse().map_err(|_| ParseGraphError::BadNumber {
        line,
        token: weight.to_string(),
    })?;
    Ok(Edge::new(v, w, weight))
}

/// An undirected multigraph whose edges carry weights.
///
/// Each [`Edge`] sits in the adjacency bag of both its endpoints; a
/// self-loop sits twice in the bag of its only endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EdgeWeightedGraph {
    adj: Vec<Vec<Edge>>,
    edges: usize,
}

impl EdgeWeightedGraph {
    /// A graph of `vertices` isolated vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertices],
            edges: 0,
        }
    }

    /// Builds a graph from `(v, w, weight)` triples.
    pub fn with_edges(vertices: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut graph = Self::new(vertices);
        for &(v, w, weight) in edges {
            graph.add_edge(Edge::new(v, w, weight));
        }
        graph
    }

    /// Parses the textbook format: `V`, `E`, then `E` lines `"v w weight"`.
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
            graph.add_edge(parse_weighted_line(line, &text, vertices)?);
        }

        if graph.e() != expected {
            return Err(ParseGraphError::EdgeCountMismatch {
                expected,
                found: graph.e(),
            });
        }
        Ok(graph)
    }

    /// Adds `edge` to the bags of both its endpoints.
    pub fn add_edge(&mut self, edge: Edge) {
        let v = edge.either();
        let w = edge.other(v);
        self.validate(v);
        self.validate(w);
        self.adj[v].push(edge);
        self.adj[w].push(edge);
        self.edges += 1;
    }

    /// Edges incident to `v`, in insertion order.
    pub fn adj(&self, v: usize) -> &[Edge] {
        self.validate(v);
        &self.adj[v]
    }

    /// Number of edges incident to `v`. A self-loop contributes two.
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

    /// Every edge exactly once, self-loops included.
    pub fn edges(&self) -> Vec<Edge> {
        let mut list = Vec::with_capacity(self.edges);
        for v in 0..self.v() {
            let mut self_loops = 0;
            for &edge in &self.adj[v] {
                let other = edge.other(v);
                if other > v {
                    list.push(edge);
                } else if other == v {
                    // Each self-loop shows up twice in the bag; keep one.
                    if self_loops % 2 == 0 {
                        list.push(edge);
                    }
                    self_loops += 1;
                }
            }
        }
        list
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_graph_has_isolated_vertices() {
        let graph = EdgeWeightedGraph::new(3);
        assert_eq!(graph.v(), 3);
        assert_eq!(graph.e(), 0);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn an_edge_lands_in_both_bags() {
        let mut graph = EdgeWeightedGraph::new(3);
        graph.add_edge(Edge::new(0, 1, 0.5));
        assert_eq!(graph.e(), 1);
        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.degree(2), 0);
        assert_eq!(graph.adj(0)[0].other(0), 1);
        assert_eq!(graph.adj(1)[0].other(1), 0);
    }

    #[test]
    fn edges_lists_each_edge_once() {
        let graph = EdgeWeightedGraph::with_edges(
            4,
            &[(0, 1, 0.1), (1, 2, 0.2), (2, 3, 0.3), (3, 0, 0.4)],
        );
        let edges = graph.edges();
        assert_eq!(edges.len(), 4);
        let mut weights: Vec<f64> = edges.iter().map(Edge::weight).collect();
        weights.sort_unstable_by(f64::total_cmp);
        assert_eq!(weights, vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn parallel_edges_are_kept_apart() {
        let graph = EdgeWeightedGraph::with_edges(2, &[(0, 1, 0.1), (0, 1, 0.2)]);
        assert_eq!(graph.e(), 2);
        assert_eq!(graph.edges().len(), 2);
        assert_eq!(graph.degree(0), 2);
    }

    #[test]
    fn a_self_loop_doubles_its_degree_but_lists_once() {
        let graph = EdgeWeightedGraph::with_edges(2, &[(1, 1, 0.7), (0, 1, 0.2)]);
        assert_eq!(graph.degree(1), 3);
        let edges = graph.edges();
        assert_eq!(edges.len(), 2);
        let loops = edges
            .iter()
            .filter(|edge| edge.other(edge.either()) == edge.either())
            .count();
        assert_eq!(loops, 1);
    }

    #[test]
    #[should_panic(expected = "is not in a graph")]
    fn add_edge_out_of_range_panics() {
        let mut graph = EdgeWeightedGraph::new(2);
        graph.add_edge(Edge::new(0, 2, 0.5));
    }

    #[test]
    fn parses_the_textbook_format() {
        let input = "3\n2\n0 1 0.25\n1 2 1.5\n";
        let graph = EdgeWeightedGraph::from_reader(input.as_bytes()).unwrap();
        assert_eq!(graph.v(), 3);
        assert_eq!(graph.e(), 2);
        assert!((graph.adj(0)[0].weight() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn parse_error_on_a_bad_weight() {
        let err = EdgeWeightedGraph::from_reader("2\n1\n0 1 heavy\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ParseGraphError::BadNumber { line: 3, .. }));
    }

    #[test]
    fn parse_error_on_a_missing_weight() {
        let err = EdgeWeightedGraph::from_reader("2\n1\n0 1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseGraphError::Malformed {
                expected: "v w weight",
                ..
            }
        ));
    }
}
