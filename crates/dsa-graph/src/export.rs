//! Rendering graphs as Graphviz DOT or Mermaid text.
//!
//! Output is deterministic: vertices come first in name order, then edges
//! in adjacency order. Undirected edges appear once; parallel edges keep
//! their multiplicity.

use crate::digraph::Digraph;
use crate::ewgraph::EdgeWeightedGraph;
use crate::graph::Graph;

/// The target diagram language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Dot,
    Mermaid,
}

fn undirected_pairs(graph: &Graph) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(graph.e());
    for v in 0..graph.v() {
        let mut self_loops = 0;
        for &w in graph.adj(v) {
            if w > v {
                pairs.push((v, w));
            } else if w == v {
                // The bag holds each self-loop twice; emit one.
                if self_loops % 2 == 0 {
                    pairs.push((v, v));
                }
                self_loops += 1;
            }
        }
    }
    pairs
}

/// Renders an undirected graph.
pub fn export_graph(graph: &Graph, format: ExportFormat) -> String {
    let mut out = String::new();
    match format {
        ExportFormat::Dot => {
            out.push_str("graph {\n");
            for v in 0..graph.v() {
                out.push_str(&format!("  {v};\n"));
            }
            for (v, w) in undirected_pairs(graph) {
                out.push_str(&format!("  {v} -- {w};\n"));
            }
            out.push_str("}\n");
        }
        ExportFormat::Mermaid => {
            out.push_str("graph LR\n");
            for v in 0..graph.v() {
                out.push_str(&format!("  {v}\n"));
            }
            for (v, w) in undirected_pairs(graph) {
                out.push_str(&format!("  {v} --- {w}\n"));
            }
        }
    }
    out
}

/// Renders a digraph, one arrow per edge.
pub fn export_digraph(digraph: &Digraph, format: ExportFormat) -> String {
    let mut out = String::new();
    match format {
        ExportFormat::Dot => {
            out.push_str("digraph {\n");
            for v in 0..digraph.v() {
                out.push_str(&format!("  {v};\n"));
            }
            for v in 0..digraph.v() {
                for &w in digraph.adj(v) {
                    out.push_str(&format!("  {v} -> {w};\n"));
                }
            }
            out.push_str("}\n");
        }
        ExportFormat::Mermaid => {
            out.push_str("flowchart LR\n");
            for v in 0..digraph.v() {
                out.push_str(&format!("  {v}\n"));
            }
            for v in 0..digraph.v() {
                for &w in digraph.adj(v) {
                    out.push_str(&format!("  {v} --> {w}\n"));
                }
            }
        }
    }
    out
}

/// Renders an edge-weighted graph with the weights as edge labels.
pub fn export_weighted(graph: &EdgeWeightedGraph, format: ExportFormat) -> String {
    let mut out = String::new();
    match format {
        ExportFormat::Dot => {
            out.push_str("graph {\n");
            for v in 0..graph.v() {
                out.push_str(&format!("  {v};\n"));
            }
            for edge in graph.edges() {
                let v = edge.either();
                let w = edge.other(v);
                out.push_str(&format!("  {v} -- {w} [label=\"{}\"];\n", edge.weight()));
            }
            out.push_str("}\n");
        }
        ExportFormat::Mermaid => {
            out.push_str("graph LR\n");
            for v in 0..graph.v() {
                out.push_str(&format!("  {v}\n"));
            }
            for edge in graph.edges() {
                let v = edge.either();
                let w = edge.other(v);
                out.push_str(&format!("  {v} ---|{}| {w}\n", edge.weight()));
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
