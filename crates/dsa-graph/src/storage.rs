//! Saving and loading graphs as versioned JSON envelopes.
//!
//! Every file carries the format version, a creation timestamp and the
//! vertex and edge counts alongside the graph itself; loads verify all
//! three. Paths ending in `.zst` are compressed with zstd on the way out
//! and detected by extension on the way in.

use crate::digraph::Digraph;
use crate::ewgraph::EdgeWeightedGraph;
use crate::graph::Graph;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Version written into every envelope. Loads reject a different major
/// component and tolerate the rest with a warning.
pub const FORMAT_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    version: String,
    created_at: DateTime<Utc>,
    vertices: usize,
    edges: usize,
    graph: T,
}

trait Stored: Serialize + DeserializeOwned {
    fn vertex_count(&self) -> usize;
    fn edge_count(&self) -> usize;
}

impl Stored for Graph {
    fn vertex_count(&self) -> usize {
        self.v()
    }
    fn edge_count(&self) -> usize {
        self.e()
    }
}

impl Stored for Digraph {
    fn vertex_count(&self) -> usize {
        self.v()
    }
    fn edge_count(&self) -> usize {
        self.e()
    }
}

impl Stored for EdgeWeightedGraph {
    fn vertex_count(&self) -> usize {
        self.v()
    }
    fn edge_count(&self) -> usize {
        self.e()
    }
}

fn is_compressed(path: &Path) -> bool {
    path.extension().is_some_and(|extension| extension == "zst")
}

fn major(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}

fn check_version(found: &str, path: &Path) -> Result<()> {
    if major(found) != major(FORMAT_VERSION) {
        anyhow::bail!(
            "format version mismatch in {}: expected {FORMAT_VERSION}, found {found}",
            path.display()
        );
    }
    if found != FORMAT_VERSION {
        warn!(
            expected = FORMAT_VERSION,
            found,
            path = %path.display(),
            "format version differs"
        );
    }
    Ok(())
}

fn save<T: Stored>(graph: &T, path: &Path) -> Result<()> {
    let envelope = Envelope {
        version: FORMAT_VERSION.to_string(),
        created_at: Utc::now(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        graph,
    };
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    if is_compressed(path) {
        let mut encoder = zstd::Encoder::new(file, 0)
            .with_context(|| format!("failed to start compression for {}", path.display()))?;
        serde_json::to_writer_pretty(&mut encoder, &envelope)
            .with_context(|| format!("failed to write {}", path.display()))?;
        encoder
            .finish()
            .with_context(|| format!("failed to finish compression for {}", path.display()))?;
    } else {
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &envelope)
            .with_context(|| format!("failed to write {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    debug!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph saved"
    );
    Ok(())
}

fn load<T: Stored>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut text = String::new();
    if is_compressed(path) {
        zstd::Decoder::new(file)
            .with_context(|| format!("failed to start decompression for {}", path.display()))?
            .read_to_string(&mut text)
            .with_context(|| format!("failed to read {}", path.display()))?;
    } else {
        BufReader::new(file)
            .read_to_string(&mut text)
            .with_context(|| format!("failed to read {}", path.display()))?;
    }

    let envelope: Envelope<T> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    check_version(&envelope.version, path)?;
    let (vertices, edges) = (envelope.graph.vertex_count(), envelope.graph.edge_count());
    if envelope.vertices != vertices || envelope.edges != edges {
        anyhow::bail!(
            "{} is inconsistent: header says {} vertices and {} edges, graph holds {} and {}",
            path.display(),
            envelope.vertices,
            envelope.edges,
            vertices,
            edges
        );
    }
    debug!(path = %path.display(), vertices, edges, "graph loaded");
    Ok(envelope.graph)
}

/// Writes `graph` to `path` as a versioned envelope.
pub fn save_graph(graph: &Graph, path: impl AsRef<Path>) -> Result<()> {
    save(graph, path.as_ref())
}

/// Reads an undirected graph back from `path`.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    load(path.as_ref())
}

/// Writes `digraph` to `path` as a versioned envelope.
pub fn save_digraph(digraph: &Digraph, path: impl AsRef<Path>) -> Result<()> {
    save(digraph, path.as_ref())
}

/// Reads a digraph back from `path`.
pub fn load_digraph(path: impl AsRef<Path>) -> Result<Digraph> {
    load(path.as_ref())
}

/// Writes `graph` with its weights to `path` as a versioned envelope.
pub fn save_weighted(graph: &EdgeWeightedGraph, path: impl AsRef<Path>) -> Result<()> {
    save(graph, path.as_ref())
}

/// Reads an edge-weighted graph back from `path`.
pub fn load_weighted(path: impl AsRef<Path>) -> Result<EdgeWeightedGraph> {
    load(path.as_ref())
}

// ---------------------------------------------------------------------------
