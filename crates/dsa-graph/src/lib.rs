//! Graph processing for the dsa workspace.
//!
//! Covers undirected graphs and digraphs with their searches
//! ([`dfs::DepthFirstPaths`], [`bfs::BreadthFirstPaths`]), connectivity and
//! cycle questions, depth-first orderings up to topological sort and strong
//! components ([`scc::KosarajuSharirScc`]), minimum spanning trees
//! ([`mst::KruskalMst`], [`mst::LazyPrimMst`]), the WordNet semantic graph
//! with its ancestral-path queries ([`wordnet::WordNet`], [`sap::Sap`],
//! [`outcast::Outcast`]), and graph persistence and diagram export.

pub mod bfs;
pub mod bipartite;
pub mod cc;
pub mod cycle;
pub mod dfs;
pub mod dfs_order;
pub mod digraph;
pub mod directed_bfs;
pub mod directed_cycle;
pub mod directed_dfs;
pub mod edge;
pub mod ewgraph;
pub mod export;
pub mod graph;
pub mod mst;
pub mod outcast;
pub mod sap;
pub mod scc;
pub mod storage;
pub mod topological;
pub mod wordnet;
