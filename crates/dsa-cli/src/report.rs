//! Serializable report types for the `--json` output mode.

use dsa_graph::edge::Edge;
use serde::Serialize;

/// Minimum, maximum and mean of a degree sequence.
#[derive(Debug, Default, Serialize)]
pub struct DegreeStats {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
}

impl DegreeStats {
    /// Summarizes `degrees`; all zeros for an empty sequence.
    pub fn new(degrees: impl IntoIterator<Item = usize>) -> Self {
        let mut min = usize::MAX;
        let mut max = 0;
        let mut total = 0;
        let mut count = 0usize;
        for degree in degrees {
            min = min.min(degree);
            max = max.max(degree);
            total += degree;
            count += 1;
        }
        if count == 0 {
            return Self::default();
        }
        let mean = total as f64 / count as f64;
        Self { min, max, mean }
    }
}

#[derive(Debug, Serialize)]
pub struct GraphInfo {
    pub vertices: usize,
    pub edges: usize,
    pub degrees: DegreeStats,
    pub components: usize,
    pub acyclic: bool,
    pub bipartite: bool,
}

#[derive(Debug, Serialize)]
pub struct DigraphInfo {
    pub vertices: usize,
    pub edges: usize,
    pub outdegrees: DegreeStats,
    pub indegrees: DegreeStats,
    pub dag: bool,
    pub strong_components: usize,
}

/// Component listing shared by `components` and `scc`.
#[derive(Debug, Serialize)]
pub struct ComponentsReport {
    pub count: usize,
    pub members: Vec<Vec<usize>>,
}

#[derive(Debug, Serialize)]
pub struct PathsReport {
    pub source: usize,
    pub algorithm: &'static str,
    pub paths: Vec<PathReport>,
}

#[derive(Debug, Serialize)]
pub struct PathReport {
    pub target: usize,
    /// Edge count along the path; only breadth-first search reports it.
    pub distance: Option<usize>,
    pub path: Option<Vec<usize>>,
}

#[derive(Debug, Serialize)]
pub struct CycleReport {
    pub acyclic: bool,
    pub cycle: Option<Vec<usize>>,
}

#[derive(Debug, Serialize)]
pub struct BipartiteReport {
    pub bipartite: bool,
    pub left: Option<Vec<usize>>,
    pub right: Option<Vec<usize>>,
    pub odd_cycle: Option<Vec<usize>>,
}

#[derive(Debug, Serialize)]
pub struct TopologicalReport {
    pub order: Option<Vec<usize>>,
    pub cycle: Option<Vec<usize>>,
}

#[derive(Debug, Serialize)]
pub struct MstReport {
    pub algorithm: &'static str,
    pub edges: Vec<Edge>,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct UnionFindReport {
    pub variant: &'static str,
    pub elements: usize,
    pub unions: Vec<(usize, usize)>,
    pub components: usize,
}

#[derive(Debug, Serialize)]
pub struct SortReport {
    pub algorithm: &'static str,
    pub count: usize,
    pub values: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct SelectReport {
    pub k: usize,
    pub value: i64,
}

#[derive(Debug, Serialize)]
pub struct ShuffleReport {
    pub seed: Option<u64>,
    pub values: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateReport {
    pub expression: String,
    pub value: i64,
}

#[derive(Debug, Serialize)]
pub struct NearestReport {
    pub query: (f64, f64),
    pub nearest: (f64, f64),
    pub distance: f64,
}

#[derive(Debug, Serialize)]
pub struct RangeReport {
    pub rect: (f64, f64, f64, f64),
    pub count: usize,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Serialize)]
pub struct DistanceReport {
    pub noun_a: String,
    pub noun_b: String,
    pub distance: usize,
}

#[derive(Debug, Serialize)]
pub struct SapReport {
    pub noun_a: String,
    pub noun_b: String,
    pub length: usize,
    pub ancestor: usize,
    pub ancestor_nouns: Vec<String>,
    pub path: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct OutcastReport {
    pub outcast: String,
    pub synset: usize,
    pub rankings: Vec<OutcastRanking>,
}

#[derive(Debug, Serialize)]
pub struct OutcastRanking {
    pub noun: String,
    pub distance_sum: usize,
}

#[derive(Debug, Serialize)]
pub struct ExportReport {
    pub format: &'static str,
    pub document: String,
}

#[derive(Debug, Serialize)]
pub struct StorageReport {
    pub path: String,
    pub vertices: usize,
    pub edges: usize,
    pub compressed: bool,
}

// ---------------------------------------------------------------------------
