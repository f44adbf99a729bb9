//! CLI drivers for the dsa workspace: union-find, sorting, expression
//! evaluation, graph analysis and wordnet queries over the classic
//! whitespace text formats.

mod config;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use dsa_core::union_find::{QuickFind, QuickUnion, UnionFind, WeightedQuickUnion};
use dsa_graph::bfs::BreadthFirstPaths;
use dsa_graph::bipartite::Bipartite;
use dsa_graph::cc::ConnectedComponents;
use dsa_graph::cycle::Cycle;
use dsa_graph::dfs::DepthFirstPaths;
use dsa_graph::digraph::Digraph;
use dsa_graph::directed_cycle::DirectedCycle;
use dsa_graph::edge::Edge;
use dsa_graph::ewgraph::EdgeWeightedGraph;
use dsa_graph::export::{self, ExportFormat};
use dsa_graph::graph::Graph;
use dsa_graph::mst::{KruskalMst, LazyPrimMst};
use dsa_graph::outcast::Outcast;
use dsa_graph::sap::Sap;
use dsa_graph::scc::KosarajuSharirScc;
use dsa_graph::storage;
use dsa_graph::topological::Topological;
use dsa_graph::wordnet::WordNet;
use dsa_search::kd_tree::KdTree;
use dsa_search::point::Point2D;
use dsa_search::point_set::PointSet;
use dsa_search::rect::RectHV;
use dsa_sort::elementary::{insertion_sort, selection_sort, shell_sort};
use dsa_sort::heap::heap_sort;
use dsa_sort::merge::{bottom_up_merge_sort, merge_sort};
use dsa_sort::quick::{quick_select, quick_sort, three_way_quick_sort};
use dsa_sort::shuffle::{knuth_shuffle, knuth_shuffle_with};

use crate::config::DsaConfig;
use crate::report::{
    BipartiteReport, ComponentsReport, CycleReport, DegreeStats, DigraphInfo, DistanceReport,
    EvaluateReport, ExportReport, GraphInfo, MstReport, NearestReport, OutcastRanking,
    OutcastReport, PathReport, PathsReport, RangeReport, SapReport, SelectReport, ShuffleReport,
    SortReport, StorageReport, TopologicalReport, UnionFindReport,
};

#[derive(Parser)]
#[command(name = "dsa", about = "Classic data structures and algorithms toolbox")]
struct Cli {
    /// Directory holding dsa.toml (defaults to current directory)
    #[arg(short, long, global = true)]
    config_dir: Option<PathBuf>,

    /// Emit reports as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a graph: counts, degrees, structure
    Info {
        /// Graph file in "V, E, then `v w` lines" form (- for stdin)
        graph: PathBuf,

        /// Treat the input as a digraph
        #[arg(long)]
        directed: bool,
    },

    /// List the connected components of a graph
    Components {
        /// Graph file (- for stdin)
        graph: PathBuf,
    },

    /// Paths from a source vertex, breadth-first by default
    Paths {
        /// Graph file (- for stdin)
        graph: PathBuf,

        /// Source vertex
        #[arg(short, long)]
        source: usize,

        /// Report only the path to this vertex
        #[arg(long)]
        to: Option<usize>,

        /// Use depth-first search instead of breadth-first
        #[arg(long)]
        dfs: bool,
    },

    /// Find a cycle, or certify the graph acyclic
    Cycle {
        /// Graph file (- for stdin)
        graph: PathBuf,

        /// Treat the input as a digraph
        #[arg(long)]
        directed: bool,
    },

    /// Two-color a graph, or show an odd cycle
    Bipartite {
        /// Graph file (- for stdin)
        graph: PathBuf,
    },

    /// Topologically order a digraph
    Topo {
        /// Digraph file (- for stdin)
        digraph: PathBuf,
    },

    /// Strong components of a digraph (Kosaraju-Sharir)
    Scc {
        /// Digraph file (- for stdin)
        digraph: PathBuf,
    },

    /// Minimum spanning tree of an edge-weighted graph
    Mst {
        /// Edge-weighted graph file with "v w weight" lines (- for stdin)
        graph: PathBuf,

        /// Algorithm: kruskal, prim
        #[arg(short, long, default_value = "kruskal")]
        algorithm: String,
    },

    /// Union-find client: first token n, then "p q" pairs
    Uf {
        /// Input file (- for stdin)
        file: PathBuf,

        /// Variant: quick-find, quick-union, weighted
        #[arg(long, default_value = "weighted")]
        variant: String,
    },

    /// Sort whitespace-separated integers
    Sort {
        /// Input file (- for stdin)
        file: PathBuf,

        /// Algorithm: selection, insertion, shell, merge, bottom-up,
        /// quick, three-way, heap
        #[arg(short, long, default_value = "merge")]
        algorithm: String,
    },

    /// Pick the k-th smallest integer (quickselect)
    Select {
        /// Input file (- for stdin)
        file: PathBuf,

        /// Rank to select, 0-based
        #[arg(short)]
        k: usize,
    },

    /// Knuth-shuffle whitespace-separated integers
    Shuffle {
        /// Input file (- for stdin)
        file: PathBuf,

        /// RNG seed (falls back to `[run] seed` in dsa.toml)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Evaluate a fully parenthesized arithmetic expression
    Evaluate {
        /// Expression such as "( 1 + ( 2 * 3 ) )"
        expression: String,
    },

    /// Range and nearest-neighbor queries over points in the plane
    Points {
        /// Points file with "x y" lines (- for stdin)
        file: PathBuf,

        /// Scan every point instead of building a 2d-tree
        #[arg(long)]
        brute: bool,

        #[command(subcommand)]
        query: PointsQuery,
    },

    /// WordNet queries: semantic distance, ancestral paths, outcasts
    Wordnet {
        /// Synsets CSV (falls back to `[wordnet] synsets` in dsa.toml)
        #[arg(long)]
        synsets: Option<PathBuf>,

        /// Hypernyms CSV (falls back to `[wordnet] hypernyms` in dsa.toml)
        #[arg(long)]
        hypernyms: Option<PathBuf>,

        #[command(subcommand)]
        query: WordnetQuery,
    },

    /// Render a graph as Graphviz DOT or a Mermaid diagram
    Export {
        /// Graph file (- for stdin)
        graph: PathBuf,

        /// Output format: dot, mermaid (falls back to `[export] format`)
        #[arg(short, long)]
        format: Option<String>,

        /// Treat the input as a digraph
        #[arg(long, conflicts_with = "weighted")]
        directed: bool,

        /// Treat the input as an edge-weighted graph
        #[arg(long)]
        weighted: bool,
    },

    /// Save a text-format graph as a versioned JSON envelope
    Save {
        /// Graph file (- for stdin)
        graph: PathBuf,

        /// Output path; a .zst extension enables compression
        #[arg(short, long)]
        out: PathBuf,

        /// Compress with zstd regardless of extension
        #[arg(long)]
        compress: bool,

        /// Treat the input as a digraph
        #[arg(long, conflicts_with = "weighted")]
        directed: bool,

        /// Treat the input as an edge-weighted graph
        #[arg(long)]
        weighted: bool,
    },

    /// Load a saved envelope and report its contents
    Load {
        /// Envelope file written by `dsa save`
        file: PathBuf,

        /// The envelope holds a digraph
        #[arg(long, conflicts_with = "weighted")]
        directed: bool,

        /// The envelope holds an edge-weighted graph
        #[arg(long)]
        weighted: bool,
    },
}

#[derive(Subcommand)]
enum PointsQuery {
    /// The point nearest to (x, y)
    Nearest { x: f64, y: f64 },

    /// All points inside an axis-aligned rectangle
    Range {
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    },
}

#[derive(Subcommand)]
enum WordnetQuery {
    /// Length of the shortest ancestral path between two nouns
    Distance { noun_a: String, noun_b: String },

    /// Shortest ancestral path and its common ancestor
    Sap { noun_a: String, noun_b: String },

    /// The noun least related to the others
    Outcast {
        /// Candidate nouns
        #[arg(required = true)]
        nouns: Vec<String>,
    },
}

fn get_config_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.config_dir {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config_dir = get_config_dir(&cli)?;
    let config = DsaConfig::load(&config_dir)?;
    let json = cli.json;

    match cli.command {
        Commands::Info { graph, directed } => cmd_info(&graph, directed, json),
        Commands::Components { graph } => cmd_components(&graph, json),
        Commands::Paths {
            graph,
            source,
            to,
            dfs,
        } => cmd_paths(&graph, source, to, dfs, json),
        Commands::Cycle { graph, directed } => cmd_cycle(&graph, directed, json),
        Commands::Bipartite { graph } => cmd_bipartite(&graph, json),
        Commands::Topo { digraph } => cmd_topo(&digraph, json),
        Commands::Scc { digraph } => cmd_scc(&digraph, json),
        Commands::Mst { graph, algorithm } => cmd_mst(&graph, &algorithm, json),
        Commands::Uf { file, variant } => cmd_uf(&file, &variant, json),
        Commands::Sort { file, algorithm } => cmd_sort(&file, &algorithm, json),
        Commands::Select { file, k } => cmd_select(&file, k, json),
        Commands::Shuffle { file, seed } => cmd_shuffle(&file, seed.or(config.run.seed), json),
        Commands::Evaluate { expression } => cmd_evaluate(&expression, json),
        Commands::Points { file, brute, query } => cmd_points(&file, brute, &query, json),
        Commands::Wordnet {
            synsets,
            hypernyms,
            query,
        } => cmd_wordnet(synsets, hypernyms, query, &config, json),
        Commands::Export {
            graph,
            format,
            directed,
            weighted,
        } => cmd_export(&graph, format.as_deref(), directed, weighted, &config, json),
        Commands::Save {
            graph,
            out,
            compress,
            directed,
            weighted,
        } => cmd_save(
            &graph,
            out,
            compress || config.storage.compress,
            directed,
            weighted,
            json,
        ),
        Commands::Load {
            file,
            directed,
            weighted,
        } => cmd_load(&file, directed, weighted, json),
    }
}

/// Reads a whole input file, or stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn parse_graph(path: &Path) -> Result<Graph> {
    let text = read_input(path)?;
    let graph = Graph::from_reader(text.as_bytes())
        .with_context(|| format!("failed to parse graph from {}", path.display()))?;
    Ok(graph)
}

fn parse_digraph(path: &Path) -> Result<Digraph> {
    let text = read_input(path)?;
    let digraph = Digraph::from_reader(text.as_bytes())
        .with_context(|| format!("failed to parse digraph from {}", path.display()))?;
    Ok(digraph)
}

fn parse_weighted(path: &Path) -> Result<EdgeWeightedGraph> {
    let text = read_input(path)?;
    let graph = EdgeWeightedGraph::from_reader(text.as_bytes())
        .with_context(|| format!("failed to parse edge-weighted graph from {}", path.display()))?;
    Ok(graph)
}

fn parse_integers(text: &str) -> Result<Vec<i64>> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("{token:?} is not an integer"))
        })
        .collect()
}

fn parse_points(text: &str) -> Result<Vec<Point2D>> {
    let mut points = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
            anyhow::bail!("line {}: expected \"x y\", found {line:?}", index + 1);
        };
        let x: f64 = x
            .parse()
            .with_context(|| format!("line {}: {x:?} is not a coordinate", index + 1))?;
        let y: f64 = y
            .parse()
            .with_context(|| format!("line {}: {y:?} is not a coordinate", index + 1))?;
        points.push(Point2D::new(x, y));
    }
    Ok(points)
}

fn join<T: ToString>(values: &[T], separator: &str) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn emit<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn cmd_info(path: &Path, directed: bool, json: bool) -> Result<()> {
    if directed {
        let digraph = parse_digraph(path)?;
        let info = DigraphInfo {
            vertices: digraph.v(),
            edges: digraph.e(),
            outdegrees: DegreeStats::new((0..digraph.v()).map(|v| digraph.outdegree(v))),
            indegrees: DegreeStats::new((0..digraph.v()).map(|v| digraph.indegree(v))),
            dag: !DirectedCycle::new(&digraph).has_cycle(),
            strong_components: KosarajuSharirScc::new(&digraph).count(),
        };
        if json {
            return emit(&info);
        }
        println!("Vertices: {}", info.vertices);
        println!("Edges: {}", info.edges);
        println!(
            "Outdegree: min {}, max {}, mean {:.2}",
            info.outdegrees.min, info.outdegrees.max, info.outdegrees.mean
        );
        println!(
            "Indegree: min {}, max {}, mean {:.2}",
            info.indegrees.min, info.indegrees.max, info.indegrees.mean
        );
        println!("DAG: {}", if info.dag { "yes" } else { "no" });
        println!("Strong components: {}", info.strong_components);
        return Ok(());
    }

    let graph = parse_graph(path)?;
    let info = GraphInfo {
        vertices: graph.v(),
        edges: graph.e(),
        degrees: DegreeStats::new((0..graph.v()).map(|v| graph.degree(v))),
        components: ConnectedComponents::new(&graph).count(),
        acyclic: !Cycle::new(&graph).has_cycle(),
        bipartite: Bipartite::new(&graph).is_bipartite(),
    };
    if json {
        return emit(&info);
    }
    println!("Vertices: {}", info.vertices);
    println!("Edges: {}", info.edges);
    println!(
        "Degree: min {}, max {}, mean {:.2}",
        info.degrees.min, info.degrees.max, info.degrees.mean
    );
    println!("Components: {}", info.components);
    println!("Acyclic: {}", if info.acyclic { "yes" } else { "no" });
    println!("Bipartite: {}", if info.bipartite { "yes" } else { "no" });
    Ok(())
}

fn cmd_components(path: &Path, json: bool) -> Result<()> {
    let graph = parse_graph(path)?;
    let cc = ConnectedComponents::new(&graph);
    let mut members = vec![Vec::new(); cc.count()];
    for v in 0..graph.v() {
        members[cc.id(v)].push(v);
    }

    let report = ComponentsReport {
        count: cc.count(),
        members,
    };
    if json {
        return emit(&report);
    }
    println!("{} components", report.count);
    for (id, component) in report.members.iter().enumerate() {
        println!("{id}: {}", join(component, " "));
    }
    Ok(())
}

fn cmd_paths(path: &Path, source: usize, to: Option<usize>, dfs: bool, json: bool) -> Result<()> {
    let graph = parse_graph(path)?;
    if source >= graph.v() {
        anyhow::bail!(
            "source vertex {source} is not in a graph of {} vertices",
            graph.v()
        );
    }
    if let Some(target) = to
        && target >= graph.v()
    {
        anyhow::bail!(
            "target vertex {target} is not in a graph of {} vertices",
            graph.v()
        );
    }

    let targets: Vec<usize> = match to {
        Some(target) => vec![target],
        None => (0..graph.v()).collect(),
    };

    let report = if dfs {
        let paths = DepthFirstPaths::new(&graph, source);
        PathsReport {
            source,
            algorithm: "dfs",
            paths: targets
                .iter()
                .map(|&target| PathReport {
                    target,
                    distance: None,
                    path: paths.path_to(target),
                })
                .collect(),
        }
    } else {
        let paths = BreadthFirstPaths::new(&graph, source);
        PathsReport {
            source,
            algorithm: "bfs",
            paths: targets
                .iter()
                .map(|&target| PathReport {
                    target,
                    distance: paths.dist_to(target),
                    path: paths.path_to(target),
                })
                .collect(),
        }
    };

    if json {
        return emit(&report);
    }
    for entry in &report.paths {
        match (&entry.path, entry.distance) {
            (Some(path), Some(distance)) => {
                println!("{source} to {} ({distance}): {}", entry.target, join(path, "-"));
            }
            (Some(path), None) => println!("{source} to {}: {}", entry.target, join(path, "-")),
            _ => println!("{source} to {}: not connected", entry.target),
        }
    }
    Ok(())
}

fn cmd_cycle(path: &Path, directed: bool, json: bool) -> Result<()> {
    let report = if directed {
        let digraph = parse_digraph(path)?;
        let search = DirectedCycle::new(&digraph);
        CycleReport {
            acyclic: !search.has_cycle(),
            cycle: search.cycle().map(<[usize]>::to_vec),
        }
    } else {
        let graph = parse_graph(path)?;
        let search = Cycle::new(&graph);
        CycleReport {
            acyclic: !search.has_cycle(),
            cycle: search.cycle().map(<[usize]>::to_vec),
        }
    };

    if json {
        return emit(&report);
    }
    match &report.cycle {
        Some(cycle) => println!("cycle: {}", join(cycle, " ")),
        None => println!("acyclic"),
    }
    Ok(())
}

fn cmd_bipartite(path: &Path, json: bool) -> Result<()> {
    let graph = parse_graph(path)?;
    let bipartite = Bipartite::new(&graph);

    let report = if bipartite.is_bipartite() {
        let (mut left, mut right) = (Vec::new(), Vec::new());
        for v in 0..graph.v() {
            if bipartite.color(v) {
                right.push(v);
            } else {
                left.push(v);
            }
        }
        BipartiteReport {
            bipartite: true,
            left: Some(left),
            right: Some(right),
            odd_cycle: None,
        }
    } else {
        BipartiteReport {
            bipartite: false,
            left: None,
            right: None,
            odd_cycle: bipartite.odd_cycle().map(<[usize]>::to_vec),
        }
    };

    if json {
        return emit(&report);
    }
    if report.bipartite {
        println!("bipartite");
        if let (Some(left), Some(right)) = (&report.left, &report.right) {
            println!("left: {}", join(left, " "));
            println!("right: {}", join(right, " "));
        }
    } else {
        println!("not bipartite");
        if let Some(cycle) = &report.odd_cycle {
            println!("odd cycle: {}", join(cycle, " "));
        }
    }
    Ok(())
}

fn cmd_topo(path: &Path, json: bool) -> Result<()> {
    let digraph = parse_digraph(path)?;
    let topological = Topological::new(&digraph);

    let report = match topological.order() {
        Some(order) => TopologicalReport {
            order: Some(order.to_vec()),
            cycle: None,
        },
        None => TopologicalReport {
            order: None,
            cycle: DirectedCycle::new(&digraph).cycle().map(<[usize]>::to_vec),
        },
    };

    if json {
        return emit(&report);
    }
    match (&report.order, &report.cycle) {
        (Some(order), _) => println!("order: {}", join(order, " ")),
        (None, Some(cycle)) => {
            println!("no topological order");
            println!("cycle: {}", join(cycle, " "));
        }
        _ => println!("no topological order"),
    }
    Ok(())
}

fn cmd_scc(path: &Path, json: bool) -> Result<()> {
    let digraph = parse_digraph(path)?;
    let scc = KosarajuSharirScc::new(&digraph);
    let mut members = vec![Vec::new(); scc.count()];
    for v in 0..digraph.v() {
        members[scc.id(v)].push(v);
    }

    let report = ComponentsReport {
        count: scc.count(),
        members,
    };
    if json {
        return emit(&report);
    }
    println!("{} strong components", report.count);
    for (id, component) in report.members.iter().enumerate() {
        println!("{id}: {}", join(component, " "));
    }
    Ok(())
}

fn cmd_mst(path: &Path, algorithm: &str, json: bool) -> Result<()> {
    let graph = parse_weighted(path)?;
    let (name, edges, weight): (&'static str, Vec<Edge>, f64) = match algorithm {
        "kruskal" => {
            let mst = KruskalMst::new(&graph);
            ("kruskal", mst.edges().to_vec(), mst.weight())
        }
        "prim" => {
            let mst = LazyPrimMst::new(&graph);
            ("prim", mst.edges().to_vec(), mst.weight())
        }
        _ => anyhow::bail!("Unknown MST algorithm: {algorithm}. Use 'kruskal' or 'prim'."),
    };

    let report = MstReport {
        algorithm: name,
        edges,
        weight,
    };
    if json {
        return emit(&report);
    }
    for edge in &report.edges {
        println!("{edge}");
    }
    println!("weight: {:.5}", report.weight);
    Ok(())
}

fn cmd_uf(path: &Path, variant: &str, json: bool) -> Result<()> {
    let text = read_input(path)?;
    let mut tokens = text.split_whitespace();
    let count = tokens
        .next()
        .context("empty input: expected a leading element count")?;
    let count: usize = count
        .parse()
        .with_context(|| format!("{count:?} is not an element count"))?;

    let (name, mut uf): (&'static str, Box<dyn UnionFind>) = match variant {
        "quick-find" => ("quick-find", Box::new(QuickFind::new(count))),
        "quick-union" => ("quick-union", Box::new(QuickUnion::new(count))),
        "weighted" => ("weighted", Box::new(WeightedQuickUnion::new(count))),
        _ => anyhow::bail!(
            "Unknown union-find variant: {variant}. Use 'quick-find', 'quick-union' or 'weighted'."
        ),
    };

    let pairs: Vec<usize> = tokens
        .map(|token| {
            token
                .parse::<usize>()
                .with_context(|| format!("{token:?} is not an element"))
        })
        .collect::<Result<_>>()?;
    if pairs.len() % 2 != 0 {
        anyhow::bail!("odd token count: union pairs come as \"p q\" lines");
    }

    let mut unions = Vec::new();
    for pair in pairs.chunks_exact(2) {
        let (p, q) = (pair[0], pair[1]);
        if p >= count || q >= count {
            anyhow::bail!("pair {p} {q} is out of range for {count} elements");
        }
        if uf.connected(p, q) {
            continue;
        }
        uf.union(p, q);
        unions.push((p, q));
        if !json {
            println!("{p} {q}");
        }
    }

    let report = UnionFindReport {
        variant: name,
        elements: count,
        unions,
        components: uf.count(),
    };
    if json {
        return emit(&report);
    }
    println!("{} components", report.components);
    Ok(())
}

fn cmd_sort(path: &Path, algorithm: &str, json: bool) -> Result<()> {
    let mut values = parse_integers(&read_input(path)?)?;
    let name: &'static str = match algorithm {
        "selection" => {
            selection_sort(&mut values);
            "selection"
        }
        "insertion" => {
            insertion_sort(&mut values);
            "insertion"
        }
        "shell" => {
            shell_sort(&mut values);
            "shell"
        }
        "merge" => {
            merge_sort(&mut values);
            "merge"
        }
        "bottom-up" => {
            bottom_up_merge_sort(&mut values);
            "bottom-up"
        }
        "quick" => {
            quick_sort(&mut values);
            "quick"
        }
        "three-way" => {
            three_way_quick_sort(&mut values);
            "three-way"
        }
        "heap" => {
            heap_sort(&mut values);
            "heap"
        }
        _ => anyhow::bail!(
            "Unknown sort algorithm: {algorithm}. Use 'selection', 'insertion', 'shell', \
             'merge', 'bottom-up', 'quick', 'three-way' or 'heap'."
        ),
    };

    let report = SortReport {
        algorithm: name,
        count: values.len(),
        values,
    };
    if json {
        return emit(&report);
    }
    println!("{}", join(&report.values, " "));
    Ok(())
}

fn cmd_select(path: &Path, k: usize, json: bool) -> Result<()> {
    let mut values = parse_integers(&read_input(path)?)?;
    if values.is_empty() {
        anyhow::bail!("no integers to select from");
    }
    if k >= values.len() {
        anyhow::bail!("rank {k} is out of range for {} integers", values.len());
    }

    let value = quick_select(&mut values, k)
        .copied()
        .context("no integers to select from")?;
    let report = SelectReport { k, value };
    if json {
        return emit(&report);
    }
    println!("{value}");
    Ok(())
}

fn cmd_shuffle(path: &Path, seed: Option<u64>, json: bool) -> Result<()> {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let mut values = parse_integers(&read_input(path)?)?;
    match seed {
        Some(seed) => knuth_shuffle_with(&mut StdRng::seed_from_u64(seed), &mut values),
        None => knuth_shuffle(&mut values),
    }

    let report = ShuffleReport { seed, values };
    if json {
        return emit(&report);
    }
    println!("{}", join(&report.values, " "));
    Ok(())
}

fn cmd_evaluate(expression: &str, json: bool) -> Result<()> {
    let value = dsa_core::evaluator::evaluate(expression)
        .with_context(|| format!("failed to evaluate {expression:?}"))?;
    let report = EvaluateReport {
        expression: expression.to_string(),
        value,
    };
    if json {
        return emit(&report);
    }
    println!("{value}");
    Ok(())
}

/// Either point-set backend behind one pair of queries. The 2d-tree only
/// accepts points in the unit square; `--brute` lifts that restriction.
enum PointBackend {
    Tree(KdTree),
    Brute(PointSet),
}

impl PointBackend {
    fn build(points: &[Point2D], brute: bool) -> Result<Self> {
        if brute {
            let mut set = PointSet::new();
            for &p in points {
                set.insert(p);
            }
            return Ok(Self::Brute(set));
        }
        let mut tree = KdTree::new();
        for &p in points {
            if !(0.0..=1.0).contains(&p.x) || !(0.0..=1.0).contains(&p.y) {
                anyhow::bail!(
                    "point ({}, {}) is outside the unit square: pass --brute for unbounded points",
                    p.x,
                    p.y
                );
            }
            tree.insert(p);
        }
        Ok(Self::Tree(tree))
    }

    fn nearest(&self, p: Point2D) -> Option<Point2D> {
        match self {
            Self::Tree(tree) => tree.nearest(p),
            Self::Brute(set) => set.nearest(p),
        }
    }

    fn range(&self, rect: &RectHV) -> Vec<Point2D> {
        match self {
            Self::Tree(tree) => tree.range(rect),
            Self::Brute(set) => set.range(rect),
        }
    }
}

fn cmd_points(path: &Path, brute: bool, query: &PointsQuery, json: bool) -> Result<()> {
    let points = parse_points(&read_input(path)?)?;
    let backend = PointBackend::build(&points, brute)?;

    match *query {
        PointsQuery::Nearest { x, y } => {
            let target = Point2D::new(x, y);
            let nearest = backend.nearest(target).context("no points to search")?;
            let report = NearestReport {
                query: (x, y),
                nearest: (nearest.x, nearest.y),
                distance: target.distance_to(nearest),
            };
            if json {
                return emit(&report);
            }
            println!("nearest: ({}, {})", report.nearest.0, report.nearest.1);
            println!("distance: {}", report.distance);
        }
        PointsQuery::Range {
            x_min,
            y_min,
            x_max,
            y_max,
        } => {
            if x_min > x_max || y_min > y_max {
                anyhow::bail!(
                    "empty rectangle: ({x_min}, {y_min}) must lie below and left of ({x_max}, {y_max})"
                );
            }
            let rect = RectHV::new(x_min, y_min, x_max, y_max);
            let mut found = backend.range(&rect);
            found.sort_unstable();
            let report = RangeReport {
                rect: (x_min, y_min, x_max, y_max),
                count: found.len(),
                points: found.iter().map(|p| (p.x, p.y)).collect(),
            };
            if json {
                return emit(&report);
            }
            println!("{} points", report.count);
            for (x, y) in &report.points {
                println!("({x}, {y})");
            }
        }
    }
    Ok(())
}

fn load_wordnet(synsets: &Path, hypernyms: &Path) -> Result<WordNet> {
    let synsets_file =
        File::open(synsets).with_context(|| format!("failed to open {}", synsets.display()))?;
    let hypernyms_file =
        File::open(hypernyms).with_context(|| format!("failed to open {}", hypernyms.display()))?;
    let wordnet = WordNet::from_readers(
        BufReader::new(synsets_file),
        BufReader::new(hypernyms_file),
    )?;
    Ok(wordnet)
}

fn cmd_wordnet(
    synsets: Option<PathBuf>,
    hypernyms: Option<PathBuf>,
    query: WordnetQuery,
    config: &DsaConfig,
    json: bool,
) -> Result<()> {
    let synsets = synsets
        .or_else(|| config.wordnet.synsets.clone())
        .context("no synsets file: pass --synsets or set [wordnet] synsets in dsa.toml")?;
    let hypernyms = hypernyms
        .or_else(|| config.wordnet.hypernyms.clone())
        .context("no hypernyms file: pass --hypernyms or set [wordnet] hypernyms in dsa.toml")?;
    let wordnet = load_wordnet(&synsets, &hypernyms)?;

    match query {
        WordnetQuery::Distance { noun_a, noun_b } => {
            let distance = Sap::new(&wordnet).distance(&noun_a, &noun_b)?;
            let report = DistanceReport {
                noun_a,
                noun_b,
                distance,
            };
            if json {
                return emit(&report);
            }
            println!("distance: {}", report.distance);
        }
        WordnetQuery::Sap { noun_a, noun_b } => {
            let result = Sap::new(&wordnet).sap(&noun_a, &noun_b)?;
            let ancestor_nouns = wordnet
                .synset(result.ancestor)
                .map(|synset| synset.nouns.clone())
                .unwrap_or_default();
            let report = SapReport {
                noun_a,
                noun_b,
                length: result.length,
                ancestor: result.ancestor,
                ancestor_nouns,
                path: result.path,
            };
            if json {
                return emit(&report);
            }
            println!("length: {}", report.length);
            println!(
                "ancestor: {} ({})",
                report.ancestor,
                report.ancestor_nouns.join(" ")
            );
            println!("path: {}", join(&report.path, " "));
        }
        WordnetQuery::Outcast { nouns } => {
            let report = rank_outcast(&wordnet, &nouns)?;
            if json {
                return emit(&report);
            }
            for ranking in &report.rankings {
                println!("{}: {}", ranking.noun, ranking.distance_sum);
            }
            println!("outcast: {}", report.outcast);
        }
    }
    Ok(())
}

/// Ranks every candidate synset by its distance sum over the wordnet,
/// ticking a progress bar per synset. The largest sum wins; ties go to
/// the smallest synset id, matching [`Outcast`].
fn rank_outcast(wordnet: &WordNet, nouns: &[String]) -> Result<OutcastReport> {
    use indicatif::{ProgressBar, ProgressStyle};

    let outcast = Outcast::new(wordnet);
    let mut resolved: Vec<(&str, &[usize])> = Vec::with_capacity(nouns.len());
    for noun in nouns {
        resolved.push((noun.as_str(), wordnet.resolve(noun)?));
    }

    let total: usize = resolved.iter().map(|(_, synsets)| synsets.len()).sum();
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("  Ranking [{bar:30.cyan/blue}] {pos}/{len} synsets")
            .expect("valid template")
            .progress_chars("##-"),
    );

    let mut sums: BTreeMap<usize, usize> = BTreeMap::new();
    for (_, synsets) in &resolved {
        for &synset in *synsets {
            if !sums.contains_key(&synset)
                && let Some(sum) = outcast.distance_sum(synset)
            {
                sums.insert(synset, sum);
            }
            bar.inc(1);
        }
    }
    bar.finish_and_clear();

    let mut winner: Option<(usize, usize)> = None;
    for (&synset, &sum) in &sums {
        match winner {
            Some((_, top)) if top >= sum => {}
            _ => winner = Some((synset, sum)),
        }
    }
    let (winner, _) = winner.context("no common ancestor joins the candidates")?;

    let rankings = resolved
        .iter()
        .map(|(noun, synsets)| OutcastRanking {
            noun: (*noun).to_string(),
            distance_sum: synsets
                .iter()
                .filter_map(|synset| sums.get(synset).copied())
                .max()
                .unwrap_or(0),
        })
        .collect();
    let outcast_noun = resolved
        .iter()
        .find(|(_, synsets)| synsets.contains(&winner))
        .map(|(noun, _)| (*noun).to_string())
        .unwrap_or_default();

    Ok(OutcastReport {
        outcast: outcast_noun,
        synset: winner,
        rankings,
    })
}

fn resolve_format(requested: Option<&str>, config: &DsaConfig) -> Result<ExportFormat> {
    let name = requested.unwrap_or(config.export.format.as_str());
    match name {
        "dot" | "graphviz" => Ok(ExportFormat::Dot),
        "mermaid" | "md" => Ok(ExportFormat::Mermaid),
        _ => anyhow::bail!("Unknown export format: {name}. Use 'dot' or 'mermaid'."),
    }
}

fn cmd_export(
    path: &Path,
    format: Option<&str>,
    directed: bool,
    weighted: bool,
    config: &DsaConfig,
    json: bool,
) -> Result<()> {
    let format = resolve_format(format, config)?;
    let name = match format {
        ExportFormat::Dot => "dot",
        ExportFormat::Mermaid => "mermaid",
    };

    let document = if weighted {
        export::export_weighted(&parse_weighted(path)?, format)
    } else if directed {
        export::export_digraph(&parse_digraph(path)?, format)
    } else {
        export::export_graph(&parse_graph(path)?, format)
    };

    let report = ExportReport {
        format: name,
        document,
    };
    if json {
        return emit(&report);
    }
    print!("{}", report.document);
    Ok(())
}

fn cmd_save(
    path: &Path,
    out: PathBuf,
    compress: bool,
    directed: bool,
    weighted: bool,
    json: bool,
) -> Result<()> {
    let out = if compress && out.extension() != Some(OsStr::new("zst")) {
        let mut name = out.into_os_string();
        name.push(".zst");
        PathBuf::from(name)
    } else {
        out
    };

    let (vertices, edges) = if weighted {
        let graph = parse_weighted(path)?;
        storage::save_weighted(&graph, &out)?;
        (graph.v(), graph.e())
    } else if directed {
        let digraph = parse_digraph(path)?;
        storage::save_digraph(&digraph, &out)?;
        (digraph.v(), digraph.e())
    } else {
        let graph = parse_graph(path)?;
        storage::save_graph(&graph, &out)?;
        (graph.v(), graph.e())
    };

    let report = StorageReport {
        path: out.display().to_string(),
        vertices,
        edges,
        compressed: out.extension() == Some(OsStr::new("zst")),
    };
    if json {
        return emit(&report);
    }
    println!("Saved to: {}", report.path);
    println!("  Vertices: {}", report.vertices);
    println!("  Edges: {}", report.edges);
    Ok(())
}

fn cmd_load(path: &Path, directed: bool, weighted: bool, json: bool) -> Result<()> {
    let (vertices, edges) = if weighted {
        let graph = storage::load_weighted(path)?;
        (graph.v(), graph.e())
    } else if directed {
        let digraph = storage::load_digraph(path)?;
        (digraph.v(), digraph.e())
    } else {
        let graph = storage::load_graph(path)?;
        (graph.v(), graph.e())
    };

    let report = StorageReport {
        path: path.display().to_string(),
        vertices,
        edges,
        compressed: path.extension() == Some(OsStr::new("zst")),
    };
    if json {
        return emit(&report);
    }
    println!("Loaded from: {}", report.path);
    println!("  Vertices: {}", report.vertices);
    println!("  Edges: {}", report.edges);
    Ok(())
}
