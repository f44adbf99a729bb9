use criterion::{Criterion, criterion_group, criterion_main};
use dsa_graph::bfs::BreadthFirstPaths;
use dsa_graph::cc::ConnectedComponents;
use dsa_graph::dfs::DepthFirstPaths;
use dsa_graph::digraph::Digraph;
use dsa_graph::directed_cycle::DirectedCycle;
use dsa_graph::edge::Edge;
use dsa_graph::ewgraph::EdgeWeightedGraph;
use dsa_graph::graph::Graph;
use dsa_graph::mst::{KruskalMst, LazyPrimMst};
use dsa_graph::scc::KosarajuSharirScc;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn random_graph(vertices: usize, edges: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = Graph::new(vertices);
    for _ in 0..edges {
        graph.add_edge(rng.gen_range(0..vertices), rng.gen_range(0..vertices));
    }
    graph
}

fn random_digraph(vertices: usize, edges: usize) -> Digraph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut digraph = Digraph::new(vertices);
    for _ in 0..edges {
        digraph.add_edge(rng.gen_range(0..vertices), rng.gen_range(0..vertices));
    }
    digraph
}

fn random_weighted(vertices: usize, edges: usize) -> EdgeWeightedGraph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = EdgeWeightedGraph::new(vertices);
    for _ in 0..edges {
        let v = rng.gen_range(0..vertices);
        let w = rng.gen_range(0..vertices);
        graph.add_edge(Edge::new(v, w, rng.r#gen::<f64>()));
    }
    graph
}

fn bench_undirected_1k(c: &mut Criterion) {
    let graph = random_graph(1_000, 4_000);

    c.bench_function("breadth_first_paths_1k", |b| {
        b.iter(|| BreadthFirstPaths::new(black_box(&graph), 0))
    });

    c.bench_function("depth_first_paths_1k", |b| {
        b.iter(|| DepthFirstPaths::new(black_box(&graph), 0))
    });

    c.bench_function("connected_components_1k", |b| {
        b.iter(|| ConnectedComponents::new(black_box(&graph)))
    });
}

fn bench_directed_1k(c: &mut Criterion) {
    let digraph = random_digraph(1_000, 4_000);

    c.bench_function("kosaraju_sharir_scc_1k", |b| {
        b.iter(|| KosarajuSharirScc::new(black_box(&digraph)))
    });

    c.bench_function("directed_cycle_1k", |b| {
        b.iter(|| DirectedCycle::new(black_box(&digraph)))
    });
}

fn bench_mst_512(c: &mut Criterion) {
    let graph = random_weighted(512, 2_048);

    c.bench_function("kruskal_mst_512", |b| {
        b.iter(|| KruskalMst::new(black_box(&graph)))
    });

    c.bench_function("lazy_prim_mst_512", |b| {
        b.iter(|| LazyPrimMst::new(black_box(&graph)))
    });
}

criterion_group!(
    benches,
    bench_undirected_1k,
    bench_directed_1k,
    bench_mst_512,
);
criterion_main!(benches);
