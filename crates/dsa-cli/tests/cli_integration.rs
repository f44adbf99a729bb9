//! Integration tests for the dsa binary's plumbing.
//! Tests the underlying library functions that the CLI commands invoke.

use dsa_core::union_find::{UnionFind, WeightedQuickUnion};
use dsa_graph::bfs::BreadthFirstPaths;
use dsa_graph::digraph::Digraph;
use dsa_graph::export::{self, ExportFormat};
use dsa_graph::graph::Graph;
use dsa_graph::sap::Sap;
use dsa_graph::storage;
use dsa_graph::wordnet::WordNet;
use dsa_search::kd_tree::KdTree;
use dsa_search::point::Point2D;
use dsa_search::point_set::PointSet;
use dsa_search::rect::RectHV;
use std::fs::File;
use std::io::BufReader;

#[test]
fn storage_roundtrip_through_files() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("tiny.json");
    let graph = Graph::with_edges(4, &[(0, 1), (1, 2), (2, 3)]);

    storage::save_graph(&graph, &path).unwrap();
    let loaded = storage::load_graph(&path).unwrap();
    assert_eq!(loaded.v(), 4);
    assert_eq!(loaded.e(), 3);
    assert_eq!(loaded.adj(1), &[0, 2]);
}

#[test]
fn compressed_storage_roundtrip() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("tiny.json.zst");
    let digraph = Digraph::with_edges(3, &[(0, 1), (1, 2)]);

    storage::save_digraph(&digraph, &path).unwrap();
    let loaded = storage::load_digraph(&path).unwrap();
    assert_eq!(loaded.v(), 3);
    assert_eq!(loaded.e(), 2);
    assert_eq!(loaded.adj(0), &[1]);
}

#[test]
fn wordnet_loads_from_files() {
    let tmp = tempfile::tempdir().unwrap();
    let synsets = tmp.path().join("synsets.csv");
    let hypernyms = tmp.path().join("hypernyms.csv");
    std::fs::write(
        &synsets,
        "0,root,the root\n1,branch,a branch\n2,leaf,a leaf\n",
    )
    .unwrap();
    std::fs::write(&hypernyms, "0\n1,0\n2,1\n").unwrap();

    let wordnet = WordNet::from_readers(
        BufReader::new(File::open(&synsets).unwrap()),
        BufReader::new(File::open(&hypernyms).unwrap()),
    )
    .unwrap();
    assert_eq!(wordnet.len(), 3);
    assert_eq!(Sap::new(&wordnet).distance("leaf", "root").unwrap(), 2);
}

#[test]
fn paths_over_a_text_graph() {
    let text = "6\n5\n0 1\n0 2\n1 3\n2 4\n4 5\n";
    let graph = Graph::from_reader(text.as_bytes()).unwrap();
    let paths = BreadthFirstPaths::new(&graph, 0);
    assert_eq!(paths.path_to(5), Some(vec![0, 2, 4, 5]));
    assert_eq!(paths.dist_to(5), Some(3));
}

#[test]
fn union_find_client_sequence() {
    // Ten elements, the classic union script.
    let pairs = [
        (4, 3),
        (3, 8),
        (6, 5),
        (9, 4),
        (2, 1),
        (8, 9),
        (5, 0),
        (7, 2),
        (6, 1),
        (1, 0),
        (6, 7),
    ];
    let mut uf = WeightedQuickUnion::new(10);
    let mut performed = 0;
    for (p, q) in pairs {
        if uf.connected(p, q) {
            continue;
        }
        uf.union(p, q);
        performed += 1;
    }
    assert_eq!(performed, 8);
    assert_eq!(uf.count(), 2);
    assert!(uf.connected(0, 7));
    assert!(!uf.connected(0, 9));
}

#[test]
fn sort_algorithms_agree() {
    let input = [5i64, 3, -8, 13, 0, 3, 21, -1, 7, 2];
    let mut expected = input.to_vec();
    expected.sort_unstable();

    let sorts: [fn(&mut [i64]); 8] = [
        dsa_sort::elementary::selection_sort,
        dsa_sort::elementary::insertion_sort,
        dsa_sort::elementary::shell_sort,
        dsa_sort::merge::merge_sort,
        dsa_sort::merge::bottom_up_merge_sort,
        dsa_sort::quick::quick_sort,
        dsa_sort::quick::three_way_quick_sort,
        dsa_sort::heap::heap_sort,
    ];
    for sort in sorts {
        let mut values = input.to_vec();
        sort(&mut values);
        assert_eq!(values, expected);
    }
}

#[test]
fn point_backends_agree() {
    let coords = [(0.1, 0.2), (0.7, 0.7), (0.5, 0.4), (0.2, 0.9)];
    let mut tree = KdTree::new();
    let mut set = PointSet::new();
    for (x, y) in coords {
        tree.insert(Point2D::new(x, y));
        set.insert(Point2D::new(x, y));
    }

    let query = Point2D::new(0.6, 0.5);
    assert_eq!(tree.nearest(query), set.nearest(query));
    assert_eq!(tree.nearest(query), Some(Point2D::new(0.5, 0.4)));

    let rect = RectHV::new(0.0, 0.0, 0.55, 0.95);
    let mut from_tree = tree.range(&rect);
    from_tree.sort_unstable();
    assert_eq!(from_tree, set.range(&rect));
    assert_eq!(from_tree.len(), 3);
}

#[test]
fn evaluator_handles_the_classic_expression() {
    let value = dsa_core::evaluator::evaluate("( 1 + ( ( 2 + 3 ) * ( 4 * 5 ) ) )").unwrap();
    assert_eq!(value, 101);
}

#[test]
fn export_renders_both_formats() {
    let graph = Graph::with_edges(2, &[(0, 1)]);

    let dot = export::export_graph(&graph, ExportFormat::Dot);
    assert!(dot.starts_with("graph {"));
    assert!(dot.contains("0 -- 1;"));

    let mermaid = export::export_graph(&graph, ExportFormat::Mermaid);
    assert!(mermaid.starts_with("graph LR"));
    assert!(mermaid.contains("0 --- 1"));
}
