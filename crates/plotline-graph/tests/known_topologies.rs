//! Known-topology regression tests.
//!
//! Each test uses a hand-crafted graph whose paths, orderings, and traversal
//! properties can be worked out by hand. Expected values are hardcoded.

use std::collections::{HashMap, HashSet};
use std::ops::ControlFlow;

use plotline_graph::graph::find_cycles;
use plotline_graph::search::reachable_from;
use plotline_graph::sort::topological_layers;
use plotline_graph::{
    Bfs, Dfs, Edge, Graph, GraphBuilder, GraphStats, PathOptions, breadth_first,
    compress_by_shared_suffixes, compress_graph_paths_to_edge_paths, depth_first,
    enumerate_paths, expand_compressed, has_cycle, topological_sort, topological_sort_strict,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build_graph(edges: &[(&'static str, &'static str)]) -> Graph<&'static str> {
    edges.iter().map(|&(a, b)| Edge::unlabeled(a, b)).collect()
}

fn path_set(paths: impl IntoIterator<Item = Vec<&'static str>>) -> HashSet<Vec<&'static str>> {
    paths.into_iter().collect()
}

fn assert_topological(g: &Graph<&'static str>, order: &[&'static str]) {
    let position: HashMap<_, _> = order.iter().enumerate().map(|(i, n)| (*n, i)).collect();
    for edge in g.edges() {
        assert!(
            position[edge.from] < position[edge.to],
            "{} must precede {}",
            edge.from,
            edge.to
        );
    }
}

/// Route library logs to the test harness so cycle warnings show up with
/// `--nocapture`.
fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn stop_at_second() -> impl FnMut(&&'static str) -> ControlFlow<()> {
    let mut seen = 0;
    move |_| {
        seen += 1;
        if seen == 2 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

// ===========================================================================
// Topology 1: Diamond
//
//   A → B → D
//   A → C → D
// ===========================================================================

fn diamond() -> Graph<&'static str> {
    build_graph(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")])
}

#[test]
fn diamond_paths_to_explicit_terminal() {
    let g = diamond();
    let is_d = |n: &&str| *n == "D";
    let paths = enumerate_paths(&g, &"A", PathOptions::new().with_terminal(&is_d));
    assert_eq!(
        path_set(paths),
        path_set([vec!["A", "B", "D"], vec!["A", "C", "D"]])
    );
}

#[test]
fn diamond_compression_keeps_single_node_suffix() {
    let g = diamond();
    let paths: Vec<_> = enumerate_paths(&g, &"A", PathOptions::new()).collect();
    let compressed = compress_by_shared_suffixes(&paths);
    assert_eq!(compressed, paths, "shared suffix [D] is below the threshold");

    let restored = expand_compressed(&g, &compressed, PathOptions::new());
    assert_eq!(path_set(restored), path_set(paths));
}

#[test]
fn diamond_sort_respects_edges() {
    let g = diamond();
    let sort = topological_sort(&g);
    assert!(sort.is_acyclic);
    assert_eq!(sort.sorted_nodes.len(), 4);
    assert_topological(&g, &sort.sorted_nodes);
    assert_eq!(topological_layers(&g), vec![vec!["A"], vec!["B", "C"], vec!["D"]]);
}

// ===========================================================================
// Topology 2: Linear chain
//
//   A → B → C → D
// ===========================================================================

#[test]
fn chain_default_terminal_single_path() {
    let g = build_graph(&[("A", "B"), ("B", "C"), ("C", "D")]);
    let paths: Vec<_> = enumerate_paths(&g, &"A", PathOptions::new()).collect();
    assert_eq!(paths, vec![vec!["A", "B", "C", "D"]]);
    assert_eq!(topological_sort_strict(&g).expect("acyclic"), vec!["A", "B", "C", "D"]);
}

// ===========================================================================
// Topology 3: Diamond of diamonds (7 nodes)
//
//   start → a → c → end
//   start → a → d → end
//   start → b → c
// ===========================================================================

fn diamond_of_diamonds() -> Graph<&'static str> {
    Graph::from_edges(
        [
            Edge::unlabeled("start", "a"),
            Edge::unlabeled("start", "b"),
            Edge::unlabeled("a", "c"),
            Edge::unlabeled("a", "d"),
            Edge::unlabeled("b", "c"),
            Edge::unlabeled("c", "end"),
            Edge::unlabeled("d", "end"),
        ],
        ["unused"],
    )
}

#[test]
fn diamond_of_diamonds_has_three_paths() {
    let g = diamond_of_diamonds();
    assert_eq!(g.node_count(), 7);
    let is_end = |n: &&str| *n == "end";
    let paths: Vec<_> =
        enumerate_paths(&g, &"start", PathOptions::new().with_terminal(&is_end)).collect();
    assert_eq!(paths.len(), 3);
    assert_eq!(
        path_set(paths),
        path_set([
            vec!["start", "a", "c", "end"],
            vec!["start", "a", "d", "end"],
            vec!["start", "b", "c", "end"],
        ])
    );
}

#[test]
fn diamond_of_diamonds_depth_one() {
    let g = diamond_of_diamonds();
    let paths: Vec<_> =
        enumerate_paths(&g, &"start", PathOptions::new().with_max_depth(1)).collect();
    assert_eq!(paths.len(), 2);
    assert!(paths.iter().all(|p| p.len() == 2 && p[0] == "start"));
}

#[test]
fn diamond_of_diamonds_compresses_shared_tail() {
    init_logging();
    let g = diamond_of_diamonds();
    let paths: Vec<_> = enumerate_paths(&g, &"start", PathOptions::new()).collect();
    let compressed = compress_by_shared_suffixes(&paths);
    assert_eq!(
        compressed,
        vec![
            vec!["start", "a", "c", "end"],
            vec!["start", "a", "d", "end"],
            vec!["start", "b", "c"],
        ]
    );

    let edge_paths =
        compress_graph_paths_to_edge_paths(&g, &"start", PathOptions::new()).expect("rebuild");
    let lengths: Vec<usize> = edge_paths.iter().map(Vec::len).collect();
    assert_eq!(lengths, vec![3, 3, 2]);
    for path in &edge_paths {
        for pair in path.windows(2) {
            assert_eq!(pair[0].to, pair[1].from, "edge path must be contiguous");
        }
    }

    let restored = expand_compressed(&g, &compressed, PathOptions::new());
    assert_eq!(path_set(restored), path_set(paths));
}

#[test]
fn diamond_of_diamonds_stats() {
    let stats = GraphStats::from_graph(&diamond_of_diamonds());
    assert_eq!(stats.node_count, 7);
    assert_eq!(stats.edge_count, 7);
    assert_eq!(stats.source_count, 2);
    assert_eq!(stats.sink_count, 2);
    assert_eq!(stats.isolated_node_count, 1);
    assert_eq!(stats.max_in_degree, 2);
    assert_eq!(stats.weakly_connected_component_count, 2);
    assert!(stats.is_acyclic());
}

// ===========================================================================
// Topology 4: Three-cycle
//
//   A → B → C → A
// ===========================================================================

#[test]
fn three_cycle_detected() {
    init_logging();
    let g = build_graph(&[("A", "B"), ("B", "C"), ("C", "A")]);
    let sort = topological_sort(&g);
    assert!(!sort.is_acyclic);
    assert!(sort.sorted_nodes.is_empty());
    assert!(has_cycle(&g));
    assert_eq!(find_cycles(&g), vec![vec!["A", "B", "C"]]);
    assert!(topological_sort_strict(&g).is_err());
}

#[test]
fn three_cycle_traversal_terminates() {
    let g = build_graph(&[("A", "B"), ("B", "C"), ("C", "A")]);
    assert_eq!(Bfs::new(&g, [&"A"]).count(), 3);
    assert_eq!(Dfs::new(&g, [&"C"]).count(), 3);

    let paths: Vec<_> =
        enumerate_paths(&g, &"A", PathOptions::new().with_max_depth(4)).collect();
    assert_eq!(paths, vec![vec!["A", "B", "C", "A", "B"]]);
}

// ===========================================================================
// Degenerate graphs
// ===========================================================================

#[test]
fn empty_graph() {
    let g: Graph<&str> = GraphBuilder::new().build();
    let sort = topological_sort(&g);
    assert!(sort.is_acyclic);
    assert!(sort.sorted_nodes.is_empty());
    assert_eq!(has_cycle(&g), !sort.is_acyclic);
}

#[test]
fn single_isolated_node() {
    let mut builder = GraphBuilder::new();
    builder.add_node("solo");
    let g: Graph<&str> = builder.build();

    let sort = topological_sort(&g);
    assert!(sort.is_acyclic);
    assert_eq!(sort.sorted_nodes, vec!["solo"]);
    assert_eq!(has_cycle(&g), !sort.is_acyclic);

    let edge_paths =
        compress_graph_paths_to_edge_paths(&g, &"solo", PathOptions::new()).expect("rebuild");
    assert_eq!(edge_paths.len(), 1);
    assert!(edge_paths[0].is_empty());
}

// ===========================================================================
// Traversal contracts
// ===========================================================================

#[test]
fn bfs_discoverer_precedes_successors() {
    let g = diamond_of_diamonds();
    let order: Vec<_> = Bfs::new(&g, [&"start"]).copied().collect();
    assert_eq!(order[0], "start");
    assert_eq!(order.len(), 6);
    let position: HashMap<_, _> = order.iter().enumerate().map(|(i, n)| (*n, i)).collect();
    assert!(position["a"] < position["c"]);
    assert!(position["a"] < position["d"]);
    assert!(position["c"] < position["end"]);
}

#[test]
fn dfs_visits_start_first_and_each_node_once() {
    let g = diamond_of_diamonds();
    let order: Vec<_> = Dfs::new(&g, [&"start"]).copied().collect();
    assert_eq!(order[0], "start");
    let unique: HashSet<_> = order.iter().collect();
    assert_eq!(unique.len(), order.len());
    assert_eq!(unique.len(), reachable_from(&g, [&"start"]).len());
}

#[test]
fn early_stop_visits_exactly_two() {
    let g = diamond_of_diamonds();
    assert_eq!(breadth_first(&g, [&"start"], stop_at_second()), 2);
    assert_eq!(depth_first(&g, [&"start"], stop_at_second()), 2);
}

// ===========================================================================
// Labeled multigraph
// ===========================================================================

#[test]
fn multigraph_edge_paths_use_first_parallel_edge() {
    let g: Graph<u32, &str> = Graph::from_edges(
        [
            Edge::new(1, 2, "first"),
            Edge::new(1, 2, "second"),
            Edge::new(2, 3, "only"),
        ],
        [],
    );
    let paths: Vec<_> = enumerate_paths(&g, &1, PathOptions::new()).collect();
    assert_eq!(paths, vec![vec![1, 2, 3], vec![1, 2, 3]]);

    let edge_paths =
        compress_graph_paths_to_edge_paths(&g, &1, PathOptions::new()).expect("rebuild");
    assert_eq!(edge_paths.len(), 1);
    let labels: Vec<_> = edge_paths[0].iter().map(|e| e.label).collect();
    assert_eq!(labels, vec!["first", "only"]);
}
