#![no_main]

use libfuzzer_sys::fuzz_target;
use plotline_graph::{Edge, Graph, has_cycle, topological_sort};

fuzz_target!(|data: &[u8]| {
    let graph: Graph<u8> = data
        .chunks_exact(2)
        .map(|pair| Edge::unlabeled(pair[0], pair[1]))
        .collect();

    let sort = topological_sort(&graph);
    assert_eq!(has_cycle(&graph), !sort.is_acyclic);
    assert!(sort.sorted_nodes.len() <= graph.node_count());
    if sort.is_acyclic {
        assert_eq!(sort.sorted_nodes.len(), graph.node_count());
    }
});
