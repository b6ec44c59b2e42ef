#![no_main]

use libfuzzer_sys::fuzz_target;
use plotline_graph::{
    Edge, Graph, PathOptions, compress_by_shared_suffixes, compress_graph_paths_to_edge_paths,
    enumerate_paths,
};

// Byte pairs become edges over 16 nodes. Depth and path count are capped so
// cyclic inputs still terminate quickly.
fuzz_target!(|data: &[u8]| {
    let edges = data
        .chunks_exact(2)
        .map(|pair| Edge::unlabeled(pair[0] % 16, pair[1] % 16));
    let graph: Graph<u8> = Graph::from_edges(edges, [0]);
    let options = PathOptions::new().with_max_depth(8).with_max_paths(2_000);

    let paths: Vec<Vec<u8>> = enumerate_paths(&graph, &0, options).collect();
    let compressed = compress_by_shared_suffixes(&paths);
    assert!(compressed.len() <= paths.len());

    let edge_paths = compress_graph_paths_to_edge_paths(&graph, &0, options)
        .expect("compressed paths always map back onto graph edges");
    assert_eq!(edge_paths.len(), compressed.len());
});
