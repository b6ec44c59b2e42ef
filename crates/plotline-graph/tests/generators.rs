use plotline_graph::{Edge, Graph};
use proptest::prelude::*;

/// Random DAG over nodes `0..n`: every edge points from a lower to a higher
/// node, so no cycle can form. All nodes are present even without edges.
pub fn arb_dag() -> impl Strategy<Value = Graph<u8>> {
    (1_u8..12).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..30).prop_map(move |pairs| {
            let edges = pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| Edge::unlabeled(a.min(b), a.max(b)));
            Graph::from_edges(edges, 0..n)
        })
    })
}

/// Random directed multigraph over nodes `0..n`; cycles and self-loops allowed.
pub fn arb_graph() -> impl Strategy<Value = Graph<u8>> {
    (1_u8..10).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..25).prop_map(move |pairs| {
            Graph::from_edges(
                pairs.into_iter().map(|(a, b)| Edge::unlabeled(a, b)),
                0..n,
            )
        })
    })
}
