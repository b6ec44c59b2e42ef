//! Summary statistics for a graph.
//!
//! # Statistics Provided
//!
//! - **`node_count`** / **`edge_count`**: sizes, with parallel edges counted
//!   separately.
//! - **`density`**: `edge_count / (node_count * (node_count - 1))`. Zero for
//!   graphs with fewer than two nodes. Multigraphs can exceed 1.0.
//! - **`source_count`** / **`sink_count`**: nodes with in-degree 0 / out-degree 0.
//!   For narrative graphs these are the candidate roots and endings.
//! - **`isolated_node_count`**: nodes with no edges at all.
//! - **`max_in_degree`** / **`max_out_degree`**: busiest join and branch point.
//! - **`weakly_connected_component_count`**: disjoint sub-graphs when edge
//!   direction is ignored.
//! - **`cycle_count`**: strongly connected components containing a cycle.

use std::hash::Hash;

use petgraph::algo::connected_components;
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, cycles::find_cycles};

/// Summary statistics for a [`Graph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges, parallel edges included.
    pub edge_count: usize,
    /// `edge_count / (node_count * (node_count - 1))`.
    pub density: f64,
    /// Nodes with no incoming edges.
    pub source_count: usize,
    /// Nodes with no outgoing edges.
    pub sink_count: usize,
    /// Nodes with neither incoming nor outgoing edges.
    pub isolated_node_count: usize,
    /// Highest in-degree.
    pub max_in_degree: usize,
    /// Highest out-degree.
    pub max_out_degree: usize,
    /// Number of weakly connected components.
    pub weakly_connected_component_count: usize,
    /// Number of strongly connected components that contain a cycle.
    pub cycle_count: usize,
}

impl GraphStats {
    /// Compute statistics for `graph`.
    #[must_use]
    pub fn from_graph<N: Clone + Eq + Hash, L>(graph: &Graph<N, L>) -> Self {
        let node_count = graph.node_count();
        let edge_count = graph.edge_count();

        let mut source_count = 0;
        let mut sink_count = 0;
        let mut isolated_node_count = 0;
        let mut max_in_degree = 0;
        let mut max_out_degree = 0;

        for node in graph.nodes() {
            let in_degree = graph.in_degree(node);
            let out_degree = graph.out_degree(node);
            source_count += usize::from(in_degree == 0);
            sink_count += usize::from(out_degree == 0);
            isolated_node_count += usize::from(in_degree == 0 && out_degree == 0);
            max_in_degree = max_in_degree.max(in_degree);
            max_out_degree = max_out_degree.max(out_degree);
        }

        let weakly_connected_component_count = connected_components(&graph.id_digraph());
        let cycle_count = find_cycles(graph).len();

        Self {
            node_count,
            edge_count,
            density: compute_density(node_count, edge_count),
            source_count,
            sink_count,
            isolated_node_count,
            max_in_degree,
            max_out_degree,
            weakly_connected_component_count,
            cycle_count,
        }
    }

    /// Return `true` if the graph contains no cycle.
    #[must_use]
    pub const fn is_acyclic(&self) -> bool {
        self.cycle_count == 0
    }

    /// Return `true` if the graph has no edges.
    #[must_use]
    pub const fn is_flat(&self) -> bool {
        self.edge_count == 0
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0_f64;
    }
    let max_edges = (node_count * (node_count - 1)) as f64;
    edge_count as f64 / max_edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Edge;

    fn graph(edges: &[(&'static str, &'static str)], extra: &[&'static str]) -> Graph<&'static str> {
        Graph::from_edges(
            edges.iter().map(|&(a, b)| Edge::unlabeled(a, b)),
            extra.iter().copied(),
        )
    }

    #[test]
    fn empty_graph() {
        let stats = GraphStats::from_graph(&graph(&[], &[]));
        assert_eq!(stats.node_count, 0);
        assert_eq!(stats.weakly_connected_component_count, 0);
        assert!(stats.density.abs() < f64::EPSILON);
        assert!(stats.is_acyclic());
        assert!(stats.is_flat());
    }

    #[test]
    fn diamond_with_isolated_node() {
        let g = graph(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")], &["Z"]);
        let stats = GraphStats::from_graph(&g);
        assert_eq!(stats.node_count, 5);
        assert_eq!(stats.edge_count, 4);
        assert!((stats.density - 4.0 / 20.0).abs() < 1e-12);
        assert_eq!(stats.source_count, 2);
        assert_eq!(stats.sink_count, 2);
        assert_eq!(stats.isolated_node_count, 1);
        assert_eq!(stats.max_in_degree, 2);
        assert_eq!(stats.max_out_degree, 2);
        assert_eq!(stats.weakly_connected_component_count, 2);
        assert_eq!(stats.cycle_count, 0);
    }

    #[test]
    fn cycle_is_counted() {
        let stats = GraphStats::from_graph(&graph(&[("A", "B"), ("B", "C"), ("C", "A")], &[]));
        assert_eq!(stats.cycle_count, 1);
        assert!(!stats.is_acyclic());
        assert_eq!(stats.source_count, 0);
    }
}
