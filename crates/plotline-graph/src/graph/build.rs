//! Graph construction.
//!
//! # Overview
//!
//! Two construction styles produce the same immutable [`Graph`]:
//!
//! - **Batch**: [`Graph::from_edges`] takes an edge collection plus optional
//!   extra nodes (e.g. known endings with no outgoing transitions) and
//!   builds the graph in one pass.
//! - **Incremental**: [`GraphBuilder`] accepts nodes and edges one at a time
//!   and hands out the finished graph with [`GraphBuilder::build`].
//!
//! The builder owns the only mutable view of the adjacency indices. Finish
//! building before sharing the graph with readers; [`Graph::into_builder`]
//! reopens a graph that is no longer shared.
//!
//! ## Edge Handling
//!
//! Adding an edge implicitly adds both endpoints. Edges are never
//! deduplicated: repeating an identical edge adds a parallel edge.

use std::hash::Hash;

use tracing::{debug, instrument};

use crate::edge::Edge;
use crate::graph::Graph;

// ---------------------------------------------------------------------------
// GraphBuilder
// ---------------------------------------------------------------------------

/// Incremental, single-owner graph construction.
#[derive(Debug, Clone)]
pub struct GraphBuilder<N, L = ()> {
    graph: Graph<N, L>,
}

impl<N, L> Default for GraphBuilder<N, L> {
    fn default() -> Self {
        Self {
            graph: Graph::default(),
        }
    }
}

impl<N: Clone + Eq + Hash, L> GraphBuilder<N, L> {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) const fn from_graph(graph: Graph<N, L>) -> Self {
        Self { graph }
    }

    /// Add `node` with no edges. Adding an existing node is a no-op.
    pub fn add_node(&mut self, node: N) -> &mut Self {
        if !self.graph.contains_node(&node) {
            self.graph.push_node(node);
        }
        self
    }

    /// Add `edge`, inserting its endpoints if they are absent.
    pub fn add_edge(&mut self, edge: Edge<N, L>) -> &mut Self {
        self.graph.insert_edge(edge);
        self
    }

    /// Add every edge from `edges` in order.
    pub fn add_edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = Edge<N, L>>,
    {
        for edge in edges {
            self.graph.insert_edge(edge);
        }
        self
    }

    /// Return `true` if `node` has been added, directly or via an edge.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.graph.contains_node(node)
    }

    /// Number of nodes added so far.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges added so far.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Finish construction.
    #[must_use]
    pub fn build(self) -> Graph<N, L> {
        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "graph built"
        );
        self.graph
    }
}

impl<N: Clone + Eq + Hash, L> Extend<Edge<N, L>> for GraphBuilder<N, L> {
    fn extend<I: IntoIterator<Item = Edge<N, L>>>(&mut self, iter: I) {
        self.add_edges(iter);
    }
}

// ---------------------------------------------------------------------------
// Batch construction
// ---------------------------------------------------------------------------

impl<N: Clone + Eq + Hash, L> Graph<N, L> {
    /// Build a graph from `edges`, then add `extra_nodes` as isolated nodes.
    ///
    /// Extra nodes that already appear on an edge are left as they are.
    #[must_use]
    #[instrument(skip_all)]
    pub fn from_edges<E, X>(edges: E, extra_nodes: X) -> Self
    where
        E: IntoIterator<Item = Edge<N, L>>,
        X: IntoIterator<Item = N>,
    {
        let mut builder = GraphBuilder::new();
        builder.add_edges(edges);
        for node in extra_nodes {
            builder.add_node(node);
        }
        builder.build()
    }

    /// Reopen the graph for incremental mutation.
    #[must_use]
    pub const fn into_builder(self) -> GraphBuilder<N, L> {
        GraphBuilder::from_graph(self)
    }
}

impl<N: Clone + Eq + Hash, L> FromIterator<Edge<N, L>> for Graph<N, L> {
    fn from_iter<I: IntoIterator<Item = Edge<N, L>>>(iter: I) -> Self {
        Self::from_edges(iter, std::iter::empty())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
