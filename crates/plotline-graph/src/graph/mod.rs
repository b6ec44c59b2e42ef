//! Directed multigraph container and its adjacency queries.
//!
//! # Overview
//!
//! [`Graph`] is the immutable query surface every algorithm in this crate
//! runs against. It is produced either by [`Graph::from_edges`] (one-shot
//! batch construction) or by finishing a [`GraphBuilder`] (incremental
//! construction). Once built, a graph is never mutated in place, so it can
//! be shared across threads for concurrent reads when `N` and `L` allow it.
//!
//! ## Storage
//!
//! ```text
//! nodes:     [N]                   insertion order, index = dense node id
//! node_map:  N -> node id
//! edges:     [Edge<N, L>]          insertion order, index = dense edge id
//! outgoing:  node id -> [edge id]  appended as edges arrive
//! incoming:  node id -> [edge id]
//! ```
//!
//! Adjacency lists keep edge insertion order, so successors are reported in
//! the order their edges were added.
//!
//! ## Leniency
//!
//! Every query on a node that is not in the graph returns an empty iterator
//! or zero. Algorithms never need to check membership before asking.
//!
//! ## Pipeline
//!
//! ```text
//! edges + extra nodes
//!        ↓  Graph::from_edges() / GraphBuilder::build()
//! Graph (possibly cyclic multigraph)
//!        ├─ sort::topological_sort()      ordering + cycle flag
//!        ├─ search::Bfs / search::Dfs     reachability
//!        └─ paths::enumerate_paths()      root → terminal paths
//!               ↓  paths::compress_by_shared_suffixes()
//!           compressed node paths
//!               ↓  paths::compress_graph_paths_to_edge_paths()
//!           edge paths
//! ```

pub mod build;
pub mod cycles;
pub mod stats;

use std::collections::HashMap;
use std::hash::Hash;

use petgraph::graph::DiGraph;

use crate::edge::Edge;

pub use build::GraphBuilder;
pub use cycles::{find_cycles, would_create_cycle};
pub use stats::GraphStats;

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A directed multigraph over opaque node keys with labeled edges.
///
/// Nodes are identified by value (`N: Eq + Hash`). Edge labels are carried
/// as metadata and never affect structure. Parallel edges and self-loops are
/// kept as given.
#[derive(Debug, Clone)]
pub struct Graph<N, L = ()> {
    /// Nodes in insertion order. Position is the node id.
    nodes: Vec<N>,
    /// Mapping from node key to node id.
    node_map: HashMap<N, usize>,
    /// Edges in insertion order. Position is the edge id.
    edges: Vec<Edge<N, L>>,
    /// `(from id, to id)` for every edge, parallel to `edges`.
    ends: Vec<(usize, usize)>,
    /// Outgoing edge ids per node id.
    outgoing: Vec<Vec<usize>>,
    /// Incoming edge ids per node id.
    incoming: Vec<Vec<usize>>,
}

impl<N, L> Default for Graph<N, L> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            node_map: HashMap::new(),
            edges: Vec::new(),
            ends: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }
}

impl<N: Eq + Hash, L> Graph<N, L> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Return the number of edges, counting parallel edges separately.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Return `true` if the graph has no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate all nodes.
    ///
    /// Nodes come out in insertion order, but callers should treat the
    /// collection as a set.
    pub fn nodes(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    /// Iterate all edges in insertion order.
    pub fn edges(&self) -> std::slice::Iter<'_, Edge<N, L>> {
        self.edges.iter()
    }

    /// Return `true` if `node` is a member of the graph.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.node_map.contains_key(node)
    }

    /// Edges leaving `node`, in insertion order. Empty for unknown nodes.
    #[must_use]
    pub fn outgoing_edges(&self, node: &N) -> Edges<'_, N, L> {
        let ids = self
            .index_of(node)
            .map_or(&[][..], |idx| self.outgoing[idx].as_slice());
        Edges::new(&self.edges, ids)
    }

    /// Edges entering `node`, in insertion order. Empty for unknown nodes.
    #[must_use]
    pub fn incoming_edges(&self, node: &N) -> Edges<'_, N, L> {
        let ids = self
            .index_of(node)
            .map_or(&[][..], |idx| self.incoming[idx].as_slice());
        Edges::new(&self.edges, ids)
    }

    /// Targets of the edges leaving `node`.
    ///
    /// A target appears once per edge, so parallel edges yield duplicates.
    #[must_use]
    pub fn successors(&self, node: &N) -> Successors<'_, N, L> {
        Successors(self.outgoing_edges(node))
    }

    /// Sources of the edges entering `node`, duplicates included.
    #[must_use]
    pub fn predecessors(&self, node: &N) -> Predecessors<'_, N, L> {
        Predecessors(self.incoming_edges(node))
    }

    /// Number of edges leaving `node`; 0 for unknown nodes.
    #[must_use]
    pub fn out_degree(&self, node: &N) -> usize {
        self.index_of(node).map_or(0, |idx| self.outgoing[idx].len())
    }

    /// Number of edges entering `node`; 0 for unknown nodes.
    #[must_use]
    pub fn in_degree(&self, node: &N) -> usize {
        self.index_of(node).map_or(0, |idx| self.incoming[idx].len())
    }

    /// Nodes with no incoming edges, in insertion order.
    pub fn sources(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes
            .iter()
            .zip(&self.incoming)
            .filter(|(_, ids)| ids.is_empty())
            .map(|(node, _)| node)
    }

    /// Nodes with no outgoing edges, in insertion order.
    pub fn sinks(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes
            .iter()
            .zip(&self.outgoing)
            .filter(|(_, ids)| ids.is_empty())
            .map(|(node, _)| node)
    }

    /// Return the first edge (in insertion order) from `from` to `to`.
    #[must_use]
    pub fn find_edge(&self, from: &N, to: &N) -> Option<&Edge<N, L>> {
        let to_idx = self.index_of(to)?;
        let from_idx = self.index_of(from)?;
        self.outgoing[from_idx]
            .iter()
            .find(|&&id| self.ends[id].1 == to_idx)
            .map(|&id| &self.edges[id])
    }

    /// Copy the graph into a petgraph [`DiGraph`].
    ///
    /// Node `i` of the result is the `i`-th node of [`Graph::nodes`], and
    /// edges are added in insertion order.
    #[must_use]
    pub fn to_petgraph(&self) -> DiGraph<N, L>
    where
        N: Clone,
        L: Clone,
    {
        let mut out = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let indices: Vec<_> = self.nodes.iter().map(|n| out.add_node(n.clone())).collect();
        for (edge, &(from, to)) in self.edges.iter().zip(&self.ends) {
            out.add_edge(indices[from], indices[to], edge.label.clone());
        }
        out
    }

    // -----------------------------------------------------------------------
    // Dense-id access used by the algorithms
    // -----------------------------------------------------------------------

    pub(crate) fn index_of(&self, node: &N) -> Option<usize> {
        self.node_map.get(node).copied()
    }

    pub(crate) fn node_at(&self, idx: usize) -> &N {
        &self.nodes[idx]
    }

    pub(crate) fn successor_ids(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.outgoing[idx].iter().map(|&id| self.ends[id].1)
    }

    pub(crate) fn in_degree_at(&self, idx: usize) -> usize {
        self.incoming[idx].len()
    }

    /// Structure-only petgraph view: node weight is the dense node id.
    pub(crate) fn id_digraph(&self) -> DiGraph<usize, ()> {
        let mut out = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let indices: Vec<_> = (0..self.nodes.len()).map(|i| out.add_node(i)).collect();
        for &(from, to) in &self.ends {
            out.add_edge(indices[from], indices[to], ());
        }
        out
    }
}

impl<N: Clone + Eq + Hash, L> Graph<N, L> {
    /// Insert `node` if absent and return its id.
    pub(crate) fn insert_node(&mut self, node: &N) -> usize {
        self.index_of(node)
            .unwrap_or_else(|| self.push_node(node.clone()))
    }

    /// Append `node` as a new node. The caller checks it is absent.
    pub(crate) fn push_node(&mut self, node: N) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(node.clone());
        self.node_map.insert(node, idx);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        idx
    }

    /// Append `edge`, inserting its endpoints first. No deduplication.
    pub(crate) fn insert_edge(&mut self, edge: Edge<N, L>) {
        let from = self.insert_node(&edge.from);
        let to = self.insert_node(&edge.to);
        let id = self.edges.len();
        self.edges.push(edge);
        self.ends.push((from, to));
        self.outgoing[from].push(id);
        self.incoming[to].push(id);
    }
}

// ---------------------------------------------------------------------------
// Borrowed adjacency iterators
// ---------------------------------------------------------------------------

/// Iterator over a node's incident edges.
pub struct Edges<'a, N, L> {
    edges: &'a [Edge<N, L>],
    ids: std::slice::Iter<'a, usize>,
}

impl<'a, N, L> Edges<'a, N, L> {
    fn new(edges: &'a [Edge<N, L>], ids: &'a [usize]) -> Self {
        Self {
            edges,
            ids: ids.iter(),
        }
    }
}

impl<N, L> Clone for Edges<'_, N, L> {
    fn clone(&self) -> Self {
        Self {
            edges: self.edges,
            ids: self.ids.clone(),
        }
    }
}

impl<'a, N, L> Iterator for Edges<'a, N, L> {
    type Item = &'a Edge<N, L>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| &self.edges[id])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<N, L> ExactSizeIterator for Edges<'_, N, L> {}

/// Lazy iterator over the targets of a node's outgoing edges.
pub struct Successors<'a, N, L>(Edges<'a, N, L>);

impl<N, L> Clone for Successors<'_, N, L> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, N, L> Iterator for Successors<'a, N, L> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|edge| &edge.to)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<N, L> ExactSizeIterator for Successors<'_, N, L> {}

/// Lazy iterator over the sources of a node's incoming edges.
pub struct Predecessors<'a, N, L>(Edges<'a, N, L>);

impl<'a, N, L> Iterator for Predecessors<'a, N, L> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|edge| &edge.from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<N, L> ExactSizeIterator for Predecessors<'_, N, L> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
