//! Topological ordering and cycle detection (Kahn's algorithm).
//!
//! # Algorithm
//!
//! 1. Compute the in-degree of every node (parallel edges count separately).
//! 2. Seed a FIFO queue with the in-degree-zero nodes, in node insertion
//!    order.
//! 3. Pop a node, append it to the order, and decrement each successor's
//!    in-degree; successors that reach zero are queued.
//! 4. If every node was ordered the graph is acyclic. Otherwise the nodes
//!    left over sit on, or downstream of, a cycle.
//!
//! [`topological_sort`] reports a cycle through [`TopoSort::is_acyclic`]
//! and is the primary API. [`topological_sort_strict`] is a thin wrapper for
//! callers that treat any cycle as an input error.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Result of a topological sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopoSort<N> {
    /// `true` if every node could be ordered.
    pub is_acyclic: bool,
    /// Nodes in topological order.
    ///
    /// When `is_acyclic` is `false` this holds only the nodes ordered before
    /// a cycle blocked further progress.
    pub sorted_nodes: Vec<N>,
}

/// Order the nodes of `graph` so every edge points forward.
#[must_use]
#[instrument(skip_all, fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn topological_sort<N, L>(graph: &Graph<N, L>) -> TopoSort<N>
where
    N: Clone + Eq + Hash,
{
    let order = kahn_order(graph);
    let is_acyclic = order.len() == graph.node_count();
    if is_acyclic {
        debug!(ordered = order.len(), "topological sort complete");
    } else {
        warn!(
            ordered = order.len(),
            total = graph.node_count(),
            "topological sort blocked by a cycle"
        );
    }
    TopoSort {
        is_acyclic,
        sorted_nodes: order.into_iter().map(|id| graph.node_at(id).clone()).collect(),
    }
}

/// Return `true` if `graph` contains a cycle.
///
/// Always equal to `!topological_sort(graph).is_acyclic`.
#[must_use]
pub fn has_cycle<N, L>(graph: &Graph<N, L>) -> bool
where
    N: Eq + Hash,
{
    kahn_order(graph).len() != graph.node_count()
}

/// Order the nodes of `graph`, failing if it contains a cycle.
///
/// # Errors
///
/// Returns [`GraphError::CycleDetected`] listing the nodes that could not be
/// ordered.
pub fn topological_sort_strict<N, L>(graph: &Graph<N, L>) -> Result<Vec<N>>
where
    N: Clone + Eq + Hash + Debug,
{
    let order = kahn_order(graph);
    if order.len() == graph.node_count() {
        return Ok(order.into_iter().map(|id| graph.node_at(id).clone()).collect());
    }

    let mut ordered = vec![false; graph.node_count()];
    for &id in &order {
        ordered[id] = true;
    }
    let blocked = graph
        .nodes()
        .zip(&ordered)
        .filter(|&(_, &done)| !done)
        .map(|(node, _)| format!("{node:?}"))
        .collect();

    Err(GraphError::CycleDetected {
        ordered: order.len(),
        total: graph.node_count(),
        blocked,
    })
}

/// Group nodes into generations for parallel processing.
///
/// Layer 0 holds every in-degree-zero node; layer `k + 1` holds the nodes
/// whose last predecessor was released by layer `k`. Nodes inside one layer
/// have no edges between them. Nodes on or behind a cycle never appear.
#[must_use]
#[instrument(skip_all, fields(nodes = graph.node_count()))]
pub fn topological_layers<N, L>(graph: &Graph<N, L>) -> Vec<Vec<N>>
where
    N: Clone + Eq + Hash,
{
    let mut in_degree: Vec<usize> = (0..graph.node_count())
        .map(|id| graph.in_degree_at(id))
        .collect();
    let mut current: Vec<usize> = (0..graph.node_count())
        .filter(|&id| in_degree[id] == 0)
        .collect();

    let mut layers = Vec::new();
    while !current.is_empty() {
        let mut next = Vec::new();
        for &id in &current {
            for succ in graph.successor_ids(id) {
                in_degree[succ] -= 1;
                if in_degree[succ] == 0 {
                    next.push(succ);
                }
            }
        }
        layers.push(current.iter().map(|&id| graph.node_at(id).clone()).collect());
        current = next;
    }
    layers
}

/// Kahn's algorithm over dense node ids; returns the ordered ids.
fn kahn_order<N: Eq + Hash, L>(graph: &Graph<N, L>) -> Vec<usize> {
    let mut in_degree: Vec<usize> = (0..graph.node_count())
        .map(|id| graph.in_degree_at(id))
        .collect();
    let mut queue: VecDeque<usize> = (0..graph.node_count())
        .filter(|&id| in_degree[id] == 0)
        .collect();

    let mut order = Vec::with_capacity(graph.node_count());
    while let Some(id) = queue.pop_front() {
        order.push(id);
        for succ in graph.successor_ids(id) {
            in_degree[succ] -= 1;
            if in_degree[succ] == 0 {
                queue.push_back(succ);
            }
        }
    }
    order
}
