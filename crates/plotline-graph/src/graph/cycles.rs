//! Cycle reporting and incremental cycle checks.
//!
//! [`crate::sort::topological_sort`] only says *whether* a graph is cyclic.
//! The helpers here say *where*: [`find_cycles`] lists every strongly
//! connected component that contains a cycle, and [`would_create_cycle`]
//! checks a candidate edge before it is added.
//!
//! # Edge Direction
//!
//! Adding an edge `from → to` creates a cycle iff `from` is already
//! reachable from `to`.

use std::collections::VecDeque;
use std::hash::Hash;

use fixedbitset::FixedBitSet;
use petgraph::algo::tarjan_scc;
use tracing::instrument;

use crate::graph::Graph;

/// Find all cycles currently present in `graph`.
///
/// Each entry holds the members of one strongly connected component that
/// contains a cycle, in node insertion order. Self-loops are reported as a
/// one-element cycle. Components are ordered by their first member.
#[must_use]
#[instrument(skip_all, fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn find_cycles<N, L>(graph: &Graph<N, L>) -> Vec<Vec<N>>
where
    N: Clone + Eq + Hash,
{
    let structure = graph.id_digraph();

    let mut components: Vec<Vec<usize>> = tarjan_scc(&structure)
        .into_iter()
        .map(|component| {
            let mut ids: Vec<usize> = component.into_iter().map(|idx| structure[idx]).collect();
            ids.sort_unstable();
            ids
        })
        .filter(|ids| ids.len() > 1 || ids.first().is_some_and(|&id| has_self_loop(graph, id)))
        .collect();

    components.sort_unstable();
    components
        .into_iter()
        .map(|ids| ids.into_iter().map(|id| graph.node_at(id).clone()).collect())
        .collect()
}

/// Check whether adding `from → to` would introduce a cycle.
///
/// Returns the closing cycle as `from → to → … → from` when it would. A
/// self-edge returns `[from, from]`. Unknown endpoints cannot close a cycle
/// (apart from the self-edge case), so they return `None`.
#[must_use]
pub fn would_create_cycle<N, L>(graph: &Graph<N, L>, from: &N, to: &N) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash,
{
    if from == to {
        return Some(vec![from.clone(), from.clone()]);
    }

    let from_idx = graph.index_of(from)?;
    let to_idx = graph.index_of(to)?;

    // BFS from `to` looking for `from`, remembering how each node was reached.
    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    let mut parent: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::from([to_idx]);
    visited.insert(to_idx);

    while let Some(current) = queue.pop_front() {
        if current == from_idx {
            return Some(reconstruct_cycle_path(graph, from_idx, to_idx, &parent));
        }
        for next in graph.successor_ids(current) {
            if !visited.put(next) {
                parent[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    None
}

fn has_self_loop<N: Eq + Hash, L>(graph: &Graph<N, L>, id: usize) -> bool {
    graph.successor_ids(id).any(|next| next == id)
}

fn reconstruct_cycle_path<N: Clone + Eq + Hash, L>(
    graph: &Graph<N, L>,
    from: usize,
    to: usize,
    parent: &[Option<usize>],
) -> Vec<N> {
    // Parent links describe to → … → from; walk them back from `from`.
    let mut to_to_from = vec![from];
    let mut cursor = from;
    while cursor != to {
        match parent[cursor] {
            Some(prev) => {
                cursor = prev;
                to_to_from.push(cursor);
            }
            None => break,
        }
    }
    to_to_from.reverse();

    let mut cycle = Vec::with_capacity(to_to_from.len() + 1);
    cycle.push(graph.node_at(from).clone());
    cycle.extend(to_to_from.into_iter().map(|id| graph.node_at(id).clone()));
    cycle
}
