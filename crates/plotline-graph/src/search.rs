//! Breadth-first and depth-first traversal.
//!
//! # Overview
//!
//! [`Bfs`] and [`Dfs`] are lazy iterators that report every node reachable
//! from a set of start nodes exactly once. Both are iterative (explicit
//! queue / stack, no recursion), so they stay correct on deep and cyclic
//! graphs. Stopping early is free: drop the iterator.
//!
//! [`breadth_first`] and [`depth_first`] wrap the iterators for callers that
//! prefer a visitor callback. The visitor returns [`ControlFlow::Break`] to
//! stop the walk immediately.
//!
//! # Start Nodes
//!
//! Start nodes are taken in caller order and duplicates are visited once. A
//! start node that is not in the graph is still reported to the caller, but
//! has no successors, so its branch of the walk ends there.
//!
//! # Ordering
//!
//! - BFS visits nodes in non-decreasing distance from the start set. A node
//!   is queued the first time it is discovered and never again.
//! - DFS pops nodes from a stack. Successors are pushed in insertion order,
//!   so the most recently added successor is explored first. A node is
//!   marked when it is popped; later copies on the stack are skipped.

use std::collections::VecDeque;
use std::hash::Hash;
use std::ops::ControlFlow;

use fixedbitset::FixedBitSet;
use tracing::{debug, instrument};

use crate::graph::Graph;

/// A traversal position: a graph node, or a start node the graph lacks.
#[derive(Debug)]
enum Cursor<'a, N> {
    Node(usize),
    Stray(&'a N),
}

// ---------------------------------------------------------------------------
// Bfs
// ---------------------------------------------------------------------------

/// Lazy breadth-first walk.
pub struct Bfs<'a, N, L> {
    graph: &'a Graph<N, L>,
    queue: VecDeque<Cursor<'a, N>>,
    discovered: FixedBitSet,
    strays: Vec<&'a N>,
}

impl<'a, N: Eq + Hash, L> Bfs<'a, N, L> {
    /// Start a walk from `starts`; all start nodes are queued up front.
    pub fn new<I>(graph: &'a Graph<N, L>, starts: I) -> Self
    where
        I: IntoIterator<Item = &'a N>,
    {
        let mut bfs = Self {
            graph,
            queue: VecDeque::new(),
            discovered: FixedBitSet::with_capacity(graph.node_count()),
            strays: Vec::new(),
        };
        for start in starts {
            match graph.index_of(start) {
                Some(idx) => {
                    if !bfs.discovered.put(idx) {
                        bfs.queue.push_back(Cursor::Node(idx));
                    }
                }
                None => {
                    if !bfs.strays.contains(&start) {
                        bfs.strays.push(start);
                        bfs.queue.push_back(Cursor::Stray(start));
                    }
                }
            }
        }
        bfs
    }
}

impl<'a, N: Eq + Hash, L> Iterator for Bfs<'a, N, L> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        match self.queue.pop_front()? {
            Cursor::Stray(node) => Some(node),
            Cursor::Node(idx) => {
                for next in self.graph.successor_ids(idx) {
                    if !self.discovered.put(next) {
                        self.queue.push_back(Cursor::Node(next));
                    }
                }
                Some(self.graph.node_at(idx))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Dfs
// ---------------------------------------------------------------------------

/// Lazy depth-first walk (preorder).
pub struct Dfs<'a, N, L> {
    graph: &'a Graph<N, L>,
    stack: Vec<Cursor<'a, N>>,
    visited: FixedBitSet,
    strays: Vec<&'a N>,
}

impl<'a, N: Eq + Hash, L> Dfs<'a, N, L> {
    /// Start a walk from `starts`; the first start node is visited first.
    pub fn new<I>(graph: &'a Graph<N, L>, starts: I) -> Self
    where
        I: IntoIterator<Item = &'a N>,
    {
        let mut stack: Vec<Cursor<'a, N>> = starts
            .into_iter()
            .map(|start| graph.index_of(start).map_or(Cursor::Stray(start), Cursor::Node))
            .collect();
        stack.reverse();
        Self {
            graph,
            stack,
            visited: FixedBitSet::with_capacity(graph.node_count()),
            strays: Vec::new(),
        }
    }
}

impl<'a, N: Eq + Hash, L> Iterator for Dfs<'a, N, L> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(cursor) = self.stack.pop() {
            match cursor {
                Cursor::Stray(node) => {
                    if !self.strays.contains(&node) {
                        self.strays.push(node);
                        return Some(node);
                    }
                }
                Cursor::Node(idx) => {
                    if self.visited.put(idx) {
                        continue;
                    }
                    let unvisited = self
                        .graph
                        .successor_ids(idx)
                        .filter(|&next| !self.visited.contains(next));
                    self.stack.extend(unvisited.map(Cursor::Node));
                    return Some(self.graph.node_at(idx));
                }
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Visitor wrappers
// ---------------------------------------------------------------------------

/// Walk breadth-first from `starts`, calling `visitor` on each node.
///
/// An unknown start node is passed to `visitor` once and ends its own branch;
/// the other starts are still walked.
///
/// Returns the number of nodes visited, including the one whose visit
/// returned [`ControlFlow::Break`].
#[instrument(skip_all, fields(nodes = graph.node_count()))]
pub fn breadth_first<'a, N, L, I, F>(graph: &'a Graph<N, L>, starts: I, visitor: F) -> usize
where
    N: Eq + Hash,
    I: IntoIterator<Item = &'a N>,
    F: FnMut(&'a N) -> ControlFlow<()>,
{
    drive(Bfs::new(graph, starts), visitor)
}

/// Walk depth-first from `starts`, calling `visitor` on each node.
///
/// Unknown start nodes are handled as in [`breadth_first`].
///
/// Returns the number of nodes visited, including the one whose visit
/// returned [`ControlFlow::Break`].
#[instrument(skip_all, fields(nodes = graph.node_count()))]
pub fn depth_first<'a, N, L, I, F>(graph: &'a Graph<N, L>, starts: I, visitor: F) -> usize
where
    N: Eq + Hash,
    I: IntoIterator<Item = &'a N>,
    F: FnMut(&'a N) -> ControlFlow<()>,
{
    drive(Dfs::new(graph, starts), visitor)
}

/// Collect every node reachable from `starts` (starts included), in BFS order.
#[must_use]
pub fn reachable_from<'a, N, L, I>(graph: &'a Graph<N, L>, starts: I) -> Vec<&'a N>
where
    N: Eq + Hash,
    I: IntoIterator<Item = &'a N>,
{
    Bfs::new(graph, starts).collect()
}

fn drive<'a, N: 'a, W, F>(walk: W, mut visitor: F) -> usize
where
    W: Iterator<Item = &'a N>,
    F: FnMut(&'a N) -> ControlFlow<()>,
{
    let mut visited = 0;
    for node in walk {
        visited += 1;
        if visitor(node).is_break() {
            debug!(visited, "traversal stopped by visitor");
            return visited;
        }
    }
    debug!(visited, "traversal exhausted");
    visited
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
