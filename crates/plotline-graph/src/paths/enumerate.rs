//! Lazy depth-first enumeration of root-to-terminal paths.
//!
//! The walk keeps one frame per node on the current path. Each frame is a
//! borrowed [`Successors`] iterator that is advanced one step at a time, so
//! memory grows with path depth, never with graph size, and no recursion is
//! involved.
//!
//! On entering a node:
//!
//! - if it is terminal, or the path already has `max_depth` edges, the
//!   current path is emitted and the node is left again immediately;
//! - otherwise a frame for its successors is pushed.
//!
//! A frame whose iterator is exhausted is popped (backtrack). Non-terminal
//! dead ends therefore emit nothing.

use std::hash::Hash;
use std::iter::FusedIterator;

use tracing::trace;

use crate::graph::{Graph, Successors};
use crate::paths::{NodePath, PathOptions};

/// Iterator over the paths from one start node. See [`enumerate_paths`].
pub struct Paths<'a, N, L> {
    graph: &'a Graph<N, L>,
    options: PathOptions<'a, N>,
    start: Option<N>,
    path: Vec<N>,
    frames: Vec<Successors<'a, N, L>>,
    emitted: usize,
}

/// Enumerate every path from `start` to a terminal node, depth first.
///
/// Paths are produced lazily; drop the iterator to cancel. A start node that
/// is itself terminal yields the one-node path `[start]`. With the default
/// predicate an unknown start node counts as a sink.
pub fn enumerate_paths<'a, N, L>(
    graph: &'a Graph<N, L>,
    start: &N,
    options: PathOptions<'a, N>,
) -> Paths<'a, N, L>
where
    N: Clone + Eq + Hash,
{
    Paths {
        graph,
        options,
        start: Some(start.clone()),
        path: Vec::new(),
        frames: Vec::new(),
        emitted: 0,
    }
}

impl<N: Clone + Eq + Hash, L> Paths<'_, N, L> {
    fn is_terminal(&self, node: &N) -> bool {
        self.options
            .terminal
            .map_or_else(|| self.graph.out_degree(node) == 0, |terminal| terminal(node))
    }

    /// Push `node` onto the path. Returns the finished path if `node` ends it.
    fn enter(&mut self, node: N) -> Option<NodePath<N>> {
        let depth = self.path.len();
        let at_limit = self.options.max_depth.is_some_and(|max| depth >= max);

        if at_limit || self.is_terminal(&node) {
            let mut done = Vec::with_capacity(depth + 1);
            done.extend_from_slice(&self.path);
            done.push(node);
            return Some(done);
        }

        let graph = self.graph;
        self.frames.push(graph.successors(&node));
        self.path.push(node);
        None
    }

    fn emit(&mut self, path: NodePath<N>) -> NodePath<N> {
        self.emitted += 1;
        trace!(len = path.len(), emitted = self.emitted, "path emitted");
        path
    }

    fn exhausted(&self) -> bool {
        self.options.max_paths.is_some_and(|max| self.emitted >= max)
    }
}

impl<N: Clone + Eq + Hash, L> Iterator for Paths<'_, N, L> {
    type Item = NodePath<N>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            return None;
        }

        if let Some(done) = self.start.take().and_then(|start| self.enter(start)) {
            return Some(self.emit(done));
        }

        loop {
            let Some(node) = self.frames.last_mut()?.next() else {
                self.frames.pop();
                self.path.pop();
                continue;
            };
            if let Some(done) = self.enter(node.clone()) {
                return Some(self.emit(done));
            }
        }
    }
}

impl<N: Clone + Eq + Hash, L> FusedIterator for Paths<'_, N, L> {}
