//! Root-to-terminal path discovery and suffix compression.
//!
//! # Overview
//!
//! Branching graphs (choice trees, narrative graphs, workflow graphs) often
//! fan out and then converge onto shared downstream sequences. This module
//! enumerates every path from a root to a terminal node and then removes the
//! redundancy that convergence creates.
//!
//! ## Pipeline
//!
//! ```text
//! Graph + root
//!        ↓  enumerate_paths()                    lazy, iterative DFS
//! node paths  [A,B,X,Y,Z] [A,C,X,Y,Z] ...
//!        ↓  compress_by_shared_suffixes()        reverse trie
//! compressed  [A,B,X,Y,Z] [A,C,X] ...
//!        ↓  edge_path() per compressed path
//! edge paths  [A→B, B→X, X→Y, Y→Z] [A→C, C→X] ...
//! ```
//!
//! [`compress_graph_paths_to_edge_paths`] runs the whole pipeline.
//! [`expand_compressed`] inverts compression by re-walking the graph from
//! the last retained node of each compressed path.
//!
//! ## Termination
//!
//! Enumeration keeps no visited set. On a graph with a cycle reachable from
//! the root, callers must bound the walk with a terminal predicate that the
//! cycle cannot avoid, or with [`PathOptions::with_max_depth`]; otherwise
//! the iterator never ends. Consumers can always stop pulling early.

pub mod compress;
pub mod edges;
pub mod enumerate;
pub mod expand;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::edge::Edge;

pub use compress::compress_by_shared_suffixes;
pub use edges::{compress_graph_paths_to_edge_paths, edge_path};
pub use enumerate::{Paths, enumerate_paths};
pub use expand::expand_compressed;

/// An ordered sequence of nodes from a start node to a terminal node.
pub type NodePath<N> = Vec<N>;

/// The edges walked by a [`NodePath`], borrowed from the graph.
pub type EdgePath<'a, N, L> = Vec<&'a Edge<N, L>>;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Stored limits for path enumeration.
///
/// Plain data so a host application can keep it in its own configuration
/// file. Convert with [`PathOptions::from_limits`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathLimits {
    /// Maximum number of edges in an emitted path.
    /// Default: unbounded.
    pub max_depth: Option<usize>,
    /// Maximum number of paths emitted by one enumeration.
    /// Default: unbounded.
    pub max_paths: Option<usize>,
}

/// Options for [`enumerate_paths`] and the functions built on it.
///
/// `Copy`, so the same options can drive enumeration, compression and
/// expansion.
pub struct PathOptions<'a, N> {
    /// Stop predicate. `None` means "node has no outgoing edges".
    pub terminal: Option<&'a dyn Fn(&N) -> bool>,
    /// A path is emitted once it has this many edges.
    pub max_depth: Option<usize>,
    /// Enumeration ends after emitting this many paths.
    pub max_paths: Option<usize>,
}

impl<'a, N> PathOptions<'a, N> {
    /// Sink-terminal, unbounded options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            terminal: None,
            max_depth: None,
            max_paths: None,
        }
    }

    /// Options carrying the limits from `limits` and the default predicate.
    #[must_use]
    pub const fn from_limits(limits: &PathLimits) -> Self {
        Self {
            terminal: None,
            max_depth: limits.max_depth,
            max_paths: limits.max_paths,
        }
    }

    /// Use `terminal` to decide where paths end.
    #[must_use]
    pub fn with_terminal<F>(mut self, terminal: &'a F) -> Self
    where
        F: Fn(&N) -> bool,
    {
        self.terminal = Some(terminal);
        self
    }

    /// Emit paths once they reach `max_depth` edges.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Stop after `max_paths` paths.
    #[must_use]
    pub const fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = Some(max_paths);
        self
    }
}

impl<N> Clone for PathOptions<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for PathOptions<'_, N> {}

impl<N> Default for PathOptions<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for PathOptions<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathOptions")
            .field("terminal", &self.terminal.map_or("sinks", |_| "custom"))
            .field("max_depth", &self.max_depth)
            .field("max_paths", &self.max_paths)
            .finish()
    }
}
