//! Directed, labeled edge value type.
//!
//! An [`Edge`] is an immutable `(from, to, label)` triple. The label is
//! metadata only: graph structure, traversal, and ordering never look at it.
//! Two edges with the same endpoints are distinct graph edges even when their
//! labels are equal (the graph is a multigraph).

use serde::{Deserialize, Serialize};

/// A directed edge `from → to` carrying an opaque `label`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<N, L = ()> {
    /// Source node.
    pub from: N,
    /// Target node.
    pub to: N,
    /// Edge metadata. Never used for structural decisions.
    pub label: L,
}

impl<N, L> Edge<N, L> {
    /// Create a labeled edge.
    #[must_use]
    pub const fn new(from: N, to: N, label: L) -> Self {
        Self { from, to, label }
    }

    /// Borrow the `(from, to)` endpoints.
    #[must_use]
    pub const fn endpoints(&self) -> (&N, &N) {
        (&self.from, &self.to)
    }

    /// Return `true` if the edge starts and ends on the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool
    where
        N: PartialEq,
    {
        self.from == self.to
    }
}

impl<N> Edge<N, ()> {
    /// Create an edge with the unit label.
    #[must_use]
    pub const fn unlabeled(from: N, to: N) -> Self {
        Self {
            from,
            to,
            label: (),
        }
    }
}

impl<N, L> From<(N, N, L)> for Edge<N, L> {
    fn from((from, to, label): (N, N, L)) -> Self {
        Self { from, to, label }
    }
}

impl<N> From<(N, N)> for Edge<N, ()> {
    fn from((from, to): (N, N)) -> Self {
        Self::unlabeled(from, to)
    }
}
