use std::fmt::Debug;

/// Errors raised by the strict graph operations.
///
/// Queries on unknown nodes never error; only callers that opt into
/// "no cycles allowed" semantics, or an internal inconsistency during path
/// reconstruction, produce a [`GraphError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Topological ordering stalled on a cycle.
    #[error("cycle detected: ordered {ordered} of {total} nodes, blocked: {}", .blocked.join(", "))]
    CycleDetected {
        /// Number of nodes that were ordered before the cycle blocked progress.
        ordered: usize,
        /// Total number of nodes in the graph.
        total: usize,
        /// `Debug` renderings of the nodes that could not be ordered.
        blocked: Vec<String>,
    },

    /// Two consecutive nodes of a compressed path have no connecting edge.
    #[error("no edge from {from} to {to} while rebuilding a compressed path")]
    MissingEdge {
        /// `Debug` rendering of the source node.
        from: String,
        /// `Debug` rendering of the target node.
        to: String,
    },
}

impl GraphError {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::CycleDetected { .. } => "E2003",
            Self::MissingEdge { .. } => "E9001",
        }
    }

    /// Return `true` for errors that indicate a bug rather than bad input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::MissingEdge { .. })
    }

    pub(crate) fn missing_edge<N: Debug>(from: &N, to: &N) -> Self {
        Self::MissingEdge {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

/// Result alias for fallible graph operations.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_lists_blocked_nodes() {
        let err = GraphError::CycleDetected {
            ordered: 1,
            total: 4,
            blocked: vec!["\"B\"".into(), "\"C\"".into(), "\"D\"".into()],
        };
        assert_eq!(
            err.to_string(),
            r#"cycle detected: ordered 1 of 4 nodes, blocked: "B", "C", "D""#
        );
        assert_eq!(err.code(), "E2003");
        assert!(!err.is_internal());
    }

    #[test]
    fn missing_edge_is_internal() {
        let err = GraphError::missing_edge(&"x", &"y");
        assert_eq!(err.to_string(), r#"no edge from "x" to "y" while rebuilding a compressed path"#);
        assert_eq!(err.code(), "E9001");
        assert!(err.is_internal());
    }
}
