//! Inverse of suffix compression.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::{debug, instrument};

use crate::graph::Graph;
use crate::paths::{NodePath, PathOptions, enumerate_paths};

/// Re-attach the continuations that compression dropped.
///
/// Each compressed path is extended by enumerating from its last node with
/// the same terminal predicate, and with `max_depth` reduced by the edges
/// already walked. `max_paths` is ignored. The result is the deduplicated
/// union in first-seen order.
///
/// Given the output of [`crate::paths::compress_by_shared_suffixes`] over an
/// uncapped enumeration with the same `options`, the result contains exactly
/// the originally enumerated paths (duplicates from parallel edges collapse).
#[must_use]
#[instrument(skip_all, fields(compressed = compressed.len()))]
pub fn expand_compressed<N, L>(
    graph: &Graph<N, L>,
    compressed: &[NodePath<N>],
    options: PathOptions<'_, N>,
) -> Vec<NodePath<N>>
where
    N: Clone + Eq + Hash,
{
    let mut seen: HashSet<NodePath<N>> = HashSet::new();
    let mut expanded = Vec::new();

    for path in compressed {
        let Some((last, prefix)) = path.split_last() else {
            continue;
        };
        let continuation = PathOptions {
            terminal: options.terminal,
            max_depth: options.max_depth.map(|max| max.saturating_sub(prefix.len())),
            max_paths: None,
        };
        for tail in enumerate_paths(graph, last, continuation) {
            let mut full = Vec::with_capacity(prefix.len() + tail.len());
            full.extend_from_slice(prefix);
            full.extend(tail);
            if seen.insert(full.clone()) {
                expanded.push(full);
            }
        }
    }

    debug!(expanded = expanded.len(), "compressed paths expanded");
    expanded
}
