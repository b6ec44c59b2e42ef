//! Suffix compression of enumerated paths.
//!
//! # Overview
//!
//! When branches converge, many enumerated paths end in the same tail:
//!
//! ```text
//! [A, B, X, Y, Z]
//! [A, C, X, Y, Z]      shares [X, Y, Z] with the first path
//! ```
//!
//! The second path only needs to be stored up to `X`: from there its
//! continuation is whatever the graph offers after `X`, and the first path
//! already covers it. Compression truncates such paths to `[A, C, X]`.
//!
//! # Algorithm
//!
//! 1. Every path starts with a keep length equal to its full length.
//! 2. Paths are inserted **reversed** (last node first) into a trie, so the
//!    trie indexes suffixes. The first path to create a trie node owns it.
//! 3. When path `i` walks into a trie node owned by an earlier path `o`, the
//!    two share a suffix of `depth` nodes starting at position `j` of path
//!    `i`. If their prefixes up to and including `j` differ, and
//!    `2 <= depth < len(i)`, path `i` is shrunk to keep `j + 1` nodes.
//! 4. Paths are truncated to their keep length, empty results are dropped,
//!    and exact duplicates are removed, keeping first-seen order.
//!
//! A one-node shared suffix (typically a common ending) is not worth a
//! truncation and is left alone.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use tracing::{debug, instrument, trace};

use crate::paths::NodePath;

/// Shortest shared suffix (in nodes) that triggers a truncation.
const MIN_SHARED_SUFFIX: usize = 2;

// ---------------------------------------------------------------------------
// Reverse trie
// ---------------------------------------------------------------------------

const ROOT: usize = 0;
const NO_OWNER: usize = usize::MAX;

/// Arena trie keyed by `(parent trie node, path node)`.
struct SuffixTrie<'p, N> {
    children: HashMap<(usize, &'p N), usize>,
    owners: Vec<usize>,
}

impl<'p, N: Eq + Hash> SuffixTrie<'p, N> {
    fn with_capacity(capacity: usize) -> Self {
        let mut owners = Vec::with_capacity(capacity + 1);
        owners.push(NO_OWNER);
        Self {
            children: HashMap::with_capacity(capacity),
            owners,
        }
    }

    /// Follow (or create) the child of `parent` labeled `key`.
    ///
    /// Returns the child and the path that owns it. A freshly created child
    /// is owned by `path`.
    fn step(&mut self, parent: usize, key: &'p N, path: usize) -> (usize, usize) {
        let owners = &mut self.owners;
        let child = *self.children.entry((parent, key)).or_insert_with(|| {
            owners.push(path);
            owners.len() - 1
        });
        (child, self.owners[child])
    }
}

// ---------------------------------------------------------------------------
// Compression
// ---------------------------------------------------------------------------

/// Drop redundant path prefixes that end in an already-seen suffix.
///
/// The output is a deduplicated subset of the (possibly truncated) input
/// paths in first-seen order. Every input path is recoverable from the
/// output by continuing each output path from its last node through the
/// graph the paths came from (see [`crate::paths::expand_compressed`]).
#[must_use]
#[instrument(skip_all, fields(paths = paths.len()))]
pub fn compress_by_shared_suffixes<N>(paths: &[NodePath<N>]) -> Vec<NodePath<N>>
where
    N: Clone + Eq + Hash,
{
    let mut keep: Vec<usize> = paths.iter().map(Vec::len).collect();
    let total_nodes: usize = keep.iter().sum();
    let mut trie = SuffixTrie::with_capacity(total_nodes);

    for (i, path) in paths.iter().enumerate() {
        let mut cursor = ROOT;
        for j in (0..path.len()).rev() {
            let (child, owner) = trie.step(cursor, &path[j], i);
            cursor = child;
            if owner == i {
                continue;
            }

            let depth = path.len() - j;
            if depth < MIN_SHARED_SUFFIX || depth >= path.len() {
                continue;
            }
            let other = &paths[owner];
            let other_j = other.len() - depth;
            if path[..=j] != other[..=other_j] && j + 1 < keep[i] {
                trace!(path = i, owner, depth, keep = j + 1, "shared suffix found");
                keep[i] = j + 1;
            }
        }
    }

    let mut seen: HashSet<&[N]> = HashSet::with_capacity(paths.len());
    let mut compressed = Vec::with_capacity(paths.len());
    let mut truncated = 0_usize;
    for (path, &len) in paths.iter().zip(&keep) {
        let kept = &path[..len];
        if kept.is_empty() {
            continue;
        }
        truncated += usize::from(len < path.len());
        if seen.insert(kept) {
            compressed.push(kept.to_vec());
        }
    }

    debug!(
        input = paths.len(),
        output = compressed.len(),
        truncated,
        "paths compressed"
    );
    compressed
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
