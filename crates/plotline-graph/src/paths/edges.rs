//! Turning node paths back into edge paths.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, error, instrument};

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::paths::{EdgePath, PathOptions, compress_by_shared_suffixes, enumerate_paths};

/// Rebuild the edges walked by `nodes`.
///
/// For each consecutive pair `(u, v)` the first outgoing edge of `u` (in
/// insertion order) that targets `v` is chosen. A one-node path maps to an
/// empty edge path.
///
/// # Errors
///
/// Returns [`GraphError::MissingEdge`] if some consecutive pair is not
/// connected in `graph`.
pub fn edge_path<'a, N, L>(graph: &'a Graph<N, L>, nodes: &[N]) -> Result<EdgePath<'a, N, L>>
where
    N: Eq + Hash + Debug,
{
    nodes
        .windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            graph.find_edge(from, to).ok_or_else(|| {
                error!(?from, ?to, "compressed path steps across a missing edge");
                GraphError::missing_edge(from, to)
            })
        })
        .collect()
}

/// Enumerate, compress, and convert the paths from `root` into edge paths.
///
/// Equivalent to [`enumerate_paths`] followed by
/// [`compress_by_shared_suffixes`] and [`edge_path`] on each result.
///
/// # Errors
///
/// Returns [`GraphError::MissingEdge`] if a compressed path cannot be mapped
/// back onto the graph. Compression only ever truncates enumerated paths,
/// so this indicates a bug rather than bad input.
#[instrument(skip_all, fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn compress_graph_paths_to_edge_paths<'a, N, L>(
    graph: &'a Graph<N, L>,
    root: &N,
    options: PathOptions<'_, N>,
) -> Result<Vec<EdgePath<'a, N, L>>>
where
    N: Clone + Eq + Hash + Debug,
{
    let paths: Vec<_> = enumerate_paths(graph, root, options).collect();
    let compressed = compress_by_shared_suffixes(&paths);
    let edge_paths = compressed
        .iter()
        .map(|nodes| edge_path(graph, nodes))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        enumerated = paths.len(),
        compressed = edge_paths.len(),
        "edge paths rebuilt"
    );
    Ok(edge_paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Edge;

    fn choices() -> Graph<&'static str, &'static str> {
        // intro ─┬─ left  ─┐
        //        └─ right ─┴─ bridge → finale
        Graph::from_edges(
            [
                Edge::new("intro", "left", "go left"),
                Edge::new("intro", "right", "go right"),
                Edge::new("left", "bridge", "cross"),
                Edge::new("right", "bridge", "cross"),
                Edge::new("bridge", "finale", "arrive"),
            ],
            [],
        )
    }

    fn labels(path: &EdgePath<'_, &'static str, &'static str>) -> Vec<&'static str> {
        path.iter().map(|e| e.label).collect()
    }

    #[test]
    fn edge_path_picks_first_parallel_edge() {
        let g = Graph::from_edges(
            [Edge::new("A", "B", 1), Edge::new("A", "B", 2), Edge::new("B", "C", 3)],
            [],
        );
        let edges = edge_path(&g, &["A", "B", "C"]).expect("connected");
        assert_eq!(edges.iter().map(|e| e.label).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn edge_path_rejects_gaps() {
        let g = choices();
        let err = edge_path(&g, &["intro", "finale"]).expect_err("no such edge");
        assert_eq!(err, GraphError::missing_edge(&"intro", &"finale"));
        assert!(err.is_internal());
    }

    #[test]
    fn converging_branches_compress() {
        let g = choices();
        let paths = compress_graph_paths_to_edge_paths(&g, &"intro", PathOptions::new())
            .expect("rebuild");
        assert_eq!(paths.len(), 2);
        assert_eq!(labels(&paths[0]), vec!["go left", "cross", "arrive"]);
        assert_eq!(labels(&paths[1]), vec!["go right", "cross"]);
    }

    #[test]
    fn lone_node_maps_to_empty_edge_path() {
        let g: Graph<&str, ()> = Graph::from_edges([], ["only"]);
        let paths = compress_graph_paths_to_edge_paths(&g, &"only", PathOptions::new())
            .expect("rebuild");
        assert_eq!(paths.len(), 1);
        assert!(paths[0].is_empty());
    }
}
