#![forbid(unsafe_code)]
//! plotline-graph library.
//!
//! Generic directed-graph algorithms for branching structures such as
//! narrative or decision graphs: construction, BFS/DFS traversal, Kahn
//! topological ordering with cycle detection, and enumeration of every
//! root-to-terminal path with lossless suffix compression.
//!
//! # Conventions
//!
//! - **Errors**: fallible operations return [`error::Result`] with a typed
//!   [`GraphError`]. Queries on unknown nodes never fail.
//! - **Logging**: Use `tracing` macros (`debug!`, `warn!`, `error!`, `trace!`).
//!   The library never installs a subscriber.
//! - **Concurrency**: build a [`Graph`] once, then share it freely for reads.
//!   Only [`GraphBuilder`] mutates.
//!
//! # Example
//!
//! ```
//! use plotline_graph::{Edge, Graph, PathOptions, compress_graph_paths_to_edge_paths, has_cycle};
//!
//! let g: Graph<&str, &str> = Graph::from_edges(
//!     [
//!         Edge::new("intro", "left", "go left"),
//!         Edge::new("intro", "right", "go right"),
//!         Edge::new("left", "bridge", "cross"),
//!         Edge::new("right", "bridge", "cross"),
//!         Edge::new("bridge", "finale", "arrive"),
//!     ],
//!     [],
//! );
//! assert!(!has_cycle(&g));
//!
//! let paths = compress_graph_paths_to_edge_paths(&g, &"intro", PathOptions::new())?;
//! assert_eq!(paths.len(), 2);
//! assert_eq!(paths[1].len(), 2); // intro → right → bridge; the rest is shared
//! # Ok::<(), plotline_graph::GraphError>(())
//! ```

pub mod edge;
pub mod error;
pub mod graph;
pub mod paths;
pub mod search;
pub mod sort;

pub use edge::Edge;
pub use error::GraphError;
pub use graph::{Graph, GraphBuilder, GraphStats};
pub use paths::{
    EdgePath, NodePath, PathLimits, PathOptions, compress_by_shared_suffixes,
    compress_graph_paths_to_edge_paths, enumerate_paths, expand_compressed,
};
pub use search::{Bfs, Dfs, breadth_first, depth_first};
pub use sort::{TopoSort, has_cycle, topological_sort, topological_sort_strict};
