//! adjgraph: an in-memory weighted graph engine.
//!
//! Vertices of any hashable label type own ordered lists of outgoing edges,
//! kept in an open-addressed hash table. The graph supports mutation,
//! depth-first and breadth-first traversal, and Dijkstra shortest paths, and
//! round-trips through a tab-separated text format.

pub mod cli;
pub mod format;
pub mod graph;
pub mod store;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{parse_label, GraphReader, GraphWriter};
pub use graph::{bfs_traverse, dfs_traverse, Graph, TraversalOrder};
pub use store::{OpenTable, Queue, Sequence, Stack};
pub use types::{Edge, EdgeRecord, GraphError, GraphResult, Label};
