//! In-memory graph operations: the core data structure and its algorithms.

pub mod adjacency;
pub mod shortest_path;
pub mod traversal;

pub use adjacency::Graph;
pub use traversal::{bfs_traverse, dfs_traverse, TraversalOrder};
