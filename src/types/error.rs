//! Error types for the adjgraph library.

use thiserror::Error;

/// All errors that can occur in the adjgraph library.
///
/// Vertex labels are carried as their `Debug` rendering so that the error
/// type stays independent of the label type.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex is already present in the graph.
    #[error("Vertex {0} already exists")]
    VertexAlreadyExists(String),

    /// Vertex is not present in the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// An edge between the two vertices already exists.
    #[error("Edge {from} -> {to} already exists")]
    DuplicateEdge { from: String, to: String },

    /// No edge between the two vertices.
    #[error("Edge {from} -> {to} not found")]
    EdgeNotFound { from: String, to: String },

    /// Edge weight below zero.
    #[error("Edge weight cannot be negative: {0}")]
    NegativeWeight(i64),

    /// Edge weight text is not an integer.
    #[error("Edge weight must be an integer: {0:?}")]
    InvalidWeight(String),

    /// Goal is unreachable from start.
    #[error("No path from {from} to {to}")]
    NoPathExists { from: String, to: String },

    /// Consecutive path vertices are not joined by an edge.
    #[error("Path step {from} -> {to} has no matching edge")]
    EdgeNotFoundOnPath { from: String, to: String },

    /// Path total does not fit in a `u64`.
    #[error("Path weight exceeds {}", u64::MAX)]
    WeightOverflow,

    /// Key lookup through the failing variant found nothing.
    #[error("Key not found")]
    KeyNotFound,

    /// Key is not acceptable to the store.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// No free slot in a full probe cycle.
    #[error("Hash table capacity exhausted ({0} slots)")]
    CapacityExhausted(usize),

    /// Index outside the bounds of a sequence.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Pop or dequeue on an empty container.
    #[error("Container is empty")]
    EmptyContainer,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// First line of a graph file is not `directed` or `undirected`.
    #[error("Invalid graph header: {0:?}")]
    InvalidHeader(String),

    /// A graph file line could not be parsed.
    #[error("Malformed line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl GraphError {
    pub(crate) fn vertex_not_found(v: &impl std::fmt::Debug) -> Self {
        Self::VertexNotFound(format!("{v:?}"))
    }
}

/// Convenience result type for adjgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
