//! Shared types for the adjgraph library.

pub mod edge;
pub mod error;

use std::fmt::Debug;
use std::hash::Hash;

pub use edge::{Edge, EdgeRecord};
pub use error::{GraphError, GraphResult};

/// Bounds every vertex label must satisfy: equality, a deterministic hash,
/// cheap duplication into scratch tables, and a printable form for errors.
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Label for T {}

/// Header token for directed graphs in the text format.
pub const DIRECTED_HEADER: &str = "directed";

/// Header token for undirected graphs in the text format.
pub const UNDIRECTED_HEADER: &str = "undirected";
