//! The weighted outgoing edge stored in adjacency sequences.

use serde::Serialize;

use super::error::{GraphError, GraphResult};

/// An outgoing edge: the destination vertex and a non-negative weight.
///
/// The source vertex is implied by the adjacency sequence holding the edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<V> {
    /// Destination vertex.
    #[serde(rename = "to")]
    pub target: V,
    /// Edge weight.
    pub weight: u64,
}

impl<V> Edge<V> {
    /// Create an edge from a signed weight, rejecting negative values.
    pub fn new(target: V, weight: i64) -> GraphResult<Self> {
        let weight = u64::try_from(weight).map_err(|_| GraphError::NegativeWeight(weight))?;
        Ok(Self { target, weight })
    }

}

/// An edge together with its source, as listed by `adjg edges --format json`.
#[derive(Debug, Serialize)]
pub struct EdgeRecord<'a, V> {
    pub from: &'a V,
    #[serde(flatten)]
    pub edge: &'a Edge<V>,
}

impl<V: std::fmt::Display> std::fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (weight {})", self.target, self.weight)
    }
}
