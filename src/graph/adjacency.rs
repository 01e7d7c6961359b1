//! Core graph structure: vertices with ordered outgoing edge lists.

use crate::store::{OpenTable, Sequence};
use crate::types::{Edge, GraphError, GraphResult, Label};

/// A directed or undirected weighted graph over labels of type `V`.
///
/// Every vertex owns an adjacency entry in an [`OpenTable`], possibly empty.
/// Undirected graphs store each edge twice (once per endpoint) except
/// self-loops, which are stored once.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// Fixed at construction.
    directed: bool,
    /// Vertex -> outgoing edges in insertion order.
    adjacency: OpenTable<V, Sequence<Edge<V>>>,
}

impl<V: Label> Graph<V> {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: OpenTable::new(),
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges. Undirected edges are counted once.
    pub fn edge_count(&self) -> usize {
        let mut stored = 0;
        let mut self_loops = 0;
        for (v, edges) in self.adjacency.iter() {
            stored += edges.len();
            self_loops += edges.iter().filter(|e| e.target == *v).count();
        }
        if self.directed {
            stored
        } else {
            (stored - self_loops) / 2 + self_loops
        }
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// All vertices in table order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Outgoing edges of `v` in insertion order.
    pub fn edges_from(&self, v: &V) -> GraphResult<&[Edge<V>]> {
        self.adjacency
            .try_get(v)
            .map(|edges| edges.as_slice())
            .ok_or_else(|| GraphError::vertex_not_found(v))
    }

    /// The edge `from -> to`, if present.
    pub fn find_edge(&self, from: &V, to: &V) -> Option<&Edge<V>> {
        self.adjacency
            .try_get(from)?
            .iter()
            .find(|e| e.target == *to)
    }

    /// Add an isolated vertex.
    pub fn add_vertex(&mut self, v: V) -> GraphResult<()> {
        if self.adjacency.contains_key(&v) {
            return Err(GraphError::VertexAlreadyExists(format!("{v:?}")));
        }
        log::debug!("Adding vertex {v:?}");
        self.adjacency.put(v, Sequence::new())
    }

    /// Add an edge `from -> to`, creating missing endpoints.
    ///
    /// Undirected graphs also get the mirror `to -> from` unless the edge is
    /// a self-loop.
    pub fn add_edge(&mut self, from: V, to: V, weight: i64) -> GraphResult<()> {
        let edge = Edge::new(to.clone(), weight)?;

        if !self.adjacency.contains_key(&from) {
            self.add_vertex(from.clone())?;
        }
        if !self.adjacency.contains_key(&to) {
            self.add_vertex(to.clone())?;
        }

        if self.find_edge(&from, &to).is_some() {
            return Err(GraphError::DuplicateEdge {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
            });
        }

        log::debug!("Adding edge {from:?} -> {to:?} ({})", edge.weight);
        let mirror = (!self.directed && from != to).then(|| Edge {
            target: from.clone(),
            weight: edge.weight,
        });
        self.adjacency.get_mut(&from)?.push(edge);
        if let Some(mirror) = mirror {
            self.adjacency.get_mut(&to)?.push(mirror);
        }
        Ok(())
    }

    /// Remove a vertex, its outgoing edges and every edge pointing at it.
    pub fn remove_vertex(&mut self, v: &V) -> GraphResult<()> {
        if !self.adjacency.remove(v) {
            return Err(GraphError::vertex_not_found(v));
        }
        let mut stripped = 0;
        for edges in self.adjacency.values_mut() {
            let before = edges.len();
            edges.retain(|e| e.target != *v);
            stripped += before - edges.len();
        }
        log::debug!("Removed vertex {v:?} and {stripped} incoming edges");
        Ok(())
    }

    /// Remove the edge `from -> to` (and its mirror in undirected graphs).
    pub fn remove_edge(&mut self, from: &V, to: &V) -> GraphResult<()> {
        if !self.adjacency.contains_key(from) {
            return Err(GraphError::vertex_not_found(from));
        }
        if !self.adjacency.contains_key(to) {
            return Err(GraphError::vertex_not_found(to));
        }

        self.remove_single_directed(from, to)?;
        if !self.directed && from != to {
            self.remove_single_directed(to, from)?;
        }
        log::debug!("Removed edge {from:?} -> {to:?}");
        Ok(())
    }

    fn remove_single_directed(&mut self, from: &V, to: &V) -> GraphResult<()> {
        let edges = self.adjacency.get_mut(from)?;
        let idx = edges
            .position(|e| e.target == *to)
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
            })?;
        edges.remove_at(idx)?;
        Ok(())
    }

    /// Destinations reachable by one edge from `v`, in insertion order.
    pub fn get_adjacent(&self, v: &V) -> GraphResult<Sequence<V>> {
        Ok(self
            .edges_from(v)?
            .iter()
            .map(|e| e.target.clone())
            .collect())
    }
}

impl<V: Label> Default for Graph<V> {
    /// Graphs are directed unless stated otherwise.
    fn default() -> Self {
        Self::directed()
    }
}
