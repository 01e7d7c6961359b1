//! Graph traversal algorithms (DFS and BFS).

use crate::store::{OpenTable, Queue, Sequence, Stack};
use crate::types::{GraphError, GraphResult, Label};

use super::Graph;

/// Traversal strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Depth-first, explicit stack.
    DepthFirst,
    /// Breadth-first, queue.
    BreadthFirst,
}

/// Depth-first traversal from `start`, calling `visit` on each vertex in
/// discovery order.
///
/// A vertex may sit on the stack several times; it is marked visited when
/// popped and skipped on later pops. Neighbours are pushed in reverse
/// adjacency order so they are popped in adjacency order.
pub fn dfs_traverse<V: Label>(
    graph: &Graph<V>,
    start: &V,
    mut visit: impl FnMut(&V),
) -> GraphResult<Sequence<V>> {
    if !graph.contains_vertex(start) {
        return Err(GraphError::vertex_not_found(start));
    }

    let mut visited: OpenTable<V, ()> = OpenTable::new();
    let mut order: Sequence<V> = Sequence::new();
    let mut stack: Stack<V> = Stack::new();
    stack.push(start.clone());

    while !stack.is_empty() {
        let current = stack.pop()?;
        if visited.contains_key(&current) {
            continue;
        }
        visited.put(current.clone(), ())?;
        visit(&current);

        for edge in graph.edges_from(&current)?.iter().rev() {
            if !visited.contains_key(&edge.target) {
                stack.push(edge.target.clone());
            }
        }
        order.push(current);
    }

    log::debug!("DFS from {start:?} visited {} vertices", order.len());
    Ok(order)
}

/// Breadth-first traversal from `start`, calling `visit` on each vertex in
/// discovery order.
///
/// Vertices are marked visited when enqueued, so each is queued at most once.
pub fn bfs_traverse<V: Label>(
    graph: &Graph<V>,
    start: &V,
    mut visit: impl FnMut(&V),
) -> GraphResult<Sequence<V>> {
    if !graph.contains_vertex(start) {
        return Err(GraphError::vertex_not_found(start));
    }

    let mut visited: OpenTable<V, ()> = OpenTable::new();
    let mut order: Sequence<V> = Sequence::new();
    let mut queue: Queue<V> = Queue::new();
    visited.put(start.clone(), ())?;
    queue.enqueue(start.clone());

    while !queue.is_empty() {
        let current = queue.dequeue()?;
        visit(&current);

        for edge in graph.edges_from(&current)? {
            if !visited.contains_key(&edge.target) {
                visited.put(edge.target.clone(), ())?;
                queue.enqueue(edge.target.clone());
            }
        }
        order.push(current);
    }

    log::debug!("BFS from {start:?} visited {} vertices", order.len());
    Ok(order)
}

impl<V: Label> Graph<V> {
    /// Vertices reachable from `start` in depth-first discovery order.
    pub fn dfs(&self, start: &V) -> GraphResult<Sequence<V>> {
        dfs_traverse(self, start, |_| {})
    }

    /// Vertices reachable from `start` in breadth-first discovery order.
    pub fn bfs(&self, start: &V) -> GraphResult<Sequence<V>> {
        bfs_traverse(self, start, |_| {})
    }

    /// Traverse with the given strategy, calling `visit` on each vertex.
    pub fn traverse_with(
        &self,
        start: &V,
        order: TraversalOrder,
        visit: impl FnMut(&V),
    ) -> GraphResult<Sequence<V>> {
        match order {
            TraversalOrder::DepthFirst => dfs_traverse(self, start, visit),
            TraversalOrder::BreadthFirst => bfs_traverse(self, start, visit),
        }
    }
}
