//! Single-source shortest path (Dijkstra) and path weight validation.

use crate::store::{OpenTable, Sequence};
use crate::types::{GraphError, GraphResult, Label};

use super::Graph;

impl<V: Label> Graph<V> {
    /// Shortest path from `start` to `goal` as a vertex sequence running
    /// `start -> ... -> goal`.
    ///
    /// Selection is a linear scan over the unvisited vertices (O(V²)); equal
    /// distances go to the vertex that comes first in table order. The loop
    /// ends as soon as `goal` is selected or no remaining vertex has been
    /// reached.
    pub fn shortest_path(&self, start: &V, goal: &V) -> GraphResult<Sequence<V>> {
        if !self.contains_vertex(start) {
            return Err(GraphError::vertex_not_found(start));
        }
        if !self.contains_vertex(goal) {
            return Err(GraphError::vertex_not_found(goal));
        }

        // `None` marks a vertex not reached yet. Sums of `u64` weights along a
        // simple path cannot overflow `u128`.
        let mut dist: OpenTable<V, Option<u128>> = OpenTable::new();
        let mut prev: OpenTable<V, V> = OpenTable::new();
        let mut unvisited: Sequence<V> = Sequence::new();
        for v in self.vertices() {
            dist.put(v.clone(), None)?;
            unvisited.push(v.clone());
        }
        dist.put(start.clone(), Some(0))?;

        while !unvisited.is_empty() {
            let mut best: Option<(usize, u128)> = None;
            for (idx, v) in unvisited.iter().enumerate() {
                if let Some(d) = *dist.get(v)? {
                    if best.map_or(true, |(_, best_dist)| d < best_dist) {
                        best = Some((idx, d));
                    }
                }
            }
            let Some((best_idx, best_dist)) = best else {
                break;
            };

            let current = unvisited.remove_at(best_idx)?;
            if current == *goal {
                break;
            }

            for edge in self.edges_from(&current)? {
                let candidate = best_dist + u128::from(edge.weight);
                let improves = match *dist.get(&edge.target)? {
                    Some(known) => candidate < known,
                    None => true,
                };
                if improves {
                    log::trace!(
                        "Relaxing {:?} via {current:?}: {candidate}",
                        edge.target
                    );
                    dist.put(edge.target.clone(), Some(candidate))?;
                    prev.put(edge.target.clone(), current.clone())?;
                }
            }
        }

        let Some(total) = *dist.get(goal)? else {
            return Err(GraphError::NoPathExists {
                from: format!("{start:?}"),
                to: format!("{goal:?}"),
            });
        };

        let mut path: Sequence<V> = Sequence::new();
        let mut cursor = goal.clone();
        while cursor != *start {
            let next = prev.get(&cursor)?.clone();
            path.push(cursor);
            cursor = next;
        }
        path.push(cursor);
        path.reverse();

        log::debug!(
            "Shortest path {start:?} -> {goal:?}: {} vertices, distance {total}",
            path.len()
        );
        Ok(path)
    }

    /// Total weight of a path, checking each consecutive pair against the
    /// current edges. Paths of fewer than two vertices weigh 0. A total that
    /// does not fit in `u64` is `WeightOverflow`.
    pub fn path_weight(&self, path: &[V]) -> GraphResult<u64> {
        let mut total: u64 = 0;
        for pair in path.windows(2) {
            let edge = self.find_edge(&pair[0], &pair[1]).ok_or_else(|| {
                GraphError::EdgeNotFoundOnPath {
                    from: format!("{:?}", pair[0]),
                    to: format!("{:?}", pair[1]),
                }
            })?;
            total = total
                .checked_add(edge.weight)
                .ok_or(GraphError::WeightOverflow)?;
        }
        Ok(total)
    }
}
