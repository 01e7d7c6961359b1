//! Growable sequence with bounds-checked access.

use crate::types::{GraphError, GraphResult};

/// Ordered, growable sequence. Adjacency lists, the Dijkstra unvisited set
/// and traversal output are all sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Create a new, empty sequence.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> GraphResult<&T> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })
    }

    /// Replace the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> GraphResult<()> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Append an element (amortized O(1), capacity doubles when full).
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove and return the element at `index`, shifting later elements left.
    pub fn remove_at(&mut self, index: usize) -> GraphResult<T> {
        let len = self.items.len();
        if index >= len {
            return Err(GraphError::IndexOutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Last element.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Keep only the elements matching the predicate, preserving order.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.items.retain(keep);
    }

    /// Index of the first element matching the predicate.
    pub fn position(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(pred)
    }

    /// Reverse the element order in place.
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Forward iterator.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the sequence into a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
