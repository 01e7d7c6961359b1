//! LIFO and FIFO frontiers for DFS and BFS.
//!
//! `pop`/`dequeue` fail with `EmptyContainer`; `peek` returns `None`.

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult};

use super::Sequence;

/// Last-in-first-out stack over a [`Sequence`].
#[derive(Debug, Clone, Default)]
pub struct Stack<T> {
    data: Sequence<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            data: Sequence::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    pub fn pop(&mut self) -> GraphResult<T> {
        self.data.pop().ok_or(GraphError::EmptyContainer)
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// First-in-first-out queue.
#[derive(Debug, Clone, Default)]
pub struct Queue<T> {
    data: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            data: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, value: T) {
        self.data.push_back(value);
    }

    pub fn dequeue(&mut self) -> GraphResult<T> {
        self.data.pop_front().ok_or(GraphError::EmptyContainer)
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.front()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
