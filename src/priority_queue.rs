//! Priority queue, a named wrapper around [`DAryHeap`]
//!
//! Every operation delegates directly to the owned heap; the wrapper only
//! renames them into priority-queue vocabulary and adds no state or
//! invariants of its own.

use crate::dary::DAryHeap;
use crate::error::Result;
use crate::order::Order;

/// A priority queue over (item, priority) pairs
///
/// # Example
///
/// ```rust
/// use dary_collections::{Order, PriorityQueue};
///
/// let mut queue = PriorityQueue::new(Order::Max, 2).unwrap();
/// queue.insert("low", 1.0).unwrap();
/// queue.insert("high", 9.0).unwrap();
///
/// assert_eq!(queue.peek().unwrap(), (&"high", 9.0));
/// assert_eq!(queue.pop().unwrap(), ("high", 9.0));
/// assert_eq!(queue.pop().unwrap(), ("low", 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: DAryHeap<T>,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue; fails with
    /// [`Error::InvalidArity`](crate::Error) when `arity < 2`
    pub fn new(order: Order, arity: usize) -> Result<Self> {
        Ok(Self {
            heap: DAryHeap::new(order, arity)?,
        })
    }

    /// Adds an item with the given priority
    pub fn insert(&mut self, item: T, priority: f64) -> Result<()> {
        self.heap.insert(item, priority)
    }

    /// The front item and its priority, without mutation
    pub fn peek(&self) -> Result<(&T, f64)> {
        self.heap.peek()
    }

    /// Removes and returns the front item and its priority
    pub fn pop(&mut self) -> Result<(T, f64)> {
        self.heap.pop()
    }

    /// Number of queued items
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when nothing is queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Empties the queue
    pub fn clear(&mut self) {
        self.heap.clear()
    }

    /// The queue order chosen at construction
    pub fn order(&self) -> Order {
        self.heap.order()
    }
}

impl<T: PartialEq> PriorityQueue<T> {
    /// Changes the priority of the first queued item equal to `item`.
    ///
    /// Returns `false` when no item matches; see [`DAryHeap::modify`] for
    /// the lookup and re-sift rules.
    pub fn set_priority(&mut self, item: &T, new_priority: f64) -> bool {
        self.heap.modify(item, new_priority)
    }

    /// Removes the first queued item equal to `item`.
    ///
    /// Returns `false` when no item matches.
    pub fn remove(&mut self, item: &T) -> bool {
        self.heap.remove(item)
    }
}
