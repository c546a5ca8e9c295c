//! Generic Containers Around a D-ary Heap Core
//!
//! This crate provides a family of priority structures built on a single
//! d-ary heap, plus the supporting containers they collaborate with.
//!
//! # Features
//!
//! - **DAryHeap**: min- or max-heap with configurable branching factor;
//!   insert, peek, pop, plus value updates and removal by item identity
//! - **PriorityQueue**: the heap under priority-queue vocabulary
//! - **TopKBuffer**: bounded buffer retaining the k best values seen,
//!   with an O(1) rejection fast path for losing candidates
//! - **ResizableArray**: the backing store, with explicit grow/shrink
//!   policy and recoverable allocation failures
//! - **Supporting containers**: stack, FIFO queue, doubly-linked list,
//!   multi-ary tree, hash table, set
//!
//! All priorities are `f64` values; items are any owned type. Structures
//! are single-threaded; wrap them in a lock for shared access.
//!
//! # Example
//!
//! ```rust
//! use dary_collections::{DAryHeap, Order};
//!
//! let mut heap = DAryHeap::new(Order::Min, 4).unwrap();
//! heap.insert("job-a", 3.0).unwrap();
//! heap.insert("job-b", 1.0).unwrap();
//! assert_eq!(heap.pop().unwrap(), ("job-b", 1.0));
//! ```

pub mod dary;
pub mod error;
pub mod hash_table;
pub mod list;
pub mod order;
pub mod priority_queue;
pub mod queue;
pub mod set;
pub mod stack;
pub mod storage;
pub mod top_k;
pub mod tree;

// Re-export the heap family and its shared vocabulary for convenience
pub use dary::DAryHeap;
pub use error::{Error, Result};
pub use order::Order;
pub use priority_queue::PriorityQueue;
pub use storage::ResizableArray;
pub use top_k::TopKBuffer;
