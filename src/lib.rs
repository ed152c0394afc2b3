//! Addressable Binary Heap for Rust
//!
//! This crate provides an array-backed binary min-heap that returns a stable
//! handle for every inserted element. Handles let callers change an element's
//! priority or remove it from anywhere in the queue in O(log n), with the heap
//! order maintained after every operation.
//!
//! # Features
//!
//! - **Handles**: generational arena keys; a handle is invalidated exactly once,
//!   when its element leaves the queue, and is never revived
//! - **Pluggable ordering**: natural `Ord`, any comparison closure, or
//!   [`ReverseOrder`](compare::ReverseOrder) for max-first queues
//! - **Trait access**: [`Heap`] for plain push/peek/pop callers and
//!   [`AddressableHeap`] for handle-based updates
//!
//! # Example
//!
//! ```rust
//! use rust_addressable_heap::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! let handle1 = queue.insert("item1", 5);
//! let _handle2 = queue.insert("item2", 3);
//! queue.change_priority(&handle1, 1).unwrap();
//! assert_eq!(queue.peek().map(|node| *node.value()), Some("item1"));
//! ```
//!
//! The queue is not synchronized. Share it across threads only behind a lock.

pub mod builder;
pub mod compare;
pub mod handle;
pub mod priority_queue;
pub mod traits;

// Re-export the main types for convenience
pub use builder::{PriorityQueueBuilder, DEFAULT_CAPACITY};
pub use compare::{Comparator, NaturalOrder};
pub use handle::{Handle, NodeMut, NodeRef, Removed};
pub use priority_queue::PriorityQueue;
pub use traits::{AddressableHeap, Heap, HeapError};
