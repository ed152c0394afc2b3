//! Common traits for the priority queue
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: Base trait for callers that only need an ordered collection
//!   (`push`, `peek`, `pop`, `len`, `is_empty`)
//! - [`AddressableHeap`]: Extended trait adding handle-based operations that
//!   reach elements anywhere in the heap, not just the head
//!
//! The error type shared by every fallible operation, [`HeapError`], also lives here.

use std::fmt;

/// Error type for priority queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A required removal was attempted on an empty queue
    EmptyQueue,
    /// The handle is no longer valid (element was removed or the queue was cleared)
    InvalidHandle,
    /// The queue was configured without any way to order priorities
    InvalidConfiguration,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyQueue => write!(f, "priority queue is empty"),
            HeapError::InvalidHandle => {
                write!(f, "handle is no longer valid (element is no longer part of the heap)")
            }
            HeapError::InvalidConfiguration => {
                write!(f, "no comparator supplied and no natural order selected")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-ordered collections
///
/// Unlike `BinaryHeap`, which stores values directly and is a max-heap, this
/// trait stores (priority, item) pairs and always yields the minimum first.
///
/// # Example
///
/// ```rust
/// use rust_addressable_heap::{Heap, PriorityQueue};
///
/// fn drain_all<H: Heap<&'static str, i32>>(mut heap: H) -> Vec<(i32, &'static str)> {
///     let mut out = Vec::new();
///     while let Some(entry) = heap.pop() {
///         out.push(entry);
///     }
///     out
/// }
///
/// let mut heap: PriorityQueue<&str, i32> = PriorityQueue::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(Heap::peek(&heap), Some((&1, &"one")));
/// assert_eq!(drain_all(heap), vec![(1, "one"), (2, "two"), (3, "three")]);
/// ```
pub trait Heap<T, P> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(P, T)>;
}

/// Extended heap trait with handle-based access
///
/// - `push_with_handle` returns a handle naming the inserted element
/// - `change_priority` moves the element up or down as needed
/// - `remove_handle` takes the element out from wherever it sits
///
/// Handles are invalidated exactly once, when their element leaves the heap,
/// and every later use reports [`HeapError::InvalidHandle`].
///
/// # Example
///
/// ```rust
/// use rust_addressable_heap::{AddressableHeap, Heap, PriorityQueue};
///
/// let mut heap: PriorityQueue<&str, i32> = PriorityQueue::new();
/// let handle = heap.push_with_handle(10, "item");
/// heap.change_priority(&handle, 5).unwrap();
/// assert_eq!(Heap::peek(&heap), Some((&5, &"item")));
/// ```
pub trait AddressableHeap<T, P>: Heap<T, P> {
    /// The handle type for this heap
    type Handle: Copy + Eq;

    /// Inserts an element with the given priority, returning a handle
    fn push_with_handle(&mut self, priority: P, item: T) -> Self::Handle;

    /// Replaces the priority of the element identified by the handle
    ///
    /// # Errors
    /// Returns `HeapError::InvalidHandle` if the element already left the heap.
    fn change_priority(&mut self, handle: &Self::Handle, new_priority: P) -> Result<(), HeapError>;

    /// Removes the element identified by the handle, returning its priority and item
    ///
    /// # Errors
    /// Returns `HeapError::InvalidHandle` if the element already left the heap.
    fn remove_handle(&mut self, handle: &Self::Handle) -> Result<(P, T), HeapError>;

    /// Returns true while the handle still names an element in the heap
    fn is_valid(&self, handle: &Self::Handle) -> bool;
}
