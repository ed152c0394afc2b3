//! Handles naming individual queued elements
//!
//! A [`Handle`] is a small `Copy` ticket returned by
//! [`PriorityQueue::insert`](crate::PriorityQueue::insert). It does not point into
//! the heap array directly: nodes live in a generational arena (`slotmap`) owned by
//! the queue, and each node records the heap slot it currently occupies. Sift
//! operations move keys around the array and rewrite those slot indices, so a
//! handle stays correct no matter how often its element moves.
//!
//! When an element leaves the queue its arena entry is removed, which bumps the
//! entry's version. Every handle minted for it fails from then on with
//! [`HeapError::InvalidHandle`](crate::HeapError::InvalidHandle), even after the
//! arena entry is reused by a later insertion.
//!
//! [`NodeRef`] and [`NodeMut`] are borrowed views that resolve a handle once and
//! then expose the element the way a node object would.

use crate::compare::{Comparator, NaturalOrder};
use crate::priority_queue::PriorityQueue;
use crate::traits::HeapError;
use slotmap::new_key_type;

new_key_type! {
    /// Arena key for queue nodes
    pub(crate) struct NodeKey;
}

/// Stable reference to one queued element
///
/// Handles are only meaningful for the queue that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub(crate) NodeKey);

/// Arena record for one queued element
#[derive(Debug, Clone)]
pub(crate) struct Node<E, P> {
    pub(crate) value: E,
    pub(crate) priority: P,
    /// Current slot in the heap array
    pub(crate) index: usize,
}

/// An element that has left the queue
///
/// Returned by extraction and by handle removal. The handle it carries is already
/// invalid; the value and priority are the element's last state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed<E, P> {
    pub handle: Handle,
    pub value: E,
    pub priority: P,
}

impl<E, P> Removed<E, P> {
    /// Always false: a removed element can never become valid again
    pub fn is_valid(&self) -> bool {
        false
    }

    /// Splits into `(priority, value)`, the order used by [`Heap::pop`](crate::Heap::pop)
    pub fn into_entry(self) -> (P, E) {
        (self.priority, self.value)
    }
}

/// Read-only view of a queued element
#[derive(Debug)]
pub struct NodeRef<'a, E, P> {
    pub(crate) handle: Handle,
    pub(crate) node: &'a Node<E, P>,
}

impl<'a, E, P> NodeRef<'a, E, P> {
    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn value(&self) -> &'a E {
        &self.node.value
    }

    pub fn priority(&self) -> &'a P {
        &self.node.priority
    }

    /// Current slot in the heap array
    pub fn index(&self) -> usize {
        self.node.index
    }
}

impl<E, P> Clone for NodeRef<'_, E, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, P> Copy for NodeRef<'_, E, P> {}

/// Mutable view of a queued element
///
/// Holds the queue mutably borrowed, so the element cannot disappear underneath
/// it. Priority changes and removal are carried out by the queue.
///
/// # Example
///
/// ```rust
/// use rust_addressable_heap::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.insert("a", 5);
/// let b = queue.insert("b", 7);
///
/// let mut node = queue.node_mut(&b).unwrap();
/// node.change_priority(1).unwrap();
/// assert_eq!(node.index(), 0);
///
/// let removed = node.remove().unwrap();
/// assert_eq!(removed.value, "b");
/// assert!(!queue.is_valid(&b));
/// ```
pub struct NodeMut<'a, E, P, C = NaturalOrder> {
    pub(crate) queue: &'a mut PriorityQueue<E, P, C>,
    pub(crate) handle: Handle,
}

impl<'a, E, P, C: Comparator<P>> NodeMut<'a, E, P, C> {
    pub fn handle(&self) -> Handle {
        self.handle
    }

    fn node(&self) -> &Node<E, P> {
        &self.queue.nodes[self.handle.0]
    }

    pub fn value(&self) -> &E {
        &self.node().value
    }

    /// Mutable access to the value; the priority and position are untouched
    pub fn value_mut(&mut self) -> &mut E {
        &mut self.queue.nodes[self.handle.0].value
    }

    pub fn priority(&self) -> &P {
        &self.node().priority
    }

    pub fn index(&self) -> usize {
        self.node().index
    }

    /// See [`PriorityQueue::change_priority`]
    pub fn change_priority(&mut self, new_priority: P) -> Result<(), HeapError> {
        self.queue.change_priority(&self.handle, new_priority)
    }

    /// Removes the element, consuming the view
    ///
    /// See [`PriorityQueue::remove_at`].
    pub fn remove(self) -> Result<Removed<E, P>, HeapError> {
        self.queue.remove_at(&self.handle)
    }
}
