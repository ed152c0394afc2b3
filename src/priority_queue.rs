//! Addressable binary min-heap
//!
//! An array-backed binary heap that hands out a [`Handle`] for every inserted
//! element. Through the handle an element's priority can be changed, or the element
//! removed, wherever it currently sits in the heap.
//!
//! # Layout
//!
//! The heap array (`tree`) holds arena keys; slot `i` has children `2i + 1` and
//! `2i + 2` and parent `(i - 1) / 2`. Each node in the arena stores the slot it
//! occupies. Every move of a key inside the array goes through `swap`, which
//! rewrites both stored slots, so the two views never disagree between operations.
//!
//! # Time Complexity
//!
//! | Operation                 | Complexity |
//! |---------------------------|------------|
//! | `insert`                  | O(log n)   |
//! | `peek`                    | O(1)       |
//! | `extract_min`             | O(log n)   |
//! | `change_priority`         | O(log n)   |
//! | `remove_at`               | O(log n)   |
//! | `contains`, `to_vec`      | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_addressable_heap::{HeapError, PriorityQueue};
//!
//! let mut queue = PriorityQueue::new();
//! let a = queue.insert("a", 5);
//! let b = queue.insert("b", 3);
//! let c = queue.insert("c", 8);
//!
//! assert_eq!(queue.peek().map(|node| *node.value()), Some("b"));
//!
//! queue.change_priority(&c, 1).unwrap();
//! assert_eq!(queue.peek().map(|node| node.handle()), Some(c));
//!
//! let removed = queue.remove_at(&a).unwrap();
//! assert_eq!((removed.value, removed.priority), ("a", 5));
//! assert_eq!(queue.remove_at(&a), Err(HeapError::InvalidHandle));
//!
//! assert_eq!(queue.extract_min().map(|r| r.value), Some("c"));
//! assert_eq!(queue.extract_min().map(|r| r.value), Some("b"));
//! assert!(queue.extract_min().is_none());
//! assert!(!queue.is_valid(&b));
//! ```

use crate::builder::DEFAULT_CAPACITY;
use crate::compare::{Comparator, NaturalOrder};
use crate::handle::{Handle, Node, NodeKey, NodeMut, NodeRef, Removed};
use crate::traits::{AddressableHeap, Heap, HeapError};
use slotmap::SlotMap;
use std::cmp::Ordering;
use std::fmt;

/// Binary min-heap with stable element handles
///
/// `E` is the element value, `P` its priority and `C` the [`Comparator`] ordering
/// priorities. With the default [`NaturalOrder`], `P` must implement `Ord`.
pub struct PriorityQueue<E, P, C = NaturalOrder> {
    /// Arena owning every element currently in the queue
    pub(crate) nodes: SlotMap<NodeKey, Node<E, P>>,
    /// Heap array of arena keys
    tree: Vec<NodeKey>,
    comparator: C,
}

impl<E, P: Ord> PriorityQueue<E, P> {
    /// Creates an empty queue ordered by `P`'s natural order
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty queue with room for `capacity` elements
    ///
    /// The capacity is a hint only; the queue grows as needed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<E, P, C: Comparator<P>> PriorityQueue<E, P, C> {
    /// Creates an empty queue ordered by `comparator`
    ///
    /// Closures need their argument types spelled out, e.g.
    /// `|a: &u32, b: &u32| b.cmp(a)`.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(DEFAULT_CAPACITY, comparator)
    }

    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
            tree: Vec::with_capacity(capacity),
            comparator,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }

    /// Removes every element
    ///
    /// All outstanding handles become invalid, permanently.
    pub fn clear(&mut self) {
        let invalidated = self.nodes.len();
        self.nodes.clear();
        self.tree.clear();
        log::debug!("priority queue cleared, {} handles invalidated", invalidated);
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<NodeRef<'_, E, P>> {
        let key = *self.tree.first()?;
        Some(NodeRef {
            handle: Handle(key),
            node: &self.nodes[key],
        })
    }

    /// Inserts `value` with `priority`, returning a handle to it
    pub fn insert(&mut self, value: E, priority: P) -> Handle {
        let index = self.tree.len();
        let key = self.nodes.insert(Node {
            value,
            priority,
            index,
        });
        self.tree.push(key);
        self.sift_up(index);
        Handle(key)
    }

    /// Alias for [`insert`](Self::insert)
    pub fn offer(&mut self, value: E, priority: P) -> Handle {
        self.insert(value, priority)
    }

    /// Removes and returns the minimum element, or `None` if the queue is empty
    pub fn extract_min(&mut self) -> Option<Removed<E, P>> {
        if self.tree.is_empty() {
            return None;
        }
        self.remove_slot(0)
    }

    /// Alias for [`extract_min`](Self::extract_min)
    pub fn poll(&mut self) -> Option<Removed<E, P>> {
        self.extract_min()
    }

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns `HeapError::EmptyQueue` if there is nothing to remove.
    pub fn remove_required(&mut self) -> Result<Removed<E, P>, HeapError> {
        self.extract_min().ok_or_else(|| {
            log::trace!("required removal from an empty priority queue");
            HeapError::EmptyQueue
        })
    }

    /// Alias for [`remove_required`](Self::remove_required)
    pub fn remove(&mut self) -> Result<Removed<E, P>, HeapError> {
        self.remove_required()
    }

    /// Returns true while `handle` names an element of this queue
    pub fn is_valid(&self, handle: &Handle) -> bool {
        self.nodes.contains_key(handle.0)
    }

    /// Resolves `handle` to a read-only view of its element
    pub fn node(&self, handle: &Handle) -> Result<NodeRef<'_, E, P>, HeapError> {
        Ok(NodeRef {
            handle: *handle,
            node: self.resolve(handle)?,
        })
    }

    /// Resolves `handle` to a mutable view of its element
    pub fn node_mut(&mut self, handle: &Handle) -> Result<NodeMut<'_, E, P, C>, HeapError> {
        self.resolve(handle)?;
        Ok(NodeMut {
            queue: self,
            handle: *handle,
        })
    }

    pub fn value(&self, handle: &Handle) -> Result<&E, HeapError> {
        self.resolve(handle).map(|node| &node.value)
    }

    pub fn priority(&self, handle: &Handle) -> Result<&P, HeapError> {
        self.resolve(handle).map(|node| &node.priority)
    }

    /// Current heap slot of the element named by `handle`
    pub fn index_of(&self, handle: &Handle) -> Result<usize, HeapError> {
        self.resolve(handle).map(|node| node.index)
    }

    /// Replaces the priority of the element named by `handle`
    ///
    /// A smaller priority moves the element toward the root, a larger one toward
    /// the leaves. A priority that compares equal to the current one is dropped and
    /// the heap is left untouched.
    ///
    /// # Errors
    /// Returns `HeapError::InvalidHandle` if the element already left the queue;
    /// the queue is not modified.
    pub fn change_priority(&mut self, handle: &Handle, new_priority: P) -> Result<(), HeapError> {
        let Some(node) = self.nodes.get_mut(handle.0) else {
            log::trace!("change_priority rejected stale handle {:?}", handle);
            return Err(HeapError::InvalidHandle);
        };

        let ordering = self.comparator.compare(&new_priority, &node.priority);
        if ordering == Ordering::Equal {
            return Ok(());
        }
        node.priority = new_priority;
        let index = node.index;

        if ordering == Ordering::Less {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        Ok(())
    }

    /// Removes the element named by `handle` from wherever it sits
    ///
    /// # Errors
    /// Returns `HeapError::InvalidHandle` if the element already left the queue;
    /// the queue is not modified.
    pub fn remove_at(&mut self, handle: &Handle) -> Result<Removed<E, P>, HeapError> {
        let index = self.resolve(handle)?.index;
        self.remove_slot(index).ok_or(HeapError::InvalidHandle)
    }

    /// Returns true if any queued element equals `value`
    pub fn contains(&self, value: &E) -> bool
    where
        E: PartialEq,
    {
        self.nodes.values().any(|node| node.value == *value)
    }

    /// Copies the values in heap array order (not sorted order)
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.tree
            .iter()
            .map(|key| self.nodes[*key].value.clone())
            .collect()
    }

    /// Iterates over `(priority, value)` pairs in heap array order
    pub fn iter(&self) -> impl Iterator<Item = (&P, &E)> + '_ {
        self.tree.iter().map(move |key| {
            let node = &self.nodes[*key];
            (&node.priority, &node.value)
        })
    }

    /// Drains the queue into `(priority, value)` pairs in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<(P, E)> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(removed) = self.extract_min() {
            sorted.push(removed.into_entry());
        }
        sorted
    }

    /// Verifies the heap order and slot bookkeeping
    ///
    /// Meant for tests; returns a description of the first violation found.
    #[doc(hidden)]
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.tree.len() != self.nodes.len() {
            return Err(format!(
                "heap array has {} slots but arena holds {} nodes",
                self.tree.len(),
                self.nodes.len()
            ));
        }
        for (slot, key) in self.tree.iter().enumerate() {
            let node = self
                .nodes
                .get(*key)
                .ok_or_else(|| format!("slot {} refers to a removed node", slot))?;
            if node.index != slot {
                return Err(format!("node in slot {} records index {}", slot, node.index));
            }
            if slot > 0 && self.less(slot, (slot - 1) / 2) {
                return Err(format!("slot {} orders before its parent", slot));
            }
        }
        Ok(())
    }

    fn resolve(&self, handle: &Handle) -> Result<&Node<E, P>, HeapError> {
        self.nodes.get(handle.0).ok_or_else(|| {
            log::trace!("rejected stale handle {:?}", handle);
            HeapError::InvalidHandle
        })
    }

    /// Takes the node in `slot` out of the heap
    ///
    /// The tail node is swapped into `slot` and then moved in the one direction
    /// that can be out of order: up if it beats its new parent, down otherwise.
    fn remove_slot(&mut self, slot: usize) -> Option<Removed<E, P>> {
        let last = self.tree.len().checked_sub(1)?;
        self.swap(slot, last);
        let key = self.tree.pop()?;
        let node = self.nodes.remove(key)?;

        if slot < self.tree.len() {
            if slot > 0 && self.less(slot, (slot - 1) / 2) {
                self.sift_up(slot);
            } else {
                self.sift_down(slot);
            }
        }

        Some(Removed {
            handle: Handle(key),
            value: node.value,
            priority: node.priority,
        })
    }

    /// True if the priority in slot `a` orders strictly before the one in slot `b`
    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.comparator.less(
            &self.nodes[self.tree[a]].priority,
            &self.nodes[self.tree[b]].priority,
        )
    }

    /// Exchanges two slots and records the new positions in both nodes
    fn swap(&mut self, a: usize, b: usize) {
        self.tree.swap(a, b);
        self.nodes[self.tree[a]].index = a;
        self.nodes[self.tree[b]].index = b;
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.less(index, parent) {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// The smaller child is taken; on a tie the left child wins.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.tree.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };

            if self.less(child, index) {
                self.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }
}

impl<E, P: Ord> Default for PriorityQueue<E, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone, P: Clone, C: Clone> Clone for PriorityQueue<E, P, C> {
    fn clone(&self) -> Self {
        // Cloned handles stay valid in the clone: keys are copied as they are.
        Self {
            nodes: self.nodes.clone(),
            tree: self.tree.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<E: fmt::Debug, P: fmt::Debug, C> fmt::Debug for PriorityQueue<E, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.tree.iter().map(|key| {
                let node = &self.nodes[*key];
                (&node.value, &node.priority)
            }))
            .finish()
    }
}

impl<E, P, C: Comparator<P>> Extend<(E, P)> for PriorityQueue<E, P, C> {
    fn extend<I: IntoIterator<Item = (E, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.insert(value, priority);
        }
    }
}

impl<E, P: Ord> FromIterator<(E, P)> for PriorityQueue<E, P> {
    fn from_iter<I: IntoIterator<Item = (E, P)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0.max(DEFAULT_CAPACITY));
        queue.extend(iter);
        queue
    }
}

impl<E, P, C: Comparator<P>> Heap<E, P> for PriorityQueue<E, P, C> {
    fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn push(&mut self, priority: P, item: E) {
        self.insert(item, priority);
    }

    fn peek(&self) -> Option<(&P, &E)> {
        let node = &self.nodes[*self.tree.first()?];
        Some((&node.priority, &node.value))
    }

    fn pop(&mut self) -> Option<(P, E)> {
        self.extract_min().map(Removed::into_entry)
    }
}

impl<E, P, C: Comparator<P>> AddressableHeap<E, P> for PriorityQueue<E, P, C> {
    type Handle = Handle;

    fn push_with_handle(&mut self, priority: P, item: E) -> Handle {
        self.insert(item, priority)
    }

    fn change_priority(&mut self, handle: &Handle, new_priority: P) -> Result<(), HeapError> {
        PriorityQueue::change_priority(self, handle, new_priority)
    }

    fn remove_handle(&mut self, handle: &Handle) -> Result<(P, E), HeapError> {
        self.remove_at(handle).map(Removed::into_entry)
    }

    fn is_valid(&self, handle: &Handle) -> bool {
        PriorityQueue::is_valid(self, handle)
    }
}
