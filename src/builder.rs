//! Queue construction options
//!
//! [`PriorityQueueBuilder`] collects the capacity hint and the comparator before
//! the queue exists. A builder that never had an ordering selected refuses to
//! build with [`HeapError::InvalidConfiguration`]; the shortcut constructors on
//! [`PriorityQueue`] cannot fail because they either take a comparator or require
//! `P: Ord`.
//!
//! # Example
//!
//! ```rust
//! use rust_addressable_heap::{HeapError, PriorityQueue, PriorityQueueBuilder};
//!
//! let queue: PriorityQueue<&str, u32, _> = PriorityQueueBuilder::new()
//!     .capacity(64)
//!     .comparator(|a: &u32, b: &u32| b.cmp(a))
//!     .build()
//!     .unwrap();
//! assert!(queue.capacity() >= 64);
//!
//! let missing: Result<PriorityQueue<&str, u32>, _> = PriorityQueueBuilder::new().build();
//! assert_eq!(missing.err(), Some(HeapError::InvalidConfiguration));
//! ```

use crate::compare::{Comparator, NaturalOrder};
use crate::priority_queue::PriorityQueue;
use crate::traits::HeapError;

/// Initial capacity used when none is given
pub const DEFAULT_CAPACITY: usize = 10;

/// Builder for [`PriorityQueue`]
#[derive(Debug, Clone)]
pub struct PriorityQueueBuilder<C = NaturalOrder> {
    capacity: usize,
    comparator: Option<C>,
}

impl PriorityQueueBuilder {
    /// Starts with [`DEFAULT_CAPACITY`] and no ordering selected
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            comparator: None,
        }
    }
}

impl Default for PriorityQueueBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> PriorityQueueBuilder<C> {
    /// Initial capacity of the heap array; a hint, never a limit
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Orders priorities with `comparator`
    pub fn comparator<D>(self, comparator: D) -> PriorityQueueBuilder<D> {
        PriorityQueueBuilder {
            capacity: self.capacity,
            comparator: Some(comparator),
        }
    }

    /// Orders priorities by their `Ord` implementation
    pub fn natural_order(self) -> PriorityQueueBuilder<NaturalOrder> {
        self.comparator(NaturalOrder)
    }

    /// Creates the queue
    ///
    /// # Errors
    /// Returns `HeapError::InvalidConfiguration` if no ordering was selected.
    pub fn build<E, P>(self) -> Result<PriorityQueue<E, P, C>, HeapError>
    where
        C: Comparator<P>,
    {
        match self.comparator {
            Some(comparator) => Ok(PriorityQueue::with_capacity_and_comparator(
                self.capacity,
                comparator,
            )),
            None => {
                log::debug!("priority queue builder has no comparator");
                Err(HeapError::InvalidConfiguration)
            }
        }
    }
}
