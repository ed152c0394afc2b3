//! Comparator strategies for ordering priorities
//!
//! The queue never calls `Ord` directly; every priority comparison goes through a
//! [`Comparator`] chosen at construction time. The natural order of the priority
//! type is available as [`NaturalOrder`], any `Fn(&P, &P) -> Ordering` closure is a
//! comparator, and [`ReverseOrder`] flips another comparator to obtain max-first
//! behavior.
//!
//! # Example
//!
//! ```rust
//! use rust_addressable_heap::compare::ReverseOrder;
//! use rust_addressable_heap::{NaturalOrder, PriorityQueue};
//!
//! // Heaviest first
//! let mut heap = PriorityQueue::with_comparator(ReverseOrder(NaturalOrder));
//! heap.insert("light", 2);
//! heap.insert("heavy", 9);
//! assert_eq!(heap.peek().map(|node| *node.value()), Some("heavy"));
//! ```

use std::cmp::Ordering;

/// A total order over priorities
///
/// Implementations must be consistent for the lifetime of the queue: the heap
/// relies on `compare` giving the same answer for the same pair every time.
pub trait Comparator<P> {
    /// Compares two priorities
    fn compare(&self, a: &P, b: &P) -> Ordering;

    /// Returns true if `a` orders strictly before `b`
    #[inline]
    fn less(&self, a: &P, b: &P) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// The priority type's own `Ord` implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<P: Ord> Comparator<P> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &P, b: &P) -> Ordering {
        a.cmp(b)
    }
}

impl<P, F> Comparator<P> for F
where
    F: Fn(&P, &P) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &P, b: &P) -> Ordering {
        self(a, b)
    }
}

/// Inverts the wrapped comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder<C>(pub C);

impl<P, C: Comparator<P>> Comparator<P> for ReverseOrder<C> {
    #[inline]
    fn compare(&self, a: &P, b: &P) -> Ordering {
        self.0.compare(b, a)
    }
}
