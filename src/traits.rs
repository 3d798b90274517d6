//! Common traits and errors for the bounded heap
//!
//! This module holds the two pieces every caller touches:
//!
//! - [`HeapError`]: the precondition violations reported by `push`, `pop` and `peek`
//! - [`Order`]: the ordering predicate that decides which element sits at the root
//!
//! The predicate is deliberately phrased over *optional* operands. During
//! sift-down a position may have a left child but no right child; the heap asks
//! the predicate to compare the left child against the missing right child, and
//! a well-formed predicate answers that a present element always outranks an
//! absent one. See [`Order`] for the full contract.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap already holds `capacity` elements
    CapacityExceeded,
    /// The heap holds no elements
    EmptyContainer,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::CapacityExceeded => write!(f, "pushing into a full container"),
            HeapError::EmptyContainer => write!(f, "container is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Ordering predicate over two possibly-absent elements
///
/// `outranks(a, b)` returns true when `a` has strictly higher priority than
/// `b`, i.e. `a` belongs closer to the root. A min-heap answers `a < b`, a
/// max-heap answers `a > b`.
///
/// # Contract
///
/// The heap relies on the following, which is documented but never checked
/// at runtime. A predicate that breaks it voids the heap invariant.
///
/// - `outranks(Some(_), None)` is `true`: a present element beats a missing one.
/// - `outranks(None, _)` is `false`: a missing element never beats anything.
/// - Over present operands the predicate is irreflexive and a strict weak order.
///
/// Any closure of type `Fn(Option<&T>, Option<&T>) -> bool` implements this
/// trait. To avoid handling `None` by hand, wrap a plain comparison in
/// [`ByPredicate`](crate::order::ByPredicate).
///
/// # Example
///
/// ```rust
/// use bounded_heapq::{BoundedBinaryHeap, Order};
///
/// let smallest_first = |a: Option<&i32>, b: Option<&i32>| match (a, b) {
///     (Some(a), Some(b)) => a < b,
///     (Some(_), None) => true,
///     (None, _) => false,
/// };
/// assert!(smallest_first.outranks(Some(&1), None));
///
/// let mut heap = BoundedBinaryHeap::new(4, smallest_first);
/// heap.push(3).unwrap();
/// heap.push(1).unwrap();
/// assert_eq!(heap.pop(), Ok(1));
/// ```
pub trait Order<T> {
    /// Returns true if `a` has strictly higher priority than `b`
    fn outranks(&self, a: Option<&T>, b: Option<&T>) -> bool;
}

impl<T, F> Order<T> for F
where
    F: Fn(Option<&T>, Option<&T>) -> bool,
{
    #[inline]
    fn outranks(&self, a: Option<&T>, b: Option<&T>) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            HeapError::CapacityExceeded.to_string(),
            "pushing into a full container"
        );
        assert_eq!(HeapError::EmptyContainer.to_string(), "container is empty");
    }

    #[test]
    fn test_closure_is_order() {
        let cmp = |a: Option<&u8>, b: Option<&u8>| b.is_none() || a.is_some() && a < b;
        assert!(cmp.outranks(Some(&1), Some(&2)));
        assert!(!cmp.outranks(Some(&2), Some(&1)));
        assert!(cmp.outranks(Some(&2), None));
        assert!(!cmp.outranks(None, Some(&2)));
    }
}
