//! Top-K selection over a stream
//!
//! [`TopK`] keeps the `k` highest-priority elements seen so far in a
//! [`BoundedBinaryHeap`] of capacity `k`. The heap is ordered by the reverse
//! of the caller's order, so its root is the weakest element kept and can be
//! evicted in O(log k) when something better arrives.
//!
//! Selecting `k` out of `n` elements costs O(n log k) time and O(k) memory,
//! against O(n log n) and O(n) for a full sort.
//!
//! # Example
//!
//! ```rust
//! use bounded_heapq::TopK;
//! use bounded_heapq::order::Descending;
//!
//! // Keep the three largest values.
//! let mut top = TopK::new(3, Descending);
//! for v in [5, 1, 9, 3, 7, 2] {
//!     top.offer(v);
//! }
//! assert_eq!(top.into_sorted_vec(), vec![9, 7, 5]);
//! ```

use crate::bounded_binary::BoundedBinaryHeap;
use crate::order::Reversed;
use crate::traits::Order;

/// Keeps the `k` highest-priority elements of everything offered to it
pub struct TopK<T, O> {
    heap: BoundedBinaryHeap<T, Reversed<O>>,
}

impl<T, O: Order<T>> TopK<T, O> {
    /// Creates a selector keeping at most `k` elements ranked by `order`
    pub fn new(k: usize, order: O) -> Self {
        Self {
            heap: BoundedBinaryHeap::new(k, Reversed(order)),
        }
    }

    /// Offers `item` for selection
    ///
    /// Returns the element that did not make the cut: `None` if `item` was
    /// stored without eviction, the evicted weakest element if `item` replaced
    /// it, or `item` itself if it does not outrank anything kept.
    pub fn offer(&mut self, item: T) -> Option<T> {
        if self.k() == 0 {
            return Some(item);
        }

        if !self.heap.is_full() {
            let pushed = self.heap.push(item);
            debug_assert!(pushed.is_ok());
            return None;
        }

        let order = &self.heap.order().0;
        if !order.outranks(Some(&item), self.heap.peek_ref()) {
            return Some(item);
        }

        let evicted = self.heap.pop().ok();
        // The pop above freed a slot.
        let pushed = self.heap.push(item);
        debug_assert!(pushed.is_ok());
        evicted
    }

    /// Returns the weakest element currently kept, the next one to be evicted
    pub fn weakest(&self) -> Option<&T> {
        self.heap.peek_ref()
    }

    /// Returns the number of elements kept
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing is kept
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the maximum number of elements kept
    pub fn k(&self) -> usize {
        self.heap.capacity()
    }

    /// Consumes the selector, returning the kept elements strongest first
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut kept = self.heap.into_sorted_vec();
        kept.reverse();
        kept
    }

    /// Consumes the selector, returning the heap with the weakest element at the root
    pub fn into_heap(self) -> BoundedBinaryHeap<T, Reversed<O>> {
        self.heap
    }
}

impl<T, O: Order<T>> Extend<T> for TopK<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.offer(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{Ascending, ByKey, Descending};

    #[test]
    fn test_keeps_largest() {
        let mut top = TopK::new(3, Descending);
        top.extend([4, 8, 1, 9, 2, 7]);

        assert_eq!(top.len(), 3);
        assert_eq!(top.weakest(), Some(&7));
        assert_eq!(top.into_sorted_vec(), vec![9, 8, 7]);
    }

    #[test]
    fn test_keeps_smallest() {
        let mut top = TopK::new(2, Ascending);
        top.extend([4, 8, 1, 9, 2, 7]);
        assert_eq!(top.into_sorted_vec(), vec![1, 2]);
    }

    #[test]
    fn test_offer_reports_what_was_dropped() {
        let mut top = TopK::new(2, Descending);
        assert_eq!(top.offer(5), None);
        assert_eq!(top.offer(3), None);
        assert_eq!(top.offer(1), Some(1));
        assert_eq!(top.offer(4), Some(3));
        // Ties with the weakest do not evict it.
        assert_eq!(top.offer(4), Some(4));
        assert_eq!(top.into_sorted_vec(), vec![5, 4]);
    }

    #[test]
    fn test_zero_k_keeps_nothing() {
        let mut top = TopK::new(0, Descending);
        assert_eq!(top.k(), 0);
        assert_eq!(top.offer(42), Some(42));
        assert!(top.is_empty());
        assert!(top.into_sorted_vec().is_empty());
    }

    #[test]
    fn test_fewer_items_than_k() {
        let mut top = TopK::new(10, Descending);
        top.extend([3, 1, 2]);
        assert_eq!(top.into_sorted_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_into_heap_drains_weakest_first() {
        let mut top = TopK::new(3, Descending);
        top.extend(0..10);
        let heap = top.into_heap();
        assert!(heap.is_valid());
        assert_eq!(heap.into_sorted_vec(), vec![7, 8, 9]);
    }

    #[test]
    fn test_by_key() {
        let mut top = TopK::new(2, ByKey(|word: &&str| std::cmp::Reverse(word.len())));
        top.extend(["a", "abcd", "ab", "abcdef", "abc"]);
        assert_eq!(top.into_sorted_vec(), vec!["abcdef", "abcd"]);
    }
}
