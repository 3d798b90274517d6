//! Bounded Binary Heap implementation
//!
//! A binary heap with a capacity fixed at construction and an ordering
//! supplied by the caller. Storage is allocated once; `push` and `pop` never
//! reallocate.
//!
//! The tree is stored 1-indexed in a slice of `capacity + 1` slots. Slot 0 is
//! a sentinel that is never occupied, which keeps the index arithmetic plain:
//!
//! | Relation | Index |
//! |----------|-------|
//! | parent   | `p / 2` |
//! | left     | `2 * p` |
//! | right    | `2 * p + 1` |
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `new`     | O(capacity) |
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use bounded_heapq::{BoundedBinaryHeap, HeapError};
//! use bounded_heapq::order::Ascending;
//!
//! let mut heap = BoundedBinaryHeap::new(2, Ascending);
//! heap.push(3).unwrap();
//! heap.push(1).unwrap();
//! assert_eq!(heap.push(2), Err(HeapError::CapacityExceeded));
//!
//! assert_eq!(heap.peek(), Ok(1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Err(HeapError::EmptyContainer));
//! ```

use std::fmt;

use log::{debug, trace};

use crate::traits::{HeapError, Order};

#[inline]
fn parent(pos: usize) -> usize {
    pos / 2
}

#[inline]
fn left(pos: usize) -> usize {
    pos * 2
}

#[inline]
fn right(pos: usize) -> usize {
    pos * 2 + 1
}

/// A fixed-capacity binary heap
///
/// The element for which the ordering predicate answers "outranks" against
/// every other element is kept at the root and returned first by
/// [`pop`](Self::pop). With [`Ascending`](crate::order::Ascending) this is a
/// min-heap, with [`Descending`](crate::order::Descending) a max-heap.
///
/// The heap is not internally synchronized; share it across threads only
/// behind external locking.
pub struct BoundedBinaryHeap<T, O> {
    /// `capacity + 1` slots; live elements occupy `1..=len`
    slots: Box<[Option<T>]>,
    len: usize,
    order: O,
}

impl<T, O: Order<T>> BoundedBinaryHeap<T, O> {
    /// Creates an empty heap holding at most `capacity` elements
    ///
    /// A capacity of 0 is accepted literally: every `push` fails.
    ///
    /// # Panics
    /// Panics with "capacity overflow" if `capacity + 1` slots cannot be
    /// counted in a `usize`, as `Vec::with_capacity` does.
    pub fn new(capacity: usize, order: O) -> Self {
        debug!("allocating bounded heap with capacity {}", capacity);
        let slot_count = capacity.checked_add(1).expect("capacity overflow");
        let slots = std::iter::repeat_with(|| None)
            .take(slot_count)
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self {
            slots,
            len: 0,
            order,
        }
    }

    /// Inserts `item`, sifting it up to its place
    ///
    /// # Errors
    /// Returns [`HeapError::CapacityExceeded`] if the heap is full. The heap is
    /// left unchanged and `item` is dropped.
    pub fn push(&mut self, item: T) -> Result<(), HeapError> {
        if self.is_full() {
            trace!("push rejected: heap full at capacity {}", self.capacity());
            return Err(HeapError::CapacityExceeded);
        }

        self.len += 1;
        self.slots[self.len] = Some(item);
        self.sift_up(self.len);
        Ok(())
    }

    /// Removes and returns the highest-priority element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.is_empty() {
            trace!("pop rejected: heap is empty");
            return Err(HeapError::EmptyContainer);
        }

        let top = self.slots[1].take();
        self.slots.swap(1, self.len);
        self.len -= 1;
        self.sift_down(1);

        top.ok_or(HeapError::EmptyContainer)
    }

    /// Returns true if no child outranks its parent and the slot layout is intact
    ///
    /// O(n). Intended for tests and debug assertions.
    pub fn is_valid(&self) -> bool {
        (2..=self.len).all(|pos| !self.outranks(pos, parent(pos)))
            && self.slots[1..=self.len].iter().all(Option::is_some)
            && self.slots[0].is_none()
            && self.slots[self.len + 1..].iter().all(Option::is_none)
    }

    /// Removes and yields elements in priority order until the heap is empty
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, O> {
        DrainSorted { heap: self }
    }

    /// Consumes the heap, returning its elements in priority order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_sorted().collect()
    }

    /// Compares the slots at two positions, treating positions past `len` as absent
    #[inline]
    fn outranks(&self, a: usize, b: usize) -> bool {
        self.order.outranks(self.get(a), self.get(b))
    }

    #[inline]
    fn get(&self, pos: usize) -> Option<&T> {
        if pos == 0 || pos > self.len {
            return None;
        }
        self.slots[pos].as_ref()
    }

    /// Move element at pos up until its parent outranks or ties it
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 1 && self.outranks(pos, parent(pos)) {
            self.slots.swap(pos, parent(pos));
            pos = parent(pos);
        }
    }

    /// Move element at pos down until no child outranks it
    fn sift_down(&mut self, mut pos: usize) {
        // A position is a leaf once its left child lies past `len`.
        while left(pos) <= self.len {
            let (l, r) = (left(pos), right(pos));
            if !self.outranks(l, pos) && !self.outranks(r, pos) {
                break;
            }

            // A missing right child loses, so the left child is taken.
            let child = if self.outranks(l, r) { l } else { r };
            self.slots.swap(pos, child);
            pos = child;
        }
    }
}

impl<T, O> BoundedBinaryHeap<T, O> {
    /// Returns the fixed maximum number of elements
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the heap holds `capacity` elements
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns the ordering predicate the heap was built with
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns a copy of the highest-priority element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    pub fn peek(&self) -> Result<T, HeapError>
    where
        T: Clone,
    {
        self.peek_ref().cloned().ok_or_else(|| {
            trace!("peek rejected: heap is empty");
            HeapError::EmptyContainer
        })
    }

    /// Borrows the highest-priority element
    pub fn peek_ref(&self) -> Option<&T> {
        match self.len {
            0 => None,
            _ => self.slots[1].as_ref(),
        }
    }

    /// Drops every element, keeping capacity and ordering
    pub fn clear(&mut self) {
        debug!("clearing bounded heap of {} elements", self.len);
        for slot in &mut self.slots[1..=self.len] {
            *slot = None;
        }
        self.len = 0;
    }
}

impl<T: fmt::Debug, O> fmt::Debug for BoundedBinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements: Vec<&T> = self.slots[1..=self.len].iter().flatten().collect();
        f.debug_struct("BoundedBinaryHeap")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("elements", &elements)
            .finish()
    }
}

/// Iterator returned by [`BoundedBinaryHeap::drain_sorted`]
///
/// Elements not consumed before the iterator is dropped stay in the heap.
pub struct DrainSorted<'a, T, O: Order<T>> {
    heap: &'a mut BoundedBinaryHeap<T, O>,
}

impl<T, O: Order<T>> Iterator for DrainSorted<'_, T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T, O: Order<T>> ExactSizeIterator for DrainSorted<'_, T, O> {}
