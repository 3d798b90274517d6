//! Bounded Binary Heap for Rust
//!
//! This crate provides a fixed-capacity binary heap (priority queue) whose
//! ordering is a caller-supplied predicate rather than `Ord`. Storage is
//! allocated once at construction; pushing into a full heap is an error
//! instead of a reallocation.
//!
//! # Features
//!
//! - **Bounded Binary Heap**: O(log n) push and pop, O(1) peek, no allocation after `new`
//! - **Pluggable ordering**: any [`Order`] implementation, including plain closures
//! - **Top-K selection**: keep the k best elements of a stream in O(n log k)
//!
//! # Example
//!
//! ```rust
//! use bounded_heapq::{BoundedBinaryHeap, HeapError};
//! use bounded_heapq::order::Ascending;
//!
//! let mut heap = BoundedBinaryHeap::new(10, Ascending);
//! for v in [10, 50, 100, 5, 25, 75, 150] {
//!     heap.push(v)?;
//! }
//! assert_eq!(heap.peek()?, 5);
//! assert_eq!(heap.pop()?, 5);
//! assert_eq!(heap.pop()?, 10);
//! # Ok::<(), HeapError>(())
//! ```

pub mod bounded_binary;
pub mod order;
pub mod top_k;
pub mod traits;

// Re-export the main types for convenience
pub use bounded_binary::{BoundedBinaryHeap, DrainSorted};
pub use top_k::TopK;
pub use traits::{HeapError, Order};

/// A bounded heap returning the smallest element first
pub type MinHeap<T> = BoundedBinaryHeap<T, order::Ascending>;

/// A bounded heap returning the largest element first
pub type MaxHeap<T> = BoundedBinaryHeap<T, order::Descending>;
