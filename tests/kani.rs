//! Kani proof harnesses
//!
//! Bounded model-checking proofs for the heap. Run with `cargo kani`; the
//! module is empty under a normal `cargo test`.

#[cfg(kani)]
mod proofs {
    use bounded_heapq::order::{Ascending, Descending};
    use bounded_heapq::{BoundedBinaryHeap, HeapError};

    /// Proof: any four pushes into a capacity-4 heap keep the invariant and
    /// the root is the minimum
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_push_keeps_invariant() {
        let values: [u8; 4] = kani::any();
        let mut heap = BoundedBinaryHeap::new(4, Ascending);

        for v in values {
            assert!(heap.push(v).is_ok());
            assert!(heap.is_valid());
        }

        let min = values.iter().copied().min();
        assert_eq!(heap.peek_ref().copied(), min);
    }

    /// Proof: popping everything yields non-increasing values for a max-heap
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_pop_order() {
        let values: [u8; 4] = kani::any();
        let mut heap = BoundedBinaryHeap::new(4, Descending);
        for v in values {
            heap.push(v).unwrap();
        }

        let mut last = u8::MAX;
        while let Ok(v) = heap.pop() {
            assert!(v <= last);
            assert!(heap.is_valid());
            last = v;
        }
    }

    /// Proof: a full heap rejects pushes without changing size or root
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_capacity_exceeded() {
        let values: [u8; 3] = kani::any();
        let extra: u8 = kani::any();
        let mut heap = BoundedBinaryHeap::new(3, Ascending);
        for v in values {
            heap.push(v).unwrap();
        }

        let root = heap.peek();
        assert_eq!(heap.push(extra), Err(HeapError::CapacityExceeded));
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), root);
    }

    /// Proof: an empty heap reports `EmptyContainer` for both pop and peek
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_empty_container() {
        let capacity: usize = kani::any();
        kani::assume(capacity <= 4);
        let mut heap = BoundedBinaryHeap::<u8, _>::new(capacity, Ascending);
        assert_eq!(heap.peek(), Err(HeapError::EmptyContainer));
        assert_eq!(heap.pop(), Err(HeapError::EmptyContainer));
    }
}
