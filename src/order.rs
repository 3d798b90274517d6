//! Ready-made orderings
//!
//! Each type here implements [`Order`] and already follows the
//! absent-operand convention, so callers only think about present values.
//!
//! | Ordering | Root holds |
//! |----------|------------|
//! | [`Ascending`] | the smallest element |
//! | [`Descending`] | the largest element |
//! | [`ByKey`] | the element with the smallest key |
//! | [`ByPredicate`] | whatever the wrapped `less` puts first |
//! | [`Reversed`] | the weakest element of the wrapped order |

use crate::traits::Order;

/// Applies the absent-operand convention around a comparison of present values
#[inline]
fn lift<T>(a: Option<&T>, b: Option<&T>, outranks: impl FnOnce(&T, &T) -> bool) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => outranks(a, b),
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Smallest element first (min-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascending;

impl<T: Ord> Order<T> for Ascending {
    #[inline]
    fn outranks(&self, a: Option<&T>, b: Option<&T>) -> bool {
        lift(a, b, |a, b| a < b)
    }
}

/// Largest element first (max-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Descending;

impl<T: Ord> Order<T> for Descending {
    #[inline]
    fn outranks(&self, a: Option<&T>, b: Option<&T>) -> bool {
        lift(a, b, |a, b| a > b)
    }
}

/// Wraps a strict comparison over present values
///
/// `less(a, b)` must return true when `a` belongs closer to the root than
/// `b`. A missing operand is handled by the wrapper.
///
/// ```rust
/// use bounded_heapq::BoundedBinaryHeap;
/// use bounded_heapq::order::ByPredicate;
///
/// let mut heap = BoundedBinaryHeap::new(8, ByPredicate(|a: &f64, b: &f64| a < b));
/// heap.push(2.5).unwrap();
/// heap.push(-1.0).unwrap();
/// assert_eq!(heap.peek(), Ok(-1.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByPredicate<F>(pub F);

impl<T, F> Order<T> for ByPredicate<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn outranks(&self, a: Option<&T>, b: Option<&T>) -> bool {
        lift(a, b, &self.0)
    }
}

/// Smallest key first, where the key is extracted by the wrapped function
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Order<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn outranks(&self, a: Option<&T>, b: Option<&T>) -> bool {
        lift(a, b, |a, b| (self.0)(a) < (self.0)(b))
    }
}

/// Inverts the priority of present elements in the wrapped order
///
/// The absent-operand convention is preserved: a missing element still loses
/// against every present one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<O>(pub O);

impl<T, O: Order<T>> Order<T> for Reversed<O> {
    #[inline]
    fn outranks(&self, a: Option<&T>, b: Option<&T>) -> bool {
        match (a, b) {
            (Some(_), Some(_)) => self.0.outranks(b, a),
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}
