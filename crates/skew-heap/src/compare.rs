//! Ordering policies.
//!
//! A heap's comparator decides which of two keys rises towards the root.
//! Swapping [`MinOrder`] for [`MaxOrder`] turns a minimum-priority queue
//! into a maximum-priority queue; [`FnOrder`] adapts any closure.

use std::fmt;

/// Strict weak order used to pick the preferred root during merge.
///
/// `prefers(a, b)` returns `true` when `a` must sit above `b`. It must be
/// irreflexive and transitive; keys for which neither is preferred are
/// treated as equal and leave the heap in an arbitrary relative order.
pub trait Compare<T: ?Sized> {
    /// Whether `a` outranks `b`.
    fn prefers(&self, a: &T, b: &T) -> bool;
}

/// Smallest key on top (`a < b`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord + ?Sized> Compare<T> for MinOrder {
    #[inline]
    fn prefers(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest key on top (`a > b`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Compare<T> for MaxOrder {
    #[inline]
    fn prefers(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Closure-backed ordering.
///
/// ```rust
/// use skew_heap::{FnOrder, SkewHeap};
///
/// let by_len = FnOrder(|a: &&str, b: &&str| a.len() < b.len());
/// let mut heap = SkewHeap::with_comparator(by_len);
/// heap.extend(["ccc", "a", "bb"]);
/// assert_eq!(heap.pop(), Ok("a"));
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnOrder<F>(pub F);

impl<T: ?Sized, F> Compare<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn prefers(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOrder(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_order_prefers_smaller() {
        assert!(MinOrder.prefers(&1, &2));
        assert!(!MinOrder.prefers(&2, &1));
        assert!(!MinOrder.prefers(&2, &2));
    }

    #[test]
    fn max_order_prefers_larger() {
        assert!(MaxOrder.prefers(&2, &1));
        assert!(!MaxOrder.prefers(&1, &2));
        assert!(!MaxOrder.prefers(&2, &2));
    }

    #[test]
    fn unsized_keys_compare() {
        assert!(MinOrder.prefers("abc", "abd"));
        assert!(MaxOrder.prefers([3, 0].as_slice(), [2, 9].as_slice()));
    }

    #[test]
    fn fn_order_wraps_closure() {
        let by_abs = FnOrder(|a: &i32, b: &i32| a.abs() < b.abs());
        assert!(by_abs.prefers(&-1, &3));
        assert!(!by_abs.prefers(&-4, &3));
        assert_eq!(format!("{by_abs:?}"), "FnOrder(..)");
    }
}
