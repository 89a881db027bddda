//! Iterators that pop in preference order.

use std::iter::FusedIterator;

use crate::compare::Compare;
use crate::heap::Heap;
use crate::store::NodeStore;

/// Draining iterator returned by [`Heap::drain_sorted`].
///
/// Each `next` is a `pop`. Dropping the iterator clears the heap.
pub struct DrainSorted<'a, T, C, S>
where
    S: NodeStore<T>,
{
    heap: &'a mut Heap<T, C, S>,
}

impl<'a, T, C, S> DrainSorted<'a, T, C, S>
where
    S: NodeStore<T>,
{
    pub(crate) fn new(heap: &'a mut Heap<T, C, S>) -> Self {
        Self { heap }
    }
}

impl<T, C, S> Iterator for DrainSorted<'_, T, C, S>
where
    C: Compare<T>,
    S: NodeStore<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.heap.len();
        (n, Some(n))
    }
}

impl<T, C, S> ExactSizeIterator for DrainSorted<'_, T, C, S>
where
    C: Compare<T>,
    S: NodeStore<T>,
{
}

impl<T, C, S> FusedIterator for DrainSorted<'_, T, C, S>
where
    C: Compare<T>,
    S: NodeStore<T>,
{
}

impl<T, C, S> Drop for DrainSorted<'_, T, C, S>
where
    S: NodeStore<T>,
{
    fn drop(&mut self) {
        self.heap.clear();
    }
}

/// Owning iterator returned by [`Heap::into_iter`](IntoIterator::into_iter).
pub struct IntoSorted<T, C, S>
where
    S: NodeStore<T>,
{
    heap: Heap<T, C, S>,
}

impl<T, C, S> IntoSorted<T, C, S>
where
    S: NodeStore<T>,
{
    pub(crate) fn new(heap: Heap<T, C, S>) -> Self {
        Self { heap }
    }
}

impl<T, C, S> Iterator for IntoSorted<T, C, S>
where
    C: Compare<T>,
    S: NodeStore<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.heap.len();
        (n, Some(n))
    }
}

impl<T, C, S> ExactSizeIterator for IntoSorted<T, C, S>
where
    C: Compare<T>,
    S: NodeStore<T>,
{
}

impl<T, C, S> FusedIterator for IntoSorted<T, C, S>
where
    C: Compare<T>,
    S: NodeStore<T>,
{
}
