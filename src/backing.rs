//! The mutable, insertion-ordered containers a frozen list accumulates into.

#[cfg(feature = "std")]
use std::collections::{VecDeque, vec_deque};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{
    collections::{VecDeque, vec_deque},
    vec::Vec,
};

/// A mutable container that keeps its elements in insertion order.
///
/// This is the accumulation target behind [`ToFrozenList`](crate::ToFrozenList)
/// and the storage behind [`FrozenList`](crate::FrozenList). Implementations must
/// preserve encounter order: after any sequence of [`push`](ListBacking::push) and
/// [`extend`](Extend::extend) calls, iteration yields the elements in exactly the
/// order they were added.
///
/// Duplicate elements are permitted; this is a list, not a set.
pub trait ListBacking: IntoIterator + Extend<Self::Item> {
    /// Borrowing iterator over the elements, front to back.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Appends an element at the back.
    fn push(&mut self, item: Self::Item);

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index` counted from the front, or [`None`] if
    /// `index` is out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Iterates over the elements, front to back.
    fn iter(&self) -> Self::Iter<'_>;
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<T> ListBacking for Vec<T> {
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<T> ListBacking for VecDeque<T> {
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn push(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn vec_keeps_insertion_order() {
        let mut backing = vec![1, 2];
        ListBacking::push(&mut backing, 3);
        backing.extend([4, 5]);

        assert_eq!(ListBacking::len(&backing), 5);
        assert_eq!(ListBacking::get(&backing, 0), Some(&1));
        assert_eq!(ListBacking::get(&backing, 4), Some(&5));
        assert_eq!(ListBacking::get(&backing, 5), None);
    }

    #[test]
    fn deque_pushes_at_the_back() {
        let mut backing = VecDeque::from([1, 2]);
        ListBacking::push(&mut backing, 3);

        assert_eq!(
            ListBacking::iter(&backing).copied().collect::<Vec<_>>(),
            [1, 2, 3],
        );
    }
}
