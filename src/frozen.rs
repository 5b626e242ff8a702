//! The immutable, insertion-ordered list type.

use crate::backing::ListBacking;

use std::{fmt, ops::Index};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// An immutable, insertion-ordered list over a backing container `B`.
///
/// A `FrozenList` is a thin read-only view that owns its backing exclusively:
/// construction hands the container over, and from that point on the list's
/// contents and order never change. The type exposes no mutating operations,
/// so freezing is enforced at compile time — there is no runtime "unsupported
/// operation" to trip over.
///
/// Lists are usually produced by [`ToFrozenList`](crate::ToFrozenList) or by
/// [`collect()`](Iterator::collect); [`freeze`](FrozenList::freeze) wraps an
/// already-built container directly.
///
/// # Examples
///
/// ```
/// use frozen_collect::FrozenList;
///
/// let list = FrozenList::freeze(vec!["a", "b", "a"]);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list[1], "b");
/// assert_eq!(list.last(), Some(&"a"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FrozenList<B> {
    backing: B,
}

impl<B: ListBacking> FrozenList<B> {
    /// Freezes a backing container into an immutable list.
    ///
    /// The elements already in `backing` become the list's contents, in their
    /// existing order. This is a wrapping step, not a copy: the container is
    /// moved in as-is.
    #[inline]
    pub fn freeze(backing: B) -> Self {
        FrozenList { backing }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.backing.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// Returns the element at `index`, or [`None`] if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&B::Item> {
        self.backing.get(index)
    }

    /// Returns the first element, or [`None`] if the list is empty.
    #[inline]
    pub fn first(&self) -> Option<&B::Item> {
        self.backing.get(0)
    }

    /// Returns the last element, or [`None`] if the list is empty.
    #[inline]
    pub fn last(&self) -> Option<&B::Item> {
        self.len().checked_sub(1).and_then(|last| self.backing.get(last))
    }

    /// Iterates over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> B::Iter<'_> {
        self.backing.iter()
    }

    /// Consumes the list and returns the backing container.
    ///
    /// This is the only way out of the frozen state, and it is sound precisely
    /// because it consumes `self`: once the backing is returned, no frozen view
    /// of it exists anymore, so mutating it cannot break any list's guarantee.
    ///
    /// # Examples
    ///
    /// ```
    /// use frozen_collect::FrozenList;
    ///
    /// let list = FrozenList::freeze(vec![1, 2]);
    ///
    /// let mut backing = list.into_backing();
    /// backing.push(3);
    ///
    /// assert_eq!(FrozenList::freeze(backing), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_backing(self) -> B {
        self.backing
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<T> FrozenList<Vec<T>> {
    /// Views a `Vec`-backed list as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.backing
    }
}

impl<B: ListBacking> fmt::Debug for FrozenList<B>
where
    B::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<B: ListBacking> Index<usize> for FrozenList<B> {
    type Output = B::Item;

    fn index(&self, index: usize) -> &B::Item {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index,
            ),
        }
    }
}

impl<B: ListBacking> IntoIterator for FrozenList<B> {
    type Item = B::Item;

    type IntoIter = B::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.backing.into_iter()
    }
}

impl<'a, B: ListBacking> IntoIterator for &'a FrozenList<B> {
    type Item = &'a B::Item;

    type IntoIter = B::Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<B> FromIterator<B::Item> for FrozenList<B>
where
    B: ListBacking + Default,
{
    fn from_iter<I: IntoIterator<Item = B::Item>>(iter: I) -> Self {
        let mut backing = B::default();
        backing.extend(iter);
        FrozenList::freeze(backing)
    }
}

impl<B, T, const N: usize> PartialEq<[T; N]> for FrozenList<B>
where
    B: ListBacking,
    B::Item: PartialEq<T>,
{
    fn eq(&self, other: &[T; N]) -> bool {
        self.len() == N && self.iter().zip(other).all(|(item, other)| item == other)
    }
}

impl<B, T> PartialEq<[T]> for FrozenList<B>
where
    B: ListBacking,
    B::Item: PartialEq<T>,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(item, other)| item == other)
    }
}

impl<B, T> PartialEq<&[T]> for FrozenList<B>
where
    B: ListBacking,
    B::Item: PartialEq<T>,
{
    #[inline]
    fn eq(&self, other: &&[T]) -> bool {
        *self == **other
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_impls {
    use super::FrozenList;
    use crate::backing::ListBacking;

    use std::{fmt, marker::PhantomData};

    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    /// Serializes as a plain sequence, so a frozen list and its backing
    /// container have the same wire shape.
    impl<B> Serialize for FrozenList<B>
    where
        B: ListBacking,
        B::Item: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de, B> Deserialize<'de> for FrozenList<B>
    where
        B: ListBacking + Default,
        B::Item: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_seq(SeqVisitor(PhantomData))
        }
    }

    struct SeqVisitor<B>(PhantomData<B>);

    impl<'de, B> de::Visitor<'de> for SeqVisitor<B>
    where
        B: ListBacking + Default,
        B::Item: Deserialize<'de>,
    {
        type Value = FrozenList<B>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a sequence")
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut backing = B::default();
            while let Some(item) = seq.next_element()? {
                backing.push(item);
            }

            Ok(FrozenList::freeze(backing))
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    use std::collections::VecDeque;

    #[test]
    fn empty_list() {
        let list: FrozenList<Vec<i32>> = FrozenList::freeze(Vec::new());

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn order_and_duplicates_preserved() {
        let list = FrozenList::freeze(vec!["a", "b", "a"]);

        assert_eq!(list, ["a", "b", "a"]);
        assert_eq!(list.get(0), Some(&"a"));
        assert_eq!(list.get(2), Some(&"a"));
        assert_eq!(list.get(3), None);
        assert_eq!(list.first(), Some(&"a"));
        assert_eq!(list.last(), Some(&"a"));
        assert_eq!(list[1], "b");
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_past_the_end_panics() {
        let list = FrozenList::freeze(vec![1, 2]);
        let _ = list[2];
    }

    #[test]
    fn both_into_iterators_agree() {
        let list = FrozenList::freeze(vec![1, 2, 3]);

        let borrowed: Vec<i32> = (&list).into_iter().copied().collect();
        let owned: Vec<i32> = list.into_iter().collect();

        assert_eq!(borrowed, owned);
        assert_eq!(owned, [1, 2, 3]);
    }

    #[test]
    fn from_iterator_freezes() {
        let list: FrozenList<Vec<_>> = (1..=4).collect();

        assert_eq!(list, [1, 2, 3, 4]);
        assert_eq!(list.as_slice(), [1, 2, 3, 4]);
    }

    #[test]
    fn deque_backing_reads_the_same() {
        let list: FrozenList<VecDeque<_>> = (1..=3).collect();

        assert_eq!(list, [1, 2, 3]);
        assert_eq!(list[0], 1);
        assert_eq!(list.last(), Some(&3));
    }

    #[test]
    fn thaw_and_refreeze() {
        let list = FrozenList::freeze(vec![1, 2]);

        let mut backing = list.into_backing();
        backing.push(3);

        assert_eq!(FrozenList::freeze(backing), [1, 2, 3]);
    }

    #[test]
    fn debug_prints_like_a_list() {
        let list = FrozenList::freeze(vec![1, 2, 3]);

        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }
}

#[cfg(all(test, feature = "serde", feature = "std"))]
mod serde_tests {
    use super::*;

    use std::collections::VecDeque;

    #[test]
    fn serializes_as_a_sequence() {
        let list = FrozenList::freeze(vec![1, 2, 3]);

        assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2,3]");
    }

    #[test]
    fn backing_capability_carries_through() {
        // A factory-chosen backing that can serialize yields a frozen list
        // that can serialize, with the same wire shape.
        let deque_backed: FrozenList<VecDeque<_>> = (1..=3).collect();
        let vec_backed: FrozenList<Vec<_>> = (1..=3).collect();

        assert_eq!(
            serde_json::to_string(&deque_backed).unwrap(),
            serde_json::to_string(&vec_backed).unwrap(),
        );
    }

    #[test]
    fn round_trips() {
        let list = FrozenList::freeze(vec!["a".to_owned(), "b".to_owned(), "a".to_owned()]);

        let json = serde_json::to_string(&list).unwrap();
        let back: FrozenList<Vec<String>> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, list);
    }
}
