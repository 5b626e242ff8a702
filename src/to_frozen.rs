//! Collectors that accumulate items into a [`FrozenList`].

use crate::{backing::ListBacking, collector::Collector, frozen::FrozenList};

use std::ops::ControlFlow;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// A [`Collector`] that accumulates items into a mutable backing container in
/// encounter order, then freezes it. Its [`Output`] is [`FrozenList`].
///
/// The collector adds no failure modes of its own: it never stops accumulating,
/// duplicates pass through untouched, and an empty input yields an empty frozen
/// list rather than an error.
///
/// This struct is created by [`ToFrozenList::new`] (accumulating into a fresh
/// [`Vec`]) or [`ToFrozenList::with_backing`] (accumulating into a container of
/// the caller's choosing).
///
/// [`Output`]: Collector::Output
#[derive(Debug, Clone)]
pub struct ToFrozenList<B> {
    backing: B,
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<T> ToFrozenList<Vec<T>> {
    /// Creates a collector that accumulates into a fresh, empty [`Vec`].
    ///
    /// There are no guarantees about the backing container beyond those of
    /// [`FrozenList`] itself; use [`with_backing`](ToFrozenList::with_backing)
    /// when the concrete container matters.
    ///
    /// # Examples
    ///
    /// ```
    /// use frozen_collect::prelude::*;
    ///
    /// let list = ["a", "b", "a"].into_iter().feed_into(ToFrozenList::new());
    ///
    /// assert_eq!(list, ["a", "b", "a"]);
    /// ```
    #[inline]
    pub fn new() -> Self {
        ToFrozenList { backing: Vec::new() }
    }
}

#[cfg(feature = "alloc")]
impl<T> Default for ToFrozenList<Vec<T>> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ListBacking> ToFrozenList<B> {
    /// Creates a collector that accumulates into a container produced by the
    /// given factory.
    ///
    /// The factory is invoked exactly once, here, and should return a fresh,
    /// empty container. The frozen result is a view over that very container,
    /// so any capability of the backing type — a `serde`-enabled container
    /// under the `serde` feature, say — carries through to the result.
    ///
    /// If the factory returns a container that already holds elements, they are
    /// not cleared: they stay at the front of the frozen result, followed by
    /// the collected items. If the factory panics, the panic propagates to the
    /// caller unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::VecDeque;
    /// use frozen_collect::prelude::*;
    ///
    /// let list = (1..=3).feed_into(ToFrozenList::with_backing(VecDeque::new));
    ///
    /// assert_eq!(list, [1, 2, 3]);
    /// ```
    ///
    /// A pre-populated backing keeps its elements in front:
    ///
    /// ```
    /// use frozen_collect::prelude::*;
    ///
    /// let list = (3..=4).feed_into(ToFrozenList::with_backing(|| vec![1, 2]));
    ///
    /// assert_eq!(list, [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn with_backing(make_backing: impl FnOnce() -> B) -> Self {
        ToFrozenList {
            backing: make_backing(),
        }
    }
}

impl<B: ListBacking> Collector for ToFrozenList<B> {
    type Item = B::Item;
    type Output = FrozenList<B>;

    #[inline]
    fn collect(&mut self, item: Self::Item) -> ControlFlow<()> {
        self.backing.push(item);
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Self::Output {
        FrozenList::freeze(self.backing)
    }

    #[inline]
    fn collect_many(&mut self, items: impl IntoIterator<Item = Self::Item>) -> ControlFlow<()> {
        self.backing.extend(items);
        ControlFlow::Continue(())
    }

    #[inline]
    fn collect_then_finish(mut self, items: impl IntoIterator<Item = Self::Item>) -> Self::Output {
        self.backing.extend(items);
        FrozenList::freeze(self.backing)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::prelude::*;

    use std::collections::VecDeque;

    #[test]
    fn never_stops_accumulating() {
        let mut collector = ToFrozenList::new();

        assert!(!collector.break_hint());
        assert!(collector.collect(1).is_continue());
        assert!(collector.collect(2).is_continue());
        assert!(collector.collect_many([3, 4]).is_continue());

        assert_eq!(collector.finish(), [1, 2, 3, 4]);
    }

    #[test]
    fn empty_input_yields_an_empty_list() {
        let list = std::iter::empty::<i32>().feed_into(ToFrozenList::new());

        assert!(list.is_empty());
    }

    #[test]
    fn duplicates_and_order_survive() {
        let list = ["a", "b", "a"].into_iter().feed_into(ToFrozenList::new());

        assert_eq!(list, ["a", "b", "a"]);
    }

    #[test]
    fn factory_chooses_the_backing() {
        let list = (1..=3).feed_into(ToFrozenList::with_backing(VecDeque::new));

        let deque: VecDeque<i32> = list.into_backing();
        assert_eq!(deque, [1, 2, 3]);
    }

    #[test]
    fn prepopulated_backing_stays_in_front() {
        let list = (3..=4).feed_into(ToFrozenList::with_backing(|| vec![1, 2]));

        assert_eq!(list, [1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "factory failed")]
    fn factory_panic_propagates() {
        let _ = ToFrozenList::<Vec<i32>>::with_backing(|| panic!("factory failed"));
    }
}
