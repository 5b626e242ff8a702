use super::{Collector, IntoCollector};

/// Extends [`Iterator`] with the [`feed_into`](IteratorExt::feed_into) method
/// for working seamlessly with [`Collector`]s.
///
/// This trait is automatically implemented for all [`Iterator`] types.
pub trait IteratorExt: Iterator {
    /// Extracts items from this iterator into the provided collector till the
    /// collector stops accumulating or the iterator is exhausted, and returns
    /// the collector's output.
    ///
    /// To use this method, import the [`IteratorExt`] trait (the crate prelude
    /// re-exports it).
    ///
    /// # Examples
    ///
    /// ```
    /// use frozen_collect::prelude::*;
    ///
    /// let list = [4, 2, 6, 3].into_iter().feed_into(ToFrozenList::new());
    ///
    /// assert_eq!(list, [4, 2, 6, 3]);
    /// ```
    #[inline]
    fn feed_into<C>(self, collector: C) -> C::Output
    where
        Self: Sized,
        C: IntoCollector<Item = Self::Item>,
    {
        collector.into_collector().collect_then_finish(self)
    }
}

impl<I: Iterator> IteratorExt for I {}
