use std::ops::ControlFlow;

/// Collects items and produces a final output.
///
/// This trait requires two core methods:
///
/// - [`collect`](Collector::collect): consumes an item and returns whether the
///   collector continues accumulating further items *after* this operation.
/// - [`finish`](Collector::finish): consumes the collector and returns the
///   accumulated result.
///
/// # Stopping
///
/// A collector signals with [`Break(())`] that it will not accumulate further
/// items. After any method has signaled a stop once, the behavior of subsequent
/// calls to any method other than [`finish`](Collector::finish) is unspecified;
/// callers should generally finish a collector once it has signaled a stop.
/// Collectors that can always accumulate — the frozen-list collectors in this
/// crate among them — simply return [`Continue(())`] every time.
///
/// # Example
///
/// A collector that keeps only the shortest item it has seen:
///
/// ```
/// use std::ops::ControlFlow;
/// use frozen_collect::prelude::*;
///
/// #[derive(Default)]
/// struct Shortest(Option<String>);
///
/// impl Collector for Shortest {
///     type Item = String;
///     type Output = Option<String>;
///
///     fn collect(&mut self, item: String) -> ControlFlow<()> {
///         match &self.0 {
///             Some(shortest) if shortest.len() <= item.len() => {}
///             _ => self.0 = Some(item),
///         }
///
///         ControlFlow::Continue(())
///     }
///
///     fn finish(self) -> Self::Output {
///         self.0
///     }
/// }
///
/// let shortest = ["sequoia", "fir", "cedar"]
///     .into_iter()
///     .map(String::from)
///     .feed_into(Shortest::default());
///
/// assert_eq!(shortest.as_deref(), Some("fir"));
/// ```
///
/// [`Continue(())`]: ControlFlow::Continue
/// [`Break(())`]: ControlFlow::Break
pub trait Collector {
    /// Type of items this collector collects and accumulates.
    type Item;

    /// The result this collector yields, via the [`finish`](Collector::finish) method.
    type Output
    where
        Self: Sized;

    /// Collects an item and returns a [`ControlFlow`] indicating whether
    /// the collector has stopped accumulating right after this operation.
    ///
    /// Return [`Continue(())`] to indicate the collector can still accumulate more
    /// items, or [`Break(())`] if it will not anymore and hence should no longer be
    /// fed further.
    ///
    /// # Examples
    ///
    /// ```
    /// use frozen_collect::prelude::*;
    ///
    /// let mut collector = ToFrozenList::new();
    ///
    /// // Frozen-list collectors never stop accumulating.
    /// assert!(collector.collect(1).is_continue());
    /// assert!(collector.collect(2).is_continue());
    ///
    /// assert_eq!(collector.finish(), [1, 2]);
    /// ```
    ///
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`Break(())`]: ControlFlow::Break
    fn collect(&mut self, item: Self::Item) -> ControlFlow<()>;

    /// Consumes the collector and returns the accumulated result.
    fn finish(self) -> Self::Output
    where
        Self: Sized;

    /// Returns a hint whether the collector has stopped accumulating.
    ///
    /// Returns `true` if it is guaranteed that the collector has stopped
    /// accumulating, or `false` otherwise. This should be called once before
    /// collecting items in a loop, so that a stopped collector does not consume
    /// one item prematurely.
    ///
    /// The default implementation always returns `false`.
    #[inline]
    fn break_hint(&self) -> bool {
        false
    }

    /// Collects items from an iterator and returns a [`ControlFlow`] indicating
    /// whether the collector has stopped collecting right after this operation.
    ///
    /// This method can be overridden for optimization; collections typically
    /// forward to [`Extend::extend`] rather than looping item by item.
    ///
    /// # Examples
    ///
    /// ```
    /// use frozen_collect::prelude::*;
    ///
    /// let mut collector = ToFrozenList::new();
    /// collector.collect_many([1, 2, 3]);
    ///
    /// assert_eq!(collector.finish(), [1, 2, 3]);
    /// ```
    fn collect_many(&mut self, items: impl IntoIterator<Item = Self::Item>) -> ControlFlow<()>
    where
        Self: Sized,
    {
        if self.break_hint() {
            ControlFlow::Break(())
        } else {
            // `try_for_each` instead of a `for` loop since the iterator may not be
            // optimal for `for` loop (e.g. `skip`, `chain`, etc.)
            items.into_iter().try_for_each(|item| self.collect(item))
        }
    }

    /// Collects items from an iterator, consumes the collector, and produces the
    /// accumulated result.
    ///
    /// Equivalent to [`collect_many`](Collector::collect_many) followed by
    /// [`finish`](Collector::finish) (the default implementation), but overridable
    /// to skip internal bookkeeping, since the collector is dropped anyway.
    ///
    /// # Examples
    ///
    /// ```
    /// use frozen_collect::prelude::*;
    ///
    /// let collector = ToFrozenList::new();
    ///
    /// assert_eq!(collector.collect_then_finish([1, 2, 3]), [1, 2, 3]);
    /// ```
    fn collect_then_finish(self, items: impl IntoIterator<Item = Self::Item>) -> Self::Output
    where
        Self: Sized,
    {
        let mut this = self;

        // Whether the collector broke or not, there is nothing left to feed it,
        // so we just finish.
        let _ = this.collect_many(items);
        this.finish()
    }
}
