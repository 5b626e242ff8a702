use super::Collector;

/// Conversion into a [`Collector`].
///
/// Taking `IntoCollector` in trait bounds lets a function accept both ready-made
/// [`Collector`]s and anything convertible into one, sparing callers an explicit
/// [`into_collector()`](IntoCollector::into_collector) call.
pub trait IntoCollector {
    /// The type of the items being collected.
    type Item;

    /// The output of the collector.
    type Output;

    /// Which collector being produced?
    type IntoCollector: Collector<Item = Self::Item, Output = Self::Output>;

    /// Creates a collector from a value.
    fn into_collector(self) -> Self::IntoCollector;
}

impl<C: Collector> IntoCollector for C {
    type Item = C::Item;

    type Output = C::Output;

    type IntoCollector = C;

    #[inline]
    fn into_collector(self) -> Self::IntoCollector {
        self
    }
}
