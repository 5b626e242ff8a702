//! Traits for collectors: the "sink half" of an iterator pipeline.
//!
//! An [`Iterator`] describes *how to produce* items; a [`Collector`] describes
//! *how to consume* them. [`IteratorExt::feed_into`] connects the two.

mod collector;
mod into_collector;
mod iterator_ext;

pub use collector::*;
pub use into_collector::*;
pub use iterator_ext::*;
