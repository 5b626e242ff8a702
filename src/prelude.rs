//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the most frequently used traits and types.
//!
//! # Example
//!
//! ```
//! use frozen_collect::prelude::*;
//! ```

pub use crate::backing::ListBacking;
pub use crate::collector::{Collector, IntoCollector, IteratorExt};
pub use crate::frozen::FrozenList;
pub use crate::to_frozen::ToFrozenList;
