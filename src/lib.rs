//! Collectors that gather iterator items into an immutable, insertion-ordered list.
//!
//! Rust's [`Iterator::collect`] happily materializes an iterator into a `Vec`, but the
//! `Vec` it hands back is as mutable as any other. When a value is meant to be
//! "collected once, then only read" — a parsed argument list, a resolved set of
//! search results, a snapshot handed to other components — nothing in the type stops
//! a later `push` or `remove` from quietly invalidating it.
//!
//! This crate provides [`FrozenList`], an insertion-ordered list that is immutable
//! *by construction*: the type simply has no mutating operations, so "mutate after
//! freeze" is a compile error rather than a runtime surprise. Lists are produced in
//! a single pass by [`ToFrozenList`], a [`Collector`] in the sink-half-of-a-pipeline
//! sense: the iterator describes how items are produced, the collector describes how
//! they are consumed.
//!
//! ```
//! use frozen_collect::prelude::*;
//!
//! let list = ["a", "b", "a"].into_iter().feed_into(ToFrozenList::new());
//!
//! // Duplicates and encounter order are both preserved.
//! assert_eq!(list, ["a", "b", "a"]);
//! assert_eq!(list.len(), 3);
//!
//! // There is no `push`, `insert`, `remove`, or `clear` to call -- the following
//! // would not compile:
//! // list.push("c");
//! ```
//!
//! # Choosing the backing container
//!
//! [`ToFrozenList::new`] accumulates into a plain [`Vec`]; callers who care about the
//! concrete container behind the frozen view supply their own factory with
//! [`ToFrozenList::with_backing`]. Any [`ListBacking`] works, and the frozen result
//! is a thin read-only view over the factory's container — not a copy — so whatever
//! the container can do (say, serde support via the `serde` feature) the frozen list
//! can do too.
//!
//! ```
//! use std::collections::VecDeque;
//! use frozen_collect::prelude::*;
//!
//! let list = (1..=3).feed_into(ToFrozenList::with_backing(VecDeque::new));
//!
//! assert_eq!(list, [1, 2, 3]);
//! ```
//!
//! The plain [`FromIterator`] spelling is also available when no custom backing is
//! needed:
//!
//! ```
//! use frozen_collect::FrozenList;
//!
//! let list: FrozenList<Vec<_>> = "one two three".split_whitespace().collect();
//!
//! assert_eq!(list, ["one", "two", "three"]);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

mod backing;
mod collector;
mod frozen;
pub mod prelude;
mod to_frozen;

pub use backing::*;
pub use collector::*;
pub use frozen::*;
pub use to_frozen::*;
