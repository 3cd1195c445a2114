//! The comparator contract and the binary search primitives that every ordered collection in this
//! crate is built on.
//!
//! Searching is written against an abstract indexable sequence: a length and either an accessor
//! or a `compare_at` closure `FnMut(usize) -> Ordering`. This keeps the search independent of how the
//! elements are stored, e.g. [`ArrayMap`](crate::collections::ArrayMap) searches the key half of
//! its pairs without building a slice of keys.

mod bounds;
mod compare;
#[cfg(any(feature = "map", feature = "set"))]
pub(crate) mod merge;

pub use bounds::*;
pub use compare::*;
