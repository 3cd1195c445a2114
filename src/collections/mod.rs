//! Ordered collections stored in a single contiguous allocation.
//!
//! # Method
//! Each collection keeps its elements in a [`Vec`] which is strictly ascending under the
//! collection's [`Comparator`](crate::algorithm::Comparator). Lookups are binary searches and
//! mutations shift the tail of the storage. This trades the `O(log n)` insertion of a tree for
//! cache friendly iteration and no per-element allocation.
//!
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (but never
//! DerefMut), exposing the sorted storage as a read only slice, which saves me from writing some
//! of the more repetitive functionality.
//!
//! It is a logic error for an element (or key) to be changed in a way that changes its ordering
//! relative to the others. None of these collections hand out mutable references to anything that
//! takes part in the ordering, but interior mutability could still be used to do so.

#[cfg(feature = "map")]
pub mod array_map;
#[cfg(feature = "set")]
pub mod array_set;
#[cfg(feature = "boxed")]
pub mod box_array_map;

#[cfg(feature = "map")]
#[doc(inline)]
pub use array_map::ArrayMap;
#[cfg(feature = "set")]
#[doc(inline)]
pub use array_set::ArraySet;
#[cfg(feature = "boxed")]
#[doc(inline)]
pub use box_array_map::BoxArrayMap;
