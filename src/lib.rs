//! This crate is my take on sorted, array backed collections: a map and a set that keep their
//! elements in one contiguous, ordered allocation, along with the binary search algorithms they
//! are built on.
//!
//! # Purpose
//! A tree or hash based collection is the usual choice for lookups, but for small to medium sized
//! collections that are read far more than they are written, a sorted array tends to win. There is
//! a single allocation, iteration is a walk over a slice and a lookup is a binary search over
//! memory that is already in cache. The cost is that insertion and removal shift the tail of the
//! array, which is `O(n)`.
//!
//! # Method
//! Every collection is ordered by a [`Comparator`](algorithm::Comparator), which is a three way
//! comparison rather than a less-than predicate. Elements that compare equal are *equivalent* and
//! can't both be stored, even if they aren't identical. The default comparator,
//! [`NaturalOrder`](algorithm::NaturalOrder), defers to [`Ord`], but any closure of the right
//! shape can be used instead, which saves me from writing a newtype every time I want a different
//! ordering.
//!
//! Lookups are generic over [`Borrow`](std::borrow::Borrow), the same way [`std`]'s maps are, so
//! an `ArrayMap<String, V>` can be searched with a `&str`.
//!
//! # Error Handling
//! Specifically for collections, it is more ergonomic for functions to panic in some cases,
//! because users don't want to be forced to handle an error every time they index into a
//! collection. Where a method can only fail through misuse (such as an index out of bounds), it
//! panics and documents the panic. Where a caller could reasonably want to branch, an [`Option`]
//! or a [`Result`] is returned instead.
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! with structs and enums from the [`error`] module that implement
//! [`Error`](std::error::Error). Panics raise the same types, so the messages stay consistent.
//!
//! # Dependencies
//! The collections are built on [`Vec`], because the interesting part here is the ordering rather
//! than the allocation. This crate also depends on some derive macros because they're helpful and
//! remove the need for some very repetitive programming.
//!
//! # Potential Future Additions
//! - A multimap / multiset variant which admits equivalent elements.
//! - Fixed capacity variants that never allocate.

// #![warn(missing_docs)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod algorithm;
#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

pub use util::error;
