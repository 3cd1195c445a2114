//! A module containing [`ArraySet`] and associated types.
//!
//! Alongside iteration over the set itself, this module contains the lazy iterators produced by
//! set operations such as [`ArraySet::union`]. Each of them walks both sets once, in order.
//!
//! [`ArraySet`] is also re-exported under the parent module.

mod array_set;
mod iter;
mod tests;

pub use array_set::*;
pub use iter::*;
