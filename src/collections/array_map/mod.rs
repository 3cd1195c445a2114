//! A module containing [`ArrayMap`] and associated types.
//!
//! Currently, the only other included types are for iteration, providing owned and borrowed
//! iteration over entries, keys or values in a map, all in key order.
//!
//! As a note, there is no mutable iterator over keys because mutating the keys of an ArrayMap in
//! place could break its ordering, which would cause a logic error.
//!
//! [`ArrayMap`] is also re-exported under the parent module.

mod array_map;
mod iter;

pub use array_map::*;
pub use iter::*;
