//! A module containing [`BoxArrayMap`], an [`ArrayMap`](crate::collections::ArrayMap) that owns
//! its values through boxes, and the types for iterating over it.
//!
//! [`BoxArrayMap`] is also re-exported under the parent module.

mod box_array_map;
mod iter;
mod tests;

pub use box_array_map::*;
pub use iter::*;
