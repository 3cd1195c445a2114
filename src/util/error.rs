use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, IsVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeOutOfBounds {
    pub start: usize,
    pub count: usize,
    pub len: usize,
}

impl Display for RangeOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "Range of {} elements starting at {} out of bounds for collection with {} elements!",
            self.count, self.start, self.len
        )
    }
}

impl Error for RangeOutOfBounds {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFound;

impl Display for KeyNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No entry found for key!")
    }
}

impl Error for KeyNotFound {}

/// The first adjacent pair of a sequence that breaks strict ascending order. `index` is the
/// position of the earlier element of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum OrderViolation {
    #[display("Element at index {index} is ordered after its successor!")]
    OutOfOrder { index: usize },
    #[display("Element at index {index} is equivalent to its successor!")]
    Duplicate { index: usize },
}

impl OrderViolation {
    /// Returns the index of the earlier element of the offending pair.
    pub const fn index(&self) -> usize {
        match self {
            OrderViolation::OutOfOrder { index } | OrderViolation::Duplicate { index } => *index,
        }
    }
}
