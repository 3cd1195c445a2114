use std::cmp::Ordering;
use std::iter::{FusedIterator, Peekable};
use std::{slice, vec};

use super::ArraySet;
use crate::algorithm::Comparator;

impl<T, C> IntoIterator for ArraySet<T, C> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_iter())
    }
}

/// A type for owned iteration over an [`ArraySet`]. Produces values of type `T` in sorted order.
///
/// See [`ArraySet::into_iter`].
pub struct IntoIter<T>(pub(crate) vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T, C> IntoIterator for &'a ArraySet<T, C> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type for borrowed iteration over an [`ArraySet`]. Produces values of type `&T` in sorted
/// order.
///
/// See [`ArraySet::iter`] and [`ArraySet::range`].
pub struct Iter<'a, T>(pub(crate) slice::Iter<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

/// One step of walking two sorted sets side by side.
enum Step<'a, T> {
    Left(&'a T),
    Right(&'a T),
    Both(&'a T),
}

/// Walks two sets in lockstep, in sorted order, pairing up equivalent elements.
struct Merge<'a, T, C> {
    left: Peekable<slice::Iter<'a, T>>,
    right: Peekable<slice::Iter<'a, T>>,
    comparator: &'a C,
}

impl<'a, T, C: Comparator<T>> Merge<'a, T, C> {
    fn new(left: &'a ArraySet<T, C>, right: &'a ArraySet<T, C>) -> Merge<'a, T, C> {
        Merge {
            left: left.inner.iter().peekable(),
            right: right.inner.iter().peekable(),
            comparator: &left.comparator,
        }
    }

    fn step(&mut self) -> Option<Step<'a, T>> {
        let order = match (self.left.peek(), self.right.peek()) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(l), Some(r)) => self.comparator.compare(l, r),
        };

        match order {
            Ordering::Less => self.left.next().map(Step::Left),
            Ordering::Greater => self.right.next().map(Step::Right),
            Ordering::Equal => {
                self.right.next();
                self.left.next().map(Step::Both)
            },
        }
    }

    fn remaining(&self) -> (usize, usize) {
        (self.left.len(), self.right.len())
    }
}

/// An iterator over the union of two [`ArraySet`]s, in sorted order. Of two equivalent elements,
/// the one from the left set is produced.
///
/// See [`ArraySet::union`].
pub struct Union<'a, T, C> {
    merge: Merge<'a, T, C>,
}

impl<'a, T, C: Comparator<T>> Union<'a, T, C> {
    pub(crate) fn new(left: &'a ArraySet<T, C>, right: &'a ArraySet<T, C>) -> Self {
        Union {
            merge: Merge::new(left, right),
        }
    }
}

impl<'a, T, C: Comparator<T>> Iterator for Union<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.merge.step()? {
            Step::Left(item) | Step::Right(item) | Step::Both(item) => Some(item),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left, right) = self.merge.remaining();
        (usize::max(left, right), left.checked_add(right))
    }
}

impl<'a, T, C: Comparator<T>> FusedIterator for Union<'a, T, C> {}

/// An iterator over the elements of the left [`ArraySet`] that have an equivalent in the right
/// one, in sorted order.
///
/// See [`ArraySet::intersection`].
pub struct Intersection<'a, T, C> {
    merge: Merge<'a, T, C>,
}

impl<'a, T, C: Comparator<T>> Intersection<'a, T, C> {
    pub(crate) fn new(left: &'a ArraySet<T, C>, right: &'a ArraySet<T, C>) -> Self {
        Intersection {
            merge: Merge::new(left, right),
        }
    }
}

impl<'a, T, C: Comparator<T>> Iterator for Intersection<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Step::Both(item) = self.merge.step()? {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left, right) = self.merge.remaining();
        (0, Some(usize::min(left, right)))
    }
}

impl<'a, T, C: Comparator<T>> FusedIterator for Intersection<'a, T, C> {}

/// An iterator over the elements of the left [`ArraySet`] without an equivalent in the right one,
/// in sorted order.
///
/// See [`ArraySet::difference`].
pub struct Difference<'a, T, C> {
    merge: Merge<'a, T, C>,
}

impl<'a, T, C: Comparator<T>> Difference<'a, T, C> {
    pub(crate) fn new(left: &'a ArraySet<T, C>, right: &'a ArraySet<T, C>) -> Self {
        Difference {
            merge: Merge::new(left, right),
        }
    }
}

impl<'a, T, C: Comparator<T>> Iterator for Difference<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Step::Left(item) = self.merge.step()? {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.merge.remaining().0))
    }
}

impl<'a, T, C: Comparator<T>> FusedIterator for Difference<'a, T, C> {}

/// An iterator over the elements in exactly one of two [`ArraySet`]s, in sorted order.
///
/// See [`ArraySet::symmetric_difference`].
pub struct SymmetricDifference<'a, T, C> {
    merge: Merge<'a, T, C>,
}

impl<'a, T, C: Comparator<T>> SymmetricDifference<'a, T, C> {
    pub(crate) fn new(left: &'a ArraySet<T, C>, right: &'a ArraySet<T, C>) -> Self {
        SymmetricDifference {
            merge: Merge::new(left, right),
        }
    }
}

impl<'a, T, C: Comparator<T>> Iterator for SymmetricDifference<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.merge.step()? {
                Step::Left(item) | Step::Right(item) => return Some(item),
                Step::Both(_) => continue,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left, right) = self.merge.remaining();
        (0, left.checked_add(right))
    }
}

impl<'a, T, C: Comparator<T>> FusedIterator for SymmetricDifference<'a, T, C> {}
