use std::cmp::Ordering;

use crate::util::error::OrderViolation;

/// A three-way comparison between values of type `A` and `B`.
///
/// Implementations must describe a strict weak ordering: `Less` is irreflexive and transitive,
/// and two values are *equivalent* when neither is less than the other, which the comparator
/// reports as [`Ordering::Equal`]. Equivalence doesn't have to mean equality, a comparator may
/// only look at part of a value.
///
/// All `Fn(&A, &B) -> Ordering` types are comparators, so closures and function items can be
/// used directly.
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use array_collections::algorithm::{Comparator, NaturalOrder, Reversed};
/// assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
/// assert_eq!(Reversed(NaturalOrder).compare(&1, &2), Ordering::Greater);
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"ab", &"cd"), Ordering::Equal);
/// ```
pub trait Comparator<A: ?Sized, B: ?Sized = A> {
    /// Compares `a` to `b`.
    fn compare(&self, a: &A, b: &B) -> Ordering;

    /// Returns true if `a` and `b` are equivalent under this comparator.
    fn equivalent(&self, a: &A, b: &B) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<A, B, F> Comparator<A, B> for F
where
    A: ?Sized,
    B: ?Sized,
    F: Fn(&A, &B) -> Ordering,
{
    fn compare(&self, a: &A, b: &B) -> Ordering {
        self(a, b)
    }
}

/// The default comparator, ordering values according to their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses the ordering of the wrapped comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reversed<C = NaturalOrder>(pub C);

impl<A: ?Sized, B: ?Sized, C: Comparator<A, B>> Comparator<A, B> for Reversed<C> {
    fn compare(&self, a: &A, b: &B) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}

/// Checks that `items` is strictly ascending under `comparator`, which is the invariant held by
/// every ordered collection in this crate. The first offending pair is reported.
///
/// # Examples
/// ```
/// # use array_collections::algorithm::{check_strictly_ascending, NaturalOrder};
/// # use array_collections::error::OrderViolation;
/// assert_eq!(check_strictly_ascending(&[1, 2, 5], &NaturalOrder), Ok(()));
/// assert_eq!(
///     check_strictly_ascending(&[1, 2, 2], &NaturalOrder),
///     Err(OrderViolation::Duplicate { index: 1 }),
/// );
/// assert_eq!(
///     check_strictly_ascending(&[3, 1], &NaturalOrder),
///     Err(OrderViolation::OutOfOrder { index: 0 }),
/// );
/// ```
pub fn check_strictly_ascending<T, C>(items: &[T], comparator: &C) -> Result<(), OrderViolation>
where
    C: Comparator<T> + ?Sized,
{
    for (index, pair) in items.windows(2).enumerate() {
        match comparator.compare(&pair[0], &pair[1]) {
            Ordering::Less => {},
            Ordering::Equal => return Err(OrderViolation::Duplicate { index }),
            Ordering::Greater => return Err(OrderViolation::OutOfOrder { index }),
        }
    }
    Ok(())
}
