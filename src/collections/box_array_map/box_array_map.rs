use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::ops::Index;

use super::{Iter, Keys, Values, ValuesMut};
use crate::algorithm::{Comparator, NaturalOrder};
use crate::collections::array_map::ArrayMap;
use crate::util::error::{KeyNotFound, OrderViolation};
use crate::util::fmt::{DebugPairs, TypeName};
use crate::util::result::OptionExtension;

/// An ordered map which owns each of its values through a [`Box`], built on [`ArrayMap`].
///
/// Ownership of a value moves into the map when it is set, and moves back out through
/// [`take`](BoxArrayMap::take), [`set_box`](BoxArrayMap::set_box) or owned iteration. A value
/// still owned by the map is dropped when its entry is erased or overwritten, when the map is
/// cleared and when the map itself is dropped. Because `V` may be unsized, the map can own trait
/// objects and slices too.
///
/// Lookups hand out references to the pointee rather than to the box, and the ordering contract
/// is the same as that of [`ArrayMap`].
///
/// # Examples
/// ```
/// # use array_collections::collections::BoxArrayMap;
/// use std::fmt::Display;
///
/// let mut map: BoxArrayMap<u8, dyn Display> = BoxArrayMap::new();
/// map.set_box(2, Box::new("two"));
/// map.set_box(1, Box::new(1.5));
/// assert_eq!(map[&1].to_string(), "1.5");
///
/// let taken = map.take(&2);
/// assert_eq!(taken.map(|value| value.to_string()).as_deref(), Some("two"));
/// assert_eq!(map.len(), 1);
/// ```
pub struct BoxArrayMap<K, V: ?Sized, C = NaturalOrder> {
    pub(crate) inner: ArrayMap<K, Box<V>, C>,
}

impl<K, V: ?Sized> BoxArrayMap<K, V> {
    /// Creates a new, empty BoxArrayMap ordered by [`NaturalOrder`].
    pub const fn new() -> BoxArrayMap<K, V> {
        BoxArrayMap::with_comparator(NaturalOrder)
    }
}

impl<K, V: ?Sized, C> BoxArrayMap<K, V, C> {
    /// Creates a new, empty BoxArrayMap ordered by the provided `comparator`.
    pub const fn with_comparator(comparator: C) -> BoxArrayMap<K, V, C> {
        BoxArrayMap {
            inner: ArrayMap::with_comparator(comparator),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub const fn comparator(&self) -> &C {
        self.inner.comparator()
    }

    /// Drops every value owned by the map.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns the entry at the provided `index`, in key order.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn at(&self, index: usize) -> (&K, &V) {
        let (key, value) = self.inner.at(index);
        (key, &**value)
    }

    pub fn get_at(&self, index: usize) -> Option<(&K, &V)> {
        self.inner.get_at(index).map(|(key, value)| (key, &**value))
    }

    /// Removes every entry for which `predicate` returns true, dropping their values. Returns the
    /// number of entries removed.
    pub fn erase_if<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.inner.erase_if(|key, value| predicate(key, &**value))
    }

    /// Returns an iterator over all entries in key order, as references to each key and pointee.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(self.inner.iter())
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.inner.keys())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.inner.values())
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.inner.values_mut())
    }

    /// Consumes the map, returning the underlying [`ArrayMap`] of boxes.
    pub fn into_inner(self) -> ArrayMap<K, Box<V>, C> {
        self.inner
    }
}

impl<K, V: ?Sized, C> BoxArrayMap<K, V, C> {
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.inner.index_of(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.inner.contains(key)
    }

    /// Returns a reference to the value owned for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.inner.get(key).map(|value| &**value)
    }

    /// Returns a mutable reference to the value owned for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.inner.get_mut(key).map(|value| &mut **value)
    }

    /// Releases the value owned for `key`, handing ownership back to the caller. The entry is
    /// removed from the map.
    pub fn take<Q>(&mut self, key: &Q) -> Option<Box<V>>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.inner.remove(key)
    }

    /// Removes the entry for `key` and drops its value, returning true if there was one.
    pub fn erase<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.inner.erase(key)
    }
}

impl<K, V: ?Sized, C: Comparator<K>> BoxArrayMap<K, V, C> {
    /// Moves the boxed `value` into the map under `key`. If the key was already present, the box
    /// it owned is handed back instead of being dropped.
    pub fn set_box(&mut self, key: K, value: Box<V>) -> Option<Box<V>> {
        self.inner.set(key, value)
    }

    /// Verifies that the keys are strictly ascending.
    pub fn check_order(&self) -> Result<(), OrderViolation> {
        self.inner.check_order()
    }

    /// Asserts that the keys are strictly ascending, for diagnostic use.
    ///
    /// # Panics
    /// Panics if two adjacent keys are out of order or equivalent.
    pub fn assert_invariant(&self) {
        self.inner.assert_invariant()
    }
}

impl<K, V, C: Comparator<K>> BoxArrayMap<K, V, C> {
    /// Boxes `value` and stores it under `key`, dropping any value that was already owned for the
    /// key. Returns true if the key wasn't present before.
    ///
    /// # Examples
    /// ```
    /// # use array_collections::collections::BoxArrayMap;
    /// let mut map = BoxArrayMap::new();
    /// assert!(map.set("a", vec![1]));
    /// assert!(!map.set("a", vec![1, 2]));
    /// assert_eq!(map["a"], [1, 2]);
    /// ```
    pub fn set(&mut self, key: K, value: V) -> bool {
        self.set_box(key, Box::new(value)).is_none()
    }

    /// Returns a mutable reference to the value owned for `key`, first boxing the result of
    /// `default` under the key if it isn't present.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        &mut **self.inner.get_or_insert_with(key, || Box::new(default()))
    }
}

impl<K, V: ?Sized, C: Default> Default for BoxArrayMap<K, V, C> {
    fn default() -> Self {
        BoxArrayMap {
            inner: ArrayMap::default(),
        }
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for BoxArrayMap<K, V, C> {
    /// Clones every owned value into a new box, so that the two maps never share a value.
    fn clone(&self) -> Self {
        BoxArrayMap {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V, C, Q> Index<&Q> for BoxArrayMap<K, V, C>
where
    K: Borrow<Q>,
    V: ?Sized,
    Q: ?Sized,
    C: Comparator<Q>,
{
    type Output = V;

    /// Returns a reference to the value owned for `key`.
    ///
    /// # Panics
    /// Panics if the map contains no value for `key`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).or_throw(|| KeyNotFound)
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for BoxArrayMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BoxArrayMap::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for BoxArrayMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner
            .extend(iter.into_iter().map(|(key, value)| (key, Box::new(value))));
    }
}

impl<K, V: PartialEq + ?Sized, C: Comparator<K>> PartialEq for BoxArrayMap<K, V, C> {
    /// Compares the owned values, not the boxes that hold them.
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K, V: Eq + ?Sized, C: Comparator<K>> Eq for BoxArrayMap<K, V, C> {}

impl<K: Debug, V: Debug + ?Sized, C> Debug for BoxArrayMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxArrayMap")
            .field("contents", &DebugPairs(self.inner.as_slice()))
            .field("len", &self.len())
            .field("comparator", &TypeName::<C>::new())
            .finish()
    }
}
