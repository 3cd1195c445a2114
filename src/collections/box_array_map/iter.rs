use std::iter::FusedIterator;

use super::BoxArrayMap;
use crate::collections::array_map;

impl<K, V: ?Sized, C> IntoIterator for BoxArrayMap<K, V, C> {
    type Item = (K, Box<V>);

    type IntoIter = array_map::IntoIter<K, Box<V>>;

    /// Hands ownership of every value back to the caller, in key order.
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K, V: ?Sized, C> IntoIterator for &'a BoxArrayMap<K, V, C> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type for borrowed iteration over a [`BoxArrayMap`]. Produces entries of type `(&K, &V)` in
/// key order.
///
/// See [`BoxArrayMap::iter`].
pub struct Iter<'a, K, V: ?Sized>(pub(crate) array_map::Iter<'a, K, Box<V>>);

impl<'a, K, V: ?Sized> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k, &**v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V: ?Sized> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(k, v)| (k, &**v))
    }
}

impl<'a, K, V: ?Sized> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V: ?Sized> FusedIterator for Iter<'a, K, V> {}

/// A type for borrowed iteration over the keys of a [`BoxArrayMap`]. Produces keys of type `&K`
/// in order.
///
/// See [`BoxArrayMap::keys`].
pub struct Keys<'a, K, V: ?Sized>(pub(crate) array_map::Keys<'a, K, Box<V>>);

impl<'a, K, V: ?Sized> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V: ?Sized> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a, K, V: ?Sized> ExactSizeIterator for Keys<'a, K, V> {}

impl<'a, K, V: ?Sized> FusedIterator for Keys<'a, K, V> {}

/// A type for borrowed iteration over the values of a [`BoxArrayMap`]. Produces values of type
/// `&V` in key order.
///
/// See [`BoxArrayMap::values`].
pub struct Values<'a, K, V: ?Sized>(pub(crate) array_map::Values<'a, K, Box<V>>);

impl<'a, K, V: ?Sized> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|v| &**v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V: ?Sized> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|v| &**v)
    }
}

impl<'a, K, V: ?Sized> ExactSizeIterator for Values<'a, K, V> {}

impl<'a, K, V: ?Sized> FusedIterator for Values<'a, K, V> {}

/// A type for mutable iteration over the values of a [`BoxArrayMap`]. Produces values of type
/// `&mut V` in key order.
///
/// See [`BoxArrayMap::values_mut`].
pub struct ValuesMut<'a, K, V: ?Sized>(pub(crate) array_map::ValuesMut<'a, K, Box<V>>);

impl<'a, K, V: ?Sized> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|v| &mut **v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V: ?Sized> DoubleEndedIterator for ValuesMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|v| &mut **v)
    }
}

impl<'a, K, V: ?Sized> ExactSizeIterator for ValuesMut<'a, K, V> {}

impl<'a, K, V: ?Sized> FusedIterator for ValuesMut<'a, K, V> {}
