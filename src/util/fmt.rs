use std::any;
use std::fmt::{self, Debug, Formatter};

/// Formats a slice of pairs as a map, for the Debug output of pair-backed collections.
#[cfg(feature = "map")]
pub struct DebugPairs<'a, K, V>(pub &'a [(K, V)]);

#[cfg(feature = "map")]
impl<K: Debug, V: Debug> Debug for DebugPairs<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter().map(|(k, v)| (k, v))).finish()
    }
}

/// Formats as the bare name of the type `C`, without quotes. Comparators are often closures, which
/// can't implement Debug themselves.
pub struct TypeName<C: ?Sized>(std::marker::PhantomData<C>);

impl<C: ?Sized> TypeName<C> {
    pub const fn new() -> TypeName<C> {
        TypeName(std::marker::PhantomData)
    }
}

impl<C: ?Sized> Debug for TypeName<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", any::type_name::<C>())
    }
}
