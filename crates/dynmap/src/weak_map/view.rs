use super::{imp::WeakMap, Iter};
use crate::{errors::KeyNotFound, trait_defs::ReadonlyMap};
use core::fmt;
use std::rc::Rc;

/// A read-only view over a [`WeakMap`], backed by the same storage.
///
/// Created by [`WeakMap::as_readonly`]. No entries are copied; the view
/// observes reclamations as they happen, exactly like the map it borrows.
pub struct ReadonlyWeakMap<'a, K, V> {
    inner: &'a WeakMap<K, V>,
}

impl<K, V> Clone for ReadonlyWeakMap<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for ReadonlyWeakMap<'_, K, V> {}

impl<'a, K, V> ReadonlyWeakMap<'a, K, V> {
    pub(super) fn new(inner: &'a WeakMap<K, V>) -> Self {
        Self { inner }
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the underlying map has no live entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns true if the key has a live entry.
    pub fn has(&self, key: &Rc<K>) -> bool {
        self.inner.has(key)
    }

    /// Returns the value for the key, if present and not reclaimed.
    pub fn get(&self, key: &Rc<K>) -> Option<&'a V> {
        self.inner.get(key)
    }

    /// Returns the value for the key, failing if absent or reclaimed.
    ///
    /// # Errors
    ///
    /// Fails with [`KeyNotFound`] carrying an owning handle to the key.
    pub fn try_get(&self, key: &Rc<K>) -> Result<&'a V, KeyNotFound<Rc<K>>> {
        self.inner.try_get(key)
    }

    /// Iterates over the live entries, in arbitrary order.
    pub fn iter(&self) -> Iter<'a, K, V> {
        self.inner.iter()
    }

    /// Returns owning handles to the live keys at call time.
    pub fn keys(&self) -> Vec<Rc<K>> {
        self.inner.keys()
    }

    /// Returns the values of the live entries at call time.
    pub fn values(&self) -> Vec<&'a V> {
        self.inner.values()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ReadonlyWeakMap<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<K, V> ReadonlyMap for ReadonlyWeakMap<'_, K, V> {
    type Key = Rc<K>;
    type Value = V;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn has(&self, key: &Rc<K>) -> bool {
        self.inner.has(key)
    }

    fn get(&self, key: &Rc<K>) -> Option<&V> {
        self.inner.get(key)
    }

    fn keys(&self) -> Vec<Rc<K>> {
        self.inner.keys()
    }

    fn values(&self) -> Vec<&V> {
        self.inner.values()
    }
}
