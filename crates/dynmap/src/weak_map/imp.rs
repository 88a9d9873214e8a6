use super::{Iter, ReadonlyWeakMap};
use crate::{
    equality,
    errors::KeyNotFound,
    trait_defs::{GenericMap, ReadonlyMap},
    value::Value,
};
use core::fmt;
use derive_where::derive_where;
use hashbrown::{hash_map::Entry, HashMap};
use rustc_hash::FxBuildHasher;
use std::rc::{Rc, Weak};

#[derive_where(Clone; V)]
pub(super) struct WeakEntry<K, V> {
    pub(super) key: Weak<K>,
    pub(super) value: V,
}

/// A map whose keys are held by non-owning references.
///
/// Keys are `Rc<K>` handles and identity is the allocation, not `K`'s
/// value: two distinct `Rc`s wrapping equal data are two distinct keys. The
/// map stores [`Weak`] references, so it never keeps a key alive -- once
/// the last owning handle outside the map is dropped, the entry reads as
/// removed, exactly as if [`remove`] had been called, and is physically
/// dropped by the next mutating call.
///
/// Values are owned normally. Iteration order is arbitrary; there is no
/// concept of position.
///
/// Because a key can be reclaimed between a [`has`] check and a later
/// [`get`], callers should use a single `get` with a fallback rather than
/// `has`-then-`get`.
///
/// # Examples
///
/// ```
/// use dynmap::WeakMap;
/// use std::rc::Rc;
///
/// let key = Rc::new("session-1".to_string());
/// let mut map = WeakMap::new();
/// assert!(map.put(Rc::clone(&key), 42));
/// assert_eq!(map.get(&key), Some(&42));
///
/// drop(key);
/// assert_eq!(map.len(), 0);
/// ```
///
/// [`remove`]: WeakMap::remove
/// [`has`]: WeakMap::has
/// [`get`]: WeakMap::get
#[derive_where(Default)]
#[derive_where(Clone; V)]
pub struct WeakMap<K, V> {
    // Keyed by the Rc's allocation address. A reused address is
    // disambiguated by checking that the stored Weak is still live: a dead
    // entry cannot belong to a key the caller still holds.
    entries: HashMap<usize, WeakEntry<K, V>, FxBuildHasher>,
}

impl<K, V> WeakMap<K, V> {
    /// Creates a new, empty `WeakMap`.
    #[inline]
    pub fn new() -> Self {
        Self { entries: HashMap::default() }
    }

    /// Creates a new `WeakMap` with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(
                capacity,
                FxBuildHasher,
            ),
        }
    }

    fn addr(key: &Rc<K>) -> usize {
        Rc::as_ptr(key) as usize
    }

    fn live_entry(&self, key: &Rc<K>) -> Option<&WeakEntry<K, V>> {
        let entry = self.entries.get(&Self::addr(key))?;
        // Same address and still live means the same allocation as `key`.
        (entry.key.strong_count() > 0).then_some(entry)
    }

    /// Returns the number of live entries.
    ///
    /// Linear in the number of stored entries, since reclaimed ones are
    /// discounted.
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.key.strong_count() > 0)
            .count()
    }

    /// Returns true if the map has no live entries.
    pub fn is_empty(&self) -> bool {
        self.entries
            .values()
            .all(|entry| entry.key.strong_count() == 0)
    }

    /// Inserts or overwrites an entry. Returns true iff the key was newly
    /// inserted.
    ///
    /// The map holds only a non-owning reference to the key.
    pub fn put(&mut self, key: Rc<K>, value: V) -> bool {
        match self.entries.entry(Self::addr(&key)) {
            Entry::Occupied(mut entry) => {
                let live = entry.get().key.strong_count() > 0;
                entry.insert(WeakEntry { key: Rc::downgrade(&key), value });
                // A dead entry at a reused address was a different key.
                !live
            }
            Entry::Vacant(entry) => {
                entry.insert(WeakEntry { key: Rc::downgrade(&key), value });
                true
            }
        }
    }

    /// Returns the value for the key, if present and not reclaimed.
    pub fn get(&self, key: &Rc<K>) -> Option<&V> {
        self.live_entry(key).map(|entry| &entry.value)
    }

    /// Returns the value for the key, failing if absent or reclaimed.
    ///
    /// The two cases are indistinguishable by design.
    ///
    /// # Errors
    ///
    /// Fails with [`KeyNotFound`] carrying an owning handle to the key.
    pub fn try_get(&self, key: &Rc<K>) -> Result<&V, KeyNotFound<Rc<K>>> {
        self.get(key).ok_or_else(|| KeyNotFound::new(Rc::clone(key)))
    }

    /// Returns true if the key has a live entry.
    pub fn has(&self, key: &Rc<K>) -> bool {
        self.live_entry(key).is_some()
    }

    /// Removes the entry for the key. Returns true iff a live entry was
    /// removed.
    pub fn remove(&mut self, key: &Rc<K>) -> bool {
        match self.entries.entry(Self::addr(key)) {
            Entry::Occupied(entry) => {
                let live = entry.get().key.strong_count() > 0;
                // A dead entry at this address belonged to a reclaimed
                // former key; drop it either way.
                entry.remove();
                live
            }
            Entry::Vacant(_) => false,
        }
    }

    /// Drops every entry whose key has been reclaimed.
    ///
    /// Never needed for correctness -- dead entries already read as
    /// removed -- but reclaims their storage eagerly.
    pub fn prune(&mut self) {
        self.entries.retain(|_, entry| entry.key.strong_count() > 0);
    }

    /// Iterates over the live entries, yielding an owning key handle and a
    /// value reference. The order is arbitrary.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.entries.values())
    }

    /// Returns owning handles to the live keys at call time.
    pub fn keys(&self) -> Vec<Rc<K>> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Returns the values of the live entries at call time.
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, value)| value).collect()
    }

    /// Returns a read-only view backed by this map's storage.
    pub fn as_readonly(&self) -> ReadonlyWeakMap<'_, K, V> {
        ReadonlyWeakMap::new(self)
    }

    /// Returns a new map containing only the live entries the predicate
    /// accepts.
    ///
    /// The new map holds its own non-owning references; mutating it never
    /// affects this one.
    pub fn filter<F>(&self, mut predicate: F) -> WeakMap<K, V>
    where
        V: Clone,
        F: FnMut(&Rc<K>, &V) -> bool,
    {
        let mut map = WeakMap::new();
        for (key, value) in self.iter() {
            if predicate(&key, value) {
                map.put(key, value.clone());
            }
        }
        map
    }

    /// Returns a new map with the same keys and transformed values.
    pub fn map_values<V2, F>(&self, mut f: F) -> WeakMap<K, V2>
    where
        F: FnMut(&Rc<K>, &V) -> V2,
    {
        let mut map = WeakMap::new();
        for (key, value) in self.iter() {
            let value = f(&key, value);
            map.put(key, value);
        }
        map
    }

    /// Returns a new map with transformed keys and the same values.
    ///
    /// Duplicate produced keys resolve last-write-wins.
    pub fn map_keys<K2, F>(&self, mut f: F) -> WeakMap<K2, V>
    where
        V: Clone,
        F: FnMut(&Rc<K>, &V) -> Rc<K2>,
    {
        let mut map = WeakMap::new();
        for (key, value) in self.iter() {
            map.put(f(&key, value), value.clone());
        }
        map
    }

    /// Transforms each live entry and collects the results.
    ///
    /// One output element per entry; this is a per-entry transformation,
    /// not an accumulation.
    pub fn reduce<T, F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(&Rc<K>, &V) -> T,
    {
        self.iter().map(|(key, value)| f(&key, value)).collect()
    }

    /// Returns the value of some live entry, or `None` if the map is
    /// empty. The choice is arbitrary, matching the iteration order.
    pub fn first(&self) -> Option<&V> {
        self.iter().next().map(|(_, value)| value)
    }

    /// Returns the first value the predicate accepts, in iteration order.
    pub fn first_where<F>(&self, mut predicate: F) -> Option<&V>
    where
        F: FnMut(&Rc<K>, &V) -> bool,
    {
        self.iter()
            .find(|(key, value)| predicate(key, value))
            .map(|(_, value)| value)
    }

    /// Returns true if any live entry passes the predicate.
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Rc<K>, &V) -> bool,
    {
        self.iter().any(|(key, value)| predicate(&key, value))
    }

    /// Returns true if any live entry's value compares equal to `value`
    /// under the supplied comparer.
    pub fn contains_by<F>(&self, value: &V, mut eq: F) -> bool
    where
        F: FnMut(&V, &V) -> bool,
    {
        self.iter().any(|(_, candidate)| eq(candidate, value))
    }
}

impl<K> WeakMap<K, Value> {
    /// Returns true if any live entry's value is loosely equal to `value`.
    ///
    /// Uses [`equality::equals`]; supply a different comparer through
    /// [`contains_by`].
    ///
    /// [`equality::equals`]: crate::equality::equals
    /// [`contains_by`]: WeakMap::contains_by
    pub fn contains(&self, value: &Value) -> bool {
        self.contains_by(value, equality::equals)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for WeakMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in self.iter() {
            map.entry(&*key, value);
        }
        map.finish()
    }
}

impl<'a, K, V> IntoIterator for &'a WeakMap<K, V> {
    type Item = (Rc<K>, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> ReadonlyMap for WeakMap<K, V> {
    type Key = Rc<K>;
    type Value = V;

    fn len(&self) -> usize {
        WeakMap::len(self)
    }

    fn has(&self, key: &Rc<K>) -> bool {
        WeakMap::has(self, key)
    }

    fn get(&self, key: &Rc<K>) -> Option<&V> {
        WeakMap::get(self, key)
    }

    fn keys(&self) -> Vec<Rc<K>> {
        WeakMap::keys(self)
    }

    fn values(&self) -> Vec<&V> {
        WeakMap::values(self)
    }
}

impl<K, V> GenericMap for WeakMap<K, V> {
    fn put(&mut self, key: Rc<K>, value: V) -> bool {
        WeakMap::put(self, key, value)
    }

    fn remove(&mut self, key: &Rc<K>) -> bool {
        WeakMap::remove(self, key)
    }
}
