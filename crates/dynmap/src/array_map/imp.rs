use super::{tables::ArrayMapTables, IntoKey, Iter, Key};
use crate::{
    equality,
    errors::{InvalidArgument, InvalidKey, KeyNotFound, MapError},
    trait_defs::{GenericMap, ReadonlyMap},
    value::Value,
};
use core::fmt;
use derive_where::derive_where;

/// An insertion-ordered map with integer or string keys.
///
/// Keys are [`Key`]s and are unique at all times. The backing store is an
/// ordered vector of entries plus a hash table of positions, so lookups are
/// constant-time while iteration preserves insertion order.
///
/// Integer keys are positional, not stable identifiers: removing an entry
/// with an integer key renumbers the remaining integer keys `0, 1, 2, …` in
/// iteration order (string keys are untouched). See [`ArrayMap::remove`].
///
/// Most operations take any [`IntoKey`] argument, so integers, strings and
/// dynamic [`Value`]s can be used directly; a [`Value`] of any other kind
/// fails with [`InvalidKey`].
///
/// # Examples
///
/// ```
/// use dynmap::ArrayMap;
///
/// let mut map = ArrayMap::new();
/// assert_eq!(map.put("x", 5), Ok(true));
/// assert_eq!(map.put("x", 6), Ok(false));
/// assert_eq!(map.get("x"), Some(&6));
/// ```
#[derive_where(Default)]
#[derive(Clone)]
pub struct ArrayMap<V> {
    entries: Vec<(Key, V)>,
    tables: ArrayMapTables,
}

impl<V> ArrayMap<V> {
    /// Creates a new, empty `ArrayMap`.
    #[inline]
    pub fn new() -> Self {
        Self { entries: Vec::new(), tables: ArrayMapTables::default() }
    }

    /// Creates a new `ArrayMap` with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            tables: ArrayMapTables::with_capacity(capacity),
        }
    }

    /// Creates an `ArrayMap` from `(key, value)` pairs, in order.
    ///
    /// Duplicate keys resolve last-write-wins, keeping the position of the
    /// first occurrence.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidKey`] on the first key of an unacceptable kind.
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self, InvalidKey>
    where
        K: IntoKey,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.put(key, value)?;
        }
        Ok(map)
    }

    /// Creates an `ArrayMap` from parallel key and value sequences.
    ///
    /// The sequences are consumed pairwise in order.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidArgument`] at the first index where one sequence
    /// is exhausted before the other, or where a key is of an unacceptable
    /// kind. Construction is best-effort: pairs before the failing index
    /// have already been inserted into the abandoned map.
    pub fn from_keys_values<K, KI, VI>(
        keys: KI,
        values: VI,
    ) -> Result<Self, InvalidArgument>
    where
        K: IntoKey,
        KI: IntoIterator<Item = K>,
        VI: IntoIterator<Item = V>,
    {
        let mut map = Self::new();
        let mut keys = keys.into_iter();
        let mut values = values.into_iter();
        let mut index = 0usize;
        loop {
            match (keys.next(), values.next()) {
                (Some(key), Some(value)) => {
                    let key = key.into_key().map_err(|error| {
                        InvalidArgument::new(format!(
                            "invalid key at index {index}: {error}"
                        ))
                    })?;
                    map.put_key(key, value);
                }
                (None, None) => return Ok(map),
                (Some(_), None) => {
                    return Err(InvalidArgument::new(format!(
                        "no value for key at index {index}"
                    )));
                }
                (None, Some(_)) => {
                    return Err(InvalidArgument::new(format!(
                        "no key for value at index {index}"
                    )));
                }
            }
            index += 1;
        }
    }

    /// Returns the number of entries in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.entries)
    }

    /// Checks general invariants of the map.
    ///
    /// The code below always upholds these invariants, but it's useful to
    /// have an explicit check for tests.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), String> {
        if self.tables.len() != self.entries.len() {
            return Err(format!(
                "table has {} positions but map has {} entries",
                self.tables.len(),
                self.entries.len(),
            ));
        }
        for (pos, (key, _)) in self.entries.iter().enumerate() {
            match self.find_index(key) {
                Some(found) if found == pos => {}
                Some(found) => {
                    return Err(format!(
                        "key {key} at position {pos} is indexed at {found}"
                    ));
                }
                None => {
                    return Err(format!(
                        "key {key} at position {pos} has no index"
                    ));
                }
            }
        }
        Ok(())
    }

    fn find_index(&self, key: &Key) -> Option<usize> {
        let entries = &self.entries;
        self.tables.find_index(key, move |pos| &entries[pos].0)
    }

    /// Inserts or overwrites an entry. Returns true iff the key was newly
    /// inserted.
    ///
    /// Overwriting keeps the entry's position; inserting appends.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidKey`] if the key is of an unacceptable kind. The
    /// map is unchanged on failure.
    pub fn put<K: IntoKey>(
        &mut self,
        key: K,
        value: V,
    ) -> Result<bool, InvalidKey> {
        Ok(self.put_key(key.into_key()?, value))
    }

    /// Inserts or overwrites an entry with an already-validated key.
    pub fn put_key(&mut self, key: Key, value: V) -> bool {
        match self.find_index(&key) {
            Some(pos) => {
                self.entries[pos].1 = value;
                false
            }
            None => {
                let pos = self.entries.len();
                self.entries.push((key, value));
                let entries = &self.entries;
                self.tables.insert_index(
                    &entries[pos].0,
                    pos,
                    move |p| &entries[p].0,
                );
                true
            }
        }
    }

    /// Returns the value for the key, if present.
    ///
    /// A key of an unacceptable kind reads as absent, like [`has`].
    ///
    /// [`has`]: ArrayMap::has
    pub fn get<K: IntoKey>(&self, key: K) -> Option<&V> {
        let key = key.into_key().ok()?;
        self.find_index(&key).map(|pos| &self.entries[pos].1)
    }

    /// Returns a mutable reference to the value for the key, if present.
    pub fn get_mut<K: IntoKey>(&mut self, key: K) -> Option<&mut V> {
        let key = key.into_key().ok()?;
        let pos = self.find_index(&key)?;
        Some(&mut self.entries[pos].1)
    }

    /// Returns the value for the key, failing on an absent entry.
    ///
    /// # Errors
    ///
    /// Fails with [`MapError::KeyNotFound`] if the key has no entry, and
    /// [`MapError::InvalidKey`] if it is of an unacceptable kind.
    pub fn try_get<K: IntoKey>(&self, key: K) -> Result<&V, MapError> {
        let key = key.into_key()?;
        match self.find_index(&key) {
            Some(pos) => Ok(&self.entries[pos].1),
            None => Err(KeyNotFound::new(key).into()),
        }
    }

    /// Returns true if the key has an entry.
    ///
    /// A key of an unacceptable kind answers false rather than failing.
    pub fn has<K: IntoKey>(&self, key: K) -> bool {
        match key.into_key() {
            Ok(key) => self.find_index(&key).is_some(),
            Err(_) => false,
        }
    }

    /// Removes the entry for the key. Returns true iff an entry was
    /// removed.
    ///
    /// Removing an integer key renumbers the remaining integer keys
    /// `0, 1, 2, …` in iteration order -- integer keys are positions, not
    /// stable identifiers. String keys never shift.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidKey`] if the key is of an unacceptable kind. The
    /// map is unchanged on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynmap::{ArrayMap, Key};
    ///
    /// let mut map = ArrayMap::from_pairs([(0, "a"), (1, "b")]).unwrap();
    /// map.remove(0).unwrap();
    /// assert_eq!(map.keys(), [Key::Int(0)]);
    /// assert_eq!(map.get(0), Some(&"b"));
    /// ```
    pub fn remove<K: IntoKey>(&mut self, key: K) -> Result<bool, InvalidKey> {
        Ok(self.remove_key(&key.into_key()?))
    }

    /// Removes the entry for an already-validated key.
    pub fn remove_key(&mut self, key: &Key) -> bool {
        let entries = &self.entries;
        let Some(pos) = self.tables.remove_index(key, move |p| &entries[p].0)
        else {
            return false;
        };
        let (removed, _) = self.entries.remove(pos);
        if removed.is_int() {
            self.renumber_int_keys();
        } else {
            self.tables.decrement_indexes_above(pos);
        }
        true
    }

    // Splice semantics: after an integer-keyed entry is removed, the
    // remaining integer keys become 0, 1, 2, … in iteration order.
    fn renumber_int_keys(&mut self) {
        let mut next = 0i64;
        for (key, _) in &mut self.entries {
            if let Key::Int(i) = key {
                *i = next;
                next += 1;
            }
        }
        let entries = &self.entries;
        self.tables.rebuild(entries.len(), move |p| &entries[p].0);
    }

    /// Returns a new map containing only the entries the predicate accepts,
    /// preserving relative order.
    ///
    /// The new map is independent: mutating it never affects this one.
    pub fn filter<F>(&self, mut predicate: F) -> ArrayMap<V>
    where
        V: Clone,
        F: FnMut(&Key, &V) -> bool,
    {
        let mut map = ArrayMap::new();
        for (key, value) in &self.entries {
            if predicate(key, value) {
                map.put_key(key.clone(), value.clone());
            }
        }
        map
    }

    /// Returns a new map with the same keys and transformed values.
    pub fn map_values<V2, F>(&self, mut f: F) -> ArrayMap<V2>
    where
        F: FnMut(&Key, &V) -> V2,
    {
        let mut map = ArrayMap::new();
        for (key, value) in &self.entries {
            map.put_key(key.clone(), f(key, value));
        }
        map
    }

    /// Returns a new map with transformed keys and the same values.
    ///
    /// Duplicate produced keys resolve last-write-wins.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidKey`] on the first produced key of an
    /// unacceptable kind.
    pub fn map_keys<K, F>(&self, mut f: F) -> Result<ArrayMap<V>, InvalidKey>
    where
        V: Clone,
        K: IntoKey,
        F: FnMut(&Key, &V) -> K,
    {
        let mut map = ArrayMap::new();
        for (key, value) in &self.entries {
            map.put_key(f(key, value).into_key()?, value.clone());
        }
        Ok(map)
    }

    /// Transforms each entry in map order and collects the results.
    ///
    /// One output element per entry; this is a per-entry transformation,
    /// not an accumulation.
    pub fn reduce<T, F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(&Key, &V) -> T,
    {
        self.entries.iter().map(|(key, value)| f(key, value)).collect()
    }

    /// Returns the first entry's value, or `None` if the map is empty.
    pub fn first(&self) -> Option<&V> {
        self.entries.first().map(|(_, value)| value)
    }

    /// Returns the first value the predicate accepts, scanning in map
    /// order.
    pub fn first_where<F>(&self, mut predicate: F) -> Option<&V>
    where
        F: FnMut(&Key, &V) -> bool,
    {
        self.entries
            .iter()
            .find(|(key, value)| predicate(key, value))
            .map(|(_, value)| value)
    }

    /// Returns true if any entry passes the predicate.
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Key, &V) -> bool,
    {
        self.entries.iter().any(|(key, value)| predicate(key, value))
    }

    /// Returns true if any value compares equal to `value` under the
    /// supplied comparer.
    pub fn contains_by<F>(&self, value: &V, mut eq: F) -> bool
    where
        F: FnMut(&V, &V) -> bool,
    {
        self.entries.iter().any(|(_, candidate)| eq(candidate, value))
    }

    /// Returns an ordered snapshot of the keys at call time.
    pub fn keys(&self) -> Vec<Key> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Returns an ordered snapshot of the values at call time.
    pub fn values(&self) -> Vec<&V> {
        self.entries.iter().map(|(_, value)| value).collect()
    }
}

impl ArrayMap<Value> {
    /// Returns true if any value is loosely equal to `value`.
    ///
    /// Uses [`equality::equals`]; supply a different comparer through
    /// [`contains_by`].
    ///
    /// [`equality::equals`]: crate::equality::equals
    /// [`contains_by`]: ArrayMap::contains_by
    pub fn contains(&self, value: &Value) -> bool {
        self.contains_by(value, equality::equals)
    }
}

impl<V: fmt::Debug> fmt::Debug for ArrayMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

impl<V> Extend<(Key, V)> for ArrayMap<V> {
    fn extend<I: IntoIterator<Item = (Key, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put_key(key, value);
        }
    }
}

impl<V> FromIterator<(Key, V)> for ArrayMap<V> {
    fn from_iter<I: IntoIterator<Item = (Key, V)>>(iter: I) -> Self {
        let mut map = ArrayMap::new();
        map.extend(iter);
        map
    }
}

impl<V> IntoIterator for ArrayMap<V> {
    type Item = (Key, V);
    type IntoIter = super::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        super::IntoIter::new(self.entries)
    }
}

impl<'a, V> IntoIterator for &'a ArrayMap<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> ReadonlyMap for ArrayMap<V> {
    type Key = Key;
    type Value = V;

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn has(&self, key: &Key) -> bool {
        self.find_index(key).is_some()
    }

    fn get(&self, key: &Key) -> Option<&V> {
        self.find_index(key).map(|pos| &self.entries[pos].1)
    }

    fn keys(&self) -> Vec<Key> {
        ArrayMap::keys(self)
    }

    fn values(&self) -> Vec<&V> {
        ArrayMap::values(self)
    }
}

impl<V> GenericMap for ArrayMap<V> {
    fn put(&mut self, key: Key, value: V) -> bool {
        self.put_key(key, value)
    }

    fn remove(&mut self, key: &Key) -> bool {
        self.remove_key(key)
    }
}
