//! Capability traits shared by the map implementations.
//!
//! These traits describe the contract over already-validated keys: `Key`
//! for [`ArrayMap`], `Rc<K>` for [`WeakMap`]. The dynamically keyed,
//! fallible entry points live on the concrete types.
//!
//! [`ArrayMap`]: crate::ArrayMap
//! [`WeakMap`]: crate::WeakMap

/// Read-only access to a map.
///
/// Implemented by both map families and by [`ReadonlyWeakMap`], the
/// borrowed view that deliberately implements nothing more.
///
/// [`ReadonlyWeakMap`]: crate::ReadonlyWeakMap
pub trait ReadonlyMap {
    /// The key type, already validated for this map.
    type Key;
    /// The value type.
    type Value;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns true if the map has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the key has an entry.
    fn has(&self, key: &Self::Key) -> bool;

    /// Returns the value for the key, if present.
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Returns an ordered snapshot of the keys at call time.
    fn keys(&self) -> Vec<Self::Key>;

    /// Returns an ordered snapshot of the values at call time.
    fn values(&self) -> Vec<&Self::Value>;
}

/// A map that can be mutated.
pub trait GenericMap: ReadonlyMap {
    /// Inserts or overwrites an entry. Returns true iff the key was newly
    /// inserted.
    fn put(&mut self, key: Self::Key, value: Self::Value) -> bool;

    /// Removes the entry for the key. Returns true iff an entry was
    /// removed.
    fn remove(&mut self, key: &Self::Key) -> bool;
}
