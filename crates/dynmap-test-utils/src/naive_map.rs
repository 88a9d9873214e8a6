//! A naive map that acts as an oracle for property-based tests.

use dynmap::Key;

/// A naive, inefficient map with `ArrayMap` semantics.
///
/// Stored as a vector without an index table, performing linear scans. (The
/// goal here is to be clear, not efficient -- this is the model, not the
/// system under test.)
#[derive(Clone, Debug, Default)]
pub struct NaiveArrayMap<V> {
    entries: Vec<(Key, V)>,
}

impl<V> NaiveArrayMap<V> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts or overwrites; true iff the key was newly inserted.
    pub fn put_key(&mut self, key: Key, value: V) -> bool {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => {
                *existing = value;
                false
            }
            None => {
                self.entries.push((key, value));
                true
            }
        }
    }

    pub fn get_key(&self, key: &Key) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn has_key(&self, key: &Key) -> bool {
        self.get_key(key).is_some()
    }

    /// Removes; true iff an entry was removed. Removing an integer key
    /// renumbers the remaining integer keys 0, 1, 2, … in order.
    pub fn remove_key(&mut self, key: &Key) -> bool {
        let Some(pos) = self.entries.iter().position(|(k, _)| k == key)
        else {
            return false;
        };
        let (removed, _) = self.entries.remove(pos);
        if matches!(removed, Key::Int(_)) {
            let mut next = 0i64;
            for (k, _) in &mut self.entries {
                if let Key::Int(i) = k {
                    *i = next;
                    next += 1;
                }
            }
        }
        true
    }

    pub fn keys(&self) -> Vec<Key> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn values(&self) -> Vec<&V> {
        self.entries.iter().map(|(_, v)| v).collect()
    }
}
