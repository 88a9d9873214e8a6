use super::Key;
use crate::support::hash_builder::DefaultHashBuilder;
use core::hash::BuildHasher;
use hashbrown::HashTable;

/// Hash index from keys to positions in the entry vector.
///
/// The table stores positions only; key lookups go through a caller-supplied
/// closure back into the entry vector, so keys are never stored twice.
#[derive(Clone, Debug, Default)]
pub(super) struct ArrayMapTables {
    state: DefaultHashBuilder,
    key_to_pos: HashTable<usize>,
}

impl ArrayMapTables {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            state: DefaultHashBuilder::default(),
            key_to_pos: HashTable::with_capacity(capacity),
        }
    }

    pub(super) fn len(&self) -> usize {
        self.key_to_pos.len()
    }

    pub(super) fn find_index<'a, F>(&self, key: &Key, lookup: F) -> Option<usize>
    where
        F: Fn(usize) -> &'a Key,
    {
        let hash = self.state.hash_one(key);
        self.key_to_pos.find(hash, |&pos| lookup(pos) == key).copied()
    }

    /// Records `pos` for a key known to be absent from the table.
    pub(super) fn insert_index<'a, F>(&mut self, key: &Key, pos: usize, lookup: F)
    where
        F: Fn(usize) -> &'a Key,
    {
        let hash = self.state.hash_one(key);
        let state = &self.state;
        self.key_to_pos
            .insert_unique(hash, pos, |&p| state.hash_one(lookup(p)));
    }

    /// Removes the key's position from the table, returning it.
    pub(super) fn remove_index<'a, F>(&mut self, key: &Key, lookup: F) -> Option<usize>
    where
        F: Fn(usize) -> &'a Key,
    {
        let hash = self.state.hash_one(key);
        match self.key_to_pos.find_entry(hash, |&pos| lookup(pos) == key) {
            Ok(entry) => Some(entry.remove().0),
            Err(_) => None,
        }
    }

    /// Shifts down every recorded position above `pos` by one, after an
    /// entry was removed from the middle of the vector.
    pub(super) fn decrement_indexes_above(&mut self, pos: usize) {
        for index in self.key_to_pos.iter_mut() {
            if *index > pos {
                *index -= 1;
            }
        }
    }

    /// Rebuilds the table from scratch against `len` entries.
    pub(super) fn rebuild<'a, F>(&mut self, len: usize, lookup: F)
    where
        F: Fn(usize) -> &'a Key,
    {
        self.key_to_pos.clear();
        let state = &self.state;
        for pos in 0..len {
            let hash = state.hash_one(lookup(pos));
            self.key_to_pos
                .insert_unique(hash, pos, |&p| state.hash_one(lookup(p)));
        }
    }
}
