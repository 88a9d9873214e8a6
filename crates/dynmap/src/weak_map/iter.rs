use super::imp::WeakEntry;
use core::iter::FusedIterator;
use hashbrown::hash_map;
use std::rc::Rc;

/// An iterator over the live entries of a [`WeakMap`]. Created by
/// [`WeakMap::iter`].
///
/// Yields an owning handle to each key alongside a reference to its value.
/// Entries whose keys have been reclaimed are skipped. The iteration order
/// is arbitrary and not guaranteed to be stable.
///
/// [`WeakMap`]: crate::WeakMap
/// [`WeakMap::iter`]: crate::WeakMap::iter
pub struct Iter<'a, K, V> {
    inner: hash_map::Values<'a, usize, WeakEntry<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(
        inner: hash_map::Values<'a, usize, WeakEntry<K, V>>,
    ) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (Rc<K>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = self.inner.next()?;
            // A dead entry reads as already removed.
            if let Some(key) = entry.key.upgrade() {
                return Some((key, &entry.value));
            }
        }
    }
}

// hash_map::Values is a FusedIterator, so Iter is as well.
impl<K, V> FusedIterator for Iter<'_, K, V> {}
