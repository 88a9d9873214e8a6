use super::Key;
use core::{iter::FusedIterator, slice};
use std::vec;

/// An iterator over the entries of an [`ArrayMap`] by shared reference.
/// Created by [`ArrayMap::iter`].
///
/// Entries are yielded in insertion order.
///
/// [`ArrayMap`]: crate::ArrayMap
/// [`ArrayMap::iter`]: crate::ArrayMap::iter
#[derive(Clone, Debug, Default)]
pub struct Iter<'a, V> {
    inner: slice::Iter<'a, (Key, V)>,
}

impl<'a, V> Iter<'a, V> {
    pub(super) fn new(entries: &'a [(Key, V)]) -> Self {
        Self { inner: entries.iter() }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a Key, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// slice::Iter is a FusedIterator, so Iter is as well.
impl<V> FusedIterator for Iter<'_, V> {}

/// An iterator over the entries of an [`ArrayMap`] by ownership. Created by
/// [`ArrayMap::into_iter`].
///
/// Entries are yielded in insertion order.
///
/// [`ArrayMap`]: crate::ArrayMap
/// [`ArrayMap::into_iter`]: crate::ArrayMap#impl-IntoIterator-for-ArrayMap%3CV%3E
#[derive(Debug)]
pub struct IntoIter<V> {
    inner: vec::IntoIter<(Key, V)>,
}

impl<V> IntoIter<V> {
    pub(super) fn new(entries: Vec<(Key, V)>) -> Self {
        Self { inner: entries.into_iter() }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = (Key, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// vec::IntoIter is a FusedIterator, so IntoIter is as well.
impl<V> FusedIterator for IntoIter<V> {}
