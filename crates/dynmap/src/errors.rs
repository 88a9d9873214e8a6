//! Error types for this crate.
//!
//! These types are shared across all map implementations in this crate.

use core::fmt;

/// A comparator, combinator, or constructor was used with arguments it
/// cannot accept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidArgument {
    message: String,
}

impl InvalidArgument {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        InvalidArgument { message: message.into() }
    }

    /// Returns a description of what was invalid.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid argument: {}", self.message)
    }
}

impl core::error::Error for InvalidArgument {}

/// A key of a kind the map does not accept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidKey {
    kind: &'static str,
}

impl InvalidKey {
    pub(crate) fn new(kind: &'static str) -> Self {
        InvalidKey { kind }
    }

    /// Returns the name of the rejected key's kind.
    #[inline]
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl fmt::Display for InvalidKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key of kind `{}` is not accepted by this map", self.kind)
    }
}

impl core::error::Error for InvalidKey {}

/// A lookup of a key with no corresponding entry.
///
/// Generic over the key representation: [`Key`] for [`ArrayMap`], `Rc<K>`
/// for [`WeakMap`].
///
/// [`Key`]: crate::Key
/// [`ArrayMap`]: crate::ArrayMap
/// [`WeakMap`]: crate::WeakMap
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyNotFound<K> {
    key: K,
}

impl<K> KeyNotFound<K> {
    pub(crate) fn new(key: K) -> Self {
        KeyNotFound { key }
    }

    /// Returns the key that was looked up.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Converts self into the key that was looked up.
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K: fmt::Debug> fmt::Display for KeyNotFound<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key not found: {:?}", self.key)
    }
}

impl<K: fmt::Debug> core::error::Error for KeyNotFound<K> {}

/// The ways a fallible [`ArrayMap`] lookup can fail.
///
/// [`ArrayMap`]: crate::ArrayMap
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
    /// The key is of a kind the map does not accept.
    InvalidKey(InvalidKey),
    /// The key is acceptable but has no entry.
    KeyNotFound(KeyNotFound<crate::Key>),
}

impl From<InvalidKey> for MapError {
    fn from(error: InvalidKey) -> Self {
        MapError::InvalidKey(error)
    }
}

impl From<KeyNotFound<crate::Key>> for MapError {
    fn from(error: KeyNotFound<crate::Key>) -> Self {
        MapError::KeyNotFound(error)
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::InvalidKey(error) => error.fmt(f),
            MapError::KeyNotFound(error) => error.fmt(f),
        }
    }
}

impl core::error::Error for MapError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            MapError::InvalidKey(error) => Some(error),
            MapError::KeyNotFound(error) => Some(error),
        }
    }
}
