//! Key kinds accepted by [`ArrayMap`], and conversions into them.
//!
//! [`ArrayMap`]: crate::ArrayMap

use crate::{errors::InvalidKey, value::Value};
use core::fmt;

/// A key in an [`ArrayMap`]: an integer or a string.
///
/// The two kinds never coerce into each other -- `Key::Int(1)` and
/// `Key::Str("1")` are distinct keys. Integer keys are positional: removing
/// one renumbers the remaining integer keys (see [`ArrayMap::remove`]).
///
/// [`ArrayMap`]: crate::ArrayMap
/// [`ArrayMap::remove`]: crate::ArrayMap::remove
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key {
    /// An integer key.
    Int(i64),
    /// A string key.
    Str(String),
}

impl Key {
    /// Returns true if this is an integer key.
    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => i.fmt(f),
            Key::Str(s) => s.fmt(f),
        }
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(i) => Value::Int(i),
            Key::Str(s) => Value::Str(s),
        }
    }
}

/// Conversion into a [`Key`], used by every dynamically keyed [`ArrayMap`]
/// operation.
///
/// Infallible for integers, strings and `Key` itself. Fallible for
/// [`Value`]: `Int` and `Str` pass through, every other kind is rejected
/// with [`InvalidKey`]. `bool` and `f64` are always rejected, so queries
/// like `map.has(true)` answer `false` instead of failing to compile.
///
/// [`ArrayMap`]: crate::ArrayMap
pub trait IntoKey {
    /// Converts self into a key, or reports the rejected kind.
    fn into_key(self) -> Result<Key, InvalidKey>;
}

impl IntoKey for Key {
    fn into_key(self) -> Result<Key, InvalidKey> {
        Ok(self)
    }
}

impl IntoKey for &Key {
    fn into_key(self) -> Result<Key, InvalidKey> {
        Ok(self.clone())
    }
}

impl IntoKey for i64 {
    fn into_key(self) -> Result<Key, InvalidKey> {
        Ok(Key::Int(self))
    }
}

impl IntoKey for i32 {
    fn into_key(self) -> Result<Key, InvalidKey> {
        Ok(Key::Int(i64::from(self)))
    }
}

impl IntoKey for &str {
    fn into_key(self) -> Result<Key, InvalidKey> {
        Ok(Key::Str(self.to_owned()))
    }
}

impl IntoKey for String {
    fn into_key(self) -> Result<Key, InvalidKey> {
        Ok(Key::Str(self))
    }
}

impl IntoKey for bool {
    fn into_key(self) -> Result<Key, InvalidKey> {
        Err(InvalidKey::new("bool"))
    }
}

impl IntoKey for f64 {
    fn into_key(self) -> Result<Key, InvalidKey> {
        Err(InvalidKey::new("float"))
    }
}

impl IntoKey for Value {
    fn into_key(self) -> Result<Key, InvalidKey> {
        match self {
            Value::Int(i) => Ok(Key::Int(i)),
            Value::Str(s) => Ok(Key::Str(s)),
            other => Err(InvalidKey::new(other.kind())),
        }
    }
}

impl IntoKey for &Value {
    fn into_key(self) -> Result<Key, InvalidKey> {
        match self {
            Value::Int(i) => Ok(Key::Int(*i)),
            Value::Str(s) => Ok(Key::Str(s.clone())),
            other => Err(InvalidKey::new(other.kind())),
        }
    }
}
