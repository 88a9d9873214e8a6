use super::{ArrayMap, Key};
use core::fmt;
use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};

/// An `ArrayMap` serializes to the list of `[key, value]` pairs in
/// insertion order.
///
/// Serializing as a list of pairs rather than as a map works around the
/// lack of non-string keys in formats like JSON, while preserving insertion
/// order.
///
/// # Examples
///
/// ```
/// use dynmap::ArrayMap;
///
/// let mut map = ArrayMap::new();
/// map.put(0, "a").unwrap();
/// map.put("x", "b").unwrap();
///
/// let serialized = serde_json::to_string(&map).unwrap();
/// assert_eq!(serialized, r#"[[0,"a"],["x","b"]]"#);
/// ```
impl<V: Serialize> Serialize for ArrayMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// An `ArrayMap` deserializes from a list of `[key, value]` pairs, with
/// duplicate keys resolving last-write-wins.
impl<'de, V: Deserialize<'de>> Deserialize<'de> for ArrayMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = Vec::<(Key, V)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

/// A `Key` serializes as a bare integer or string.
impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Int(i) => serializer.serialize_i64(*i),
            Key::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or a string")
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Key, E> {
                Ok(Key::Int(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Key, E> {
                i64::try_from(v)
                    .map(Key::Int)
                    .map_err(|_| E::custom("integer key out of range"))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Key, E> {
                Ok(Key::Str(v.to_owned()))
            }

            fn visit_string<E: serde::de::Error>(
                self,
                v: String,
            ) -> Result<Key, E> {
                Ok(Key::Str(v))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}
