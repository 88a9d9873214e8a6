//! Maps with a pluggable equality and ordering policy.
//!
//! # Motivation
//!
//! Code that bridges dynamically typed data -- configuration trees,
//! interpreter values, serialized records -- needs an explicit answer to
//! "when are two values equal?". Host-language `==` is either too strict
//! (`1` vs `"1"`) or not available at all across kinds. This crate makes
//! the policy explicit:
//!
//! - [`equality::equals`] -- loose equality with a fixed coercion table,
//! - [`equality::same`] -- strict equality, identical kind and value,
//! - [`equality::compare`] -- three-way ordering that fails on pairings
//!   with no defined order,
//!
//! all over a dynamic [`Value`] universe, with the [`Comparable`]
//! capability for types that supply their own ordering.
//!
//! Around the policy sit two map families sharing one contract
//! ([`ReadonlyMap`] / [`GenericMap`]):
//!
//! - [`ArrayMap`]: insertion-ordered, integer- or string-keyed, with
//!   positional integer keys (removing one renumbers the rest);
//! - [`WeakMap`]: object-identity keys held by non-owning references, so
//!   an entry vanishes once the key's last outside owner drops it.
//!
//! # Examples
//!
//! ```
//! use dynmap::{ArrayMap, Value, equality};
//!
//! let mut map = ArrayMap::new();
//! map.put(0, Value::from("a")).unwrap();
//! map.put("name", Value::from("b")).unwrap();
//!
//! // Lookup by loose equality: "a" == "a".
//! assert!(map.contains(&Value::from("a")));
//!
//! // The policy is separate from the maps.
//! assert!(equality::equals(&Value::Int(1), &Value::Str("1".into())));
//! assert!(!equality::same(&Value::Int(1), &Value::Str("1".into())));
//! ```

#![warn(missing_docs)]

pub mod array_map;
pub mod equality;
pub mod errors;
mod support;
pub mod trait_defs;
mod value;
pub mod weak_map;

pub use array_map::{ArrayMap, IntoKey, Key};
pub use trait_defs::{GenericMap, ReadonlyMap};
pub use value::{Comparable, DynComparable, Value};
pub use weak_map::{ReadonlyWeakMap, WeakMap};
