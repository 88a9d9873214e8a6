//! Proptest strategies for dynamic values and map keys.

use crate::comparables::{Priority, Version};
use dynmap::{Key, Value};
use proptest::prelude::*;
use std::rc::Rc;

/// A strategy producing non-Comparable [`Value`]s: scalars (finite floats
/// only, so reflexivity holds), numeric and non-numeric strings, small
/// sequences, and fresh object handles.
pub fn plain_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(Value::Int),
        (-8000i64..8000).prop_map(|i| Value::Float(i as f64 / 8.0)),
        "[a-z]{0,3}".prop_map(Value::from),
        (-100i64..100).prop_map(|i| Value::Str(i.to_string())),
        any::<u8>().prop_map(|v| Value::object(Rc::new(v))),
    ];
    leaf.prop_recursive(2, 8, 3, |inner| {
        prop::collection::vec(inner, 0..3).prop_map(Value::seq)
    })
}

/// A strategy producing Comparable [`Value`]s of two distinct concrete
/// types.
pub fn comparable_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        (0u32..5).prop_map(|v| Value::comparable(Version(v))),
        (-5i32..5).prop_map(|p| Value::comparable(Priority(p))),
    ]
}

/// A strategy over the full value universe.
pub fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => plain_value(),
        1 => comparable_value(),
    ]
}

/// A strategy over a deliberately small key space, so random op sequences
/// hit collisions, overwrites and removals of present keys.
pub fn small_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        (-2i64..6).prop_map(Key::Int),
        "[abc]".prop_map(Key::Str),
    ]
}
