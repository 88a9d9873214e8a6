use dynmap::{
    errors::MapError, ArrayMap, GenericMap, Key, ReadonlyMap, Value,
};
use dynmap_test_utils::{naive_map::NaiveArrayMap, strategies::small_key};
use proptest::prelude::*;
use test_strategy::{proptest, Arbitrary};

#[test]
fn put_and_get() {
    let mut map = ArrayMap::new();
    assert_eq!(map.put("x", 5), Ok(true));
    assert_eq!(map.put("x", 6), Ok(false));
    assert_eq!(map.get("x"), Some(&6));
    assert_eq!(map.len(), 1);

    assert_eq!(map.put(3, 7), Ok(true));
    assert_eq!(map.get(3), Some(&7));
    // Int and string keys never coerce into each other.
    assert_eq!(map.put("3", 8), Ok(true));
    assert_eq!(map.get(3), Some(&7));
    assert_eq!(map.get("3"), Some(&8));
    map.validate().unwrap();
}

#[test]
fn dynamic_keys() {
    let mut map = ArrayMap::new();
    assert_eq!(map.put(Value::Int(1), "a"), Ok(true));
    assert_eq!(map.get(Value::Int(1)), Some(&"a"));
    assert_eq!(map.get(1), Some(&"a"));

    let error = map.put(Value::Null, "b").unwrap_err();
    assert_eq!(error.kind(), "null");
    let error = map.put(Value::Bool(true), "b").unwrap_err();
    assert_eq!(error.kind(), "bool");
    // Failed puts are no-ops.
    assert_eq!(map.len(), 1);
    map.validate().unwrap();
}

#[test]
fn has_tolerates_invalid_kinds() {
    let mut map = ArrayMap::new();
    map.put("x", 1).unwrap();
    assert!(map.has("x"));
    assert!(!map.has("y"));
    assert!(!map.has(true));
    assert!(!map.has(1.5));
    assert!(!map.has(&Value::Null));
}

#[test]
fn try_get_failures() {
    let mut map = ArrayMap::new();
    map.put("x", 1).unwrap();
    assert_eq!(map.try_get("x"), Ok(&1));

    match map.try_get("y") {
        Err(MapError::KeyNotFound(error)) => {
            assert_eq!(error.key(), &Key::Str("y".into()));
        }
        other => panic!("expected KeyNotFound, got {other:?}"),
    }
    match map.try_get(Value::Bool(true)) {
        Err(MapError::InvalidKey(error)) => assert_eq!(error.kind(), "bool"),
        other => panic!("expected InvalidKey, got {other:?}"),
    }
}

#[test]
fn remove_int_key_reindexes() {
    let mut map = ArrayMap::from_pairs([(0, "a"), (1, "b")]).unwrap();
    assert_eq!(map.remove(0), Ok(true));
    assert_eq!(map.keys(), [Key::Int(0)]);
    assert_eq!(map.get(0), Some(&"b"));
    map.validate().unwrap();
}

#[test]
fn remove_int_key_renumbers_around_string_keys() {
    let mut map = ArrayMap::new();
    map.put(0, "a").unwrap();
    map.put("x", "b").unwrap();
    map.put(1, "c").unwrap();
    map.put(5, "d").unwrap();

    assert_eq!(map.remove(1), Ok(true));
    assert_eq!(
        map.keys(),
        [Key::Int(0), Key::Str("x".into()), Key::Int(1)],
    );
    // The entry formerly keyed 5 is now reachable at 1.
    assert_eq!(map.get(1), Some(&"d"));
    assert_eq!(map.get("x"), Some(&"b"));
    assert_eq!(map.get(5), None);
    map.validate().unwrap();
}

#[test]
fn remove_string_key_never_renumbers() {
    let mut map = ArrayMap::new();
    map.put("x", 1).unwrap();
    map.put(5, 2).unwrap();
    assert_eq!(map.remove("x"), Ok(true));
    assert_eq!(map.keys(), [Key::Int(5)]);
    map.validate().unwrap();
}

#[test]
fn remove_absent_and_invalid() {
    let mut map: ArrayMap<i32> = ArrayMap::new();
    assert_eq!(map.remove(0), Ok(false));
    map.remove(Value::Float(1.0)).unwrap_err();
}

#[test]
fn derived_maps_are_independent() {
    let mut source = ArrayMap::from_pairs([(0, 10), (1, 20), (2, 30)]).unwrap();
    let mut derived = source.filter(|_, value| *value > 10);
    assert_eq!(derived.keys(), [Key::Int(1), Key::Int(2)]);

    derived.put(9, 90).unwrap();
    derived.remove(1).unwrap();
    assert_eq!(source.len(), 3);
    assert_eq!(source.get(1), Some(&20));

    source.remove(0).unwrap();
    // derived's own int-key removal spliced it: 2 became 0, 9 became 1.
    assert_eq!(derived.keys(), [Key::Int(0), Key::Int(1)]);
    assert_eq!(derived.get(1), Some(&90));
    assert_eq!(derived.get(9), None);
}

#[test]
fn map_values_keeps_keys() {
    let map = ArrayMap::from_pairs([("a", 1), ("b", 2)]).unwrap();
    let doubled = map.map_values(|_, value| value * 2);
    assert_eq!(doubled.keys(), map.keys());
    assert_eq!(doubled.get("b"), Some(&4));
}

#[test]
fn map_keys_last_write_wins() {
    let map = ArrayMap::from_pairs([(0, "a"), (1, "b"), (2, "c")]).unwrap();
    let collapsed = map.map_keys(|key, _| match key {
        Key::Int(i) => Key::Int(i / 2),
        other => other.clone(),
    });
    let collapsed = collapsed.unwrap();
    assert_eq!(collapsed.keys(), [Key::Int(0), Key::Int(1)]);
    // 0 and 1 both mapped to 0; the later entry wins.
    assert_eq!(collapsed.get(0), Some(&"b"));
    assert_eq!(collapsed.get(1), Some(&"c"));
}

#[test]
fn map_keys_invalid_produced_key() {
    let map = ArrayMap::from_pairs([(0, "a")]).unwrap();
    let error = map.map_keys(|_, _| Value::Null).unwrap_err();
    assert_eq!(error.kind(), "null");
}

#[test]
fn reduce_yields_one_element_per_entry() {
    let map = ArrayMap::from_pairs([("a", 1), ("b", 2), ("c", 3)]).unwrap();
    let labels = map.reduce(|key, value| format!("{key}={value}"));
    assert_eq!(labels, ["a=1", "b=2", "c=3"]);
}

#[test]
fn first_and_any() {
    let map = ArrayMap::from_pairs([("a", 1), ("b", 2)]).unwrap();
    assert_eq!(map.first(), Some(&1));
    assert_eq!(map.first_where(|_, value| *value > 1), Some(&2));
    assert_eq!(map.first_where(|_, value| *value > 9), None);
    assert!(map.any(|key, _| *key == Key::Str("b".into())));
    assert!(!map.any(|_, value| *value > 9));

    let empty: ArrayMap<i32> = ArrayMap::new();
    assert_eq!(empty.first(), None);
}

#[test]
fn contains_uses_loose_equality() {
    let mut map = ArrayMap::new();
    map.put(0, Value::Int(1)).unwrap();
    assert!(map.contains(&Value::Str("1".into())));
    assert!(map.contains(&Value::Bool(true)));
    assert!(!map.contains(&Value::Int(2)));

    // A supplied comparer overrides the default policy.
    assert!(!map.contains_by(&Value::Str("1".into()), dynmap::equality::same));
}

#[test]
fn keys_and_values_are_snapshots() {
    let mut map = ArrayMap::from_pairs([(0, "a"), (1, "b")]).unwrap();
    let keys = map.keys();
    map.put(2, "c").unwrap();
    assert_eq!(keys, [Key::Int(0), Key::Int(1)]);
    assert_eq!(map.values(), [&"a", &"b", &"c"]);
}

#[test]
fn from_keys_values_mismatch() {
    let map =
        ArrayMap::from_keys_values(["a", "b"], [1, 2]).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("b"), Some(&2));

    ArrayMap::from_keys_values(["a", "b"], [1]).unwrap_err();
    ArrayMap::<i32>::from_keys_values(["a"], [1, 2]).unwrap_err();
    ArrayMap::from_keys_values([Value::Null], [1]).unwrap_err();
}

#[test]
fn typed_iteration_round_trip() {
    let mut map = ArrayMap::new();
    map.put(0, "a").unwrap();
    map.put("x", "b").unwrap();
    let pairs: Vec<_> = map.iter().collect();
    assert_eq!(
        pairs,
        [
            (&Key::Int(0), &"a"),
            (&Key::Str("x".into()), &"b"),
        ],
    );

    let rebuilt: ArrayMap<&str> = map.clone().into_iter().collect();
    assert_eq!(rebuilt.keys(), map.keys());
}

#[test]
fn debug_impls() {
    let mut map = ArrayMap::new();
    map.put(1, "a").unwrap();
    map.put("x", "b").unwrap();
    assert_eq!(
        format!("{map:?}"),
        r#"{Int(1): "a", Str("x"): "b"}"#,
    );
}

fn sum_via_contract<M>(map: &M) -> i64
where
    M: ReadonlyMap<Value = i64>,
{
    map.values().into_iter().sum()
}

#[test]
fn trait_contract() {
    let mut map: ArrayMap<i64> = ArrayMap::new();
    assert!(GenericMap::put(&mut map, Key::Int(0), 10));
    assert!(GenericMap::put(&mut map, Key::Str("x".into()), 20));
    assert!(!GenericMap::put(&mut map, Key::Int(0), 30));
    assert_eq!(sum_via_contract(&map), 50);
    assert!(GenericMap::remove(&mut map, &Key::Int(0)));
    assert_eq!(sum_via_contract(&map), 20);
}

#[derive(Debug, Arbitrary)]
enum Op {
    Put(#[strategy(small_key())] Key, i32),
    Remove(#[strategy(small_key())] Key),
    Get(#[strategy(small_key())] Key),
    Has(#[strategy(small_key())] Key),
}

#[proptest]
fn oracle_equivalence(
    #[strategy(prop::collection::vec(any::<Op>(), 0..64))] ops: Vec<Op>,
) {
    let mut map: ArrayMap<i32> = ArrayMap::new();
    let mut oracle: NaiveArrayMap<i32> = NaiveArrayMap::new();

    for op in ops {
        match op {
            Op::Put(key, value) => {
                prop_assert_eq!(
                    map.put_key(key.clone(), value),
                    oracle.put_key(key, value),
                );
            }
            Op::Remove(key) => {
                prop_assert_eq!(map.remove_key(&key), oracle.remove_key(&key));
            }
            Op::Get(key) => {
                prop_assert_eq!(map.get(&key), oracle.get_key(&key));
            }
            Op::Has(key) => {
                prop_assert_eq!(map.has(&key), oracle.has_key(&key));
            }
        }
        map.validate().unwrap();
        prop_assert_eq!(map.keys(), oracle.keys());
        prop_assert_eq!(map.values(), oracle.values());
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn round_trip_preserves_order() {
        let mut map = ArrayMap::new();
        map.put(0, "a").unwrap();
        map.put("x", "b").unwrap();

        let serialized = serde_json::to_string(&map).unwrap();
        assert_eq!(serialized, r#"[[0,"a"],["x","b"]]"#);

        let deserialized: ArrayMap<String> =
            serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.keys(), map.keys());
        assert_eq!(deserialized.get("x"), Some(&"b".to_string()));
    }
}
