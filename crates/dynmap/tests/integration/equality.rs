use core::cmp::Ordering;
use dynmap::{
    equality::{compare, equals, invert_comparator, invert_predicate, same},
    Value,
};
use dynmap_test_utils::{
    comparables::{Priority, Version},
    strategies::{any_value, comparable_value, plain_value},
};
use proptest::prelude::*;
use std::rc::Rc;
use test_strategy::proptest;

#[test]
fn coercion_table() {
    assert!(equals(&Value::Int(1), &Value::Str("1".into())));
    assert!(equals(&Value::Bool(true), &Value::Int(1)));
    assert!(!equals(&Value::Bool(false), &Value::Int(1)));
    assert!(equals(&Value::Int(0), &Value::Bool(false)));
    assert!(equals(&Value::seq(vec![]), &Value::Bool(false)));
    assert!(equals(&Value::Null, &Value::seq(vec![])));
    assert!(equals(&Value::Null, &Value::Null));
}

#[test]
fn null_cluster() {
    assert!(equals(&Value::Null, &Value::Bool(false)));
    assert!(equals(&Value::Null, &Value::Int(0)));
    assert!(equals(&Value::Null, &Value::Str("".into())));
    assert!(!equals(&Value::Null, &Value::Str("0".into())));
    assert!(!equals(&Value::Null, &Value::object(Rc::new(0u8))));
}

#[test]
fn numeric_strings() {
    assert!(equals(&Value::Str("1".into()), &Value::Str("01".into())));
    assert!(equals(&Value::Str(" 1 ".into()), &Value::Int(1)));
    assert!(equals(&Value::Str("1.5".into()), &Value::Float(1.5)));
    assert!(!equals(&Value::Str("abc".into()), &Value::Int(0)));
    assert!(!equals(&Value::Str("1a".into()), &Value::Int(1)));
}

#[test]
fn non_finite_strings_are_not_numeric() {
    // "nan" parses as a float but is not a numeric string; it must stay in
    // byte-equality territory, where it is equal to itself.
    let nan = Value::Str("nan".into());
    assert!(equals(&nan, &nan));
    assert!(same(&nan, &nan));
    assert_eq!(compare(&nan, &nan), Ok(Ordering::Equal));
    assert!(!equals(&Value::Str("nan".into()), &Value::Str("NaN".into())));

    assert!(!equals(&Value::Str("inf".into()), &Value::Float(f64::INFINITY)));
    assert!(!equals(
        &Value::Str("inf".into()),
        &Value::Str("infinity".into()),
    ));
}

#[test]
fn large_integer_strings_compare_exactly() {
    // Adjacent integers beyond f64's 2^53: indistinguishable as floats.
    let above = Value::Str("9007199254740993".into());
    let below = Value::Str("9007199254740992".into());
    assert!(!equals(&above, &below));
    assert_eq!(compare(&above, &below), Ok(Ordering::Greater));
    assert_eq!(compare(&below, &above), Ok(Ordering::Less));

    assert!(equals(&above, &Value::Int(9_007_199_254_740_993)));
    assert!(!equals(&below, &Value::Int(9_007_199_254_740_993)));
    assert_eq!(
        compare(&Value::Int(9_007_199_254_740_992), &above),
        Ok(Ordering::Less),
    );
}

#[test]
fn structured_identity() {
    let seq = Value::seq(vec![Value::Int(1)]);
    assert!(equals(&seq, &seq.clone()));
    assert!(!equals(&seq, &Value::seq(vec![Value::Int(1)])));
    // Two empty sequences are equal even across handles.
    assert!(equals(&Value::seq(vec![]), &Value::seq(vec![])));

    let obj = Value::object(Rc::new("payload"));
    assert!(equals(&obj, &obj.clone()));
    assert!(!equals(&obj, &Value::object(Rc::new("payload"))));
    // An object is not a truthy scalar.
    assert!(!equals(&obj, &Value::Bool(true)));
}

#[test]
fn strictness_table() {
    assert!(!same(&Value::Null, &Value::Bool(false)));
    assert!(!same(&Value::Float(1.1), &Value::Int(1)));
    assert!(!same(&Value::Str("1".into()), &Value::Int(1)));
    assert!(same(&Value::Null, &Value::Null));

    // Int and Float are different kinds even when numerically equal.
    assert!(!same(&Value::Int(1), &Value::Float(1.0)));
    assert!(same(&Value::Str("1".into()), &Value::Str("1".into())));
    // Strict string equality does not read numerically.
    assert!(!same(&Value::Str("1".into()), &Value::Str("01".into())));

    let seq = Value::seq(vec![]);
    assert!(same(&seq, &seq.clone()));
    assert!(!same(&Value::seq(vec![]), &Value::seq(vec![])));
}

#[test]
fn comparable_ordering() {
    let one = Value::comparable(Version(1));
    let two = Value::comparable(Version(2));
    assert_eq!(compare(&one, &two), Ok(Ordering::Less));
    assert_eq!(compare(&two, &one), Ok(Ordering::Greater));
    assert_eq!(
        compare(&one, &Value::comparable(Version(1))),
        Ok(Ordering::Equal),
    );

    assert!(equals(&one, &Value::comparable(Version(1))));
    assert!(same(&one, &Value::comparable(Version(1))));
    assert!(!equals(&one, &two));
}

#[test]
fn mismatched_comparable_types_order_greater() {
    let version = Value::comparable(Version(1));
    let priority = Value::comparable(Priority(1));
    // Fixed convention: Greater regardless of argument order.
    assert_eq!(compare(&version, &priority), Ok(Ordering::Greater));
    assert_eq!(compare(&priority, &version), Ok(Ordering::Greater));
    assert!(!equals(&version, &priority));
    assert!(!same(&version, &priority));
}

#[test]
fn comparable_against_structured_orders_greater() {
    let version = Value::comparable(Version(1));
    let seq = Value::seq(vec![]);
    let obj = Value::object(Rc::new(1u8));
    assert_eq!(compare(&version, &seq), Ok(Ordering::Greater));
    assert_eq!(compare(&obj, &version), Ok(Ordering::Greater));
}

#[test]
fn comparable_against_scalar_fails() {
    let version = Value::comparable(Version(1));
    for scalar in [
        Value::Null,
        Value::Bool(true),
        Value::Int(3),
        Value::Float(0.5),
        Value::Str("v1".into()),
    ] {
        compare(&version, &scalar).unwrap_err();
        compare(&scalar, &version).unwrap_err();
    }
}

#[test]
fn object_against_bool_fails() {
    let obj = Value::object(Rc::new(1u8));
    compare(&obj, &Value::Bool(true)).unwrap_err();
    compare(&Value::Bool(false), &obj).unwrap_err();
}

#[test]
fn native_ordering() {
    assert_eq!(compare(&Value::Int(1), &Value::Int(2)), Ok(Ordering::Less));
    assert_eq!(
        compare(&Value::Float(1.5), &Value::Int(1)),
        Ok(Ordering::Greater),
    );
    assert_eq!(
        compare(&Value::Str("10".into()), &Value::Int(9)),
        Ok(Ordering::Greater),
    );
    assert_eq!(
        compare(&Value::Str("abc".into()), &Value::Str("abd".into())),
        Ok(Ordering::Less),
    );
    // Bools coerce the other side to truthiness.
    assert_eq!(
        compare(&Value::Bool(true), &Value::Int(5)),
        Ok(Ordering::Equal),
    );
    assert_eq!(
        compare(&Value::Null, &Value::Int(5)),
        Ok(Ordering::Less),
    );
    // Structured values order Equal among themselves and above scalars.
    assert_eq!(
        compare(&Value::seq(vec![Value::Int(1)]), &Value::seq(vec![])),
        Ok(Ordering::Equal),
    );
    assert_eq!(
        compare(&Value::seq(vec![]), &Value::Int(100)),
        Ok(Ordering::Greater),
    );
    assert_eq!(
        compare(&Value::Int(100), &Value::object(Rc::new(1u8))),
        Ok(Ordering::Less),
    );
}

#[test]
fn invert_comparator_reverses() {
    let one = Value::comparable(Version(1));
    let two = Value::comparable(Version(2));
    assert_eq!(compare(&one, &two), Ok(Ordering::Less));

    let descending = invert_comparator(compare);
    assert_eq!(descending(&one, &two), Ok(Ordering::Greater));

    // Errors pass through unchanged.
    descending(&one, &Value::Int(1)).unwrap_err();
}

#[test]
fn invert_predicate_negates() {
    let not_equals = invert_predicate(equals);
    assert!(not_equals(&Value::Int(1), &Value::Int(2)));
    assert!(!not_equals(&Value::Int(1), &Value::Str("1".into())));
}

#[proptest]
fn equals_is_symmetric(
    #[strategy(any_value())] a: Value,
    #[strategy(any_value())] b: Value,
) {
    prop_assert_eq!(equals(&a, &b), equals(&b, &a));
}

#[proptest]
fn same_is_symmetric(
    #[strategy(any_value())] a: Value,
    #[strategy(any_value())] b: Value,
) {
    prop_assert_eq!(same(&a, &b), same(&b, &a));
}

// Restricted to non-Comparable values: mismatched Comparable types order
// Greater in both directions by convention.
#[proptest]
fn compare_is_antisymmetric(
    #[strategy(plain_value())] a: Value,
    #[strategy(plain_value())] b: Value,
) {
    match (compare(&a, &b), compare(&b, &a)) {
        (Ok(x), Ok(y)) => prop_assert_eq!(x, y.reverse()),
        (Err(_), Err(_)) => {}
        (x, y) => prop_assert!(false, "asymmetric failure: {:?} vs {:?}", x, y),
    }
}

#[proptest]
fn reflexivity(#[strategy(plain_value())] a: Value) {
    prop_assert!(equals(&a, &a));
    prop_assert!(same(&a, &a));
    prop_assert_eq!(compare(&a, &a), Ok(Ordering::Equal));
}

#[proptest]
fn comparable_reflexivity(#[strategy(comparable_value())] a: Value) {
    prop_assert!(equals(&a, &a));
    prop_assert!(same(&a, &a));
    prop_assert_eq!(compare(&a, &a), Ok(Ordering::Equal));
}

#[proptest]
fn double_invert_comparator_restores(
    #[strategy(plain_value())] a: Value,
    #[strategy(plain_value())] b: Value,
) {
    let twice = invert_comparator(invert_comparator(compare));
    prop_assert_eq!(twice(&a, &b), compare(&a, &b));
}

#[proptest]
fn double_invert_predicate_restores(
    #[strategy(any_value())] a: Value,
    #[strategy(any_value())] b: Value,
) {
    let twice = invert_predicate(invert_predicate(equals));
    prop_assert_eq!(twice(&a, &b), equals(&a, &b));
}
