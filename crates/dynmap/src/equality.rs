//! The equality and ordering policy engine.
//!
//! Three entry points with increasingly strict semantics, plus a negation
//! combinator:
//!
//! - [`equals`]: loose equality with an explicit coercion table
//!   (`"1" == 1`, `true == 1`, `null == []`).
//! - [`same`]: strict equality -- identical kind and identical value, no
//!   coercion.
//! - [`compare`]: three-way ordering, failing on pairings that have no
//!   defined order (a scalar against a [`Comparable`] value, an object
//!   against a bool).
//! - [`invert_comparator`] / [`invert_predicate`]: wrap a comparator or
//!   predicate so that it reports the negated result.
//!
//! Values carrying the [`Comparable`] capability order against each other
//! through [`Comparable::compare_to`] when both sides are the same concrete
//! type. Mismatched capability types compare as `Greater` regardless of
//! argument order; this is a compatibility convention, not a total order.
//!
//! [`Comparable`]: crate::Comparable
//! [`Comparable::compare_to`]: crate::Comparable::compare_to

use crate::{
    errors::InvalidArgument,
    value::{parse_integral, parse_numeric, Value},
};
use core::cmp::Ordering;
use std::rc::Rc;

/// Loose equality.
///
/// Comparable values of the same concrete type are equal when their ordering
/// is `Equal`; a Comparable value is never equal to a non-Comparable one.
/// For everything else an explicit coercion table applies: numeric strings
/// equal numbers, booleans equal the other side's truthiness, and `Null`,
/// `false`, `0`, `""` and the empty sequence form one falsy cluster.
/// Sequences and objects otherwise require handle identity.
///
/// Symmetric: `equals(a, b) == equals(b, a)` for every rule.
///
/// # Examples
///
/// ```
/// use dynmap::{Value, equality::equals};
///
/// assert!(equals(&Value::Int(1), &Value::Str("1".into())));
/// assert!(equals(&Value::Bool(true), &Value::Int(1)));
/// assert!(equals(&Value::Null, &Value::seq(vec![])));
/// assert!(!equals(&Value::Bool(false), &Value::Int(1)));
/// ```
pub fn equals(a: &Value, b: &Value) -> bool {
    use Value::*;

    match (a, b) {
        (Comparable(x), Comparable(y)) => {
            matches!(x.compare_dyn(y.as_ref()), Some(Ordering::Equal))
        }
        // A capability value against anything else: the identity fallback
        // can never hold across distinct representations.
        (Comparable(_), _) | (_, Comparable(_)) => false,

        (Null, Null) => true,
        (Null, Str(s)) | (Str(s), Null) => s.is_empty(),
        // Null and Bool coerce the other side to its truthiness.
        (Null | Bool(_), other) | (other, Null | Bool(_)) => {
            match other {
                // An object is an incompatible kind, not a truthy scalar.
                Obj(_) => false,
                _ => a.is_truthy() == b.is_truthy(),
            }
        }

        (Int(x), Int(y)) => x == y,
        (Float(x), Float(y)) => x == y,
        (Int(x), Float(y)) | (Float(y), Int(x)) => *x as f64 == *y,
        (Str(x), Str(y)) => match (parse_integral(x), parse_integral(y)) {
            // Two integral strings compare exactly, beyond f64's 2^53.
            (Some(ix), Some(iy)) => ix == iy,
            _ => match (parse_numeric(x), parse_numeric(y)) {
                // Two numeric strings compare by their numeric reading, so
                // "1" == "01".
                (Some(nx), Some(ny)) => nx == ny,
                _ => x == y,
            },
        },
        (Str(s), Int(i)) | (Int(i), Str(s)) => match parse_integral(s) {
            Some(v) => v == *i,
            None => parse_numeric(s) == Some(*i as f64),
        },
        (Str(s), Float(f)) | (Float(f), Str(s)) => parse_numeric(s) == Some(*f),

        (Seq(x), Seq(y)) => {
            Rc::ptr_eq(x, y) || (x.is_empty() && y.is_empty())
        }
        (Obj(x), Obj(y)) => Rc::ptr_eq(x, y),

        // Remaining cross-kind pairings are incompatible.
        _ => false,
    }
}

/// Strict equality.
///
/// Values are equal only if they are of the identical kind and have the
/// identical value; sequences and objects require handle identity.
/// Comparable values of the same concrete type delegate to their ordering,
/// exactly as [`equals`] does -- the capability opts out of strict
/// kind-matching.
///
/// # Examples
///
/// ```
/// use dynmap::{Value, equality::same};
///
/// assert!(same(&Value::Null, &Value::Null));
/// assert!(!same(&Value::Int(1), &Value::Str("1".into())));
/// assert!(!same(&Value::Null, &Value::Bool(false)));
/// ```
pub fn same(a: &Value, b: &Value) -> bool {
    use Value::*;

    match (a, b) {
        (Comparable(x), Comparable(y)) => {
            matches!(x.compare_dyn(y.as_ref()), Some(Ordering::Equal))
        }
        (Null, Null) => true,
        (Bool(x), Bool(y)) => x == y,
        (Int(x), Int(y)) => x == y,
        (Float(x), Float(y)) => x == y,
        (Str(x), Str(y)) => x == y,
        (Seq(x), Seq(y)) => Rc::ptr_eq(x, y),
        (Obj(x), Obj(y)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}

/// Three-way ordering.
///
/// Comparable values of the same concrete type order through
/// [`compare_to`]; mismatched capability types order as `Greater` in either
/// direction. A capability value paired with a plain sequence or object is
/// also `Greater`. Non-capability values use native ordering: numeric for
/// numbers (including numeric strings), byte-wise for strings, truthiness
/// when a bool or null is involved, and two structured values always order
/// `Equal` regardless of content.
///
/// # Errors
///
/// Returns [`InvalidArgument`] when one operand is a scalar and the other
/// is a Comparable value, and when a plain object is ordered against a
/// bool.
///
/// # Examples
///
/// ```
/// use dynmap::{Value, equality::compare};
/// use std::cmp::Ordering;
///
/// assert_eq!(
///     compare(&Value::Int(1), &Value::Int(2)),
///     Ok(Ordering::Less),
/// );
/// assert_eq!(
///     compare(&Value::Str("10".into()), &Value::Int(9)),
///     Ok(Ordering::Greater),
/// );
/// ```
///
/// [`compare_to`]: crate::Comparable::compare_to
pub fn compare(a: &Value, b: &Value) -> Result<Ordering, InvalidArgument> {
    use Value::*;

    match (a, b) {
        (Comparable(x), Comparable(y)) => {
            // Mismatched concrete types order as Greater in either
            // direction. Compatibility convention; see crate docs.
            Ok(x.compare_dyn(y.as_ref()).unwrap_or(Ordering::Greater))
        }
        (Comparable(_), Seq(_) | Obj(_)) | (Seq(_) | Obj(_), Comparable(_)) => {
            Ok(Ordering::Greater)
        }
        (Comparable(_), other) | (other, Comparable(_)) => {
            Err(InvalidArgument::new(format!(
                "cannot order a value of kind `{}` against a comparable \
                 value",
                other.kind(),
            )))
        }

        (Obj(_), Bool(_)) | (Bool(_), Obj(_)) => Err(InvalidArgument::new(
            "cannot order an object against a bool",
        )),

        (Null, Null) => Ok(Ordering::Equal),
        // Null reads as the empty string next to a string.
        (Null, Str(s)) => Ok(if s.is_empty() {
            Ordering::Equal
        } else {
            Ordering::Less
        }),
        (Str(s), Null) => Ok(if s.is_empty() {
            Ordering::Equal
        } else {
            Ordering::Greater
        }),
        // Null and Bool coerce the other side to its truthiness.
        (Null | Bool(_), _) | (_, Null | Bool(_)) => {
            Ok(a.is_truthy().cmp(&b.is_truthy()))
        }

        (Int(x), Int(y)) => Ok(x.cmp(y)),
        (Float(x), Float(y)) => Ok(x.total_cmp(y)),
        (Int(x), Float(y)) => Ok((*x as f64).total_cmp(y)),
        (Float(x), Int(y)) => Ok(x.total_cmp(&(*y as f64))),

        (Str(x), Str(y)) => match (parse_integral(x), parse_integral(y)) {
            (Some(ix), Some(iy)) => Ok(ix.cmp(&iy)),
            _ => match (parse_numeric(x), parse_numeric(y)) {
                (Some(nx), Some(ny)) => Ok(nx.total_cmp(&ny)),
                _ => Ok(x.cmp(y)),
            },
        },
        (Str(s), Int(i)) => Ok(str_int_cmp(s, *i)),
        (Int(i), Str(s)) => Ok(str_int_cmp(s, *i).reverse()),
        (Str(s), Float(f)) => Ok(str_number_cmp(s, *f, &f.to_string())),
        (Float(f), Str(s)) => {
            Ok(str_number_cmp(s, *f, &f.to_string()).reverse())
        }

        // Structured values order Equal among themselves regardless of
        // content, and Greater than the remaining scalars.
        (Seq(_) | Obj(_), Seq(_) | Obj(_)) => Ok(Ordering::Equal),
        (Seq(_) | Obj(_), _) => Ok(Ordering::Greater),
        (_, Seq(_) | Obj(_)) => Ok(Ordering::Less),
    }
}

/// Orders a string against a number: numerically if the string is numeric,
/// otherwise byte-wise against the number's rendering.
fn str_number_cmp(s: &str, n: f64, rendered: &str) -> Ordering {
    match parse_numeric(s) {
        Some(v) => v.total_cmp(&n),
        None => s.cmp(rendered),
    }
}

/// Orders a string against an integer, exactly when the string is itself
/// integral.
fn str_int_cmp(s: &str, i: i64) -> Ordering {
    match parse_integral(s) {
        Some(v) => v.cmp(&i),
        None => str_number_cmp(s, i as f64, &i.to_string()),
    }
}

/// Wraps a three-way comparator so that it reports the reversed ordering.
///
/// Errors from the wrapped comparator pass through unchanged. Wrapping
/// twice restores the original behavior.
///
/// # Examples
///
/// ```
/// use dynmap::{Value, equality::{compare, invert_comparator}};
/// use std::cmp::Ordering;
///
/// let descending = invert_comparator(compare);
/// assert_eq!(
///     descending(&Value::Int(1), &Value::Int(2)),
///     Ok(Ordering::Greater),
/// );
/// ```
pub fn invert_comparator<F>(
    f: F,
) -> impl Fn(&Value, &Value) -> Result<Ordering, InvalidArgument>
where
    F: Fn(&Value, &Value) -> Result<Ordering, InvalidArgument>,
{
    move |a, b| f(a, b).map(Ordering::reverse)
}

/// Wraps a binary predicate so that it reports the negated result.
///
/// Wrapping twice restores the original behavior.
///
/// # Examples
///
/// ```
/// use dynmap::{Value, equality::{equals, invert_predicate}};
///
/// let not_equals = invert_predicate(equals);
/// assert!(not_equals(&Value::Int(1), &Value::Int(2)));
/// ```
pub fn invert_predicate<F>(f: F) -> impl Fn(&Value, &Value) -> bool
where
    F: Fn(&Value, &Value) -> bool,
{
    move |a, b| !f(a, b)
}
