//! The dynamic value universe that the equality engine operates on.
//!
//! [`Value`] is a tagged representation of the kinds of data the comparison
//! policy knows how to relate: scalars, reference-identity containers, and
//! values carrying the [`Comparable`] capability.

use core::{any::Any, cmp::Ordering, fmt};
use std::rc::Rc;

/// The capability to order a value against another value of the same
/// concrete type.
///
/// Implementing this trait opts a type into custom ordering within the
/// equality engine: [`equals`] and [`same`] both report two capability
/// values of the same concrete type as equal exactly when `compare_to`
/// returns [`Ordering::Equal`].
///
/// # Examples
///
/// ```
/// use dynmap::{Comparable, Value, equality};
/// use std::cmp::Ordering;
///
/// #[derive(Debug)]
/// struct Version(u32);
///
/// impl Comparable for Version {
///     fn compare_to(&self, other: &Self) -> Ordering {
///         self.0.cmp(&other.0)
///     }
/// }
///
/// let a = Value::comparable(Version(1));
/// let b = Value::comparable(Version(2));
/// assert_eq!(equality::compare(&a, &b), Ok(Ordering::Less));
/// ```
///
/// [`equals`]: crate::equality::equals
/// [`same`]: crate::equality::same
pub trait Comparable: fmt::Debug {
    /// Orders `self` against another value of the same type.
    fn compare_to(&self, other: &Self) -> Ordering;
}

/// Object-safe form of [`Comparable`], used inside [`Value`].
///
/// A blanket impl covers every `Comparable + 'static` type; the concrete
/// type is recovered by downcast, so ordering across two *different*
/// capability types is reported as a mismatch (`None`) rather than being
/// attempted.
pub trait DynComparable: fmt::Debug {
    /// Returns self as a `dyn Any` for concrete-type recovery.
    fn as_any(&self) -> &dyn Any;

    /// Orders `self` against `other`, or returns `None` if `other` is a
    /// different concrete type.
    fn compare_dyn(&self, other: &dyn DynComparable) -> Option<Ordering>;
}

impl<T: Comparable + 'static> DynComparable for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn compare_dyn(&self, other: &dyn DynComparable) -> Option<Ordering> {
        other.as_any().downcast_ref::<T>().map(|other| self.compare_to(other))
    }
}

/// A dynamically typed value.
///
/// `Seq`, `Obj` and `Comparable` are handle variants: cloning a `Value`
/// clones the `Rc`, and two handles are identical only if they point at the
/// same allocation. There is deliberately no `PartialEq` impl -- equality is
/// a policy choice, made by calling [`equality::equals`] or
/// [`equality::same`].
///
/// [`equality::equals`]: crate::equality::equals
/// [`equality::same`]: crate::equality::same
#[derive(Clone)]
pub enum Value {
    /// The absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
    /// A string.
    Str(String),
    /// A sequence with reference identity.
    Seq(Rc<Vec<Value>>),
    /// An opaque structured value with reference identity.
    Obj(Rc<dyn Any>),
    /// A value carrying the [`Comparable`] capability.
    Comparable(Rc<dyn DynComparable>),
}

impl Value {
    /// Wraps a sequence of values.
    pub fn seq(values: Vec<Value>) -> Self {
        Value::Seq(Rc::new(values))
    }

    /// Wraps an opaque structured value.
    ///
    /// Two `Obj` values are only ever equal to each other if they share the
    /// same handle.
    pub fn object<T: Any>(value: Rc<T>) -> Self {
        Value::Obj(value)
    }

    /// Wraps a value that implements [`Comparable`].
    pub fn comparable<T: Comparable + 'static>(value: T) -> Self {
        Value::Comparable(Rc::new(value))
    }

    /// Returns the name of this value's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Seq(_) => "sequence",
            Value::Obj(_) => "object",
            Value::Comparable(_) => "comparable",
        }
    }

    /// Returns the value's truthiness: `Null`, `false`, `0`, `0.0`, `""`,
    /// `"0"` and the empty sequence are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty() && s != "0",
            Value::Seq(values) => !values.is_empty(),
            Value::Obj(_) | Value::Comparable(_) => true,
        }
    }
}

/// Parses a numeric string, tolerating surrounding whitespace.
///
/// `"nan"`, `"inf"` and friends are not numeric strings, even though they
/// parse as floats.
pub(crate) fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Parses an integral numeric string exactly, tolerating surrounding
/// whitespace. Exact beyond f64's 2^53, unlike [`parse_numeric`].
pub(crate) fn parse_integral(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok()
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Seq(values) => f.debug_tuple("Seq").field(values).finish(),
            Value::Obj(obj) => {
                // Opaque payload: show the identity instead.
                write!(f, "Obj({:p})", Rc::as_ptr(obj))
            }
            Value::Comparable(c) => {
                f.debug_tuple("Comparable").field(c).finish()
            }
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::seq(values)
    }
}
