//! Comparable fixtures of two distinct concrete types.

use core::cmp::Ordering;
use dynmap::Comparable;

/// A comparable value ordered by its version number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Version(pub u32);

impl Comparable for Version {
    fn compare_to(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// A comparable value of a different concrete type than [`Version`], for
/// exercising mismatched-type pairings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Priority(pub i32);

impl Comparable for Priority {
    fn compare_to(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
