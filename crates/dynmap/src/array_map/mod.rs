//! An insertion-ordered map with integer or string keys.
//!
//! Integer keys are positional: removing one renumbers the rest. See
//! [`ArrayMap`] for details.

pub(crate) mod imp;
mod iter;
mod key;
#[cfg(feature = "serde")]
mod serde_impls;
mod tables;

pub use imp::ArrayMap;
pub use iter::{IntoIter, Iter};
pub use key::{IntoKey, Key};
