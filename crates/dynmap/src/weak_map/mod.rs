//! A map whose keys are held by non-owning references.
//!
//! Entries disappear when the last owning handle to their key is dropped.
//! See [`WeakMap`] for details.

pub(crate) mod imp;
mod iter;
mod view;

pub use imp::WeakMap;
pub use iter::Iter;
pub use view::ReadonlyWeakMap;
