//! Internal support code.

pub(crate) mod hash_builder;
