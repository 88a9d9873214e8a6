//! Shared fixtures for dynmap's integration and property tests.

pub mod comparables;
pub mod naive_map;
pub mod strategies;
