// tests/common/mod.rs
//! Shared helpers for the binary-level tests.

pub mod helpers;

#[allow(unused_imports)]
pub use helpers::*;
