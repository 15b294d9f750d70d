//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: acquiring the bytes of a file or of standard input
//!
//! The usecase layer depends on these traits only, never on a concrete adapter.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod source;

pub use source::SourceReader;
