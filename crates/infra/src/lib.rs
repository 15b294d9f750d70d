// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod source_reader;

pub use source_reader::FsSourceReader;
