// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{ReadResult, SourceReadError};

pub mod error;
pub mod value_objects;

pub use value_objects::{ByteCount, LineCount, STDIN_LABEL, Source, WordCount};
