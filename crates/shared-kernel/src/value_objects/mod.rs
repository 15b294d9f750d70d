// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod source;

pub use counts::{ByteCount, LineCount, WordCount};
pub use source::{STDIN_LABEL, Source};
