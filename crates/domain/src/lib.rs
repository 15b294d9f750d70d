//! # Domain
//!
//! Counting rules and the values they produce.
//!
//! - [`counting`]: the byte scan deriving lines, words and bytes
//! - [`model`]: the [`Counts`] triple and its field-wise sum
//! - [`options`]: [`ActiveFlags`], the selection of fields to report

#![allow(clippy::multiple_crate_versions)]

pub mod counting;
pub mod model;
pub mod options;

pub use counting::count_bytes;
pub use model::Counts;
pub use options::ActiveFlags;
