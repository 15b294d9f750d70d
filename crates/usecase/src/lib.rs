//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`count_sources`]: the run over all requested sources, with totals
//! - [`dto`]: per-source outcomes and the run report
//!
//! Use cases depend on the domain and on ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod count_sources;
pub mod dto;

pub use count_sources::{CountSources, RunMode};
pub use dto::{RunReport, SourceOutcome};
