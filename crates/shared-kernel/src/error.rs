// crates/shared-kernel/src/error.rs
use std::io;

use thiserror::Error;

use crate::value_objects::Source;

/// A single input source could not be opened or fully read.
///
/// Carries the source identity so the failure can be reported without
/// aborting the remaining sources of a run.
#[derive(Debug, Error)]
#[error("{source_id}: {cause}")]
pub struct SourceReadError {
    pub source_id: Source,
    #[source]
    pub cause: io::Error,
}

impl SourceReadError {
    pub fn new(source_id: Source, cause: io::Error) -> Self {
        Self { source_id, cause }
    }
}

pub type ReadResult<T> = std::result::Result<T, SourceReadError>;
