// crates/ports/src/source.rs
use coreutils_shared_kernel::{ReadResult, Source};

/// Port for turning a [`Source`] into its complete byte content.
///
/// Implementations read the whole source in one go; a failure is reported
/// as a [`coreutils_shared_kernel::SourceReadError`] carrying the source identity.
pub trait SourceReader {
    fn read(&self, source: &Source) -> ReadResult<Vec<u8>>;
}
