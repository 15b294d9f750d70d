// crates/infra/src/source_reader.rs
use std::{
    cell::RefCell,
    io::{self, Read},
};

use coreutils_ports::SourceReader;
use coreutils_shared_kernel::{ReadResult, Source, SourceReadError};

use crate::persistence::FileReader;

/// Reads files from the local file system and standard input from `R`.
pub struct FsSourceReader<R = io::Stdin> {
    stdin: RefCell<R>,
}

impl FsSourceReader {
    pub fn new() -> Self {
        Self::with_stdin(io::stdin())
    }
}

impl Default for FsSourceReader {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Read> FsSourceReader<R> {
    /// Use `stdin` in place of the process standard input.
    pub fn with_stdin(stdin: R) -> Self {
        Self { stdin: RefCell::new(stdin) }
    }
}

impl<R: Read> SourceReader for FsSourceReader<R> {
    fn read(&self, source: &Source) -> ReadResult<Vec<u8>> {
        let result = match source {
            Source::Stdin => FileReader::drain(&mut *self.stdin.borrow_mut()),
            Source::File(path) => FileReader::read_to_end(path),
        };
        result.map_err(|cause| SourceReadError::new(source.clone(), cause))
    }
}
