use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

/// Convenience helpers for whole-content reads.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> io::Result<Vec<u8>> {
        let file = File::open(path)?;
        Self::drain(file)
    }

    /// Read everything `reader` yields until end of stream.
    pub fn drain<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
