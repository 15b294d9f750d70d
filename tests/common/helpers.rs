// tests/common/helpers.rs
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Create a test file with the given contents and return its path.
///
/// # Panics
///
/// Panics with a descriptive message if file creation fails.
pub fn create_test_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents)
        .unwrap_or_else(|e| panic!("Failed to create test file at {:?}: {}", path, e));
    path
}

/// The `coreutils` binary, ready for arguments.
pub fn coreutils() -> Command {
    Command::new(env!("CARGO_BIN_EXE_coreutils"))
}

/// Render a path the way the report prints it.
pub fn label(path: &Path) -> String {
    path.display().to_string()
}
