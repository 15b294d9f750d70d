// crates/shared-kernel/src/value_objects/source.rs
use std::{fmt, path::PathBuf};

/// Label used for standard input in diagnostics.
pub const STDIN_LABEL: &str = "-";

/// Where a byte sequence comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Label printed next to the counts: empty for stdin, the path as given otherwise.
    pub fn report_label(&self) -> String {
        match self {
            Self::Stdin => String::new(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str(STDIN_LABEL),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}
