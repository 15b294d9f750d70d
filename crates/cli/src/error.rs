// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
