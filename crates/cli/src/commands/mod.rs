pub mod wc;

pub use wc::WcCommand;

use coreutils_infra::FsSourceReader;

use crate::{args::WC_NAME, registry::CommandRegistry};

/// Registry holding every command this binary ships, reading from the real
/// file system and standard input.
pub fn builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(WC_NAME, WcCommand::new(Box::new(FsSourceReader::new())));
    registry
}
