// crates/cli/src/command.rs
use std::ffi::OsString;

use crate::console::Console;

/// Capability every dispatchable command provides.
pub trait Command {
    /// Run with the arguments that follow the command name; returns the exit code.
    fn execute(&self, args: &[OsString], console: &mut Console<'_>) -> u8;

    /// One-line summary shown in the command listing.
    fn describe(&self) -> &str;

    /// Detailed usage text.
    fn usage(&self) -> String;
}
