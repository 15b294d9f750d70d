// crates/cli/src/dispatch.rs
use std::{
    ffi::OsString,
    io::{self, Write},
};

use crate::{
    console::{Console, exit},
    error::CliError,
    registry::CommandRegistry,
};

/// Resolve the first argument to a command and run it with the rest.
///
/// With no arguments (or `-h`/`--help`) the command listing is printed and the
/// result is success. An unknown name, including one that is not valid
/// UTF-8, is reported on the error channel, followed by the listing on the
/// output channel, and fails.
pub fn dispatch(registry: &CommandRegistry, args: &[OsString], console: &mut Console<'_>) -> u8 {
    let Some((name, rest)) = args.split_first() else {
        return listing_exit(registry, console, exit::SUCCESS);
    };

    if matches!(name.to_str(), Some("-h" | "--help")) {
        return listing_exit(registry, console, exit::SUCCESS);
    }

    match name.to_str().and_then(|name| registry.resolve(name)) {
        Some(command) => {
            log::debug!("dispatching '{}' with {} argument(s)", name.to_string_lossy(), rest.len());
            command.execute(rest, console)
        }
        None => {
            let err = CliError::UnknownCommand { name: name.to_string_lossy().into_owned() };
            log::debug!("{err}");
            if writeln!(console.err(), "{err}").is_err() {
                return exit::FAILURE;
            }
            listing_exit(registry, console, exit::FAILURE)
        }
    }
}

fn listing_exit(registry: &CommandRegistry, console: &mut Console<'_>, code: u8) -> u8 {
    match write_usage(registry, console.out()) {
        Ok(()) => code,
        Err(_) => exit::FAILURE,
    }
}

/// Write the listing of registered commands with their descriptions.
pub fn write_usage(registry: &CommandRegistry, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Available commands:")?;
    for name in registry.names() {
        let description = registry.resolve(name).map(|command| command.describe()).unwrap_or_default();
        writeln!(out, "  {name:<10} {description}")?;
    }
    writeln!(out)?;
    writeln!(out, "Use '[command] --help' for more information about a command.")
}
