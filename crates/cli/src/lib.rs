// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod command;
pub mod commands;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod error;
pub mod presentation;
pub mod registry;

pub use command::Command;
pub use commands::{WcCommand, builtin_registry};
pub use console::{Console, exit};
pub use dispatch::dispatch;
pub use registry::CommandRegistry;
