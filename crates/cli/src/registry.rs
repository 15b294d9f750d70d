// crates/cli/src/registry.rs
use std::collections::BTreeMap;

use crate::command::Command;

/// Directory of commands keyed by lowercase name.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `command` under `name`, replacing any earlier registration
    /// with the same lowercased name.
    pub fn register(&mut self, name: &str, command: impl Command + 'static) {
        let key = name.to_lowercase();
        if self.commands.insert(key, Box::new(command)).is_some() {
            log::debug!("command '{name}' re-registered; previous handler replaced");
        }
    }

    /// Case-insensitive lookup.
    pub fn resolve(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(&name.to_lowercase()).map(|command| command.as_ref())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }
}
