//! Name-to-handler dispatch table

use crate::cli::handlers::{handle_login, handle_register, handle_reset, handle_users};
use crate::cli::{Command, State};
use crate::error::{Error, Result};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Commands every build registers
pub const BUILTIN_COMMANDS: &[&str] = &["login", "register", "reset", "users"];

/// A command implementation
pub type Handler = Box<dyn Fn(&mut State, &Command) -> Result<()>>;

/// Maps command names to handlers
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Handler>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the login, register, reset and users commands
    pub fn with_builtin_commands() -> Self {
        let mut registry = Self::new();
        registry.register("login", handle_login);
        registry.register("register", handle_register);
        registry.register("reset", handle_reset);
        registry.register("users", handle_users);
        registry
    }

    /// Register `handler` under `name`
    ///
    /// The first registration wins. A duplicate is logged and ignored,
    /// and `false` is returned.
    pub fn register<F>(&mut self, name: &str, handler: F) -> bool
    where
        F: Fn(&mut State, &Command) -> Result<()> + 'static,
    {
        if self.handlers.contains_key(name) {
            warn!("command: {} is already registered", name);
            return false;
        }

        self.handlers.insert(name.to_string(), Box::new(handler));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered command names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Names from `expected` that have no handler
    pub fn missing<'a>(&self, expected: &[&'a str]) -> Vec<&'a str> {
        expected
            .iter()
            .copied()
            .filter(|name| !self.contains(name))
            .collect()
    }

    /// Invoke the handler registered under `command.name`
    ///
    /// Handler errors are returned as-is.
    pub fn run(&self, state: &mut State, command: &Command) -> Result<()> {
        let handler = self
            .handlers
            .get(&command.name)
            .ok_or_else(|| Error::command_not_found(&command.name))?;

        debug!("Dispatching {} with {} args", command.name, command.args.len());
        handler(state, command)
    }
}
