//! Command-line interface module for Gator
//!
//! This module is organized into submodules:
//! - `args`: Command-line argument structures
//! - `registry`: Name-to-handler dispatch table
//! - `handlers`: Command handler implementations

mod args;
mod handlers;
mod registry;

pub use args::*;
pub use handlers::*;
pub use registry::{BUILTIN_COMMANDS, CommandRegistry, Handler};

use crate::config::Config;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::store::UserStore;
use std::path::PathBuf;
use tracing::debug;

/// A parsed invocation: command name plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    pub fn new<S: Into<String>>(name: S, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// Everything a handler may touch, passed explicitly to each call
pub struct State {
    pub config: Config,
    pub config_path: PathBuf,
    pub store: Box<dyn UserStore>,
}

impl State {
    pub fn new(config: Config, config_path: PathBuf, store: Box<dyn UserStore>) -> Self {
        Self {
            config,
            config_path,
            store,
        }
    }

    /// Record `name` as the current user and rewrite the config file
    pub fn set_current_user(&mut self, name: &str) -> Result<()> {
        self.config.set_user_at(name, &self.config_path)
    }
}

impl Cli {
    /// Turn the positional arguments into a `Command`
    ///
    /// The command name is matched case-insensitively.
    pub fn to_command(&self) -> Result<Command> {
        let name = self.command.as_deref().ok_or(Error::MissingCommand)?;
        Ok(Command::new(name.to_lowercase(), self.args.clone()))
    }
}

/// Main entry point for the CLI
pub fn run(cli: &Cli) -> Result<()> {
    let (config_path, config) = match &cli.config {
        Some(path) => (path.clone(), Config::read_from_path(path)?),
        None => (Config::default_config_path()?, Config::read()?),
    };

    let store = Database::open(&config.db_url)?;
    let mut state = State::new(config, config_path, Box::new(store));

    let registry = CommandRegistry::with_builtin_commands();
    debug_assert!(registry.missing(BUILTIN_COMMANDS).is_empty());

    let command = cli.to_command()?;
    debug!("Running command {}", command.name);
    registry.run(&mut state, &command)
}
