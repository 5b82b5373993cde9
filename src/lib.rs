//! Gator - current-user management over a users table
//!
//! This library provides functionality for:
//! - Reading and atomically rewriting the `~/.gatorconfig.json` config file
//! - Storing users in SQLite behind the `UserStore` trait
//! - Dispatching string-named commands to handlers through a registry
//!
//! # Examples
//!
//! ```rust
//! use gator::cli::{Command, CommandRegistry, State};
//! use gator::{Config, Database};
//!
//! let dir = std::env::temp_dir().join(format!("gator-doc-{}", std::process::id()));
//! std::fs::create_dir_all(&dir)?;
//! let mut state = State::new(
//!     Config::new(":memory:"),
//!     dir.join(".gatorconfig.json"),
//!     Box::new(Database::in_memory()?),
//! );
//!
//! let registry = CommandRegistry::with_builtin_commands();
//! registry.run(&mut state, &Command::new("register", vec!["alice".to_string()]))?;
//! assert_eq!(state.config.current_user_name, "alice");
//! # std::fs::remove_dir_all(&dir)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod prelude;
pub mod store;
pub mod types;

pub use config::Config;
pub use database::{CreateUserParams, Database, User};
pub use error::{Error, Result};
pub use store::UserStore;
