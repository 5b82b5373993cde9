//! Prelude module for Gator
//!
//! This module re-exports commonly used types and traits to reduce
//! boilerplate imports throughout the codebase.
//!
//! # Usage
//!
//! ```rust
//! use gator::prelude::*;
//! ```

pub use crate::cli::{Command, CommandRegistry, State};
pub use crate::config::Config;
pub use crate::database::{CreateUserParams, Database, User};
pub use crate::error::{Error, Result};
pub use crate::store::UserStore;
pub use crate::types::UserId;

// Re-export commonly used external types
pub use chrono::{DateTime, Utc};
