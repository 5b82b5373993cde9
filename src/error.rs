//! Error handling for Gator
//!
//! This module defines the error types used throughout the application.
//! Every error surfaces at the entrypoint, which prints it and exits with
//! a non-zero status.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Gator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Gator operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Home directory could not be determined
    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    /// Configuration file could not be read
    #[error("Unable to read config from {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file is not valid JSON for the expected schema
    #[error("Invalid config in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file could not be written
    #[error("Unable to write config to {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Wrong number or shape of handler arguments
    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// No command name was given on the command line
    #[error("too few arguments: a command name is required")]
    MissingCommand,

    /// No handler registered under the requested name
    #[error("command not found: {name}")]
    CommandNotFound { name: String },

    /// The named user does not exist in the store
    #[error("user does not exist: {name}")]
    UserNotFound { name: String },

    /// A user with this name is already registered
    #[error("User: {name} already exists")]
    UserAlreadyExists { name: String },

    /// The configured database URL has a scheme this build cannot open
    #[error("Unsupported database URL: {url}")]
    UnsupportedDatabaseUrl { url: String },
}

impl Error {
    /// Create an invalid arguments error
    pub fn invalid_arguments<S: Into<String>>(message: S) -> Self {
        Error::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found<S: Into<String>>(name: S) -> Self {
        Error::CommandNotFound { name: name.into() }
    }

    /// Create a user not found error
    pub fn user_not_found<S: Into<String>>(name: S) -> Self {
        Error::UserNotFound { name: name.into() }
    }

    /// Create a user already exists error
    pub fn user_already_exists<S: Into<String>>(name: S) -> Self {
        Error::UserAlreadyExists { name: name.into() }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Get the error category for logging purposes
    pub fn category(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Json(_) => "json",
            Error::Database(_) | Error::UnsupportedDatabaseUrl { .. } => "database",
            Error::HomeDirectoryNotFound => "system",
            Error::ConfigRead { .. } | Error::ConfigWrite { .. } => "config",
            Error::ConfigParse { .. } => "parse",
            Error::InvalidArguments { .. } | Error::MissingCommand => "arguments",
            Error::CommandNotFound { .. } => "dispatch",
            Error::UserNotFound { .. } | Error::UserAlreadyExists { .. } => "user",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_invalid_arguments_error() {
        let err = Error::invalid_arguments("login expects a single argument, the username");
        assert_eq!(
            err.to_string(),
            "Invalid arguments: login expects a single argument, the username"
        );
        assert_eq!(err.category(), "arguments");
    }

    #[test]
    fn test_command_not_found() {
        let err = Error::command_not_found("follow");
        assert_eq!(err.to_string(), "command not found: follow");
        assert_eq!(err.category(), "dispatch");
    }

    #[test]
    fn test_user_errors() {
        let err = Error::user_not_found("bob");
        assert_eq!(err.to_string(), "user does not exist: bob");
        assert_eq!(err.category(), "user");

        let err = Error::user_already_exists("alice");
        assert_eq!(err.to_string(), "User: alice already exists");
        assert_eq!(err.category(), "user");
    }

    #[test]
    fn test_config_read_error_mentions_path() {
        let path = Path::new("/nonexistent/.gatorconfig.json").to_path_buf();
        let err = Error::ConfigRead {
            path: path.clone(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains(&path.display().to_string()));
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn test_every_error_exits_with_one() {
        assert_eq!(Error::MissingCommand.exit_code(), 1);
        assert_eq!(Error::HomeDirectoryNotFound.exit_code(), 1);
        assert_eq!(Error::user_not_found("x").exit_code(), 1);
    }
}
