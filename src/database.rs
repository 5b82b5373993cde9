//! Database management for Gator
//!
//! This module provides SQLite-based storage for the `users` table.
//! The connection is opened once per process and used by one call at a time.

use crate::error::{Error, Result};
use crate::store::UserStore;
use crate::types::UserId;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;

/// Represents a user in the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
}

/// Values for a new user row
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
}

impl CreateUserParams {
    /// Fresh id and current timestamps for `name`
    pub fn new<S: Into<String>>(name: S) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            created_at: now,
            updated_at: now,
            name: name.into(),
        }
    }
}

/// SQLite user store
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database named by a config `db_url` and initialize schema
    ///
    /// Accepts a filesystem path, a `sqlite://` or `sqlite:` prefixed path,
    /// or `:memory:`.
    #[must_use = "Database connection must be used"]
    pub fn open(db_url: &str) -> Result<Self> {
        let target = db_url
            .strip_prefix("sqlite://")
            .or_else(|| db_url.strip_prefix("sqlite:"))
            .unwrap_or(db_url);

        if target.is_empty() || target.contains("://") {
            return Err(Error::UnsupportedDatabaseUrl {
                url: db_url.to_string(),
            });
        }

        if target == ":memory:" {
            return Self::in_memory();
        }

        Self::new(Path::new(target))
    }

    /// Create a new database connection at `db_path` and initialize schema
    #[must_use = "Database connection must be used"]
    pub fn new(db_path: &Path) -> Result<Self> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!("Opening database at {}", db_path.display());
        Self::from_connection(Connection::open(db_path)?)
    }

    /// Open a private in-memory database
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn initialize_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                name TEXT NOT NULL UNIQUE
            )",
            [],
        )?;

        Ok(())
    }

    fn row_to_user(row: &Row<'_>) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            created_at: row.get(1)?,
            updated_at: row.get(2)?,
            name: row.get(3)?,
        })
    }
}

impl UserStore for Database {
    fn find_user(&self, name: &str) -> Result<Option<User>> {
        debug!("Looking up user {}", name);
        let user = self
            .conn
            .query_row(
                "SELECT id, created_at, updated_at, name FROM users WHERE name = ?1",
                params![name],
                Self::row_to_user,
            )
            .optional()?;

        Ok(user)
    }

    fn create_user(&mut self, new_user: CreateUserParams) -> Result<User> {
        debug!("Creating user {} ({})", new_user.name, new_user.id);
        self.conn.execute(
            "INSERT INTO users (id, created_at, updated_at, name) VALUES (?1, ?2, ?3, ?4)",
            params![
                new_user.id,
                new_user.created_at,
                new_user.updated_at,
                new_user.name
            ],
        )?;

        Ok(User {
            id: new_user.id,
            created_at: new_user.created_at,
            updated_at: new_user.updated_at,
            name: new_user.name,
        })
    }

    fn list_users(&self) -> Result<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, created_at, updated_at, name FROM users ORDER BY rowid")?;

        let users = stmt
            .query_map([], Self::row_to_user)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(users)
    }

    fn delete_all_users(&mut self) -> Result<usize> {
        let deleted = self.conn.execute("DELETE FROM users", [])?;
        debug!("Deleted {} users", deleted);
        Ok(deleted)
    }
}
