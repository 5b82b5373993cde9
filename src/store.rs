//! Common interface for user storage
//!
//! Handlers only talk to the data store through `UserStore`, so the
//! SQLite backend can be swapped for any other relational store.

use crate::database::{CreateUserParams, User};
use crate::error::{Error, Result};

/// Capability exposed by the user data store
pub trait UserStore {
    /// Look up a user by name, returning `None` when absent
    #[must_use = "Query results should be used"]
    fn find_user(&self, name: &str) -> Result<Option<User>>;

    /// Look up a user by name
    ///
    /// Fails with `UserNotFound` when no such user exists.
    fn get_user(&self, name: &str) -> Result<User> {
        self.find_user(name)?
            .ok_or_else(|| Error::user_not_found(name))
    }

    /// Insert a new user
    fn create_user(&mut self, params: CreateUserParams) -> Result<User>;

    /// All users, in the order they were created
    #[must_use = "Query results should be used"]
    fn list_users(&self) -> Result<Vec<User>>;

    /// Remove every user, returning how many were deleted
    fn delete_all_users(&mut self) -> Result<usize>;
}
