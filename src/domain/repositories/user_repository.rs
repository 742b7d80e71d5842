//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the users table.
///
/// The store is the sole arbiter of email uniqueness: concurrent writes
/// racing on the same email are serialized by its unique index, and the
/// loser surfaces as [`AppError::Conflict`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUserRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user and returns the stored row with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by exact email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Lists all users in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Returns users whose name contains `pattern` (case-sensitive substring).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search_by_name(&self, pattern: &str) -> Result<Vec<User>, AppError>;

    /// Replaces name and email for a user, leaving the password hash alone.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` with the updated row
    /// - `Ok(None)` if no user has that id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new email belongs to a
    /// different user. Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UserUpdate) -> Result<Option<User>, AppError>;

    /// Deletes a user row. Returns `true` if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
