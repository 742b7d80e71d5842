//! User directory service: CRUD operations and search.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for managing user records.
///
/// Passwords are hashed with bcrypt before they reach the repository; the
/// plaintext never leaves this layer. Email uniqueness is enforced by the
/// store and surfaces as [`AppError::Conflict`].
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    bcrypt_cost: u32,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>, bcrypt_cost: u32) -> Self {
        Self {
            repository,
            bcrypt_cost,
        }
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Retrieves one user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has that id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Creates a user from already-validated fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database or hashing errors.
    pub async fn create_user(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<User, AppError> {
        let password_hash = self.hash_password(password).await?;

        self.repository
            .create(NewUser {
                name,
                email,
                password_hash,
            })
            .await
    }

    /// Replaces a user's name and email. The password is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has that id.
    /// Returns [`AppError::Conflict`] if the email belongs to another user.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_user(
        &self,
        id: i64,
        name: String,
        email: String,
    ) -> Result<User, AppError> {
        self.repository
            .update(id, UserUpdate { name, email })
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Removes a user row irreversibly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has that id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("User not found"));
        }

        Ok(())
    }

    /// Returns users whose name contains `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the pattern is empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn search_users(&self, pattern: &str) -> Result<Vec<User>, AppError> {
        if pattern.is_empty() {
            return Err(AppError::bad_request("Please provide a name to search"));
        }

        self.repository.search_by_name(pattern).await
    }

    /// Hashes a password on the blocking pool; bcrypt work is far too slow
    /// for an async executor thread.
    async fn hash_password(&self, password: String) -> Result<String, AppError> {
        let cost = self.bcrypt_cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "password hashing task failed");
                AppError::internal("Password hashing failed")
            })?
            .map_err(|e| {
                tracing::error!(error = %e, "bcrypt hashing failed");
                AppError::internal("Password hashing failed")
            })
    }
}
