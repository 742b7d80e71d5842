//! DTOs for the user directory endpoints.

use crate::domain::entities::User;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled pattern for acceptable email addresses.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

/// Signup request.
///
/// Fields default to empty strings when absent so a missing field fails the
/// same length rule as an explicitly empty one.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub name: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "Missing required fields"),
        regex(path = "*EMAIL_REGEX", message = "Invalid email format")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub password: String,
}

/// Update request for name and email. The password cannot be changed here.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub name: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "Missing required fields"),
        regex(path = "*EMAIL_REGEX", message = "Invalid email format")
    )]
    pub email: String,
}

/// Public view of a user. This is the only user shape that serializes; the
/// password hash stays inside [`User`].
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Plain confirmation message, used by delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Query parameters for the name search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}
