//! DTOs for the login endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request. Presence only; the email pattern is not enforced here,
/// an unregistered address simply fails the credential check.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
