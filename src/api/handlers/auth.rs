//! Handler for the login endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, TokenResponse};
use crate::error::AppError;
use crate::state::UserApiState;

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /login` (public)
///
/// # Errors
///
/// Returns 400 Bad Request when email or password is missing.
/// Returns 401 Unauthorized on any credential mismatch; unknown email and
/// wrong password are deliberately indistinguishable.
pub async fn login_handler(
    State(state): State<UserApiState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    payload.validate()?;

    let token = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}
