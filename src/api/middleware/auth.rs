//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::UserApiState};

/// Identity established by the authentication middleware.
///
/// Inserted into request extensions so protected handlers can compare the
/// token subject against the resource they are asked to touch.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub id: i64,
}

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract the token from the `Authorization` header
/// 2. Verify signature and expiry
/// 3. Resolve the token subject to an existing user
/// 4. Insert [`CurrentUser`] into request extensions
/// 5. Continue to the handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - The Authorization header is missing or malformed
/// - The token signature is invalid or the token has expired
/// - The subject user no longer exists
pub async fn layer(
    State(st): State<UserApiState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("Token is missing"))?;

    let user = st.auth_service.authenticate(&token).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser { id: user.id });

    Ok(next.run(req).await)
}
