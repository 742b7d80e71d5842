//! Handlers for the user directory endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::users::{
    CreateUserRequest, MessageResponse, SearchQuery, UpdateUserRequest, UserResponse,
};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::UserApiState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users` (Bearer token required)
pub async fn list_users_handler(
    State(state): State<UserApiState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Retrieves a single user.
///
/// # Endpoint
///
/// `GET /user/{id}` (Bearer token required)
///
/// # Errors
///
/// Returns 404 Not Found for unknown ids.
pub async fn get_user_handler(
    State(state): State<UserApiState>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user(id).await?;

    Ok(Json(user.into()))
}

/// Creates a user account.
///
/// # Endpoint
///
/// `POST /users` (public)
///
/// # Errors
///
/// Returns 400 Bad Request for missing fields or a malformed email.
/// Returns 409 Conflict when the email is already registered.
pub async fn create_user_handler(
    State(state): State<UserApiState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .create_user(payload.name, payload.email, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Updates a user's name and email.
///
/// # Endpoint
///
/// `PUT /user/{id}` (Bearer token required)
///
/// # Errors
///
/// Returns 403 Forbidden when the token subject is not the target user.
/// Returns 400 Bad Request for missing fields or a malformed email.
/// Returns 404 Not Found for unknown ids.
/// Returns 409 Conflict when the email belongs to another user.
pub async fn update_user_handler(
    State(state): State<UserApiState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    // Ownership first: acting on another user's record is rejected no
    // matter what the payload looks like.
    if current.id != id {
        return Err(AppError::forbidden("Permission denied"));
    }

    payload.validate()?;

    let user = state
        .user_service
        .update_user(id, payload.name, payload.email)
        .await?;

    Ok(Json(user.into()))
}

/// Deletes a user account.
///
/// # Endpoint
///
/// `DELETE /user/{id}` (Bearer token required)
///
/// # Errors
///
/// Returns 403 Forbidden when the token subject is not the target user.
/// Returns 404 Not Found for unknown ids.
pub async fn delete_user_handler(
    State(state): State<UserApiState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if current.id != id {
        return Err(AppError::forbidden("Permission denied"));
    }

    state.user_service.delete_user(id).await?;

    Ok(Json(MessageResponse {
        message: format!("User {id} deleted"),
    }))
}

/// Searches users by name substring.
///
/// # Endpoint
///
/// `GET /search?name=` (Bearer token required)
///
/// # Errors
///
/// Returns 400 Bad Request when the name parameter is missing or empty.
pub async fn search_users_handler(
    State(state): State<UserApiState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let pattern = params.name.unwrap_or_default();

    let users = state.user_service.search_users(&pattern).await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
