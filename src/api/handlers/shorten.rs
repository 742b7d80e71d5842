//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::ShortenerState;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is missing or not an acceptable
/// absolute URL; no entry is stored in that case.
pub async fn shorten_handler(
    State(state): State<ShortenerState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let code = state.link_service.shorten(&payload.url)?;
    let short_url = state.link_service.short_url(&code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_code: code,
            short_url,
        }),
    ))
}
