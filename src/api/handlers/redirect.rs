//! Handler for short URL redirects.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::ShortenerState;

/// Redirects a short code to its original URL, counting the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The lookup and the click increment are a single atomic store operation,
/// so concurrent redirects never lose counts.
///
/// # Errors
///
/// Returns 404 Not Found for unknown codes.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<ShortenerState>,
) -> Result<Response, AppError> {
    let long_url = state.link_service.resolve(&code)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]).into_response())
}
