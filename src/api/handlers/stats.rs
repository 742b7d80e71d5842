//! Handler for short link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::ShortenerState;

/// Returns the stored URL, creation time, and click count for a code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Errors
///
/// Returns 404 Not Found for unknown codes.
pub async fn stats_handler(
    State(state): State<ShortenerState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.stats(&code)?;

    Ok(Json(link.into()))
}
