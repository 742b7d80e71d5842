//! Top-level router assembly for both services.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging on every route
//! - **Authentication** - Bearer token guard on the protected user routes
//!
//! Trailing-slash normalization is applied in [`crate::server`] when the
//! router is mounted, so these functions return a plain [`Router`] that
//! tests can hand straight to a test server.

use crate::api;
use crate::api::middleware::{auth, tracing};
use crate::state::{ShortenerState, UserApiState};
use axum::{Router, middleware};

/// Constructs the user directory router with all routes and middleware.
pub fn user_api_router(state: UserApiState) -> Router {
    let protected = api::routes::user_protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(api::routes::user_public_routes())
        .merge(protected)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the shortener router.
pub fn shortener_router(state: ShortenerState) -> Router {
    api::routes::shortener_routes()
        .with_state(state)
        .layer(tracing::layer())
}
