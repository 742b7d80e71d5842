//! Route groups for both services.
//!
//! The user directory splits into public routes (signup, login, service
//! info) and protected routes behind the Bearer token middleware; the
//! shortener is entirely public.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, home_handler, list_users_handler,
    login_handler, redirect_handler, search_users_handler, shorten_handler,
    shortener_health_handler, shortener_home_handler, stats_handler, update_user_handler,
};
use crate::state::{ShortenerState, UserApiState};
use axum::{
    Router,
    routing::{get, post},
};

/// User directory routes reachable without a token.
///
/// - `GET  /`       - Service info
/// - `POST /users`  - Signup
/// - `POST /login`  - Credential exchange
pub fn user_public_routes() -> Router<UserApiState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/users", post(create_user_handler))
        .route("/login", post(login_handler))
}

/// User directory routes requiring a Bearer token.
///
/// The authentication middleware is attached by the caller so tests and the
/// server compose it the same way.
///
/// - `GET    /users`      - List users
/// - `GET    /user/{id}`  - Fetch one user
/// - `PUT    /user/{id}`  - Update own record
/// - `DELETE /user/{id}`  - Delete own record
/// - `GET    /search`     - Name substring search
pub fn user_protected_routes() -> Router<UserApiState> {
    Router::new()
        .route("/users", get(list_users_handler))
        .route(
            "/user/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/search", get(search_users_handler))
}

/// All shortener routes.
///
/// - `GET  /`                  - Service info
/// - `GET  /api/health`        - Health check
/// - `POST /api/shorten`       - Create a short link
/// - `GET  /api/stats/{code}`  - Link statistics
/// - `GET  /{code}`            - Redirect
pub fn shortener_routes() -> Router<ShortenerState> {
    Router::new()
        .route("/", get(shortener_home_handler))
        .route("/api/health", get(shortener_health_handler))
        .route("/api/shorten", post(shorten_handler))
        .route("/api/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
}
