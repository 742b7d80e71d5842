//! HTTP server initialization and runtime setup.
//!
//! Handles database setup, state wiring, and the Axum server lifecycle for
//! both services.

use crate::config::{ShortenerConfig, UserApiConfig};
use crate::routes::{shortener_router, user_api_router};
use crate::state::{ShortenerState, UserApiState};

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::{Router, ServiceExt};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    if log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Runs the user directory service.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if missing)
/// - Embedded migrations
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database cannot be opened, migrations fail, or
/// the server cannot bind.
pub async fn run_user_api(config: UserApiConfig) -> Result<()> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let state = UserApiState::new(
        pool,
        &config.token_secret,
        config.token_ttl_hours,
        config.bcrypt_cost,
    );

    serve(user_api_router(state), &config.listen_addr).await
}

/// Runs the shortener service.
///
/// The link store lives and dies with the process; a restart drops all
/// short links by design.
///
/// # Errors
///
/// Returns an error if the server cannot bind.
pub async fn run_shortener(config: ShortenerConfig) -> Result<()> {
    let state = ShortenerState::new(config.base_url.clone());

    serve(shortener_router(state), &config.listen_addr).await
}

async fn serve(router: Router, listen_addr: &str) -> Result<()> {
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    let addr: SocketAddr = listen_addr.parse().context("Invalid listen address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listen address")?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
