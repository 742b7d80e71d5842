#![allow(dead_code)]

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;

use linkdir::routes::{shortener_router, user_api_router};
use linkdir::state::{ShortenerState, UserApiState};

pub const TEST_TOKEN_SECRET: &str = "test-token-secret";
pub const TEST_BASE_URL: &str = "http://sho.rt";

// Minimum bcrypt cost keeps signup and login fast in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn user_api_server(pool: SqlitePool) -> TestServer {
    let state = UserApiState::new(pool, TEST_TOKEN_SECRET, 24, TEST_BCRYPT_COST);
    TestServer::new(user_api_router(state)).unwrap()
}

pub fn shortener_server() -> TestServer {
    let state = ShortenerState::new(TEST_BASE_URL.to_string());
    TestServer::new(shortener_router(state)).unwrap()
}

/// Registers a user and returns the assigned id.
pub async fn signup(server: &TestServer, name: &str, email: &str, password: &str) -> i64 {
    let response = server
        .post("/users")
        .json(&json!({
            "name": name,
            "email": email,
            "password": password
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    response.json::<serde_json::Value>()["id"].as_i64().unwrap()
}

/// Logs a user in and returns the bearer token.
pub async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/login")
        .json(&json!({
            "email": email,
            "password": password
        }))
        .await;

    response.assert_status_ok();

    response.json::<serde_json::Value>()["token"]
        .as_str()
        .unwrap()
        .to_string()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Shortens a URL and returns the assigned code.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server.post("/api/shorten").json(&json!({ "url": url })).await;

    response.assert_status(StatusCode::CREATED);

    response.json::<serde_json::Value>()["short_code"]
        .as_str()
        .unwrap()
        .to_string()
}
