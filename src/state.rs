//! Shared application state for the two services.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{AuthService, LinkService, UserService};
use crate::infrastructure::persistence::SqliteUserRepository;
use crate::infrastructure::store::MemoryLinkStore;

/// State injected into user directory handlers.
#[derive(Clone)]
pub struct UserApiState {
    pub user_service: Arc<UserService<SqliteUserRepository>>,
    pub auth_service: Arc<AuthService<SqliteUserRepository>>,
}

impl UserApiState {
    /// Wires repositories and services around a connection pool.
    pub fn new(pool: SqlitePool, token_secret: &str, token_ttl_hours: i64, bcrypt_cost: u32) -> Self {
        let repository = Arc::new(SqliteUserRepository::new(Arc::new(pool)));

        Self {
            user_service: Arc::new(UserService::new(repository.clone(), bcrypt_cost)),
            auth_service: Arc::new(AuthService::new(repository, token_secret, token_ttl_hours)),
        }
    }
}

/// State injected into shortener handlers.
#[derive(Clone)]
pub struct ShortenerState {
    pub link_service: Arc<LinkService<MemoryLinkStore>>,
}

impl ShortenerState {
    /// Builds the state around a fresh in-memory store.
    pub fn new(base_url: String) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(Arc::new(MemoryLinkStore::new()), base_url)),
        }
    }
}
