//! # linkdir
//!
//! Two small HTTP services sharing one codebase: a user directory with
//! token-authenticated CRUD, and a URL shortener backed by an in-memory
//! store.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and data-access traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence and the in-memory link store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Services
//!
//! - `user-api` - signup, login, and owner-only account management over a
//!   SQLite users table
//! - `shortlink` - URL shortening with click counting; entries live only
//!   for the process lifetime
//! - `admin` - operational CLI for database checks and sample data
//!
//! ## Quick Start
//!
//! ```bash
//! export TOKEN_SECRET="change-me"
//!
//! # Start the user directory
//! cargo run --bin user-api
//!
//! # Start the shortener
//! cargo run --bin shortlink
//! ```
//!
//! ## Configuration
//!
//! Each binary loads its configuration from environment variables via
//! [`config`] and passes it down explicitly. See the [`config`] module for
//! available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::{ShortenerState, UserApiState};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, LinkService, UserService};
    pub use crate::domain::entities::{NewUser, ShortLink, User, UserUpdate};
    pub use crate::error::AppError;
    pub use crate::state::{ShortenerState, UserApiState};
}
