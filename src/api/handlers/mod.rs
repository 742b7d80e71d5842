//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod redirect;
pub mod shorten;
pub mod stats;
pub mod users;

pub use auth::login_handler;
pub use health::{home_handler, shortener_health_handler, shortener_home_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    search_users_handler, update_user_handler,
};
